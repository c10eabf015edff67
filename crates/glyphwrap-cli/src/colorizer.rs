//! Terminal colorization for wrapped output
//!
//! Highlights the hyphens the wrapper inserted at forced breaks, so they can
//! be told apart from hyphens that were in the text.

use crossterm::style::{Color, Stylize};
use glyphwrap::{WrappedLine, HYPHEN};

/// Render wrapped lines, one per line, with forced-break hyphens in yellow
pub fn colorize_lines(lines: &[WrappedLine]) -> String {
    lines
        .iter()
        .map(|line| match line.text.strip_suffix(HYPHEN) {
            Some(fragment) if line.forced_break => {
                format!("{}{}", fragment, HYPHEN.to_string().with(Color::Yellow))
            }
            _ => line.text.clone(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render wrapped lines, one per line, without escape codes
pub fn plain_lines(lines: &[WrappedLine]) -> String {
    lines
        .iter()
        .map(WrappedLine::as_str)
        .collect::<Vec<_>>()
        .join("\n")
}
