//! Word-break text wrapping
//!
//! Splits text into lines of at most `max_chars` characters, breaking on spaces
//! and force-splitting words that cannot fit on any line with a hyphen marker.

use tracing::{debug, span, trace, Level};
use unicode_width::UnicodeWidthStr;

use super::TextError;

/// Marker appended to every forced break inside an oversized word
pub const HYPHEN: char = '-';

/// Narrowest width that leaves room for one character plus a hyphen
pub const MIN_WIDTH: usize = 2;

/// One output line of the wrapper
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WrappedLine {
    pub text: String,
    /// The line ends in an inserted [`HYPHEN`] splitting an oversized word
    pub forced_break: bool,
}

impl WrappedLine {
    fn new(text: String) -> Self {
        Self {
            text,
            forced_break: false,
        }
    }

    fn hyphenated(mut fragment: String) -> Self {
        fragment.push(HYPHEN);
        Self {
            text: fragment,
            forced_break: true,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

/// Greedy word wrapper with hyphenation for over-long words
///
/// Widths are counted in characters (Unicode scalar values), not display columns.
///
/// # Example
/// ```
/// use glyphwrap::core::LineWrapper;
///
/// let wrapper = LineWrapper::new(4).unwrap();
/// assert_eq!(wrapper.wrap("abcdefgh"), vec!["abc-", "def-", "gh"]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineWrapper {
    max_chars: usize,
}

impl LineWrapper {
    /// Create a wrapper producing lines of at most `max_chars` characters
    ///
    /// Returns [`TextError::InvalidWidth`] when `max_chars` is below [`MIN_WIDTH`].
    pub fn new(max_chars: usize) -> Result<Self, TextError> {
        if max_chars < MIN_WIDTH {
            return Err(TextError::invalid_width(max_chars));
        }
        Ok(Self { max_chars })
    }

    /// Maximum number of characters per line, hyphen marker included
    pub fn max_chars(&self) -> usize {
        self.max_chars
    }

    /// Wrap `text` into lines
    ///
    /// Line feeds and carriage returns are deleted, not treated as breaks.
    /// Runs of spaces are kept as empty words. Empty input yields no lines.
    pub fn wrap(&self, text: &str) -> Vec<String> {
        self.wrap_lines(text)
            .into_iter()
            .map(|line| line.text)
            .collect()
    }

    /// Wrap `text`, keeping track of which lines end in a forced break
    pub fn wrap_lines(&self, text: &str) -> Vec<WrappedLine> {
        let wrap_span = span!(
            Level::DEBUG,
            "wrap_text",
            input_len = text.len(),
            max_chars = self.max_chars
        );
        let _enter = wrap_span.enter();

        let cleaned: String = text.chars().filter(|c| !matches!(c, '\n' | '\r')).collect();
        if cleaned.is_empty() {
            trace!("Empty input, nothing to wrap");
            return Vec::new();
        }

        let mut lines = Vec::new();
        let mut current_line = String::new();
        let mut current_len = 0;

        for word in cleaned.split(' ') {
            let word_len = word.chars().count();

            if word_len > self.max_chars {
                // Oversized word: flush what we have, then force-split
                if !current_line.is_empty() {
                    lines.push(WrappedLine::new(std::mem::take(&mut current_line)));
                }
                let (broken, tail) = self.hyphenate(word);
                trace!(word_len, forced_breaks = broken.len(), "Hyphenated oversized word");
                lines.extend(broken);
                current_len = tail.chars().count();
                current_line = tail;
                continue;
            }

            if current_len + 1 + word_len <= self.max_chars {
                // Word fits on current line
                current_line.push(' ');
                current_line.push_str(word);
                current_len += 1 + word_len;
            } else {
                // Start new line
                if !current_line.is_empty() {
                    lines.push(WrappedLine::new(std::mem::take(&mut current_line)));
                }
                current_line = word.to_string();
                current_len = word_len;
            }
        }

        if !current_line.is_empty() {
            lines.push(WrappedLine::new(current_line));
        }

        // The first word always gets a separator prepended
        if let Some(first) = lines.first_mut() {
            if first.text.starts_with(' ') {
                first.text.remove(0);
                if first.text.is_empty() {
                    lines.remove(0);
                }
            }
        }

        debug!(line_count = lines.len(), "Wrapped text");
        lines
    }

    /// Split an oversized word into hyphenated lines plus the unhyphenated tail
    fn hyphenate(&self, word: &str) -> (Vec<WrappedLine>, String) {
        let chars: Vec<char> = word.chars().collect();
        let mut pieces: Vec<String> = chars
            .chunks(self.max_chars - 1)
            .map(|chunk| chunk.iter().collect())
            .collect();
        let tail = pieces.pop().unwrap_or_default();

        let broken = pieces.into_iter().map(WrappedLine::hyphenated).collect();
        (broken, tail)
    }
}

/// Wrap text to lines of at most `max_chars` characters, breaking on spaces.
///
/// Words longer than `max_chars` are split into chunks of `max_chars - 1`
/// characters, each completed chunk ending with a `-`. The last chunk keeps
/// accumulating the following words.
///
/// # Example
/// ```
/// use glyphwrap::core::wrap_text_to_lines;
///
/// let lines = wrap_text_to_lines("This is a long label", 10).unwrap();
/// assert_eq!(lines, vec!["This is a", "long label"]);
/// ```
pub fn wrap_text_to_lines(text: &str, max_chars: usize) -> Result<Vec<String>, TextError> {
    Ok(LineWrapper::new(max_chars)?.wrap(text))
}

/// Widest line in terminal display columns
///
/// Wide characters (e.g. CJK) count as two columns. Returns 0 for no lines.
pub fn max_display_width<S: AsRef<str>>(lines: &[S]) -> usize {
    lines
        .iter()
        .map(|line| UnicodeWidthStr::width(line.as_ref()))
        .max()
        .unwrap_or(0)
}
