//! Glyphwrap - word-break text wrapping for display labels
//!
//! Wraps text into lines of a maximum character count, hyphenating words that
//! do not fit on a line, and exposes the font metrics a label needs for
//! vertical layout.
//!
//! # Quick Start
//!
//! ```rust
//! use glyphwrap::wrap_text_to_lines;
//!
//! let lines = wrap_text_to_lines("hello world", 80).unwrap();
//! assert_eq!(lines, vec!["hello world"]);
//!
//! let lines = wrap_text_to_lines("abcdefgh", 4).unwrap();
//! assert_eq!(lines, vec!["abc-", "def-", "gh"]);
//! ```
//!
//! # Labels
//!
//! ```rust
//! use glyphwrap::prelude::*;
//!
//! let mut table = GlyphTable::new();
//! table.insert('M', Glyph::new(6, 9, 0));
//! table.insert('j', Glyph::new(3, 10, -3));
//!
//! let label = LabelBase::new(GlyphProbe::new(table), LabelType::Label);
//! assert_eq!(label.ascent_descent(), (9, 3));
//! assert_eq!(label.background_color(), None);
//! ```

pub mod core;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use core::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::core::{
        wrap_text_to_lines, Color, FixedMetrics, FontMetricsProvider, FontSource, Glyph,
        GlyphProbe, GlyphSource, GlyphTable, LabelBase, LabelType, LineWrapper, Palette,
        TextError,
    };
}
