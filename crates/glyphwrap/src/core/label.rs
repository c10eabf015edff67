//! Label base
//!
//! Shared state for display text labels: the font used for vertical metrics,
//! the 2-entry color palette, the text and its line spacing.

use std::fmt;

use tracing::debug;

use super::{max_display_width, Color, FontMetricsProvider, LineWrapper, Palette, TextError};

/// Palette index of the background color
pub const BACKGROUND_INDEX: usize = 0;
/// Palette index of the text color
pub const FOREGROUND_INDEX: usize = 1;

/// Default line spacing, as a multiple of the font height
pub const DEFAULT_LINE_SPACING: f32 = 1.25;

/// Kind of label built on top of [`LabelBase`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum LabelType {
    /// One tile per glyph
    #[default]
    Label,
    /// Text rendered into a single bitmap
    BitmapLabel,
}

impl fmt::Display for LabelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabelType::Label => write!(f, "label"),
            LabelType::BitmapLabel => write!(f, "bitmap_label"),
        }
    }
}

/// Base for display labels
///
/// # Example
/// ```
/// use glyphwrap::core::{Color, FixedMetrics, LabelBase, LabelType};
///
/// let mut label = LabelBase::new(FixedMetrics::new(12, 4), LabelType::Label);
/// assert_eq!(label.ascent_descent(), (12, 4));
/// assert_eq!(label.palette().len(), 2);
///
/// label.set_text("Hello wrapped world");
/// assert_eq!(label.wrapped_lines(8).unwrap(), vec!["Hello", "wrapped", "world"]);
/// ```
#[derive(Debug, Clone)]
pub struct LabelBase<F> {
    font: F,
    label_type: LabelType,
    palette: Palette,
    text: String,
    line_spacing: f32,
}

impl<F: FontMetricsProvider> LabelBase<F> {
    /// Create a label with a transparent background and white text
    pub fn new(font: F, label_type: LabelType) -> Self {
        let mut palette = Palette::new(2);
        let background = palette.make_transparent(BACKGROUND_INDEX);
        let foreground = palette.set(FOREGROUND_INDEX, Color::WHITE);
        debug_assert!(background.is_ok() && foreground.is_ok());

        Self {
            font,
            label_type,
            palette,
            text: String::new(),
            line_spacing: DEFAULT_LINE_SPACING,
        }
    }

    pub fn font(&self) -> &F {
        &self.font
    }

    pub fn label_type(&self) -> LabelType {
        self.label_type
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn ascent_descent(&self) -> (i32, i32) {
        self.font.ascent_descent()
    }

    pub fn ascent(&self) -> i32 {
        self.ascent_descent().0
    }

    pub fn descent(&self) -> i32 {
        self.ascent_descent().1
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Text color, `None` when transparent
    pub fn color(&self) -> Option<Color> {
        self.opaque_entry(FOREGROUND_INDEX)
    }

    pub fn set_color(&mut self, color: Option<Color>) {
        self.set_entry(FOREGROUND_INDEX, color);
    }

    /// Background color, `None` when transparent
    pub fn background_color(&self) -> Option<Color> {
        self.opaque_entry(BACKGROUND_INDEX)
    }

    pub fn set_background_color(&mut self, color: Option<Color>) {
        self.set_entry(BACKGROUND_INDEX, color);
    }

    pub fn line_spacing(&self) -> f32 {
        self.line_spacing
    }

    /// Set line spacing as a multiple of the font height
    pub fn set_line_spacing(&mut self, spacing: f32) -> Result<(), TextError> {
        if !spacing.is_finite() || spacing <= 0.0 {
            return Err(TextError::invalid_line_spacing(spacing));
        }
        self.line_spacing = spacing;
        Ok(())
    }

    /// Distance between consecutive baselines, truncated to whole units
    pub fn line_height(&self) -> i32 {
        let (ascent, descent) = self.ascent_descent();
        // Float to int casts saturate
        ((f64::from(ascent) + f64::from(descent)) * f64::from(self.line_spacing)) as i32
    }

    /// Wrap the label text to lines of at most `max_chars` characters
    pub fn wrapped_lines(&self, max_chars: usize) -> Result<Vec<String>, TextError> {
        let lines = LineWrapper::new(max_chars)?.wrap(&self.text);
        debug!(
            label_type = %self.label_type,
            line_count = lines.len(),
            "Wrapped label text"
        );
        Ok(lines)
    }

    /// Widest wrapped line, in terminal display columns
    pub fn max_line_columns(&self, max_chars: usize) -> Result<usize, TextError> {
        Ok(max_display_width(&self.wrapped_lines(max_chars)?))
    }

    fn opaque_entry(&self, index: usize) -> Option<Color> {
        match self.palette.is_transparent(index) {
            Ok(false) => self.palette.get(index),
            _ => None,
        }
    }

    fn set_entry(&mut self, index: usize, color: Option<Color>) {
        let result = match color {
            Some(color) => self
                .palette
                .set(index, color)
                .and_then(|_| self.palette.make_opaque(index)),
            None => self.palette.make_transparent(index),
        };
        // Label palettes always have both entries
        debug_assert!(result.is_ok(), "{:?}", result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FixedMetrics, Glyph, GlyphProbe, GlyphTable};

    fn label() -> LabelBase<FixedMetrics> {
        LabelBase::new(FixedMetrics::new(10, 2), LabelType::Label)
    }

    #[test]
    fn test_new_label_palette() {
        let label = label();
        assert_eq!(label.palette().len(), 2);
        assert_eq!(label.palette().is_transparent(BACKGROUND_INDEX), Ok(true));
        assert_eq!(label.color(), Some(Color::WHITE));
        assert_eq!(label.background_color(), None);
    }

    #[test]
    fn test_metrics_delegate_to_font() {
        let label = label();
        assert_eq!(label.ascent(), 10);
        assert_eq!(label.descent(), 2);

        let table: GlyphTable = [('M', Glyph::new(6, 9, 0)), ('j', Glyph::new(3, 8, -3))]
            .into_iter()
            .collect();
        let probed = LabelBase::new(GlyphProbe::new(table), LabelType::BitmapLabel);
        assert_eq!(probed.ascent_descent(), (9, 3));
        assert_eq!(probed.label_type(), LabelType::BitmapLabel);
    }

    #[test]
    fn test_colors_update_palette() {
        let mut label = label();
        label.set_background_color(Some(Color::from_hex(0x102030)));
        assert_eq!(label.background_color(), Some(Color::from_hex(0x102030)));
        assert_eq!(label.palette().is_transparent(BACKGROUND_INDEX), Ok(false));

        label.set_color(None);
        assert_eq!(label.color(), None);
        assert_eq!(label.palette().is_transparent(FOREGROUND_INDEX), Ok(true));
    }

    #[test]
    fn test_line_height() {
        let mut label = label();
        assert_eq!(label.line_spacing(), DEFAULT_LINE_SPACING);
        // 12 * 1.25
        assert_eq!(label.line_height(), 15);

        label.set_line_spacing(1.0).unwrap();
        assert_eq!(label.line_height(), 12);

        assert!(label.set_line_spacing(0.0).is_err());
        assert!(label.set_line_spacing(f32::NAN).is_err());
        assert_eq!(label.line_spacing(), 1.0);
    }

    #[test]
    fn test_line_height_saturates_on_extreme_metrics() {
        let label = LabelBase::new(FixedMetrics::new(i32::MAX, 1), LabelType::Label);
        assert_eq!(label.line_height(), i32::MAX);

        let label = LabelBase::new(FixedMetrics::new(i32::MIN, -1), LabelType::Label);
        assert_eq!(label.line_height(), i32::MIN);

        let table: GlyphTable = [('j', Glyph::new(3, 10, i32::MIN))].into_iter().collect();
        let probed = LabelBase::new(GlyphProbe::new(table), LabelType::Label);
        assert_eq!(probed.ascent_descent(), (0, i32::MAX));
        assert_eq!(probed.line_height(), i32::MAX);
    }

    #[test]
    fn test_both_palette_entries_update() {
        let mut label = label();
        label.set_color(Some(Color::BLACK));
        label.set_background_color(Some(Color::WHITE));
        assert_eq!(label.color(), Some(Color::BLACK));
        assert_eq!(label.background_color(), Some(Color::WHITE));
    }

    #[test]
    fn test_wrapped_lines() {
        let mut label = label();
        label.set_text("abcdefgh");
        assert_eq!(label.wrapped_lines(4).unwrap(), vec!["abc-", "def-", "gh"]);
        assert_eq!(label.max_line_columns(4).unwrap(), 4);
        assert!(label.wrapped_lines(1).is_err());
    }

    #[test]
    fn test_label_type_display() {
        assert_eq!(LabelType::Label.to_string(), "label");
        assert_eq!(LabelType::BitmapLabel.to_string(), "bitmap_label");
    }
}
