//! Indexed color palette
//!
//! A fixed-size table of 24-bit RGB colors with per-entry transparency,
//! as used by display label widgets.

use std::fmt;
use std::str::FromStr;

use super::TextError;

/// 24-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Color(u32);

impl Color {
    pub const BLACK: Color = Color(0x000000);
    pub const WHITE: Color = Color(0xFFFFFF);

    /// Create a color from a `0xRRGGBB` value; bits above 24 are discarded
    pub const fn from_hex(value: u32) -> Self {
        Color(value & 0xFF_FFFF)
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    pub const fn hex(&self) -> u32 {
        self.0
    }

    pub const fn r(&self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn g(&self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn b(&self) -> u8 {
        self.0 as u8
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

impl FromStr for Color {
    type Err = String;

    /// Parse `#rrggbb`, `0xrrggbb` or bare `rrggbb`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix('#')
            .or_else(|| trimmed.strip_prefix("0x"))
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);

        if digits.len() != 6 {
            return Err(format!("Invalid color: {} (expected 6 hex digits)", s));
        }
        u32::from_str_radix(digits, 16)
            .map(Color)
            .map_err(|_| format!("Invalid color: {}", s))
    }
}

impl From<u32> for Color {
    fn from(value: u32) -> Self {
        Color::from_hex(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct Entry {
    color: Color,
    transparent: bool,
}

/// Fixed-length indexed color table
///
/// Entries start out black and opaque. The length never changes after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    entries: Vec<Entry>,
}

impl Palette {
    pub fn new(len: usize) -> Self {
        Self {
            entries: vec![Entry::default(); len],
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Color stored at `index`, regardless of transparency
    pub fn get(&self, index: usize) -> Option<Color> {
        self.entries.get(index).map(|entry| entry.color)
    }

    pub fn set(&mut self, index: usize, color: Color) -> Result<(), TextError> {
        self.entry_mut(index)?.color = color;
        Ok(())
    }

    pub fn make_transparent(&mut self, index: usize) -> Result<(), TextError> {
        self.entry_mut(index)?.transparent = true;
        Ok(())
    }

    pub fn make_opaque(&mut self, index: usize) -> Result<(), TextError> {
        self.entry_mut(index)?.transparent = false;
        Ok(())
    }

    pub fn is_transparent(&self, index: usize) -> Result<bool, TextError> {
        self.entries
            .get(index)
            .map(|entry| entry.transparent)
            .ok_or_else(|| TextError::palette_index(index, self.len()))
    }

    /// Iterate over `(color, transparent)` pairs in index order
    pub fn iter(&self) -> impl Iterator<Item = (Color, bool)> + '_ {
        self.entries
            .iter()
            .map(|entry| (entry.color, entry.transparent))
    }

    fn entry_mut(&mut self, index: usize) -> Result<&mut Entry, TextError> {
        let len = self.entries.len();
        self.entries
            .get_mut(index)
            .ok_or_else(|| TextError::palette_index(index, len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_components() {
        let color = Color::rgb(0x12, 0x34, 0x56);
        assert_eq!(color.hex(), 0x123456);
        assert_eq!((color.r(), color.g(), color.b()), (0x12, 0x34, 0x56));
        assert_eq!(Color::from_hex(0xFF123456), Color::from_hex(0x123456));
    }

    #[test]
    fn test_color_parsing() {
        assert_eq!(Color::from_str("#ff8000").unwrap(), Color::from_hex(0xFF8000));
        assert_eq!(Color::from_str("0x00FF00").unwrap(), Color::from_hex(0x00FF00));
        assert_eq!(Color::from_str("0000ff").unwrap(), Color::from_hex(0x0000FF));
        assert!(Color::from_str("#fff").is_err());
        assert!(Color::from_str("#gggggg").is_err());
    }

    #[test]
    fn test_color_display() {
        assert_eq!(Color::from_hex(0xFF8000).to_string(), "#ff8000");
        assert_eq!(Color::BLACK.to_string(), "#000000");
    }

    #[test]
    fn test_palette_fixed_length() {
        let mut palette = Palette::new(2);
        assert_eq!(palette.len(), 2);
        assert_eq!(palette.get(0), Some(Color::BLACK));
        assert_eq!(palette.get(2), None);

        assert!(palette.set(1, Color::WHITE).is_ok());
        assert_eq!(palette.get(1), Some(Color::WHITE));
        assert_eq!(
            palette.set(2, Color::WHITE),
            Err(TextError::PaletteIndex { index: 2, len: 2 })
        );
        assert_eq!(palette.len(), 2);
    }

    #[test]
    fn test_palette_transparency() {
        let mut palette = Palette::new(2);
        assert_eq!(palette.is_transparent(0), Ok(false));

        palette.make_transparent(0).unwrap();
        assert_eq!(palette.is_transparent(0), Ok(true));
        palette.make_opaque(0).unwrap();
        assert_eq!(palette.is_transparent(0), Ok(false));

        assert!(palette.make_transparent(3).is_err());
        assert!(palette.is_transparent(3).is_err());
    }

    #[test]
    fn test_palette_iter() {
        let mut palette = Palette::new(2);
        palette.set(1, Color::WHITE).unwrap();
        palette.make_transparent(0).unwrap();
        let entries: Vec<_> = palette.iter().collect();
        assert_eq!(entries, vec![(Color::BLACK, true), (Color::WHITE, false)]);
    }
}
