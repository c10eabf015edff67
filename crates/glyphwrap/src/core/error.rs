//! Core error types for text wrapping and label metrics
//!
//! This module defines the error type shared by the wrapper, the palette and the label base.

use thiserror::Error;

/// Core error types for wrapping and label configuration
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TextError {
    #[error("Invalid width: {max_chars} (lines must hold at least 2 characters)")]
    InvalidWidth { max_chars: usize },

    #[error("Palette index {index} out of range for palette of length {len}")]
    PaletteIndex { index: usize, len: usize },

    #[error("Invalid line spacing: {value}")]
    InvalidLineSpacing { value: f32 },
}

impl TextError {
    /// Create a new invalid width error
    pub fn invalid_width(max_chars: usize) -> Self {
        Self::InvalidWidth { max_chars }
    }

    /// Create a new palette index error
    pub fn palette_index(index: usize, len: usize) -> Self {
        Self::PaletteIndex { index, len }
    }

    /// Create a new line spacing error
    pub fn invalid_line_spacing(value: f32) -> Self {
        Self::InvalidLineSpacing { value }
    }
}
