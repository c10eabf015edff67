//! Font description files
//!
//! A font file is JSON in one of two shapes. Fonts that know their metrics:
//!
//! ```json
//! { "ascent": 12, "descent": 4 }
//! ```
//!
//! Fonts that only describe glyphs, probed for their extremes:
//!
//! ```json
//! { "lazy": true, "glyphs": { "M": { "width": 6, "height": 9, "dy": 0 } } }
//! ```
//!
//! A file carrying both `ascent`/`descent` and `glyphs` is treated as metrics-aware.

use anyhow::{anyhow, Result};
use glyphwrap::{FixedMetrics, FontSource, Glyph, GlyphProbe, GlyphTable};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum FontFile {
    Metrics {
        ascent: i32,
        descent: i32,
    },
    Glyphs {
        #[serde(default)]
        lazy: bool,
        glyphs: BTreeMap<String, GlyphSpec>,
    },
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct GlyphSpec {
    #[serde(default)]
    pub width: u32,
    pub height: i32,
    #[serde(default)]
    pub dx: i32,
    pub dy: i32,
    /// Defaults to the glyph width
    #[serde(default)]
    pub shift_x: Option<i32>,
}

impl From<&GlyphSpec> for Glyph {
    fn from(spec: &GlyphSpec) -> Self {
        let glyph = Glyph::new(spec.width, spec.height, spec.dy);
        Glyph {
            dx: spec.dx,
            shift_x: spec.shift_x.unwrap_or(glyph.shift_x),
            ..glyph
        }
    }
}

impl FontFile {
    /// Read and parse a font file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read font file '{}': {}", path.display(), e))?;
        Self::parse(&content)
            .map_err(|e| anyhow!("Invalid font file '{}': {}", path.display(), e))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Build the metrics provider this file describes
    pub fn into_font(self) -> Result<FontSource<GlyphTable>> {
        match self {
            FontFile::Metrics { ascent, descent } => {
                debug!(ascent, descent, "Loaded metrics-aware font");
                Ok(FixedMetrics::new(ascent, descent).into())
            }
            FontFile::Glyphs { lazy, glyphs } => {
                let mut table = if lazy {
                    GlyphTable::lazy()
                } else {
                    GlyphTable::new()
                };
                for (key, spec) in &glyphs {
                    let mut chars = key.chars();
                    let c = match (chars.next(), chars.next()) {
                        (Some(c), None) => c,
                        _ => {
                            return Err(anyhow!(
                                "Glyph key '{}' must be a single character",
                                key
                            ))
                        }
                    };
                    table.insert(c, Glyph::from(spec));
                }
                debug!(glyph_count = table.len(), lazy, "Loaded glyph font");
                Ok(GlyphProbe::new(table).into())
            }
        }
    }
}
