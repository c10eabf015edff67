//! Font metric providers
//!
//! Labels only need a font's ascent and descent. Fonts come in two flavors:
//!
//! - [`FixedMetrics`]: the font knows its own ascent/descent and they are used verbatim.
//! - [`GlyphProbe`]: the font only exposes per-glyph metrics, so a few reference
//!   glyphs are measured to estimate the extremes.
//!
//! The flavor is chosen when the font is built. [`FontSource`] holds either one.

use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, trace};

/// Reference glyphs probed for ascent and descent
///
/// `M` and `'` reach the ascender line, `j` reaches below the baseline, and
/// the space is present in nearly every font.
pub const PROBE_GLYPHS: &str = "M j'";

/// Capability to report font-wide vertical metrics, in font units
pub trait FontMetricsProvider {
    /// Return `(ascent, descent)`
    fn ascent_descent(&self) -> (i32, i32);

    /// Distance above the baseline
    fn ascent(&self) -> i32 {
        self.ascent_descent().0
    }

    /// Distance below the baseline
    fn descent(&self) -> i32 {
        self.ascent_descent().1
    }
}

impl<F: FontMetricsProvider + ?Sized> FontMetricsProvider for &F {
    fn ascent_descent(&self) -> (i32, i32) {
        (**self).ascent_descent()
    }
}

impl<F: FontMetricsProvider + ?Sized> FontMetricsProvider for Box<F> {
    fn ascent_descent(&self) -> (i32, i32) {
        (**self).ascent_descent()
    }
}

/// Metrics of a single rendered glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Glyph {
    pub width: u32,
    pub height: i32,
    /// Horizontal offset of the bitmap from the pen position
    pub dx: i32,
    /// Vertical offset of the bitmap bottom from the baseline; negative for descenders
    pub dy: i32,
    /// Pen advance after this glyph
    pub shift_x: i32,
}

impl Glyph {
    /// Create a glyph with the given size and vertical offset
    pub fn new(width: u32, height: i32, dy: i32) -> Self {
        Self {
            width,
            height,
            dx: 0,
            dy,
            shift_x: i32::try_from(width).unwrap_or(i32::MAX),
        }
    }

    /// Height reached above the baseline
    pub fn ascender(&self) -> i32 {
        self.height.saturating_add(self.dy)
    }

    /// Depth reached below the baseline
    pub fn descender(&self) -> i32 {
        self.dy.saturating_neg()
    }
}

/// Source of per-character glyph metrics
pub trait GlyphSource {
    /// Look up the glyph for a character code, if the font has one
    fn get_glyph(&self, code: u32) -> Option<Glyph>;

    /// Make the glyphs for `chars` available to [`GlyphSource::get_glyph`]
    ///
    /// Fonts that hold every glyph up front keep this default no-op.
    fn load_glyphs(&mut self, _chars: &str) {}
}

/// Font that reports its own ascent and descent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct FixedMetrics {
    pub ascent: i32,
    pub descent: i32,
}

impl FixedMetrics {
    pub fn new(ascent: i32, descent: i32) -> Self {
        Self { ascent, descent }
    }
}

impl FontMetricsProvider for FixedMetrics {
    fn ascent_descent(&self) -> (i32, i32) {
        (self.ascent, self.descent)
    }
}

/// Font whose ascent and descent are measured from [`PROBE_GLYPHS`]
///
/// The probe glyphs are preloaded once at construction.
///
/// # Example
/// ```
/// use glyphwrap::core::{FontMetricsProvider, Glyph, GlyphProbe, GlyphTable};
///
/// let mut table = GlyphTable::new();
/// table.insert('M', Glyph::new(6, 8, 0));
/// table.insert('j', Glyph::new(3, 9, -2));
///
/// let font = GlyphProbe::new(table);
/// assert_eq!(font.ascent_descent(), (8, 2));
/// ```
#[derive(Debug, Clone)]
pub struct GlyphProbe<G> {
    source: G,
}

impl<G: GlyphSource> GlyphProbe<G> {
    pub fn new(mut source: G) -> Self {
        source.load_glyphs(PROBE_GLYPHS);
        Self { source }
    }

    /// Borrow the underlying glyph source
    pub fn source(&self) -> &G {
        &self.source
    }

    pub fn into_inner(self) -> G {
        self.source
    }
}

impl<G: GlyphSource> FontMetricsProvider for GlyphProbe<G> {
    fn ascent_descent(&self) -> (i32, i32) {
        let mut ascender_max = 0;
        let mut descender_max = 0;

        for c in PROBE_GLYPHS.chars() {
            match self.source.get_glyph(c as u32) {
                Some(glyph) => {
                    ascender_max = ascender_max.max(glyph.ascender());
                    descender_max = descender_max.max(glyph.descender());
                }
                None => trace!(glyph = %c, "Probe glyph missing from font"),
            }
        }

        debug!(ascent = ascender_max, descent = descender_max, "Probed font metrics");
        (ascender_max, descender_max)
    }
}

/// Font metrics chosen at load time
#[derive(Debug, Clone)]
pub enum FontSource<G> {
    Metrics(FixedMetrics),
    Glyphs(GlyphProbe<G>),
}

impl<G: GlyphSource> FontSource<G> {
    /// Whether the font reports its own metrics
    pub fn is_metrics_aware(&self) -> bool {
        matches!(self, FontSource::Metrics(_))
    }
}

impl<G: GlyphSource> FontMetricsProvider for FontSource<G> {
    fn ascent_descent(&self) -> (i32, i32) {
        match self {
            FontSource::Metrics(metrics) => metrics.ascent_descent(),
            FontSource::Glyphs(probe) => probe.ascent_descent(),
        }
    }
}

impl<G> From<FixedMetrics> for FontSource<G> {
    fn from(metrics: FixedMetrics) -> Self {
        FontSource::Metrics(metrics)
    }
}

impl<G> From<GlyphProbe<G>> for FontSource<G> {
    fn from(probe: GlyphProbe<G>) -> Self {
        FontSource::Glyphs(probe)
    }
}

/// In-memory glyph table
///
/// An eager table serves every inserted glyph. A lazy table, like a bitmap font
/// read from disk on demand, serves only glyphs passed to `load_glyphs`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlyphTable {
    glyphs: BTreeMap<u32, Glyph>,
    loaded: Option<BTreeSet<u32>>,
}

impl GlyphTable {
    /// Create an eager table
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a lazy table that requires glyph preloading
    pub fn lazy() -> Self {
        Self {
            glyphs: BTreeMap::new(),
            loaded: Some(BTreeSet::new()),
        }
    }

    pub fn insert(&mut self, c: char, glyph: Glyph) {
        self.glyphs.insert(c as u32, glyph);
    }

    pub fn is_lazy(&self) -> bool {
        self.loaded.is_some()
    }

    /// Whether the glyph for `c` is currently served
    pub fn is_loaded(&self, c: char) -> bool {
        let code = c as u32;
        match &self.loaded {
            Some(loaded) => loaded.contains(&code),
            None => self.glyphs.contains_key(&code),
        }
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

impl FromIterator<(char, Glyph)> for GlyphTable {
    fn from_iter<I: IntoIterator<Item = (char, Glyph)>>(iter: I) -> Self {
        let mut table = GlyphTable::new();
        for (c, glyph) in iter {
            table.insert(c, glyph);
        }
        table
    }
}

impl GlyphSource for GlyphTable {
    fn get_glyph(&self, code: u32) -> Option<Glyph> {
        if let Some(loaded) = &self.loaded {
            if !loaded.contains(&code) {
                return None;
            }
        }
        self.glyphs.get(&code).copied()
    }

    fn load_glyphs(&mut self, chars: &str) {
        let glyphs = &self.glyphs;
        if let Some(loaded) = &mut self.loaded {
            loaded.extend(
                chars
                    .chars()
                    .map(|c| c as u32)
                    .filter(|code| glyphs.contains_key(code)),
            );
        }
    }
}
