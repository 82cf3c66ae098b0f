//! The measurement seam between the resolution engine and its host.
//!
//! The core never creates or styles a rendering surface itself. Everything it
//! knows about glyph geometry comes through [`MeasurementProvider`], which a
//! host implements on top of whatever it has: a browser DOM, a canvas
//! text-metrics API, or a headless shaping stack (see the `fontprobe-shaper`
//! crate for the latter).

use anyhow::Result;
use unicode_segmentation::UnicodeSegmentation;

/// Characters rendered for every size comparison.
///
/// Mixes lowercase, uppercase, digits, punctuation, and accented/symbol
/// characters so that two different fonts are very unlikely to produce the
/// same footprint for the whole string by accident.
pub const TEST_CHARACTERS: &str = concat!(
    "abcdefghijklmnopqrstuvwxyz",
    "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
    "01234567890",
    "@#&é'(§è!çà)°-_^¨$*`£ù%=+:/;.,?",
    "•ë‘{¶«¡Çø}—€ôÙ@≠÷…∞",
);

/// The grapheme clusters of [`TEST_CHARACTERS`], in order.
///
/// Per-character measurement walks this sequence, one provider call per
/// cluster. The iterator is restartable and allocation-free; providers and
/// the comparator share it so both sides agree on what "one character" means.
pub fn test_character_segments() -> impl Iterator<Item = &'static str> {
    TEST_CHARACTERS.graphemes(true)
}

/// One measured footprint, in whole pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GlyphSize {
    /// Advance width of the rendered run
    pub width: u32,
    /// Line height of the rendered run
    pub height: u32,
}

impl GlyphSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// The measured footprint of [`TEST_CHARACTERS`] under one font-family value.
///
/// Two signatures are equal iff they were built the same way and every
/// component matches exactly. An aggregate signature never equals a
/// per-character one, even when the totals agree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SizeSignature {
    /// One measurement covering the whole test string. Fast, but offsetting
    /// per-glyph width differences can cancel out (+1px here, -1px there).
    Aggregate(GlyphSize),
    /// One measurement per grapheme cluster of the test string, in order.
    /// Strictly more discriminating, at one provider call per cluster.
    PerCharacter(Vec<GlyphSize>),
}

/// Host-side glyph measurement.
///
/// Implementations own the full lifecycle of whatever rendering context they
/// use: creation, styling, text injection, size readback, teardown. A context
/// must be released on every path, including measurement failure; the core
/// holds no context across calls and cannot clean one up.
///
/// All methods are synchronous and assumed deterministic for a fixed
/// environment; the core never retries. Errors mean the environment itself
/// cannot measure (no surface, no usable font data) and propagate unmodified.
pub trait MeasurementProvider {
    /// Host-specific handle for "the thing whose font we are resolving": a
    /// DOM element, a styled text run, or just the author font-family string
    /// for hosts without a style cascade.
    type Target: ?Sized;

    /// Measure [`TEST_CHARACTERS`] as one run under `font_family`.
    fn measure_single(&self, font_family: &str) -> Result<GlyphSize>;

    /// Measure each grapheme cluster of [`TEST_CHARACTERS`] under
    /// `font_family`, in the order of [`test_character_segments`].
    fn measure_multiple(&self, font_family: &str) -> Result<Vec<GlyphSize>>;

    /// The computed font-family chain currently applied to `target`.
    fn computed_font_family(&self, target: &Self::Target) -> Result<String>;

    /// The family rendered when no author styling applies at all.
    ///
    /// Must be computed fresh per call (environment defaults can change with
    /// zoom/DPI); the core never caches it across calls.
    fn default_font_family(&self) -> Result<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_characters_cover_required_classes() {
        assert!(TEST_CHARACTERS.contains("abc"));
        assert!(TEST_CHARACTERS.contains("XYZ"));
        assert!(TEST_CHARACTERS.contains("012"));
        assert!(TEST_CHARACTERS.contains('?'));
        assert!(TEST_CHARACTERS.contains('é'));
        assert!(TEST_CHARACTERS.contains('∞'));
    }

    #[test]
    fn test_segments_match_string_and_restart() {
        let first: Vec<&str> = test_character_segments().collect();
        let second: Vec<&str> = test_character_segments().collect();
        assert_eq!(first, second);
        assert_eq!(first.concat(), TEST_CHARACTERS);
    }

    #[test]
    fn test_signature_modes_never_compare_equal() {
        let size = GlyphSize::new(100, 20);
        assert_ne!(
            SizeSignature::Aggregate(size),
            SizeSignature::PerCharacter(vec![size])
        );
    }
}
