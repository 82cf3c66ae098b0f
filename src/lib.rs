//! Font resolution and availability testing by measured glyph geometry.
//!
//! Untrusted code cannot ask a platform for its installed font list, but it
//! can usually render text and read the result's size. This crate turns that
//! into two answers:
//! - which entry of a CSS-style font-family chain is actually rendering
//!   ([`FontProbe::find_used_font`])
//! - whether a named font is genuinely installed, not silently substituted
//!   or fallen through to a generic family
//!   ([`FontProbe::is_font_available`])
//!
//! # Architecture
//!
//! The engine is pure logic over a [`MeasurementProvider`] trait the host
//! implements: create an isolated rendering context, apply a font-family
//! value, inject the canonical test string, report the size. The companion
//! `fontprobe-shaper` crate provides a headless implementation on top of
//! `fontdb` and `rustybuzz`; a browser host would implement the same trait
//! over the DOM.
//!
//! All calls are synchronous and blocking. The engine keeps no state across
//! calls beyond its immutable substitution table and test string, and it
//! never caches the environment default font.
//!
//! # Example
//!
//! ```ignore
//! use fontprobe::FontProbe;
//! use fontprobe_shaper::ShapedTextProvider;
//!
//! let probe = FontProbe::new(ShapedTextProvider::new()?);
//! if let Some(used) = probe.find_used_font("Helvetica, Arial, sans-serif")? {
//!     println!("rendered by {used}");
//! }
//! assert!(!probe.is_font_available("Totally Fake Font Name")?);
//! ```

pub mod comparator;
pub mod family;
pub mod probe;
pub mod provider;

// Re-export main types for convenience
pub use comparator::{ComparisonMode, SizeComparator};
pub use family::{FamilyChain, FamilyName, GenericFamily, has_same_name};
pub use probe::{FontProbe, SUBSTITUTION_RULES, SubstitutionRule};
pub use provider::{
    GlyphSize, MeasurementProvider, SizeSignature, TEST_CHARACTERS, test_character_segments,
};
