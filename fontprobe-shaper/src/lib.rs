//! Headless measurement provider for the fontprobe resolution engine.
//!
//! This crate supplies the host side of fontprobe's measurement seam without
//! a browser:
//! - System font discovery and generic-family resolution via `fontdb`
//! - HarfBuzz text shaping via `rustybuzz` for advance-width measurement
//! - First-match-wins chain resolution mirroring renderer semantics
//!
//! # Example
//!
//! ```no_run
//! use fontprobe::FontProbe;
//! use fontprobe_shaper::ShapedTextProvider;
//!
//! # fn main() -> anyhow::Result<()> {
//! let probe = FontProbe::new(ShapedTextProvider::new()?);
//! println!("DejaVu Sans available: {}", probe.is_font_available("DejaVu Sans")?);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod provider;

// Re-export main types for convenience
pub use error::ProviderError;
pub use provider::ShapedTextProvider;
