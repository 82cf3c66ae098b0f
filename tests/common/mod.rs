//! Shared integration test helpers for fontprobe.
//!
//! Provides `FakeRenderer`, a scripted in-memory [`MeasurementProvider`]
//! emulating a renderer with a configurable set of installed fonts. Chain
//! entries resolve first-match-wins against the installed set; unresolvable
//! chains fall through to the default family, exactly like a real renderer.
//!
//! # Usage
//!
//! ```ignore
//! mod common;
//! use common::FakeRenderer;
//! ```
//!
//! Note: Rust integration tests use `mod common;` (not `use`) to bring in
//! helpers from `tests/common/mod.rs`. The `#[allow(dead_code)]` attributes
//! suppress warnings when only a subset of helpers are used per file.

#![allow(dead_code)]

use std::collections::HashMap;

use anyhow::Result;
use fontprobe::{GlyphSize, MeasurementProvider, test_character_segments};

/// Scripted per-character metrics for one installed font.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontMetrics {
    pub widths: Vec<u32>,
    pub height: u32,
}

impl FontMetrics {
    /// Every test character renders `width` pixels wide.
    pub fn uniform(width: u32, height: u32) -> Self {
        Self {
            widths: test_character_segments().map(|_| width).collect(),
            height,
        }
    }

    /// Adjust one character's width; hands tests a way to build fonts that
    /// agree in total width but differ per character.
    pub fn with_width_delta(mut self, index: usize, delta: i64) -> Self {
        self.widths[index] = (i64::from(self.widths[index]) + delta) as u32;
        self
    }

    pub fn aggregate(&self) -> GlyphSize {
        GlyphSize::new(self.widths.iter().sum(), self.height)
    }
}

/// In-memory renderer with a fixed font catalogue.
pub struct FakeRenderer {
    installed: HashMap<String, FontMetrics>,
    default_family: String,
}

impl FakeRenderer {
    /// Renderer whose default font is `default_family` with `metrics`. The
    /// default is implicitly installed.
    pub fn new(default_family: &str, metrics: FontMetrics) -> Self {
        let mut renderer = Self {
            installed: HashMap::new(),
            default_family: default_family.to_string(),
        };
        renderer.install(default_family, metrics);
        renderer
    }

    /// A typical environment: distinct serif and sans-serif generics, the
    /// default font being a sans-serif with Arial-identical geometry.
    pub fn typical_sans_environment() -> Self {
        let sans = FontMetrics::uniform(60, 120);
        let serif = FontMetrics::uniform(64, 124);
        let mut renderer = Self::new("Arial", sans.clone());
        renderer.install("sans-serif", sans);
        renderer.install("serif", serif);
        renderer.install("monospace", FontMetrics::uniform(58, 118));
        renderer
    }

    pub fn install(&mut self, family: &str, metrics: FontMetrics) {
        self.installed.insert(normalize(family), metrics);
    }

    /// First installed entry of the chain wins; a chain with no installed
    /// entry renders with the default font.
    fn resolve_chain(&self, font_family: &str) -> &FontMetrics {
        font_family
            .split(',')
            .map(normalize)
            .find_map(|entry| self.installed.get(&entry))
            .unwrap_or_else(|| &self.installed[&normalize(&self.default_family)])
    }
}

fn normalize(entry: &str) -> String {
    entry
        .chars()
        .filter(|c| !matches!(*c, '\'' | '"'))
        .collect::<String>()
        .trim()
        .to_lowercase()
}

impl MeasurementProvider for FakeRenderer {
    type Target = str;

    fn measure_single(&self, font_family: &str) -> Result<GlyphSize> {
        Ok(self.resolve_chain(font_family).aggregate())
    }

    fn measure_multiple(&self, font_family: &str) -> Result<Vec<GlyphSize>> {
        let metrics = self.resolve_chain(font_family);
        Ok(metrics
            .widths
            .iter()
            .map(|&w| GlyphSize::new(w, metrics.height))
            .collect())
    }

    fn computed_font_family(&self, target: &str) -> Result<String> {
        // No style cascade to consult: the target IS the author value.
        Ok(target.to_string())
    }

    fn default_font_family(&self) -> Result<String> {
        Ok(self.default_family.clone())
    }
}
