//! Size comparison: the atomic primitive everything else builds on.
//!
//! "Do these two font-family values render identically?" is answered by
//! building a [`SizeSignature`] for each and comparing structurally. The two
//! construction modes trade speed against discrimination; both share the same
//! `is_equal` contract.

use anyhow::Result;

use crate::provider::{MeasurementProvider, SizeSignature};

/// How a signature is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComparisonMode {
    /// One measurement of the whole test string. One provider call per
    /// family, but offsetting per-glyph width differences can cancel out.
    #[default]
    Aggregate,
    /// One measurement per grapheme cluster. Strictly more discriminating;
    /// cost is proportional to the test string length.
    PerCharacter,
}

/// Compares font-family values by rendered size through a provider.
#[derive(Debug, Clone, Copy)]
pub struct SizeComparator<'a, P> {
    provider: &'a P,
    mode: ComparisonMode,
}

impl<'a, P: MeasurementProvider> SizeComparator<'a, P> {
    pub fn new(provider: &'a P, mode: ComparisonMode) -> Self {
        Self { provider, mode }
    }

    pub fn mode(&self) -> ComparisonMode {
        self.mode
    }

    /// Build the signature for one font-family value.
    pub fn signature(&self, font_family: &str) -> Result<SizeSignature> {
        match self.mode {
            ComparisonMode::Aggregate => self
                .provider
                .measure_single(font_family)
                .map(SizeSignature::Aggregate),
            ComparisonMode::PerCharacter => self
                .provider
                .measure_multiple(font_family)
                .map(SizeSignature::PerCharacter),
        }
    }

    /// True iff both values produce structurally identical signatures.
    ///
    /// Reflexive and symmetric for a deterministic provider. Errors only on
    /// environment failure (the provider could not measure).
    pub fn is_equal(&self, family_a: &str, family_b: &str) -> Result<bool> {
        Ok(self.signature(family_a)? == self.signature(family_b)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::{GlyphSize, test_character_segments};
    use std::collections::HashMap;

    /// Minimal provider: each known family renders with fixed per-character
    /// widths; unknown families fall back to the default family's widths.
    struct StubProvider {
        fonts: HashMap<String, Vec<u32>>,
        default: String,
    }

    impl StubProvider {
        fn new(default: &str) -> Self {
            let mut stub = Self {
                fonts: HashMap::new(),
                default: default.to_string(),
            };
            stub.install(default);
            stub
        }

        fn install(&mut self, family: &str) {
            let base = 60 + self.fonts.len() as u32;
            let widths: Vec<u32> = test_character_segments().map(|_| base).collect();
            self.fonts.insert(family.to_lowercase(), widths);
        }

        fn widths_for(&self, font_family: &str) -> &[u32] {
            font_family
                .split(',')
                .map(|entry| entry.trim().trim_matches('\'').to_lowercase())
                .find_map(|entry| self.fonts.get(&entry))
                .unwrap_or_else(|| &self.fonts[&self.default.to_lowercase()])
        }
    }

    impl MeasurementProvider for StubProvider {
        type Target = str;

        fn measure_single(&self, font_family: &str) -> Result<GlyphSize> {
            let widths = self.widths_for(font_family);
            Ok(GlyphSize::new(widths.iter().sum(), 120))
        }

        fn measure_multiple(&self, font_family: &str) -> Result<Vec<GlyphSize>> {
            Ok(self
                .widths_for(font_family)
                .iter()
                .map(|&w| GlyphSize::new(w, 120))
                .collect())
        }

        fn computed_font_family(&self, target: &str) -> Result<String> {
            Ok(target.to_string())
        }

        fn default_font_family(&self) -> Result<String> {
            Ok(self.default.clone())
        }
    }

    #[test]
    fn test_is_equal_reflexive_and_symmetric() {
        let mut stub = StubProvider::new("Arial");
        stub.install("Georgia");
        for mode in [ComparisonMode::Aggregate, ComparisonMode::PerCharacter] {
            let cmp = SizeComparator::new(&stub, mode);
            assert!(cmp.is_equal("Arial", "Arial").unwrap());
            assert!(cmp.is_equal("Georgia", "Georgia").unwrap());
            assert_eq!(
                cmp.is_equal("Arial", "Georgia").unwrap(),
                cmp.is_equal("Georgia", "Arial").unwrap()
            );
        }
    }

    #[test]
    fn test_aggregate_mode_can_cancel_out() {
        let mut stub = StubProvider::new("Arial");
        // Same total width as Arial, but the first two characters trade a
        // pixel. Only per-character mode can tell them apart.
        stub.install("Arial Twin");
        let arial = stub.fonts["arial"].clone();
        let twin = stub.fonts.get_mut("arial twin").unwrap();
        twin.copy_from_slice(&arial);
        twin[0] += 1;
        twin[1] -= 1;

        let aggregate = SizeComparator::new(&stub, ComparisonMode::Aggregate);
        let per_char = SizeComparator::new(&stub, ComparisonMode::PerCharacter);
        assert!(aggregate.is_equal("Arial", "Arial Twin").unwrap());
        assert!(!per_char.is_equal("Arial", "Arial Twin").unwrap());
    }

    #[test]
    fn test_chain_resolves_first_known_entry() {
        let mut stub = StubProvider::new("Arial");
        stub.install("Georgia");
        let cmp = SizeComparator::new(&stub, ComparisonMode::PerCharacter);
        assert!(cmp.is_equal("NoSuchFont, Georgia, Arial", "Georgia").unwrap());
        assert!(!cmp.is_equal("NoSuchFont, Georgia, Arial", "Arial").unwrap());
    }
}
