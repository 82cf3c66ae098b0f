//! The resolution engine: which font renders, and is a font installed.
//!
//! [`FontProbe`] wraps a [`MeasurementProvider`] and answers the two public
//! questions:
//! - [`FontProbe::find_used_font`]: which entry of a render target's
//!   font-family chain is the one actually rendering.
//! - [`FontProbe::is_font_available`]: whether a named font is genuinely
//!   installed, as opposed to silently substituted or fallen through to a
//!   generic family.
//!
//! Everything is decided by size comparison: the rendered geometry of a whole
//! chain necessarily equals the geometry of whichever single family the
//! renderer ends up applying.

mod substitutions;

use anyhow::Result;

use crate::comparator::{ComparisonMode, SizeComparator};
use crate::family::{FamilyChain, FamilyName, GenericFamily};
use crate::provider::MeasurementProvider;

pub use substitutions::{SUBSTITUTION_RULES, SubstitutionRule};

/// Font resolution and availability testing over a measurement provider.
///
/// Chain resolution uses a configurable comparison mode (aggregate by
/// default, the fast path). Substitution detection and availability testing
/// always measure per-character: a false size match there flips the answer,
/// so discrimination matters more than call count.
///
/// The probe holds no state besides the provider and the mode; every
/// resolution re-derives the environment default, so zoom/DPI changes between
/// calls cannot leave a stale default behind.
pub struct FontProbe<P: MeasurementProvider> {
    provider: P,
    resolution_mode: ComparisonMode,
}

impl<P: MeasurementProvider> FontProbe<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            resolution_mode: ComparisonMode::Aggregate,
        }
    }

    /// Set the comparison mode used for chain resolution.
    pub fn with_resolution_mode(mut self, mode: ComparisonMode) -> Self {
        self.resolution_mode = mode;
        self
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    fn resolution_comparator(&self) -> SizeComparator<'_, P> {
        SizeComparator::new(&self.provider, self.resolution_mode)
    }

    fn strict_comparator(&self) -> SizeComparator<'_, P> {
        SizeComparator::new(&self.provider, ComparisonMode::PerCharacter)
    }

    /// The environment's default font family, freshly queried.
    pub fn default_font_family(&self) -> Result<FamilyName> {
        Ok(FamilyName::new(self.provider.default_font_family()?))
    }

    /// The generic family the default font is NOT: `sans-serif` when the
    /// default renders like `serif`, `serif` otherwise.
    ///
    /// A customized default that matches neither generic still gets the
    /// binary answer; callers needing finer resolution should compare against
    /// the default with [`SizeComparator::is_equal`] directly.
    pub fn default_font_opposite(&self) -> Result<GenericFamily> {
        let default = self.default_font_family()?;
        let cmp = self.strict_comparator();
        if cmp.is_equal(default.raw(), GenericFamily::Serif.as_css())? {
            Ok(GenericFamily::SansSerif)
        } else {
            Ok(GenericFamily::Serif)
        }
    }

    /// Apply the known substitution rules to a requested name.
    ///
    /// First rule whose trigger matches the name AND whose candidate renders
    /// size-equal to it wins; otherwise the input comes back unchanged.
    /// Idempotent: every rule's result re-resolves to itself.
    pub fn resolve_substitution(&self, name: &str) -> Result<FamilyName> {
        let requested = FamilyName::new(name);
        let cmp = self.strict_comparator();
        for rule in SUBSTITUTION_RULES {
            if rule.matches_trigger(requested.raw())
                && cmp.is_equal(requested.raw(), rule.candidate)?
            {
                let resolved = FamilyName::new(rule.result);
                if !resolved.has_same_name(&requested) {
                    log::debug!("{requested} is rendered by substitute {resolved}");
                }
                return Ok(resolved);
            }
        }
        Ok(requested)
    }

    /// Which entry of `target`'s computed font-family chain actually renders.
    ///
    /// The environment default is prepended as a sentinel fallback, then the
    /// first entry whose rendered size equals the whole chain's rendered size
    /// wins (ties break by chain order). The winner passes through
    /// substitution resolution. An empty chain means no font was requested
    /// and resolves trivially to the default, which is itself subject to
    /// substitution.
    ///
    /// `None` means no augmented entry matched: the provider's default
    /// diverges from the default used to render the chain. That is an
    /// environment mismatch, not an error.
    pub fn find_used_font(&self, target: &P::Target) -> Result<Option<FamilyName>> {
        let chain_source = self.provider.computed_font_family(target)?;
        let chain = FamilyChain::parse(&chain_source);
        let default = self.default_font_family()?;

        if chain.is_empty() {
            log::debug!("empty font-family chain, resolving to default {default}");
            // The default is the winner here and passes through substitution
            // like any other winner.
            return Ok(Some(self.resolve_substitution(default.raw())?));
        }

        let cmp = self.resolution_comparator();
        let mut candidates: Vec<FamilyName> = Vec::with_capacity(chain.len() + 1);
        candidates.push(default);
        candidates.extend(chain.iter().cloned());

        for candidate in candidates {
            if cmp.is_equal(&chain_source, candidate.raw())? {
                let resolved = self.resolve_substitution(candidate.raw())?;
                log::debug!("chain {chain_source:?} renders with {resolved}");
                return Ok(Some(resolved));
            }
        }

        log::warn!(
            "no entry of {chain_source:?} matches its rendered geometry; \
             provider default may diverge from the environment default"
        );
        Ok(None)
    }

    /// Whether `name` is genuinely installed.
    ///
    /// "Genuinely" excludes silent substitution (a look-alike rendering in
    /// its place) and fall-through to a generic family. Known limitation: a
    /// real font whose geometry coincides exactly with the default font's is
    /// reported unavailable, since size is all this engine can observe.
    pub fn is_font_available(&self, name: &str) -> Result<bool> {
        let requested = FamilyName::quoted(name);
        let cmp = self.strict_comparator();

        // A substituted font is not the font that was asked for.
        let substituted = self.resolve_substitution(requested.raw())?;
        if !substituted.has_same_name(&requested) {
            log::debug!("{requested} unavailable: substituted by {substituted}");
            return Ok(false);
        }

        // Generic traps: append the opposite generic so a missing font falls
        // through to it and can never collide with the generic it is compared
        // against. A match therefore means the requested entry itself
        // resolved and renders like that generic.
        let renders_as_serif = cmp.is_equal(
            &format!("{}, sans-serif", requested.raw()),
            GenericFamily::Serif.as_css(),
        )?;
        let renders_as_sans_serif = cmp.is_equal(
            &format!("{}, serif", requested.raw()),
            GenericFamily::SansSerif.as_css(),
        )?;

        // An overridden environment default matches neither trap, so the
        // default itself needs a name-identity check.
        let default = self.default_font_family()?;
        let is_default_font = requested.has_same_name(&default);

        if renders_as_serif || renders_as_sans_serif || is_default_font {
            return Ok(true);
        }

        // The traps guarantee the default is trustworthy as a comparison
        // base: different geometry from it means the font renders as itself.
        Ok(!cmp.is_equal(requested.raw(), default.raw())?)
    }
}
