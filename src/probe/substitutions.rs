//! Known platform font-substitution pairs.
//!
//! Some platforms silently render a requested font with a visually identical
//! stand-in (classically Helvetica with Arial on Windows) without reporting
//! any fallback. Ordinary size comparison against a generic family cannot see
//! this, so the known pairs are listed explicitly.

/// One substitution rule.
///
/// Fires when the requested name contains `trigger` (case-insensitively) AND
/// the requested name renders size-equal to `candidate`. The resolved name is
/// then `result`.
#[derive(Debug, Clone, Copy)]
pub struct SubstitutionRule {
    /// Lowercase substring matched against the requested name
    pub trigger: &'static str,
    /// Family the request is compared against by size
    pub candidate: &'static str,
    /// Family actually doing the rendering when the rule fires
    pub result: &'static str,
}

impl SubstitutionRule {
    /// Case-insensitive trigger-substring test against a requested name.
    pub fn matches_trigger(&self, requested: &str) -> bool {
        requested.to_lowercase().contains(self.trigger)
    }
}

/// Pre-verified substitution pairs, in priority order. First firing rule
/// wins. This list is necessarily incomplete; it covers only named pairs
/// confirmed on real platforms.
pub const SUBSTITUTION_RULES: &[SubstitutionRule] = &[
    SubstitutionRule {
        trigger: "helvetica",
        candidate: "Arial",
        result: "Arial",
    },
    SubstitutionRule {
        trigger: "times",
        candidate: "Times New Roman",
        result: "Times New Roman",
    },
];
