//! Font-family names, chains, and generic families.
//!
//! A font-family value is an ordered, comma-separated chain of family names,
//! evaluated first-match-wins by the renderer. Names may be quoted; identity
//! comparison ignores both quoting and case. Full CSS font shorthand parsing
//! is out of scope; only the comma-separated family list is handled.

use std::fmt;

/// One entry of a font-family chain, kept in its source form.
///
/// Equality is by name identity: case-insensitive and quote-insensitive, so
/// `'Arial'` and `arial` are the same name. The raw form is preserved because
/// it is what gets handed back to the provider for measurement.
#[derive(Debug, Clone)]
pub struct FamilyName {
    raw: String,
}

impl FamilyName {
    pub fn new(raw: impl Into<String>) -> Self {
        Self {
            raw: raw.into().trim().to_string(),
        }
    }

    /// Normalize `name` for availability testing: strip any embedded quote
    /// characters and re-wrap in single quotes, so already-quoted and
    /// unquoted input land on the same form.
    pub fn quoted(name: &str) -> Self {
        let stripped: String = name
            .chars()
            .filter(|c| !matches!(*c, '\'' | '"'))
            .collect();
        Self {
            raw: format!("'{}'", stripped.trim()),
        }
    }

    /// The name as it appears in source, suitable for measurement.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The quote-stripped, lowercased form used for identity comparison.
    pub fn normalized(&self) -> String {
        normalize(&self.raw)
    }

    /// Name identity: case-insensitive and quote-insensitive.
    pub fn has_same_name(&self, other: &FamilyName) -> bool {
        self.normalized() == other.normalized()
    }

    /// The quote-stripped form with original casing, for hosts that need to
    /// look the family up by name.
    pub fn unquoted(&self) -> String {
        self.raw
            .chars()
            .filter(|c| !matches!(*c, '\'' | '"'))
            .collect::<String>()
            .trim()
            .to_string()
    }
}

impl PartialEq for FamilyName {
    fn eq(&self, other: &Self) -> bool {
        self.has_same_name(other)
    }
}

impl Eq for FamilyName {}

impl fmt::Display for FamilyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl From<&str> for FamilyName {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

/// Case- and quote-insensitive name comparison on raw strings.
pub fn has_same_name(a: &str, b: &str) -> bool {
    normalize(a) == normalize(b)
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(*c, '\'' | '"'))
        .collect::<String>()
        .trim()
        .to_lowercase()
}

/// An ordered font-family chain. Duplicates allowed, order significant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FamilyChain {
    entries: Vec<FamilyName>,
}

impl FamilyChain {
    /// Parse a comma-separated font-family value. Blank entries are dropped,
    /// so an empty or whitespace-only source parses to an empty chain.
    pub fn parse(source: &str) -> Self {
        let entries = source
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(FamilyName::new)
            .collect();
        Self { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FamilyName> {
        self.entries.iter()
    }
}

/// The two generic families the engine reasons about as fallback traps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenericFamily {
    Serif,
    SansSerif,
}

impl GenericFamily {
    pub fn as_css(self) -> &'static str {
        match self {
            GenericFamily::Serif => "serif",
            GenericFamily::SansSerif => "sans-serif",
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            GenericFamily::Serif => GenericFamily::SansSerif,
            GenericFamily::SansSerif => GenericFamily::Serif,
        }
    }
}

impl fmt::Display for GenericFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_css())
    }
}
