//! Headless glyph measurement via fontdb discovery and rustybuzz shaping.

use anyhow::Result;
use fontdb::{Database, Family, Query};
use fontprobe::{
    FamilyChain, FamilyName, GlyphSize, MeasurementProvider, TEST_CHARACTERS,
    test_character_segments,
};

use crate::error::ProviderError;

/// Pixel size every measurement renders at. Large enough that a one-unit
/// advance difference survives rounding to whole pixels.
const DEFAULT_PX_SIZE: f32 = 100.0;

/// A [`MeasurementProvider`] that measures real font geometry without a
/// browser: system fonts are discovered with `fontdb`, chain entries resolve
/// first-match-wins against the database, and the winning face shapes the
/// test string with `rustybuzz` to produce advance widths.
///
/// The "render target" of a headless host is just the author font-family
/// value itself (`Target = str`): there is no style cascade to consult, so
/// `computed_font_family` echoes its input.
///
/// Every measurement borrows face data for the duration of one call and
/// releases it on return, error paths included; nothing is held across calls.
pub struct ShapedTextProvider {
    db: Database,
    px_size: f32,
    default_family: String,
}

impl ShapedTextProvider {
    /// Scan system fonts and derive the default family from whatever the
    /// database resolves for the sans-serif generic.
    pub fn new() -> Result<Self> {
        let mut db = Database::new();
        db.load_system_fonts();
        log::info!("Loaded {} system font faces", db.len());
        if db.len() == 0 {
            return Err(ProviderError::EmptyDatabase.into());
        }

        let default_family = Self::generic_family_name(&db, Family::SansSerif)
            .or_else(|| Self::generic_family_name(&db, Family::Serif))
            .ok_or_else(|| ProviderError::NoUsableFace("sans-serif".to_string()))?;
        log::debug!("Environment default font family: {default_family}");

        Ok(Self {
            db,
            px_size: DEFAULT_PX_SIZE,
            default_family,
        })
    }

    /// Override the measurement pixel size.
    pub fn with_px_size(mut self, px_size: f32) -> Self {
        self.px_size = px_size;
        self
    }

    /// Override the family reported as the environment default, emulating a
    /// host whose unstyled rendering uses a specific font.
    pub fn with_default_family(mut self, family: impl Into<String>) -> Self {
        self.default_family = family.into();
        self
    }

    pub fn px_size(&self) -> f32 {
        self.px_size
    }

    fn generic_family_name(db: &Database, generic: Family<'_>) -> Option<String> {
        let id = db.query(&Query {
            families: &[generic],
            ..Query::default()
        })?;
        let face = db.face(id)?;
        face.families.first().map(|(name, _)| name.clone())
    }

    fn query_entry(&self, entry: &FamilyName) -> Option<fontdb::ID> {
        let unquoted = entry.unquoted();
        let family = match unquoted.to_lowercase().as_str() {
            "serif" => Family::Serif,
            "sans-serif" => Family::SansSerif,
            "monospace" => Family::Monospace,
            "cursive" => Family::Cursive,
            "fantasy" => Family::Fantasy,
            _ => Family::Name(&unquoted),
        };
        self.db.query(&Query {
            families: &[family],
            ..Query::default()
        })
    }

    /// First chain entry the database can satisfy wins, mirroring renderer
    /// first-match semantics; an unsatisfiable chain falls through to the
    /// default family.
    fn resolve_chain(&self, font_family: &str) -> Result<fontdb::ID, ProviderError> {
        let chain = FamilyChain::parse(font_family);
        for entry in chain.iter() {
            if let Some(id) = self.query_entry(entry) {
                log::trace!("chain {font_family:?} resolved at entry {entry}");
                return Ok(id);
            }
        }
        log::trace!("chain {font_family:?} fell through to default {}", self.default_family);
        self.query_entry(&FamilyName::new(&self.default_family))
            .ok_or_else(|| ProviderError::NoUsableFace(font_family.to_string()))
    }

    fn with_resolved_face<T>(
        &self,
        font_family: &str,
        measure: impl FnOnce(&rustybuzz::Face<'_>) -> T,
    ) -> Result<T> {
        let id = self.resolve_chain(font_family)?;
        let outcome = self.db.with_face_data(id, |data, face_index| {
            rustybuzz::Face::from_slice(data, face_index).map(|face| measure(&face))
        });
        match outcome {
            Some(Some(value)) => Ok(value),
            Some(None) => Err(ProviderError::FaceParse(font_family.to_string()).into()),
            None => Err(ProviderError::NoUsableFace(font_family.to_string()).into()),
        }
    }

    /// Shape `text` and reduce it to a whole-pixel footprint: summed advance
    /// widths for the width, ascender-to-descender plus line gap for the
    /// height.
    fn measure_run(face: &rustybuzz::Face<'_>, text: &str, px_size: f32) -> GlyphSize {
        let mut buffer = rustybuzz::UnicodeBuffer::new();
        buffer.push_str(text);
        let shaped = rustybuzz::shape(face, &[], buffer);

        let advance: i32 = shaped
            .glyph_positions()
            .iter()
            .map(|pos| pos.x_advance)
            .sum();
        let line_height = i32::from(face.ascender()) - i32::from(face.descender())
            + i32::from(face.line_gap());

        let scale = px_size / face.units_per_em() as f32;
        GlyphSize::new(
            (advance as f32 * scale).round().max(0.0) as u32,
            (line_height as f32 * scale).round().max(0.0) as u32,
        )
    }
}

impl MeasurementProvider for ShapedTextProvider {
    type Target = str;

    fn measure_single(&self, font_family: &str) -> Result<GlyphSize> {
        self.with_resolved_face(font_family, |face| {
            Self::measure_run(face, TEST_CHARACTERS, self.px_size)
        })
    }

    fn measure_multiple(&self, font_family: &str) -> Result<Vec<GlyphSize>> {
        self.with_resolved_face(font_family, |face| {
            test_character_segments()
                .map(|segment| Self::measure_run(face, segment, self.px_size))
                .collect()
        })
    }

    fn computed_font_family(&self, target: &str) -> Result<String> {
        Ok(target.to_string())
    }

    fn default_font_family(&self) -> Result<String> {
        Ok(self.default_family.clone())
    }
}
