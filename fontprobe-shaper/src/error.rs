//! Typed error variants for the fontprobe-shaper crate.
//!
//! These are the provider's environment failures: the host cannot produce a
//! measurement at all. They are exposed for consumers who want to match on
//! specific failure modes instead of opaque `anyhow` strings; the
//! `MeasurementProvider` trait boundary still reports `anyhow::Error`, into
//! which these coerce via the blanket `From` impl for `std::error::Error`.

use std::fmt;

/// Errors that can occur while setting up or running a measurement.
#[derive(Debug)]
pub enum ProviderError {
    /// No face in the database satisfies the request.
    ///
    /// The inner string is the font-family value that failed to resolve,
    /// after falling back to the provider's default family.
    NoUsableFace(String),

    /// A face was found but its data could not be parsed for shaping.
    ///
    /// The inner string names the family whose data was rejected.
    FaceParse(String),

    /// The system font scan produced an empty database, so no measurement
    /// can ever succeed in this environment.
    EmptyDatabase,
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::NoUsableFace(family) => {
                write!(f, "no usable face for font-family {family:?}")
            }
            ProviderError::FaceParse(family) => {
                write!(f, "face data for {family:?} could not be parsed")
            }
            ProviderError::EmptyDatabase => {
                write!(f, "no system fonts found; measurement is impossible")
            }
        }
    }
}

impl std::error::Error for ProviderError {}
