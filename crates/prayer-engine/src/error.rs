//! Error types for the solar-provider contract.

use thiserror::Error;

/// Failure modes of an external [`SolarProvider`](crate::SolarProvider).
///
/// The calculation core never constructs these itself: every formula is
/// total given valid numeric inputs. A provider raises them (e.g. for
/// out-of-range coordinates) and they propagate unchanged to the caller.
#[derive(Error, Debug)]
pub enum SolarError {
    #[error("Invalid coordinates: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinates { latitude: f64, longitude: f64 },

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Solar position unavailable: {0}")]
    Unavailable(String),
}

pub type Result<T> = std::result::Result<T, SolarError>;
