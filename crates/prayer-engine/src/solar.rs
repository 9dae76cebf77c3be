//! The solar-position collaborator contract.
//!
//! The engine does not compute solar positions itself. A caller supplies an
//! implementation of [`SolarProvider`] — typically backed by an astronomy
//! crate or a table of precomputed values — and the prayer formulas consume
//! it. All quantities are decimal hours or degrees; implementations must be
//! synchronous and pure for a given date and location.

use chrono::NaiveDate;

use crate::error::Result;
use crate::method::AsrFactor;

/// Solar-position primitives for a given date and location.
///
/// # Conventions
///
/// Hours are decimal hours in the provider's reference frame (typically
/// UTC-based solar time); the engine adds the configured timezone offset
/// afterwards. Angles are degrees. Errors (e.g. coordinates outside
/// ±90°/±180°) propagate unchanged through the engine to the caller.
pub trait SolarProvider {
    /// The instant the sun crosses the local meridian, in decimal hours.
    fn solar_noon(&self, date: NaiveDate, latitude: f64, longitude: f64) -> Result<f64>;

    /// The instant of sunset, in decimal hours.
    fn sunset(&self, date: NaiveDate, latitude: f64, longitude: f64) -> Result<f64>;

    /// The hour-angle (degrees of Earth rotation from solar noon) at which
    /// the sun reaches `altitude` degrees below the horizon on `date` at
    /// `latitude`. Divided by 15 to convert to hours.
    fn hour_angle(&self, date: NaiveDate, latitude: f64, altitude: f64) -> Result<f64>;

    /// The hour-angle at which an object's shadow equals `factor` times its
    /// height, per standard shadow-ratio astronomy. Used for Asr.
    fn shadow_hour_angle(&self, date: NaiveDate, latitude: f64, factor: AsrFactor) -> Result<f64>;
}
