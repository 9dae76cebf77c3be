//! # prayer-engine
//!
//! Deterministic prayer-time computation.
//!
//! Computes the clock times of the five canonical daily prayers (Fajr,
//! Dhuhr, Asr, Maghrib, Isha) for a date, location, fixed UTC offset, and
//! calculation method. The engine is a pure function of an immutable
//! configuration plus a caller-supplied solar-position provider: no system
//! clock after construction, no I/O, no timezone-database lookups.
//!
//! ## Modules
//!
//! - [`schedule`] — The immutable configuration value, fluent setters, and
//!   the generic selector (`of`/`all`/`remaining`/`upcoming`/`past`/`previous`)
//! - [`prayer`] — The five prayer variants and their formulas
//! - [`method`] — Calculation conventions and their twilight-angle tables
//! - [`solar`] — The solar-position collaborator contract
//! - [`format`] — Decimal-hours → clock-string formatting
//! - [`error`] — Error types
//!
//! ## Example
//!
//! ```
//! use chrono::{NaiveDate, TimeZone, Utc};
//! use prayer_engine::{Method, PrayerKind, Result, Schedule, SolarProvider};
//!
//! // Recorded solar values for Milan, 2025-02-19. A real application
//! // would back this with an astronomy crate.
//! struct MilanSun;
//!
//! impl SolarProvider for MilanSun {
//!     fn solar_noon(&self, _: NaiveDate, _: f64, _: f64) -> Result<f64> {
//!         Ok(11.62)
//!     }
//!     fn sunset(&self, _: NaiveDate, _: f64, _: f64) -> Result<f64> {
//!         Ok(16.94)
//!     }
//!     fn hour_angle(&self, _: NaiveDate, _: f64, altitude: f64) -> Result<f64> {
//!         Ok(if altitude == 17.0 { 103.0 } else { 104.5 })
//!     }
//!     fn shadow_hour_angle(
//!         &self,
//!         _: NaiveDate,
//!         _: f64,
//!         _: prayer_engine::AsrFactor,
//!     ) -> Result<f64> {
//!         Ok(42.5)
//!     }
//! }
//!
//! let schedule = Schedule::new()
//!     .for_date(Utc.with_ymd_and_hms(2025, 2, 19, 16, 31, 0).unwrap())
//!     .at((45.4613, 9.1595))
//!     .in_timezone(60)
//!     .using(Method::Mwl);
//!
//! let dhuhr = schedule.of(PrayerKind::Dhuhr).time(&MilanSun)?;
//! assert_eq!(dhuhr.clock, "12:37");
//!
//! // At 16:31 local time, Maghrib is next
//! let upcoming = schedule.upcoming(&MilanSun)?.unwrap();
//! assert_eq!(upcoming.kind(), PrayerKind::Maghrib);
//! # Ok::<(), prayer_engine::SolarError>(())
//! ```

pub mod error;
pub mod format;
pub mod method;
pub mod prayer;
pub mod schedule;
pub mod solar;

pub use error::{Result, SolarError};
pub use format::FormattedHours;
pub use method::{AsrFactor, Method};
pub use prayer::{Prayer, PrayerKind};
pub use schedule::Schedule;
pub use solar::SolarProvider;
