//! The five prayer variants and their formulas.
//!
//! Each prayer is a closed tag over a shared configuration snapshot; the
//! formula is selected by pattern match, not dispatch. A [`Prayer`] is
//! stateless beyond its snapshot and recomputes on every [`Prayer::time`]
//! call.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::Result;
use crate::format::FormattedHours;
use crate::method::{AsrFactor, Method};
use crate::schedule::Schedule;
use crate::solar::SolarProvider;

// ── Prayer kind ─────────────────────────────────────────────────────────────

/// One of the five canonical daily prayers, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PrayerKind {
    Fajr,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

impl PrayerKind {
    /// The five kinds in canonical order.
    pub const ALL: [PrayerKind; 5] = [
        PrayerKind::Fajr,
        PrayerKind::Dhuhr,
        PrayerKind::Asr,
        PrayerKind::Maghrib,
        PrayerKind::Isha,
    ];

    /// The prayer's display name.
    pub fn name(self) -> &'static str {
        match self {
            PrayerKind::Fajr => "Fajr",
            PrayerKind::Dhuhr => "Dhuhr",
            PrayerKind::Asr => "Asr",
            PrayerKind::Maghrib => "Maghrib",
            PrayerKind::Isha => "Isha",
        }
    }
}

impl fmt::Display for PrayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ── Prayer ──────────────────────────────────────────────────────────────────

/// A prayer variant bound to a configuration snapshot.
///
/// Constructed either through the generic selector
/// ([`Schedule::of`](crate::Schedule::of)) or directly ([`Prayer::fajr`]
/// and friends), and configured with the same fluent setters as
/// [`Schedule`]. The time is recomputed from the snapshot on every call;
/// there is no cached state.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use prayer_engine::{Method, Prayer};
///
/// let fajr = Prayer::fajr()
///     .for_date(Utc.with_ymd_and_hms(2025, 2, 19, 16, 31, 0).unwrap())
///     .at((45.4613, 9.1595))
///     .in_timezone(60)
///     .using(Method::Mwl);
///
/// assert_eq!(fajr.kind(), prayer_engine::PrayerKind::Fajr);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Prayer {
    kind: PrayerKind,
    schedule: Schedule,
}

impl Prayer {
    pub(crate) fn from_parts(schedule: Schedule, kind: PrayerKind) -> Self {
        Prayer { kind, schedule }
    }

    // ── Direct construction ─────────────────────────────────────────────

    /// A default-configured Fajr; start of a fluent chain.
    pub fn fajr() -> Self {
        Prayer::from_parts(Schedule::new(), PrayerKind::Fajr)
    }

    /// A default-configured Dhuhr; start of a fluent chain.
    pub fn dhuhr() -> Self {
        Prayer::from_parts(Schedule::new(), PrayerKind::Dhuhr)
    }

    /// A default-configured Asr; start of a fluent chain.
    pub fn asr() -> Self {
        Prayer::from_parts(Schedule::new(), PrayerKind::Asr)
    }

    /// A default-configured Maghrib; start of a fluent chain.
    pub fn maghrib() -> Self {
        Prayer::from_parts(Schedule::new(), PrayerKind::Maghrib)
    }

    /// A default-configured Isha; start of a fluent chain.
    pub fn isha() -> Self {
        Prayer::from_parts(Schedule::new(), PrayerKind::Isha)
    }

    // ── Fluent setters (mirroring Schedule) ─────────────────────────────

    /// See [`Schedule::for_date`].
    pub fn for_date(self, date: DateTime<Utc>) -> Self {
        Prayer::from_parts(self.schedule.for_date(date), self.kind)
    }

    /// See [`Schedule::at`].
    pub fn at(self, location: (f64, f64)) -> Self {
        Prayer::from_parts(self.schedule.at(location), self.kind)
    }

    /// See [`Schedule::in_timezone`].
    pub fn in_timezone(self, offset_minutes: i32) -> Self {
        Prayer::from_parts(self.schedule.in_timezone(offset_minutes), self.kind)
    }

    /// See [`Schedule::using`].
    pub fn using(self, method: Method) -> Self {
        Prayer::from_parts(self.schedule.using(method), self.kind)
    }

    /// See [`Schedule::with_maghrib_offset`].
    pub fn with_maghrib_offset(self, minutes: i32) -> Self {
        Prayer::from_parts(self.schedule.with_maghrib_offset(minutes), self.kind)
    }

    /// See [`Schedule::with_asr_factor`].
    pub fn with_asr_factor(self, factor: AsrFactor) -> Self {
        Prayer::from_parts(self.schedule.with_asr_factor(factor), self.kind)
    }

    // ── Accessors ───────────────────────────────────────────────────────

    pub fn kind(&self) -> PrayerKind {
        self.kind
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    // ── Computation ─────────────────────────────────────────────────────

    /// Compute this prayer's time from the snapshot and the given solar
    /// provider.
    ///
    /// # Errors
    ///
    /// Propagates any [`SolarError`](crate::SolarError) from the provider.
    pub fn time<P: SolarProvider>(&self, sun: &P) -> Result<FormattedHours> {
        Ok(FormattedHours::from_decimal(self.decimal_hours(sun)?))
    }

    /// The raw formula result in decimal hours, timezone already applied.
    fn decimal_hours<P: SolarProvider>(&self, sun: &P) -> Result<f64> {
        let date = self.schedule.date().date_naive();
        let (latitude, longitude) = self.schedule.location();
        let tz = f64::from(self.schedule.timezone()) / 60.0;

        let hours = match self.kind {
            PrayerKind::Fajr => {
                let angle = self.schedule.method().fajr_angle();
                sun.solar_noon(date, latitude, longitude)?
                    - sun.hour_angle(date, latitude, angle)? / 15.0
                    + tz
            }
            PrayerKind::Dhuhr => sun.solar_noon(date, latitude, longitude)? + tz,
            PrayerKind::Asr => {
                let shadow = sun.shadow_hour_angle(date, latitude, self.schedule.asr_factor())?;
                sun.solar_noon(date, latitude, longitude)? + shadow / 15.0 + tz
            }
            PrayerKind::Maghrib => {
                sun.sunset(date, latitude, longitude)?
                    + tz
                    + f64::from(self.schedule.maghrib_offset()) / 60.0
            }
            PrayerKind::Isha => match self.schedule.method().isha_angle() {
                // Umm al-Qura: fixed 90 minutes instead of a twilight angle
                None => sun.solar_noon(date, latitude, longitude)? + tz + 90.0 / 60.0,
                Some(angle) => {
                    sun.solar_noon(date, latitude, longitude)?
                        + tz
                        + sun.hour_angle(date, latitude, angle)? / 15.0
                }
            },
        };

        Ok(hours)
    }
}
