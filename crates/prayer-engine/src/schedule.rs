//! The immutable configuration value and the generic prayer selector.
//!
//! A [`Schedule`] is fully determined by six fields: date, location,
//! timezone offset, calculation method, Maghrib offset, and Asr shadow
//! factor. Every fluent setter returns a new value equal to the original
//! except for the one field changed — nothing is ever mutated, so
//! concurrent callers may freely share a schedule.
//!
//! The configured date is the evaluation instant, not merely the calendar
//! day: [`Schedule::remaining`] and [`Schedule::past`] classify prayers
//! against the date's own time-of-day, never against "now". No system
//! clock is consulted after construction.

use chrono::{DateTime, Timelike, Utc};
use serde::Serialize;

use crate::error::Result;
use crate::method::{AsrFactor, Method};
use crate::prayer::{Prayer, PrayerKind};
use crate::solar::SolarProvider;

// ── Configuration value ─────────────────────────────────────────────────────

/// An immutable prayer-schedule configuration.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use prayer_engine::{Method, Schedule};
///
/// let schedule = Schedule::new()
///     .for_date(Utc.with_ymd_and_hms(2025, 2, 19, 16, 31, 0).unwrap())
///     .at((45.4613, 9.1595))
///     .in_timezone(60)
///     .using(Method::Mwl);
///
/// assert_eq!(schedule.timezone(), 60);
/// assert_eq!(schedule.method(), Method::Mwl);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Schedule {
    date: DateTime<Utc>,
    location: (f64, f64),
    timezone: i32,
    method: Method,
    maghrib_offset: i32,
    asr_factor: AsrFactor,
}

impl Default for Schedule {
    fn default() -> Self {
        Schedule {
            date: Utc::now(),
            location: (0.0, 0.0),
            timezone: 0,
            method: Method::default(),
            maghrib_offset: 0,
            asr_factor: AsrFactor::default(),
        }
    }
}

impl Schedule {
    /// Start a fluent chain with every field at its default: the current
    /// instant, location (0, 0), UTC, MWL, no Maghrib offset, shadow
    /// factor one.
    pub fn new() -> Self {
        Schedule::default()
    }

    // ── Fluent setters ──────────────────────────────────────────────────

    /// The date — and evaluation instant — to compute for.
    pub fn for_date(mut self, date: DateTime<Utc>) -> Self {
        self.date = date;
        self
    }

    /// The (latitude, longitude) pair in degrees.
    ///
    /// Not range-checked here; the solar provider rejects coordinates it
    /// cannot handle.
    pub fn at(mut self, location: (f64, f64)) -> Self {
        self.location = location;
        self
    }

    /// The fixed UTC offset in minutes. Matching it to the location's true
    /// offset is the caller's responsibility; no timezone database is
    /// consulted.
    pub fn in_timezone(mut self, offset_minutes: i32) -> Self {
        self.timezone = offset_minutes;
        self
    }

    /// The calculation method.
    pub fn using(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Minutes added to the Maghrib time, after the timezone conversion.
    pub fn with_maghrib_offset(mut self, minutes: i32) -> Self {
        self.maghrib_offset = minutes;
        self
    }

    /// The Asr shadow factor (standard or Hanafi convention).
    pub fn with_asr_factor(mut self, factor: AsrFactor) -> Self {
        self.asr_factor = factor;
        self
    }

    // ── Accessors ───────────────────────────────────────────────────────

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    pub fn location(&self) -> (f64, f64) {
        self.location
    }

    pub fn timezone(&self) -> i32 {
        self.timezone
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn maghrib_offset(&self) -> i32 {
        self.maghrib_offset
    }

    pub fn asr_factor(&self) -> AsrFactor {
        self.asr_factor
    }

    // ── Generic selector ────────────────────────────────────────────────

    /// The requested prayer, snapshotting this configuration.
    pub fn of(&self, kind: PrayerKind) -> Prayer {
        Prayer::from_parts(*self, kind)
    }

    /// All five prayers in canonical order, from the same snapshot.
    pub fn all(&self) -> [Prayer; 5] {
        PrayerKind::ALL.map(|kind| self.of(kind))
    }

    /// The prayers whose time falls strictly after the configured date's
    /// time-of-day, in canonical order.
    ///
    /// A prayer whose time equals the evaluation instant exactly is in
    /// neither `remaining` nor [`past`](Schedule::past).
    ///
    /// # Errors
    ///
    /// Propagates any [`SolarError`](crate::SolarError) from the provider.
    pub fn remaining<P: SolarProvider>(&self, sun: &P) -> Result<Vec<Prayer>> {
        let cutoff = time_of_day_milliseconds(self.date);
        let mut prayers = Vec::with_capacity(5);
        for prayer in self.all() {
            if prayer.time(sun)?.milliseconds > cutoff {
                prayers.push(prayer);
            }
        }
        Ok(prayers)
    }

    /// The first remaining prayer, or `None` if none remain today.
    ///
    /// # Errors
    ///
    /// Propagates any [`SolarError`](crate::SolarError) from the provider.
    pub fn upcoming<P: SolarProvider>(&self, sun: &P) -> Result<Option<Prayer>> {
        Ok(self.remaining(sun)?.into_iter().next())
    }

    /// The prayers whose time falls strictly before the configured date's
    /// time-of-day, in canonical order.
    ///
    /// # Errors
    ///
    /// Propagates any [`SolarError`](crate::SolarError) from the provider.
    pub fn past<P: SolarProvider>(&self, sun: &P) -> Result<Vec<Prayer>> {
        let cutoff = time_of_day_milliseconds(self.date);
        let mut prayers = Vec::with_capacity(5);
        for prayer in self.all() {
            if prayer.time(sun)?.milliseconds < cutoff {
                prayers.push(prayer);
            }
        }
        Ok(prayers)
    }

    /// The most recent past prayer, or `None` if none have passed today.
    ///
    /// # Errors
    ///
    /// Propagates any [`SolarError`](crate::SolarError) from the provider.
    pub fn previous<P: SolarProvider>(&self, sun: &P) -> Result<Option<Prayer>> {
        let mut past = self.past(sun)?;
        Ok(past.pop())
    }
}

/// Milliseconds between local midnight and the instant's time-of-day.
fn time_of_day_milliseconds(date: DateTime<Utc>) -> i64 {
    let time = date.time();
    i64::from(time.num_seconds_from_midnight()) * 1000
        + i64::from(time.nanosecond() / 1_000_000)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate, TimeZone};
    use proptest::prelude::*;

    /// Recorded solar values for Milan (45.4613°N, 9.1595°E) on 2025-02-19.
    struct MilanFixture;

    impl SolarProvider for MilanFixture {
        fn solar_noon(&self, _: NaiveDate, _: f64, _: f64) -> Result<f64> {
            Ok(11.62)
        }

        fn sunset(&self, _: NaiveDate, _: f64, _: f64) -> Result<f64> {
            Ok(16.94)
        }

        fn hour_angle(&self, _: NaiveDate, _: f64, altitude: f64) -> Result<f64> {
            Ok(match altitude {
                a if a == 14.0 => 98.5,
                a if a == 15.0 => 100.0,
                a if a == 17.0 => 103.0,
                a if a == 17.5 => 103.75,
                a if a == 17.7 => 104.05,
                a if a == 18.0 => 104.5,
                a if a == 18.5 => 105.25,
                _ => 106.75, // 19.5°
            })
        }

        fn shadow_hour_angle(&self, _: NaiveDate, _: f64, factor: AsrFactor) -> Result<f64> {
            Ok(match factor {
                AsrFactor::One => 42.5,
                AsrFactor::Two => 52.0,
            })
        }
    }

    const MILAN: (f64, f64) = (45.4613, 9.1595);
    const CET: i32 = 60;

    fn milan_schedule(hour: u32, minute: u32) -> Schedule {
        Schedule::new()
            .for_date(Utc.with_ymd_and_hms(2025, 2, 19, hour, minute, 0).unwrap())
            .at(MILAN)
            .in_timezone(CET)
            .using(Method::Mwl)
    }

    // ── Fluent configuration ────────────────────────────────────────────

    #[test]
    fn test_setters_change_exactly_one_field() {
        let base = milan_schedule(12, 0);
        let shifted = base.with_maghrib_offset(7);

        assert_eq!(shifted.maghrib_offset(), 7);
        assert_eq!(shifted.date(), base.date());
        assert_eq!(shifted.location(), base.location());
        assert_eq!(shifted.timezone(), base.timezone());
        assert_eq!(shifted.method(), base.method());
        assert_eq!(shifted.asr_factor(), base.asr_factor());
    }

    #[test]
    fn test_original_survives_the_chain() {
        let base = milan_schedule(12, 0);
        let _branched = base.using(Method::Makkah).in_timezone(180);

        // `base` is a value; the chain copied it and left it untouched
        assert_eq!(base.method(), Method::Mwl);
        assert_eq!(base.timezone(), CET);
    }

    #[test]
    fn test_defaults() {
        let schedule = Schedule::new();
        assert_eq!(schedule.location(), (0.0, 0.0));
        assert_eq!(schedule.timezone(), 0);
        assert_eq!(schedule.method(), Method::Mwl);
        assert_eq!(schedule.maghrib_offset(), 0);
        assert_eq!(schedule.asr_factor(), AsrFactor::One);
    }

    // ── Selector ordering ───────────────────────────────────────────────

    #[test]
    fn test_all_returns_five_in_canonical_order() {
        let kinds: Vec<_> = milan_schedule(12, 0)
            .all()
            .iter()
            .map(|p| p.kind())
            .collect();
        assert_eq!(
            kinds,
            vec![
                PrayerKind::Fajr,
                PrayerKind::Dhuhr,
                PrayerKind::Asr,
                PrayerKind::Maghrib,
                PrayerKind::Isha,
            ]
        );
    }

    #[test]
    fn test_remaining_and_past_at_late_afternoon() {
        // Milan times: Fajr 05:39, Dhuhr 12:37, Asr 15:27, Maghrib 17:56,
        // Isha 19:29. At 16:31, three have passed and two remain.
        let schedule = milan_schedule(16, 31);

        let past: Vec<_> = schedule
            .past(&MilanFixture)
            .unwrap()
            .iter()
            .map(|p| p.kind())
            .collect();
        assert_eq!(
            past,
            vec![PrayerKind::Fajr, PrayerKind::Dhuhr, PrayerKind::Asr]
        );

        let remaining: Vec<_> = schedule
            .remaining(&MilanFixture)
            .unwrap()
            .iter()
            .map(|p| p.kind())
            .collect();
        assert_eq!(remaining, vec![PrayerKind::Maghrib, PrayerKind::Isha]);
    }

    #[test]
    fn test_upcoming_and_previous_at_late_afternoon() {
        let schedule = milan_schedule(16, 31);

        let upcoming = schedule.upcoming(&MilanFixture).unwrap().unwrap();
        assert_eq!(upcoming.kind(), PrayerKind::Maghrib);

        let previous = schedule.previous(&MilanFixture).unwrap().unwrap();
        assert_eq!(previous.kind(), PrayerKind::Asr);
    }

    #[test]
    fn test_upcoming_absent_after_isha() {
        let schedule = milan_schedule(23, 45);
        assert!(schedule.remaining(&MilanFixture).unwrap().is_empty());
        assert!(schedule.upcoming(&MilanFixture).unwrap().is_none());
        assert_eq!(schedule.past(&MilanFixture).unwrap().len(), 5);
    }

    #[test]
    fn test_previous_absent_before_fajr() {
        let schedule = milan_schedule(4, 0);
        assert!(schedule.past(&MilanFixture).unwrap().is_empty());
        assert!(schedule.previous(&MilanFixture).unwrap().is_none());
        assert_eq!(schedule.remaining(&MilanFixture).unwrap().len(), 5);
    }

    #[test]
    fn test_exact_tie_is_neither_past_nor_remaining() {
        // Dhuhr is 12.62 h = 12:37:12.000 exactly
        let schedule = Schedule::new()
            .for_date(Utc.with_ymd_and_hms(2025, 2, 19, 12, 37, 12).unwrap())
            .at(MILAN)
            .in_timezone(CET);

        let dhuhr_ms = schedule.of(PrayerKind::Dhuhr).time(&MilanFixture).unwrap().milliseconds;
        assert_eq!(dhuhr_ms, time_of_day_milliseconds(schedule.date()));

        let past = schedule.past(&MilanFixture).unwrap();
        let remaining = schedule.remaining(&MilanFixture).unwrap();
        assert!(past.iter().all(|p| p.kind() != PrayerKind::Dhuhr));
        assert!(remaining.iter().all(|p| p.kind() != PrayerKind::Dhuhr));
        assert_eq!(past.len() + remaining.len(), 4);
    }

    #[test]
    fn test_time_of_day_milliseconds() {
        let date = Utc.with_ymd_and_hms(2025, 2, 19, 16, 31, 0).unwrap();
        assert_eq!(time_of_day_milliseconds(date), (16 * 3600 + 31 * 60) * 1000);
        let with_millis = date + Duration::milliseconds(250);
        assert_eq!(time_of_day_milliseconds(with_millis), (16 * 3600 + 31 * 60) * 1000 + 250);
    }

    // ── Properties ──────────────────────────────────────────────────────

    proptest! {
        #[test]
        fn prop_remaining_and_past_partition_all(offset_ms in 0i64..86_400_000) {
            let midnight = Utc.with_ymd_and_hms(2025, 2, 19, 0, 0, 0).unwrap();
            let schedule = Schedule::new()
                .for_date(midnight + Duration::milliseconds(offset_ms))
                .at(MILAN)
                .in_timezone(CET);

            let remaining = schedule.remaining(&MilanFixture).unwrap();
            let past = schedule.past(&MilanFixture).unwrap();

            // Disjoint, and together they cover everything except exact ties
            prop_assert!(remaining.len() + past.len() <= 5);
            for prayer in schedule.all() {
                let ms = prayer.time(&MilanFixture).unwrap().milliseconds;
                let in_remaining = remaining.iter().any(|p| p.kind() == prayer.kind());
                let in_past = past.iter().any(|p| p.kind() == prayer.kind());
                prop_assert!(!(in_remaining && in_past));
                if ms != offset_ms {
                    prop_assert!(in_remaining || in_past);
                }
            }

            // Absence of upcoming/previous tracks emptiness exactly
            prop_assert_eq!(
                schedule.upcoming(&MilanFixture).unwrap().is_none(),
                remaining.is_empty()
            );
            prop_assert_eq!(
                schedule.previous(&MilanFixture).unwrap().is_none(),
                past.is_empty()
            );
        }

        #[test]
        fn prop_setter_order_is_irrelevant(
            latitude in -90.0f64..90.0,
            longitude in -180.0f64..180.0,
            timezone in -720i32..=840,
            maghrib in -30i32..=30,
            method_index in 0usize..6,
            hanafi in any::<bool>(),
        ) {
            let methods = [
                Method::Mwl,
                Method::Isna,
                Method::Egypt,
                Method::Makkah,
                Method::Karachi,
                Method::Tehran,
            ];
            let method = methods[method_index];
            let factor = if hanafi { AsrFactor::Two } else { AsrFactor::One };
            let date = Utc.with_ymd_and_hms(2025, 2, 19, 12, 0, 0).unwrap();

            let forward = Schedule::new()
                .for_date(date)
                .at((latitude, longitude))
                .in_timezone(timezone)
                .using(method)
                .with_maghrib_offset(maghrib)
                .with_asr_factor(factor);

            let reversed = Schedule::new()
                .with_asr_factor(factor)
                .with_maghrib_offset(maghrib)
                .using(method)
                .in_timezone(timezone)
                .at((latitude, longitude))
                .for_date(date);

            prop_assert_eq!(forward, reversed);
        }
    }
}
