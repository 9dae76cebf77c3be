//! Decimal-hours formatting.

use std::fmt;

use serde::Serialize;

/// A prayer time, formatted from a raw decimal-hours value.
///
/// The raw value may be negative or exceed 24 (a formula result before
/// normalization). `clock` normalizes into [0, 24) and rounds to the
/// nearest minute; `milliseconds` stays un-normalized so that ordering
/// comparisons see the value the formula actually produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedHours {
    /// Zero-padded 24-hour clock string, e.g. `"05:39"`.
    pub clock: String,
    /// The raw value as milliseconds since local midnight. Signed, may
    /// exceed one day.
    pub milliseconds: i64,
}

impl FormattedHours {
    /// Format a decimal-hours value.
    ///
    /// # Examples
    ///
    /// ```
    /// use prayer_engine::FormattedHours;
    ///
    /// let t = FormattedHours::from_decimal(13.5);
    /// assert_eq!(t.clock, "13:30");
    /// assert_eq!(t.milliseconds, 48_600_000);
    /// ```
    pub fn from_decimal(hours: f64) -> Self {
        let milliseconds = (hours * 3_600_000.0).round() as i64;

        let wrapped = hours.rem_euclid(24.0);
        // 23:59.6 rounds up to minute 1440, which wraps to 00:00
        let total_minutes = ((wrapped * 60.0).round() as i64) % (24 * 60);
        let clock = format!("{:02}:{:02}", total_minutes / 60, total_minutes % 60);

        FormattedHours {
            clock,
            milliseconds,
        }
    }
}

impl fmt::Display for FormattedHours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.clock)
    }
}
