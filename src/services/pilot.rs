//! # Pilot New Year calculation
//!
//! Maps a year onto the moment the piloted New Year arrives. Every result is
//! the fixed epoch (2020-01-01 12:00:00, Europe/Moscow) shifted forward by a
//! whole number of hours:
//!
//! - years before 2021 get the epoch itself;
//! - from 2021 on, years run in cycles of three, each cycle adding 192 hours
//!   and each position within a cycle picking an hour offset from
//!   [`OFFSET_TABLE`].

use chrono::{DateTime, Duration, TimeZone};
use chrono_tz::Tz;

use crate::services::timezone::{PILOT_TIMEZONE, PILOT_TIMEZONE_LABEL};
use crate::utils::datetime::{format_datetime, format_display_time};

const EPOCH_YEAR: i32 = 2020;
const EPOCH_MONTH: u32 = 1;
const EPOCH_DAY: u32 = 1;
const EPOCH_HOUR: u32 = 12;

/// First year that moves away from the epoch
pub const FIRST_CYCLE_YEAR: i64 = 2021;

/// Hour offsets selected by a year's position within its cycle
pub const OFFSET_TABLE: [i64; 3] = [15, 18, 96];

/// Hours added by every complete cycle
pub const CYCLE_HOURS: i64 = 192;

/// The fixed anchor instant all results are computed from
pub fn epoch() -> Option<DateTime<Tz>> {
    PILOT_TIMEZONE
        .with_ymd_and_hms(EPOCH_YEAR, EPOCH_MONTH, EPOCH_DAY, EPOCH_HOUR, 0, 0)
        .single()
}

/// Number of hours `target_year` is shifted from the epoch.
///
/// Returns `None` only when the arithmetic overflows `i64`.
pub fn offset_hours(target_year: i64) -> Option<i64> {
    if target_year < FIRST_CYCLE_YEAR {
        return Some(0);
    }

    let k = target_year - FIRST_CYCLE_YEAR;
    let cycle_len = OFFSET_TABLE.len() as i64;
    let cycle = k.div_euclid(cycle_len);
    let position = usize::try_from(k.rem_euclid(cycle_len)).ok()?;
    let base = OFFSET_TABLE.get(position).copied()?;

    cycle.checked_mul(CYCLE_HOURS)?.checked_add(base)
}

/// Moment of the piloted New Year for `target_year`.
///
/// Defined for every year whose result fits the calendar; `None` past that.
pub fn pilot_new_year(target_year: i64) -> Option<DateTime<Tz>> {
    let hours = offset_hours(target_year)?;
    let delta = Duration::try_hours(hours)?;
    epoch()?.checked_add_signed(delta)
}

/// A computed result for one requested year
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PilotResult {
    /// Year as requested
    pub year: i64,
    /// Computed instant in the pilot zone
    pub datetime: DateTime<Tz>,
}

impl PilotResult {
    /// Runs the calculation for `year`
    pub fn compute(year: i64) -> Option<Self> {
        pilot_new_year(year).map(|datetime| Self { year, datetime })
    }

    /// `YYYY-MM-DD HH:MM:SS`
    pub fn datetime_string(&self) -> String {
        format_datetime(&self.datetime)
    }

    /// `HH:MM:SS`
    pub fn display_time(&self) -> String {
        format_display_time(&self.datetime)
    }

    /// Fixed zone label
    pub fn timezone(&self) -> &'static str {
        PILOT_TIMEZONE_LABEL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moscow(y: i32, m: u32, d: u32, h: u32) -> DateTime<Tz> {
        PILOT_TIMEZONE.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    #[test]
    fn test_epoch() {
        assert_eq!(epoch().unwrap(), moscow(2020, 1, 1, 12));
    }

    #[test]
    fn test_years_before_first_cycle_return_epoch() {
        for year in [2020, 2019, 1, 0, -5, i64::MIN] {
            assert_eq!(offset_hours(year), Some(0), "year {}", year);
            assert_eq!(pilot_new_year(year), epoch(), "year {}", year);
        }
    }

    #[test]
    fn test_offset_hours_first_cycles() {
        assert_eq!(offset_hours(2021), Some(15));
        assert_eq!(offset_hours(2022), Some(18));
        assert_eq!(offset_hours(2023), Some(96));
        assert_eq!(offset_hours(2024), Some(207));
        assert_eq!(offset_hours(2025), Some(210));
        assert_eq!(offset_hours(2026), Some(288));
    }

    #[test]
    fn test_offset_hours_overflow() {
        assert_eq!(offset_hours(i64::MAX), None);
        assert_eq!(pilot_new_year(i64::MAX), None);
    }

    #[test]
    fn test_hours_cross_day_boundaries() {
        assert_eq!(pilot_new_year(2021).unwrap(), moscow(2020, 1, 2, 3));
        assert_eq!(pilot_new_year(2027).unwrap(), moscow(2020, 1, 18, 3));
    }

    #[test]
    fn test_result_accessors() {
        let result = PilotResult::compute(2023).unwrap();
        assert_eq!(result.year, 2023);
        assert_eq!(result.datetime_string(), "2020-01-05 12:00:00");
        assert_eq!(result.display_time(), "12:00:00");
        assert_eq!(result.timezone(), "Europe/Moscow");
    }
}
