//! Proleptic Gregorian arithmetic on plain integers.
//!
//! Epoch-day conversions use Howard Hinnant's `days_from_civil` /
//! `civil_from_days` algorithms, shifted so that day 0 is 1970-01-01.

/// Smallest supported year.
pub const MIN_YEAR: i32 = -9999;

/// Largest supported year.
pub const MAX_YEAR: i32 = 9999;

pub(crate) const SECONDS_PER_DAY: i64 = 86_400;
pub(crate) const NANOS_PER_SECOND: i64 = 1_000_000_000;
pub(crate) const NANOS_PER_DAY: i64 = SECONDS_PER_DAY * NANOS_PER_SECOND;

/// Days from 0000-03-01 to 1970-01-01.
const DAYS_0000_03_01_TO_EPOCH: i64 = 719_468;

/// Days in each month of a common year (index 0 unused, index 1 = January).
pub(crate) const DAYS_PER_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Day-of-year on which each month starts in a common year (index 0 unused).
pub(crate) const MONTH_START_DOY: [u16; 13] =
    [0, 1, 32, 60, 91, 121, 152, 182, 213, 244, 274, 305, 335];

/// Returns `true` if `year` is a Gregorian leap year.
pub fn is_leap_year(year: i64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Returns the number of days in `month` (1..=12) of `year`.
///
/// Returns 0 for an out-of-range month.
pub fn days_in_month(year: i64, month: i64) -> u8 {
    match month {
        2 if is_leap_year(year) => 29,
        1..=12 => DAYS_PER_MONTH[month as usize],
        _ => 0,
    }
}

/// Returns the number of days in `year`.
pub fn days_in_year(year: i64) -> u16 {
    if is_leap_year(year) { 366 } else { 365 }
}

/// Returns the 1-based day of year of a valid `(year, month, day)`.
pub(crate) fn day_of_year(year: i64, month: u8, day: u8) -> u16 {
    let leap_shift = u16::from(month > 2 && is_leap_year(year));
    MONTH_START_DOY[month as usize] + leap_shift + u16::from(day) - 1
}

/// Returns `(month, day)` for a 1-based day of year, or `None` if the
/// day of year does not exist in `year`.
pub(crate) fn month_day_from_doy(year: i64, doy: u16) -> Option<(u8, u8)> {
    if doy == 0 || doy > days_in_year(year) {
        return None;
    }
    let mut remaining = doy;
    for month in 1..=12u8 {
        let len = u16::from(days_in_month(year, i64::from(month)));
        if remaining <= len {
            return Some((month, remaining as u8));
        }
        remaining -= len;
    }
    None
}

/// Converts a valid civil date to days since 1970-01-01.
pub(crate) fn days_from_civil(year: i64, month: u8, day: u8) -> i64 {
    let y = if month <= 2 { year - 1 } else { year };
    let era = (if y >= 0 { y } else { y - 399 }) / 400;
    let yoe = y - era * 400; // [0, 399]
    let m = i64::from(month);
    let doy = (153 * (if m > 2 { m - 3 } else { m + 9 }) + 2) / 5 + i64::from(day) - 1; // [0, 365]
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy; // [0, 146096]
    era * 146_097 + doe - DAYS_0000_03_01_TO_EPOCH
}

/// Converts days since 1970-01-01 to a civil `(year, month, day)`.
pub(crate) fn civil_from_days(days: i64) -> (i64, u8, u8) {
    let z = days + DAYS_0000_03_01_TO_EPOCH;
    let era = (if z >= 0 { z } else { z - 146_096 }) / 146_097;
    let doe = z - era * 146_097; // [0, 146096]
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365; // [0, 399]
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100); // [0, 365]
    let mp = (5 * doy + 2) / 153; // [0, 11]
    let day = (doy - (153 * mp + 2) / 5 + 1) as u8;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u8;
    let year = yoe + era * 400 + i64::from(month <= 2);
    (year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_years() {
        assert!(is_leap_year(2024));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
        assert!(is_leap_year(0));
        assert!(is_leap_year(-4));
    }

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2024, 4), 30);
        assert_eq!(days_in_month(2024, 12), 31);
        assert_eq!(days_in_month(2024, 13), 0);
    }

    #[test]
    fn epoch_is_day_zero() {
        assert_eq!(days_from_civil(1970, 1, 1), 0);
        assert_eq!(civil_from_days(0), (1970, 1, 1));
        assert_eq!(days_from_civil(1969, 12, 31), -1);
        assert_eq!(days_from_civil(2024, 5, 22), 19_865);
    }

    #[test]
    fn range_bounds() {
        assert_eq!(days_from_civil(-9999, 1, 1), -4_371_587);
        assert_eq!(days_from_civil(-9999, 1, 2) * SECONDS_PER_DAY, -377_705_030_400);
        assert_eq!(days_from_civil(9999, 12, 31), 2_932_896);
    }

    #[test]
    fn civil_roundtrip_across_leap_cycle() {
        let start = days_from_civil(1999, 1, 1);
        let end = days_from_civil(2401, 1, 1);
        let mut expected = (1999, 1, 1);
        for days in start..end {
            let civil = civil_from_days(days);
            assert_eq!(civil, expected, "day {days}");
            assert_eq!(days_from_civil(civil.0, civil.1, civil.2), days);
            let (y, m, d) = expected;
            expected = if d < days_in_month(y, i64::from(m)) {
                (y, m, d + 1)
            } else if m < 12 {
                (y, m + 1, 1)
            } else {
                (y + 1, 1, 1)
            };
        }
    }

    #[test]
    fn day_of_year_roundtrip() {
        for year in [2023, 2024] {
            for doy in 1..=days_in_year(year) {
                let (m, d) = month_day_from_doy(year, doy).unwrap();
                assert_eq!(day_of_year(year, m, d), doy, "{year} doy {doy}");
            }
            assert_eq!(month_day_from_doy(year, days_in_year(year) + 1), None);
        }
        assert_eq!(month_day_from_doy(2024, 60), Some((2, 29)));
        assert_eq!(month_day_from_doy(2023, 60), Some((3, 1)));
    }

    #[test]
    fn table_integrity_month_start() {
        for m in 1..12usize {
            assert_eq!(
                MONTH_START_DOY[m] + DAYS_PER_MONTH[m] as u16,
                MONTH_START_DOY[m + 1],
                "MONTH_START_DOY mismatch at month {m}"
            );
        }
    }
}
