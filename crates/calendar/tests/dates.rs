use almanac_calendar::{
    CalendarDate, CalendarError, ClockTime, Field, Month, Timestamp, days_in_month, days_in_year,
    is_leap_year,
};

#[test]
fn epoch_day_walk_matches_getters() {
    // Walk 2000-01-01 through 2027-12-31 one day at a time.
    let mut expected = CalendarDate::of(2000, 1, 1).unwrap();
    let start = expected.to_epoch_day();
    for offset in 0..10_227 {
        let date = CalendarDate::from_epoch_day(start + offset).unwrap();
        assert_eq!(date, expected, "epoch day {} disagrees", start + offset);
        assert_eq!(date.to_epoch_day(), start + offset);
        assert!(
            (1..=date.length_of_month()).contains(&date.day()),
            "day out of range for {date}"
        );
        assert!(
            (1..=date.length_of_year()).contains(&date.day_of_year()),
            "day of year out of range for {date}"
        );
        assert_eq!(
            CalendarDate::of_year_day(date.year(), date.day_of_year()).unwrap(),
            date,
            "of_year_day roundtrip failed for {date}"
        );
        expected = expected.plus_days(1).unwrap();
    }
    assert_eq!(expected, CalendarDate::of(2028, 1, 1).unwrap());
}

#[test]
fn leap_year_rules() {
    let cases: &[(i64, bool)] = &[
        (1900, false), // divisible by 100
        (2000, true),  // divisible by 400
        (2023, false),
        (2024, true),
        (2100, false),
        (0, true),
        (-4, true),
        (-100, false),
    ];
    for &(year, leap) in cases {
        assert_eq!(is_leap_year(year), leap, "is_leap_year({year})");
        assert_eq!(days_in_year(year), if leap { 366 } else { 365 });
        assert_eq!(days_in_month(year, 2), if leap { 29 } else { 28 });
    }
}

#[test]
fn month_lengths_sum_to_year_length() {
    for year in [1900_i64, 2000, 2023, 2024] {
        let total: u16 = (1..=12).map(|m| u16::from(days_in_month(year, m))).sum();
        assert_eq!(total, days_in_year(year), "year {year}");
    }
}

#[test]
fn ordering_agrees_with_epoch_day() {
    let dates: Vec<CalendarDate> = [
        (1984, 8, 18),
        (2024, 5, 22),
        (2024, 12, 25),
        (-44, 3, 15),
        (2024, 2, 29),
        (1970, 1, 1),
    ]
    .iter()
    .map(|&(y, m, d)| CalendarDate::of(y, m, d).unwrap())
    .collect();
    for &a in &dates {
        for &b in &dates {
            assert_eq!(a < b, a.to_epoch_day() < b.to_epoch_day(), "{a} vs {b}");
            assert_eq!(a.is_before(b), a < b);
            assert_eq!(a.is_after(b), b < a);
            assert_eq!(a.is_equal(b), a == b);
            // Exactly one of before/after/equal holds.
            let relations = [a.is_before(b), a.is_after(b), a.is_equal(b)];
            assert_eq!(relations.iter().filter(|&&r| r).count(), 1);
        }
    }
}

#[test]
fn christmas_fields() {
    let christmas = CalendarDate::of(2024, 12, 25).unwrap();
    assert_eq!(christmas.get(Field::Year).unwrap(), 2024);
    assert_eq!(christmas.get(Field::MonthOfYear).unwrap(), 12);
    assert_eq!(christmas.get(Field::DayOfMonth).unwrap(), 25);
    assert_eq!(christmas.get(Field::DayOfYear).unwrap(), 360);
    assert_eq!(christmas.month(), Month::December);
    assert!(christmas.is_leap_year());
    assert_eq!(christmas.length_of_month(), 31);
    assert_eq!(christmas.length_of_year(), 366);
    assert!(matches!(
        christmas.get(Field::HourOfDay),
        Err(CalendarError::UnsupportedField { field: Field::HourOfDay, .. })
    ));
}

#[test]
fn strict_with_rejects_nonexistent_dates() {
    let leap_day = CalendarDate::of(2024, 2, 29).unwrap();
    assert!(leap_day.with_year(2023).is_err());
    assert_eq!(leap_day.with_year(2028).unwrap().to_string(), "2028-02-29");

    let jan31 = CalendarDate::of(2024, 1, 31).unwrap();
    assert!(jan31.with_month(4).is_err());
    assert_eq!(jan31.plus_months(3).unwrap().to_string(), "2024-04-30");
}

#[test]
fn invalid_constructions() {
    let cases: &[(i32, u8, u8)] = &[
        (2023, 2, 29),
        (2024, 4, 31),
        (2024, 13, 1),
        (2024, 0, 1),
        (2024, 1, 0),
        (10_000, 1, 1),
    ];
    for &(y, m, d) in cases {
        let err = CalendarDate::of(y, m, d).unwrap_err();
        assert!(
            matches!(err, CalendarError::InvalidDate { .. }),
            "expected InvalidDate for {y}-{m}-{d}, got {err:?}"
        );
    }
}

#[test]
fn timestamp_splits_into_date_and_time() {
    let ts = Timestamp::of_second(2024, 12, 25, 12, 10, 30).unwrap();
    assert_eq!(ts.to_date(), CalendarDate::of(2024, 12, 25).unwrap());
    assert_eq!(ts.to_time(), ClockTime::of_second(12, 10, 30).unwrap());
    assert_eq!(ts.to_string(), "2024-12-25T12:10:30");
    assert_eq!(ts.to_date().at_time(ts.to_time()), ts);
}

#[test]
fn timestamp_plus_seconds_crosses_midnight() {
    let late = Timestamp::of(2024, 12, 31, 23, 59).unwrap();
    let next = late.plus_seconds(120).unwrap();
    assert_eq!(next.to_string(), "2025-01-01T00:01");
    assert_eq!(next.plus_seconds(-120).unwrap(), late);
}
