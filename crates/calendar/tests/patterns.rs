use almanac_calendar::{
    CalendarDate, CalendarError, ClockTime, Field, MonthDay, Pattern, Timestamp, YearMonth,
    format, parse,
};

#[test]
fn day_month_year_roundtrip_across_many_dates() {
    let pattern = Pattern::compile("dd MM yyyy").unwrap();
    // Every 37th day from 1600 to 2400 hits every month and day over time.
    let start = CalendarDate::of(1600, 1, 1).unwrap().to_epoch_day();
    let end = CalendarDate::of(2400, 12, 31).unwrap().to_epoch_day();
    for epoch_day in (start..=end).step_by(37) {
        let date = CalendarDate::from_epoch_day(epoch_day).unwrap();
        let text = date.format(&pattern).unwrap();
        assert_eq!(text.len(), 10, "unexpected width for {date}: {text:?}");
        let back = CalendarDate::parse(&text, &pattern).unwrap();
        assert_eq!(back, date, "roundtrip failed via {text:?}");
    }
}

#[test]
fn birthday_parse() {
    let birthday: CalendarDate = parse("18 08 1984", "dd MM yyyy").unwrap();
    assert_eq!(birthday, CalendarDate::of(1984, 8, 18).unwrap());
    assert_eq!(birthday.to_string(), "1984-08-18");
}

#[test]
fn timestamp_pattern_roundtrip() {
    let pattern = Pattern::compile("yyyy/MM/dd HH:mm:ss").unwrap();
    let ts = Timestamp::of_second(2024, 5, 22, 22, 22, 40).unwrap();
    let text = ts.format(&pattern).unwrap();
    assert_eq!(text, "2024/05/22 22:22:40");
    assert_eq!(Timestamp::parse(&text, &pattern).unwrap(), ts);
}

#[test]
fn time_format_drops_nanos() {
    let time = ClockTime::of_nano(9, 5, 7, 123_000_000).unwrap();
    assert_eq!(format(&time, "HH'h'mm").unwrap(), "09h05");
    assert_eq!(format(&time, "HH:mm:ss").unwrap(), "09:05:07");
}

#[test]
fn partial_values_through_patterns() {
    let ym: YearMonth = parse("05/2024", "MM/yyyy").unwrap();
    assert_eq!(ym, YearMonth::of(2024, 5).unwrap());
    let md: MonthDay = parse("29.02", "dd.MM").unwrap();
    assert_eq!(md, MonthDay::of(2, 29).unwrap());
    assert_eq!(format(&md, "MM-dd").unwrap(), "02-29");
    assert!(format(&md, "yyyy").is_err());
}

#[test]
fn mismatches_report_position() {
    let pattern = Pattern::compile("dd MM yyyy").unwrap();
    let cases: &[(&str, usize)] = &[
        ("18-08-1984", 2),
        ("18 08 84", 6),
        ("x8 08 1984", 0),
        ("18 08 1984!", 10),
        ("", 0),
    ];
    for &(text, position) in cases {
        match CalendarDate::parse(text, &pattern) {
            Err(CalendarError::FormatMismatch { position: p, .. }) => {
                assert_eq!(p, position, "wrong position for {text:?}");
            }
            other => panic!("expected FormatMismatch for {text:?}, got {other:?}"),
        }
    }
}

#[test]
fn out_of_range_values_are_invalid_not_mismatched() {
    let pattern = Pattern::compile("dd MM yyyy").unwrap();
    assert!(matches!(
        CalendarDate::parse("31 04 2024", &pattern),
        Err(CalendarError::InvalidDate { .. })
    ));
    assert!(matches!(
        ClockTime::parse("24:00", &Pattern::compile("HH:mm").unwrap()),
        Err(CalendarError::InvalidTime { field: Field::HourOfDay, .. })
    ));
}

#[test]
fn incomplete_patterns() {
    let err = CalendarDate::parse("05 2024", &Pattern::compile("MM yyyy").unwrap()).unwrap_err();
    assert_eq!(
        err,
        CalendarError::IncompleteFields {
            target: "CalendarDate",
            missing: vec![Field::DayOfMonth],
        }
    );
}

#[test]
fn reserved_letters_are_rejected() {
    for source in ["yy-MM-dd", "dd MMM yyyy", "hh:mm", "HH:mm:ss.SSS", "EEEE"] {
        assert!(
            matches!(
                Pattern::compile(source),
                Err(CalendarError::InvalidPattern { .. })
            ),
            "{source:?} should be rejected"
        );
    }
    assert!(Pattern::compile("'unterminated").is_err());
}
