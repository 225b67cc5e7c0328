use local_datetime::{LocalDate, LocalDateTime, Duration, Month, Year, DatePiece, TimePiece};
use proptest::prelude::*;


fn month_length(year: i64, month: i64) -> i64 {
    let month = Month::from_one(month as i8).unwrap();
    i64::from(month.days_in_month(Year(year).is_leap_year()))
}

/// A year, month, and day that are all in range.
fn valid_ymd() -> impl Strategy<Value = (i64, i64, i64)> {
    (-9999_i64 ..= 9999, 1_i64 ..= 12)
        .prop_flat_map(|(y, m)| (Just(y), Just(m), 1 ..= month_length(y, m)))
}


proptest! {
    #[test]
    fn dates_round_trip_through_text((y, m, d) in valid_ymd()) {
        let date = LocalDate::ymd(y, m, d);
        prop_assert_eq!((date.year(), date.month() as i64, i64::from(date.day())), (y, m, d));
        prop_assert_eq!(LocalDate::parse(&date.to_string()), Ok(date));
    }

    #[test]
    fn date_times_round_trip_through_text((y, m, d) in valid_ymd(), seconds in 0_i64 .. 86400) {
        let then = LocalDateTime::ymd_hms(y, m, d, 0, 0, seconds);
        prop_assert_eq!(then.date(), LocalDate::ymd(y, m, d));
        prop_assert_eq!(LocalDateTime::parse(&then.to_string()), Ok(then));
    }

    #[test]
    fn new_years_eve_plus_one_day(year in -9999_i64 ..= 9999) {
        let next = LocalDate::ymd(year, 12, 31) + Duration::days(1);
        prop_assert_eq!(next, LocalDate::ymd(year + 1, 1, 1));
        prop_assert_eq!(next.yearday(), 1);
    }

    #[test]
    fn days_and_differences_agree((y, m, d) in valid_ymd(), days in -100_000_i64 .. 100_000) {
        let date = LocalDate::ymd(y, m, d);
        prop_assert_eq!((date + Duration::days(days)) - date, Duration::days(days));
    }

    #[test]
    fn truncation_is_toward_zero(seconds in -1_000_000_000_i64 .. 1_000_000_000, nanos in 0_i64 .. 1_000_000_000) {
        let duration = Duration::of_ns(seconds, nanos);
        let truncated = duration.truncate_to_days();

        prop_assert!(truncated.whole_seconds().abs() <= duration.whole_seconds().abs());
        prop_assert_eq!(truncated.whole_seconds() % 86400, 0);
        prop_assert!((duration - truncated).whole_seconds().abs() < 86400);
    }

    #[test]
    fn unix_seconds_round_trip(seconds in -100_000_000_000_i64 .. 100_000_000_000) {
        let then = LocalDateTime::at(seconds);
        prop_assert_eq!(then.unix(), seconds);
        prop_assert!(then.hour() < 24);
    }

    #[test]
    fn any_duration_stays_on_the_timeline(start in any::<i64>(), seconds in any::<i64>(), nanos in 0_i64 .. 1_000_000_000) {
        let then = LocalDateTime::at(start);
        let duration = Duration::of_ns(seconds, nanos);
        let (first, last) = (LocalDateTime::at(i64::MIN), LocalDateTime::at(i64::MAX));

        for moved in [then + duration, then - duration] {
            prop_assert!(first <= moved && moved <= last);
        }

        let date = then.date();
        for moved in [date + duration, date - duration] {
            prop_assert!(first.date() <= moved && moved <= last.date());
        }
    }

    #[test]
    fn huge_fields_never_panic(y in any::<i64>(), m in any::<i64>(), d in any::<i64>(), s in any::<i64>()) {
        let date = LocalDate::ymd(y, m, d);
        prop_assert_eq!(LocalDate::ymd(date.year(), date.month() as i64, i64::from(date.day())), date);

        let then = LocalDateTime::ymd_hms(y, m, d, 0, 0, s);
        prop_assert_eq!(LocalDateTime::at(then.unix()), then);
    }

    #[test]
    fn ordinals_match_calendar_dates((y, m, d) in valid_ymd()) {
        let date = LocalDate::ymd(y, m, d);
        prop_assert_eq!(LocalDate::yd(y, i64::from(date.yearday())), date);
    }

    #[test]
    fn rubbish_never_parses(text in "[a-zA-Z ]{0,12}") {
        prop_assert!(LocalDate::parse(&text).is_err());
        prop_assert!(LocalDateTime::parse(&text).is_err());
    }
}


#[test]
fn negative_years_round_trip() {
    let date = LocalDate::ymd(-5, 1, 1);
    assert_eq!(date.to_string(), "-0005-01-01");
    assert_eq!(LocalDate::parse("-0005-01-01"), Ok(date));
}
