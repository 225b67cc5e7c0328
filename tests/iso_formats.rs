use local_datetime::{ISO, LocalDate, LocalTime, LocalDateTime};
use iso8601::Date;


mod datetimes {
    use super::*;

    #[test]
    fn recently() {
        let date = LocalDate::ymd(1600, 2, 28);
        let debugged = date.iso().to_string();

        assert_eq!(debugged, "1600-02-28");
    }

    #[test]
    fn just_then() {
        let date = LocalDate::ymd(-753, 12, 1);
        let debugged = date.iso().to_string();

        assert_eq!(debugged, "-0753-12-01");
    }

    #[test]
    fn far_far_future() {
        let date = LocalDate::ymd(10601, 1, 31);
        let debugged = date.iso().to_string();

        assert_eq!(debugged, "10601-01-31");
    }

    #[test]
    fn midday() {
        let time = LocalTime::from_seconds_since_midnight(12 * 3600);
        let debugged = time.iso().to_string();

        assert_eq!(debugged, "12:00:00");
    }

    #[test]
    fn ascending() {
        let then = LocalDateTime::ymd_hms(2009, 2, 13, 23, 31, 30);
        let debugged = then.iso().to_string();

        assert_eq!(debugged, "2009-02-13T23:31:30");
    }

    #[test]
    fn zero_value() {
        assert_eq!(LocalDateTime::default().to_string(), "0001-01-01T00:00:00");
    }
}


// The canonical forms are checked against an independent ISO 8601 reader.
mod oracle {
    use super::*;

    #[test]
    fn dates() {
        for &(y, m, d) in &[(1600, 2, 28), (1970, 1, 1), (2000, 2, 29), (2095, 9, 30), (9999, 12, 31)] {
            let text = LocalDate::ymd(y, m, d).to_string();

            match iso8601::date(&text) {
                Ok(Date::YMD { year, month, day }) => {
                    assert_eq!((i64::from(year), i64::from(month), i64::from(day)), (y, m, d), "{}", text);
                }
                other => panic!("{} read back as {:?}", text, other),
            }
        }
    }

    #[test]
    fn date_times() {
        let then = LocalDateTime::ymd_hms(2009, 2, 13, 23, 31, 30);
        let text = then.to_string();
        let parsed = iso8601::datetime(&text).unwrap();

        assert_eq!(parsed.date, Date::YMD { year: 2009, month: 2, day: 13 });
        assert_eq!((parsed.time.hour, parsed.time.minute, parsed.time.second), (23, 31, 30));
    }

    #[test]
    fn round_trips_through_the_parser() {
        let then = LocalDateTime::ymd_hms(1999, 12, 31, 23, 59, 59);
        assert_eq!(LocalDateTime::parse(&then.to_string()), Ok(then));
        assert_eq!(LocalDate::parse(&then.date().to_string()), Ok(then.date()));
    }
}
