//! Reading dates and date-times from text.
//!
//! Text gets trimmed, then matched against the rules of a `FormatMatrix`
//! in order. The first rule to match provides the fields, which are passed
//! to the normaliser as they are, so `2019-02-30` reads as the 2nd of
//! March rather than being rejected.

mod matrix;
pub(crate) mod scan;

use std::str::FromStr;

use lazy_static::lazy_static;
use thiserror::Error;
use tracing::{debug, trace};

use crate::cal::datetime::{LocalDate, LocalDateTime, LocalTime};
use crate::duration::Duration;

pub use self::matrix::{FormatMatrix, Rule};
use self::matrix::{DayFields, Fields};
use self::scan::is_space;


/// An error that occurs when text can’t be read as a date or date-time.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Error)]
pub enum Error {

    /// The text didn’t match any of the date rules.
    #[error("invalid date format")]
    InvalidDateFormat,

    /// The text didn’t match any of the date-time rules.
    #[error("invalid date-time format")]
    InvalidDateTimeFormat,
}


/// A **parser** holds a format matrix and reads text with it.
///
/// Most code never needs one of these directly: `LocalDate::parse`,
/// `LocalDateTime::parse`, and the `FromStr` implementations all share a
/// single parser that gets built the first time it’s used.
#[derive(PartialEq, Debug, Clone, Default)]
pub struct Parser {
    matrix: FormatMatrix,
}

impl Parser {
    pub fn new() -> Self {
        Self { matrix: FormatMatrix::new() }
    }

    /// The rules this parser tries, in order.
    pub fn matrix(&self) -> &FormatMatrix {
        &self.matrix
    }

    /// Reads a date. Anything that looks like a time after a `T` is
    /// allowed but ignored.
    ///
    /// ```rust
    /// use local_datetime::{LocalDate, Parser};
    ///
    /// let parser = Parser::new();
    /// assert_eq!(parser.parse_date("2195-060"), Ok(LocalDate::ymd(2195, 3, 1)));
    /// assert_eq!(parser.parse_date(" '2095/9/30' "), Ok(LocalDate::ymd(2095, 9, 30)));
    /// assert!(parser.parse_date("30/09/2095").is_err());
    /// ```
    pub fn parse_date(&self, input: &str) -> Result<LocalDate, Error> {
        let text = trim(input);
        let fields = first_match(self.matrix.dates(), text).ok_or_else(|| {
            debug!(input, "no date rule matched");
            Error::InvalidDateFormat
        })?;

        Ok(date_from_fields(fields))
    }

    /// Reads a date-time. The time may be missing, in which case it’s
    /// taken to be midnight.
    ///
    /// ```rust
    /// use local_datetime::{LocalDateTime, Parser};
    ///
    /// let parser = Parser::new();
    /// assert_eq!(parser.parse_datetime("2095-09-30T10:11:12Z"),
    ///            Ok(LocalDateTime::ymd_hms(2095, 9, 30, 10, 11, 12)));
    /// assert_eq!(parser.parse_datetime("2195074 0011"),
    ///            Ok(LocalDateTime::ymd_hms(2195, 3, 15, 0, 11, 0)));
    /// ```
    pub fn parse_datetime(&self, input: &str) -> Result<LocalDateTime, Error> {
        let text = trim(input);
        let fields = first_match(self.matrix.date_times(), text).ok_or_else(|| {
            debug!(input, "no date-time rule matched");
            Error::InvalidDateTimeFormat
        })?;

        Ok(match fields.day {
            DayFields::MonthDay { month, day } => {
                LocalDateTime::ymd_hms(fields.year, month, day, fields.hour, fields.minute, fields.second)
            }
            DayFields::YearDay(yearday) => {
                let time_of_day = Duration::hours(fields.hour)
                                + Duration::minutes(fields.minute)
                                + Duration::of(fields.second);

                LocalDateTime::new(LocalDate::yd(fields.year, yearday), LocalTime::midnight()) + time_of_day
            }
        })
    }
}


lazy_static! {
    static ref PARSER: Parser = Parser::new();
}

impl LocalDate {

    /// Reads a date from text using the default rules.
    ///
    /// ```rust
    /// use local_datetime::LocalDate;
    ///
    /// assert_eq!(LocalDate::parse("20951030"), Ok(LocalDate::ymd(2095, 10, 30)));
    /// assert_eq!(LocalDate::parse("2095-09-30T00:00:00+10:00"), Ok(LocalDate::ymd(2095, 9, 30)));
    /// ```
    pub fn parse(input: &str) -> Result<Self, Error> {
        PARSER.parse_date(input)
    }
}

impl LocalDateTime {

    /// Reads a date-time from text using the default rules.
    pub fn parse(input: &str) -> Result<Self, Error> {
        PARSER.parse_datetime(input)
    }
}

impl FromStr for LocalDate {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::parse(input)
    }
}

impl FromStr for LocalDateTime {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::parse(input)
    }
}


fn first_match(rules: &[Rule], text: &str) -> Option<Fields> {
    rules.iter().find_map(|rule| {
        let fields = rule.apply(text)?;
        trace!(rule = %rule, text, "rule matched");
        Some(fields)
    })
}

fn date_from_fields(fields: Fields) -> LocalDate {
    match fields.day {
        DayFields::MonthDay { month, day } => LocalDate::ymd(fields.year, month, day),
        DayFields::YearDay(yearday)        => LocalDate::yd(fields.year, yearday),
    }
}

/// Strips surrounding whitespace, then at most one quote mark from each
/// end, then any whitespace that was inside the quotes.
fn trim(input: &str) -> &str {
    let is_quote = |c: char| c == '"' || c == '\'';

    let text = input.trim_matches(|c: char| c.is_ascii() && is_space(c as u8));
    let text = text.strip_prefix(is_quote).unwrap_or(text);
    let text = text.strip_suffix(is_quote).unwrap_or(text);
    text.trim_matches(|c: char| c.is_ascii() && is_space(c as u8))
}


#[cfg(test)]
mod test {
    use super::*;

    mod trimming {
        use super::*;

        #[test]
        fn whitespace() {
            assert_eq!(trim("  2019-01-01\t\n"), "2019-01-01");
        }

        #[test]
        fn quotes() {
            assert_eq!(trim("\"2019-01-01\""), "2019-01-01");
            assert_eq!(trim("'2019-01-01'"), "2019-01-01");
            assert_eq!(trim(" \" 2019-01-01 ' "), "2019-01-01");
        }

        #[test]
        fn only_one_layer() {
            assert_eq!(trim("''2019-01-01''"), "'2019-01-01'");
        }

        #[test]
        fn lone_quote() {
            assert_eq!(trim("\""), "");
        }
    }

    mod dates {
        use super::*;

        macro_rules! test {
            ($name: ident: $input: expr => $year: expr, $month: expr, $day: expr) => {
                #[test]
                fn $name() {
                    assert_eq!(LocalDate::parse($input), Ok(LocalDate::ymd($year, $month, $day)));
                }
            };
        }

        test!(dashes:         "2095-09-30"  => 2095,  9, 30);
        test!(ordinal_dash:   "2195-060"    => 2195,  3,  1);
        test!(dots:           "2095.09.30"  => 2095,  9, 30);
        test!(slashes:        "2095/09/30"  => 2095,  9, 30);
        test!(compact:        "20951030"    => 2095, 10, 30);
        test!(ordinal:        "2195074"     => 2195,  3, 15);
        test!(short_fields:   "2095-9-3"    => 2095,  9,  3);
        test!(negative_year:  "-0044-03-15" => -44,   3, 15);
        test!(overflow:       "2019-02-30"  => 2019,  3,  2);
        test!(month_zero:     "2019-00-10"  => 2018, 12, 10);
        test!(ordinal_zero:   "2020-000"    => 2019, 12, 31);
        test!(quoted:         "\"2095-09-30\"" => 2095, 9, 30);

        test!(time_with_colons: "2095-09-30T00:00:00+10:000" => 2095, 9, 30);
        test!(time_compact:     "2095-09-30T000000+0900"     => 2095, 9, 30);
        test!(time_ignored:     "2095-09-30T23:59:59Z"       => 2095, 9, 30);

        #[test]
        fn rubbish() {
            assert_eq!(LocalDate::parse("xxxx"), Err(Error::InvalidDateFormat));
            assert_eq!(LocalDate::parse("25"), Err(Error::InvalidDateFormat));
            assert_eq!(LocalDate::parse(""), Err(Error::InvalidDateFormat));
        }

        #[test]
        fn spaced_time_is_not_thrown_away() {
            assert_eq!(LocalDate::parse("2095-09-30 10:00"), Err(Error::InvalidDateFormat));
        }

        #[test]
        fn from_str() {
            let date: LocalDate = "2095-09-30".parse().unwrap();
            assert_eq!(date, LocalDate::ymd(2095, 9, 30));
        }
    }

    mod date_times {
        use super::*;

        macro_rules! test {
            ($name: ident: $input: expr => $year: expr, $month: expr, $day: expr, $hour: expr, $minute: expr, $second: expr) => {
                #[test]
                fn $name() {
                    assert_eq!(LocalDateTime::parse($input),
                               Ok(LocalDateTime::ymd_hms($year, $month, $day, $hour, $minute, $second)));
                }
            };
        }

        test!(bare_date:        "2095-09-30"                   => 2095,  9, 30,  0,  0,  0);
        test!(colons:           "2095-09-30T10:11:12"          => 2095,  9, 30, 10, 11, 12);
        test!(spaced:           "2095-09-30 10:11:12"          => 2095,  9, 30, 10, 11, 12);
        test!(many_spaces:      "2095-09-30 \t 10:11"          => 2095,  9, 30, 10, 11,  0);
        test!(no_seconds:       "2095.09.30T10:11"             => 2095,  9, 30, 10, 11,  0);
        test!(fraction:         "20951030T10:11:12.123456789"  => 2095, 10, 30, 10, 11, 12);
        test!(empty_fraction:   "2195074T001122."              => 2195,  3, 15,  0, 11, 22);
        test!(compact_time:     "2095/09/30T101112"            => 2095,  9, 30, 10, 11, 12);
        test!(zulu:             "2095-09-30T10:11:12Z"         => 2095,  9, 30, 10, 11, 12);
        test!(offset:           "2095-09-30T10:11:12+05:30"    => 2095,  9, 30, 10, 11, 12);
        test!(short_offset:     "2095-09-30T1011-03"           => 2095,  9, 30, 10, 11,  0);
        test!(ordinal_spaced:   "2195-074 23:00"               => 2195,  3, 15, 23,  0,  0);
        test!(hour_overflow:    "2095-09-30T25:00"             => 2095, 10,  1,  1,  0,  0);
        test!(ordinal_overflow: "2195-074T24:00:00"            => 2195,  3, 16,  0,  0,  0);
        test!(quoted:           "'2095-09-30T10:11:12'"        => 2095,  9, 30, 10, 11, 12);

        #[test]
        fn rubbish() {
            assert_eq!(LocalDateTime::parse("xxxx"), Err(Error::InvalidDateTimeFormat));
            assert_eq!(LocalDateTime::parse("2095-09-30T"), Err(Error::InvalidDateTimeFormat));
            assert_eq!(LocalDateTime::parse("2095-09-30 10:11:12Z"), Err(Error::InvalidDateTimeFormat));
        }

        #[test]
        fn error_messages() {
            assert_eq!(Error::InvalidDateFormat.to_string(), "invalid date format");
            assert_eq!(Error::InvalidDateTimeFormat.to_string(), "invalid date-time format");
        }

        #[test]
        fn from_str() {
            let then: LocalDateTime = "2095-09-30T10:11:12".parse().unwrap();
            assert_eq!(then, LocalDateTime::ymd_hms(2095, 9, 30, 10, 11, 12));
        }
    }

    #[test]
    fn parsers_agree() {
        let parser = Parser::default();
        assert_eq!(parser.parse_date("2195-060"), LocalDate::parse("2195-060"));
        assert_eq!(parser.matrix(), &FormatMatrix::new());
    }
}
