//! The catalogue of text patterns the parser recognises.
//!
//! A pattern is a date form, optionally followed by a time of day. There
//! are two kinds of date form, calendar dates (year, month, day) and
//! ordinal dates (year, day of year), and four time forms. The matrix
//! crosses them in a fixed order, and the parser takes the first rule that
//! matches, so the same text always resolves the same way.

use std::fmt;

use super::scan::{is_space, Scanner};


/// The byte between the fields of a date, if there is one.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Separator {
    Dash,
    Dot,
    Slash,
    Nothing,
}

impl Separator {
    fn byte(self) -> Option<u8> {
        match self {
            Separator::Dash    => Some(b'-'),
            Separator::Dot     => Some(b'.'),
            Separator::Slash   => Some(b'/'),
            Separator::Nothing => None,
        }
    }
}


/// The date half of a pattern.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum DateForm {

    /// `yyyy-m-d`, `yyyy.m.d`, `yyyy/m/d`, or `yyyymmdd`. Months and days
    /// take one or two digits when separated, and exactly two otherwise.
    Calendar(Separator),

    /// `yyyy-ddd` or `yyyyddd`, with exactly three digits of day.
    Ordinal(Separator),
}

/// The time half of a pattern.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum TimeForm {

    /// `h:m:s` or `h:m`, with one or two digits per field.
    Colons { seconds: bool },

    /// `hhmmss` or `hhmm`, with exactly two digits per field.
    Bare { seconds: bool },
}

/// What joins a date to its time.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Joiner {
    T,
    Whitespace,
}

/// What may follow the date half of a pattern.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Tail {

    /// Nothing at all.
    Nothing,

    /// An optional `T` and run of time-ish characters, which get checked
    /// no further and then thrown away. Used when only a date is wanted.
    ThrowAway,

    /// A time of day.
    Time(Joiner, TimeForm),
}


/// The fields that a matching rule extracted, before any normalisation.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub struct Fields {
    pub year:   i64,
    pub day:    DayFields,
    pub hour:   i64,
    pub minute: i64,
    pub second: i64,
}

/// The part of a date after its year.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum DayFields {
    MonthDay { month: i64, day: i64 },
    YearDay(i64),
}


/// One entry in the matrix: a date form and what may follow it.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub struct Rule {
    pub date: DateForm,
    pub tail: Tail,
}

impl Rule {

    /// Matches this rule against the whole of the (already trimmed) input,
    /// returning the extracted fields if every byte was accounted for.
    pub fn apply(&self, input: &str) -> Option<Fields> {
        let mut scanner = Scanner::new(input);
        let (year, day) = self.date.scan(&mut scanner)?;

        let (hour, minute, second) = match self.tail {
            Tail::Nothing => (0, 0, 0),
            Tail::ThrowAway => {
                if scanner.eat(b'T') {
                    let _ = scanner.skip_while(is_throwaway);
                }
                (0, 0, 0)
            }
            Tail::Time(joiner, form) => {
                match joiner {
                    Joiner::T          => if !scanner.eat(b'T') { return None },
                    Joiner::Whitespace => if scanner.skip_while(is_space) == 0 { return None },
                }

                let clock = form.scan(&mut scanner)?;
                if joiner == Joiner::T {
                    scan_zone(&mut scanner)?;
                }
                clock
            }
        };

        if scanner.is_done() {
            Some(Fields { year, day, hour, minute, second })
        }
        else {
            None
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = |s: Separator| s.byte().map(char::from).map(String::from).unwrap_or_default();

        match self.date {
            DateForm::Calendar(Separator::Nothing) => write!(f, "yyyymmdd")?,
            DateForm::Calendar(s)                  => write!(f, "yyyy{0}m{0}d", sep(s))?,
            DateForm::Ordinal(s)                   => write!(f, "yyyy{}ddd", sep(s))?,
        }

        match self.tail {
            Tail::Nothing   => Ok(()),
            Tail::ThrowAway => write!(f, "[T…]"),
            Tail::Time(joiner, form) => {
                let joiner = match joiner { Joiner::T => "T", Joiner::Whitespace => " " };
                let time = match form {
                    TimeForm::Colons { seconds: true }  => "h:m:s[.f]",
                    TimeForm::Colons { seconds: false } => "h:m",
                    TimeForm::Bare { seconds: true }    => "hhmmss[.f]",
                    TimeForm::Bare { seconds: false }   => "hhmm",
                };
                write!(f, "{}{}", joiner, time)
            }
        }
    }
}

impl DateForm {
    fn scan(self, scanner: &mut Scanner<'_>) -> Option<(i64, DayFields)> {
        let year = scanner.year()?;

        match self {
            DateForm::Calendar(separator) => {
                let (month, day) = match separator.byte() {
                    Some(byte) => {
                        if !scanner.eat(byte) { return None }
                        let month = scanner.digits(1, 2)?;
                        if !scanner.eat(byte) { return None }
                        (month, scanner.digits(1, 2)?)
                    }
                    None => (scanner.digits(2, 2)?, scanner.digits(2, 2)?),
                };

                Some((year, DayFields::MonthDay { month, day }))
            }

            DateForm::Ordinal(separator) => {
                if let Some(byte) = separator.byte() {
                    if !scanner.eat(byte) { return None }
                }

                Some((year, DayFields::YearDay(scanner.digits(3, 3)?)))
            }
        }
    }
}

impl TimeForm {
    fn scan(self, scanner: &mut Scanner<'_>) -> Option<(i64, i64, i64)> {
        let (hour, minute, second, fraction) = match self {
            TimeForm::Colons { seconds } => {
                let hour = scanner.digits(1, 2)?;
                if !scanner.eat(b':') { return None }
                let minute = scanner.digits(1, 2)?;

                if seconds {
                    if !scanner.eat(b':') { return None }
                    (hour, minute, scanner.digits(1, 2)?, true)
                }
                else {
                    (hour, minute, 0, false)
                }
            }

            TimeForm::Bare { seconds } => {
                let hour = scanner.digits(2, 2)?;
                let minute = scanner.digits(2, 2)?;

                if seconds {
                    (hour, minute, scanner.digits(2, 2)?, true)
                }
                else {
                    (hour, minute, 0, false)
                }
            }
        };

        // Fractions of a second are allowed after a seconds field, but are
        // always discarded: these values only go down to the second.
        if fraction && scanner.eat(b'.') {
            let _ = scanner.skip_while(|b| b.is_ascii_digit());
        }

        Some((hour, minute, second))
    }
}

/// Reads and discards an optional zone designator: `Z`, `±hh`, `±hhmm`, or
/// `±hh:mm`. Returns `None` if one was started but not finished.
fn scan_zone(scanner: &mut Scanner<'_>) -> Option<()> {
    if scanner.eat(b'Z') || scanner.eat(b'z') {
        return Some(());
    }

    if scanner.eat(b'+') || scanner.eat(b'-') {
        let _ = scanner.digits(2, 2)?;
        if scanner.eat(b':') {
            let _ = scanner.digits(2, 2)?;
        }
        else {
            let _ = scanner.digits(2, 2);
        }
    }

    Some(())
}

/// The characters that can appear in a time that is about to be thrown
/// away, zones included.
fn is_throwaway(byte: u8) -> bool {
    matches!(byte, b'0' ..= b'9' | b':' | b'.' | b'z' | b'Z' | b'+' | b'-')
}


/// Calendar date forms, in the order they get tried.
const CALENDAR_DATES: [DateForm; 4] = [
    DateForm::Calendar(Separator::Dash),
    DateForm::Calendar(Separator::Nothing),
    DateForm::Calendar(Separator::Dot),
    DateForm::Calendar(Separator::Slash),
];

/// Ordinal date forms, in the order they get tried. These come after all
/// the calendar forms.
const ORDINAL_DATES: [DateForm; 2] = [
    DateForm::Ordinal(Separator::Dash),
    DateForm::Ordinal(Separator::Nothing),
];

/// Time forms, in the order they get tried.
const TIMES: [TimeForm; 4] = [
    TimeForm::Colons { seconds: true },
    TimeForm::Colons { seconds: false },
    TimeForm::Bare { seconds: true },
    TimeForm::Bare { seconds: false },
];


/// The full, ordered set of rules: one list for reading dates, and one for
/// reading date-times.
///
/// The matrix is built once and never changes afterwards, so it can be
/// shared between threads without any locking.
#[derive(PartialEq, Debug, Clone)]
pub struct FormatMatrix {
    dates:      Vec<Rule>,
    date_times: Vec<Rule>,
}

impl FormatMatrix {
    pub fn new() -> Self {
        let date_forms = CALENDAR_DATES.iter().chain(ORDINAL_DATES.iter());

        let dates = date_forms.clone()
            .map(|&date| Rule { date, tail: Tail::ThrowAway })
            .collect();

        let mut date_times = Vec::new();
        for &date in date_forms {
            date_times.push(Rule { date, tail: Tail::Nothing });

            for &time in TIMES.iter() {
                date_times.push(Rule { date, tail: Tail::Time(Joiner::T, time) });
                date_times.push(Rule { date, tail: Tail::Time(Joiner::Whitespace, time) });
            }
        }

        Self { dates, date_times }
    }

    /// The rules for reading a date, in priority order.
    pub fn dates(&self) -> &[Rule] {
        &self.dates
    }

    /// The rules for reading a date-time, in priority order.
    pub fn date_times(&self) -> &[Rule] {
        &self.date_times
    }
}

impl Default for FormatMatrix {
    fn default() -> Self {
        Self::new()
    }
}
