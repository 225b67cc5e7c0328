//! Template-driven formatting and parsing.
//!
//! A template is literal text with fields in curly braces, such as
//! `{:Y}-{:n}-{:D}` or `{_:E}, {:D} {_:M} {:Y}`. A field can carry an
//! alignment (`<`, `^`, or `>`), a `0` to pad with zeroes instead of
//! spaces, and a width, between the brace and the colon. Literal braces are
//! written `{{` and `}}`.
//!
//! | field  | meaning                        |
//! |--------|--------------------------------|
//! | `Y`    | year                           |
//! | `y`    | two-digit year                 |
//! | `M`    | month name (`_` for the long one) |
//! | `n`    | month number                   |
//! | `D`    | day of the month               |
//! | `E`    | weekday name (`_` for the long one) |
//! | `h`    | hour, 24-hour clock            |
//! | `H`    | hour, 12-hour clock            |
//! | `p`    | `AM` or `PM`                   |
//! | `m`    | minute                         |
//! | `s`    | second                         |
//! | `z`    | zone designator                |
//!
//! Names are always in English. Local values carry no zone, so `{:z}`
//! always renders as `Z`, and any zone read by a layout is thrown away.

use std::fmt::Display;
use std::str::CharIndices;

use num_traits::Signed;
use pad::{Alignment, PadStr};
use thiserror::Error;

use crate::cal::{DatePiece, TimePiece};
use crate::cal::datetime::{LocalDate, LocalDateTime, Month, Year};
use crate::cal::parse::scan::{is_space, Scanner};


#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Field<'a> {
    Literal(&'a str),

    Year(NumArguments),
    YearOfCentury(NumArguments),

    MonthName(bool, TextArguments),
    MonthNumber(NumArguments),

    Day(NumArguments),
    WeekdayName(bool, TextArguments),

    Hour(NumArguments),
    TwelveHour(NumArguments),
    Meridiem(TextArguments),
    Minute(NumArguments),
    Second(NumArguments),

    Zone(TextArguments),
}

impl<'a> Field<'a> {
    fn format<T>(&self, when: &T, buf: &mut String, locale: &locale::Time) where T: DatePiece+TimePiece {
        match *self {
            Field::Literal(s)             => buf.push_str(s),
            Field::Year(a)                => a.format(buf, when.year()),
            Field::YearOfCentury(a)       => a.format(buf, when.year_of_century()),
            Field::MonthName(true, a)     => a.format(buf, &locale.long_month_name(when.month().months_from_january())),
            Field::MonthName(false, a)    => a.format(buf, &locale.short_month_name(when.month().months_from_january())),
            Field::MonthNumber(a)         => a.format(buf, when.month() as i8),
            Field::Day(a)                 => a.format(buf, when.day()),
            Field::WeekdayName(true, a)   => a.format(buf, &locale.long_day_name(when.weekday() as usize)),
            Field::WeekdayName(false, a)  => a.format(buf, &locale.short_day_name(when.weekday() as usize)),
            Field::Hour(a)                => a.format(buf, when.hour()),
            Field::TwelveHour(a)          => a.format(buf, twelve_hour(when.hour())),
            Field::Meridiem(a)            => a.format(buf, if when.hour() < 12 { "AM" } else { "PM" }),
            Field::Minute(a)              => a.format(buf, when.minute()),
            Field::Second(a)              => a.format(buf, when.second()),
            Field::Zone(a)                => a.format(buf, "Z"),
        }
    }

    fn scan(&self, scanner: &mut Scanner<'_>, parts: &mut Parts, locale: &locale::Time) -> Result<(), LayoutError> {
        let pos = scanner.position();
        let mismatch = |expected: &str| LayoutError::Mismatch { pos, expected: expected.to_owned() };

        match *self {
            Field::Literal(s) => {
                if !scanner.eat_str(s) { return Err(mismatch(s)) }
            }

            Field::Year(a) => {
                let negative = scanner.eat(b'-');
                let year = a.scan(scanner, 4).ok_or_else(|| mismatch("year"))?;
                parts.year = if negative { -year } else { year };
            }

            Field::YearOfCentury(a) => {
                let year = a.scan(scanner, 2).ok_or_else(|| mismatch("two-digit year"))?;
                parts.year = if year < 69 { 2000 + year } else { 1900 + year };
            }

            Field::MonthName(long, _) => {
                let month = (0 .. 12).find(|&m| {
                    let name = if long { locale.long_month_name(m) } else { locale.short_month_name(m) };
                    scanner.eat_ignoring_case(&name)
                });

                let month = month.ok_or_else(|| mismatch("month name"))?;
                parts.month = month as i64 + 1;
            }

            Field::MonthNumber(a) => parts.month  = a.scan(scanner, 2).ok_or_else(|| mismatch("month"))?,
            Field::Day(a)         => parts.day    = a.scan(scanner, 2).ok_or_else(|| mismatch("day"))?,
            Field::Hour(a)        => parts.hour   = a.scan(scanner, 2).ok_or_else(|| mismatch("hour"))?,
            Field::Minute(a)      => parts.minute = a.scan(scanner, 2).ok_or_else(|| mismatch("minute"))?,
            Field::Second(a)      => parts.second = a.scan(scanner, 2).ok_or_else(|| mismatch("second"))?,

            Field::TwelveHour(a) => {
                let hour = a.scan(scanner, 2).ok_or_else(|| mismatch("hour"))?;
                parts.twelve_hour = Some(hour);
            }

            Field::WeekdayName(long, _) => {
                let found = (0 .. 7).any(|d| {
                    let name = if long { locale.long_day_name(d) } else { locale.short_day_name(d) };
                    scanner.eat_ignoring_case(&name)
                });

                if !found { return Err(mismatch("weekday name")) }
            }

            Field::Meridiem(_) => {
                if scanner.eat_ignoring_case("AM") {
                    parts.afternoon = Some(false);
                }
                else if scanner.eat_ignoring_case("PM") {
                    parts.afternoon = Some(true);
                }
                else {
                    return Err(mismatch("AM or PM"));
                }
            }

            Field::Zone(_) => {
                if !(scanner.eat(b'Z') || scanner.eat(b'z')) {
                    if !(scanner.eat(b'+') || scanner.eat(b'-')) {
                        return Err(mismatch("zone"));
                    }

                    let _ = scanner.digits(2, 2).ok_or_else(|| mismatch("zone"))?;
                    let colon = scanner.eat(b':');
                    let minutes = scanner.digits(2, 2);
                    if colon && minutes.is_none() {
                        return Err(mismatch("zone"));
                    }
                }
            }
        }

        Ok(())
    }
}

fn twelve_hour(hour: i8) -> i8 {
    match hour % 12 {
        0 => 12,
        h => h,
    }
}


/// The fields read by a layout so far. Anything the layout never mentions
/// keeps its default: year 0, January, the 1st, midnight.
#[derive(PartialEq, Debug, Clone, Copy)]
struct Parts {
    year:        i64,
    month:       i64,
    day:         i64,
    hour:        i64,
    twelve_hour: Option<i64>,
    afternoon:   Option<bool>,
    minute:      i64,
    second:      i64,
}

impl Default for Parts {
    fn default() -> Self {
        Self { year: 0, month: 1, day: 1, hour: 0, twelve_hour: None, afternoon: None, minute: 0, second: 0 }
    }
}

impl Parts {
    fn resolve(self) -> Result<LocalDateTime, LayoutError> {
        let out_of_range = |field| LayoutError::OutOfRange { field };

        let month = i8::try_from(self.month).ok()
                        .and_then(Month::from_one)
                        .ok_or_else(|| out_of_range("month"))?;

        let month_length = i64::from(month.days_in_month(Year(self.year).is_leap_year()));
        if !(1 ..= month_length).contains(&self.day) {
            return Err(out_of_range("day"));
        }

        let hour = match (self.twelve_hour, self.afternoon) {
            (Some(h), _) if !(1 ..= 12).contains(&h) => return Err(out_of_range("hour")),
            (Some(h), Some(true))  => h % 12 + 12,
            (Some(h), Some(false)) => h % 12,
            (Some(h), None)        => h,
            (None, Some(true)) if (1 ..= 12).contains(&self.hour) => self.hour % 12 + 12,
            (None, Some(false)) if (1 ..= 12).contains(&self.hour) => self.hour % 12,
            (None, _)              => self.hour,
        };

        if !(0 .. 24).contains(&hour) {
            return Err(out_of_range("hour"));
        }
        if !(0 .. 60).contains(&self.minute) {
            return Err(out_of_range("minute"));
        }
        if !(0 .. 60).contains(&self.second) {
            return Err(out_of_range("second"));
        }

        Ok(LocalDateTime::ymd_hms(self.year, self.month, self.day, hour, self.minute, self.second))
    }
}


/// A compiled template, ready to format values with or read them back.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct DateFormat<'a> {
    pub fields: Vec<Field<'a>>,
}


/// An error in the syntax of a template.
#[derive(PartialEq, Eq, Clone, Debug, Copy, Error)]
pub enum FormatError {
    #[error("invalid character {c:?} at position {pos}")]
    InvalidChar { c: char, colon: bool, pos: Pos },

    #[error("unclosed brace opened at position {open_pos}")]
    OpenCurlyBrace { open_pos: Pos },

    #[error("unexpected closing brace at position {close_pos}")]
    CloseCurlyBrace { close_pos: Pos },

    #[error("no field between positions {open_pos} and {close_pos}")]
    MissingField { open_pos: Pos, close_pos: Pos },

    #[error("field at position {open_pos} is already aligned {current_alignment:?}")]
    DoubleAlignment { open_pos: Pos, current_alignment: Alignment },

    #[error("field at position {open_pos} already has width {current_width}")]
    DoubleWidth { open_pos: Pos, current_width: Width },
}

/// An error reading text with a layout.
#[derive(PartialEq, Eq, Clone, Debug, Error)]
pub enum LayoutError {

    /// The layout itself couldn’t be compiled.
    #[error("invalid layout: {0}")]
    Template(#[from] FormatError),

    /// The text didn’t have what the layout asked for.
    #[error("expected {expected} at position {pos}")]
    Mismatch { pos: Pos, expected: String },

    /// A field was read, but its value can’t be used.
    #[error("{field} out of range")]
    OutOfRange { field: &'static str },

    /// The layout was satisfied with text still left over.
    #[error("extra text {0:?} after the layout")]
    ExtraText(String),
}

pub type Width = usize;
pub type Pos = usize;

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct Arguments {
    pub alignment: Option<Alignment>,
    pub width:     Option<Width>,
    pub pad_char:  Option<char>,
}

impl Arguments {
    pub fn empty() -> Self {
        Self {
            alignment: None,
            width:     None,
            pad_char:  None,
        }
    }

    pub fn set_width(&mut self, width: Width) -> Self {
        self.width = Some(width);
        *self
    }

    pub fn set_alignment(&mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        *self
    }

    pub fn set_pad_char(&mut self, pad_char: char) -> Self {
        self.pad_char = Some(pad_char);
        *self
    }

    pub fn update_width(&mut self, width: Width, open_pos: Pos) -> Result<(), FormatError> {
        match self.width {
            None => { self.width = Some(width); Ok(())},
            Some(existing) => Err(FormatError::DoubleWidth { open_pos, current_width: existing }),
        }
    }

    pub fn update_alignment(&mut self, alignment: Alignment, open_pos: Pos) -> Result<(), FormatError> {
        match self.alignment {
            None => { self.alignment = Some(alignment); Ok(())},
            Some(existing) => Err(FormatError::DoubleAlignment { open_pos, current_alignment: existing }),
        }
    }

    fn format(self, buf: &mut String, string: &str, default_alignment: Alignment) {
        let width     = self.width.unwrap_or(0);
        let pad_char  = self.pad_char.unwrap_or(' ');
        let alignment = self.alignment.unwrap_or(default_alignment);

        buf.push_str(&string.pad(width, pad_char, alignment, false));
    }

    pub fn is_empty(&self) -> bool {
        self.alignment.is_none() && self.width.is_none() && self.pad_char.is_none()
    }
}


#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct TextArguments(Arguments);

impl TextArguments {
    #[cfg(test)]
    fn empty() -> TextArguments {
        TextArguments(Arguments::empty())
    }

    fn format(self, buf: &mut String, string: &str) {
        self.0.format(buf, string, Alignment::Left)
    }
}


/// Numbers line up on the right unless told otherwise. Zero-padding goes
/// between the sign and the digits.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct NumArguments(Arguments);

impl NumArguments {
    #[cfg(test)]
    fn empty() -> NumArguments {
        NumArguments(Arguments::empty())
    }

    fn format<N: Signed + Display>(self, buf: &mut String, number: N) {
        let args = self.0;

        if args.pad_char == Some('0') && number.is_negative() {
            buf.push('-');
            let width = args.width.map(|w| w.saturating_sub(1));
            let digits = number.to_string();
            Arguments { width, ..args }.format(buf, digits.trim_start_matches('-'), Alignment::Right);
        }
        else {
            args.format(buf, &number.to_string(), Alignment::Right);
        }
    }

    /// Reads a number of up to `width` digits, or `default_width` if none
    /// was given. Zero-padded fields need every digit.
    fn scan(self, scanner: &mut Scanner<'_>, default_width: Width) -> Option<i64> {
        let _ = scanner.skip_while(is_space);
        let max = self.0.width.unwrap_or(default_width);
        let min = if self.0.pad_char == Some('0') { max } else { 1 };
        scanner.digits(min, max)
    }
}

impl<'a> DateFormat<'a> {

    /// Renders a value with this template.
    ///
    /// ```rust
    /// use local_datetime::{DateFormat, LocalDate};
    ///
    /// let format = DateFormat::parse("{_:E}, {:D} {_:M} {:Y}").unwrap();
    /// assert_eq!(format.format(&LocalDate::ymd(2095, 9, 30)), "Friday, 30 September 2095");
    /// ```
    pub fn format<T>(&self, when: &T) -> String where T: DatePiece+TimePiece {
        let locale = locale::Time::english();
        let mut buf = String::new();

        for field in &self.fields {
            field.format(when, &mut buf, &locale);
        }

        buf
    }

    /// Reads text that was laid out like this template, returning the
    /// date-time it describes.
    pub fn scan(&self, text: &str) -> Result<LocalDateTime, LayoutError> {
        let locale = locale::Time::english();
        let mut scanner = Scanner::new(text);
        let mut parts = Parts::default();

        for field in &self.fields {
            field.scan(&mut scanner, &mut parts, &locale)?;
        }

        if !scanner.is_done() {
            return Err(LayoutError::ExtraText(String::from_utf8_lossy(scanner.rest()).into_owned()));
        }

        parts.resolve()
    }

    pub fn parse(input: &'a str) -> Result<DateFormat<'a>, FormatError> {
        let mut parser = FormatParser::new(input);
        parser.parse_format_string()?;

        Ok(DateFormat { fields: parser.fields })
    }
}


impl LocalDate {

    /// Reads a date from text laid out like the given template. Any time
    /// fields in the template still have to be matched, but are then
    /// thrown away.
    ///
    /// ```rust
    /// use local_datetime::LocalDate;
    ///
    /// let date = LocalDate::parse_with_layout("{:D}/{:n}/{:Y}", "30/9/2095").unwrap();
    /// assert_eq!(date, LocalDate::ymd(2095, 9, 30));
    /// ```
    pub fn parse_with_layout(layout: &str, text: &str) -> Result<Self, LayoutError> {
        Ok(DateFormat::parse(layout)?.scan(text)?.date())
    }

    /// Renders this date with the given template.
    pub fn format_with_layout(&self, layout: &str) -> Result<String, FormatError> {
        Ok(DateFormat::parse(layout)?.format(self))
    }
}

impl LocalDateTime {

    /// Reads a date-time from text laid out like the given template.
    ///
    /// ```rust
    /// use local_datetime::LocalDateTime;
    ///
    /// let then = LocalDateTime::parse_with_layout("{:M} {:D} {:Y} {:H}:{:m}{:p}", "Sep 30 2095 3:04PM").unwrap();
    /// assert_eq!(then, LocalDateTime::ymd_hms(2095, 9, 30, 15, 4, 0));
    /// ```
    pub fn parse_with_layout(layout: &str, text: &str) -> Result<Self, LayoutError> {
        DateFormat::parse(layout)?.scan(text)
    }

    /// Renders this date-time with the given template.
    pub fn format_with_layout(&self, layout: &str) -> Result<String, FormatError> {
        Ok(DateFormat::parse(layout)?.format(self))
    }
}


struct FormatParser<'a> {
    iter:   CharIndices<'a>,
    fields: Vec<Field<'a>>,
    input:  &'a str,
    anchor: Option<Pos>,
    peekee: Option<Option<(Pos, char)>>,
}

impl<'a> FormatParser<'a> {
    fn new(input: &'a str) -> FormatParser<'a> {
        FormatParser {
            iter:   input.char_indices(),
            fields: Vec::new(),
            input,
            anchor: None,
            peekee: None,
        }
    }

    fn next(&mut self) -> Option<(Pos, char)> {
        match self.peekee.take() {
            Some(p) => p,
            None    => self.iter.next(),
        }
    }

    fn peek(&mut self) -> Option<(Pos, char)> {
        match self.peekee {
            Some(thing) => thing,
            None => {
                let thing = self.iter.next();
                self.peekee = Some(thing);
                thing
            }
        }
    }

    fn collect_up_to_anchor(&mut self, position: Option<Pos>) {
        if let Some(pos) = self.anchor.take() {
            let text = match position {
                Some(new_pos) => &self.input[pos..new_pos],
                None          => &self.input[pos..],
            };
            self.fields.push(Field::Literal(text));
        }
    }

    fn parse_format_string(&mut self) -> Result<(), FormatError> {
        loop {
            match self.next() {
                Some((new_pos, '{')) => {
                    self.collect_up_to_anchor(Some(new_pos));

                    let field = self.parse_a_thing(new_pos)?;
                    self.fields.push(field);
                },
                Some((new_pos, '}')) => {
                    if let Some((_, '}')) = self.next() {
                        self.collect_up_to_anchor(Some(new_pos));

                        let field = Field::Literal(&self.input[new_pos ..=new_pos]);
                        self.fields.push(field);
                    }
                    else {
                        return Err(FormatError::CloseCurlyBrace { close_pos: new_pos });
                    }
                },
                Some((pos, _)) => {
                    if self.anchor.is_none() {
                        self.anchor = Some(pos);
                    }
                }
                None => break,
            }
        }

        // Collect any literal characters after the last field.
        self.collect_up_to_anchor(None);
        Ok(())
    }

    // Literal fields are slices of the template, so an escaped brace
    // becomes its own one-character Literal rather than being merged into
    // the text around it.

    fn parse_number(&mut self, just_parsed_character: char) -> Width {
        let mut number = just_parsed_character.to_digit(10).unwrap_or(0) as Width;

        while let Some((_, n)) = self.peek() {
            match n.to_digit(10) {
                Some(digit) => {
                    number = number.saturating_mul(10).saturating_add(digit as Width);
                    let _ = self.next();
                }
                None => break,
            }
        }

        number
    }

    fn parse_a_thing(&mut self, open_pos: Pos) -> Result<Field<'a>, FormatError> {
        let mut args = Arguments::empty();
        let mut bit = None;
        let close_pos;
        let mut first = true;
        let mut long = false;

        loop {
            match self.next() {
                Some((pos, '{')) if first => return Ok(Field::Literal(&self.input[pos ..=pos])),
                Some((_, '<')) => { args.update_alignment(Alignment::Left, open_pos)?; continue },
                Some((_, '^')) => { args.update_alignment(Alignment::Middle, open_pos)?; continue },
                Some((_, '>')) => { args.update_alignment(Alignment::Right, open_pos)?; continue },
                Some((_, '0')) => { args.pad_char = Some('0'); continue },
                Some((_, n)) if n.is_ascii_digit() => { args.update_width(self.parse_number(n), open_pos)?; continue },
                Some((_, '_')) => { long = true; },
                Some((_, ':')) => {
                    let bitlet = match self.next() {
                        Some((_, 'Y')) => Field::Year(NumArguments(args)),
                        Some((_, 'y')) => Field::YearOfCentury(NumArguments(args)),
                        Some((_, 'M')) => Field::MonthName(long, TextArguments(args)),
                        Some((_, 'n')) => Field::MonthNumber(NumArguments(args)),
                        Some((_, 'D')) => Field::Day(NumArguments(args)),
                        Some((_, 'E')) => Field::WeekdayName(long, TextArguments(args)),
                        Some((_, 'h')) => Field::Hour(NumArguments(args)),
                        Some((_, 'H')) => Field::TwelveHour(NumArguments(args)),
                        Some((_, 'p')) => Field::Meridiem(TextArguments(args)),
                        Some((_, 'm')) => Field::Minute(NumArguments(args)),
                        Some((_, 's')) => Field::Second(NumArguments(args)),
                        Some((_, 'z')) => Field::Zone(TextArguments(args)),
                        Some((pos, c)) => return Err(FormatError::InvalidChar { c, colon: true, pos }),
                        None => return Err(FormatError::OpenCurlyBrace { open_pos }),
                    };

                    bit = Some(bitlet);
                },
                Some((pos, '}')) => { close_pos = pos; break; },
                Some((pos, c)) => return Err(FormatError::InvalidChar { c, colon: false, pos }),
                None => return Err(FormatError::OpenCurlyBrace { open_pos }),
            };

            first = false;
        }

        match bit {
            Some(b) => Ok(b),
            None    => Err(FormatError::MissingField { open_pos, close_pos }),
        }
    }
}
