//! Dates, times, datetimes, months, and weekdays.

use std::cmp::{Ordering, PartialOrd};
use std::fmt;
use std::ops::{Add, Deref, Sub};

use crate::cal::{DatePiece, TimePiece};
use crate::cal::fmt::ISO;
use crate::cal::normalize::{self, Civil, SECONDS_IN_DAY};
use crate::duration::Duration;
use crate::instant::Instant;
use crate::system::sys_local_time;

use self::Month::*;
use self::Weekday::*;


/// A single year.
///
/// This is just a wrapper around `i64` that performs year-related tests.
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Year(pub i64);

impl Year {

    /// Returns whether this year is a leap year.
    ///
    /// ### Examples
    ///
    /// ```
    /// use local_datetime::Year;
    ///
    /// assert_eq!(Year(2000).is_leap_year(), true);
    /// assert_eq!(Year(1900).is_leap_year(), false);
    /// ```
    pub fn is_leap_year(self) -> bool {
        normalize::leap_year_calculations(self.0).1
    }

    /// Returns the number of ISO-8601 weeks in this year, which is 53 if
    /// the year starts on a Thursday (or on a Wednesday in a leap year),
    /// and 52 otherwise.
    ///
    /// ```
    /// use local_datetime::Year;
    ///
    /// assert_eq!(Year(2020).iso_week_count(), 53);
    /// assert_eq!(Year(2021).iso_week_count(), 52);
    /// ```
    pub fn iso_week_count(self) -> i8 {
        // The weekday of the 31st of December, with Sunday as 0.
        fn dec_31(year: i64) -> i64 {
            (year + year.div_euclid(4) - year.div_euclid(100) + year.div_euclid(400)).rem_euclid(7)
        }

        if dec_31(self.0) == 4 || dec_31(self.0 - 1) == 3 { 53 } else { 52 }
    }
}

impl Deref for Year {
    type Target = i64;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}


/// A **local date** is a day-long span on the timeline, *without a time
/// zone*.
///
/// Dates can be built from any year, month, and day, including ones out of
/// their usual ranges, and get normalised on the way in: the 32nd of
/// October is the 1st of November, and month 0 is the December of the
/// previous year.
#[derive(Eq, Clone, Copy)]
pub struct LocalDate {
    ymd:     YMD,
    yearday: i16,
    weekday: Weekday,
}

/// A **local time** is a time on the timeline that recurs once a day,
/// *without a time zone*, to the nearest second.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct LocalTime {
    hour:   i8,
    minute: i8,
    second: i8,
}

/// A **local date-time** is a date and a time of day, *without a time
/// zone*, to the nearest second.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct LocalDateTime {
    date: LocalDate,
    time: LocalTime,
}


impl LocalDate {

    /// Creates a new local date instance from the given year, month, and day
    /// fields.
    ///
    /// The month and day may be out of their usual ranges, in which case
    /// they carry over into the neighbouring months and years.
    /// Dates beyond about 292 billion years either side of 1970 are clamped
    /// to the first or last day of the timeline.
    ///
    /// ### Examples
    ///
    /// ```rust
    /// use local_datetime::{LocalDate, Month, DatePiece};
    ///
    /// let date = LocalDate::ymd(1969, 7, 20);
    /// assert_eq!(date.year(), 1969);
    /// assert_eq!(date.month(), Month::July);
    /// assert_eq!(date.day(), 20);
    ///
    /// assert_eq!(LocalDate::ymd(2100, 2, 29), LocalDate::ymd(2100, 3, 1));
    /// assert_eq!(LocalDate::ymd(2029, 13, 1), LocalDate::ymd(2030, 1, 1));
    /// ```
    pub fn ymd(year: i64, month: i64, day: i64) -> Self {
        Self::from_days_since_1970(normalize::days_since_1970(year, month, day))
    }

    /// Creates a new local date instance from the given year and day-of-year
    /// values, by taking the 1st of January of that year and moving forward
    /// the right number of days.
    ///
    /// Day 0 is the last day of the previous year, and days past the end of
    /// the year run into the next one.
    ///
    /// ### Examples
    ///
    /// ```rust
    /// use local_datetime::{LocalDate, Month, DatePiece};
    ///
    /// let date = LocalDate::yd(2015, 0x100);
    /// assert_eq!(date.year(), 2015);
    /// assert_eq!(date.month(), Month::September);
    /// assert_eq!(date.day(), 13);
    /// ```
    pub fn yd(year: i64, yearday: i64) -> Self {
        Self::ymd(year, 1, yearday)
    }

    /// Returns the current date, according to the system clock. No time
    /// zone gets attached to it; the date is whatever the computer thinks
    /// the local date is.
    pub fn today() -> Self {
        LocalDateTime::now().date()
    }

    /// Computes a `LocalDate` given the number of days that have passed
    /// since **1st January, 1970**, clamped to the ends of the timeline.
    pub(crate) fn from_days_since_1970(days: i64) -> Self {
        Self::from_civil(normalize::civil_from_days(normalize::clamp_days(i128::from(days))))
    }

    fn from_civil(civil: Civil) -> Self {
        Self {
            ymd: YMD { year: civil.year, month: civil.month, day: civil.day },
            yearday: civil.yearday,
            weekday: civil.weekday,
        }
    }

    /// Returns the number of days between **1st January, 1970** and this
    /// date.
    pub(crate) fn days_since_1970(&self) -> i64 {
        normalize::days_since_1970(self.ymd.year, self.ymd.month as i64, i64::from(self.ymd.day))
    }

    /// Returns this date moved by the given number of years, months, and
    /// days, which are added to the fields directly and then normalised.
    ///
    /// This is different to adding a `Duration`, because months and years
    /// have no fixed length: adding one month to the 31st of October gives
    /// the 31st of November, which is the 1st of December.
    ///
    /// ```rust
    /// use local_datetime::LocalDate;
    ///
    /// let date = LocalDate::ymd(2029, 12, 16);
    /// assert_eq!(date.add_ymd(1, 3, 30), LocalDate::ymd(2031, 4, 15));
    /// assert_eq!(date.add_ymd(0, -13, 0), LocalDate::ymd(2028, 11, 16));
    /// ```
    pub fn add_ymd(&self, years: i64, months: i64, days: i64) -> Self {
        Self::ymd(self.ymd.year.saturating_add(years),
                  (self.ymd.month as i64).saturating_add(months),
                  i64::from(self.ymd.day).saturating_add(days))
    }

    /// Returns whether this is the zero date, the 1st of January in the
    /// year 1, which is also what `LocalDate::default()` gives you.
    pub fn is_zero(&self) -> bool {
        self.ymd == YMD::ZERO
    }

    /// Returns the number of seconds between the Unix epoch and midnight
    /// at the start of this date, taking the date to be in UTC.
    pub fn unix(&self) -> i64 {
        self.days_since_1970() * SECONDS_IN_DAY
    }

    /// Returns the instant at midnight UTC at the start of this date.
    pub fn to_instant(&self) -> Instant {
        Instant::at(self.unix())
    }
}

impl Default for LocalDate {
    fn default() -> Self {
        Self::ymd(YMD::ZERO.year, YMD::ZERO.month as i64, i64::from(YMD::ZERO.day))
    }
}

impl DatePiece for LocalDate {
    fn year(&self) -> i64 { self.ymd.year }
    fn month(&self) -> Month { self.ymd.month }
    fn day(&self) -> i8 { self.ymd.day }
    fn yearday(&self) -> i16 { self.yearday }
    fn weekday(&self) -> Weekday { self.weekday }
}

// A date on its own is taken to be at midnight.
impl TimePiece for LocalDate {
    fn hour(&self) -> i8 { 0 }
    fn minute(&self) -> i8 { 0 }
    fn second(&self) -> i8 { 0 }
}

impl fmt::Debug for LocalDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LocalDate({})", self.iso())
    }
}

impl PartialEq for LocalDate {
    fn eq(&self, other: &Self) -> bool {
        self.ymd == other.ymd
    }
}

impl std::hash::Hash for LocalDate {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.ymd.hash(state)
    }
}

impl PartialOrd for LocalDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LocalDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ymd.cmp(&other.ymd)
    }
}

impl Add<Duration> for LocalDate {
    type Output = Self;

    /// Moves the date by the number of *whole* days in the duration; any
    /// part-day is truncated toward zero first.
    fn add(self, duration: Duration) -> Self {
        Self::from_days_since_1970(self.days_since_1970().saturating_add(duration.whole_days()))
    }
}

impl Sub<Duration> for LocalDate {
    type Output = Self;

    fn sub(self, duration: Duration) -> Self {
        Self::from_days_since_1970(self.days_since_1970().saturating_sub(duration.whole_days()))
    }
}

impl Sub<LocalDate> for LocalDate {
    type Output = Duration;

    /// The whole number of days between the two dates, as a duration.
    /// Differences too large to fit are clamped.
    fn sub(self, other: Self) -> Duration {
        Duration::saturating_of_days(self.days_since_1970().saturating_sub(other.days_since_1970()))
    }
}


impl LocalTime {

    /// Computes the number of hours, minutes, and seconds, based on the
    /// number of seconds that have elapsed since midnight, which should be
    /// less than a day.
    pub fn from_seconds_since_midnight(seconds: i64) -> Self {
        let seconds = seconds.rem_euclid(SECONDS_IN_DAY);
        Self {
            hour:   (seconds / 60 / 60) as i8,
            minute: (seconds / 60 % 60) as i8,
            second: (seconds % 60) as i8,
        }
    }

    /// Returns the time at midnight, with all fields initialised to 0.
    pub fn midnight() -> Self {
        Self { hour: 0, minute: 0, second: 0 }
    }

    /// Calculate the number of seconds since midnight this time is at.
    pub fn to_seconds(self) -> i64 {
        i64::from(self.hour) * 3600
            + i64::from(self.minute) * 60
            + i64::from(self.second)
    }
}

impl TimePiece for LocalTime {
    fn hour(&self) -> i8 { self.hour }
    fn minute(&self) -> i8 { self.minute }
    fn second(&self) -> i8 { self.second }
}

impl Default for LocalTime {
    fn default() -> Self {
        Self::midnight()
    }
}

impl fmt::Debug for LocalTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LocalTime({})", self.iso())
    }
}


impl LocalDateTime {

    /// Creates a new local date-time from the given fields, any of which
    /// may be out of its usual range: 24 o’clock is midnight the next day,
    /// and minute -1 is the last minute of the previous hour.
    ///
    /// ```rust
    /// use local_datetime::{LocalDateTime, LocalDate, DatePiece, TimePiece};
    ///
    /// let then = LocalDateTime::ymd_hms(2019, 12, 31, 23, 59, 60);
    /// assert_eq!(then.date(), LocalDate::ymd(2020, 1, 1));
    /// assert_eq!(then.hour(), 0);
    /// ```
    pub fn ymd_hms(year: i64, month: i64, day: i64, hour: i64, minute: i64, second: i64) -> Self {
        Self::at(normalize::seconds_since_1970(year, month, day, hour, minute, second))
    }

    /// Computes a complete date-time based on the number of seconds that
    /// have elapsed since **midnight, 1st January, 1970**. Counts past
    /// either end of the timeline, about 292 billion years away, are
    /// clamped to that end.
    pub fn at(seconds_since_1970_epoch: i64) -> Self {
        // Just split the input value into days and seconds, and let
        // LocalDate and LocalTime do all the hard work.
        let seconds = normalize::clamp_seconds(i128::from(seconds_since_1970_epoch));
        let (days, secs) = normalize::split_seconds(seconds);

        Self {
            date: LocalDate::from_days_since_1970(days),
            time: LocalTime::from_seconds_since_midnight(secs),
        }
    }

    /// Creates a new local date time from a local date and a local time.
    pub fn new(date: LocalDate, time: LocalTime) -> Self {
        Self { date, time }
    }

    /// Returns the date portion of this date-time stamp.
    pub fn date(&self) -> LocalDate {
        self.date
    }

    /// Returns the time portion of this date-time stamp.
    pub fn time(&self) -> LocalTime {
        self.time
    }

    /// Creates a new date-time stamp set to the current time, as the
    /// system clock reads it, without a time zone.
    pub fn now() -> Self {
        let (year, month, day, hour, minute, second) = sys_local_time();
        Self::ymd_hms(year, month, day, hour, minute, second)
    }

    /// Returns this date-time with the given numbers of years, months, and
    /// days added to its date fields, then normalised. The time of day
    /// stays the same.
    pub fn add_ymd(&self, years: i64, months: i64, days: i64) -> Self {
        Self::new(self.date.add_ymd(years, months, days), self.time)
    }

    /// Returns whether this is the zero date-time, midnight at the start
    /// of the 1st of January in the year 1.
    pub fn is_zero(&self) -> bool {
        self.date.is_zero() && self.time == LocalTime::midnight()
    }

    /// Returns the number of seconds between the Unix epoch and this
    /// date-time, reading it as though it were in UTC.
    pub fn unix(&self) -> i64 {
        self.date.unix() + self.time.to_seconds()
    }

    /// Returns the instant this date-time would be at in UTC.
    pub fn to_instant(&self) -> Instant {
        Instant::at(self.unix())
    }
}

impl Default for LocalDateTime {
    fn default() -> Self {
        Self::new(LocalDate::default(), LocalTime::midnight())
    }
}

impl DatePiece for LocalDateTime {
    fn year(&self) -> i64 { self.date.ymd.year }
    fn month(&self) -> Month { self.date.ymd.month }
    fn day(&self) -> i8 { self.date.ymd.day }
    fn yearday(&self) -> i16 { self.date.yearday }
    fn weekday(&self) -> Weekday { self.date.weekday }
}

impl TimePiece for LocalDateTime {
    fn hour(&self) -> i8 { self.time.hour }
    fn minute(&self) -> i8 { self.time.minute }
    fn second(&self) -> i8 { self.time.second }
}

impl fmt::Debug for LocalDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LocalDateTime({})", self.iso())
    }
}

impl Add<Duration> for LocalDateTime {
    type Output = Self;

    /// Moves the date-time by the number of *whole* seconds in the
    /// duration; any part-second is truncated toward zero first.
    fn add(self, duration: Duration) -> Self {
        Self::at(self.unix().saturating_add(duration.whole_seconds()))
    }
}

impl Sub<Duration> for LocalDateTime {
    type Output = Self;

    fn sub(self, duration: Duration) -> Self {
        Self::at(self.unix().saturating_sub(duration.whole_seconds()))
    }
}

impl Sub<LocalDateTime> for LocalDateTime {
    type Output = Duration;

    /// The whole number of seconds between the two date-times, as a
    /// duration. Differences too large to fit are clamped.
    fn sub(self, other: Self) -> Duration {
        let days = self.date.days_since_1970().saturating_sub(other.date.days_since_1970());
        let seconds = self.time.to_seconds() - other.time.to_seconds();

        match days.checked_mul(SECONDS_IN_DAY).and_then(|s| s.checked_add(seconds)) {
            Some(total) => Duration::of(total),
            None if days < 0 => Duration::of(i64::MIN),
            None => Duration::of(i64::MAX),
        }
    }
}


/// A **YMD** is an implementation detail of `LocalDate`: the normalised
/// year, month, and day, which is all that two dates get compared on.
#[derive(PartialEq, PartialOrd, Eq, Ord, Hash, Clone, Debug, Copy)]
struct YMD {
    year:    i64,
    month:   Month,
    day:     i8,
}

impl YMD {
    const ZERO: Self = Self { year: 1, month: January, day: 1 };
}


/// A month of the year, starting with January, and ending with December.
///
/// This is stored as an enum instead of just a number to prevent
/// off-by-one errors: is month 2 February (1-indexed) or March (0-indexed)?
/// In this case, it’s 1-indexed, to have January become 1 when you use
/// `as i64` in code.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Clone, Copy)]
pub enum Month {
    January =  1, February =  2, March     =  3,
    April   =  4, May      =  5, June      =  6,
    July    =  7, August   =  8, September =  9,
    October = 10, November = 11, December  = 12,
}

#[allow(clippy::match_same_arms)]
impl Month {

    /// Returns the number of days in this month, depending on whether it’s
    /// a leap year or not.
    pub fn days_in_month(self, leap_year: bool) -> i8 {
        match self {
            January   => 31, February  => if leap_year { 29 } else { 28 },
            March     => 31, April     => 30,
            May       => 31, June      => 30,
            July      => 31, August    => 31,
            September => 30, October   => 31,
            November  => 30, December  => 31,
        }
    }

    /// Returns the number of days that have elapsed in a year *before* this
    /// month begins, with no leap year check.
    pub(crate) fn days_before_start(self) -> i16 {
        match self {
            January =>   0, February =>  31, March     =>  59,
            April   =>  90, May      => 120, June      => 151,
            July    => 181, August   => 212, September => 243,
            October => 273, November => 304, December  => 334,
        }
    }

    pub fn months_from_january(self) -> usize {
        self as usize - 1
    }

    /// Returns the month based on a number, with January as **Month 1**,
    /// February as **Month 2**, and so on.
    ///
    /// ```rust
    /// use local_datetime::Month;
    /// assert_eq!(Month::from_one(5), Some(Month::May));
    /// assert!(Month::from_one(0).is_none());
    /// ```
    pub fn from_one(month: i8) -> Option<Self> {
        Some(match month {
             1 => January,   2 => February,   3 => March,
             4 => April,     5 => May,        6 => June,
             7 => July,      8 => August,     9 => September,
            10 => October,  11 => November,  12 => December,
             _ => return None,
        })
    }

    /// Returns the month based on a number, with January as **Month 0**,
    /// February as **Month 1**, and so on.
    ///
    /// ```rust
    /// use local_datetime::Month;
    /// assert_eq!(Month::from_zero(5), Some(Month::June));
    /// assert!(Month::from_zero(12).is_none());
    /// ```
    pub fn from_zero(month: i8) -> Option<Self> {
        match month {
            0 ..= 11 => Self::from_one(month + 1),
            _ => None,
        }
    }
}


/// A named day of the week.
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
pub enum Weekday {
    Sunday, Monday, Tuesday, Wednesday, Thursday, Friday, Saturday,
}

// Sunday is Day 0, while ISO-8601 counts Monday as Day 1. Weekdays get no
// Ord instance because there’s no real standard as to whether Sunday
// should come before Monday, or the other way around.

impl Weekday {

    /// Returns the ISO-8601 number of this weekday, from Monday as 1 to
    /// Sunday as 7.
    pub fn days_from_monday_as_one(self) -> i8 {
        match self {
            Sunday   => 7,  Monday    => 1,
            Tuesday  => 2,  Wednesday => 3,
            Thursday => 4,  Friday    => 5,
            Saturday => 6,
        }
    }

    /// Return the weekday based on a number, with Sunday as Day 0, Monday as
    /// Day 1, and so on.
    ///
    /// ```rust
    /// use local_datetime::Weekday;
    /// assert_eq!(Weekday::from_zero(4), Some(Weekday::Thursday));
    /// assert!(Weekday::from_zero(7).is_none());
    /// ```
    pub fn from_zero(weekday: i8) -> Option<Self> {
        Some(match weekday {
            0 => Sunday,     1 => Monday,    2 => Tuesday,
            3 => Wednesday,  4 => Thursday,  5 => Friday,
            6 => Saturday,   _ => return None,
        })
    }

    /// Return the weekday based on its ISO-8601 number, with Monday as
    /// Day 1 and Sunday as Day 7.
    pub fn from_one(weekday: i8) -> Option<Self> {
        match weekday {
            7 => Some(Sunday),
            1 ..= 6 => Self::from_zero(weekday),
            _ => None,
        }
    }
}
