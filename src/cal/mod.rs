//! Gregorian calendar calculations on local values, which use years,
//! months, days, hours, minutes, and seconds.

pub(crate) mod datetime;
pub(crate) mod fmt;
pub(crate) mod normalize;
pub(crate) mod parse;
#[cfg(feature="serde")] mod serialization;

use self::datetime::{Month, Weekday, Year};


/// The **date piece** trait is used for date and time values that have
/// date components of years, months, and days.
pub trait DatePiece {

    /// The year, in absolute terms.
    /// This is in human-readable format, so the year 2014 actually has a
    /// year value of 2014, rather than 14 or 114 or anything like that.
    /// The year before 1 is 0, and the one before that is -1.
    fn year(&self) -> i64;

    /// The month of the year.
    fn month(&self) -> Month;

    /// The day of the month, from 1 to 31.
    fn day(&self) -> i8;

    /// The day of the year, from 1 to 366.
    fn yearday(&self) -> i16;

    /// The day of the week.
    fn weekday(&self) -> Weekday;

    /// The ISO-8601 week-numbering year and week, from 1 to 53.
    ///
    /// Week 1 is the week with the year’s first Thursday in it, so the 1st
    /// to the 3rd of January may belong to the last week of the year
    /// before, and the 29th to the 31st of December to week 1 of the year
    /// after.
    fn iso_week(&self) -> (i64, i8) {
        let weekday = i16::from(self.weekday().days_from_monday_as_one());
        let week = ((self.yearday() - weekday + 10) / 7) as i8;

        if week < 1 {
            (self.year() - 1, Year(self.year() - 1).iso_week_count())
        }
        else if week > Year(self.year()).iso_week_count() {
            (self.year() + 1, 1)
        }
        else {
            (self.year(), week)
        }
    }

    /// The number of years into the century.
    /// This is the same as the last two digits of the year.
    fn year_of_century(&self) -> i64 { self.year().rem_euclid(100) }

    /// The year number, relative to the year 2000.
    fn years_from_2000(&self) -> i64 { self.year() - 2000 }
}


/// The **time piece** trait is used for date and time values that have
/// time components of hours, minutes, and seconds.
pub trait TimePiece {

    /// The hour of the day.
    fn hour(&self) -> i8;

    /// The minute of the hour.
    fn minute(&self) -> i8;

    /// The second of the minute.
    fn second(&self) -> i8;
}
