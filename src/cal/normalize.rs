//! Resolving out-of-range calendar fields into canonical values.
//!
//! Every constructor in this crate funnels through here. The functions
//! accept any year, month, day, hour, minute, and second, carrying
//! overflow (and underflow) into the next larger unit the way the
//! Gregorian calendar would, so none of them can fail. Results that would
//! land past either end of the timeline are clamped to that end.

use crate::cal::datetime::{Month, Weekday};


/// Number of days guaranteed to be in four years.
const DAYS_IN_4Y:   i64 = 365 *   4 +  1;

/// Number of days guaranteed to be in a hundred years.
const DAYS_IN_100Y: i64 = 365 * 100 + 24;

/// Number of days guaranteed to be in four hundred years.
const DAYS_IN_400Y: i64 = 365 * 400 + 97;

/// Number of seconds in a day. As everywhere in this library, leap seconds
/// are simply ignored.
pub(crate) const SECONDS_IN_DAY: i64 = 86400;

/// Number of days between **1st January, 1970** and **1st March, 2000**.
///
/// Having the reference point immediately after a possible leap-year day,
/// on a year that’s a multiple of 400, reduces the maths needed to turn a
/// day count back into a year, month, and day to simple division: the
/// leap day always sits at the very end of a cycle.
///
/// Callers of this crate think in terms of the Unix epoch, so this value
/// never leaves the module.
const EPOCH_DIFFERENCE: i64 = 30 * 365   // 30 years between 2000 and 1970...
                            + 7          // plus seven days for leap years...
                            + 31 + 29;   // plus all the days in January and February in 2000.

/// Number of days between 1st January 1970 and 1st January 2000.
const DAYS_1970_TO_2000: i64 = 10957;

/// The number of days elapsed at the end of each month, counting from the
/// start of March, going backwards from February.
const TIME_TRIANGLE: &[i64; 11] =
    &[31 + 30 + 31 + 30 + 31 + 31 + 30 + 31 + 30 + 31 + 31,  // February
      31 + 30 + 31 + 30 + 31 + 31 + 30 + 31 + 30 + 31,  // January
      31 + 30 + 31 + 30 + 31 + 31 + 30 + 31 + 30,  // December
      31 + 30 + 31 + 30 + 31 + 31 + 30 + 31,  // November
      31 + 30 + 31 + 30 + 31 + 31 + 30,  // October
      31 + 30 + 31 + 30 + 31 + 31,  // September
      31 + 30 + 31 + 30 + 31,  // August
      31 + 30 + 31 + 30,  // July
      31 + 30 + 31,  // June
      31 + 30,  // May
      31]; // April


/// A fully-resolved calendar day, along with the two values that would
/// otherwise have to be recomputed from the day count each time.
#[derive(PartialEq, Debug, Copy, Clone)]
pub(crate) struct Civil {
    pub year:    i64,
    pub month:   Month,
    pub day:     i8,
    pub yearday: i16,
    pub weekday: Weekday,
}

/// Performs two related calculations for leap years, returning the
/// results as a two-part tuple:
///
/// 1. The number of leap days between 1st January 2000 and the start of
///    this year, not counting this year’s own leap day;
/// 2. Whether this year is a leap year or not.
pub(crate) fn leap_year_calculations(year: i64) -> (i64, bool) {
    let year = year - 2000;

    // This calculation is the reverse of `civil_from_days`.
    let (num_400y_cycles, mut remainder) = split_cycles(year, 400);

    // Standard leap-year calculations, performed on the remainder
    let currently_leap_year = remainder == 0 || (remainder % 100 != 0 && remainder % 4 == 0);

    let num_100y_cycles = remainder / 100;
    remainder -= num_100y_cycles * 100;

    let leap_years_elapsed = remainder / 4
        + 97 * num_400y_cycles  // There are 97 leap years in 400 years
        + 24 * num_100y_cycles  // There are 24 leap years in 100 years
        - i64::from(currently_leap_year);

    (leap_years_elapsed, currently_leap_year)
}

/// The first and last day counts on the timeline, roughly 292 billion
/// years either side of 1970. Every second of both days still fits in an
/// `i64` count of seconds, so fields that resolve to somewhere past either
/// end get clamped to it.
pub(crate) const MIN_DAYS: i64 = i64::MIN / SECONDS_IN_DAY + 1;
pub(crate) const MAX_DAYS: i64 = i64::MAX / SECONDS_IN_DAY - 1;

const MIN_SECONDS: i64 = MIN_DAYS * SECONDS_IN_DAY;
const MAX_SECONDS: i64 = MAX_DAYS * SECONDS_IN_DAY + (SECONDS_IN_DAY - 1);

/// Clamps a day count to the ends of the timeline.
pub(crate) fn clamp_days(days: i128) -> i64 {
    days.clamp(i128::from(MIN_DAYS), i128::from(MAX_DAYS)) as i64
}

/// Clamps a count of seconds since the Unix epoch to the ends of the
/// timeline.
pub(crate) fn clamp_seconds(seconds: i128) -> i64 {
    seconds.clamp(i128::from(MIN_SECONDS), i128::from(MAX_SECONDS)) as i64
}

/// Splits a month number that may lie outside 1 to 12 into a number of
/// years to carry and the month within the year, so month 13 is January
/// one year on and month 0 is the December before.
pub(crate) fn carry_months(month: i64) -> (i64, Month) {
    // Splitting `month` itself rather than `month - 1` keeps `i64::MIN` in
    // range.
    let (years, month_index) = match split_cycles(month, 12) {
        (years, 0) => (years - 1, 11),
        (years, index) => (years, index - 1),
    };

    // The index is always in 0..12 here.
    let month = Month::from_zero(month_index as i8).unwrap_or(Month::January);
    (years, month)
}

/// Returns the number of days between 1st January 1970 and the given
/// (possibly out-of-range) year, month, and day, clamped to the timeline.
/// Days past the end of the month simply keep counting into the following
/// months; days below 1 count backwards.
pub(crate) fn days_since_1970(year: i64, month: i64, day: i64) -> i64 {
    clamp_days(wide_days_since_1970(year, month, day))
}

/// The unclamped day count, in a type wide enough that no combination of
/// fields can overflow it.
fn wide_days_since_1970(year: i64, month: i64, day: i64) -> i128 {
    let (carried_years, month) = carry_months(month);
    let years_since_2000 = i128::from(year) + i128::from(carried_years) - 2000;

    // The calendar repeats every 400 years, so whole cycles are a multiple
    // of a fixed length and only the year within its cycle needs the
    // month-by-month sums.
    let cycles = years_since_2000.div_euclid(400);
    let year_in_cycle = 2000 + years_since_2000.rem_euclid(400) as i64;

    cycles * i128::from(DAYS_IN_400Y)
        + i128::from(days_before_month(year_in_cycle, month))
        + i128::from(day) - 1
}

/// Returns the number of days between 1st January 1970 and the first day
/// of the given month.
fn days_before_month(year: i64, month: Month) -> i64 {
    let (leap_days_elapsed, is_leap_year) = leap_year_calculations(year);

    // Work out the number of days from the start of 1970 to the start of
    // this year, which is a multiple of the number of years...
    (year - 2000) * 365

        // Plus the days between the start of 1970 and the start of 2000,
        // and an extra one for 2000 being a leap year itself...
        + DAYS_1970_TO_2000 + 1

        // Plus the number of leap years that have elapsed between
        // now and the start of 2000...
        + leap_days_elapsed

        // Plus the number of days in all the months leading up to
        // the current month...
        + i64::from(month.days_before_start())

        // Plus an extra leap day for *this* year.
        + i64::from(is_leap_year && month >= Month::March)
}

/// Splits a count of seconds since the Unix epoch into a day count and the
/// number of seconds into that day, which is always between 0 and 86399.
pub(crate) fn split_seconds(seconds_since_1970: i64) -> (i64, i64) {
    split_cycles(seconds_since_1970, SECONDS_IN_DAY)
}

/// Resolves a (possibly out-of-range) date and clock reading into the
/// number of seconds since the Unix epoch, clamped to the timeline.
pub(crate) fn seconds_since_1970(year: i64, month: i64, day: i64, hour: i64, minute: i64, second: i64) -> i64 {
    let seconds = wide_days_since_1970(year, month, day) * i128::from(SECONDS_IN_DAY)
        + i128::from(hour) * 3600
        + i128::from(minute) * 60
        + i128::from(second);

    clamp_seconds(seconds)
}

/// Computes the year, month, day, weekday, and yearday of the day that’s
/// the given number of days after 1st January 1970.
pub(crate) fn civil_from_days(days_since_1970: i64) -> Civil {
    let days = days_since_1970 - EPOCH_DIFFERENCE;

    // The Gregorian calendar works in 400-year cycles, which repeat
    // themselves ever after.
    //
    // This calculation works by finding the number of 400-year,
    // 100-year, and 4-year cycles, then constantly subtracting the
    // number of leftover days.
    let (num_400y_cycles, mut remainder) = split_cycles(days, DAYS_IN_400Y);

    // The last century of a cycle is one day longer than the others, as
    // it ends on a leap day, so the 29th of February of a year divisible by
    // 400 must not be mistaken for the start of a fifth century.
    let num_100y_cycles = std::cmp::min(remainder / DAYS_IN_100Y, 3);
    remainder -= num_100y_cycles * DAYS_IN_100Y;  // remainder is now days left in this 100-year cycle

    let num_4y_cycles = remainder / DAYS_IN_4Y;
    remainder -= num_4y_cycles * DAYS_IN_4Y;  // remainder is now days left in this 4-year cycle

    let mut years = std::cmp::min(remainder / 365, 3);
    remainder -= years * 365;  // remainder is now days left in this year

    // Whether the calendar year holding this year’s January and February
    // is a leap year. We already have the numbers of multiples at this
    // point, and it’s safe to re-use them.
    let days_this_year =
        if years == 0 && !(num_4y_cycles == 0 && num_100y_cycles != 0) { 366 }
                                                                  else { 365 };

    // The 306 here is the number of days in a year excluding January and
    // February, which come at the *end* of a year counted from March.
    let mut day_of_year = remainder + days_this_year - 306;
    if day_of_year >= days_this_year {
        day_of_year -= days_this_year;  // wrap around for January and February
    }

    years +=   4 * num_4y_cycles
           + 100 * num_100y_cycles
           + 400 * num_400y_cycles;

    // Scan the time triangle to find the month that has the correct
    // number of days elapsed at the end of it. It goes backwards, hence
    // the “11 - index”.
    let result = TIME_TRIANGLE.iter()
                              .enumerate()
                              .find(|&(_, days)| *days <= remainder);

    let (mut month, month_days) = match result {
        Some((index, days)) => (11 - index as i64, remainder - *days),
        None => (0, remainder),  // No month found? Then it’s March.
    };

    // Need to add 2 to the month in order to compensate for the EPOCH
    // being in March.
    month += 2;

    if month >= 12 {
        years += 1;   // wrap around for January and February
        month -= 12;
    }

    Civil {
        year:    years + 2000,
        month:   Month::from_zero(month as i8).unwrap_or(Month::March),
        day:     (month_days + 1) as i8,
        yearday: (day_of_year + 1) as i16,
        weekday: weekday_from_days(days),
    }
}

/// Computes the weekday, given the number of days that have passed
/// since 1st March 2000.
fn weekday_from_days(days: i64) -> Weekday {
    // March 1st, 2000 was a Wednesday, so add 3 to the number of days.
    let weekday = (days + 3).rem_euclid(7);
    Weekday::from_zero(weekday as i8).unwrap_or(Weekday::Sunday)
}

/// Split a number of periods into a number of whole cycles, and the
/// number of periods left over that don’t fit into a cycle.
///
/// This is essentially a division operation with the result and the
/// remainder, with the difference that a negative value gets ‘wrapped
/// around’ to be a positive value, owing to the way the modulo operator
/// works for negative values.
pub(crate) fn split_cycles(number_of_periods: i64, cycle_length: i64) -> (i64, i64) {
    let mut cycles    = number_of_periods / cycle_length;
    let mut remainder = number_of_periods % cycle_length;

    if remainder < 0 {
        remainder += cycle_length;
        cycles    -= 1;
    }

    (cycles, remainder)
}
