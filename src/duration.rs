//! Lengths of time on the timeline.
//!
//! A `Duration` can be as precise as a nanosecond, but local dates only
//! move in whole days and local date-times in whole seconds. The two
//! truncating operations here are how arithmetic on those values throws
//! away the part of an interval they can’t represent.

use std::ops::{Add, Mul, Neg, Sub};

use crate::cal::normalize::SECONDS_IN_DAY;


const NANOS_IN_SECOND: i64 = 1_000_000_000;


/// A **duration** is a signed length of time on the timeline, irrespective
/// of time zone or calendar format, with nanosecond precision.
///
/// Internally the length is kept as a number of whole seconds, rounded
/// down, and a number of nanoseconds *after* that second that is always
/// between 0 and 999,999,999. So minus one and a half seconds is stored as
/// minus two seconds plus half a second.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Copy, Default)]
pub struct Duration {
    seconds: i64,
    nanoseconds: i32,
}

impl Duration {

    /// The longest representable duration.
    pub const MAX: Self = Self { seconds: i64::MAX, nanoseconds: 999_999_999 };

    /// The most negative representable duration.
    pub const MIN: Self = Self { seconds: i64::MIN, nanoseconds: 0 };

    /// Create a new zero-length duration.
    pub fn zero() -> Self {
        Self { seconds: 0, nanoseconds: 0 }
    }

    /// Create a new duration that’s the given number of seconds long.
    pub fn of(seconds: i64) -> Self {
        Self { seconds, nanoseconds: 0 }
    }

    /// Create a new duration that’s the given number of seconds and
    /// milliseconds long. The milliseconds are added to the seconds, so
    /// `of_ms(-1, 500)` is half a second *before* zero.
    pub fn of_ms(seconds: i64, milliseconds: i64) -> Self {
        Self::of_ns(seconds, milliseconds * 1_000_000)
    }

    /// Create a new duration that’s the given number of seconds and
    /// nanoseconds long. Nanoseconds outside of a single second carry
    /// into the seconds.
    pub fn of_ns(seconds: i64, nanoseconds: i64) -> Self {
        let carry = nanoseconds.div_euclid(NANOS_IN_SECOND);
        let nanoseconds = nanoseconds.rem_euclid(NANOS_IN_SECOND);
        Self { seconds: seconds + carry, nanoseconds: nanoseconds as i32 }
    }

    /// Create a new duration of the given number of 86,400-second days.
    pub fn days(days: i64) -> Self {
        Self::of(days * SECONDS_IN_DAY)
    }

    /// Create a new duration of the given number of hours.
    pub fn hours(hours: i64) -> Self {
        Self::of(hours * 3600)
    }

    /// Create a new duration of the given number of minutes.
    pub fn minutes(minutes: i64) -> Self {
        Self::of(minutes * 60)
    }

    /// Return the seconds and nanoseconds portions of the duration as
    /// a 2-element tuple. The seconds are rounded down, and the
    /// nanoseconds are never negative.
    pub fn lengths(&self) -> (i64, i32) {
        (self.seconds, self.nanoseconds)
    }

    // There are no separate seconds() and nanoseconds() functions, because
    // there’s a danger that people will think that nanoseconds() returns
    // the *total* length in nanoseconds, rather than just this portion.

    /// Returns whether this duration is shorter than zero.
    pub fn is_negative(&self) -> bool {
        self.seconds < 0
    }

    /// The number of whole seconds in this duration, discarding any
    /// fraction of a second. Truncation happens toward zero, so minus one
    /// and a half seconds gives minus one.
    pub fn whole_seconds(&self) -> i64 {
        if self.seconds < 0 && self.nanoseconds > 0 {
            self.seconds + 1
        }
        else {
            self.seconds
        }
    }

    /// The number of whole days in this duration, discarding any
    /// fraction of a day. Truncation happens toward zero, so minus one
    /// and a half days gives minus one.
    pub fn whole_days(&self) -> i64 {
        // Integer division already truncates toward zero, and truncating
        // twice in the same direction is the same as truncating once.
        self.whole_seconds() / SECONDS_IN_DAY
    }

    /// Returns this duration with anything finer than a second removed.
    pub fn truncate_to_seconds(&self) -> Self {
        Self::of(self.whole_seconds())
    }

    /// Returns this duration with anything finer than a day removed.
    pub fn truncate_to_days(&self) -> Self {
        Self::days(self.whole_days())
    }

    /// Creates a duration of the given number of days, clamped to the
    /// longest (or most negative) representable length on overflow.
    pub(crate) fn saturating_of_days(days: i64) -> Self {
        Self::of(days.saturating_mul(SECONDS_IN_DAY))
    }
}

impl Add<Duration> for Duration {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::of_ns(self.seconds + rhs.seconds, i64::from(self.nanoseconds) + i64::from(rhs.nanoseconds))
    }
}

impl Sub<Duration> for Duration {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::of_ns(self.seconds - rhs.seconds, i64::from(self.nanoseconds) - i64::from(rhs.nanoseconds))
    }
}

impl Mul<i64> for Duration {
    type Output = Self;

    fn mul(self, amount: i64) -> Self {
        Self::of_ns(self.seconds * amount, i64::from(self.nanoseconds) * amount)
    }
}

impl Neg for Duration {
    type Output = Self;

    fn neg(self) -> Self {
        Self::of_ns(-self.seconds, -i64::from(self.nanoseconds))
    }
}


#[cfg(test)]
mod test {
    pub(crate) use super::Duration;

    mod addition {
        use super::*;

        #[test]
        fn simple() {
            assert_eq!(Duration::of(10), Duration::of(2) + Duration::of(8))
        }

        #[test]
        fn milliseconds() {
            assert_eq!(Duration::of_ms(0, 500), Duration::of_ms(0, 167) + Duration::of_ms(0, 333))
        }

        #[test]
        fn wrapping() {
            assert_eq!(Duration::of_ms(1, 500), Duration::of_ms(0, 750) + Duration::of_ms(0, 750))
        }

        #[test]
        fn wrapping_exact() {
            assert_eq!(Duration::of(1), Duration::of_ms(0, 500) + Duration::of_ms(0, 500))
        }
    }

    mod subtraction {
        use super::*;

        #[test]
        fn simple() {
            assert_eq!(Duration::of(13), Duration::of(28) - Duration::of(15))
        }

        #[test]
        fn wrapping() {
            assert_eq!(Duration::of_ms(0, 750), Duration::of_ms(1, 500) - Duration::of_ms(0, 750))
        }

        #[test]
        fn below_zero() {
            assert_eq!(Duration::of_ms(0, -250), Duration::of_ms(0, 500) - Duration::of_ms(0, 750));
            assert_eq!(Duration::of_ms(0, -250).lengths(), (-1, 750_000_000));
        }
    }

    mod multiplication {
        use super::*;

        #[test]
        fn simple() {
            assert_eq!(Duration::of(16), Duration::of(8) * 2)
        }

        #[test]
        fn milliseconds() {
            assert_eq!(Duration::of(1), Duration::of_ms(0, 500) * 2)
        }

        #[test]
        fn negative() {
            assert_eq!(Duration::of_ms(-1, -500), Duration::of_ms(0, 500) * -3)
        }
    }

    mod truncation {
        use super::*;

        #[test]
        fn one_and_a_half_days() {
            let d = Duration::hours(36);
            assert_eq!(d.whole_days(), 1);
            assert_eq!(d.truncate_to_days(), Duration::days(1));
        }

        #[test]
        fn minus_one_and_a_half_days() {
            let d = -Duration::hours(36);
            assert_eq!(d.whole_days(), -1);
            assert_eq!(d.truncate_to_days(), Duration::days(-1));
        }

        #[test]
        fn just_under_a_day() {
            assert_eq!(Duration::of_ns(86399, 999_999_999).whole_days(), 0);
            assert_eq!(Duration::of_ns(-86399, -999_999_999).whole_days(), 0);
        }

        #[test]
        fn fractional_seconds() {
            assert_eq!(Duration::of_ms(2, 999).truncate_to_seconds(), Duration::of(2));
            assert_eq!(Duration::of_ms(-2, -999).truncate_to_seconds(), Duration::of(-2));
            assert_eq!(Duration::of_ms(0, -1).truncate_to_seconds(), Duration::zero());
        }

        #[test]
        fn exact_days_stay_put() {
            assert_eq!(Duration::days(-3).truncate_to_days(), Duration::days(-3));
        }
    }
}
