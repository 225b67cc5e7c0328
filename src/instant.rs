//! Exact points on a timeline.

use std::fmt;
use std::ops::{Add, Sub};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::cal::datetime::{LocalDate, LocalDateTime};
use crate::duration::Duration;
use crate::system::sys_time;


/// An **instant** is an exact point on the timeline, irrespective of time
/// zone or calendar format, with nanosecond precision.
///
/// This is how local values meet the rest of the world: a date turns into
/// the instant at midnight UTC at its start, and a date-time into the
/// instant its fields would name in UTC.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct Instant {
    seconds: i64,
    nanoseconds: i32,
}

impl Instant {

    /// Creates a new Instant set to the number of seconds since the Unix
    /// epoch, and zero nanoseconds.
    pub fn at(seconds: i64) -> Self {
        Self { seconds, nanoseconds: 0 }
    }

    /// Creates a new Instant set to the number of seconds since the
    /// Unix epoch, along with the number of nanoseconds so far this
    /// second. Nanoseconds past a whole second carry into the seconds.
    pub fn at_ns(seconds: i64, nanoseconds: i64) -> Self {
        let (seconds, nanoseconds) = Duration::of_ns(seconds, nanoseconds).lengths();
        Self { seconds, nanoseconds }
    }

    /// Creates a new Instant set to the computer’s current time.
    pub fn now() -> Self {
        let (seconds, nanoseconds) = sys_time();
        Self { seconds, nanoseconds }
    }

    /// Creates a new Instant set to the Unix epoch.
    pub fn at_epoch() -> Self {
        Self::at(0)
    }

    /// Returns the number of seconds at this instant
    pub fn seconds(&self) -> i64 {
        self.seconds
    }

    /// Returns the number of nanoseconds past the second at this instant
    pub fn nanoseconds(&self) -> i32 {
        self.nanoseconds
    }
}

impl fmt::Debug for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Instant({}s/{}ns)", self.seconds, self.nanoseconds)
    }
}

impl Add<Duration> for Instant {
    type Output = Self;

    fn add(self, duration: Duration) -> Self {
        let (seconds, nanoseconds) = duration.lengths();
        Self::at_ns(self.seconds + seconds, i64::from(self.nanoseconds) + i64::from(nanoseconds))
    }
}

impl Sub<Duration> for Instant {
    type Output = Self;

    fn sub(self, duration: Duration) -> Self {
        let (seconds, nanoseconds) = duration.lengths();
        Self::at_ns(self.seconds - seconds, i64::from(self.nanoseconds) - i64::from(nanoseconds))
    }
}

impl Sub<Instant> for Instant {
    type Output = Duration;

    fn sub(self, other: Self) -> Duration {
        Duration::of_ns(self.seconds - other.seconds, i64::from(self.nanoseconds) - i64::from(other.nanoseconds))
    }
}

impl From<SystemTime> for Instant {
    fn from(time: SystemTime) -> Self {
        match time.duration_since(UNIX_EPOCH) {
            Ok(after) => Self::at_ns(after.as_secs() as i64, i64::from(after.subsec_nanos())),
            Err(e) => {
                let before = e.duration();
                Self::at_ns(-(before.as_secs() as i64), -i64::from(before.subsec_nanos()))
            }
        }
    }
}


impl LocalDate {

    /// Returns the date, in UTC, that the given instant falls on.
    pub fn from_instant(instant: Instant) -> Self {
        LocalDateTime::from_instant(instant).date()
    }
}

impl LocalDateTime {

    /// Returns the date-time, in UTC, of the given instant. Anything finer
    /// than a second is dropped.
    pub fn from_instant(instant: Instant) -> Self {
        Self::at(instant.seconds())
    }
}

impl From<Instant> for LocalDate {
    fn from(instant: Instant) -> Self {
        Self::from_instant(instant)
    }
}

impl From<Instant> for LocalDateTime {
    fn from(instant: Instant) -> Self {
        Self::from_instant(instant)
    }
}

impl From<LocalDate> for Instant {
    fn from(date: LocalDate) -> Self {
        date.to_instant()
    }
}

impl From<LocalDateTime> for Instant {
    fn from(datetime: LocalDateTime) -> Self {
        datetime.to_instant()
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use std::time::Duration as StdDuration;

    #[test]
    fn carrying() {
        assert_eq!(Instant::at_ns(1, 1_500_000_000), Instant::at_ns(2, 500_000_000));
        assert_eq!(Instant::at_ns(0, -1).seconds(), -1);
        assert_eq!(Instant::at_ns(0, -1).nanoseconds(), 999_999_999);
    }

    #[test]
    fn adding() {
        let then = Instant::at_ns(10, 750_000_000) + Duration::of_ms(0, 500);
        assert_eq!(then, Instant::at_ns(11, 250_000_000));
        assert_eq!(then - Duration::of_ms(0, 500), Instant::at_ns(10, 750_000_000));
    }

    #[test]
    fn differences() {
        assert_eq!(Instant::at(100) - Instant::at_ns(99, 500_000_000), Duration::of_ms(0, 500));
    }

    #[test]
    fn system_times() {
        let after = UNIX_EPOCH + StdDuration::new(1_234_567_890, 5);
        assert_eq!(Instant::from(after), Instant::at_ns(1_234_567_890, 5));

        let before = UNIX_EPOCH - StdDuration::new(10, 250_000_000);
        assert_eq!(Instant::from(before), Instant::at_ns(-11, 750_000_000));
    }

    #[test]
    fn dates_are_midnight_utc() {
        let instant = Instant::from(LocalDate::ymd(2048, 1, 30));
        assert_eq!(instant, Instant::at(2_463_955_200));
        assert_eq!(LocalDate::from(Instant::at(2_463_955_200 + 86_399)), LocalDate::ymd(2048, 1, 30));
    }

    #[test]
    fn before_the_epoch() {
        assert_eq!(LocalDateTime::from(Instant::at_ns(-1, 500_000_000)), LocalDateTime::ymd_hms(1969, 12, 31, 23, 59, 59));
    }

    #[test]
    fn now_is_after_2000() {
        assert!(Instant::now() > Instant::from(LocalDate::ymd(2000, 1, 1)));
    }
}
