//! System-dependent functions, or anything that this library is unable to
//! do without help from the OS.

#[cfg_attr(windows, allow(unused_imports))]
use tracing::debug;

use crate::cal::{DatePiece, TimePiece};
use crate::cal::datetime::LocalDateTime;


/// The fields of a wall-clock reading: year, month, day, hour, minute, and
/// second, with January as month 1.
pub(crate) type Fields = (i64, i64, i64, i64, i64, i64);


/// Returns the system’s current time, as a tuple of seconds elapsed since
/// the Unix epoch, and the nanosecond of the second.
#[cfg(unix)]
pub(crate) fn sys_time() -> (i64, i32) {
    let mut ts = libc::timespec { tv_sec: 0, tv_nsec: 0 };
    let _ = unsafe { libc::clock_gettime(libc::CLOCK_REALTIME, &mut ts) };
    (i64::from(ts.tv_sec), i64::from(ts.tv_nsec) as i32)
}

/// Returns what the system clock reads in the computer’s own time zone.
#[cfg(unix)]
pub(crate) fn sys_local_time() -> Fields {
    let (seconds, _) = sys_time();
    local_fields(seconds)
}

/// Breaks a count of seconds since the Unix epoch into wall-clock fields
/// in the computer’s own time zone.
#[cfg(unix)]
fn local_fields(seconds: i64) -> Fields {
    let time = match libc::time_t::try_from(seconds) {
        Ok(time) => time,
        Err(_) => {
            debug!(seconds, "clock reading does not fit in a time_t; reading it as UTC");
            return utc_fields(seconds);
        }
    };

    let mut tm: libc::tm = unsafe { std::mem::zeroed() };
    let result = unsafe { libc::localtime_r(&time, &mut tm) };

    if result.is_null() {
        debug!(seconds, "localtime_r failed; reading the clock as UTC");
        return utc_fields(seconds);
    }

    (i64::from(tm.tm_year) + 1900,
     i64::from(tm.tm_mon) + 1,
     i64::from(tm.tm_mday),
     i64::from(tm.tm_hour),
     i64::from(tm.tm_min),
     i64::from(tm.tm_sec))
}


#[cfg(windows)] use winapi::shared::minwindef::FILETIME;
#[cfg(windows)] const HECTONANOSECS_IN_SEC: i64 = 10_000_000;
#[cfg(windows)] const HECTONANOSEC_TO_UNIX_EPOCH: i64 = 11_644_473_600 * HECTONANOSECS_IN_SEC;

/// Returns the system’s current time, as a tuple of seconds elapsed since
/// the Unix epoch, and the nanosecond of the second.
#[cfg(windows)]
pub(crate) fn sys_time() -> (i64, i32) {
    use winapi::um::sysinfoapi::GetSystemTimeAsFileTime;

    let mut ft = FILETIME { dwLowDateTime: 0, dwHighDateTime: 0 };
    unsafe { GetSystemTimeAsFileTime(&mut ft) };

    let hectonanos = file_time_as_u64(&ft) as i64 - HECTONANOSEC_TO_UNIX_EPOCH;
    (hectonanos.div_euclid(HECTONANOSECS_IN_SEC), (hectonanos.rem_euclid(HECTONANOSECS_IN_SEC) * 100) as i32)
}

#[cfg(windows)]
fn file_time_as_u64(ft: &FILETIME) -> u64 {
    (u64::from(ft.dwHighDateTime) << 32) | u64::from(ft.dwLowDateTime)
}

/// Returns what the system clock reads in the computer’s own time zone.
#[cfg(windows)]
pub(crate) fn sys_local_time() -> Fields {
    use winapi::um::minwinbase::SYSTEMTIME;
    use winapi::um::sysinfoapi::GetLocalTime;

    let mut st: SYSTEMTIME = unsafe { std::mem::zeroed() };
    unsafe { GetLocalTime(&mut st) };

    (i64::from(st.wYear),
     i64::from(st.wMonth),
     i64::from(st.wDay),
     i64::from(st.wHour),
     i64::from(st.wMinute),
     i64::from(st.wSecond))
}


/// Returns the system’s current time, as a tuple of seconds elapsed since
/// the Unix epoch, and the nanosecond of the second.
#[cfg(not(any(unix, windows)))]
pub(crate) fn sys_time() -> (i64, i32) {
    let now = crate::instant::Instant::from(std::time::SystemTime::now());
    (now.seconds(), now.nanoseconds())
}

/// There’s no portable way to find the local time zone here, so the clock
/// gets read as UTC.
#[cfg(not(any(unix, windows)))]
pub(crate) fn sys_local_time() -> Fields {
    let (seconds, _) = sys_time();
    debug!(seconds, "no local time zone on this platform; reading the clock as UTC");
    utc_fields(seconds)
}


#[cfg_attr(windows, allow(dead_code))]
fn utc_fields(seconds: i64) -> Fields {
    let then = LocalDateTime::at(seconds);
    (then.year(),
     then.month() as i64,
     i64::from(then.day()),
     i64::from(then.hour()),
     i64::from(then.minute()),
     i64::from(then.second()))
}
