#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
//#![warn(missing_docs)]

#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unused_qualifications)]
#![warn(unused_results)]

//! Dates and date-times that live on a wall calendar, with no time zone.
//!
//! A `LocalDate` is a day, and a `LocalDateTime` is a day and a time to the
//! nearest second. Both can be built from any combination of fields, in or
//! out of range, and are normalised on the way in; both can be read from
//! text in a range of common layouts, and both move by whole days or whole
//! seconds when a `Duration` is added to them.
//!
//! # Examples
//!
//! ```
//! use local_datetime::{LocalDate, LocalDateTime, Duration, DatePiece};
//!
//! let date = LocalDate::parse("2095-09-30").unwrap();
//! assert_eq!(date, LocalDate::ymd(2095, 9, 30));
//! assert_eq!(LocalDate::ymd(2095, 9, 31), LocalDate::ymd(2095, 10, 1));
//!
//! let then = LocalDateTime::parse("2195-074 23:00").unwrap();
//! assert_eq!(then.to_string(), "2195-03-15T23:00:00");
//! assert_eq!((then + Duration::hours(1)).day(), 16);
//!
//! let _ = LocalDateTime::now();
//! ```

mod cal;
pub use crate::cal::{DatePiece, TimePiece};
pub use crate::cal::datetime::{LocalDate, LocalTime, LocalDateTime, Month, Weekday, Year};
pub use crate::cal::fmt::{ISO, ISOString};
pub use crate::cal::parse::{Error as ParseError, FormatMatrix, Parser, Rule};

#[cfg(feature="format")]
pub use crate::cal::fmt::custom::{DateFormat, FormatError, LayoutError};

mod duration;
pub use crate::duration::Duration;

mod instant;
pub use crate::instant::Instant;

mod system;
