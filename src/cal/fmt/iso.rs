//! The canonical text forms: `yyyy-mm-dd` and `yyyy-mm-ddThh:mm:ss`.
//!
//! These are what `Display` writes, and what every text-based adapter
//! round-trips through, so the parser accepts all of them.

use std::fmt;

use crate::cal::{DatePiece, TimePiece};
use crate::cal::datetime::{LocalDate, LocalTime, LocalDateTime};


/// Values that have a canonical ISO-8601 rendering.
pub trait ISO: Sized {
    fn iso(&self) -> ISOString<'_, Self> {
        ISOString(self)
    }

    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

/// A value wrapped up so that displaying it writes its ISO-8601 form.
#[derive(Debug, Copy, Clone)]
pub struct ISOString<'a, T: 'a>(&'a T);

impl<'a, T> fmt::Display for ISOString<'a, T>
where T: ISO
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ISO::fmt(self.0, f)
    }
}


impl ISO for LocalDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let year = self.year();

        // Years before 1 BCE keep their four digits after the sign, so
        // they line up with everything else: -0005, not -5.
        if year < 0 {
            f.write_str("-")?;
        }

        write!(f, "{:04}-{:02}-{:02}", year.unsigned_abs(), self.month() as usize, self.day())
    }
}

impl ISO for LocalTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour(), self.minute(), self.second())
    }
}

impl ISO for LocalDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}T{}", self.date().iso(), self.time().iso())
    }
}

impl fmt::Display for LocalDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ISO::fmt(self, f)
    }
}

impl fmt::Display for LocalTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ISO::fmt(self, f)
    }
}

impl fmt::Display for LocalDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ISO::fmt(self, f)
    }
}
