//! Serde support, by way of the canonical text form.
//!
//! Values serialise as `yyyy-mm-dd` or `yyyy-mm-ddThh:mm:ss` strings, and
//! deserialise from anything the default parser accepts. Wrap a field in an
//! `Option` if it can be null.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::cal::datetime::{LocalDate, LocalDateTime};
use crate::cal::fmt::ISO;


impl Serialize for LocalDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&self.iso())
    }
}

impl<'de> Deserialize<'de> for LocalDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl Serialize for LocalDateTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&self.iso())
    }
}

impl<'de> Deserialize<'de> for LocalDateTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

