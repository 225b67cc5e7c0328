//! Turning local values into text.

mod iso;
#[cfg(feature="format")] pub(crate) mod custom;

pub use self::iso::{ISO, ISOString};
