// File: crates/daycount-core/src/element.rs
// Summary: The single capability an element needs: a timestamp.

use chrono::{DateTime, TimeZone, Utc};

/// Anything that happened at a point in time.
///
/// Timestamps are compared in UTC, so an element's calendar day is its UTC day.
pub trait Timestamped {
    fn timestamp(&self) -> DateTime<Utc>;
}

impl<Tz: TimeZone> Timestamped for DateTime<Tz> {
    fn timestamp(&self) -> DateTime<Utc> {
        self.with_timezone(&Utc)
    }
}

impl<T: Timestamped + ?Sized> Timestamped for &T {
    fn timestamp(&self) -> DateTime<Utc> {
        (**self).timestamp()
    }
}

impl<T: Timestamped + ?Sized> Timestamped for Box<T> {
    fn timestamp(&self) -> DateTime<Utc> {
        (**self).timestamp()
    }
}
