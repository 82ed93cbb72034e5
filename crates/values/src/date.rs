use std::cell::Cell;

use chrono::DateTime;

/// A calendar instant: an absolute point in time with millisecond
/// resolution, independent of timezone. Mutable, like the values it models.
#[derive(Debug)]
pub struct DateObject {
    millis: Cell<i64>,
}

impl DateObject {
    /// An instant at the given milliseconds since the Unix epoch.
    pub fn new(millis: i64) -> DateObject {
        DateObject {
            millis: Cell::new(millis),
        }
    }

    /// Milliseconds since the Unix epoch.
    pub fn time(&self) -> i64 {
        self.millis.get()
    }

    /// Move this instant to a new epoch-millisecond value.
    pub fn set_time(&self, millis: i64) {
        self.millis.set(millis);
    }

    /// Render as an ISO-8601 UTC timestamp with millisecond precision.
    ///
    /// Returns `None` for instants outside the representable calendar range.
    ///
    /// # Examples
    ///
    /// ```
    /// use kitbag_values::DateObject;
    ///
    /// let date = DateObject::new(1_559_956_716_890);
    /// assert_eq!(date.to_iso_string().as_deref(), Some("2019-06-08T01:18:36.890Z"));
    /// ```
    pub fn to_iso_string(&self) -> Option<String> {
        DateTime::from_timestamp_millis(self.millis.get())
            .map(|instant| instant.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string())
    }
}
