use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One event from the USGS feed. Fields are copied verbatim from the
/// feature's `properties` object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Earthquake {
    magnitude: f64,
    place: String,
    time: i64,
    url: String,
}

impl Earthquake {
    pub fn new(magnitude: f64, place: impl Into<String>, time: i64, url: impl Into<String>) -> Self {
        Self {
            magnitude,
            place: place.into(),
            time,
            url: url.into(),
        }
    }

    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    pub fn place(&self) -> &str {
        &self.place
    }

    /// Milliseconds since the Unix epoch, UTC.
    pub fn time_in_millis(&self) -> i64 {
        self.time
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// `None` when the timestamp is outside the range chrono can represent.
    pub fn occurred_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.time)
    }
}
