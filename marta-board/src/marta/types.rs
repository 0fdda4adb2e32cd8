//! Wire types for the MARTA rail arrivals API.
//!
//! The upstream feed is loosely typed: every field arrives as a string, and
//! fields are occasionally missing or blank. All fields therefore default to
//! the empty string on deserialization, and the typed accessors below parse
//! lazily and return `Option` rather than failing the whole record.

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// The `DELAY` value the feed uses for a train running exactly on schedule.
pub const ON_TIME_DELAY: &str = "T0S";

/// Accepted formats for `EVENT_TIME`, tried in order after RFC 3339.
const EVENT_TIME_FORMATS: &[&str] = &[
    "%m/%d/%Y %I:%M:%S %p",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
];

/// One train arrival record as reported by the feed.
///
/// A record is a point-in-time observation of one train approaching one
/// station. The same physical train appears in many records per response,
/// one per upcoming station, and successive polls can report the same
/// (train, station) pair at different timestamps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Arrival {
    #[serde(rename = "DESTINATION", default)]
    pub destination: String,
    #[serde(rename = "DIRECTION", default)]
    pub direction: String,
    #[serde(rename = "EVENT_TIME", default)]
    pub event_time: String,
    #[serde(rename = "LINE", default)]
    pub line: String,
    #[serde(rename = "NEXT_ARR", default)]
    pub next_arrival: String,
    #[serde(rename = "STATION", default)]
    pub station: String,
    #[serde(rename = "TRAIN_ID", default)]
    pub train_id: String,
    #[serde(rename = "WAITING_SECONDS", default)]
    pub waiting_seconds: String,
    #[serde(rename = "WAITING_TIME", default)]
    pub waiting_time: String,
    #[serde(rename = "DELAY", default)]
    pub delay: String,
}

impl Arrival {
    /// Parses `event_time` into a timestamp, trying RFC 3339 first and then
    /// the formats the feed has been observed to use. Returns `None` when the
    /// field is blank or in a shape we do not recognise.
    pub fn event_instant(&self) -> Option<NaiveDateTime> {
        let raw = self.event_time.trim();
        if raw.is_empty() {
            return None;
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.naive_utc());
        }
        EVENT_TIME_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
    }

    /// Parses `waiting_seconds` as a signed count. The feed reports boarding
    /// trains with small negative values, so the sign is preserved.
    pub fn waiting_secs(&self) -> Option<i64> {
        self.waiting_seconds.trim().parse().ok()
    }

    /// Whether the feed has published a concrete next-arrival clock time.
    pub fn has_scheduled_arrival(&self) -> bool {
        !self.next_arrival.trim().is_empty()
    }

    /// Whether the train is running exactly on schedule.
    pub fn is_on_time(&self) -> bool {
        self.delay.trim() == ON_TIME_DELAY
    }
}
