//! MARTA rail feed client.
//!
//! This module provides an HTTP client for the MARTA train arrivals API,
//! which reports real-time rail arrival records per line.
//!
//! Key characteristics of the feed:
//! - Every field is a string, and any field may be blank or missing
//! - The same physical train appears once per upcoming station, and a
//!   response can carry several observations of the same (train, station)
//!   pair taken at different times
//! - `DELAY` uses the sentinel `"T0S"` for a train running exactly on time
//! - Station names are reported in ALL CAPS with a trailing "STATION"

mod client;
mod error;
mod types;

pub use client::{MartaClient, MartaConfig};
pub use error::MartaError;
pub use types::{Arrival, ON_TIME_DELAY};
