//! Arrival record filtering.
//!
//! Applies the user's filter criteria as a conjunction of independent
//! predicates. Inactive criteria are identity pass-throughs.

use crate::domain::{FilterCriteria, station_matches};
use crate::marta::Arrival;

/// Upper bound, in seconds, for the arriving-soon filter (five minutes,
/// inclusive).
pub const ARRIVING_SOON_MAX_SECS: i64 = 300;

/// Apply the active filters to reconciled records.
///
/// A record survives only if it passes every active criterion:
/// - arriving-soon: `waiting_seconds` parses as an integer of at most 300.
///   A missing or non-numeric value fails the filter; it is never treated
///   as passing by default.
/// - scheduled-only: `next_arrival` is non-blank after trimming.
/// - direction: case-insensitive match on the direction code.
/// - station: equality after station-name normalization, so feed and
///   directory spellings with different "STATION" suffixing still match.
///
/// Relative record order is preserved. With no active criteria the input
/// comes back unchanged.
pub fn apply_filters(records: Vec<Arrival>, criteria: &FilterCriteria) -> Vec<Arrival> {
    records
        .into_iter()
        .filter(|record| passes(record, criteria))
        .collect()
}

fn passes(record: &Arrival, criteria: &FilterCriteria) -> bool {
    if criteria.arriving_soon {
        match record.waiting_secs() {
            Some(secs) if secs <= ARRIVING_SOON_MAX_SECS => {}
            _ => return false,
        }
    }

    if criteria.scheduled_only && !record.has_scheduled_arrival() {
        return false;
    }

    if let Some(direction) = criteria.direction {
        if !direction.matches(&record.direction) {
            return false;
        }
    }

    if let Some(station) = &criteria.station {
        if !station_matches(&record.station, station) {
            return false;
        }
    }

    true
}
