//! Arrival record reconciliation.
//!
//! The feed can report the same (train, station) slot several times in one
//! response, at different observation times. This stage collapses each slot
//! to its single freshest record.

use std::collections::HashMap;

use chrono::NaiveDateTime;

use crate::domain::Line;
use crate::marta::Arrival;

/// Reconcile raw feed records for one line.
///
/// 1. Keeps only records whose `line` matches the requested line,
///    case-insensitively.
/// 2. Collapses records sharing a `(train_id, station)` slot to the one
///    with the latest parsed `event_time`.
/// 3. On equal timestamps, the record encountered first in input order
///    survives.
///
/// A record whose `event_time` does not parse compares as the earliest
/// possible instant, so any record with a valid timestamp displaces it;
/// two unparseable records tie and the first survives. Output order is the
/// first-occurrence order of each surviving slot, not sorted.
pub fn reconcile(records: Vec<Arrival>, line: Line) -> Vec<Arrival> {
    let mut kept: Vec<Arrival> = Vec::new();
    let mut slots: HashMap<(String, String), usize> = HashMap::new();

    for record in records {
        if !line.matches(&record.line) {
            continue;
        }

        let key = (record.train_id.clone(), record.station.clone());
        match slots.get(&key) {
            Some(&idx) => {
                if observed_at(&record) > observed_at(&kept[idx]) {
                    kept[idx] = record;
                }
            }
            None => {
                slots.insert(key, kept.len());
                kept.push(record);
            }
        }
    }

    kept
}

/// The instant a record was observed, with unparseable timestamps pinned to
/// the earliest representable instant so valid observations always win.
fn observed_at(record: &Arrival) -> NaiveDateTime {
    record.event_instant().unwrap_or(NaiveDateTime::MIN)
}
