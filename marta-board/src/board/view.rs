//! Pipeline composition.

use serde::Serialize;

use crate::domain::{FilterCriteria, Line};
use crate::marta::Arrival;

use super::filter::apply_filters;
use super::group::{StationGroup, group};
use super::reconcile::reconcile;

/// The assembled board for one line: station groups in display order, plus
/// the raw line-matched record count the heading compares against.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BoardView {
    pub groups: Vec<StationGroup>,
    /// Number of records the feed reported for the requested line, before
    /// reconciliation and filtering.
    pub reported: usize,
}

impl BoardView {
    /// Number of records on the board.
    pub fn shown(&self) -> usize {
        self.groups.iter().map(|g| g.arrivals.len()).sum()
    }

    /// Whether reconciliation or filtering removed any reported record.
    /// The board heading notes the shown count when this holds.
    pub fn is_reduced(&self) -> bool {
        self.shown() != self.reported
    }

    /// Whether the board has no records at all.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Build the board for one line from raw feed records.
///
/// Composes the three stages: reconcile to one record per (train, station)
/// slot, apply the active filters, then group by station. This is the
/// single entry point the web layer calls; it is a pure function of its
/// inputs and retains nothing between calls, so recomputing on every
/// request or filter change is safe.
pub fn build_view(records: Vec<Arrival>, line: Line, criteria: &FilterCriteria) -> BoardView {
    let reported = records
        .iter()
        .filter(|record| line.matches(&record.line))
        .count();

    let survivors = apply_filters(reconcile(records, line), criteria);

    BoardView {
        groups: group(survivors),
        reported,
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn arrival_strategy() -> impl Strategy<Value = Arrival> {
        (
            prop::sample::select(vec!["101", "102", "103"]),
            prop::sample::select(vec!["AIRPORT STATION", "FIVE POINTS STATION"]),
            prop::sample::select(vec!["BLUE", "blue", "RED"]),
            prop::sample::select(vec!["2024-12-31T15:00:00", "2024-12-31T15:02:30", ""]),
            prop::sample::select(vec!["90", "300", "301", "soon", ""]),
            prop::sample::select(vec!["E", "w", ""]),
        )
            .prop_map(|(train_id, station, line, event_time, waiting, direction)| {
                Arrival {
                    train_id: train_id.to_string(),
                    station: station.to_string(),
                    line: line.to_string(),
                    event_time: event_time.to_string(),
                    waiting_seconds: waiting.to_string(),
                    direction: direction.to_string(),
                    ..Arrival::default()
                }
            })
    }

    fn records_strategy() -> impl Strategy<Value = Vec<Arrival>> {
        prop::collection::vec(arrival_strategy(), 0..20)
    }

    fn criteria_strategy() -> impl Strategy<Value = FilterCriteria> {
        (
            any::<bool>(),
            any::<bool>(),
            prop::option::of(prop::sample::select(vec![
                crate::domain::Direction::East,
                crate::domain::Direction::West,
            ])),
            prop::option::of(prop::sample::select(vec!["Airport", "Five Points"])),
        )
            .prop_map(|(arriving_soon, scheduled_only, direction, station)| {
                FilterCriteria {
                    arriving_soon,
                    scheduled_only,
                    direction,
                    station: station.map(str::to_string),
                }
            })
    }

    proptest! {
        #[test]
        fn shown_never_exceeds_reported(
            records in records_strategy(),
            criteria in criteria_strategy(),
        ) {
            let view = build_view(records, Line::Blue, &criteria);

            prop_assert!(view.shown() <= view.reported);
        }

        #[test]
        fn build_view_is_pure(
            records in records_strategy(),
            criteria in criteria_strategy(),
        ) {
            let first = build_view(records.clone(), Line::Blue, &criteria);
            let second = build_view(records, Line::Blue, &criteria);

            prop_assert_eq!(first, second);
        }

        #[test]
        fn groups_are_sorted_and_nonempty(
            records in records_strategy(),
            criteria in criteria_strategy(),
        ) {
            let view = build_view(records, Line::Blue, &criteria);

            for window in view.groups.windows(2) {
                prop_assert!(window[0].station < window[1].station);
            }
            for group in &view.groups {
                prop_assert!(!group.arrivals.is_empty());
            }
        }
    }
}
