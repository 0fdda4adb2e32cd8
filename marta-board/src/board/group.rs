//! Station grouping and ordering.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::marta::Arrival;

/// One station's block on the board: the raw station name as reported by
/// the feed, and its surviving arrival records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationGroup {
    pub station: String,
    pub arrivals: Vec<Arrival>,
}

/// Group filtered records by station.
///
/// Grouping keys on the raw `station` string exactly as reported, with no
/// normalization: two spellings the station filter treats as equivalent
/// (say "Five Points" and "Five Points Station") form separate groups.
/// Groups are ordered by ascending byte-wise comparison of the station
/// name, so capital letters sort before lowercase. Within a group, records
/// keep the relative order they survived filtering in.
pub fn group(records: Vec<Arrival>) -> Vec<StationGroup> {
    let mut by_station: BTreeMap<String, Vec<Arrival>> = BTreeMap::new();

    for record in records {
        by_station
            .entry(record.station.clone())
            .or_default()
            .push(record);
    }

    by_station
        .into_iter()
        .map(|(station, arrivals)| StationGroup { station, arrivals })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arrival(train_id: &str, station: &str) -> Arrival {
        Arrival {
            train_id: train_id.to_string(),
            station: station.to_string(),
            ..Arrival::default()
        }
    }

    #[test]
    fn empty_input_has_no_groups() {
        assert!(group(vec![]).is_empty());
    }

    #[test]
    fn groups_sort_ordinally() {
        let records = vec![
            arrival("1", "Midtown"),
            arrival("2", "Ashby"),
            arrival("3", "civic center"),
        ];

        let result = group(records);

        let stations: Vec<&str> = result.iter().map(|g| g.station.as_str()).collect();
        // Byte-wise: capitals before lowercase
        assert_eq!(stations, vec!["Ashby", "Midtown", "civic center"]);
    }

    #[test]
    fn records_within_group_keep_input_order() {
        let records = vec![
            arrival("3", "FIVE POINTS STATION"),
            arrival("1", "AIRPORT STATION"),
            arrival("2", "FIVE POINTS STATION"),
        ];

        let result = group(records);

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].station, "AIRPORT STATION");
        assert_eq!(result[1].station, "FIVE POINTS STATION");
        let ids: Vec<&str> = result[1].arrivals.iter().map(|a| a.train_id.as_str()).collect();
        assert_eq!(ids, vec!["3", "2"]);
    }

    #[test]
    fn raw_station_strings_stay_separate() {
        let records = vec![
            arrival("1", "Five Points"),
            arrival("2", "Five Points Station"),
        ];

        let result = group(records);

        // No normalization at this stage
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].station, "Five Points");
        assert_eq!(result[1].station, "Five Points Station");
    }
}
