//! Filter criteria for the board view.

use super::Direction;

/// The active view filters, passed into the pipeline as one immutable value.
///
/// The default value is the identity: every record passes. Filters compose
/// as a conjunction, so a record must satisfy all active criteria.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Restrict to trains arriving within the near-term bound.
    pub arriving_soon: bool,

    /// Restrict to records carrying a non-blank scheduled arrival.
    pub scheduled_only: bool,

    /// Restrict to one direction; `None` means no restriction.
    pub direction: Option<Direction>,

    /// Restrict to one station (normalized match); `None` means no
    /// restriction.
    pub station: Option<String>,
}

impl FilterCriteria {
    /// Enable or disable the arriving-soon restriction.
    pub fn with_arriving_soon(mut self, on: bool) -> Self {
        self.arriving_soon = on;
        self
    }

    /// Enable or disable the scheduled-only restriction.
    pub fn with_scheduled_only(mut self, on: bool) -> Self {
        self.scheduled_only = on;
        self
    }

    /// Restrict to one direction, or lift the restriction with `None`.
    pub fn with_direction(mut self, direction: Option<Direction>) -> Self {
        self.direction = direction;
        self
    }

    /// Restrict to one station, or lift the restriction with `None`.
    pub fn with_station(mut self, station: Option<String>) -> Self {
        self.station = station;
        self
    }

    /// Whether every record passes (no filter active).
    pub fn is_pass_through(&self) -> bool {
        !self.arriving_soon
            && !self.scheduled_only
            && self.direction.is_none()
            && self.station.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_pass_through() {
        let criteria = FilterCriteria::default();
        assert!(criteria.is_pass_through());
        assert!(!criteria.arriving_soon);
        assert!(!criteria.scheduled_only);
        assert!(criteria.direction.is_none());
        assert!(criteria.station.is_none());
    }

    #[test]
    fn builders_set_fields() {
        let criteria = FilterCriteria::default()
            .with_arriving_soon(true)
            .with_scheduled_only(true)
            .with_direction(Some(Direction::East))
            .with_station(Some("Five Points".to_string()));

        assert!(!criteria.is_pass_through());
        assert!(criteria.arriving_soon);
        assert!(criteria.scheduled_only);
        assert_eq!(criteria.direction, Some(Direction::East));
        assert_eq!(criteria.station.as_deref(), Some("Five Points"));
    }

    #[test]
    fn any_single_filter_disables_pass_through() {
        assert!(!FilterCriteria::default().with_arriving_soon(true).is_pass_through());
        assert!(!FilterCriteria::default().with_scheduled_only(true).is_pass_through());
        assert!(
            !FilterCriteria::default()
                .with_direction(Some(Direction::North))
                .is_pass_through()
        );
        assert!(
            !FilterCriteria::default()
                .with_station(Some("Ashby".to_string()))
                .is_pass_through()
        );
    }
}
