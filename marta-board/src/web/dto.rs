//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::board::BoardView;
use crate::domain::{Direction, FilterCriteria, Line, UnknownDirection};
use crate::marta::Arrival;

/// Query parameters for the line board.
///
/// The filter form submits via GET, so every parameter is optional and an
/// empty string means "no restriction" (the form's Any/All choices).
#[derive(Debug, Default, Deserialize)]
pub struct BoardQuery {
    /// Restrict to trains arriving within five minutes
    pub arriving: Option<bool>,

    /// Restrict to trains with a published arrival time
    pub scheduled: Option<bool>,

    /// Direction code to restrict to ("N", "S", "E", "W")
    pub direction: Option<String>,

    /// Station name to restrict to
    pub station: Option<String>,
}

impl BoardQuery {
    /// Convert the raw query into filter criteria.
    ///
    /// Absent and empty-string parameters deactivate their filter. An
    /// unrecognised direction code is an error rather than a silent no-op.
    pub fn into_criteria(self) -> Result<FilterCriteria, UnknownDirection> {
        let direction = match self.direction.as_deref() {
            None | Some("") => None,
            Some(code) => Some(Direction::parse(code)?),
        };

        let station = self.station.filter(|s| !s.is_empty());

        Ok(FilterCriteria {
            arriving_soon: self.arriving.unwrap_or(false),
            scheduled_only: self.scheduled.unwrap_or(false),
            direction,
            station,
        })
    }
}

/// One station's block in a board response.
#[derive(Debug, Serialize)]
pub struct StationGroupResult {
    /// Raw station name as reported by the feed
    pub station: String,

    /// Surviving arrival records, in board order
    pub arrivals: Vec<Arrival>,
}

/// JSON response for the line board.
#[derive(Debug, Serialize)]
pub struct BoardResponse {
    /// Line identifier ("blue", "gold", "red", "green")
    pub line: String,

    /// Records the feed reported for this line, before reconciliation
    pub reported: usize,

    /// Records shown after reconciliation and filtering
    pub shown: usize,

    /// Station groups in display order
    pub stations: Vec<StationGroupResult>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

impl BoardResponse {
    /// Create from a board view.
    pub fn from_view(line: Line, view: BoardView) -> Self {
        let shown = view.shown();

        let stations = view
            .groups
            .into_iter()
            .map(|g| StationGroupResult {
                station: g.station,
                arrivals: g.arrivals,
            })
            .collect();

        Self {
            line: line.as_str().to_string(),
            reported: view.reported,
            shown,
            stations,
        }
    }
}
