//! Domain vocabulary for the arrivals board.
//!
//! These types give the free-text wire values a validated shape: line and
//! direction identifiers parse case-insensitively into enums, station names
//! compare through a shared normalization, and the active filters travel as
//! one immutable [`FilterCriteria`] value.

mod criteria;
mod direction;
mod line;
mod station;

pub use criteria::FilterCriteria;
pub use direction::{Direction, UnknownDirection};
pub use line::{Line, UnknownLine};
pub use station::{normalize_station, station_matches};
