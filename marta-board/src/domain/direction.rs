//! Direction codes.

use std::fmt;

/// Error returned when parsing an unknown direction code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown direction code: {0}")]
pub struct UnknownDirection(pub String);

/// A travel direction, reported by the feed as a single-letter code.
///
/// Which pair of directions is legal depends on the line (east-west for
/// Blue/Green, north-south for Red/Gold), but that mapping lives on
/// [`Line::directions`](super::Line::directions); matching here is a plain
/// case-insensitive comparison against the raw feed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Parse a single-letter direction code, case-insensitively.
    pub fn parse(s: &str) -> Result<Self, UnknownDirection> {
        match s {
            _ if s.eq_ignore_ascii_case("N") => Ok(Direction::North),
            _ if s.eq_ignore_ascii_case("S") => Ok(Direction::South),
            _ if s.eq_ignore_ascii_case("E") => Ok(Direction::East),
            _ if s.eq_ignore_ascii_case("W") => Ok(Direction::West),
            _ => Err(UnknownDirection(s.to_string())),
        }
    }

    /// The wire code for this direction.
    pub fn code(&self) -> &'static str {
        match self {
            Direction::North => "N",
            Direction::South => "S",
            Direction::East => "E",
            Direction::West => "W",
        }
    }

    /// Rider-facing label ("Northbound", ...).
    pub fn label(&self) -> &'static str {
        match self {
            Direction::North => "Northbound",
            Direction::South => "Southbound",
            Direction::East => "Eastbound",
            Direction::West => "Westbound",
        }
    }

    /// Whether a raw `DIRECTION` field from the feed names this direction.
    pub fn matches(&self, raw: &str) -> bool {
        raw.eq_ignore_ascii_case(self.code())
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
