//! Rail line identifiers.

use std::fmt;

use super::Direction;

/// Error returned when parsing an unknown line identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown line: {0}")]
pub struct UnknownLine(pub String);

/// One of the four MARTA rail lines, identified by color.
///
/// Parsing is case-insensitive because the upstream feed and URL paths use
/// inconsistent casing (`"BLUE"`, `"blue"`, `"Blue"` all appear in the wild).
///
/// # Examples
///
/// ```
/// use marta_board::domain::Line;
///
/// let line = Line::parse("GOLD").unwrap();
/// assert_eq!(line, Line::Gold);
/// assert_eq!(line.as_str(), "gold");
///
/// assert!(Line::parse("purple").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Line {
    Blue,
    Gold,
    Green,
    Red,
}

impl Line {
    /// All four lines, in the order the home page lists them.
    pub const ALL: [Line; 4] = [Line::Blue, Line::Gold, Line::Red, Line::Green];

    /// Parse a line identifier, case-insensitively.
    pub fn parse(s: &str) -> Result<Self, UnknownLine> {
        if s.eq_ignore_ascii_case("blue") {
            Ok(Line::Blue)
        } else if s.eq_ignore_ascii_case("gold") {
            Ok(Line::Gold)
        } else if s.eq_ignore_ascii_case("green") {
            Ok(Line::Green)
        } else if s.eq_ignore_ascii_case("red") {
            Ok(Line::Red)
        } else {
            Err(UnknownLine(s.to_string()))
        }
    }

    /// Lowercase identifier, as used in URL path segments.
    pub fn as_str(&self) -> &'static str {
        match self {
            Line::Blue => "blue",
            Line::Gold => "gold",
            Line::Green => "green",
            Line::Red => "red",
        }
    }

    /// Capitalized display name ("Blue", "Gold", ...).
    pub fn title(&self) -> &'static str {
        match self {
            Line::Blue => "Blue",
            Line::Gold => "Gold",
            Line::Green => "Green",
            Line::Red => "Red",
        }
    }

    /// Brand color for badges and headers.
    pub fn hex_color(&self) -> &'static str {
        match self {
            Line::Blue => "#0066CC",
            Line::Gold => "#FFD700",
            Line::Green => "#009900",
            Line::Red => "#CC0000",
        }
    }

    /// The direction axis this line runs on.
    ///
    /// Blue and Green are east-west lines; Red and Gold are north-south.
    /// Only presentation needs this mapping; the direction filter itself is
    /// a plain equality check.
    pub fn directions(&self) -> [Direction; 2] {
        match self {
            Line::Blue | Line::Green => [Direction::East, Direction::West],
            Line::Red | Line::Gold => [Direction::North, Direction::South],
        }
    }

    /// Whether a raw `LINE` field from the feed names this line.
    ///
    /// Plain case-insensitive equality on the exact text; no trimming.
    pub fn matches(&self, raw: &str) -> bool {
        raw.eq_ignore_ascii_case(self.as_str())
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
