//! Station name normalization.
//!
//! The feed and the station directory disagree on suffixing and casing:
//! the same stop may appear as `"FIVE POINTS STATION"`, `"Five Points"`,
//! or `"Five Points Station "`. The station filter compares names through
//! [`normalize_station`] so a selection made from the directory matches
//! records regardless of convention. Grouping deliberately does NOT use
//! this normalization (it keys on the raw reported name).

/// Normalize a station name for equality comparison.
///
/// Trims surrounding whitespace, strips one trailing case-insensitive
/// `STATION` suffix (along with any whitespace before it), and uppercases
/// the result.
///
/// # Examples
///
/// ```
/// use marta_board::domain::normalize_station;
///
/// assert_eq!(normalize_station("Five Points Station"), "FIVE POINTS");
/// assert_eq!(normalize_station("  five points  "), "FIVE POINTS");
/// assert_eq!(normalize_station("FIVE POINTS"), "FIVE POINTS");
/// ```
pub fn normalize_station(name: &str) -> String {
    strip_station_suffix(name.trim()).to_uppercase()
}

/// Whether two station names refer to the same stop after normalization.
pub fn station_matches(a: &str, b: &str) -> bool {
    normalize_station(a) == normalize_station(b)
}

fn strip_station_suffix(s: &str) -> &str {
    const SUFFIX_LEN: usize = "STATION".len();
    let n = s.len();
    if n >= SUFFIX_LEN
        && s.is_char_boundary(n - SUFFIX_LEN)
        && s[n - SUFFIX_LEN..].eq_ignore_ascii_case("station")
    {
        s[..n - SUFFIX_LEN].trim_end()
    } else {
        s
    }
}
