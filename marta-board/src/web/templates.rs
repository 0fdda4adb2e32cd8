//! Askama templates for the web frontend.

use askama::Template;

use crate::board::{BoardView, StationGroup};
use crate::domain::{FilterCriteria, Line};
use crate::marta::Arrival;

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Home page with the line picker.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub lines: Vec<LineCard>,
}

impl Default for IndexTemplate {
    fn default() -> Self {
        let lines = Line::ALL
            .iter()
            .map(|line| LineCard {
                id: line.as_str().to_string(),
                name: format!("{} Line", line.title()),
                color: line.hex_color().to_string(),
            })
            .collect();

        Self { lines }
    }
}

/// About page.
#[derive(Template)]
#[template(path = "about.html")]
pub struct AboutTemplate;

/// Error page with a retry affordance.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub title: String,
    pub message: String,
    pub retry_href: String,
}

/// Line board page: station picker, filter form, and train cards.
#[derive(Template)]
#[template(path = "board.html")]
pub struct BoardTemplate {
    pub line_id: String,
    pub line_name: String,
    pub line_color: String,
    /// "(N filtered)" heading note, empty when nothing was removed.
    pub filtered_note: String,
    pub arriving: bool,
    pub scheduled: bool,
    /// Whether no direction restriction is active.
    pub direction_any: bool,
    /// Active direction code, empty when unrestricted.
    pub direction_code: String,
    pub directions: Vec<DirectionOption>,
    pub stations: Vec<StationItem>,
    /// Active station criterion, empty when unrestricted.
    pub selected_station: String,
    pub has_trains: bool,
    pub groups: Vec<StationGroupView>,
}

impl BoardTemplate {
    /// Assemble the board page model from the pipeline output and the
    /// request's criteria.
    pub fn build(
        line: Line,
        view: &BoardView,
        criteria: &FilterCriteria,
        stations: &[String],
    ) -> Self {
        let filtered_note = if view.is_reduced() {
            format!("({} filtered)", view.shown())
        } else {
            String::new()
        };

        let station_items = stations
            .iter()
            .map(|name| StationItem {
                selected: criteria.station.as_deref().is_some_and(|s| s == name),
                name: name.clone(),
            })
            .collect();

        let directions = line
            .directions()
            .iter()
            .map(|d| DirectionOption {
                code: d.code().to_string(),
                label: d.label().to_string(),
                selected: criteria.direction == Some(*d),
            })
            .collect();

        let groups = view.groups.iter().map(StationGroupView::from_group).collect();

        Self {
            line_id: line.as_str().to_string(),
            line_name: line.title().to_string(),
            line_color: line.hex_color().to_string(),
            filtered_note,
            arriving: criteria.arriving_soon,
            scheduled: criteria.scheduled_only,
            direction_any: criteria.direction.is_none(),
            direction_code: criteria
                .direction
                .map(|d| d.code().to_string())
                .unwrap_or_default(),
            directions,
            stations: station_items,
            selected_station: criteria.station.clone().unwrap_or_default(),
            has_trains: !view.is_empty(),
            groups,
        }
    }
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// One line's card on the home page.
#[derive(Debug, Clone)]
pub struct LineCard {
    pub id: String,
    pub name: String,
    pub color: String,
}

/// One entry in the station picker.
#[derive(Debug, Clone)]
pub struct StationItem {
    pub name: String,
    pub selected: bool,
}

/// One direction radio in the filter form.
#[derive(Debug, Clone)]
pub struct DirectionOption {
    pub code: String,
    pub label: String,
    pub selected: bool,
}

/// One station's block of train cards.
#[derive(Debug, Clone)]
pub struct StationGroupView {
    pub station: String,
    pub trains: Vec<TrainView>,
}

impl StationGroupView {
    /// Create from a pipeline station group.
    pub fn from_group(group: &StationGroup) -> Self {
        Self {
            station: group.station.clone(),
            trains: group.arrivals.iter().map(TrainView::from_arrival).collect(),
        }
    }
}

/// Train card view model.
#[derive(Debug, Clone)]
pub struct TrainView {
    pub train_id: String,
    /// Line name as reported, uppercased for the badge.
    pub line_badge: String,
    pub line_color: String,
    pub status: String,
    pub status_color: String,
    pub station: String,
    pub destination: String,
    pub direction: String,
    pub waiting_display: String,
    /// Published arrival clock time, empty when the feed has none.
    pub next_arrival: String,
}

impl TrainView {
    /// Create from an arrival record.
    pub fn from_arrival(arrival: &Arrival) -> Self {
        let (status, status_color) = if arrival.is_on_time() {
            ("ON-TIME", "#009900")
        } else {
            ("DELAYED", "#CC0000")
        };

        Self {
            train_id: arrival.train_id.clone(),
            line_badge: arrival.line.to_uppercase(),
            line_color: line_color(&arrival.line).to_string(),
            status: status.to_string(),
            status_color: status_color.to_string(),
            station: arrival.station.clone(),
            destination: arrival.destination.clone(),
            direction: arrival.direction.clone(),
            waiting_display: format_wait(&arrival.waiting_time),
            next_arrival: arrival.next_arrival.clone(),
        }
    }
}

/// Badge color for a raw `LINE` value; grey for anything unrecognised.
fn line_color(raw: &str) -> &'static str {
    Line::parse(raw).map(|l| l.hex_color()).unwrap_or("#666666")
}

/// Format a `WAITING_TIME` value for display.
///
/// The feed is inconsistent here: the field may hold a clock time, a
/// human-readable duration, or a bare count of seconds. Clock times and
/// anything already carrying units pass through unchanged; bare second
/// counts are converted to "N sec" or "N min". An empty value shows "N/A".
pub fn format_wait(raw: &str) -> String {
    if raw.is_empty() {
        return "N/A".to_string();
    }

    if raw.contains(':') || raw.contains("min") {
        return raw.to_string();
    }

    match raw.parse::<i64>() {
        Ok(secs) if secs < 60 => format!("{} sec", secs),
        Ok(secs) => format!("{} min", secs / 60),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_wait_handles_feed_variants() {
        assert_eq!(format_wait(""), "N/A");
        assert_eq!(format_wait("03:06:35 PM"), "03:06:35 PM");
        assert_eq!(format_wait("2 min"), "2 min");
        assert_eq!(format_wait("45"), "45 sec");
        assert_eq!(format_wait("90"), "1 min");
        assert_eq!(format_wait("300"), "5 min");
        assert_eq!(format_wait("Boarding"), "Boarding");
    }

    #[test]
    fn train_view_status_from_delay_code() {
        let mut arrival = Arrival::default();
        arrival.delay = "T0S".to_string();
        let view = TrainView::from_arrival(&arrival);
        assert_eq!(view.status, "ON-TIME");
        assert_eq!(view.status_color, "#009900");

        arrival.delay = "T94S".to_string();
        let view = TrainView::from_arrival(&arrival);
        assert_eq!(view.status, "DELAYED");
        assert_eq!(view.status_color, "#CC0000");
    }

    #[test]
    fn train_view_badge_and_color() {
        let mut arrival = Arrival::default();
        arrival.line = "blue".to_string();
        let view = TrainView::from_arrival(&arrival);
        assert_eq!(view.line_badge, "BLUE");
        assert_eq!(view.line_color, "#0066CC");

        arrival.line = "monorail".to_string();
        let view = TrainView::from_arrival(&arrival);
        assert_eq!(view.line_color, "#666666");
    }

    #[test]
    fn board_template_marks_selections() {
        use crate::board::build_view;
        use crate::domain::Direction;

        let criteria = FilterCriteria::default()
            .with_direction(Some(Direction::South))
            .with_station(Some("Airport".to_string()));
        let view = build_view(vec![], Line::Gold, &criteria);
        let stations = vec!["Airport".to_string(), "Five Points".to_string()];

        let template = BoardTemplate::build(Line::Gold, &view, &criteria, &stations);

        assert_eq!(template.line_id, "gold");
        assert_eq!(template.line_name, "Gold");
        assert!(!template.direction_any);
        assert_eq!(template.direction_code, "S");
        assert_eq!(template.directions.len(), 2);
        assert_eq!(template.directions[0].label, "Northbound");
        assert!(!template.directions[0].selected);
        assert!(template.directions[1].selected);
        assert!(template.stations[0].selected);
        assert!(!template.stations[1].selected);
        assert_eq!(template.selected_station, "Airport");
        assert!(!template.has_trains);
    }

    #[test]
    fn board_template_filtered_note() {
        use crate::board::build_view;

        let mut first = Arrival::default();
        first.train_id = "101".to_string();
        first.station = "FIVE POINTS STATION".to_string();
        first.line = "BLUE".to_string();
        let mut second = first.clone();
        second.event_time = "2024-12-31T15:00:00".to_string();

        let criteria = FilterCriteria::default();
        let view = build_view(vec![first, second], Line::Blue, &criteria);

        let template = BoardTemplate::build(Line::Blue, &view, &criteria, &[]);

        // Two reported, one shown after dedup
        assert_eq!(template.filtered_note, "(1 filtered)");
        assert!(template.has_trains);
        assert_eq!(template.groups.len(), 1);
        assert_eq!(template.groups[0].trains.len(), 1);
    }

    #[test]
    fn board_template_renders() {
        use crate::board::build_view;

        let mut record = Arrival::default();
        record.train_id = "408966".to_string();
        record.station = "MIDTOWN STATION".to_string();
        record.line = "RED".to_string();
        record.destination = "North Springs".to_string();
        record.direction = "N".to_string();
        record.waiting_time = "4 min".to_string();
        record.next_arrival = "03:06:35 PM".to_string();
        record.delay = "T0S".to_string();

        let criteria = FilterCriteria::default();
        let view = build_view(vec![record], Line::Red, &criteria);
        let stations = vec!["MIDTOWN STATION".to_string()];

        let html = BoardTemplate::build(Line::Red, &view, &criteria, &stations)
            .render()
            .unwrap();

        assert!(html.contains("Red Line Trains"));
        assert!(html.contains("MIDTOWN STATION"));
        assert!(html.contains("Train 408966"));
        assert!(html.contains("ON-TIME"));
        assert!(html.contains("North Springs"));
        assert!(html.contains("Northbound"));
    }

    #[test]
    fn board_template_renders_no_trains_message() {
        use crate::board::build_view;

        let criteria = FilterCriteria::default();
        let view = build_view(vec![], Line::Green, &criteria);

        let html = BoardTemplate::build(Line::Green, &view, &criteria, &[])
            .render()
            .unwrap();

        assert!(html.contains("No trains currently match the selected filters."));
    }

    #[test]
    fn index_template_lists_all_lines() {
        let html = IndexTemplate::default().render().unwrap();

        assert!(html.contains("Blue Line"));
        assert!(html.contains("Gold Line"));
        assert!(html.contains("Red Line"));
        assert!(html.contains("Green Line"));
        assert!(html.contains("/lines/blue"));
    }

    #[test]
    fn error_template_renders_retry_link() {
        let html = ErrorTemplate {
            title: "Error".to_string(),
            message: "Failed to load train data for blue. Please try again later.".to_string(),
            retry_href: "/lines/blue?arriving=true".to_string(),
        }
        .render()
        .unwrap();

        assert!(html.contains("Failed to load train data"));
        assert!(html.contains("/lines/blue?arriving=true"));
    }
}
