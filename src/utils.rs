//! Some utility functions

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::calendar::RackView;

/// Parse a date-time the way the backend sends them.
///
/// Accepted forms are `2024-05-01T10:00`, `2024-05-01T10:00:00` (with optional fractional seconds), and RFC 3339 strings with an offset.
/// The latter are converted to their local wall-clock time.
pub fn parse_datetime(text: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    let text = text.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Ok(dt.naive_local());
    }

    NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M"))
}

/// Format a date-time like a browser does for the `es-CL` locale, e.g. `01-05-2024, 10:00:00`
pub fn format_es_cl(dt: &NaiveDateTime) -> String {
    dt.format("%d-%m-%Y, %H:%M:%S").to_string()
}

/// A debug utility that pretty-prints the rack for the week that contains `date`
pub fn print_rack(rack: &mut RackView, date: NaiveDate) {
    let grid = rack.grid(date);
    println!("Rack from {} to {} ({:?})", grid.first_day(), grid.last_day(), rack.state());

    let placed = rack.layout(date);
    if placed.is_empty() {
        println!("    {}", rack.empty_message());
        return;
    }

    for placed_event in placed {
        let style = rack.event_style(&placed_event.event);
        println!("    {} {}-{}\t{}\t{}",
            grid.day(placed_event.day),
            grid.slot_start(placed_event.first_slot).format("%H:%M"),
            grid.slot_start(placed_event.first_slot + placed_event.slot_span).format("%H:%M"),
            style.background_color,
            placed_event.event.title(),
        );
    }
}
