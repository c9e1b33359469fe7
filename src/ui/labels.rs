//! Weekday label string tables.
//!
//! Four fixed styles selectable at runtime. All tables are Monday-first to
//! match the grid's week-start convention.

/// Number of selectable label styles.
pub const STYLE_COUNT: usize = 4;

const SHORT: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
const NARROW: [&str; 7] = ["M", "T", "W", "T", "F", "S", "S"];
const FULL: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];
const CHINESE: [&str; 7] = ["一", "二", "三", "四", "五", "六", "日"];

const WEEK_LABEL_STYLES: [[&str; 7]; STYLE_COUNT] = [SHORT, NARROW, FULL, CHINESE];

/// Labels for `style`, or `None` when the style index is out of range.
pub fn labels_for_style(style: usize) -> Option<&'static [&'static str; 7]> {
    WEEK_LABEL_STYLES.get(style)
}

/// Display name for `style`, used by the demo's style selector.
pub fn style_name(style: usize) -> &'static str {
    match style {
        0 => "Short",
        1 => "Narrow",
        2 => "Full",
        3 => "Chinese",
        _ => "Unknown",
    }
}
