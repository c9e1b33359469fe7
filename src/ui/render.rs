//! Paint pass for the month grid.
//!
//! Draws the weekday header band and then each day cell according to the
//! widget mode: plain day numbers in calendar mode, marker badges around
//! the today index in tracker mode.

use egui::{Align2, FontId, Painter, Pos2, Rect};

use crate::models::completion::CompletionFlags;
use crate::models::layout::MonthLayout;
use crate::ui::geometry::CellMetrics;
use crate::ui::palette::{GridPalette, MarkerPalette};
use crate::ui::widget::Mode;

/// Outer ring of a badge, as a fraction of the cell height.
const OUTER_RING: f32 = 0.37;

/// Middle fill of a badge.
const INNER_FILL: f32 = 0.31;

/// Innermost dot of a badge, also the past-miss marker.
const CENTER_DOT: f32 = 0.10;

/// Everything the paint pass needs for one frame.
pub(crate) struct GridFrame<'a> {
    pub metrics: &'a CellMetrics,
    pub layout: &'a MonthLayout,
    pub mode: Mode,
    pub today_index: Option<usize>,
    pub flags: &'a CompletionFlags,
    pub week_labels: &'static [&'static str; 7],
    pub grid: GridPalette,
    pub markers: MarkerPalette,
    pub week_font: FontId,
    pub day_font: FontId,
}

pub(crate) fn paint_grid(painter: &Painter, rect: Rect, frame: &GridFrame<'_>) {
    painter.rect_filled(rect, 0.0, frame.grid.background);

    // Header band
    for (col, label) in frame.week_labels.iter().enumerate() {
        let center = frame.metrics.header_rect(col).center() + rect.min.to_vec2();
        painter.text(
            center,
            Align2::CENTER_CENTER,
            *label,
            frame.week_font.clone(),
            frame.grid.header_text,
        );
    }

    for index in frame.layout.valid_indices() {
        paint_cell(painter, rect, frame, index);
    }
}

fn paint_cell(painter: &Painter, rect: Rect, frame: &GridFrame<'_>, index: usize) {
    let Some(day) = frame.layout.day_at(index) else {
        return;
    };
    let center = frame.metrics.cell_center(index) + rect.min.to_vec2();
    let cell_height = frame.metrics.cell_height;

    match frame.mode {
        Mode::Calendar => paint_day_number(painter, center, day, frame),
        Mode::Tracker => match frame.today_index {
            Some(today) if index < today => {
                if frame.flags.is_complete(day) {
                    paint_completed_badge(painter, center, cell_height, &frame.markers);
                } else {
                    paint_missed_marker(painter, center, cell_height, &frame.markers);
                }
            }
            Some(today) if index == today => {
                if frame.flags.is_complete(day) {
                    paint_completed_badge(painter, center, cell_height, &frame.markers);
                } else {
                    paint_outstanding_badge(painter, center, cell_height, &frame.markers);
                }
            }
            // Future days are not yet judgeable
            _ => paint_day_number(painter, center, day, frame),
        },
    }
}

fn paint_day_number(painter: &Painter, center: Pos2, day: u32, frame: &GridFrame<'_>) {
    painter.text(
        center,
        Align2::CENTER_CENTER,
        day.to_string(),
        frame.day_font.clone(),
        frame.grid.day_text,
    );
}

/// Completed day: accent ring, neutral fill, dark dot.
fn paint_completed_badge(painter: &Painter, center: Pos2, cell_height: f32, markers: &MarkerPalette) {
    painter.circle_filled(center, cell_height * OUTER_RING, markers.accent);
    painter.circle_filled(center, cell_height * INNER_FILL, markers.fill);
    painter.circle_filled(center, cell_height * CENTER_DOT, markers.dot);
}

/// Past miss: a single faint dot.
fn paint_missed_marker(painter: &Painter, center: Pos2, cell_height: f32, markers: &MarkerPalette) {
    painter.circle_filled(center, cell_height * CENTER_DOT, markers.faint);
}

/// Today with the task still outstanding: the faint ring is drawn at full
/// badge size to stand apart from a past miss.
fn paint_outstanding_badge(
    painter: &Painter,
    center: Pos2,
    cell_height: f32,
    markers: &MarkerPalette,
) {
    painter.circle_filled(center, cell_height * OUTER_RING, markers.faint);
    painter.circle_filled(center, cell_height * INNER_FILL, markers.fill);
    painter.circle_filled(center, cell_height * CENTER_DOT, markers.dot);
}
