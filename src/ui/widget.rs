//! The month grid widget.
//!
//! A single egui widget that renders a month calendar grid and, in tracker
//! mode, per-day completion markers. Pointer presses and releases are
//! resolved into confirmed taps on day cells; mutators funnel through a
//! layout recompute and a repaint request.

use chrono::{Datelike, NaiveDate};
use egui::{Color32, FontId, Rect, Sense, Vec2};

use crate::models::completion::CompletionFlags;
use crate::models::layout::MonthLayout;
use crate::models::month::DisplayedMonth;
use crate::ui::geometry::CellMetrics;
use crate::ui::labels;
use crate::ui::palette::{GridPalette, MarkerPalette};
use crate::ui::render::{self, GridFrame};
use crate::ui::selection::TapTracker;
use crate::ui::theme::CalendarTheme;

/// Default label size as a fraction of the cell height.
const DEFAULT_TEXT_FACTOR: f32 = 0.4;

/// A size scale of 1.0 maps to this fraction of the cell height.
const SCALE_TEXT_FACTOR: f32 = 0.5;

/// Operating mode of the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Plain month calendar with month navigation.
    Calendar,
    /// Completion markers for the current real month; navigation requests
    /// are ignored.
    Tracker,
}

type DayClickCallback = Box<dyn FnMut(u32)>;
type RefreshCallback = Box<dyn FnMut()>;

/// Month calendar grid with optional per-day completion markers.
pub struct MonthGridWidget {
    mode: Mode,
    month: DisplayedMonth,
    layout: MonthLayout,
    today_index: Option<usize>,
    flags: CompletionFlags,
    tap: TapTracker,
    theme: CalendarTheme,
    week_labels: &'static [&'static str; 7],
    week_label_style: usize,
    week_text_color: Option<Color32>,
    day_text_color: Option<Color32>,
    week_text_factor: f32,
    day_text_factor: f32,
    on_day_click: Option<DayClickCallback>,
    on_refresh: Option<RefreshCallback>,
    repaint_ctx: Option<egui::Context>,
}

impl MonthGridWidget {
    /// Create a widget showing the month containing `today`.
    ///
    /// In tracker mode the today marker is placed immediately; completion
    /// data starts empty until [`set_completion_data`] supplies it.
    ///
    /// [`set_completion_data`]: Self::set_completion_data
    pub fn new(mode: Mode, today: NaiveDate) -> Self {
        let month = DisplayedMonth::containing(today);
        let layout = MonthLayout::compute(month);
        let today_index = match mode {
            Mode::Tracker => layout.index_of_day(today.day()),
            Mode::Calendar => None,
        };
        Self {
            mode,
            month,
            layout,
            today_index,
            flags: CompletionFlags::new(),
            tap: TapTracker::new(),
            theme: CalendarTheme::light(),
            week_labels: labels::labels_for_style(0).unwrap(),
            week_label_style: 0,
            week_text_color: None,
            day_text_color: None,
            week_text_factor: DEFAULT_TEXT_FACTOR,
            day_text_factor: DEFAULT_TEXT_FACTOR,
            on_day_click: None,
            on_refresh: None,
            repaint_ctx: None,
        }
    }

    // ---- mutators -------------------------------------------------------

    /// Change the displayed month. Calendar mode only; a no-op in tracker
    /// mode or for an invalid month.
    pub fn set_displayed_month(&mut self, year: i32, month: u32) {
        if self.mode != Mode::Calendar {
            return;
        }
        let Some(month) = DisplayedMonth::new(year, month) else {
            return;
        };
        self.month = month;
        self.layout = MonthLayout::compute(month);
        self.today_index = None;
        self.notify_refresh();
    }

    /// Replace the completion data and re-anchor the grid on `today`'s
    /// month. Tracker mode only; a no-op in calendar mode.
    ///
    /// `flags[0]` corresponds to day 1. Entries beyond the slice or beyond
    /// the month's day count read as false.
    pub fn set_completion_data(&mut self, today: NaiveDate, flags: &[bool]) {
        if self.mode != Mode::Tracker {
            return;
        }
        self.month = DisplayedMonth::containing(today);
        self.layout = MonthLayout::compute(self.month);
        self.flags = CompletionFlags::from_slice(flags, self.month.days_in_month());
        self.today_index = self.layout.index_of_day(today.day());
        self.notify_refresh();
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    /// Select a weekday label style (0-3). Out-of-range values are ignored.
    pub fn set_week_label_style(&mut self, style: usize) {
        if let Some(table) = labels::labels_for_style(style) {
            self.week_labels = table;
            self.week_label_style = style;
        }
    }

    pub fn set_week_text_color(&mut self, color: Color32) {
        self.week_text_color = Some(color);
    }

    pub fn set_day_text_color(&mut self, color: Color32) {
        self.day_text_color = Some(color);
    }

    /// Scale the weekday label size (0.0-1.0). Out-of-range values are
    /// ignored.
    pub fn set_week_label_scale(&mut self, scale: f32) {
        if (0.0..=1.0).contains(&scale) {
            self.week_text_factor = SCALE_TEXT_FACTOR * scale;
        }
    }

    /// Scale the day label size (0.0-1.0). Out-of-range values are ignored.
    pub fn set_day_label_scale(&mut self, scale: f32) {
        if (0.0..=1.0).contains(&scale) {
            self.day_text_factor = SCALE_TEXT_FACTOR * scale;
        }
    }

    /// Replace the theme and drop any per-color overrides.
    pub fn set_theme(&mut self, theme: CalendarTheme) {
        self.theme = theme;
        self.week_text_color = None;
        self.day_text_color = None;
        self.request_repaint();
    }

    // ---- listeners ------------------------------------------------------

    /// Register the confirmed-tap listener. Receives the day of month.
    pub fn on_day_click(&mut self, callback: impl FnMut(u32) + 'static) {
        self.on_day_click = Some(Box::new(callback));
    }

    /// Register the refresh listener, fired after any mutator that changes
    /// displayed data.
    pub fn on_refresh(&mut self, callback: impl FnMut() + 'static) {
        self.on_refresh = Some(Box::new(callback));
    }

    // ---- accessors ------------------------------------------------------

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn year(&self) -> i32 {
        self.month.year()
    }

    /// Legal values: 1-12.
    pub fn month(&self) -> u32 {
        self.month.month()
    }

    pub fn days_in_month(&self) -> u32 {
        self.month.days_in_month()
    }

    /// First day of the displayed month.
    pub fn first_of_month(&self) -> NaiveDate {
        self.month.first_day()
    }

    /// Count of completed days in the displayed month (tracker mode data).
    pub fn days_complete(&self) -> u32 {
        self.flags.count_complete(self.month.days_in_month())
    }

    pub fn theme(&self) -> &CalendarTheme {
        &self.theme
    }

    // ---- frame ----------------------------------------------------------

    /// Render the widget and process pointer input for this frame.
    pub fn show(&mut self, ui: &mut egui::Ui) -> egui::Response {
        self.repaint_ctx = Some(ui.ctx().clone());

        let width = ui.available_width();
        let metrics = CellMetrics::from_width(width);
        let desired = Vec2::new(width, metrics.height_for_rows(self.layout.total_rows()));
        let (rect, response) = ui.allocate_exact_size(desired, Sense::click_and_drag());

        if ui.is_rect_visible(rect) {
            let frame = GridFrame {
                metrics: &metrics,
                layout: &self.layout,
                mode: self.mode,
                today_index: self.today_index,
                flags: &self.flags,
                week_labels: self.week_labels,
                grid: self.grid_palette(),
                markers: MarkerPalette::from_theme(&self.theme),
                week_font: FontId::proportional(metrics.cell_height * self.week_text_factor),
                day_font: FontId::proportional(metrics.cell_height * self.day_text_factor),
            };
            render::paint_grid(ui.painter(), rect, &frame);
        }

        self.handle_pointer(ui, rect, &metrics);
        response
    }

    fn grid_palette(&self) -> GridPalette {
        let mut palette = GridPalette::from_theme(&self.theme);
        if let Some(color) = self.week_text_color {
            palette.header_text = color;
        }
        if let Some(color) = self.day_text_color {
            palette.day_text = color;
        }
        palette
    }

    fn handle_pointer(&mut self, ui: &egui::Ui, rect: Rect, metrics: &CellMetrics) {
        let (any_pressed, any_released, pointer_pos) = ui.input(|i| {
            (
                i.pointer.any_pressed(),
                i.pointer.any_released(),
                i.pointer.interact_pos(),
            )
        });
        if !any_pressed && !any_released {
            return;
        }

        let index = pointer_pos
            .filter(|pos| rect.contains(*pos))
            .and_then(|pos| metrics.index_at((pos - rect.min).to_pos2()))
            .filter(|&index| self.layout.contains(index));

        if any_pressed {
            self.tap.press(index);
        }
        if any_released {
            if let Some(confirmed) = self.tap.release(index) {
                if let Some(day) = self.layout.day_at(confirmed) {
                    log::debug!("Confirmed tap on day {}", day);
                    if let Some(callback) = self.on_day_click.as_mut() {
                        callback(day);
                    }
                }
            }
        }
    }

    fn notify_refresh(&mut self) {
        log::debug!(
            "Refreshing grid for {:04}-{:02}",
            self.month.year(),
            self.month.month()
        );
        self.request_repaint();
        if let Some(callback) = self.on_refresh.as_mut() {
            callback();
        }
    }

    fn request_repaint(&self) {
        if let Some(ctx) = &self.repaint_ctx {
            ctx.request_repaint();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_new_anchors_on_todays_month() {
        let widget = MonthGridWidget::new(Mode::Tracker, date(2024, 2, 15));
        assert_eq!(widget.year(), 2024);
        assert_eq!(widget.month(), 2);
        assert_eq!(widget.days_in_month(), 29);
    }

    #[test]
    fn test_set_displayed_month_in_calendar_mode() {
        let refreshes = Rc::new(RefCell::new(0u32));
        let mut widget = MonthGridWidget::new(Mode::Calendar, date(2024, 2, 15));
        widget.on_refresh({
            let refreshes = refreshes.clone();
            move || *refreshes.borrow_mut() += 1
        });

        widget.set_displayed_month(2025, 8);
        assert_eq!(widget.year(), 2025);
        assert_eq!(widget.month(), 8);
        assert_eq!(widget.days_in_month(), 31);
        assert_eq!(*refreshes.borrow(), 1);
    }

    #[test]
    fn test_set_displayed_month_is_noop_in_tracker_mode() {
        let refreshes = Rc::new(RefCell::new(0u32));
        let mut widget = MonthGridWidget::new(Mode::Tracker, date(2024, 2, 15));
        widget.on_refresh({
            let refreshes = refreshes.clone();
            move || *refreshes.borrow_mut() += 1
        });

        widget.set_displayed_month(2025, 8);
        assert_eq!(widget.year(), 2024);
        assert_eq!(widget.month(), 2);
        assert_eq!(*refreshes.borrow(), 0);
    }

    #[test]
    fn test_set_displayed_month_rejects_invalid_month() {
        let mut widget = MonthGridWidget::new(Mode::Calendar, date(2024, 2, 15));
        widget.set_displayed_month(2024, 13);
        assert_eq!(widget.month(), 2);
    }

    #[test]
    fn test_set_completion_data_reanchors_and_counts() {
        let mut widget = MonthGridWidget::new(Mode::Tracker, date(2024, 1, 31));
        // The month may change between construction and refresh
        widget.set_completion_data(date(2024, 2, 10), &[true, false, true, true]);
        assert_eq!(widget.month(), 2);
        assert_eq!(widget.days_complete(), 3);
    }

    #[test]
    fn test_set_completion_data_is_noop_in_calendar_mode() {
        let refreshes = Rc::new(RefCell::new(0u32));
        let mut widget = MonthGridWidget::new(Mode::Calendar, date(2024, 2, 15));
        widget.on_refresh({
            let refreshes = refreshes.clone();
            move || *refreshes.borrow_mut() += 1
        });

        widget.set_completion_data(date(2024, 2, 10), &[true]);
        assert_eq!(widget.days_complete(), 0);
        assert_eq!(*refreshes.borrow(), 0);
    }

    #[test]
    fn test_completion_data_shorter_than_month_reads_false() {
        let mut widget = MonthGridWidget::new(Mode::Tracker, date(2024, 2, 15));
        widget.set_completion_data(date(2024, 2, 15), &[true; 5]);
        assert_eq!(widget.days_complete(), 5);
    }

    #[test]
    fn test_out_of_range_label_style_is_ignored() {
        let mut widget = MonthGridWidget::new(Mode::Calendar, date(2024, 2, 15));
        widget.set_week_label_style(2);
        widget.set_week_label_style(7);
        assert_eq!(widget.week_label_style, 2);
    }

    #[test]
    fn test_out_of_range_scale_is_ignored() {
        let mut widget = MonthGridWidget::new(Mode::Calendar, date(2024, 2, 15));
        widget.set_day_label_scale(0.6);
        let factor = widget.day_text_factor;
        widget.set_day_label_scale(1.5);
        widget.set_day_label_scale(-0.1);
        assert_eq!(widget.day_text_factor, factor);
        assert_eq!(factor, 0.3);
    }

    #[test]
    fn test_mode_switch_keeps_displayed_month() {
        let mut widget = MonthGridWidget::new(Mode::Calendar, date(2024, 2, 15));
        widget.set_displayed_month(2023, 6);
        widget.set_mode(Mode::Tracker);
        assert_eq!(widget.mode(), Mode::Tracker);
        assert_eq!(widget.month(), 6);
    }
}
