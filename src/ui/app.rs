//! Demo application hosting the month grid widget.
//!
//! Exercises both widget modes: a plain navigable calendar and a tracker
//! whose sample completion data can be toggled by tapping days.

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use chrono::{Datelike, Local, NaiveDate};

use crate::models::completion::MAX_DAYS;
use crate::services::config::AppConfig;
use crate::ui::labels;
use crate::ui::theme::CalendarTheme;
use crate::ui::widget::{Mode, MonthGridWidget};

pub struct TrackerApp {
    widget: MonthGridWidget,
    config: AppConfig,
    config_path: Option<PathBuf>,
    /// Sample per-day data for tracker mode; index 0 = day 1
    completed: Vec<bool>,
    /// Filled by the widget's click listener, drained each frame
    clicked_day: Rc<RefCell<Option<u32>>>,
    last_clicked: Option<u32>,
}

impl TrackerApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let config_path = AppConfig::default_path();
        let config = match config_path.as_deref().map(AppConfig::load_from) {
            Some(Ok(config)) => config,
            Some(Err(err)) => {
                log::warn!("Falling back to default config: {}", err);
                AppConfig::default()
            }
            None => AppConfig::default(),
        };
        log::info!("Loaded config: {:?}", config);

        let today = Local::now().date_naive();
        let mode = match config.mode.as_str() {
            "calendar" => Mode::Calendar,
            _ => Mode::Tracker,
        };

        let mut widget = MonthGridWidget::new(mode, today);
        widget.set_week_label_style(config.week_label_style);
        widget.set_day_label_scale(config.label_scale);
        widget.set_week_label_scale(config.label_scale);

        let theme = Self::resolve_theme(&config.theme);
        theme.apply_to_context(&cc.egui_ctx);
        widget.set_theme(theme);

        let clicked_day: Rc<RefCell<Option<u32>>> = Rc::new(RefCell::new(None));
        widget.on_day_click({
            let clicked_day = clicked_day.clone();
            move |day| {
                log::info!("Day {} clicked", day);
                *clicked_day.borrow_mut() = Some(day);
            }
        });
        widget.on_refresh(|| log::debug!("Grid data refreshed"));

        let completed = Self::sample_history(today);

        let mut app = Self {
            widget,
            config,
            config_path,
            completed,
            clicked_day,
            last_clicked: None,
        };
        if mode == Mode::Tracker {
            let data = app.completed.clone();
            app.widget.set_completion_data(today, &data);
        }
        app
    }

    /// Seed some history so tracker mode has something to show on launch.
    fn sample_history(today: NaiveDate) -> Vec<bool> {
        let mut completed = vec![false; MAX_DAYS];
        for slot in 0..today.day() as usize {
            completed[slot] = slot % 3 != 1;
        }
        completed
    }

    fn resolve_theme(choice: &str) -> CalendarTheme {
        match choice {
            "light" => CalendarTheme::light(),
            "dark" => CalendarTheme::dark(),
            _ => match dark_light::detect() {
                dark_light::Mode::Dark => CalendarTheme::dark(),
                _ => CalendarTheme::light(),
            },
        }
    }

    fn save_config(&self) {
        let Some(path) = self.config_path.as_deref() else {
            return;
        };
        if let Err(err) = self.config.save_to(path) {
            log::error!("Failed to save config: {}", err);
        }
    }

    fn apply_mode(&mut self, mode: Mode) {
        self.widget.set_mode(mode);
        if mode == Mode::Tracker {
            let today = Local::now().date_naive();
            let data = self.completed.clone();
            self.widget.set_completion_data(today, &data);
        }
        self.config.mode = match mode {
            Mode::Calendar => "calendar".to_string(),
            Mode::Tracker => "tracker".to_string(),
        };
        self.save_config();
    }

    fn apply_theme(&mut self, ctx: &egui::Context, choice: &str) {
        self.config.theme = choice.to_string();
        let theme = Self::resolve_theme(choice);
        theme.apply_to_context(ctx);
        self.widget.set_theme(theme);
        self.save_config();
    }

    fn step_month(&mut self, delta: i32) {
        let mut year = self.widget.year();
        let mut month = self.widget.month() as i32 + delta;
        if month < 1 {
            year -= 1;
            month = 12;
        } else if month > 12 {
            year += 1;
            month = 1;
        }
        self.widget.set_displayed_month(year, month as u32);
    }

    /// Toggle the sample flag for a tapped day and re-feed the widget.
    fn toggle_day(&mut self, day: u32) {
        let today = Local::now().date_naive();
        if day > today.day() {
            // Future days carry no marker yet
            return;
        }
        let slot = (day - 1) as usize;
        self.completed[slot] = !self.completed[slot];
        let data = self.completed.clone();
        self.widget.set_completion_data(today, &data);
    }

    fn controls(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        ui.horizontal(|ui| {
            let current_mode = self.widget.mode();
            let mut mode = current_mode;
            egui::ComboBox::from_id_source("mode_combo")
                .selected_text(match mode {
                    Mode::Calendar => "Calendar",
                    Mode::Tracker => "Tracker",
                })
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut mode, Mode::Calendar, "Calendar");
                    ui.selectable_value(&mut mode, Mode::Tracker, "Tracker");
                });
            if mode != current_mode {
                self.apply_mode(mode);
            }

            ui.separator();

            if self.widget.mode() == Mode::Calendar {
                if ui.button("◀").clicked() {
                    self.step_month(-1);
                }
                ui.label(self.widget.first_of_month().format("%B %Y").to_string());
                if ui.button("▶").clicked() {
                    self.step_month(1);
                }
            } else {
                ui.label(format!(
                    "{} of {} days complete",
                    self.widget.days_complete(),
                    self.widget.days_in_month()
                ));
            }
        });

        ui.horizontal(|ui| {
            let mut style = self.config.week_label_style;
            egui::ComboBox::from_id_source("label_style_combo")
                .selected_text(labels::style_name(style))
                .show_ui(ui, |ui| {
                    for candidate in 0..labels::STYLE_COUNT {
                        ui.selectable_value(&mut style, candidate, labels::style_name(candidate));
                    }
                });
            if style != self.config.week_label_style {
                self.config.week_label_style = style;
                self.widget.set_week_label_style(style);
                self.save_config();
            }

            let mut theme_choice = self.config.theme.clone();
            egui::ComboBox::from_id_source("theme_combo")
                .selected_text(theme_choice.clone())
                .show_ui(ui, |ui| {
                    for candidate in ["light", "dark", "system"] {
                        ui.selectable_value(&mut theme_choice, candidate.to_string(), candidate);
                    }
                });
            if theme_choice != self.config.theme {
                self.apply_theme(ctx, &theme_choice);
            }

            let mut scale = self.config.label_scale;
            let response = ui.add(egui::Slider::new(&mut scale, 0.0..=1.0).text("Label size"));
            if response.changed() {
                self.config.label_scale = scale;
                self.widget.set_day_label_scale(scale);
                self.widget.set_week_label_scale(scale);
            }
            if response.drag_stopped() {
                self.save_config();
            }
        });
    }
}

impl eframe::App for TrackerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let tapped = self.clicked_day.borrow_mut().take();
        if let Some(day) = tapped {
            self.last_clicked = Some(day);
            if self.widget.mode() == Mode::Tracker {
                self.toggle_day(day);
            }
        }

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            self.controls(ui, ctx);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.widget.show(ui);
            ui.add_space(8.0);
            match self.last_clicked {
                Some(day) => ui.label(format!("Last clicked day: {}", day)),
                None => ui.label("Tap a day to select it"),
            };
        });
    }
}
