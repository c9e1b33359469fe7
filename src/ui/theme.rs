//! Theme module for the tracker calendar widget.
//!
//! Defines the CalendarTheme structure and provides conversion functions
//! between egui::Color32 and the config color format.

use egui::Color32;
use serde::{Deserialize, Serialize};

/// A calendar theme defining all colors used by the widget and demo app
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarTheme {
    /// Whether this is a dark theme (affects base egui::Visuals)
    pub is_dark: bool,

    /// Application background color
    pub app_background: Color32,

    /// Widget background color
    pub grid_background: Color32,

    /// Day number text color
    pub text_primary: Color32,

    /// Weekday header text color
    pub header_text: Color32,

    /// Outer ring of a completed-day badge
    pub marker_accent: Color32,

    /// Middle fill of a marker badge
    pub marker_fill: Color32,

    /// Innermost dot of a marker badge
    pub marker_dot: Color32,

    /// Faint marker for missed and outstanding days
    pub marker_faint: Color32,
}

impl CalendarTheme {
    /// Create the default Light theme
    pub fn light() -> Self {
        Self {
            is_dark: false,
            app_background: Color32::from_rgb(245, 245, 245),
            grid_background: Color32::from_rgb(255, 255, 255),
            text_primary: Color32::from_rgb(40, 40, 40),
            header_text: Color32::from_rgb(40, 40, 40),
            marker_accent: Color32::from_rgb(92, 158, 237),
            marker_fill: Color32::from_rgb(255, 255, 255),
            marker_dot: Color32::from_rgb(0, 0, 0),
            marker_faint: Color32::from_rgb(200, 200, 200),
        }
    }

    /// Create the default Dark theme
    pub fn dark() -> Self {
        Self {
            is_dark: true,
            app_background: Color32::from_rgb(30, 30, 30),
            grid_background: Color32::from_rgb(40, 40, 40),
            text_primary: Color32::from_rgb(240, 240, 240),
            header_text: Color32::from_rgb(240, 240, 240),
            marker_accent: Color32::from_rgb(92, 158, 237),
            marker_fill: Color32::from_rgb(235, 235, 235),
            marker_dot: Color32::from_rgb(20, 20, 20),
            marker_faint: Color32::from_rgb(110, 110, 110),
        }
    }

    /// Convert a Color32 to a config-compatible string format "r,g,b"
    pub fn color_to_string(color: Color32) -> String {
        format!("{},{},{}", color.r(), color.g(), color.b())
    }

    /// Parse a config color string "r,g,b" to Color32
    pub fn string_to_color(s: &str) -> Result<Color32, String> {
        let parts: Vec<&str> = s.split(',').collect();
        if parts.len() != 3 {
            return Err(format!("Invalid color format: {}", s));
        }

        let r = parts[0]
            .trim()
            .parse::<u8>()
            .map_err(|e| format!("Invalid red value: {}", e))?;
        let g = parts[1]
            .trim()
            .parse::<u8>()
            .map_err(|e| format!("Invalid green value: {}", e))?;
        let b = parts[2]
            .trim()
            .parse::<u8>()
            .map_err(|e| format!("Invalid blue value: {}", e))?;

        Ok(Color32::from_rgb(r, g, b))
    }

    /// Apply this theme to an egui context
    pub fn apply_to_context(&self, ctx: &egui::Context) {
        let mut visuals = if self.is_dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };

        visuals.window_fill = self.app_background;
        visuals.panel_fill = self.app_background;
        visuals.override_text_color = Some(self.text_primary);

        ctx.set_visuals(visuals);
    }
}

impl Default for CalendarTheme {
    fn default() -> Self {
        Self::light()
    }
}
