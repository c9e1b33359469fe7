use egui::Color32;

use crate::ui::theme::CalendarTheme;

/// Colors for one frame of the grid paint pass.
#[derive(Clone, Copy)]
pub(crate) struct GridPalette {
    pub background: Color32,
    pub day_text: Color32,
    pub header_text: Color32,
}

impl GridPalette {
    pub fn from_theme(theme: &CalendarTheme) -> Self {
        Self {
            background: theme.grid_background,
            day_text: theme.text_primary,
            header_text: theme.header_text,
        }
    }
}

/// Colors for the tracker-mode marker badges.
#[derive(Clone, Copy)]
pub(crate) struct MarkerPalette {
    /// Outer ring of a completed badge
    pub accent: Color32,
    /// Middle fill of any badge
    pub fill: Color32,
    /// Innermost dot of any badge
    pub dot: Color32,
    /// Past-miss dot and outstanding-today ring
    pub faint: Color32,
}

impl MarkerPalette {
    pub fn from_theme(theme: &CalendarTheme) -> Self {
        Self {
            accent: theme.marker_accent,
            fill: theme.marker_fill,
            dot: theme.marker_dot,
            faint: theme.marker_faint,
        }
    }
}
