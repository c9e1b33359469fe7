//! Cell geometry and hit testing for the month grid.
//!
//! The render pass and the pointer handling share this one description of
//! where cells sit, so a cell's centre always hit-tests back to its index.

use egui::{Pos2, Rect, Vec2};

use crate::models::layout::{GRID_COLUMNS, GRID_SLOTS};

/// Height of a cell relative to its width.
const CELL_ASPECT: f32 = 0.7;

/// Rows of day cells in the fixed grid.
const GRID_ROWS: usize = GRID_SLOTS / GRID_COLUMNS;

/// Cell dimensions derived from the width allocated to the widget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellMetrics {
    pub cell_width: f32,
    pub cell_height: f32,
}

impl CellMetrics {
    /// Split `width` into seven equal columns.
    pub fn from_width(width: f32) -> Self {
        let cell_width = width / GRID_COLUMNS as f32;
        Self {
            cell_width,
            cell_height: cell_width * CELL_ASPECT,
        }
    }

    /// Widget height for `total_rows` rows, header included.
    pub fn height_for_rows(&self, total_rows: usize) -> f32 {
        self.cell_height * total_rows as f32
    }

    /// Map a widget-relative position to a grid index.
    ///
    /// Positions in the header band (the top cell height of the widget) and
    /// positions outside the 6x7 day area map to `None`.
    pub fn index_at(&self, pos: Pos2) -> Option<usize> {
        if pos.x < 0.0 || pos.y <= self.cell_height {
            return None;
        }
        let col = (pos.x / self.cell_width).floor() as usize;
        let row = ((pos.y - self.cell_height) / self.cell_height).floor() as usize;
        (col < GRID_COLUMNS && row < GRID_ROWS).then_some(row * GRID_COLUMNS + col)
    }

    /// Rect of the day cell at `index`, in widget-relative coordinates.
    ///
    /// Row 0 of the day grid sits one cell height below the top, underneath
    /// the header band.
    pub fn cell_rect(&self, index: usize) -> Rect {
        let col = index % GRID_COLUMNS;
        let row = index / GRID_COLUMNS;
        Rect::from_min_size(
            Pos2::new(
                col as f32 * self.cell_width,
                (row + 1) as f32 * self.cell_height,
            ),
            Vec2::new(self.cell_width, self.cell_height),
        )
    }

    /// Centre of the day cell at `index`.
    pub fn cell_center(&self, index: usize) -> Pos2 {
        self.cell_rect(index).center()
    }

    /// Rect of header column `col`, in widget-relative coordinates.
    pub fn header_rect(&self, col: usize) -> Rect {
        Rect::from_min_size(
            Pos2::new(col as f32 * self.cell_width, 0.0),
            Vec2::new(self.cell_width, self.cell_height),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics() -> CellMetrics {
        CellMetrics::from_width(350.0)
    }

    #[test]
    fn test_from_width_divides_into_columns() {
        let m = metrics();
        assert_eq!(m.cell_width, 50.0);
        assert_eq!(m.cell_height, 35.0);
    }

    #[test]
    fn test_header_band_is_not_a_cell() {
        let m = metrics();
        assert_eq!(m.index_at(Pos2::new(10.0, 0.0)), None);
        assert_eq!(m.index_at(Pos2::new(10.0, m.cell_height)), None);
        assert_eq!(m.index_at(Pos2::new(10.0, m.cell_height + 0.5)), Some(0));
    }

    #[test]
    fn test_index_at_maps_rows_and_columns() {
        let m = metrics();
        // Second row, third column
        let pos = Pos2::new(2.5 * m.cell_width, m.cell_height + 1.5 * m.cell_height);
        assert_eq!(m.index_at(pos), Some(9));
    }

    #[test]
    fn test_positions_outside_grid_map_to_none() {
        let m = metrics();
        assert_eq!(m.index_at(Pos2::new(-1.0, 100.0)), None);
        assert_eq!(m.index_at(Pos2::new(351.0, 100.0)), None);
        // Below the sixth day row
        let below = m.cell_height * (GRID_ROWS as f32 + 1.0) + 1.0;
        assert_eq!(m.index_at(Pos2::new(10.0, below)), None);
    }

    #[test]
    fn test_cell_center_round_trips_through_hit_test() {
        let m = metrics();
        for index in 0..GRID_SLOTS {
            assert_eq!(m.index_at(m.cell_center(index)), Some(index));
        }
    }

    #[test]
    fn test_cell_rect_row_zero_sits_below_header() {
        let m = metrics();
        let rect = m.cell_rect(0);
        assert_eq!(rect.min.y, m.cell_height);
        assert_eq!(rect.min.x, 0.0);
    }

    #[test]
    fn test_height_for_rows() {
        let m = metrics();
        assert_eq!(m.height_for_rows(6), 6.0 * m.cell_height);
    }
}
