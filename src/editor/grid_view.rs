//! Build area - the grid of cells blocks are placed into
//!
//! Left click on a cell places the selected type (or removes the block that
//! is already there); right click removes.

use macroquad::prelude::*;
use crate::ui::{
    draw_gradient_rect, Rect, UiContext, BLOCK_HIGHLIGHT, CELL_HOVER, GHOST_ALPHA, GRID_BG, GRID_LINE,
};
use crate::world::{BlockType, Rgb};
use super::{EditorAction, EditorState};

/// Screen placement of the grid: cell size and top-left corner.
/// Pure math so hit-testing can be tested without a window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BuildAreaLayout {
    pub origin_x: f32,
    pub origin_y: f32,
    pub cell_size: f32,
    pub cols: usize,
    pub rows: usize,
}

impl BuildAreaLayout {
    /// Largest square cells (up to `max_cell_size`) that fit `area`, grid centered
    pub fn fit(area: Rect, cols: usize, rows: usize, max_cell_size: f32) -> Self {
        let cols_f = cols.max(1) as f32;
        let rows_f = rows.max(1) as f32;
        let cell_size = (area.w / cols_f)
            .min(area.h / rows_f)
            .min(max_cell_size)
            .floor()
            .max(1.0);

        let bounds = area.centered(cell_size * cols_f, cell_size * rows_f);
        Self {
            origin_x: bounds.x.round(),
            origin_y: bounds.y.round(),
            cell_size,
            cols,
            rows,
        }
    }

    /// Rect covering the whole grid
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.origin_x,
            self.origin_y,
            self.cell_size * self.cols as f32,
            self.cell_size * self.rows as f32,
        )
    }

    pub fn cell_rect(&self, x: usize, y: usize) -> Rect {
        Rect::new(
            self.origin_x + x as f32 * self.cell_size,
            self.origin_y + y as f32 * self.cell_size,
            self.cell_size,
            self.cell_size,
        )
    }

    /// Cell under a screen point
    pub fn cell_at(&self, px: f32, py: f32) -> Option<(usize, usize)> {
        if !self.bounds().contains(px, py) {
            return None;
        }
        let x = ((px - self.origin_x) / self.cell_size) as usize;
        let y = ((py - self.origin_y) / self.cell_size) as usize;
        // Guard against float rounding on the far edge
        (x < self.cols && y < self.rows).then_some((x, y))
    }
}

pub(super) fn rgb_color(rgb: Rgb, alpha: f32) -> Color {
    let Rgb(r, g, b) = rgb;
    Color::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, alpha)
}

/// Draw a block face: primary-to-secondary gradient, top highlight, dark edge
pub(super) fn draw_block(rect: Rect, block_type: BlockType, alpha: f32) {
    let colors = block_type.colors();
    draw_gradient_rect(rect, rgb_color(colors.primary, alpha), rgb_color(colors.secondary, alpha));

    let highlight = Color::new(BLOCK_HIGHLIGHT.r, BLOCK_HIGHLIGHT.g, BLOCK_HIGHLIGHT.b, BLOCK_HIGHLIGHT.a * alpha);
    draw_rectangle(rect.x, rect.y, rect.w, (rect.h * 0.18).max(1.0), highlight);
    draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, 1.0, Color::new(0.0, 0.0, 0.0, 0.35 * alpha));
}

/// Draw the build area. `hovered` receives the cell under the mouse.
pub fn draw_grid_view(
    ctx: &mut UiContext,
    rect: Rect,
    state: &EditorState,
    max_cell_size: f32,
    hovered: &mut Option<(usize, usize)>,
) -> EditorAction {
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, GRID_BG);

    let layout = BuildAreaLayout::fit(rect.pad(8.0), state.grid().width(), state.grid().height(), max_cell_size);

    for y in 0..layout.rows {
        for x in 0..layout.cols {
            let cell = layout.cell_rect(x, y);
            match state.block_at(x, y) {
                Some(block) => draw_block(cell.pad(1.0), block.block_type, 1.0),
                None => draw_rectangle_lines(cell.x, cell.y, cell.w, cell.h, 1.0, GRID_LINE),
            }
        }
    }

    // A drag in progress (panel divider) owns the mouse
    *hovered = if ctx.dragging.is_none() && ctx.mouse.inside(&rect) {
        layout.cell_at(ctx.mouse.x, ctx.mouse.y)
    } else {
        None
    };

    let Some((x, y)) = *hovered else {
        return EditorAction::None;
    };

    let cell = layout.cell_rect(x, y);
    if state.can_place(x, y) {
        draw_block(cell.pad(1.0), state.selected, GHOST_ALPHA);
    }
    draw_rectangle_lines(cell.x, cell.y, cell.w, cell.h, 2.0, CELL_HOVER);

    if ctx.mouse.clicked(&cell) {
        EditorAction::ClickCell { x, y }
    } else if ctx.mouse.right_clicked(&cell) {
        match state.block_at(x, y) {
            Some(block) => EditorAction::RemoveBlock(block.id),
            None => EditorAction::None,
        }
    } else {
        EditorAction::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_limits_cell_size() {
        let layout = BuildAreaLayout::fit(Rect::new(0.0, 0.0, 2000.0, 2000.0), 16, 10, 48.0);
        assert_eq!(layout.cell_size, 48.0);
        let bounds = layout.bounds();
        assert!((bounds.center_x() - 1000.0).abs() <= 1.0);
        assert!((bounds.center_y() - 1000.0).abs() <= 1.0);
    }

    #[test]
    fn test_fit_shrinks_to_area() {
        let layout = BuildAreaLayout::fit(Rect::new(0.0, 0.0, 320.0, 400.0), 16, 10, 48.0);
        assert_eq!(layout.cell_size, 20.0);
        assert!(layout.bounds().w <= 320.0);
    }

    #[test]
    fn test_cell_at() {
        let layout = BuildAreaLayout {
            origin_x: 100.0,
            origin_y: 50.0,
            cell_size: 10.0,
            cols: 16,
            rows: 10,
        };
        assert_eq!(layout.cell_at(100.0, 50.0), Some((0, 0)));
        assert_eq!(layout.cell_at(125.0, 79.9), Some((2, 2)));
        assert_eq!(layout.cell_at(259.9, 149.9), Some((15, 9)));
        assert_eq!(layout.cell_at(260.0, 60.0), None);
        assert_eq!(layout.cell_at(99.0, 60.0), None);
    }

    #[test]
    fn test_cell_rect_round_trips_through_cell_at() {
        let layout = BuildAreaLayout::fit(Rect::new(13.0, 27.0, 700.0, 500.0), 16, 10, 48.0);
        for (x, y) in [(0, 0), (7, 4), (15, 9)] {
            let r = layout.cell_rect(x, y);
            assert_eq!(layout.cell_at(r.center_x(), r.center_y()), Some((x, y)));
        }
    }

    #[test]
    fn test_rgb_color() {
        let c = rgb_color(Rgb(255, 0, 51), 0.5);
        assert_eq!(c.r, 1.0);
        assert_eq!(c.g, 0.0);
        assert!((c.b - 0.2).abs() < 0.001);
        assert_eq!(c.a, 0.5);
    }
}
