//! Resizable panel system
//!
//! A horizontal split (left | right) with a draggable divider, plus panel
//! drawing helpers.

use macroquad::prelude::*;
use super::{Rect, UiContext, BORDER_COLOR, FONT_SIZE_CONTENT, TEXT_COLOR};

/// Height of a panel title bar
pub const PANEL_TITLE_HEIGHT: f32 = 22.0;

/// A split panel that divides space between a left and a right child
pub struct SplitPanel {
    pub id: u64,
    pub ratio: f32,        // 0.0 - 1.0
    pub min_size: f32,     // Minimum size in pixels for each side
    pub divider_size: f32, // Width/height of the draggable divider
}

impl SplitPanel {
    pub fn new(id: u64) -> Self {
        Self {
            id,
            ratio: 0.5,
            min_size: 50.0,
            divider_size: 4.0,
        }
    }

    pub fn with_ratio(mut self, ratio: f32) -> Self {
        self.ratio = ratio.clamp(0.0, 1.0);
        self
    }

    pub fn with_min_size(mut self, min_size: f32) -> Self {
        self.min_size = min_size;
        self
    }

    /// Handle divider dragging, draw the divider and return the two child rects
    pub fn update(&mut self, ctx: &mut UiContext, bounds: Rect) -> (Rect, Rect) {
        let divider_rect = self.divider_rect(bounds);

        // Only start a drag if nothing else owns the mouse
        if ctx.dragging.is_none() && ctx.mouse.inside(&divider_rect) {
            ctx.set_hot(self.id);
            if ctx.mouse.left_pressed {
                ctx.start_drag(self.id);
            }
        }

        if ctx.is_dragging(self.id) {
            let new_ratio = (ctx.mouse.x - bounds.x) / bounds.w;
            self.ratio = self.clamp_ratio(new_ratio, bounds.w);
        }

        let is_hot = ctx.is_hot(self.id) || ctx.is_dragging(self.id);
        let color = if is_hot {
            Color::from_rgba(100, 150, 255, 255)
        } else {
            Color::from_rgba(60, 60, 60, 255)
        };
        let divider_rect = self.divider_rect(bounds);
        draw_rectangle(divider_rect.x, divider_rect.y, divider_rect.w, divider_rect.h, color);

        self.child_rects(bounds)
    }

    /// Clamp ratio to respect minimum sizes
    fn clamp_ratio(&self, ratio: f32, total_size: f32) -> f32 {
        if total_size <= self.min_size * 2.0 {
            return 0.5;
        }
        let min_ratio = self.min_size / total_size;
        ratio.clamp(min_ratio, 1.0 - min_ratio)
    }

    fn divider_rect(&self, bounds: Rect) -> Rect {
        let x = bounds.x + bounds.w * self.ratio - self.divider_size * 0.5;
        Rect::new(x, bounds.y, self.divider_size, bounds.h)
    }

    /// Get the two child rectangles (excluding divider)
    pub fn child_rects(&self, bounds: Rect) -> (Rect, Rect) {
        let half_div = self.divider_size * 0.5;
        let split = bounds.w * self.ratio;
        (
            Rect::new(bounds.x, bounds.y, split - half_div, bounds.h),
            Rect::new(bounds.x + split + half_div, bounds.y, bounds.w - split - half_div, bounds.h),
        )
    }
}

/// Draw a panel background with optional title
pub fn draw_panel(rect: Rect, title: Option<&str>, bg_color: Color) {
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, bg_color);
    draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, 1.0, BORDER_COLOR);

    if let Some(title) = title {
        draw_rectangle(rect.x, rect.y, rect.w, PANEL_TITLE_HEIGHT, Color::from_rgba(50, 50, 60, 255));
        draw_text(title, rect.x + 6.0, rect.y + 16.0, FONT_SIZE_CONTENT + 2.0, TEXT_COLOR);
    }
}

/// Get the content area of a panel (after title bar)
pub fn panel_content_rect(rect: Rect, has_title: bool) -> Rect {
    if has_title {
        rect.remaining_after_top(PANEL_TITLE_HEIGHT).pad(6.0)
    } else {
        rect.pad(6.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_child_rects() {
        let panel = SplitPanel::new(1).with_ratio(0.25);
        let (left, right) = panel.child_rects(Rect::new(0.0, 0.0, 800.0, 400.0));
        assert!((left.w - 198.0).abs() < 0.001);
        assert!((right.x - 202.0).abs() < 0.001);
        assert!((left.w + right.w + panel.divider_size - 800.0).abs() < 0.001);
    }

    #[test]
    fn test_clamp_ratio_respects_min_size() {
        let panel = SplitPanel::new(1).with_min_size(100.0);
        assert!((panel.clamp_ratio(0.01, 1000.0) - 0.1).abs() < 0.001);
        assert!((panel.clamp_ratio(0.99, 1000.0) - 0.9).abs() < 0.001);
        assert_eq!(panel.clamp_ratio(0.3, 150.0), 0.5);
    }
}
