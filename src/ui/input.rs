//! Input state for UI interaction

use macroquad::prelude::*;
use super::Rect;

/// Mouse button state
#[derive(Debug, Clone, Copy, Default)]
pub struct MouseState {
    pub x: f32,
    pub y: f32,
    pub left_down: bool,
    pub left_pressed: bool,  // Just pressed this frame
    pub right_pressed: bool, // Just pressed this frame
}

impl MouseState {
    /// Snapshot of macroquad's mouse state for this frame
    pub fn poll() -> Self {
        let (x, y) = mouse_position();
        Self {
            x,
            y,
            left_down: is_mouse_button_down(MouseButton::Left),
            left_pressed: is_mouse_button_pressed(MouseButton::Left),
            right_pressed: is_mouse_button_pressed(MouseButton::Right),
        }
    }

    /// Check if mouse is inside a rect
    pub fn inside(&self, rect: &Rect) -> bool {
        rect.contains(self.x, self.y)
    }

    /// Check if mouse is held down inside a rect
    pub fn clicking(&self, rect: &Rect) -> bool {
        self.left_down && rect.contains(self.x, self.y)
    }

    /// Check if mouse just clicked inside a rect
    pub fn clicked(&self, rect: &Rect) -> bool {
        self.left_pressed && rect.contains(self.x, self.y)
    }

    /// Check if mouse just right-clicked inside a rect
    pub fn right_clicked(&self, rect: &Rect) -> bool {
        self.right_pressed && rect.contains(self.x, self.y)
    }
}

/// UI context passed through the frame
pub struct UiContext {
    pub mouse: MouseState,
    /// ID of the widget currently being dragged (if any)
    pub dragging: Option<u64>,
    /// ID of the widget that is "hot" (mouse hovering)
    pub hot: Option<u64>,
    /// Tooltip text to draw at the end of the frame
    pub tooltip: Option<String>,
}

impl UiContext {
    pub fn new() -> Self {
        Self {
            mouse: MouseState::default(),
            dragging: None,
            hot: None,
            tooltip: None,
        }
    }

    /// Reset at start of frame (call before UI code)
    pub fn begin_frame(&mut self, mouse: MouseState) {
        self.mouse = mouse;
        self.hot = None;
        self.tooltip = None;

        // Clear dragging if mouse released
        if !self.mouse.left_down {
            self.dragging = None;
        }
    }

    pub fn is_dragging(&self, id: u64) -> bool {
        self.dragging == Some(id)
    }

    pub fn start_drag(&mut self, id: u64) {
        self.dragging = Some(id);
    }

    /// Set hot widget (hovering)
    pub fn set_hot(&mut self, id: u64) {
        // Only set hot if not dragging something else
        if self.dragging.is_none() || self.dragging == Some(id) {
            self.hot = Some(id);
        }
    }

    pub fn is_hot(&self, id: u64) -> bool {
        self.hot == Some(id)
    }

    pub fn set_tooltip(&mut self, text: impl Into<String>) {
        self.tooltip = Some(text.into());
    }
}

impl Default for UiContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mouse_at(x: f32, y: f32) -> MouseState {
        MouseState { x, y, left_down: true, left_pressed: true, right_pressed: false }
    }

    #[test]
    fn test_clicked_inside_only() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(mouse_at(5.0, 5.0).clicked(&r));
        assert!(!mouse_at(15.0, 5.0).clicked(&r));
        assert!(!mouse_at(5.0, 5.0).right_clicked(&r));
    }

    #[test]
    fn test_begin_frame_releases_drag() {
        let mut ctx = UiContext::new();
        ctx.begin_frame(mouse_at(1.0, 1.0));
        ctx.start_drag(7);
        ctx.set_hot(3);
        assert!(!ctx.is_hot(3));

        ctx.begin_frame(MouseState::default());
        assert!(!ctx.is_dragging(7));
        ctx.set_hot(3);
        assert!(ctx.is_hot(3));
    }
}
