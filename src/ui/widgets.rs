//! Basic UI widgets

use macroquad::prelude::*;
use super::{Rect, UiContext, BUTTON_BG, BUTTON_HOVER, BUTTON_PRESSED, FONT_SIZE_CONTENT, TEXT_COLOR};

/// Simple toolbar layout helper. Items are laid out left to right.
pub struct Toolbar {
    rect: Rect,
    cursor_x: f32,
    spacing: f32,
}

impl Toolbar {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            cursor_x: rect.x + 8.0,
            spacing: 8.0,
        }
    }

    /// Add a label
    pub fn label(&mut self, text: &str, font_size: f32, color: Color) {
        let text_dims = measure_text(text, None, font_size as u16, 1.0);
        // Center vertically - round to integer pixels for crisp rendering
        let text_y = (self.rect.y + (self.rect.h + text_dims.height) * 0.5).round();
        draw_text(text, self.cursor_x.round(), text_y, font_size, color);
        self.cursor_x += text_dims.width + self.spacing;
    }

    /// Add a text button anchored to the right edge, returns true if clicked
    pub fn button_right(&mut self, ctx: &mut UiContext, id: u64, text: &str, width: f32, accent: Option<Color>) -> bool {
        let btn_rect = Rect::new(
            (self.rect.right() - width - self.spacing).round(),
            (self.rect.y + 6.0).round(),
            width,
            self.rect.h - 12.0,
        );
        text_button(ctx, id, btn_rect, text, accent)
    }
}

/// Draw a text button, returns true if clicked.
/// `accent` replaces the neutral background when set.
pub fn text_button(ctx: &mut UiContext, id: u64, rect: Rect, text: &str, accent: Option<Color>) -> bool {
    let hovered = ctx.mouse.inside(&rect);
    let pressed = ctx.mouse.clicking(&rect);
    let clicked = ctx.mouse.clicked(&rect);

    if hovered {
        ctx.set_hot(id);
    }

    let bg = match (accent, pressed, hovered) {
        (Some(c), true, _) => darken(c, 0.8),
        (Some(c), false, true) => lighten(c, 1.15),
        (Some(c), false, false) => c,
        (None, true, _) => BUTTON_PRESSED,
        (None, false, true) => BUTTON_HOVER,
        (None, false, false) => BUTTON_BG,
    };
    draw_rounded_rect(rect.x, rect.y, rect.w, rect.h, 4.0, bg);

    let dims = measure_text(text, None, FONT_SIZE_CONTENT as u16, 1.0);
    draw_text(
        text,
        (rect.center_x() - dims.width * 0.5).round(),
        (rect.center_y() + dims.height * 0.5).round(),
        FONT_SIZE_CONTENT,
        if accent.is_some() { WHITE } else { TEXT_COLOR },
    );

    clicked
}

/// Fill a rect with a vertical gradient (top color to bottom color)
pub fn draw_gradient_rect(rect: Rect, top: Color, bottom: Color) {
    const BANDS: usize = 12;
    let band_h = rect.h / BANDS as f32;
    for i in 0..BANDS {
        let t = i as f32 / (BANDS - 1) as f32;
        let color = lerp_color(top, bottom, t);
        draw_rectangle(rect.x, rect.y + band_h * i as f32, rect.w, band_h.ceil(), color);
    }
}

/// Draw a rounded rectangle (simple approximation using overlapping rects)
pub fn draw_rounded_rect(x: f32, y: f32, w: f32, h: f32, r: f32, color: Color) {
    // Main body
    draw_rectangle(x + r, y, w - r * 2.0, h, color);
    draw_rectangle(x, y + r, w, h - r * 2.0, color);
    // Corners (circles)
    draw_circle(x + r, y + r, r, color);
    draw_circle(x + w - r, y + r, r, color);
    draw_circle(x + r, y + h - r, r, color);
    draw_circle(x + w - r, y + h - r, r, color);
}

/// Draw a tooltip box near the mouse, kept on screen
pub fn draw_tooltip(ctx: &UiContext) {
    let Some(text) = ctx.tooltip.as_deref() else {
        return;
    };
    let dims = measure_text(text, None, FONT_SIZE_CONTENT as u16, 1.0);
    let w = dims.width + 12.0;
    let h = dims.height + 10.0;
    let x = (ctx.mouse.x + 14.0).min(screen_width() - w - 2.0);
    let y = (ctx.mouse.y + 18.0).min(screen_height() - h - 2.0);

    draw_rectangle(x, y, w, h, Color::from_rgba(20, 20, 24, 235));
    draw_rectangle_lines(x, y, w, h, 1.0, Color::from_rgba(80, 80, 80, 255));
    draw_text(text, x + 6.0, y + 5.0 + dims.height, FONT_SIZE_CONTENT, TEXT_COLOR);
}

pub fn lerp_color(a: Color, b: Color, t: f32) -> Color {
    Color::new(
        a.r + (b.r - a.r) * t,
        a.g + (b.g - a.g) * t,
        a.b + (b.b - a.b) * t,
        a.a + (b.a - a.a) * t,
    )
}

fn darken(c: Color, f: f32) -> Color {
    Color::new(c.r * f, c.g * f, c.b * f, c.a)
}

fn lighten(c: Color, f: f32) -> Color {
    Color::new((c.r * f).min(1.0), (c.g * f).min(1.0), (c.b * f).min(1.0), c.a)
}
