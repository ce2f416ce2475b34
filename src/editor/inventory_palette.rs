//! Inventory palette - one slot per block type with its remaining count

use macroquad::prelude::*;
use crate::ui::{
    ActionRegistry, Rect, UiContext, ACCENT_COLOR, DEPLETED_OVERLAY, FONT_SIZE_CONTENT, FONT_SIZE_SMALL,
};
use crate::world::BlockType;
use super::grid_view::draw_block;
use super::{select_action_id, EditorAction, EditorState};

/// Slot edge length in pixels
pub const SLOT_SIZE: f32 = 64.0;
/// Gap between slots
pub const SLOT_GAP: f32 = 8.0;

/// Slot placement inside the palette panel, wrapping into as many columns as fit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaletteLayout {
    pub origin_x: f32,
    pub origin_y: f32,
    pub columns: usize,
}

impl PaletteLayout {
    pub fn fit(area: Rect) -> Self {
        let columns = (((area.w + SLOT_GAP) / (SLOT_SIZE + SLOT_GAP)).floor() as usize).max(1);
        Self {
            origin_x: area.x,
            origin_y: area.y,
            columns,
        }
    }

    pub fn slot_rect(&self, block_type: BlockType) -> Rect {
        let i = block_type.index();
        let col = i % self.columns;
        let row = i / self.columns;
        Rect::new(
            self.origin_x + col as f32 * (SLOT_SIZE + SLOT_GAP),
            self.origin_y + row as f32 * (SLOT_SIZE + SLOT_GAP),
            SLOT_SIZE,
            SLOT_SIZE,
        )
    }

    /// Slot under a screen point (gaps belong to no slot)
    pub fn slot_at(&self, px: f32, py: f32) -> Option<BlockType> {
        BlockType::ALL
            .into_iter()
            .find(|t| self.slot_rect(*t).contains(px, py))
    }
}

/// Draw all inventory slots. Clicking a slot selects its type.
pub fn draw_inventory_palette(
    ctx: &mut UiContext,
    rect: Rect,
    state: &EditorState,
    actions: &ActionRegistry,
) -> EditorAction {
    let layout = PaletteLayout::fit(rect);

    for (block_type, count) in state.inventory().iter() {
        let slot = layout.slot_rect(block_type);
        if slot.y > rect.bottom() {
            break;
        }

        draw_block(slot, block_type, 1.0);
        if count == 0 {
            draw_rectangle(slot.x, slot.y, slot.w, slot.h, DEPLETED_OVERLAY);
        }

        // Count, top right
        let count_text = count.to_string();
        let dims = measure_text(&count_text, None, FONT_SIZE_CONTENT as u16, 1.0);
        draw_text_shadowed(&count_text, slot.right() - dims.width - 5.0, slot.y + dims.height + 4.0, FONT_SIZE_CONTENT);

        // Name, bottom left
        draw_text_shadowed(block_type.name(), slot.x + 5.0, slot.bottom() - 6.0, FONT_SIZE_SMALL);

        if block_type == state.selected {
            draw_rectangle_lines(slot.x - 2.0, slot.y - 2.0, slot.w + 4.0, slot.h + 4.0, 3.0, ACCENT_COLOR);
        } else if ctx.mouse.inside(&slot) {
            draw_rectangle_lines(slot.x, slot.y, slot.w, slot.h, 2.0, Color::from_rgba(255, 255, 255, 140));
        }
    }

    if ctx.dragging.is_some() || !ctx.mouse.inside(&rect) {
        return EditorAction::None;
    }
    match layout.slot_at(ctx.mouse.x, ctx.mouse.y) {
        Some(block_type) => {
            ctx.set_tooltip(actions.tooltip(select_action_id(block_type)));
            if ctx.mouse.left_pressed {
                EditorAction::SelectType(block_type)
            } else {
                EditorAction::None
            }
        }
        None => EditorAction::None,
    }
}

/// White text with a 1px dark shadow so it reads on light blocks
fn draw_text_shadowed(text: &str, x: f32, y: f32, font_size: f32) {
    draw_text(text, x.round() + 1.0, y.round() + 1.0, font_size, Color::from_rgba(0, 0, 0, 200));
    draw_text(text, x.round(), y.round(), font_size, WHITE);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_fit_width() {
        // 3 slots need 3*64 + 2*8 = 208
        assert_eq!(PaletteLayout::fit(Rect::new(0.0, 0.0, 208.0, 500.0)).columns, 3);
        assert_eq!(PaletteLayout::fit(Rect::new(0.0, 0.0, 207.0, 500.0)).columns, 2);
        assert_eq!(PaletteLayout::fit(Rect::new(0.0, 0.0, 10.0, 500.0)).columns, 1);
    }

    #[test]
    fn test_slots_wrap_in_palette_order() {
        let layout = PaletteLayout::fit(Rect::new(10.0, 20.0, 208.0, 500.0));
        let diamond = layout.slot_rect(BlockType::Diamond); // index 4 -> row 1, col 1
        assert_eq!(diamond.x, 10.0 + 72.0);
        assert_eq!(diamond.y, 20.0 + 72.0);
    }

    #[test]
    fn test_slot_at() {
        let layout = PaletteLayout::fit(Rect::new(0.0, 0.0, 208.0, 500.0));
        assert_eq!(layout.slot_at(1.0, 1.0), Some(BlockType::Grass));
        assert_eq!(layout.slot_at(150.0, 150.0), Some(BlockType::Water));
        // Gap between the first two slots
        assert_eq!(layout.slot_at(68.0, 10.0), None);
        assert_eq!(layout.slot_at(1.0, 1000.0), None);
    }
}
