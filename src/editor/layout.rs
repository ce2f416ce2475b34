//! Editor layout - header, inventory palette | build area, status bar

use macroquad::prelude::*;
use crate::config::EditorConfig;
use crate::ui::{
    draw_panel, panel_content_rect, ActionRegistry, Rect, SplitPanel, Toolbar, UiContext, DANGER_COLOR,
    FONT_SIZE_CONTENT, FONT_SIZE_HEADER, HEADER_COLOR, PANEL_BG, STATUS_BG, TEXT_COLOR, TEXT_DIM,
};
use crate::world::{BlockId, BlockType};
use super::{build_context, EditorState};
use super::grid_view::draw_grid_view;
use super::inventory_palette::draw_inventory_palette;

/// Hint shown in the status bar
pub const INSTRUCTIONS: &str = "Click to place blocks | Right-click to remove | Select blocks from inventory";

const HEADER_HEIGHT: f32 = 44.0;
const STATUS_HEIGHT: f32 = 24.0;

/// Widget ids
const ID_SPLIT: u64 = 1;
const ID_CLEAR: u64 = 2;

/// Actions that can be triggered by the editor UI
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EditorAction {
    None,
    SelectType(BlockType),
    /// Grid cell click: remove the occupant or place into the empty cell
    ClickCell { x: usize, y: usize },
    RemoveBlock(BlockId),
    ClearAll,
}

impl EditorAction {
    /// `self` unless it is `None`, then `other`
    pub fn or(self, other: EditorAction) -> EditorAction {
        match self {
            EditorAction::None => other,
            action => action,
        }
    }
}

/// Editor layout state
pub struct EditorLayout {
    /// Inventory palette | build area
    pub main_split: SplitPanel,
    /// Cell under the mouse this frame
    pub hovered_cell: Option<(usize, usize)>,
}

impl EditorLayout {
    pub fn new() -> Self {
        Self {
            main_split: SplitPanel::new(ID_SPLIT).with_ratio(0.22).with_min_size(100.0),
            hovered_cell: None,
        }
    }
}

impl Default for EditorLayout {
    fn default() -> Self {
        Self::new()
    }
}

/// Draw the complete editor UI, returns action if triggered
pub fn draw_editor(
    ctx: &mut UiContext,
    layout: &mut EditorLayout,
    state: &EditorState,
    actions: &ActionRegistry,
    config: &EditorConfig,
) -> EditorAction {
    let screen = Rect::screen(screen_width(), screen_height());

    let header_rect = screen.slice_top(HEADER_HEIGHT);
    let body_rect = screen.remaining_after_top(HEADER_HEIGHT);
    let status_rect = body_rect.slice_bottom(STATUS_HEIGHT);
    let panels_rect = body_rect.remaining_after_bottom(STATUS_HEIGHT);

    let can_clear = actions.is_enabled("edit.clear_all", &build_context(state, ctx.dragging.is_some()));
    let header_action = draw_header(ctx, header_rect, actions, can_clear);

    let (palette_rect, build_rect) = layout.main_split.update(ctx, panels_rect);

    draw_panel(palette_rect, Some("Inventory"), PANEL_BG);
    let palette_action = draw_inventory_palette(ctx, panel_content_rect(palette_rect, true), state, actions);

    draw_panel(build_rect, Some("Build Area"), PANEL_BG);
    let grid_action = draw_grid_view(
        ctx,
        panel_content_rect(build_rect, true),
        state,
        config.max_cell_size,
        &mut layout.hovered_cell,
    );

    draw_status_bar(status_rect, state, layout.hovered_cell);

    header_action.or(palette_action).or(grid_action)
}

/// Title and the Clear All button (red only while there is something to clear)
fn draw_header(ctx: &mut UiContext, rect: Rect, actions: &ActionRegistry, can_clear: bool) -> EditorAction {
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, HEADER_COLOR);

    let mut toolbar = Toolbar::new(rect);
    toolbar.label("Block Builder", FONT_SIZE_HEADER, WHITE);

    if toolbar.button_right(ctx, ID_CLEAR, "Clear All", 96.0, can_clear.then_some(DANGER_COLOR)) {
        return EditorAction::ClearAll;
    }
    if ctx.is_hot(ID_CLEAR) {
        ctx.set_tooltip(actions.tooltip("edit.clear_all"));
    }
    EditorAction::None
}

/// One-line summary shown in the status bar
pub fn status_text(state: &EditorState, hovered: Option<(usize, usize)>) -> String {
    let cell = match hovered {
        Some((x, y)) => format!("({}, {})", x, y),
        None => "-".to_string(),
    };
    format!(
        "Selected: {} ({} left) | Blocks: {} | Cell: {}",
        state.selected.name(),
        state.selected_count(),
        state.grid().len(),
        cell,
    )
}

fn draw_status_bar(rect: Rect, state: &EditorState, hovered: Option<(usize, usize)>) {
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, STATUS_BG);

    draw_text(&status_text(state, hovered), rect.x + 8.0, rect.y + 17.0, FONT_SIZE_CONTENT, TEXT_COLOR);

    let dims = measure_text(INSTRUCTIONS, None, FONT_SIZE_CONTENT as u16, 1.0);
    draw_text(INSTRUCTIONS, rect.right() - dims.width - 8.0, rect.y + 17.0, FONT_SIZE_CONTENT, TEXT_DIM);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_or_prefers_first() {
        let a = EditorAction::ClearAll;
        let b = EditorAction::SelectType(BlockType::Dirt);
        assert_eq!(a.or(b), a);
        assert_eq!(EditorAction::None.or(b), b);
        assert_eq!(EditorAction::None.or(EditorAction::None), EditorAction::None);
    }

    #[test]
    fn test_status_text() {
        let state = EditorState::new().select_type(BlockType::Diamond).place_block(3, 4);
        let text = status_text(&state, Some((3, 4)));
        assert_eq!(text, "Selected: diamond (9 left) | Blocks: 1 | Cell: (3, 4)");
        assert!(status_text(&state, None).ends_with("Cell: -"));
    }
}
