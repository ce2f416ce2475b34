//! Application state
//!
//! Owns the editor state and everything the frame loop needs to draw and
//! update it. Editor actions come from two places (UI clicks and keyboard
//! shortcuts) and are applied here, one at a time.

use macroquad::logging::debug;
use crate::config::EditorConfig;
use crate::editor::{action_for_trigger, build_context, create_editor_actions, EditorAction, EditorLayout, EditorState};
use crate::ui::{ActionRegistry, UiContext};

pub struct AppState {
    pub editor: EditorState,
    pub layout: EditorLayout,
    pub actions: ActionRegistry,
    pub config: EditorConfig,
}

impl AppState {
    pub fn new(config: EditorConfig) -> Self {
        Self {
            editor: EditorState::with_grid(config.build_grid(), config.initial_selected),
            layout: EditorLayout::new(),
            actions: create_editor_actions(),
            config,
        }
    }

    /// Apply keyboard shortcuts pressed this frame
    pub fn handle_shortcuts(&mut self, ctx: &UiContext) {
        let action_ctx = build_context(&self.editor, ctx.dragging.is_some());
        for id in self.actions.process_triggers(&action_ctx) {
            let action = action_for_trigger(id, &self.editor);
            self.apply(action);
        }
    }

    /// Run one editor transition
    pub fn apply(&mut self, action: EditorAction) {
        if action == EditorAction::None {
            return;
        }
        let state = std::mem::take(&mut self.editor);

        self.editor = match action {
            EditorAction::None => state,
            EditorAction::SelectType(block_type) => {
                debug!("Selected {}", block_type.name());
                state.select_type(block_type)
            }
            EditorAction::ClickCell { x, y } => {
                let occupant = state.block_at(x, y).copied();
                let next = state.click_cell(x, y);
                match occupant {
                    Some(block) => debug!("Removed {} at ({}, {})", block.block_type.name(), x, y),
                    None if next.grid().is_occupied(x, y) => {
                        debug!("Placed {} at ({}, {})", next.selected.name(), x, y)
                    }
                    None => debug!("Place at ({}, {}) ignored: no {} left", x, y, next.selected.name()),
                }
                next
            }
            EditorAction::RemoveBlock(id) => {
                if let Some(block) = state.grid().blocks().find(|b| b.id == id) {
                    debug!("Removed {} at ({}, {})", block.block_type.name(), block.x, block.y);
                }
                state.remove_block(id)
            }
            EditorAction::ClearAll => {
                debug!("Cleared {} blocks, inventory reset", state.grid().len());
                state.clear_all()
            }
        };
    }
}
