//! Editor Action Definitions
//!
//! Keyboard shortcuts for the block editor: one per block type, cycling
//! through types, and clearing the grid.

use macroquad::prelude::*;
use macroquad::logging::warn;
use crate::ui::{Action, ActionContext, ActionRegistry, Shortcut};
use crate::world::{BlockType, Inventory};
use super::{EditorAction, EditorState};

/// Keys selecting each block type, in palette order
const SELECT_KEYS: [KeyCode; BlockType::COUNT] = [
    KeyCode::Key1,
    KeyCode::Key2,
    KeyCode::Key3,
    KeyCode::Key4,
    KeyCode::Key5,
    KeyCode::Key6,
    KeyCode::Key7,
    KeyCode::Key8,
    KeyCode::Key9,
    KeyCode::Key0,
    KeyCode::Minus,
    KeyCode::Equal,
];

/// Action id that selects a block type
pub fn select_action_id(block_type: BlockType) -> &'static str {
    match block_type {
        BlockType::Grass => "select.grass",
        BlockType::Dirt => "select.dirt",
        BlockType::Stone => "select.stone",
        BlockType::Wood => "select.wood",
        BlockType::Diamond => "select.diamond",
        BlockType::Gold => "select.gold",
        BlockType::Iron => "select.iron",
        BlockType::Coal => "select.coal",
        BlockType::Water => "select.water",
        BlockType::Lava => "select.lava",
        BlockType::Sand => "select.sand",
        BlockType::Glass => "select.glass",
    }
}

/// Create the complete action registry for the editor
pub fn create_editor_actions() -> ActionRegistry {
    let mut registry = ActionRegistry::new();
    let mut actions = Vec::new();

    // ========================================================================
    // Selection
    // ========================================================================
    for (block_type, key) in BlockType::ALL.into_iter().zip(SELECT_KEYS) {
        actions.push(
            Action::new(select_action_id(block_type))
                .label(block_type.name())
                .shortcut(Shortcut::key(key)),
        );
    }

    actions.push(
        Action::new("select.next")
            .label("Next Block")
            .shortcut(Shortcut::key(KeyCode::Tab))
            .status_tip("Select the next block type"),
    );
    actions.push(
        Action::new("select.prev")
            .label("Previous Block")
            .shortcut(Shortcut::shift(KeyCode::Tab))
            .status_tip("Select the previous block type"),
    );

    // ========================================================================
    // Edit
    // ========================================================================
    actions.push(
        Action::new("edit.clear_all")
            .label("Clear All")
            .shortcut(Shortcut::ctrl(KeyCode::Backspace))
            .status_tip("Remove every block and refill the inventory")
            .enabled_when(|ctx| ctx.has_changes),
    );

    for action in actions {
        let id = action.id;
        if let Err(e) = registry.register(action) {
            warn!("Action {} not registered: {}", id, e);
        }
    }
    registry
}

/// Build an ActionContext from the current editor state
pub fn build_context(state: &EditorState, dragging: bool) -> ActionContext {
    ActionContext {
        has_changes: !state.grid().is_empty() || *state.inventory() != Inventory::initial(),
        dragging,
    }
}

/// Map a triggered action id to the editor action it performs
pub fn action_for_trigger(id: &str, state: &EditorState) -> EditorAction {
    match id {
        "select.next" => EditorAction::SelectType(state.selected.next()),
        "select.prev" => EditorAction::SelectType(state.selected.prev()),
        "edit.clear_all" => EditorAction::ClearAll,
        _ => BlockType::ALL
            .into_iter()
            .find(|t| select_action_id(*t) == id)
            .map_or(EditorAction::None, EditorAction::SelectType),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editor_actions_registered() {
        let registry = create_editor_actions();

        for t in BlockType::ALL {
            assert!(registry.get(select_action_id(t)).is_some(), "{} missing", t.name());
        }
        assert!(registry.get("select.next").is_some());
        assert!(registry.get("edit.clear_all").is_some());
        assert!(registry.get("select.prev").is_some());
    }

    #[test]
    fn test_clear_all_needs_changes() {
        let registry = create_editor_actions();
        let fresh = EditorState::new();
        assert!(!registry.is_enabled("edit.clear_all", &build_context(&fresh, false)));

        let edited = fresh.place_block(0, 0);
        assert!(registry.is_enabled("edit.clear_all", &build_context(&edited, false)));
        assert!(!registry.is_enabled("edit.clear_all", &build_context(&edited, true)));
    }

    #[test]
    fn test_trigger_mapping() {
        let state = EditorState::new().select_type(BlockType::Glass);
        assert_eq!(action_for_trigger("select.lava", &state), EditorAction::SelectType(BlockType::Lava));
        assert_eq!(action_for_trigger("select.next", &state), EditorAction::SelectType(BlockType::Grass));
        assert_eq!(action_for_trigger("select.prev", &state), EditorAction::SelectType(BlockType::Sand));
        assert_eq!(action_for_trigger("edit.clear_all", &state), EditorAction::ClearAll);
        assert_eq!(action_for_trigger("unknown", &state), EditorAction::None);
    }

    #[test]
    fn test_every_shortcut_has_key_name() {
        let registry = create_editor_actions();
        for action in registry.iter() {
            let shortcut = action.shortcut.as_ref().unwrap();
            assert!(!shortcut.display().contains('?'), "{} has an unnamed key", action.id);
        }
        assert_eq!(Shortcut::key(KeyCode::Escape).display(), "?");
    }

    #[test]
    fn test_registration_order_is_palette_order() {
        let registry = create_editor_actions();
        let ids: Vec<_> = registry.iter().map(|a| a.id).collect();
        let selects: Vec<_> = BlockType::ALL.into_iter().map(select_action_id).collect();
        assert_eq!(&ids[..BlockType::COUNT], &selects[..]);
        assert_eq!(&ids[BlockType::COUNT..], ["select.next", "select.prev", "edit.clear_all"]);
    }

    #[test]
    fn test_select_tooltip_shows_key() {
        let registry = create_editor_actions();
        assert!(registry.tooltip(select_action_id(BlockType::Diamond)).contains("5"));
        assert!(registry.tooltip(select_action_id(BlockType::Glass)).contains("="));
    }
}
