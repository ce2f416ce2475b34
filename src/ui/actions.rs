//! Centralized Action Registry
//!
//! Keyboard shortcuts and their enable conditions live in one place, so the
//! same action can be triggered from a shortcut and described in a tooltip.
//!
//! # Example
//! ```ignore
//! let mut registry = ActionRegistry::new();
//!
//! registry.register(Action::new("edit.clear_all")
//!     .label("Clear All")
//!     .shortcut(Shortcut::ctrl(KeyCode::Backspace))
//!     .enabled_when(|ctx| ctx.has_changes));
//!
//! for id in registry.process_triggers(&ctx) {
//!     // dispatch on id
//! }
//! ```

use macroquad::prelude::*;
use std::collections::HashMap;

/// A keyboard shortcut (key + modifiers)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Shortcut {
    pub key: KeyCode,
    pub ctrl: bool, // Cmd on Mac
    pub shift: bool,
}

impl Shortcut {
    /// Create a shortcut with just a key (no modifiers)
    pub fn key(key: KeyCode) -> Self {
        Self { key, ctrl: false, shift: false }
    }

    /// Create a shortcut with Ctrl/Cmd + key
    pub fn ctrl(key: KeyCode) -> Self {
        Self { key, ctrl: true, shift: false }
    }

    /// Create a shortcut with Shift + key
    pub fn shift(key: KeyCode) -> Self {
        Self { key, ctrl: false, shift: true }
    }

    /// Check if this shortcut was pressed this frame
    pub fn is_pressed(&self) -> bool {
        if !is_key_pressed(self.key) {
            return false;
        }

        let ctrl_down = is_key_down(KeyCode::LeftControl)
            || is_key_down(KeyCode::RightControl)
            || is_key_down(KeyCode::LeftSuper)
            || is_key_down(KeyCode::RightSuper);
        let shift_down = is_key_down(KeyCode::LeftShift) || is_key_down(KeyCode::RightShift);

        self.ctrl == ctrl_down && self.shift == shift_down
    }

    /// Format shortcut for display (e.g., "Ctrl+Backspace", "⌘Backspace")
    pub fn display(&self) -> String {
        let mut parts = Vec::new();

        #[cfg(target_os = "macos")]
        {
            if self.ctrl {
                parts.push("⌘");
            }
            if self.shift {
                parts.push("⇧");
            }
        }

        #[cfg(not(target_os = "macos"))]
        {
            if self.ctrl {
                parts.push("Ctrl+");
            }
            if self.shift {
                parts.push("Shift+");
            }
        }

        parts.push(key_name(self.key));
        parts.join("")
    }
}

/// Get a human-readable name for a key
fn key_name(key: KeyCode) -> &'static str {
    match key {
        KeyCode::Key0 => "0",
        KeyCode::Key1 => "1",
        KeyCode::Key2 => "2",
        KeyCode::Key3 => "3",
        KeyCode::Key4 => "4",
        KeyCode::Key5 => "5",
        KeyCode::Key6 => "6",
        KeyCode::Key7 => "7",
        KeyCode::Key8 => "8",
        KeyCode::Key9 => "9",
        KeyCode::Minus => "-",
        KeyCode::Equal => "=",
        KeyCode::Tab => "Tab",
        KeyCode::Backspace => "Backspace",
        _ => "?",
    }
}

/// Context for checking action enable/disable conditions
#[derive(Debug, Clone, Default)]
pub struct ActionContext {
    /// Grid or inventory differs from the starting state
    pub has_changes: bool,
    /// A drag (e.g. panel divider) is in progress
    pub dragging: bool,
}

/// Type alias for enable condition functions
type EnableFn = fn(&ActionContext) -> bool;

fn always_enabled(_: &ActionContext) -> bool {
    true
}

/// A registered action
#[derive(Clone)]
pub struct Action {
    /// Unique identifier (e.g., "edit.clear_all", "select.grass")
    pub id: &'static str,
    /// Human-readable label
    pub label: &'static str,
    pub shortcut: Option<Shortcut>,
    /// Status bar tip / tooltip
    pub status_tip: &'static str,
    enabled_fn: EnableFn,
}

impl Action {
    pub fn new(id: &'static str) -> Self {
        Self {
            id,
            label: "",
            shortcut: None,
            status_tip: "",
            enabled_fn: always_enabled,
        }
    }

    pub fn label(mut self, label: &'static str) -> Self {
        self.label = label;
        self
    }

    pub fn shortcut(mut self, shortcut: Shortcut) -> Self {
        self.shortcut = Some(shortcut);
        self
    }

    pub fn status_tip(mut self, tip: &'static str) -> Self {
        self.status_tip = tip;
        self
    }

    pub fn enabled_when(mut self, f: EnableFn) -> Self {
        self.enabled_fn = f;
        self
    }

    pub fn is_enabled(&self, ctx: &ActionContext) -> bool {
        // No shortcuts mid-drag
        if ctx.dragging {
            return false;
        }
        (self.enabled_fn)(ctx)
    }

    /// Check if this action's shortcut is pressed and action is enabled
    pub fn is_triggered(&self, ctx: &ActionContext) -> bool {
        self.is_enabled(ctx) && self.shortcut.as_ref().map_or(false, |s| s.is_pressed())
    }

    /// Get tooltip with shortcut hint
    pub fn tooltip(&self) -> String {
        let text = if self.status_tip.is_empty() { self.label } else { self.status_tip };
        match &self.shortcut {
            Some(shortcut) => format!("{} ({})", text, shortcut.display()),
            None => text.to_string(),
        }
    }
}

/// Central registry for all actions
pub struct ActionRegistry {
    actions: HashMap<&'static str, Action>,
    /// Action IDs in registration order
    order: Vec<&'static str>,
    /// Map from shortcut to action ID (for conflict detection)
    shortcut_map: HashMap<Shortcut, &'static str>,
}

impl ActionRegistry {
    pub fn new() -> Self {
        Self {
            actions: HashMap::new(),
            order: Vec::new(),
            shortcut_map: HashMap::new(),
        }
    }

    /// Register an action. Fails if its shortcut is already bound to another action.
    pub fn register(&mut self, action: Action) -> Result<(), &'static str> {
        if let Some(ref shortcut) = action.shortcut {
            match self.shortcut_map.get(shortcut) {
                Some(&existing) if existing != action.id => return Err("Shortcut already in use"),
                _ => {}
            }
            self.shortcut_map.insert(shortcut.clone(), action.id);
        }
        let id = action.id;
        if self.actions.insert(id, action).is_none() {
            self.order.push(id);
        }
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&Action> {
        self.actions.get(id)
    }

    pub fn is_enabled(&self, id: &str, ctx: &ActionContext) -> bool {
        self.get(id).map_or(false, |a| a.is_enabled(ctx))
    }

    /// Get tooltip for an action
    pub fn tooltip(&self, id: &str) -> String {
        self.get(id).map_or_else(String::new, |a| a.tooltip())
    }

    /// All actions, in registration order
    pub fn iter(&self) -> impl Iterator<Item = &Action> + '_ {
        self.order.iter().filter_map(|id| self.actions.get(id))
    }

    /// Process all triggered actions this frame, returning their IDs in
    /// registration order
    pub fn process_triggers(&self, ctx: &ActionContext) -> Vec<&'static str> {
        self.iter()
            .filter(|a| a.is_triggered(ctx))
            .map(|a| a.id)
            .collect()
    }
}

impl Default for ActionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortcut_display() {
        let s = Shortcut::ctrl(KeyCode::Backspace);
        // Platform-specific, but should contain the key name
        assert!(s.display().contains("Backspace"));
        assert_eq!(Shortcut::key(KeyCode::Key7).display(), "7");
    }

    #[test]
    fn test_enable_conditions() {
        let mut registry = ActionRegistry::new();
        registry
            .register(Action::new("edit.clear_all").enabled_when(|ctx| ctx.has_changes))
            .unwrap();

        let ctx = ActionContext::default();
        assert!(!registry.is_enabled("edit.clear_all", &ctx));

        let ctx = ActionContext { has_changes: true, ..Default::default() };
        assert!(registry.is_enabled("edit.clear_all", &ctx));

        let ctx = ActionContext { has_changes: true, dragging: true };
        assert!(!registry.is_enabled("edit.clear_all", &ctx));
    }

    #[test]
    fn test_shortcut_conflict() {
        let mut registry = ActionRegistry::new();
        registry.register(Action::new("a").shortcut(Shortcut::key(KeyCode::Key1))).unwrap();
        let result = registry.register(Action::new("b").shortcut(Shortcut::key(KeyCode::Key1)));
        assert!(result.is_err());
        assert!(registry.get("b").is_none());
    }

    #[test]
    fn test_actions_keep_registration_order() {
        let mut registry = ActionRegistry::new();
        for id in ["select.next", "edit.clear_all", "select.grass", "a"] {
            registry.register(Action::new(id)).unwrap();
        }
        // Re-registering keeps the original slot
        registry.register(Action::new("edit.clear_all").label("Clear")).unwrap();

        let ids: Vec<_> = registry.iter().map(|a| a.id).collect();
        assert_eq!(ids, ["select.next", "edit.clear_all", "select.grass", "a"]);
        assert_eq!(registry.get("edit.clear_all").map(|a| a.label), Some("Clear"));
    }

    #[test]
    fn test_tooltip() {
        let action = Action::new("select.grass")
            .label("Grass")
            .shortcut(Shortcut::key(KeyCode::Key1));
        assert_eq!(action.tooltip(), "Grass (1)");
        assert_eq!(Action::new("x").label("Plain").tooltip(), "Plain");
    }
}
