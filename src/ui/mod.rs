//! Immediate-mode UI library for the editor
//!
//! Design principles:
//! - Immediate mode (no retained state, rebuilt each frame)
//! - Simple rectangle-based layout
//! - Macroquad integration for rendering

mod rect;
mod panel;
mod widgets;
mod input;
mod theme;
mod actions;

pub use rect::*;
pub use panel::*;
pub use widgets::*;
pub use input::*;
pub use theme::*;
pub use actions::*;
