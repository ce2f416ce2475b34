//! Block editor
//!
//! Layout:
//! - Header with the title and the reset control
//! - Inventory palette (left), build area grid (right)
//! - Status bar

mod state;
mod layout;
mod grid_view;
mod inventory_palette;
mod actions;

pub use state::*;
pub use layout::*;
pub use actions::*;
