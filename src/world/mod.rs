//! World data: block types, inventory and the build grid
//!
//! Plain data with no rendering dependencies.

mod block;
mod grid;
mod inventory;

pub use block::*;
pub use grid::*;
pub use inventory::*;
