//! Editor state and transitions
//!
//! `EditorState` is a value: every transition consumes the old state and
//! returns the new one. Guard failures (out of stock, occupied cell, unknown
//! block id) return the state unchanged; there is no error path.

use crate::world::{BlockId, BlockType, Grid, Inventory, PlacedBlock};

/// Grid contents, remaining stock and the type used for the next placement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorState {
    grid: Grid,
    inventory: Inventory,
    pub selected: BlockType,
    /// Next id handed out by `place_block`. Only grows, so ids stay unique
    /// among the blocks on the grid.
    next_id: u64,
}

impl EditorState {
    /// Default 16x10 grid, full inventory, grass selected
    pub fn new() -> Self {
        Self::with_grid(Grid::default(), BlockType::default())
    }

    pub fn with_grid(grid: Grid, selected: BlockType) -> Self {
        Self {
            grid,
            inventory: Inventory::initial(),
            selected,
            next_id: 1,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Direct stock access, bypassing the transitions
    #[cfg(test)]
    pub(crate) fn inventory_mut(&mut self) -> &mut Inventory {
        &mut self.inventory
    }

    pub fn block_at(&self, x: usize, y: usize) -> Option<&PlacedBlock> {
        self.grid.get(x, y)
    }

    /// Remaining stock of the selected type
    pub fn selected_count(&self) -> u32 {
        self.inventory.count(self.selected)
    }

    /// Whether `place_block` at this cell would succeed
    pub fn can_place(&self, x: usize, y: usize) -> bool {
        self.inventory.has_stock(self.selected)
            && self.grid.in_bounds(x, y)
            && !self.grid.is_occupied(x, y)
    }

    #[must_use]
    pub fn select_type(mut self, block_type: BlockType) -> Self {
        self.selected = block_type;
        self
    }

    /// Place one block of the selected type at `(x, y)`
    #[must_use]
    pub fn place_block(mut self, x: usize, y: usize) -> Self {
        if !self.inventory.has_stock(self.selected) {
            return self;
        }
        if !self.grid.in_bounds(x, y) || self.grid.is_occupied(x, y) {
            return self;
        }

        let block = PlacedBlock {
            id: BlockId(self.next_id),
            block_type: self.selected,
            x,
            y,
        };
        if self.grid.insert(block) {
            self.inventory.take(self.selected);
            self.next_id += 1;
        }
        self
    }

    /// Take a block off the grid and put it back in stock
    #[must_use]
    pub fn remove_block(mut self, id: BlockId) -> Self {
        if let Some(block) = self.grid.remove(id) {
            self.inventory.give(block.block_type);
        }
        self
    }

    /// Empty the grid and restore the starting inventory
    #[must_use]
    pub fn clear_all(mut self) -> Self {
        self.grid.clear();
        self.inventory = Inventory::initial();
        self
    }

    /// Grid cell click: remove the occupant, or place into an empty cell
    #[must_use]
    pub fn click_cell(self, x: usize, y: usize) -> Self {
        match self.grid.get(x, y).map(|b| b.id) {
            Some(id) => self.remove_block(id),
            None => self.place_block(x, y),
        }
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}
