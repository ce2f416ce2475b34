//! Fixed-size build grid
//!
//! Cells are stored densely, row-major (`y * width + x`), so a coordinate can
//! only ever hold one block.

use super::{BlockId, PlacedBlock};

/// Default grid dimensions (columns x rows)
pub const DEFAULT_WIDTH: usize = 16;
pub const DEFAULT_HEIGHT: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Option<PlacedBlock>>,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    fn cell_index(&self, x: usize, y: usize) -> Option<usize> {
        self.in_bounds(x, y).then(|| y * self.width + x)
    }

    /// Block at a cell, if any (None for out-of-bounds too)
    pub fn get(&self, x: usize, y: usize) -> Option<&PlacedBlock> {
        self.cell_index(x, y).and_then(|i| self.cells[i].as_ref())
    }

    pub fn is_occupied(&self, x: usize, y: usize) -> bool {
        self.get(x, y).is_some()
    }

    /// Put a block into its cell. Refuses (returns false) if the cell is
    /// occupied or out of bounds; never overwrites.
    pub fn insert(&mut self, block: PlacedBlock) -> bool {
        match self.cell_index(block.x, block.y) {
            Some(i) if self.cells[i].is_none() => {
                self.cells[i] = Some(block);
                true
            }
            _ => false,
        }
    }

    /// Take the block with `id` off the grid
    pub fn remove(&mut self, id: BlockId) -> Option<PlacedBlock> {
        self.cells
            .iter_mut()
            .find(|cell| matches!(cell, Some(b) if b.id == id))
            .and_then(Option::take)
    }

    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = None);
    }

    /// Placed blocks, row-major
    pub fn blocks(&self) -> impl Iterator<Item = &PlacedBlock> {
        self.cells.iter().flatten()
    }

    pub fn len(&self) -> usize {
        self.blocks().count()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::BlockType;

    fn block(id: u64, x: usize, y: usize) -> PlacedBlock {
        PlacedBlock { id: BlockId(id), block_type: BlockType::Stone, x, y }
    }

    #[test]
    fn test_insert_never_overwrites() {
        let mut grid = Grid::default();
        assert!(grid.insert(block(1, 3, 2)));
        assert!(!grid.insert(block(2, 3, 2)));
        assert_eq!(grid.get(3, 2).map(|b| b.id), Some(BlockId(1)));
        assert_eq!(grid.len(), 1);
    }

    #[test]
    fn test_out_of_bounds() {
        let mut grid = Grid::new(4, 3);
        assert!(!grid.insert(block(1, 4, 0)));
        assert!(!grid.insert(block(1, 0, 3)));
        assert!(grid.get(10, 10).is_none());
        assert!(grid.is_empty());
    }

    #[test]
    fn test_remove_by_id() {
        let mut grid = Grid::default();
        grid.insert(block(1, 0, 0));
        grid.insert(block(2, 5, 5));
        let removed = grid.remove(BlockId(2));
        assert_eq!(removed.map(|b| (b.x, b.y)), Some((5, 5)));
        assert!(!grid.is_occupied(5, 5));
        assert!(grid.remove(BlockId(2)).is_none());
        assert_eq!(grid.len(), 1);
    }

    #[test]
    fn test_clear() {
        let mut grid = Grid::default();
        grid.insert(block(1, 0, 0));
        grid.insert(block(2, 15, 9));
        grid.clear();
        assert!(grid.is_empty());
        assert_eq!(grid.width(), DEFAULT_WIDTH);
    }
}
