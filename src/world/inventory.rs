//! Remaining stock per block type

use std::ops::Index;
use super::BlockType;

/// Per-type block counts. Counts are unsigned, so they can never go negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Inventory {
    counts: [u32; BlockType::COUNT],
}

impl Inventory {
    /// Inventory filled with each type's starting count
    pub fn initial() -> Self {
        let mut counts = [0; BlockType::COUNT];
        for t in BlockType::ALL {
            counts[t.index()] = t.initial_count();
        }
        Self { counts }
    }

    pub fn count(&self, block_type: BlockType) -> u32 {
        self.counts[block_type.index()]
    }

    pub fn has_stock(&self, block_type: BlockType) -> bool {
        self.count(block_type) > 0
    }

    /// Take one block out of stock. Returns false (and changes nothing) if
    /// the type is depleted.
    pub fn take(&mut self, block_type: BlockType) -> bool {
        let slot = &mut self.counts[block_type.index()];
        if *slot == 0 {
            return false;
        }
        *slot -= 1;
        true
    }

    /// Return one block to stock. There is no cap below `u32::MAX`; more
    /// than that many blocks can never exist, so the count saturates there
    /// instead of overflowing.
    pub fn give(&mut self, block_type: BlockType) {
        let slot = &mut self.counts[block_type.index()];
        *slot = slot.saturating_add(1);
    }

    /// Iterate `(type, count)` in palette order
    pub fn iter(&self) -> impl Iterator<Item = (BlockType, u32)> + '_ {
        BlockType::ALL.iter().map(move |t| (*t, self.count(*t)))
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::initial()
    }
}

impl Index<BlockType> for Inventory {
    type Output = u32;

    fn index(&self, block_type: BlockType) -> &u32 {
        &self.counts[block_type.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_matches_constants() {
        let inv = Inventory::initial();
        for (t, count) in inv.iter() {
            assert_eq!(count, t.initial_count());
        }
        assert_eq!(inv[BlockType::Lava], 4);
    }

    #[test]
    fn test_take_stops_at_zero() {
        let mut inv = Inventory::initial();
        for _ in 0..4 {
            assert!(inv.take(BlockType::Lava));
        }
        assert_eq!(inv.count(BlockType::Lava), 0);
        assert!(!inv.take(BlockType::Lava));
        assert_eq!(inv.count(BlockType::Lava), 0);
        assert!(!inv.has_stock(BlockType::Lava));
    }

    #[test]
    fn test_give_has_no_cap() {
        let mut inv = Inventory::initial();
        inv.give(BlockType::Diamond);
        assert_eq!(inv.count(BlockType::Diamond), 11);
        inv.give(BlockType::Diamond);
        assert_eq!(inv.count(BlockType::Diamond), 12);
    }

    #[test]
    fn test_give_saturates_at_max() {
        let mut inv = Inventory { counts: [u32::MAX; BlockType::COUNT] };
        inv.give(BlockType::Coal);
        assert_eq!(inv.count(BlockType::Coal), u32::MAX);
        assert!(inv.take(BlockType::Coal));
        assert_eq!(inv.count(BlockType::Coal), u32::MAX - 1);
    }
}
