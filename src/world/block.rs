//! Block types and their static data
//!
//! The material set is closed: every table indexed by block type is a
//! fixed-size array, so adding a type is a compile error until each table
//! has an entry for it.

use serde::{Deserialize, Serialize};

/// 8-bit RGB triple. Converted to a macroquad color only at draw time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const fn from_hex(hex: u32) -> Self {
        Self((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }
}

/// Display colors for a block (gradient from primary to secondary)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockColors {
    pub primary: Rgb,
    pub secondary: Rgb,
}

impl BlockColors {
    const fn hex(primary: u32, secondary: u32) -> Self {
        Self {
            primary: Rgb::from_hex(primary),
            secondary: Rgb::from_hex(secondary),
        }
    }
}

/// A placeable material
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockType {
    #[default]
    Grass = 0,
    Dirt = 1,
    Stone = 2,
    Wood = 3,
    Diamond = 4,
    Gold = 5,
    Iron = 6,
    Coal = 7,
    Water = 8,
    Lava = 9,
    Sand = 10,
    Glass = 11,
}

impl BlockType {
    pub const COUNT: usize = 12;

    /// All types in palette order
    pub const ALL: [BlockType; Self::COUNT] = [
        BlockType::Grass,
        BlockType::Dirt,
        BlockType::Stone,
        BlockType::Wood,
        BlockType::Diamond,
        BlockType::Gold,
        BlockType::Iron,
        BlockType::Coal,
        BlockType::Water,
        BlockType::Lava,
        BlockType::Sand,
        BlockType::Glass,
    ];

    /// Position in `ALL` (and in every per-type table)
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lowercase display name
    pub fn name(&self) -> &'static str {
        match self {
            BlockType::Grass => "grass",
            BlockType::Dirt => "dirt",
            BlockType::Stone => "stone",
            BlockType::Wood => "wood",
            BlockType::Diamond => "diamond",
            BlockType::Gold => "gold",
            BlockType::Iron => "iron",
            BlockType::Coal => "coal",
            BlockType::Water => "water",
            BlockType::Lava => "lava",
            BlockType::Sand => "sand",
            BlockType::Glass => "glass",
        }
    }

    pub fn colors(&self) -> BlockColors {
        match self {
            BlockType::Grass => BlockColors::hex(0x7CBD6B, 0x8B7355),
            BlockType::Dirt => BlockColors::hex(0x8B7355, 0x6B5B47),
            BlockType::Stone => BlockColors::hex(0x7F7F7F, 0x4A4A4A),
            BlockType::Wood => BlockColors::hex(0x8B6F47, 0x6B5527),
            BlockType::Diamond => BlockColors::hex(0x5DADE2, 0x2E86AB),
            BlockType::Gold => BlockColors::hex(0xFFD700, 0xDAA520),
            BlockType::Iron => BlockColors::hex(0xC0C0C0, 0x808080),
            BlockType::Coal => BlockColors::hex(0x2C2C2C, 0x1A1A1A),
            BlockType::Water => BlockColors::hex(0x3A8FD9, 0x2E7BC4),
            BlockType::Lava => BlockColors::hex(0xFF6B35, 0xD64521),
            BlockType::Sand => BlockColors::hex(0xE4D96F, 0xC9C157),
            BlockType::Glass => BlockColors::hex(0xE8F4F8, 0xC5E1EA),
        }
    }

    /// Stock at session start (and after a reset)
    pub fn initial_count(&self) -> u32 {
        match self {
            BlockType::Grass | BlockType::Dirt | BlockType::Stone | BlockType::Wood | BlockType::Sand => 64,
            BlockType::Diamond => 10,
            BlockType::Gold => 20,
            BlockType::Iron => 30,
            BlockType::Coal => 40,
            BlockType::Water => 8,
            BlockType::Lava => 4,
            BlockType::Glass => 32,
        }
    }

    /// Next type in palette order, wrapping around
    pub fn next(&self) -> BlockType {
        Self::ALL[(self.index() + 1) % Self::COUNT]
    }

    /// Previous type in palette order, wrapping around
    pub fn prev(&self) -> BlockType {
        Self::ALL[(self.index() + Self::COUNT - 1) % Self::COUNT]
    }
}

/// Identifier of a placed block, unique among the blocks currently on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockId(pub u64);

/// A block sitting in a grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedBlock {
    pub id: BlockId,
    pub block_type: BlockType,
    pub x: usize,
    pub y: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_all_order() {
        for (i, t) in BlockType::ALL.iter().enumerate() {
            assert_eq!(t.index(), i);
            assert_eq!(t.name(), ron::to_string(t).unwrap());
        }
    }

    #[test]
    fn test_initial_counts() {
        assert_eq!(BlockType::Grass.initial_count(), 64);
        assert_eq!(BlockType::Diamond.initial_count(), 10);
        assert_eq!(BlockType::Lava.initial_count(), 4);
        assert_eq!(BlockType::Glass.initial_count(), 32);
    }

    #[test]
    fn test_hex_colors() {
        let c = BlockType::Gold.colors();
        assert_eq!(c.primary, Rgb(0xFF, 0xD7, 0x00));
        assert_eq!(c.secondary, Rgb(0xDA, 0xA5, 0x20));
    }

    #[test]
    fn test_cycle_wraps() {
        assert_eq!(BlockType::Glass.next(), BlockType::Grass);
        assert_eq!(BlockType::Grass.prev(), BlockType::Glass);
        assert_eq!(BlockType::Stone.next().prev(), BlockType::Stone);
    }

    #[test]
    fn test_serde_lowercase_names() {
        let t: BlockType = ron::from_str("diamond").unwrap();
        assert_eq!(t, BlockType::Diamond);
        assert_eq!(ron::to_string(&BlockType::Lava).unwrap(), "lava");
    }
}
