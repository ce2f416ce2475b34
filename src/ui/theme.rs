//! UI Theme - Shared colors and styling constants

use macroquad::prelude::Color;

// =============================================================================
// Base UI Colors
// =============================================================================

/// Dark background color
pub const BG_COLOR: Color = Color::new(0.11, 0.11, 0.13, 1.0);

/// Header/toolbar background
pub const HEADER_COLOR: Color = Color::new(0.15, 0.15, 0.18, 1.0);

/// Panel background
pub const PANEL_BG: Color = Color::new(0.137, 0.137, 0.157, 1.0); // ~35, 35, 40

/// Status bar background
pub const STATUS_BG: Color = Color::new(0.157, 0.157, 0.176, 1.0); // ~40, 40, 45

/// Panel border
pub const BORDER_COLOR: Color = Color::new(0.314, 0.314, 0.314, 1.0); // ~80, 80, 80

/// Primary text color
pub const TEXT_COLOR: Color = Color::new(0.8, 0.8, 0.85, 1.0);

/// Dimmed/secondary text
pub const TEXT_DIM: Color = Color::new(0.4, 0.4, 0.45, 1.0);

/// Accent color (cyan), used for the selected slot
pub const ACCENT_COLOR: Color = Color::new(0.0, 0.75, 0.9, 1.0);

// =============================================================================
// Font Sizes
// =============================================================================

/// Header/title text size
pub const FONT_SIZE_HEADER: f32 = 22.0;

/// Standard content text size
pub const FONT_SIZE_CONTENT: f32 = 14.0;

/// Small/detail text size
pub const FONT_SIZE_SMALL: f32 = 12.0;

// =============================================================================
// Build area
// =============================================================================

/// Build area background (behind the cells)
pub const GRID_BG: Color = Color::new(0.078, 0.078, 0.098, 1.0); // ~20, 20, 25

/// Empty cell outline
pub const GRID_LINE: Color = Color::new(0.2, 0.2, 0.24, 1.0);

/// Hovered cell outline
pub const CELL_HOVER: Color = Color::new(1.0, 1.0, 1.0, 0.6);

/// Alpha of the ghost block drawn on a hovered empty cell
pub const GHOST_ALPHA: f32 = 0.35;

/// Top highlight strip on placed blocks
pub const BLOCK_HIGHLIGHT: Color = Color::new(1.0, 1.0, 1.0, 0.25);

/// Overlay on depleted inventory slots
pub const DEPLETED_OVERLAY: Color = Color::new(0.0, 0.0, 0.0, 0.55);

// =============================================================================
// Buttons
// =============================================================================

pub const BUTTON_BG: Color = Color::new(0.196, 0.196, 0.216, 1.0); // ~50, 50, 55
pub const BUTTON_HOVER: Color = Color::new(0.235, 0.235, 0.275, 1.0); // ~60, 60, 70
pub const BUTTON_PRESSED: Color = Color::new(0.275, 0.275, 0.314, 1.0); // ~70, 70, 80

/// Destructive button (Clear All)
pub const DANGER_COLOR: Color = Color::new(0.75, 0.25, 0.22, 1.0);
