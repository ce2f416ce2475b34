//! Editor configuration
//!
//! Loaded once at startup from a RON file. Every field is optional; missing
//! fields take their defaults. A file that fails to parse or validate is
//! reported and the defaults are used instead.

use serde::{Deserialize, Serialize};
use crate::world::{BlockType, Grid, DEFAULT_HEIGHT, DEFAULT_WIDTH};

/// Path of the config file, relative to the asset root
pub const CONFIG_PATH: &str = "assets/config/editor.ron";

/// Validation limits for config values
pub mod limits {
    /// Largest grid dimension (width or height)
    pub const MAX_GRID_SIZE: usize = 64;
    /// Cell size bounds in pixels
    pub const MIN_CELL_SIZE: f32 = 8.0;
    pub const MAX_CELL_SIZE: f32 = 256.0;
}

/// Error type for config loading
#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    ParseError(ron::error::SpannedError),
    ValidationError(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(e: ron::error::SpannedError) -> Self {
        ConfigError::ParseError(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Parse error: {}", e),
            ConfigError::ValidationError(e) => write!(f, "Validation error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Grid columns
    pub grid_width: usize,
    /// Grid rows
    pub grid_height: usize,
    /// Upper bound on cell size; cells shrink to fit smaller windows
    pub max_cell_size: f32,
    /// Type selected at startup
    pub initial_selected: BlockType,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            grid_width: DEFAULT_WIDTH,
            grid_height: DEFAULT_HEIGHT,
            max_cell_size: 48.0,
            initial_selected: BlockType::Grass,
        }
    }
}

impl EditorConfig {
    /// Parse and validate a RON document
    pub fn from_ron_str(s: &str) -> Result<Self, ConfigError> {
        let config: EditorConfig = ron::from_str(s)?;
        config.validate().map_err(ConfigError::ValidationError)?;
        Ok(config)
    }

    /// Read a config file from disk
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_ron_str(&contents)
    }

    pub fn validate(&self) -> Result<(), String> {
        let dims = [("grid_width", self.grid_width), ("grid_height", self.grid_height)];
        for (name, value) in dims {
            if value == 0 || value > limits::MAX_GRID_SIZE {
                return Err(format!("{} must be in 1..={} (got {})",
                    name, limits::MAX_GRID_SIZE, value));
            }
        }
        if !self.max_cell_size.is_finite()
            || !(limits::MIN_CELL_SIZE..=limits::MAX_CELL_SIZE).contains(&self.max_cell_size)
        {
            return Err(format!("max_cell_size must be in {}..={} (got {})",
                limits::MIN_CELL_SIZE, limits::MAX_CELL_SIZE, self.max_cell_size));
        }
        Ok(())
    }

    /// Empty grid with the configured dimensions
    pub fn build_grid(&self) -> Grid {
        Grid::new(self.grid_width, self.grid_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_document_gives_defaults() {
        let config = EditorConfig::from_ron_str("()").unwrap();
        assert_eq!(config, EditorConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = EditorConfig::from_ron_str("(grid_width: 20, initial_selected: stone)").unwrap();
        assert_eq!(config.grid_width, 20);
        assert_eq!(config.grid_height, DEFAULT_HEIGHT);
        assert_eq!(config.initial_selected, BlockType::Stone);
    }

    #[test]
    fn test_rejects_zero_width() {
        let err = EditorConfig::from_ron_str("(grid_width: 0)").unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_rejects_huge_cells() {
        let err = EditorConfig::from_ron_str("(max_cell_size: 1000.0)").unwrap_err();
        assert!(err.to_string().contains("max_cell_size"));
    }

    #[test]
    fn test_parse_error() {
        let err = EditorConfig::from_ron_str("(grid_width: \"wide\")").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "(grid_width: 8, grid_height: 4)").unwrap();

        let config = EditorConfig::load(file.path()).unwrap();
        let grid = config.build_grid();
        assert_eq!((grid.width(), grid.height()), (8, 4));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = EditorConfig::load(dir.path().join("nope.ron")).unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }
}
