use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::error::{ConfigError, Result};
use crate::grid::GridSize;

pub const DEFAULT_GRID_SIZE: i16 = 20;
pub const DEFAULT_CELL_SIZE: i16 = 20;
pub const DEFAULT_INITIAL_LENGTH: usize = 3;
pub const DEFAULT_TICK_MS: u64 = 150;
pub const DEFAULT_START_DELAY_MS: u64 = 500;
pub const DEFAULT_PLACEMENT_ATTEMPTS: usize = 100;

/// Tunables for a hunt. Every field falls back to its default when absent
/// from the config file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub width: i16,
    pub height: i16,
    /// Pixels per cell on screen.
    pub cell_size: i16,
    pub initial_length: usize,
    pub tick_ms: u64,
    pub start_delay_ms: u64,
    pub placement_attempts: usize,
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            width: DEFAULT_GRID_SIZE,
            height: DEFAULT_GRID_SIZE,
            cell_size: DEFAULT_CELL_SIZE,
            initial_length: DEFAULT_INITIAL_LENGTH,
            tick_ms: DEFAULT_TICK_MS,
            start_delay_ms: DEFAULT_START_DELAY_MS,
            placement_attempts: DEFAULT_PLACEMENT_ATTEMPTS,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Reads a JSON config file, or returns the defaults when `path` is `None`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => {
                let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })?;
                serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
                    path: path.to_path_buf(),
                    source,
                })?
            }
            None => GameConfig::default(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        validate_grid(self.grid(), self.initial_length)?;
        if self.tick_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }
        if self.placement_attempts == 0 {
            return Err(ConfigError::NoPlacementAttempts);
        }
        Ok(())
    }

    pub fn grid(&self) -> GridSize {
        GridSize::new(self.width, self.height)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn start_delay(&self) -> Duration {
        Duration::from_millis(self.start_delay_ms)
    }

    /// Window edge lengths in pixels.
    pub fn screen_size(&self) -> (f32, f32) {
        (
            self.width as f32 * self.cell_size as f32,
            self.height as f32 * self.cell_size as f32,
        )
    }
}

/// A straight dragon of `initial_length` has to fit both across and down the grid.
pub fn validate_grid(grid: GridSize, initial_length: usize) -> Result<()> {
    if initial_length == 0 {
        return Err(ConfigError::EmptyDragon);
    }
    let too_small = |edge: i16| edge <= 0 || (edge as usize) < initial_length;
    if too_small(grid.width) || too_small(grid.height) {
        return Err(ConfigError::GridTooSmall {
            width: grid.width,
            height: grid.height,
            initial_length,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_classic_board() {
        let config = GameConfig::default();
        assert_eq!(config.grid(), GridSize::new(20, 20));
        assert_eq!(config.tick_interval(), Duration::from_millis(150));
        assert_eq!(config.start_delay(), Duration::from_millis(500));
        assert_eq!(config.screen_size(), (400.0, 400.0));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{ "width": 30, "seed": 42 }"#).unwrap();
        assert_eq!(config.width, 30);
        assert_eq!(config.height, DEFAULT_GRID_SIZE);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.initial_length, DEFAULT_INITIAL_LENGTH);
    }

    #[test]
    fn rejects_degenerate_settings() {
        let small = GameConfig {
            width: 2,
            ..GameConfig::default()
        };
        assert!(matches!(small.validate(), Err(ConfigError::GridTooSmall { .. })));

        let short = GameConfig {
            height: 2,
            ..GameConfig::default()
        };
        assert!(matches!(short.validate(), Err(ConfigError::GridTooSmall { .. })));

        let empty = GameConfig {
            initial_length: 0,
            ..GameConfig::default()
        };
        assert!(matches!(empty.validate(), Err(ConfigError::EmptyDragon)));

        let frozen = GameConfig {
            tick_ms: 0,
            ..GameConfig::default()
        };
        assert!(matches!(frozen.validate(), Err(ConfigError::ZeroTickInterval)));

        let hopeless = GameConfig {
            placement_attempts: 0,
            ..GameConfig::default()
        };
        assert!(matches!(hopeless.validate(), Err(ConfigError::NoPlacementAttempts)));
    }

    #[test]
    fn grid_exactly_as_long_as_the_dragon_is_fine() {
        assert!(validate_grid(GridSize::new(3, 3), 3).is_ok());
        assert!(validate_grid(GridSize::new(3, 2), 3).is_err());
    }
}
