//! Error types for the hunt

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("grid {width}x{height} is too small for a dragon of length {initial_length}")]
    GridTooSmall {
        width: i16,
        height: i16,
        initial_length: usize,
    },

    #[error("initial dragon length must be at least 1")]
    EmptyDragon,

    #[error("tick interval must be greater than zero")]
    ZeroTickInterval,

    #[error("ball placement needs at least one attempt")]
    NoPlacementAttempts,

    #[error("cell ({x}, {y}) lies outside the grid")]
    OffGrid { x: i16, y: i16 },

    #[error("dragon covers cell ({x}, {y}) more than once")]
    OverlappingDragon { x: i16, y: i16 },

    #[error("dragon ball at ({x}, {y}) sits on the dragon")]
    BallOnDragon { x: i16, y: i16 },

    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;
