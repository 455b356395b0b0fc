// Dragon Ball Hunt: a grid snake game where a dragon chases dragon balls

pub mod config;
pub mod dragon_ball;
pub mod error;
pub mod game;
pub mod grid;
pub mod input;
pub mod scene;
pub mod session;

pub use crate::config::GameConfig;
pub use crate::error::ConfigError;
pub use crate::game::{Collision, GameState, TickResult};
pub use crate::grid::{Direction, GridSize, Position};
pub use crate::session::{Phase, Session};
