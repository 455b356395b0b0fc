//! The tick-driven simulation: a dragon crawling a bounded grid, hunting balls.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::config::{validate_grid, GameConfig, DEFAULT_PLACEMENT_ATTEMPTS};
use crate::dragon_ball::{DragonBall, BALL_COLORS};
use crate::error::{ConfigError, Result};
use crate::grid::{Direction, GridSize, Position};

pub const SCORE_PER_BALL: u32 = 10;

/// Why a hunt ended.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Collision {
    Wall,
    Dragon,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TickResult {
    /// The dragon moved one cell and kept its length.
    Moved,
    /// The dragon ate a ball and grew by one segment.
    Grew,
    Terminated(Collision),
    /// The hunt is already over; nothing changed.
    Idle,
}

impl TickResult {
    pub fn is_terminal(self) -> bool {
        matches!(self, TickResult::Terminated(_))
    }
}

#[derive(Clone, Debug)]
pub struct GameState {
    grid: GridSize,
    /// Head first, tail last.
    dragon: Vec<Position>,
    direction: Direction,
    next_direction: Direction,
    ball: DragonBall,
    score: u32,
    running: bool,
    placement_attempts: usize,
    rng: StdRng,
}

impl GameState {
    /// A fresh hunt with an entropy-seeded generator.
    pub fn reset(grid: GridSize, initial_length: usize) -> Result<Self> {
        Self::with_rng(
            grid,
            initial_length,
            DEFAULT_PLACEMENT_ATTEMPTS,
            StdRng::from_entropy(),
        )
    }

    /// A fresh hunt with every tunable taken from `config`.
    pub fn from_config(config: &GameConfig) -> Result<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(
            config.grid(),
            config.initial_length,
            config.placement_attempts,
            rng,
        )
    }

    pub fn with_rng(
        grid: GridSize,
        initial_length: usize,
        placement_attempts: usize,
        mut rng: StdRng,
    ) -> Result<Self> {
        validate_grid(grid, initial_length)?;

        // Initialize dragon at the center, trailing to the left
        let tail_room = (initial_length - 1) as i16;
        let head = Position {
            x: (grid.width / 2).max(tail_room),
            y: grid.height / 2,
        };
        let dragon: Vec<Position> = (0..initial_length as i16)
            .map(|i| Position {
                x: head.x - i,
                y: head.y,
            })
            .collect();

        let first_color = rng.gen_range(0..BALL_COLORS.len());
        let ball = DragonBall::spawn(&mut rng, grid, &dragon, placement_attempts, first_color);

        Ok(GameState {
            grid,
            dragon,
            direction: Direction::Right,
            next_direction: Direction::Right,
            ball,
            score: 0,
            running: true,
            placement_attempts,
            rng,
        })
    }

    /// Queues a turn for the next tick. Reversals and requests made after the
    /// hunt ended are dropped. Returns whether the request was taken.
    pub fn set_pending_direction(&mut self, requested: Direction) -> bool {
        if !self.running || requested == self.direction.opposite() {
            debug!(?requested, current = ?self.direction, "steering ignored");
            return false;
        }
        self.next_direction = requested;
        debug!(?requested, "steering accepted");
        true
    }

    pub fn tick(&mut self) -> TickResult {
        if !self.running {
            return TickResult::Idle;
        }

        self.direction = self.next_direction;
        let new_head = self.head().step(self.direction);
        debug!(x = new_head.x, y = new_head.y, direction = ?self.direction, "advancing");

        // Check collisions against the whole pre-move dragon, tail included
        if !self.grid.contains(new_head) {
            self.running = false;
            return TickResult::Terminated(Collision::Wall);
        }
        if self.dragon.contains(&new_head) {
            self.running = false;
            return TickResult::Terminated(Collision::Dragon);
        }

        self.dragon.insert(0, new_head);

        if new_head == self.ball.position {
            self.score += SCORE_PER_BALL;
            self.ball = DragonBall::spawn(
                &mut self.rng,
                self.grid,
                &self.dragon,
                self.placement_attempts,
                self.ball.color_index,
            );
            TickResult::Grew
        } else {
            self.dragon.pop();
            TickResult::Moved
        }
    }

    pub fn head(&self) -> Position {
        self.dragon[0]
    }

    pub fn dragon(&self) -> &[Position] {
        &self.dragon
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Direction {
        self.next_direction
    }

    pub fn ball(&self) -> DragonBall {
        self.ball
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn grid(&self) -> GridSize {
        self.grid
    }

    /// Puts the dragon and ball somewhere specific, for scripted scenarios.
    /// Rejects layouts a tick could never produce; the state is left
    /// untouched on error.
    #[doc(hidden)]
    pub fn arrange(&mut self, dragon: Vec<Position>, direction: Direction, ball: Position) -> Result<()> {
        if dragon.is_empty() {
            return Err(ConfigError::EmptyDragon);
        }
        for (i, pos) in dragon.iter().enumerate() {
            if !self.grid.contains(*pos) {
                return Err(ConfigError::OffGrid { x: pos.x, y: pos.y });
            }
            if dragon[..i].contains(pos) {
                return Err(ConfigError::OverlappingDragon { x: pos.x, y: pos.y });
            }
        }
        if !self.grid.contains(ball) {
            return Err(ConfigError::OffGrid { x: ball.x, y: ball.y });
        }
        if dragon.contains(&ball) {
            return Err(ConfigError::BallOnDragon { x: ball.x, y: ball.y });
        }

        self.dragon = dragon;
        self.direction = direction;
        self.next_direction = direction;
        self.ball.position = ball;
        Ok(())
    }
}
