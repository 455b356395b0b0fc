//! Owns the current hunt and drives it from a fixed-period clock.

use std::time::Duration;
use tracing::{debug, info};

use crate::config::GameConfig;
use crate::error::Result;
use crate::game::{Collision, GameState, TickResult};
use crate::grid::Direction;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Phase {
    /// Nothing started yet.
    Welcome,
    Playing,
    GameOver(Collision),
}

pub struct Session {
    config: GameConfig,
    phase: Phase,
    state: Option<GameState>,
    /// Time left before the first tick of a fresh hunt.
    warmup: Duration,
    since_last_tick: Duration,
    best_score: u32,
}

impl Session {
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;
        Ok(Session {
            config,
            phase: Phase::Welcome,
            state: None,
            warmup: Duration::ZERO,
            since_last_tick: Duration::ZERO,
            best_score: 0,
        })
    }

    /// Begins a hunt unless one is already under way.
    pub fn start(&mut self) -> Result<()> {
        if self.phase == Phase::Playing {
            debug!("start ignored, hunt already running");
            return Ok(());
        }
        let state = GameState::from_config(&self.config)?;
        info!(
            width = self.config.width,
            height = self.config.height,
            "hunt started"
        );
        self.state = Some(state);
        self.phase = Phase::Playing;
        self.warmup = self.config.start_delay();
        self.since_last_tick = Duration::ZERO;
        Ok(())
    }

    /// Abandons whatever is running and begins a fresh hunt.
    pub fn restart(&mut self) -> Result<()> {
        info!("restarting hunt");
        self.phase = Phase::Welcome;
        self.start()
    }

    pub fn steer(&mut self, direction: Direction) -> bool {
        match (&mut self.state, self.phase) {
            (Some(state), Phase::Playing) => state.set_pending_direction(direction),
            _ => false,
        }
    }

    /// Feeds elapsed time to the clock. Runs at most one tick per call and
    /// returns its result.
    pub fn advance(&mut self, dt: Duration) -> Option<TickResult> {
        if self.phase != Phase::Playing {
            return None;
        }

        let mut dt = dt;
        if !self.warmup.is_zero() {
            if dt < self.warmup {
                self.warmup -= dt;
                return None;
            }
            dt -= self.warmup;
            self.warmup = Duration::ZERO;
        }

        self.since_last_tick += dt;
        let interval = self.config.tick_interval();
        if self.since_last_tick < interval {
            return None;
        }
        self.since_last_tick -= interval;
        // Never bank more than one pending tick
        if self.since_last_tick >= interval {
            self.since_last_tick = Duration::ZERO;
        }

        let state = self.state.as_mut()?;
        let result = state.tick();
        self.best_score = self.best_score.max(state.score());

        if let TickResult::Terminated(reason) = result {
            info!(?reason, score = state.score(), "game over");
            self.phase = Phase::GameOver(reason);
        }
        Some(result)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The current or most recently finished hunt.
    pub fn state(&self) -> Option<&GameState> {
        self.state.as_ref()
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quick_config() -> GameConfig {
        GameConfig {
            tick_ms: 100,
            start_delay_ms: 300,
            seed: Some(5),
            ..GameConfig::default()
        }
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn waits_for_start() {
        let mut session = Session::new(quick_config()).unwrap();
        assert_eq!(session.phase(), Phase::Welcome);
        assert_eq!(session.advance(ms(10_000)), None);
        assert!(!session.steer(Direction::Up));
        assert!(session.state().is_none());
    }

    #[test]
    fn start_delay_holds_back_the_first_tick() {
        let mut session = Session::new(quick_config()).unwrap();
        session.start().unwrap();

        assert_eq!(session.advance(ms(250)), None);
        assert_eq!(session.advance(ms(100)), None);
        assert_eq!(session.advance(ms(50)), Some(TickResult::Moved));
    }

    #[test]
    fn one_tick_per_advance_at_most() {
        let mut session = Session::new(GameConfig {
            start_delay_ms: 0,
            ..quick_config()
        })
        .unwrap();
        session.start().unwrap();

        assert!(session.advance(ms(1_000)).is_some());
        assert_eq!(session.state().unwrap().head().x, 11);
        assert!(session.advance(ms(10)).is_none());
    }

    #[test]
    fn start_is_ignored_mid_hunt() {
        let mut session = Session::new(GameConfig {
            start_delay_ms: 0,
            ..quick_config()
        })
        .unwrap();
        session.start().unwrap();
        session.advance(ms(100));
        let head = session.state().unwrap().head();

        session.start().unwrap();
        assert_eq!(session.state().unwrap().head(), head);

        session.restart().unwrap();
        assert_eq!(session.state().unwrap().dragon().len(), 3);
        assert_eq!(session.state().unwrap().head().x, 10);
    }

    #[test]
    fn game_over_stops_the_clock() {
        let mut session = Session::new(GameConfig {
            start_delay_ms: 0,
            ..quick_config()
        })
        .unwrap();
        session.start().unwrap();

        let mut ticks = 0;
        while session.phase() == Phase::Playing {
            session.advance(ms(100));
            ticks += 1;
            assert!(ticks < 100, "dragon never reached the wall");
        }

        assert_eq!(session.phase(), Phase::GameOver(Collision::Wall));
        assert_eq!(session.advance(ms(100)), None);
        assert!(!session.steer(Direction::Up));

        session.start().unwrap();
        assert_eq!(session.phase(), Phase::Playing);
    }
}
