use clap::Parser;
use ggez::event::{self, EventHandler};
use ggez::input::keyboard::KeyInput;
use ggez::{graphics, Context, GameError, GameResult};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use dragon_ball_hunt::input::{command_for_key, Command};
use dragon_ball_hunt::scene::Scene;
use dragon_ball_hunt::{ConfigError, GameConfig, Session};

mod painter;

use painter::{Painter, BACKGROUND_COLOR};

#[derive(Parser)]
#[command(name = "dragon_ball_hunt")]
#[command(about = "Dragon Ball Hunt - chase the dragon balls, don't bite yourself", long_about = None)]
struct Cli {
    /// JSON config file; defaults are used when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for ball placement
    #[arg(long)]
    seed: Option<u64>,

    /// Milliseconds between moves
    #[arg(long)]
    tick_ms: Option<u64>,
}

struct Game {
    session: Session,
    painter: Painter,
}

impl Game {
    fn new(session: Session) -> Self {
        let config = session.config();
        let painter = Painter::new(config.cell_size, config.screen_size());
        Game { session, painter }
    }
}

fn config_failure(e: ConfigError) -> GameError {
    GameError::ConfigError(e.to_string())
}

impl EventHandler for Game {
    fn update(&mut self, ctx: &mut Context) -> GameResult {
        let dt = ctx.time.delta();
        if let Some(result) = self.session.advance(dt) {
            debug!(?result, "tick");
        }
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult {
        let mut canvas = graphics::Canvas::from_frame(ctx, BACKGROUND_COLOR);
        let scene = Scene::describe(&self.session);
        self.painter.paint(ctx, &mut canvas, &scene)?;
        canvas.finish(ctx)?;
        Ok(())
    }

    fn key_down_event(&mut self, ctx: &mut Context, input: KeyInput, _repeat: bool) -> GameResult {
        let Some(command) = input.keycode.and_then(command_for_key) else {
            return Ok(());
        };
        match command {
            Command::Steer(direction) => {
                self.session.steer(direction);
            }
            Command::Start => self.session.start().map_err(config_failure)?,
            Command::Restart => self.session.restart().map_err(config_failure)?,
            Command::Quit => ctx.request_quit(),
        }
        Ok(())
    }
}

fn main() -> GameResult {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let mut config = GameConfig::load(cli.config.as_deref()).map_err(config_failure)?;
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    if let Some(tick_ms) = cli.tick_ms {
        config.tick_ms = tick_ms;
    }
    let session = Session::new(config).map_err(config_failure)?;
    info!(config = ?session.config(), "config loaded");

    let (width, height) = session.config().screen_size();
    let window_setup = ggez::conf::WindowSetup::default()
        .title("Dragon Ball Hunt")
        .vsync(true);
    let window_mode = ggez::conf::WindowMode::default()
        .dimensions(width, height)
        .resizable(false);

    let (ctx, event_loop) = ggez::ContextBuilder::new("dragon_ball_hunt", "dragon_ball_hunt")
        .window_setup(window_setup)
        .window_mode(window_mode)
        .build()?;

    let game = Game::new(session);
    event::run(ctx, event_loop, game)
}
