//! What to draw for a given session, independent of any graphics backend.

use crate::dragon_ball::Rgb;
use crate::grid::Position;
use crate::session::{Phase, Session};

pub const TITLE: &str = "Dragon Ball Hunt";
pub const START_PROMPT: &str = "Press Enter to Play";
pub const GAME_OVER: &str = "GAME OVER";
pub const RESTART_PROMPT: &str = "Press R to restart";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BannerStyle {
    Title,
    Prompt,
    Alert,
}

#[derive(Clone, PartialEq, Debug)]
pub enum DrawOp {
    Background,
    Body(Position),
    Head { at: Position, rotation_degrees: u16 },
    Ball { at: Position, color: Rgb },
    Hud { score: u32, best: u32 },
    /// The large dragon head shown above the welcome title.
    Emblem,
    /// Centered text; `line` counts rows below the middle of the screen.
    Banner {
        text: &'static str,
        line: i8,
        style: BannerStyle,
    },
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct Scene {
    pub ops: Vec<DrawOp>,
}

impl Scene {
    pub fn describe(session: &Session) -> Scene {
        let mut ops = vec![DrawOp::Background];

        match (session.phase(), session.state()) {
            (Phase::Welcome, _) | (_, None) => {
                ops.push(DrawOp::Emblem);
                ops.push(DrawOp::Banner {
                    text: TITLE,
                    line: 0,
                    style: BannerStyle::Title,
                });
                ops.push(DrawOp::Banner {
                    text: START_PROMPT,
                    line: 1,
                    style: BannerStyle::Prompt,
                });
            }
            (phase, Some(state)) => {
                // Tail first so the oversized head lands on top
                ops.extend(state.dragon().iter().skip(1).rev().map(|pos| DrawOp::Body(*pos)));
                ops.push(DrawOp::Head {
                    at: state.head(),
                    rotation_degrees: state.direction().rotation_degrees(),
                });
                let ball = state.ball();
                ops.push(DrawOp::Ball {
                    at: ball.position,
                    color: ball.color(),
                });
                ops.push(DrawOp::Hud {
                    score: state.score(),
                    best: session.best_score(),
                });

                if let Phase::GameOver(_) = phase {
                    ops.push(DrawOp::Banner {
                        text: GAME_OVER,
                        line: 0,
                        style: BannerStyle::Alert,
                    });
                    ops.push(DrawOp::Banner {
                        text: RESTART_PROMPT,
                        line: 1,
                        style: BannerStyle::Prompt,
                    });
                }
            }
        }

        Scene { ops }
    }
}
