use ggez::input::keyboard::KeyCode;

use crate::grid::Direction;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Command {
    Steer(Direction),
    Start,
    Restart,
    Quit,
}

/// Maps a key press to a game command. Unrecognized keys map to `None`.
pub fn command_for_key(keycode: KeyCode) -> Option<Command> {
    match keycode {
        KeyCode::Up => Some(Command::Steer(Direction::Up)),
        KeyCode::Down => Some(Command::Steer(Direction::Down)),
        KeyCode::Left => Some(Command::Steer(Direction::Left)),
        KeyCode::Right => Some(Command::Steer(Direction::Right)),
        KeyCode::Return | KeyCode::NumpadEnter | KeyCode::Space => Some(Command::Start),
        KeyCode::R => Some(Command::Restart),
        KeyCode::Escape => Some(Command::Quit),
        _ => None,
    }
}
