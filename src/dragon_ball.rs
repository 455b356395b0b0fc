use rand::Rng;
use tracing::{debug, warn};

use crate::grid::{GridSize, Position};

/// Where a ball lands when no free cell turns up within the attempt budget.
pub const FALLBACK_POSITION: Position = Position::new(0, 0);

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }
}

// Colors
pub const BALL_COLORS: [Rgb; 7] = [
    Rgb::new(0xF7, 0xDC, 0x6F), // Pale gold
    Rgb::new(0xF3, 0x9C, 0x12), // Orange
    Rgb::new(0xE6, 0x7E, 0x22), // Carrot
    Rgb::new(0xD3, 0x54, 0x00), // Pumpkin
    Rgb::new(0xC0, 0x39, 0x2B), // Red
    Rgb::new(0x9B, 0x59, 0xB6), // Amethyst
    Rgb::new(0x8E, 0x44, 0xAD), // Purple
];

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct DragonBall {
    pub position: Position,
    /// Index into [`BALL_COLORS`].
    pub color_index: usize,
}

impl DragonBall {
    /// Places a new ball on a cell the dragon does not cover, cycling to the
    /// color after `previous_color`.
    pub fn spawn(
        rng: &mut impl Rng,
        grid: GridSize,
        dragon: &[Position],
        attempts: usize,
        previous_color: usize,
    ) -> Self {
        let position = match find_free_cell(rng, grid, dragon, attempts) {
            Some(pos) => pos,
            None => {
                warn!(attempts, "no free cell found for dragon ball, using fallback");
                FALLBACK_POSITION
            }
        };
        let color_index = (previous_color + 1) % BALL_COLORS.len();
        debug!(x = position.x, y = position.y, color_index, "dragon ball placed");

        DragonBall {
            position,
            color_index,
        }
    }

    pub fn color(&self) -> Rgb {
        BALL_COLORS[self.color_index % BALL_COLORS.len()]
    }
}

/// Samples uniformly random cells until one is not in `occupied`, giving up
/// after `attempts` tries.
pub fn find_free_cell(
    rng: &mut impl Rng,
    grid: GridSize,
    occupied: &[Position],
    attempts: usize,
) -> Option<Position> {
    if grid.width <= 0 || grid.height <= 0 {
        return None;
    }
    (0..attempts)
        .map(|_| Position {
            x: rng.gen_range(0..grid.width),
            y: rng.gen_range(0..grid.height),
        })
        .find(|pos| !occupied.contains(pos))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn free_cell_avoids_the_dragon() {
        let mut rng = StdRng::seed_from_u64(7);
        let grid = GridSize::new(3, 3);
        let occupied: Vec<Position> = (0..3)
            .flat_map(|x| (0..3).map(move |y| Position::new(x, y)))
            .filter(|p| *p != Position::new(2, 1))
            .collect();

        for _ in 0..20 {
            if let Some(pos) = find_free_cell(&mut rng, grid, &occupied, 1000) {
                assert_eq!(pos, Position::new(2, 1));
            }
        }
    }

    #[test]
    fn full_board_falls_back_to_origin() {
        let mut rng = StdRng::seed_from_u64(1);
        let grid = GridSize::new(2, 1);
        let dragon = [Position::new(1, 0), Position::new(0, 0)];

        assert_eq!(find_free_cell(&mut rng, grid, &dragon, 100), None);
        let ball = DragonBall::spawn(&mut rng, grid, &dragon, 100, 0);
        assert_eq!(ball.position, FALLBACK_POSITION);
    }

    #[test]
    fn zero_attempts_never_samples() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(find_free_cell(&mut rng, GridSize::new(10, 10), &[], 0), None);
    }

    #[test]
    fn color_cycles_and_wraps() {
        let mut rng = StdRng::seed_from_u64(9);
        let grid = GridSize::new(10, 10);
        let first = DragonBall::spawn(&mut rng, grid, &[], 100, 2);
        assert_eq!(first.color_index, 3);
        assert_eq!(first.color(), BALL_COLORS[3]);

        let wrapped = DragonBall::spawn(&mut rng, grid, &[], 100, BALL_COLORS.len() - 1);
        assert_eq!(wrapped.color_index, 0);
    }
}
