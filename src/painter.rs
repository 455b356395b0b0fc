use ggez::graphics::{Canvas, Color, DrawMode, DrawParam, Mesh, Rect, Text, TextLayout};
use ggez::mint::Point2;
use ggez::{Context, GameResult};

use dragon_ball_hunt::dragon_ball::Rgb;
use dragon_ball_hunt::scene::{BannerStyle, DrawOp, Scene};
use dragon_ball_hunt::Position;

// Colors
pub const BACKGROUND_COLOR: Color = Color::new(0.53, 0.81, 0.92, 1.0); // Sky blue
const BODY_COLOR: Color = Color::new(1.0, 0.42, 0.21, 1.0);
const BODY_STRIPE_COLOR: Color = Color::new(0.97, 0.77, 0.62, 1.0);
const HEAD_COLOR: Color = Color::new(0.9, 0.3, 0.1, 1.0);
const SNOUT_COLOR: Color = Color::new(0.2, 0.2, 0.2, 1.0);
const TITLE_COLOR: Color = Color::new(1.0, 0.27, 0.0, 1.0);
const PROMPT_COLOR: Color = Color::new(0.2, 0.2, 0.2, 1.0);
const ALERT_COLOR: Color = Color::new(0.96, 0.26, 0.21, 1.0);

/// Paints a scene with ggez meshes; one grid cell is `cell` pixels wide.
pub struct Painter {
    cell: f32,
    screen: (f32, f32),
}

impl Painter {
    pub fn new(cell_size: i16, screen: (f32, f32)) -> Self {
        Painter {
            cell: cell_size as f32,
            screen,
        }
    }

    pub fn paint(&self, ctx: &mut Context, canvas: &mut Canvas, scene: &Scene) -> GameResult {
        for op in &scene.ops {
            match op {
                DrawOp::Background => {
                    let rect = Rect::new(0.0, 0.0, self.screen.0, self.screen.1);
                    self.fill_rect(ctx, canvas, rect, BACKGROUND_COLOR)?;
                }
                DrawOp::Body(pos) => self.draw_body(ctx, canvas, *pos)?,
                DrawOp::Head {
                    at,
                    rotation_degrees,
                } => self.draw_head(ctx, canvas, *at, *rotation_degrees)?,
                DrawOp::Ball { at, color } => self.draw_ball(ctx, canvas, *at, *color)?,
                DrawOp::Hud { score, best } => {
                    let hud = Text::new(format!("Score: {} | Best: {}", score, best));
                    canvas.draw(
                        &hud,
                        DrawParam::default()
                            .dest(Point2 { x: 10.0, y: 10.0 })
                            .color(PROMPT_COLOR),
                    );
                }
                DrawOp::Emblem => {
                    // Sits above the title, at least 80px across
                    let radius = (self.cell * 2.0).max(40.0);
                    let center = Point2 {
                        x: self.screen.0 / 2.0,
                        y: self.screen.1 / 2.0 - radius,
                    };
                    self.draw_dragon_head(ctx, canvas, center, radius, 0)?;
                }
                DrawOp::Banner { text, line, style } => self.draw_banner(canvas, text, *line, *style),
            }
        }
        Ok(())
    }

    fn cell_rect(&self, pos: Position) -> Rect {
        Rect::new(
            pos.x as f32 * self.cell,
            pos.y as f32 * self.cell,
            self.cell,
            self.cell,
        )
    }

    fn cell_center(&self, pos: Position) -> Point2<f32> {
        Point2 {
            x: pos.x as f32 * self.cell + self.cell / 2.0,
            y: pos.y as f32 * self.cell + self.cell / 2.0,
        }
    }

    fn fill_rect(&self, ctx: &mut Context, canvas: &mut Canvas, rect: Rect, color: Color) -> GameResult {
        canvas.draw(
            &Mesh::new_rectangle(ctx, DrawMode::fill(), rect, color)?,
            DrawParam::default(),
        );
        Ok(())
    }

    fn draw_body(&self, ctx: &mut Context, canvas: &mut Canvas, pos: Position) -> GameResult {
        let rect = self.cell_rect(pos);
        self.fill_rect(ctx, canvas, rect, BODY_COLOR)?;

        let stripe = Rect::new(rect.x + rect.w * 0.25, rect.y + rect.h * 0.4, rect.w * 0.5, rect.h * 0.2);
        self.fill_rect(ctx, canvas, stripe, BODY_STRIPE_COLOR)
    }

    // The head is twice a cell across, centered on its own cell
    fn draw_head(&self, ctx: &mut Context, canvas: &mut Canvas, at: Position, rotation_degrees: u16) -> GameResult {
        self.draw_dragon_head(ctx, canvas, self.cell_center(at), self.cell, rotation_degrees)
    }

    fn draw_dragon_head(
        &self,
        ctx: &mut Context,
        canvas: &mut Canvas,
        center: Point2<f32>,
        radius: f32,
        rotation_degrees: u16,
    ) -> GameResult {
        canvas.draw(
            &Mesh::new_circle(ctx, DrawMode::fill(), center, radius, 0.1, HEAD_COLOR)?,
            DrawParam::default(),
        );

        let angle = (rotation_degrees as f32).to_radians();
        let (sin, cos) = angle.sin_cos();
        let along = |d: f32| Point2 {
            x: center.x + cos * d,
            y: center.y + sin * d,
        };
        let tip = along(radius * 0.9);
        let base = along(radius * 0.2);
        let half_width = radius * 0.35;
        let snout = [
            tip,
            Point2 {
                x: base.x - sin * half_width,
                y: base.y + cos * half_width,
            },
            Point2 {
                x: base.x + sin * half_width,
                y: base.y - cos * half_width,
            },
        ];
        canvas.draw(
            &Mesh::new_polygon(ctx, DrawMode::fill(), &snout, SNOUT_COLOR)?,
            DrawParam::default(),
        );
        Ok(())
    }

    fn draw_ball(&self, ctx: &mut Context, canvas: &mut Canvas, at: Position, color: Rgb) -> GameResult {
        let center = self.cell_center(at);
        let fill = Color::from_rgb(color.r, color.g, color.b);
        canvas.draw(
            &Mesh::new_circle(ctx, DrawMode::fill(), center, self.cell / 2.0, 0.1, fill)?,
            DrawParam::default(),
        );
        canvas.draw(
            &Mesh::new_circle(ctx, DrawMode::fill(), center, self.cell / 8.0, 0.1, Color::WHITE)?,
            DrawParam::default(),
        );
        Ok(())
    }

    fn draw_banner(&self, canvas: &mut Canvas, text: &str, line: i8, style: BannerStyle) {
        let (scale, color) = match style {
            BannerStyle::Title => (28.0, TITLE_COLOR),
            BannerStyle::Prompt => (18.0, PROMPT_COLOR),
            BannerStyle::Alert => (32.0, ALERT_COLOR),
        };
        let mut banner = Text::new(text);
        banner.set_scale(scale).set_layout(TextLayout::center());
        canvas.draw(
            &banner,
            DrawParam::default()
                .dest(Point2 {
                    x: self.screen.0 / 2.0,
                    y: self.screen.1 / 2.0 + line as f32 * 36.0,
                })
                .color(color),
        );
    }
}

