//! Game state and core simulation types.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::collision::Rect;
use crate::color::{self, Color, PaletteIndex};
use crate::consts::*;

/// Current screen of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Menu with the decorative ball and paddle color pickers
    TitleScreen,
    /// Active rally
    Gameplay,
    /// A player reached the winning score
    GameOver,
}

/// Which side of the court a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddleSide {
    Left,
    Right,
}

impl PaddleSide {
    pub fn label(self) -> &'static str {
        match self {
            PaddleSide::Left => "Left",
            PaddleSide::Right => "Right",
        }
    }
}

/// A player paddle: fixed x, vertical motion only
#[derive(Debug, Clone)]
pub struct Paddle {
    pub x: f32,
    /// Top edge
    pub y: f32,
    pub color: PaletteIndex,
}

impl Paddle {
    fn new(x: f32, screen_h: f32, color: PaletteIndex) -> Self {
        Self {
            x,
            y: screen_h / 2.0 - PADDLE_HEIGHT / 2.0,
            color,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, PADDLE_WIDTH, PADDLE_HEIGHT)
    }

    pub fn center_y(&self) -> f32 {
        self.y + PADDLE_HEIGHT / 2.0
    }

    /// Re-center vertically (match start)
    pub fn recenter(&mut self, screen_h: f32) {
        self.y = screen_h / 2.0 - PADDLE_HEIGHT / 2.0;
    }

    /// Keep the whole rectangle inside the vertical screen bounds
    pub fn clamp_to_screen(&mut self, screen_h: f32) {
        self.y = self.y.clamp(0.0, screen_h - PADDLE_HEIGHT);
    }
}

/// The live gameplay ball
#[derive(Debug, Clone)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Neutral on serve, takes the striker's color on every paddle hit
    pub color: Color,
}

/// Decorative title-screen ball: perfectly elastic, no scoring, no paddles
#[derive(Debug, Clone)]
pub struct MenuBall {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl MenuBall {
    fn new(screen_w: f32, screen_h: f32) -> Self {
        Self {
            pos: Vec2::new(screen_w / 4.0, screen_h / 3.0),
            vel: Vec2::new(BALL_START_SPEED * 0.8, BALL_START_SPEED * 0.6),
        }
    }

    /// Integrate and reflect off all four screen bounds
    pub fn advance(&mut self, dt: f32, screen_w: f32, screen_h: f32) {
        self.pos += self.vel * dt;
        let r = MENU_BALL_RADIUS;
        if self.pos.x - r <= 0.0 && self.vel.x < 0.0 {
            self.pos.x = r;
            self.vel.x = -self.vel.x;
        }
        if self.pos.x + r >= screen_w && self.vel.x > 0.0 {
            self.pos.x = screen_w - r;
            self.vel.x = -self.vel.x;
        }
        if self.pos.y - r <= 0.0 && self.vel.y < 0.0 {
            self.pos.y = r;
            self.vel.y = -self.vel.y;
        }
        if self.pos.y + r >= screen_h && self.vel.y > 0.0 {
            self.pos.y = screen_h - r;
            self.vel.y = -self.vel.y;
        }
    }
}

/// Complete match state.
///
/// Created once at startup with the screen dimensions and a seed; every
/// field is mutated exclusively by `tick`. Same seed, same inputs, same
/// match.
#[derive(Debug, Clone)]
pub struct GameState {
    pub phase: GamePhase,
    pub screen_w: f32,
    pub screen_h: f32,
    pub left_paddle: Paddle,
    pub right_paddle: Paddle,
    pub ball: Ball,
    pub menu_ball: MenuBall,
    pub left_score: u32,
    pub right_score: u32,
    /// Winner line shown on the game-over screen; empty during play
    pub game_over_message: String,
    pub seed: u64,
    pub(crate) rng: Pcg32,
}

impl GameState {
    pub fn new(screen_w: f32, screen_h: f32, seed: u64) -> Self {
        Self {
            phase: GamePhase::TitleScreen,
            screen_w,
            screen_h,
            left_paddle: Paddle::new(PADDLE_BORDER, screen_h, PaletteIndex::new(1)),
            right_paddle: Paddle::new(
                screen_w - PADDLE_WIDTH - PADDLE_BORDER,
                screen_h,
                PaletteIndex::new(2),
            ),
            ball: Ball {
                pos: Vec2::new(screen_w / 2.0, screen_h / 2.0),
                vel: Vec2::ZERO,
                color: color::WHITE,
            },
            menu_ball: MenuBall::new(screen_w, screen_h),
            left_score: 0,
            right_score: 0,
            game_over_message: String::new(),
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Serve: center the ball and launch it toward the given side at the
    /// fixed initial speed.
    ///
    /// The vertical component is drawn pseudo-randomly up to half the
    /// horizontal speed. Near-horizontal directions get a forced vertical
    /// bias with a random sign, then the direction is re-normalized, so
    /// the resulting speed is always exactly `BALL_START_SPEED`.
    pub fn reset_ball(&mut self, serve_left: bool) {
        self.ball.pos = Vec2::new(self.screen_w / 2.0, self.screen_h / 2.0);

        let speed_x = if serve_left {
            -BALL_START_SPEED
        } else {
            BALL_START_SPEED
        };
        let speed_y = BALL_START_SPEED * (self.rng.random_range(-5..=5) as f32 / 10.0);

        let mut dir = Vec2::new(speed_x, speed_y).normalize();
        if dir.y.abs() < SERVE_MIN_VERTICAL {
            // Avoid a perfectly horizontal serve
            dir.y = if self.rng.random_bool(0.5) {
                -SERVE_VERTICAL_BIAS
            } else {
                SERVE_VERTICAL_BIAS
            };
            dir = dir.normalize();
        }
        self.ball.vel = dir * BALL_START_SPEED;
        self.ball.color = color::WHITE;
    }
}
