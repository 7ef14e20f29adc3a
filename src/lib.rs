//! Chaos Pong - two-player Pong with angled returns and compounding rally speed
//!
//! Core modules:
//! - `sim`: Deterministic simulation (paddle movement, collisions, scoring)
//! - `render`: Presenter boundary and per-screen layout
//! - `audio`: Sound cue routing and volume mixing
//! - `platform`: Input abstraction
//! - `settings`: Persisted preferences

pub mod audio;
pub mod color;
pub mod platform;
pub mod render;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed frame-rate cap
    pub const TARGET_FPS: u32 = 120;

    /// Paddle geometry
    pub const PADDLE_WIDTH: f32 = 25.0;
    pub const PADDLE_HEIGHT: f32 = 250.0;
    /// Vertical paddle speed (pixels/sec)
    pub const PADDLE_SPEED: f32 = 1200.0;
    /// Horizontal inset of each paddle from its screen edge
    pub const PADDLE_BORDER: f32 = 60.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 30.0;
    pub const BALL_START_SPEED: f32 = 750.0;
    /// Cap on how much of the post-bounce horizontal speed becomes vertical
    pub const BALL_BOUNCE_FACTOR_MAX: f32 = 0.8;
    /// Rally speed multiplier, compounds on every paddle contact (no cap)
    pub const BALL_SPEED_MULTIPLIER: f32 = 1.15;

    /// First player to reach this score wins the match
    pub const WINNING_SCORE: u32 = 5;

    /// Decorative title-screen ball
    pub const MENU_BALL_RADIUS: f32 = 40.0;

    /// Serves with a normalized vertical component below this get a forced bias
    pub const SERVE_MIN_VERTICAL: f32 = 0.05;
    pub const SERVE_VERTICAL_BIAS: f32 = 0.1;
}
