//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - State advances only through `tick`
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Rect, circle_rect_overlap};
pub use state::{Ball, GamePhase, GameState, MenuBall, Paddle, PaddleSide};
pub use tick::{GameEvent, Keys, TickInput, tick};
