//! Keyboard sampling.

use crate::sim::{Keys, TickInput};

/// The game's logical keys. Backends map physical keys onto these
/// (W/S for the left paddle, arrow keys for the right, Enter for primary).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    LeftUp,
    LeftDown,
    RightUp,
    RightDown,
    Primary,
}

/// Source of key state for one frame
pub trait InputSource {
    /// Key is currently held
    fn is_down(&self, key: Key) -> bool;
    /// Key went down this frame
    fn was_pressed(&self, key: Key) -> bool;
}

/// Sample an input source into the simulation's per-frame input
pub fn sample<S: InputSource>(source: &S) -> TickInput {
    let keys_from = |f: &dyn Fn(Key) -> bool| Keys {
        left_up: f(Key::LeftUp),
        left_down: f(Key::LeftDown),
        right_up: f(Key::RightUp),
        right_down: f(Key::RightDown),
        primary: f(Key::Primary),
    };
    TickInput {
        held: keys_from(&|k| source.is_down(k)),
        pressed: keys_from(&|k| source.was_pressed(k)),
    }
}
