//! Platform abstraction: keyboard sampling behind a trait so the
//! simulation can be driven by a real window, a script, or a test.

pub mod input;

pub use input::{InputSource, Key, sample};
