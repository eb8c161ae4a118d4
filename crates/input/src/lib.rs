//! Input handling: terminal key events → UI actions.

pub mod map;

pub use map::{handle_key_event, should_quit};
