//! Terminal input module (session-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. Moves are
//! single key presses, so there is no repeat handling here; key-release and
//! repeat events are filtered by the caller.

pub mod map;

pub use tui_merge_types as types;

pub use map::{handle_key_event, should_quit};
