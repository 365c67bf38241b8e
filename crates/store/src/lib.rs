//! File persistence for tui-merge.
//!
//! Everything is stored as pretty-printed JSON. Writes go to a sibling
//! `*.tmp` file first and are renamed into place, so a crash mid-write leaves
//! the previous file intact.
//!
//! - [`session`]: save and resume a [`SessionSnapshot`](crate::core::SessionSnapshot)
//! - [`config`]: load a [`SessionConfig`](crate::core::SessionConfig) with defaults
//! - [`scores`]: the bounded high score table

pub mod config;
pub mod scores;
pub mod session;

mod json;

pub use tui_merge_core as core;

pub use config::{load_config, save_config};
pub use scores::{HighScoreEntry, HighScores};
pub use session::{load_session, remove_session, save_session};
