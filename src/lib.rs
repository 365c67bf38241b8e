//! tui-merge (workspace facade crate).
//!
//! Re-exports the member crates under `tui_merge::{core,input,store,term,types}`
//! and holds the pieces of the binary that can be tested without a terminal.

pub mod app;
pub mod cli;

pub use tui_merge_core as core;
pub use tui_merge_input as input;
pub use tui_merge_store as store;
pub use tui_merge_term as term;
pub use tui_merge_types as types;
