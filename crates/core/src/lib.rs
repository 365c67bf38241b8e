//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the slide-and-merge rules, the undo chain and the
//! session state machine. It has **zero dependencies** on terminal, files or
//! input handling, making it:
//!
//! - **Deterministic**: randomness is injected, so a scripted RNG replays a game exactly
//! - **Testable**: every rule is a plain function or method on owned data
//! - **Portable**: runs anywhere a `Vec` does (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`grid`]: rectangular tile matrix plus score
//! - [`slide`]: direction-parameterized slide/merge and the stuck check
//! - [`rng`]: the injectable [`SpawnRng`] seam and its implementations
//! - [`spawn`]: placing new tiles on empty cells
//! - [`history`]: bounded most-recent-first undo chain
//! - [`session`]: lives, goal latch and the `Active` / `GameOver` state machine
//! - [`config`], [`snapshot`], [`event`], [`error`]: the data a session is built
//!   from, persisted as, publishes, and fails with
//!
//! # Game Rules
//!
//! - **Slide**: every tile travels toward the chosen edge through empty cells
//! - **Merge**: two equal neighbours become one tile of double value; a tile
//!   merges at most once per move and the pair nearest the edge wins ties
//! - **Spawn**: each successful move places one tile from the spawnable set
//! - **Lives**: a grid with no legal move costs a life; the last life ends the game
//! - **Undo**: up to `max_undos` earlier grids (with their scores) are kept
//!
//! # Example
//!
//! ```
//! use tui_merge_core::{PlaySession, ScriptedRng, SessionConfig};
//! use tui_merge_core::types::Direction;
//!
//! let config = SessionConfig::builder().size(4, 4).goal(2048).build().unwrap();
//! let mut session = PlaySession::new(config, ScriptedRng::new(vec![0, 0, 5, 1])).unwrap();
//!
//! // Starter tiles land on the first empty cells the script picks.
//! assert_eq!(session.current().empty_count(), 14);
//!
//! // Either the move happens or it is rejected without side effects.
//! match session.apply_move(Direction::Left) {
//!     Ok(report) => assert_eq!(report.direction, Direction::Left),
//!     Err(err) => assert_eq!(err.code(), "cannot_move"),
//! }
//!
//! // Nothing to go back to before the first move.
//! let _ = session.undo();
//! ```

pub mod config;
pub mod error;
pub mod event;
pub mod grid;
pub mod history;
pub mod rng;
pub mod session;
pub mod slide;
pub mod snapshot;
pub mod spawn;

pub use tui_merge_types as types;

// Re-export commonly used types for convenience
pub use config::{SessionConfig, SessionConfigBuilder};
pub use error::{ConfigError, GridError, MoveError, SnapshotError, UndoError};
pub use event::{GameEvent, MoveEvents};
pub use grid::GridState;
pub use history::HistoryChain;
pub use rng::{ScriptedRng, SimpleRng, SpawnRng};
pub use session::{MoveOutcome, MoveReport, PlaySession, SessionStatus};
pub use slide::{can_move, legal_directions, slide, Merge, SlideOutcome};
pub use snapshot::{GridSnapshot, SessionSnapshot};
pub use spawn::{place, Spawn};
