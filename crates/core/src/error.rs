//! Error types for the play session.
//!
//! `MoveError` and `UndoError` are expected, frequent outcomes of player input
//! and leave the session untouched. `ConfigError`, `GridError` and
//! `SnapshotError` signal bad data handed to a constructor and are never
//! repaired silently.

use crate::types::{Direction, Tile};

/// Why a move request was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// Sliding in this direction leaves every tile where it is.
    #[error("nothing can slide {}", .0.as_str())]
    CannotMove(Direction),

    /// The session already ended; no further moves are accepted.
    #[error("the session is over")]
    SessionOver,
}

impl MoveError {
    pub fn code(self) -> &'static str {
        match self {
            MoveError::CannotMove(_) => "cannot_move",
            MoveError::SessionOver => "session_over",
        }
    }
}

/// Why an undo request was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum UndoError {
    /// Only the current state is left in the history.
    #[error("no earlier state to return to")]
    UndoImpossible,

    #[error("the session is over")]
    SessionOver,
}

impl UndoError {
    pub fn code(self) -> &'static str {
        match self {
            UndoError::UndoImpossible => "undo_impossible",
            UndoError::SessionOver => "session_over",
        }
    }
}

/// Grid construction failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("grid must be at least 2x2, got {height}x{width}")]
    TooSmall { height: usize, width: usize },

    #[error("row {row} has {found} tiles, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Session configuration rejected by validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("grid must be at least 2x2, got {height}x{width}")]
    GridTooSmall { height: usize, width: usize },

    #[error("a session needs at least one life")]
    NoLives,

    #[error("goal tile must be non-zero")]
    ZeroGoal,

    #[error("at least one spawnable tile value is required")]
    NoSpawnables,

    #[error("spawnable tile value {0} is not a tile")]
    InvalidSpawnable(Tile),

    #[error("spawnable tile value {0} is listed twice")]
    DuplicateSpawnable(Tile),

    #[error("{count} starter tiles do not fit on a grid of {cells} cells")]
    TooManyStarters { count: usize, cells: usize },
}

/// Persisted session data that cannot be turned back into a session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SnapshotError {
    #[error("invalid session config: {0}")]
    Config(#[from] ConfigError),

    #[error("history entry {entry}: {source}")]
    Grid {
        entry: usize,
        #[source]
        source: GridError,
    },

    #[error("history is empty")]
    EmptyHistory,

    #[error("history holds {len} states but the undo limit allows {capacity}")]
    HistoryTooLong { len: usize, capacity: usize },

    #[error("history entry {entry} is {found_height}x{found_width}, config says {height}x{width}")]
    DimensionMismatch {
        entry: usize,
        height: usize,
        width: usize,
        found_height: usize,
        found_width: usize,
    },

    #[error("recorded highest tile {highest} is below tile {tile} in the history")]
    InconsistentHighest { highest: Tile, tile: Tile },

    #[error("session is marked active but has no lives left")]
    NoLivesLeft,

    #[error("session is marked over but still has {remaining_lives} lives")]
    LivesAfterGameOver { remaining_lives: u32 },

    #[error("{remaining_lives} lives left but the config allows {max_lives}")]
    TooManyLives { remaining_lives: u32, max_lives: u32 },

    #[error("session is marked active but the grid is stuck with nothing to undo")]
    StuckWithoutUndo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_direction() {
        assert_eq!(
            MoveError::CannotMove(Direction::Left).to_string(),
            "nothing can slide left"
        );
        assert_eq!(MoveError::CannotMove(Direction::Up).code(), "cannot_move");
        assert_eq!(UndoError::UndoImpossible.code(), "undo_impossible");
    }

    #[test]
    fn snapshot_error_wraps_config_error() {
        let err: SnapshotError = ConfigError::NoLives.into();
        assert_eq!(err, SnapshotError::Config(ConfigError::NoLives));
        assert!(err.to_string().contains("at least one life"));
    }
}
