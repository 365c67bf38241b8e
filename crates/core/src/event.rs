//! Domain events published by a play session.
//!
//! The session never calls into a display. It queues these facts and the game
//! loop drains them after each operation. Within one move they are queued in
//! a fixed order: undo count, move, max tile, lives / stuck / game over, goal.

use arrayvec::ArrayVec;

use crate::types::{Direction, Tile};

/// Upper bound of events a single move can publish.
pub const MAX_EVENTS_PER_MOVE: usize = 7;

/// Events published by one `apply_move` call, in publication order.
pub type MoveEvents = ArrayVec<GameEvent, MAX_EVENTS_PER_MOVE>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// The number of available undo steps changed.
    UndoCountChanged { remaining: usize },
    /// Tiles slid; `gained` is the score earned by merges.
    MoveHappened { direction: Direction, gained: u64 },
    /// A tile larger than any seen before appeared.
    MaxNumberChanged { highest: Tile },
    LivesChanged { remaining: u32 },
    /// No move is possible but lives remain.
    GridStuck { remaining_lives: u32 },
    /// The last life was lost.
    GameOver { score: u64 },
    /// The goal tile was reached for the first time. Published once per session.
    GoalReached { goal: Tile },
}

impl GameEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameEvent::UndoCountChanged { .. } => "undoCountChanged",
            GameEvent::MoveHappened { .. } => "moveHappened",
            GameEvent::MaxNumberChanged { .. } => "maxNumberChanged",
            GameEvent::LivesChanged { .. } => "livesChanged",
            GameEvent::GridStuck { .. } => "gridStuck",
            GameEvent::GameOver { .. } => "gameOver",
            GameEvent::GoalReached { .. } => "goalReached",
        }
    }
}
