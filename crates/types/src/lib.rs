//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (engine logic, terminal rendering, persistence).
//!
//! # Grid Defaults
//!
//! The classic layout and rules used when no configuration overrides them:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_HEIGHT` | 4 | Rows in the grid |
//! | `DEFAULT_WIDTH` | 4 | Columns in the grid |
//! | `DEFAULT_MAX_UNDOS` | 3 | Undo steps kept beyond the current state |
//! | `DEFAULT_MAX_LIVES` | 3 | Stuck grids tolerated before game over |
//! | `DEFAULT_GOAL` | 2048 | Tile value that counts as a win |
//! | `DEFAULT_STARTER_TILES` | 2 | Tiles placed on a fresh grid |
//!
//! # Examples
//!
//! ```
//! use tui_merge_types::{Direction, GameAction, DEFAULT_WIDTH};
//!
//! // Parse a direction (case-insensitive)
//! let dir = Direction::from_str("left").unwrap();
//! assert_eq!(dir, Direction::Left);
//! assert_eq!(dir.opposite(), Direction::Right);
//!
//! // Parse game action
//! let action = GameAction::from_str("moveUp").unwrap();
//! assert_eq!(action, GameAction::Move(Direction::Up));
//!
//! assert_eq!(DEFAULT_WIDTH, 4);
//! ```

/// A tile value. `0` is an empty cell; anything else is a tile.
pub type Tile = u32;

/// The empty-cell marker.
pub const EMPTY: Tile = 0;

/// Default grid height (4 rows)
pub const DEFAULT_HEIGHT: usize = 4;

/// Default grid width (4 columns)
pub const DEFAULT_WIDTH: usize = 4;

/// Smallest supported grid side; a 1-wide line cannot slide or merge.
pub const MIN_SIDE: usize = 2;

/// Default number of undo steps kept beyond the current state
pub const DEFAULT_MAX_UNDOS: usize = 3;

/// Default number of lives
pub const DEFAULT_MAX_LIVES: u32 = 3;

/// Default goal tile
pub const DEFAULT_GOAL: Tile = 2048;

/// Default spawnable tile values, in draw order
pub const DEFAULT_SPAWNABLES: [Tile; 2] = [2, 4];

/// Default number of tiles placed on a new grid
pub const DEFAULT_STARTER_TILES: usize = 2;

/// Default capacity of the high-score table
pub const DEFAULT_HIGH_SCORE_SLOTS: usize = 10;


/// The four slide directions
///
/// The direction names the edge tiles travel towards:
/// - **Up**: toward row 0
/// - **Down**: toward the last row
/// - **Left**: toward column 0
/// - **Right**: toward the last column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions, in the order used for dry-run checks
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Parse direction from string (case-insensitive)
    ///
    /// Accepts full names or single letters: "up" | "u", "down" | "d",
    /// "left" | "l", "right" | "r"
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_merge_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("UP"), Some(Direction::Up));
    /// assert_eq!(Direction::from_str("r"), Some(Direction::Right));
    /// assert_eq!(Direction::from_str("north"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// Index into [`Direction::ALL`]
    pub fn index(&self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Down => 1,
            Direction::Left => 2,
            Direction::Right => 3,
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Left/Right slide along rows; Up/Down slide along columns.
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }
}

/// Player actions that drive a play session
///
/// These actions come from key mapping and are dispatched by the game loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Slide every tile toward one edge
    Move(Direction),
    /// Step back to the previous grid state
    Undo,
    /// Throw the session away and start a fresh one
    Restart,
    /// Write the session to the save file
    Save,
}

impl GameAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_merge_types::{Direction, GameAction};
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::Move(Direction::Left)));
    /// assert_eq!(GameAction::from_str("undo"), Some(GameAction::Undo));
    /// assert_eq!(GameAction::from_str("hardDrop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveup" => Some(GameAction::Move(Direction::Up)),
            "movedown" => Some(GameAction::Move(Direction::Down)),
            "moveleft" => Some(GameAction::Move(Direction::Left)),
            "moveright" => Some(GameAction::Move(Direction::Right)),
            "undo" => Some(GameAction::Undo),
            "restart" => Some(GameAction::Restart),
            "save" => Some(GameAction::Save),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Move(Direction::Up) => "moveUp",
            GameAction::Move(Direction::Down) => "moveDown",
            GameAction::Move(Direction::Left) => "moveLeft",
            GameAction::Move(Direction::Right) => "moveRight",
            GameAction::Undo => "undo",
            GameAction::Restart => "restart",
            GameAction::Save => "save",
        }
    }
}
