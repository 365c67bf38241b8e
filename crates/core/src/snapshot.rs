//! Serializable session snapshots.
//!
//! A snapshot carries everything needed to rebuild a play session except the
//! random generator: the config, every history entry (most recent first) and
//! the session scalars. The wire format is up to the caller; these types only
//! derive serde.

use serde::{Deserialize, Serialize};

use crate::config::SessionConfig;
use crate::error::GridError;
use crate::grid::GridState;
use crate::types::Tile;

/// One history entry: tile rows plus score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSnapshot {
    pub rows: Vec<Vec<Tile>>,
    pub score: u64,
}

impl From<&GridState> for GridSnapshot {
    fn from(value: &GridState) -> Self {
        Self {
            rows: value.to_rows(),
            score: value.score(),
        }
    }
}

impl TryFrom<&GridSnapshot> for GridState {
    type Error = GridError;

    fn try_from(value: &GridSnapshot) -> Result<Self, Self::Error> {
        GridState::from_rows(&value.rows, value.score)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub config: SessionConfig,
    /// Most recent first; the first entry is the current grid.
    pub history: Vec<GridSnapshot>,
    pub remaining_lives: u32,
    pub highest_number: Tile,
    pub goal_reached: bool,
    pub game_over: bool,
}

impl SessionSnapshot {
    /// The grid the player was looking at
    pub fn current(&self) -> Option<&GridSnapshot> {
        self.history.first()
    }

    pub fn score(&self) -> u64 {
        self.current().map_or(0, |grid| grid.score)
    }

    pub fn remaining_undos(&self) -> usize {
        self.history.len().saturating_sub(1)
    }

    pub fn playable(&self) -> bool {
        !self.game_over
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_snapshot_roundtrip() {
        let grid = GridState::from_rows(&[vec![2, 0], vec![4, 8]], 36).unwrap();
        let snap = GridSnapshot::from(&grid);
        assert_eq!(snap.rows, vec![vec![2, 0], vec![4, 8]]);
        assert_eq!(GridState::try_from(&snap).unwrap(), grid);
    }

    #[test]
    fn test_malformed_rows_are_rejected() {
        let snap = GridSnapshot {
            rows: vec![vec![2, 0], vec![4]],
            score: 0,
        };
        assert!(GridState::try_from(&snap).is_err());
    }
}
