//! Grid module - the tile matrix and the score that goes with it
//!
//! A grid is `height x width` tiles stored in a flat row-major array
//! (`row * width + col`). `0` marks an empty cell.
//! Coordinates: (row, col) where row 0 is the top edge and col 0 the left edge.

use crate::error::GridError;
use crate::types::{Tile, EMPTY, MIN_SIDE};

/// One state of the play field: tiles plus the score accumulated to reach it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridState {
    height: usize,
    width: usize,
    /// Flat array of tiles, row-major order
    cells: Vec<Tile>,
    score: u64,
}

impl GridState {
    /// Create an empty grid with zero score
    pub fn new(height: usize, width: usize) -> Result<Self, GridError> {
        if height < MIN_SIDE || width < MIN_SIDE {
            return Err(GridError::TooSmall { height, width });
        }
        Ok(Self::blank(height, width))
    }

    /// Empty grid for dimensions already validated elsewhere.
    pub(crate) fn blank(height: usize, width: usize) -> Self {
        Self {
            height,
            width,
            cells: vec![EMPTY; height * width],
            score: 0,
        }
    }

    /// Build a grid from row vectors.
    ///
    /// Every row must have the same length and both sides must be at least 2.
    pub fn from_rows(rows: &[Vec<Tile>], score: u64) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if height < MIN_SIDE || width < MIN_SIDE {
            return Err(GridError::TooSmall { height, width });
        }

        let mut cells = Vec::with_capacity(height * width);
        for (row, tiles) in rows.iter().enumerate() {
            if tiles.len() != width {
                return Err(GridError::Ragged {
                    row,
                    expected: width,
                    found: tiles.len(),
                });
            }
            cells.extend_from_slice(tiles);
        }

        Ok(Self {
            height,
            width,
            cells,
            score,
        })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub(crate) fn add_score(&mut self, gained: u64) {
        self.score = self.score.saturating_add(gained);
    }

    #[inline(always)]
    pub(crate) fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(row * self.width + col)
    }

    /// Get tile at (row, col). Returns None if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<Tile> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Set tile at (row, col). Returns false if out of bounds.
    pub fn set(&mut self, row: usize, col: usize, tile: Tile) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = tile;
                true
            }
            None => false,
        }
    }

    pub fn cells(&self) -> &[Tile] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Tile] {
        &mut self.cells
    }

    /// Iterate rows as slices, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> + '_ {
        self.cells.chunks_exact(self.width)
    }

    /// Copy the tiles out as row vectors
    pub fn to_rows(&self) -> Vec<Vec<Tile>> {
        self.rows().map(<[Tile]>::to_vec).collect()
    }

    /// Compare tiles only; score is ignored.
    pub fn same_tiles(&self, other: &GridState) -> bool {
        self.height == other.height && self.width == other.width && self.cells == other.cells
    }

    /// Positions of empty cells in row-major order
    pub fn empty_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &tile)| tile == EMPTY)
            .map(move |(idx, _)| (idx / width, idx % width))
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&tile| tile == EMPTY).count()
    }

    pub fn is_full(&self) -> bool {
        !self.cells.contains(&EMPTY)
    }

    /// Largest tile on the grid, 0 when empty
    pub fn max_tile(&self) -> Tile {
        self.cells.iter().copied().max().unwrap_or(EMPTY)
    }

    /// Sum of all tile values
    pub fn tile_sum(&self) -> u64 {
        self.cells.iter().map(|&tile| u64::from(tile)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_index_calculation() {
        let grid = GridState::new(3, 4).unwrap();
        assert_eq!(grid.index(0, 0), Some(0));
        assert_eq!(grid.index(0, 3), Some(3));
        assert_eq!(grid.index(1, 0), Some(4));
        assert_eq!(grid.index(2, 3), Some(11));
        assert_eq!(grid.index(3, 0), None);
        assert_eq!(grid.index(0, 4), None);
    }

    #[test]
    fn test_grid_rejects_degenerate_sizes() {
        assert_eq!(
            GridState::new(1, 4),
            Err(GridError::TooSmall {
                height: 1,
                width: 4
            })
        );
        assert!(GridState::from_rows(&[vec![2, 2]], 0).is_err());
        assert!(GridState::from_rows(&[], 0).is_err());
    }

    #[test]
    fn test_grid_rejects_ragged_rows() {
        let err = GridState::from_rows(&[vec![0, 2, 4], vec![2, 2]], 0).unwrap_err();
        assert_eq!(
            err,
            GridError::Ragged {
                row: 1,
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn test_grid_from_rows_roundtrip() {
        let rows = vec![vec![2, 0, 4], vec![0, 8, 0]];
        let grid = GridState::from_rows(&rows, 12).unwrap();

        assert_eq!(grid.height(), 2);
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.score(), 12);
        assert_eq!(grid.get(1, 1), Some(8));
        assert_eq!(grid.to_rows(), rows);
    }

    #[test]
    fn test_grid_queries() {
        let mut grid = GridState::from_rows(&[vec![2, 0], vec![16, 4]], 0).unwrap();

        assert_eq!(grid.empty_cells().collect::<Vec<_>>(), vec![(0, 1)]);
        assert_eq!(grid.empty_count(), 1);
        assert_eq!(grid.max_tile(), 16);
        assert_eq!(grid.tile_sum(), 22);
        assert!(!grid.is_full());

        assert!(grid.set(0, 1, 2));
        assert!(!grid.set(2, 0, 2));
        assert!(grid.is_full());
    }

    #[test]
    fn test_same_tiles_ignores_score() {
        let a = GridState::from_rows(&[vec![2, 0], vec![0, 0]], 0).unwrap();
        let b = GridState::from_rows(&[vec![2, 0], vec![0, 0]], 40).unwrap();
        assert!(a.same_tiles(&b));
        assert_ne!(a, b);
    }
}
