//! Slide module - the slide-and-merge transformation
//!
//! Every direction runs through the same line routine. A "line" is a row for
//! Left/Right and a column for Up/Down, read starting at the destination edge:
//! position 0 of a line is the cell tiles travel towards.
//!
//! Per line:
//! 1. Compact: tiles move toward position 0 through empty cells.
//! 2. Merge: scanning from position 0, equal neighbours combine into one tile
//!    of double value on the destination side; the pair is then skipped, so a
//!    merged tile never merges again in the same slide.
//! 3. Compact again to close the gaps merges left behind.
//!
//! Because the scan starts at the destination edge, `[2, 2, 2]` moved right
//! becomes `[0, 2, 4]`: the two tiles nearest the wall win the tie.

use crate::grid::GridState;
use crate::types::{Direction, Tile, EMPTY};

/// A merge performed during a slide, reported at the merged tile's final cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Merge {
    pub row: usize,
    pub col: usize,
    pub value: Tile,
}

/// Result of sliding a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideOutcome {
    /// The new state; its score already includes `gained`.
    pub state: GridState,
    pub merges: Vec<Merge>,
    /// Sum of the values of all merged tiles
    pub gained: u64,
}

impl SlideOutcome {
    /// Whether any tile moved or merged relative to `before`.
    pub fn changed(&self, before: &GridState) -> bool {
        !self.state.same_tiles(before)
    }
}

/// Number of lines and cells per line for a direction.
fn line_shape(height: usize, width: usize, direction: Direction) -> (usize, usize) {
    if direction.is_horizontal() {
        (height, width)
    } else {
        (width, height)
    }
}

/// Map (line, position-from-destination) to (row, col).
#[inline(always)]
fn cell_of(
    height: usize,
    width: usize,
    direction: Direction,
    line: usize,
    pos: usize,
) -> (usize, usize) {
    match direction {
        Direction::Left => (line, pos),
        Direction::Right => (line, width - 1 - pos),
        Direction::Up => (pos, line),
        Direction::Down => (height - 1 - pos, line),
    }
}

/// Move non-empty tiles to the front of the line, keeping their order.
/// `merged` flags travel with their tiles.
fn compact(line: &mut [Tile], merged: &mut [bool]) {
    let mut write = 0;
    for read in 0..line.len() {
        if line[read] == EMPTY {
            continue;
        }
        if write != read {
            line[write] = line[read];
            line[read] = EMPTY;
            merged[write] = merged[read];
            merged[read] = false;
        }
        write += 1;
    }
}

/// Merge equal neighbours once, destination side first. Returns points gained.
fn merge_pairs(line: &mut [Tile], merged: &mut [bool]) -> u64 {
    let mut gained = 0u64;
    let mut i = 0;
    while i + 1 < line.len() {
        let tile = line[i];
        if tile != EMPTY && tile == line[i + 1] {
            // A tile too large to double stays put.
            if let Some(doubled) = tile.checked_mul(2) {
                line[i] = doubled;
                line[i + 1] = EMPTY;
                merged[i] = true;
                gained += u64::from(doubled);
                i += 2;
                continue;
            }
        }
        i += 1;
    }
    gained
}

/// Slide one line in place (position 0 = destination edge).
pub fn slide_line(line: &mut [Tile], merged: &mut [bool]) -> u64 {
    compact(line, merged);
    let gained = merge_pairs(line, merged);
    compact(line, merged);
    gained
}

/// Slide every tile of `state` toward `direction`.
///
/// The input is not modified. The caller decides whether an unchanged result
/// counts as a move.
pub fn slide(state: &GridState, direction: Direction) -> SlideOutcome {
    let height = state.height();
    let width = state.width();
    let (lines, len) = line_shape(height, width, direction);

    let mut next = state.clone();
    let mut merges = Vec::new();
    let mut gained = 0u64;

    let mut line = vec![EMPTY; len];
    let mut merged = vec![false; len];

    for l in 0..lines {
        for pos in 0..len {
            let (row, col) = cell_of(height, width, direction, l, pos);
            line[pos] = state.cells()[row * width + col];
            merged[pos] = false;
        }

        gained += slide_line(&mut line, &mut merged);

        let cells = next.cells_mut();
        for pos in 0..len {
            let (row, col) = cell_of(height, width, direction, l, pos);
            cells[row * width + col] = line[pos];
            if merged[pos] {
                merges.push(Merge {
                    row,
                    col,
                    value: line[pos],
                });
            }
        }
    }

    next.add_score(gained);
    SlideOutcome {
        state: next,
        merges,
        gained,
    }
}

/// True if at least one direction would change the grid.
///
/// A move exists when any cell is empty or any two horizontally or vertically
/// adjacent cells hold the same tile that can still be doubled.
pub fn can_move(state: &GridState) -> bool {
    if !state.is_full() {
        return true;
    }

    let width = state.width();
    let cells = state.cells();
    for (idx, &tile) in cells.iter().enumerate() {
        if tile.checked_mul(2).is_none() {
            continue;
        }
        let col = idx % width;
        if col + 1 < width && cells[idx + 1] == tile {
            return true;
        }
        if idx + width < cells.len() && cells[idx + width] == tile {
            return true;
        }
    }
    false
}

/// Which directions would change the grid, indexed by [`Direction::index`].
pub fn legal_directions(state: &GridState) -> [bool; 4] {
    let mut out = [false; 4];
    for direction in Direction::ALL {
        out[direction.index()] = slide(state, direction).changed(state);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[Vec<Tile>]) -> GridState {
        GridState::from_rows(rows, 0).unwrap()
    }

    fn line_after(tiles: &[Tile]) -> (Vec<Tile>, u64) {
        let mut line = tiles.to_vec();
        let mut merged = vec![false; line.len()];
        let gained = slide_line(&mut line, &mut merged);
        (line, gained)
    }

    #[test]
    fn test_slide_line_basic_cases() {
        assert_eq!(line_after(&[0, 0, 2, 2]), (vec![4, 0, 0, 0], 4));
        assert_eq!(line_after(&[2, 2, 2, 2]), (vec![4, 4, 0, 0], 8));
        assert_eq!(line_after(&[2, 2, 2, 0]), (vec![4, 2, 0, 0], 4));
        assert_eq!(line_after(&[4, 0, 4, 8]), (vec![8, 8, 0, 0], 8));
        assert_eq!(line_after(&[0, 0, 0, 0]), (vec![0, 0, 0, 0], 0));
        assert_eq!(line_after(&[0, 0, 0, 8]), (vec![8, 0, 0, 0], 0));
    }

    #[test]
    fn test_merged_tile_does_not_merge_again() {
        // 4 made from the two 2s must not absorb the existing 4.
        assert_eq!(line_after(&[2, 2, 4, 0]), (vec![4, 4, 0, 0], 4));
        assert_eq!(line_after(&[4, 4, 8, 16]), (vec![8, 8, 16, 0], 8));
    }

    #[test]
    fn test_scenario_a_right() {
        let out = slide(&grid(&[vec![2, 2, 0, 0], vec![0, 0, 0, 0]]), Direction::Right);
        assert_eq!(out.state.to_rows(), vec![vec![0, 0, 0, 4], vec![0, 0, 0, 0]]);
        assert_eq!(out.gained, 4);
        assert_eq!(out.state.score(), 4);
        assert_eq!(
            out.merges,
            vec![Merge {
                row: 0,
                col: 3,
                value: 4
            }]
        );
    }

    #[test]
    fn test_scenario_b_right_pairs_from_wall() {
        let out = slide(&grid(&[vec![2, 2, 2, 2], vec![0, 0, 0, 0]]), Direction::Right);
        assert_eq!(out.state.to_rows()[0], vec![0, 0, 4, 4]);
        assert_eq!(out.gained, 8);
        assert_eq!(out.merges.len(), 2);
    }

    #[test]
    fn test_scenario_c_up() {
        let before = grid(&[
            vec![1, 2, 4, 8],
            vec![1, 2, 4, 8],
            vec![2, 2, 2, 2],
            vec![4, 4, 4, 4],
        ]);
        let out = slide(&before, Direction::Up);
        assert_eq!(
            out.state.to_rows(),
            vec![
                vec![2, 4, 8, 16],
                vec![2, 2, 2, 2],
                vec![4, 4, 4, 4],
                vec![0, 0, 0, 0],
            ]
        );
        assert_eq!(out.gained, 30);
        assert_eq!(out.state.tile_sum(), before.tile_sum());
    }

    #[test]
    fn test_ties_favour_destination_side() {
        let before = grid(&[vec![2, 2, 2], vec![0, 0, 0]]);
        assert_eq!(
            slide(&before, Direction::Right).state.to_rows()[0],
            vec![0, 2, 4]
        );
        assert_eq!(
            slide(&before, Direction::Left).state.to_rows()[0],
            vec![4, 2, 0]
        );

        let column = grid(&[vec![2, 0], vec![2, 0], vec![2, 0]]);
        let down = slide(&column, Direction::Down).state;
        assert_eq!(down.to_rows(), vec![vec![0, 0], vec![2, 0], vec![4, 0]]);
        let up = slide(&column, Direction::Up).state;
        assert_eq!(up.to_rows(), vec![vec![4, 0], vec![2, 0], vec![0, 0]]);
    }

    #[test]
    fn test_slide_does_not_touch_input() {
        let before = grid(&[vec![2, 2], vec![4, 0]]);
        let copy = before.clone();
        let _ = slide(&before, Direction::Left);
        assert_eq!(before, copy);
    }

    #[test]
    fn test_boundary_conservative_grid_right() {
        let before = grid(&[vec![2, 4, 2], vec![4, 2, 4], vec![4, 2, 0]]);
        let out = slide(&before, Direction::Right);
        assert_eq!(
            out.state.to_rows(),
            vec![vec![2, 4, 2], vec![4, 2, 4], vec![0, 4, 2]]
        );
        assert_eq!(out.gained, 0);
        assert!(out.changed(&before));
    }

    #[test]
    fn test_unchanged_when_already_packed() {
        let before = grid(&[vec![2, 4], vec![0, 0]]);
        assert!(!slide(&before, Direction::Left).changed(&before));
        assert!(!slide(&before, Direction::Up).changed(&before));
        // A full row with distinct tiles cannot slide sideways either way.
        assert!(!slide(&before, Direction::Right).changed(&before));
        assert!(slide(&before, Direction::Down).changed(&before));
        assert_eq!(legal_directions(&before), [false, true, false, false]);
    }

    #[test]
    fn test_can_move() {
        assert!(can_move(&grid(&[vec![2, 0], vec![4, 8]])));
        assert!(can_move(&grid(&[vec![2, 2], vec![4, 8]])));
        assert!(can_move(&grid(&[vec![2, 4], vec![2, 8]])));
        let stuck = grid(&[vec![2, 4], vec![4, 2]]);
        assert!(!can_move(&stuck));
        assert_eq!(legal_directions(&stuck), [false; 4]);
    }

    #[test]
    fn test_can_move_ignores_pairs_that_would_overflow() {
        let top = 1 << 31;
        let full = grid(&[vec![top, top], vec![top, top]]);
        assert!(!can_move(&full));
        assert_eq!(legal_directions(&full), [false; 4]);

        let mixed = grid(&[vec![top, top], vec![2, 2]]);
        assert!(can_move(&mixed));
        assert_eq!(legal_directions(&mixed), [false, false, true, true]);
    }

    #[test]
    fn test_can_move_matches_dry_run() {
        let cases = [
            grid(&[vec![2, 4, 8], vec![4, 8, 2], vec![8, 2, 4]]),
            grid(&[vec![2, 4, 8], vec![4, 8, 2], vec![8, 2, 2]]),
            grid(&[vec![2, 4, 8], vec![4, 8, 2], vec![8, 0, 4]]),
            grid(&[vec![2, 4, 8], vec![4, 8, 8], vec![16, 2, 4]]),
        ];
        for state in &cases {
            let any = legal_directions(state).iter().any(|&legal| legal);
            assert_eq!(can_move(state), any, "{:?}", state.to_rows());
        }
    }

    #[test]
    fn test_rectangular_grid_columns() {
        let before = grid(&[vec![2, 0, 0, 0, 2], vec![2, 0, 4, 0, 0]]);
        let out = slide(&before, Direction::Down);
        assert_eq!(
            out.state.to_rows(),
            vec![vec![0, 0, 0, 0, 0], vec![4, 0, 4, 0, 2]]
        );
        assert_eq!(out.gained, 4);
    }
}
