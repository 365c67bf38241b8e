//! Spawn module - placing new tiles after a move

use crate::grid::GridState;
use crate::rng::SpawnRng;
use crate::types::Tile;

/// A tile placed by [`place`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spawn {
    pub row: usize,
    pub col: usize,
    pub value: Tile,
}

/// Place one tile on a uniformly chosen empty cell.
///
/// The value is drawn uniformly from `spawnables`. Returns `None` without
/// touching the grid when no cell is empty or `spawnables` is empty.
/// Draws the position first, then the value.
pub fn place<R: SpawnRng + ?Sized>(
    state: &mut GridState,
    spawnables: &[Tile],
    rng: &mut R,
) -> Option<Spawn> {
    let empty = state.empty_count();
    if empty == 0 || spawnables.is_empty() {
        return None;
    }

    let nth = rng.next_index(empty);
    let (row, col) = state.empty_cells().nth(nth)?;
    let value = spawnables[rng.next_index(spawnables.len())];

    state.set(row, col, value);
    Some(Spawn { row, col, value })
}

/// Place up to `count` tiles, stopping early if the grid fills up.
pub fn place_many<R: SpawnRng + ?Sized>(
    state: &mut GridState,
    spawnables: &[Tile],
    count: usize,
    rng: &mut R,
) -> Vec<Spawn> {
    let mut placed = Vec::with_capacity(count);
    for _ in 0..count {
        match place(state, spawnables, rng) {
            Some(spawn) => placed.push(spawn),
            None => break,
        }
    }
    placed
}
