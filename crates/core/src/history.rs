//! History module - the bounded undo chain
//!
//! Holds grid states most-recent first. The chain never drops below one entry
//! (the current state) and never grows beyond `max_undos + 1`; pushing onto a
//! full chain evicts the oldest state.

use std::collections::VecDeque;

use crate::grid::GridState;

/// Bounded, most-recent-first sequence of grid states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryChain {
    /// Front is the current state, back the oldest.
    entries: VecDeque<GridState>,
    max_undos: usize,
}

impl HistoryChain {
    /// Start a chain holding only `initial`.
    pub fn new(initial: GridState, max_undos: usize) -> Self {
        let mut entries = VecDeque::with_capacity(max_undos + 1);
        entries.push_front(initial);
        Self { entries, max_undos }
    }

    /// Rebuild a chain from states given most-recent first.
    ///
    /// Returns `None` if `states` is empty or longer than `max_undos + 1`.
    pub fn from_states(states: Vec<GridState>, max_undos: usize) -> Option<Self> {
        if states.is_empty() || states.len() > max_undos + 1 {
            return None;
        }
        Some(Self {
            entries: states.into(),
            max_undos,
        })
    }

    /// The state the player sees
    pub fn current(&self) -> &GridState {
        // Non-empty by construction.
        &self.entries[0]
    }

    pub(crate) fn current_mut(&mut self) -> &mut GridState {
        &mut self.entries[0]
    }

    /// Make `state` the current state.
    ///
    /// Returns true if the oldest state was evicted to stay within capacity.
    pub fn push(&mut self, state: GridState) -> bool {
        self.entries.push_front(state);
        if self.entries.len() > self.capacity() {
            self.entries.pop_back();
            return true;
        }
        false
    }

    /// Drop the current state and return it, unless it is the only one left.
    pub fn pop(&mut self) -> Option<GridState> {
        if self.entries.len() <= 1 {
            return None;
        }
        self.entries.pop_front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Never true for a chain built through this API.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.max_undos + 1
    }

    pub fn max_undos(&self) -> usize {
        self.max_undos
    }

    /// Undo steps currently available
    pub fn remaining_undos(&self) -> usize {
        self.entries.len() - 1
    }

    /// States from most recent to oldest
    pub fn iter(&self) -> impl Iterator<Item = &GridState> + '_ {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Tile;

    fn state(tile: Tile) -> GridState {
        GridState::from_rows(&[vec![tile, 0], vec![0, 0]], u64::from(tile)).unwrap()
    }

    #[test]
    fn test_new_chain_has_no_undos() {
        let chain = HistoryChain::new(state(2), 3);
        assert_eq!(chain.len(), 1);
        assert_eq!(chain.remaining_undos(), 0);
        assert_eq!(chain.capacity(), 4);
        assert!(!chain.is_empty());
    }

    #[test]
    fn test_push_then_pop_restores_previous() {
        let mut chain = HistoryChain::new(state(2), 3);
        assert!(!chain.push(state(4)));
        assert_eq!(chain.current().get(0, 0), Some(4));
        assert_eq!(chain.remaining_undos(), 1);

        let popped = chain.pop().unwrap();
        assert_eq!(popped.get(0, 0), Some(4));
        assert_eq!(chain.current().get(0, 0), Some(2));
        assert_eq!(chain.current().score(), 2);
    }

    #[test]
    fn test_pop_keeps_last_state() {
        let mut chain = HistoryChain::new(state(2), 3);
        assert_eq!(chain.pop(), None);
        assert_eq!(chain.len(), 1);
        assert_eq!(chain.current(), &state(2));
    }

    #[test]
    fn test_push_beyond_capacity_evicts_oldest() {
        let mut chain = HistoryChain::new(state(2), 2);
        assert!(!chain.push(state(4)));
        assert!(!chain.push(state(8)));
        assert!(chain.push(state(16)));
        assert!(chain.push(state(32)));

        assert_eq!(chain.len(), 3);
        assert_eq!(chain.remaining_undos(), 2);
        let firsts: Vec<_> = chain.iter().map(|s| s.get(0, 0).unwrap()).collect();
        assert_eq!(firsts, vec![32, 16, 8]);
    }

    #[test]
    fn test_zero_undos_keeps_only_current() {
        let mut chain = HistoryChain::new(state(2), 0);
        assert!(chain.push(state(4)));
        assert_eq!(chain.len(), 1);
        assert_eq!(chain.pop(), None);
        assert_eq!(chain.current().get(0, 0), Some(4));
    }

    #[test]
    fn test_from_states_bounds() {
        assert!(HistoryChain::from_states(vec![], 2).is_none());
        assert!(HistoryChain::from_states(vec![state(2); 4], 2).is_none());

        let chain = HistoryChain::from_states(vec![state(8), state(4)], 2).unwrap();
        assert_eq!(chain.current().get(0, 0), Some(8));
        assert_eq!(chain.remaining_undos(), 1);
    }
}
