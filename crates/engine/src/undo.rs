use std::collections::VecDeque;

use scorekeeper_core::MatchState;

use crate::snapshot::{self, Memento};

/// Undo depth kept per match.
pub const UNDO_CAPACITY: usize = 50;

/// Bounded LIFO of pre-mutation mementos. The oldest entry is evicted once
/// the stack is full.
pub struct UndoManager {
    undo_stack: VecDeque<Memento>,
    capacity: usize,
}

impl Default for UndoManager {
    fn default() -> Self {
        Self::new(UNDO_CAPACITY)
    }
}

impl UndoManager {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            undo_stack: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Snapshot `state` before it is mutated.
    pub fn prepare_mutation(&mut self, state: &MatchState) {
        if self.undo_stack.len() >= self.capacity {
            self.undo_stack.pop_front();
        }
        self.undo_stack.push_back(snapshot::capture(state));
        log::debug!("undo push, depth {}", self.undo_stack.len());
    }

    /// Restore the most recent snapshot into `state`. Returns false when
    /// there is nothing to undo.
    pub fn undo(&mut self, state: &mut MatchState) -> bool {
        let Some(memento) = self.undo_stack.pop_back() else {
            return false;
        };
        snapshot::restore(state, &memento);
        log::debug!("undo pop, depth {}", self.undo_stack.len());
        true
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
    }

    pub fn depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.undo_stack.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with_points(points: u32) -> MatchState {
        let mut state = MatchState::new();
        state.left.points = points;
        state
    }

    #[test]
    fn undo_on_empty_stack_is_a_no_op() {
        let mut undo = UndoManager::default();
        let mut state = state_with_points(15);
        assert!(!undo.undo(&mut state));
        assert_eq!(state, state_with_points(15));
    }

    #[test]
    fn pops_in_lifo_order() {
        let mut undo = UndoManager::default();
        let mut state = MatchState::new();
        for points in [0, 15, 30] {
            state.left.points = points;
            undo.prepare_mutation(&state);
        }
        state.left.points = 40;

        let mut seen = Vec::new();
        while undo.undo(&mut state) {
            seen.push(state.left.points);
        }
        assert_eq!(seen, [30, 15, 0]);
    }

    #[test]
    fn evicts_oldest_at_capacity() {
        let mut undo = UndoManager::default();
        let mut state = MatchState::new();
        for i in 0..(UNDO_CAPACITY as u32 + 10) {
            state.left.games = i;
            undo.prepare_mutation(&state);
            assert!(undo.depth() <= UNDO_CAPACITY);
        }
        assert_eq!(undo.depth(), UNDO_CAPACITY);

        let mut restored = Vec::new();
        while undo.undo(&mut state) {
            restored.push(state.left.games);
        }
        let expected: Vec<u32> = (10..(UNDO_CAPACITY as u32 + 10)).rev().collect();
        assert_eq!(restored, expected);
    }

    #[test]
    fn clear_empties_the_stack() {
        let mut undo = UndoManager::new(3);
        undo.prepare_mutation(&MatchState::new());
        undo.prepare_mutation(&MatchState::new());
        undo.clear();
        assert!(undo.is_empty());
        assert!(!undo.undo(&mut MatchState::new()));
    }

    #[test]
    fn zero_capacity_keeps_one_entry() {
        let mut undo = UndoManager::new(0);
        assert_eq!(undo.capacity(), 1);
        undo.prepare_mutation(&state_with_points(15));
        undo.prepare_mutation(&state_with_points(30));
        assert_eq!(undo.depth(), 1);

        let mut state = MatchState::new();
        assert!(undo.undo(&mut state));
        assert_eq!(state.left.points, 30);
    }
}
