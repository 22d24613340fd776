use scorekeeper_core::{MatchState, SetRecord, SideState};

/// A frozen copy of every tracked `MatchState` field. The completed sets are
/// owned by the memento, never shared with the live state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Memento {
    left: SideState,
    right: SideState,
    server_left: bool,
    in_tie_break: bool,
    finished: bool,
    tie_break_left: u32,
    tie_break_right: u32,
    completed_sets: Vec<SetRecord>,
}

impl Memento {
    pub fn finished(&self) -> bool {
        self.finished
    }

    pub fn completed_sets(&self) -> &[SetRecord] {
        &self.completed_sets
    }
}

pub fn capture(state: &MatchState) -> Memento {
    Memento {
        left: state.left,
        right: state.right,
        server_left: state.server_left,
        in_tie_break: state.in_tie_break,
        finished: state.finished,
        tie_break_left: state.tie_break_left,
        tie_break_right: state.tie_break_right,
        completed_sets: state.completed_sets.to_vec(),
    }
}

/// Overwrite `state` with the memento. The live set list is cleared and
/// refilled with fresh copies.
pub fn restore(state: &mut MatchState, memento: &Memento) {
    state.left = memento.left;
    state.right = memento.right;
    state.server_left = memento.server_left;
    state.in_tie_break = memento.in_tie_break;
    state.finished = memento.finished;
    state.tie_break_left = memento.tie_break_left;
    state.tie_break_right = memento.tie_break_right;

    state.completed_sets.clear();
    state
        .completed_sets
        .extend(memento.completed_sets.iter().copied());
}
