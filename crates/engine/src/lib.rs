pub mod history;
pub mod snapshot;
pub mod summary;
pub mod undo;
pub mod view;

pub use history::HistoryStore;
pub use snapshot::Memento;
pub use summary::format_set_summary;
pub use undo::{UNDO_CAPACITY, UndoManager};
pub use view::{Publisher, ScoreUiState, SessionEvent};

use std::sync::mpsc::Receiver;

use scorekeeper_core::{
    Clock, MatchRecord, MatchRules, MatchState, RulesEngine, ScoreEngine, Sport, SystemClock,
};
use scorekeeper_storage::BlobStore;

const DEFAULT_LEFT_NAME: &str = "Left";
const DEFAULT_RIGHT_NAME: &str = "Right";

/// The scoreboard view-model: one live match, its undo stack, and the
/// persisted history of finished matches.
///
/// Every scoring action snapshots the state first, hands the transition to
/// the rules engine, commits the match to history if that transition
/// finished it, then republishes the scoreboard. Undo only rewinds the live
/// scoreboard; history commits stay.
pub struct Session<S: BlobStore, E: RulesEngine = ScoreEngine> {
    engine: E,
    sport: Sport,
    left_name: String,
    right_name: String,
    undo_manager: UndoManager,
    history: HistoryStore<S>,
    clock: Box<dyn Clock>,
    ui_state: ScoreUiState,
    publisher: Publisher,
}

impl<S: BlobStore> Session<S> {
    pub fn open(store: S) -> Self {
        Self::with_clock(store, Box::new(SystemClock))
    }
}

impl<S: BlobStore, E: RulesEngine> Session<S, E> {
    /// Load history from `store` and set up a default tennis match.
    pub fn with_clock(store: S, clock: Box<dyn Clock>) -> Self {
        let engine = E::from_rules(MatchRules::new(Sport::Tennis));
        let ui_state =
            ScoreUiState::map(engine.state(), Sport::Tennis, DEFAULT_LEFT_NAME, DEFAULT_RIGHT_NAME);
        Self {
            engine,
            sport: Sport::Tennis,
            left_name: DEFAULT_LEFT_NAME.to_string(),
            right_name: DEFAULT_RIGHT_NAME.to_string(),
            undo_manager: UndoManager::default(),
            history: HistoryStore::open(store),
            clock,
            ui_state,
            publisher: Publisher::default(),
        }
    }

    pub fn start_new_match(&mut self, sport: Sport, left: &str, right: &str) {
        self.start_match_with_rules(MatchRules::new(sport), left, right);
    }

    /// Replace the engine with a fresh one for `rules`. Blank names fall back
    /// to "Left"/"Right". Undo never reaches back into the previous match.
    pub fn start_match_with_rules(&mut self, rules: MatchRules, left: &str, right: &str) {
        self.sport = rules.sport;
        self.left_name = name_or_default(left, DEFAULT_LEFT_NAME);
        self.right_name = name_or_default(right, DEFAULT_RIGHT_NAME);
        self.engine = E::from_rules(rules);
        self.engine.state_mut().reset();
        self.undo_manager.clear();
        log::info!(
            "new {} match: {} vs {}",
            self.sport.label(),
            self.left_name,
            self.right_name
        );
        self.publish_state();
    }

    pub fn add_point_left(&mut self) {
        self.dispatch(|engine| engine.point_left());
    }

    pub fn add_point_right(&mut self) {
        self.dispatch(|engine| engine.point_right());
    }

    pub fn toggle_server(&mut self) {
        self.dispatch(|engine| engine.toggle_server());
    }

    /// Roll the scoreboard back one action. Returns false, and publishes
    /// nothing, when the undo stack is empty.
    pub fn undo(&mut self) -> bool {
        if !self.undo_manager.undo(self.engine.state_mut()) {
            return false;
        }
        self.publish_state();
        true
    }

    /// Finish the match now and save it, unless it is already finished.
    /// This is undoable like any other action.
    pub fn end_match_and_save(&mut self) {
        self.undo_manager.prepare_mutation(self.engine.state());

        if !self.engine.state().finished {
            self.engine.state_mut().finished = true;
            self.commit_to_history();
        }
        self.publish_state();
    }

    pub fn clear_history(&mut self) {
        if let Err(e) = self.history.clear() {
            log::warn!("failed to persist cleared history: {e}");
        }
        self.publish_history();
    }

    pub fn subscribe(&mut self) -> Receiver<SessionEvent> {
        self.publisher.subscribe()
    }

    pub fn ui_state(&self) -> &ScoreUiState {
        &self.ui_state
    }

    pub fn history(&self) -> &[MatchRecord] {
        self.history.records()
    }

    pub fn match_state(&self) -> &MatchState {
        self.engine.state()
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn sport(&self) -> Sport {
        self.sport
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_manager.depth()
    }

    pub fn store(&self) -> &S {
        self.history.store()
    }

    pub fn into_store(self) -> S {
        self.history.into_store()
    }

    fn dispatch(&mut self, transition: impl FnOnce(&mut E)) {
        self.undo_manager.prepare_mutation(self.engine.state());

        let was_finished = self.engine.state().finished;
        transition(&mut self.engine);
        if !was_finished && self.engine.state().finished {
            self.commit_to_history();
        }

        self.publish_state();
    }

    fn commit_to_history(&mut self) {
        let now = self.clock.now_ms();
        let state = self.engine.state();
        let record = MatchRecord {
            id: now,
            timestamp: now,
            sport: self.sport,
            left_name: self.left_name.clone(),
            right_name: self.right_name.clone(),
            set_summary: format_set_summary(state),
            left_sets: state.left.sets,
            right_sets: state.right.sets,
            left_games: state.left.games,
            right_games: state.right.games,
        };
        log::debug!("committing {} ({})", record.title(), record.result_line());

        if let Err(e) = self.history.prepend(record) {
            log::warn!("failed to persist history: {e}");
        }
        self.publish_history();
    }

    fn publish_state(&mut self) {
        self.ui_state =
            ScoreUiState::map(self.engine.state(), self.sport, &self.left_name, &self.right_name);
        self.publisher.publish(SessionEvent::State(self.ui_state.clone()));
    }

    fn publish_history(&mut self) {
        self.publisher
            .publish(SessionEvent::History(self.history.records().to_vec()));
    }
}

fn name_or_default(name: &str, default: &str) -> String {
    if name.trim().is_empty() {
        default.to_string()
    } else {
        name.to_string()
    }
}
