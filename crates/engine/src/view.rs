use std::sync::mpsc::{self, Receiver, Sender};

use scorekeeper_core::{MatchRecord, MatchState, Sport, point_label};

use crate::summary::format_set_summary;

/// Read-only scoreboard handed to the presentation layer after every change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreUiState {
    pub left_points: u32,
    pub right_points: u32,
    pub left_games: u32,
    pub right_games: u32,
    pub left_sets: u32,
    pub right_sets: u32,
    pub server_left: bool,
    pub in_tie_break: bool,
    /// Live tie-break counters, meaningful only while `in_tie_break`.
    pub tb_left: u32,
    pub tb_right: u32,
    pub finished: bool,
    pub left_name: String,
    pub right_name: String,
    pub sport: Sport,
    pub set_summary: String,
}

impl ScoreUiState {
    pub fn map(state: &MatchState, sport: Sport, left_name: &str, right_name: &str) -> Self {
        Self {
            left_points: state.left.points,
            right_points: state.right.points,
            left_games: state.left.games,
            right_games: state.right.games,
            left_sets: state.left.sets,
            right_sets: state.right.sets,
            server_left: state.server_left,
            in_tie_break: state.in_tie_break,
            tb_left: state.tie_break_left,
            tb_right: state.tie_break_right,
            finished: state.finished,
            left_name: left_name.to_string(),
            right_name: right_name.to_string(),
            sport,
            set_summary: format_set_summary(state),
        }
    }

    /// Left side when it holds more sets, otherwise right.
    pub fn winner_name(&self) -> &str {
        if self.left_sets > self.right_sets {
            &self.left_name
        } else {
            &self.right_name
        }
    }

    /// Points as shown on the scoreboard: "40", "Ad", or the raw tie-break count.
    pub fn point_labels(&self) -> (String, String) {
        if self.in_tie_break {
            (self.tb_left.to_string(), self.tb_right.to_string())
        } else {
            (point_label(self.left_points), point_label(self.right_points))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    State(ScoreUiState),
    History(Vec<MatchRecord>),
}

/// Fan-out of session events to any number of receivers. Receivers that
/// have been dropped are forgotten on the next send.
#[derive(Default)]
pub struct Publisher {
    subscribers: Vec<Sender<SessionEvent>>,
}

impl Publisher {
    pub fn subscribe(&mut self) -> Receiver<SessionEvent> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }

    pub fn publish(&mut self, event: SessionEvent) {
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}
