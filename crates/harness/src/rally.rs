use rand::Rng;

use scorekeeper_core::RulesEngine;
use scorekeeper_engine::Session;
use scorekeeper_storage::BlobStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    PointLeft,
    PointRight,
    ToggleServer,
}

pub fn apply<S: BlobStore, E: RulesEngine>(session: &mut Session<S, E>, action: Action) {
    match action {
        Action::PointLeft => session.add_point_left(),
        Action::PointRight => session.add_point_right(),
        Action::ToggleServer => session.toggle_server(),
    }
}

/// Four straight points for one side.
pub fn play_game<S: BlobStore, E: RulesEngine>(session: &mut Session<S, E>, left: bool) {
    let action = if left {
        Action::PointLeft
    } else {
        Action::PointRight
    };
    for _ in 0..4 {
        apply(session, action);
    }
}

pub fn play_games<S: BlobStore, E: RulesEngine>(
    session: &mut Session<S, E>,
    left: bool,
    games: usize,
) {
    for _ in 0..games {
        play_game(session, left);
    }
}

/// `n` random actions, mostly points with the odd server toggle.
pub fn random_actions<R: Rng>(rng: &mut R, n: usize) -> Vec<Action> {
    (0..n)
        .map(|_| match rng.gen_range(0..10) {
            0 => Action::ToggleServer,
            1..=4 => Action::PointLeft,
            _ => Action::PointRight,
        })
        .collect()
}
