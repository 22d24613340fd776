use crate::rules::{MatchRules, SUPER_TIE_BREAK_POINTS, TIE_BREAK_POINTS};
use crate::state::{MatchState, POINT_ADVANTAGE, POINT_GAME, SetRecord};

/// The capability set a scoreboard needs from a rules engine. Transitions
/// mutate the engine's `MatchState` in place.
pub trait RulesEngine {
    fn from_rules(rules: MatchRules) -> Self
    where
        Self: Sized;

    fn rules(&self) -> &MatchRules;

    fn state(&self) -> &MatchState;

    fn state_mut(&mut self) -> &mut MatchState;

    fn point_left(&mut self);

    fn point_right(&mut self);

    fn toggle_server(&mut self);
}

/// Classic racket-sport scoring: 0-15-30-40-Ad-Game, win-by-two sets with a
/// tie-break at `tie_break_at` all.
#[derive(Debug, Clone)]
pub struct ScoreEngine {
    rules: MatchRules,
    state: MatchState,
}

impl ScoreEngine {
    pub fn new(rules: MatchRules) -> Self {
        Self {
            rules,
            state: MatchState::new(),
        }
    }

    /// Reset the whole match, completed sets included.
    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// Compact "sets games" line, e.g. "1-0 3-2*" with `*` marking a left server.
    pub fn score_line(&self) -> String {
        let s = &self.state;
        format!(
            "{}-{} {}-{}{}",
            s.left.sets,
            s.right.sets,
            s.left.games,
            s.right.games,
            if s.server_left { "*" } else { "" }
        )
    }

    fn point(&mut self, scored_left: bool) {
        if self.state.finished {
            return;
        }

        if self.state.in_tie_break {
            if scored_left {
                self.state.tie_break_left += 1;
            } else {
                self.state.tie_break_right += 1;
            }
            self.check_tie_break_end();
            return;
        }

        let golden_point = self.rules.golden_point;
        let (left, right) = (&mut self.state.left, &mut self.state.right);
        let (scorer, opponent) = if scored_left {
            (left, right)
        } else {
            (right, left)
        };
        let (next_for, next_against) = next_point(scorer.points, opponent.points, golden_point);
        scorer.points = next_for;
        opponent.points = next_against;

        if next_for == POINT_GAME {
            scorer.games += 1;
            scorer.points = 0;
            opponent.points = 0;
            self.state.server_left = !self.state.server_left;
            self.end_game();
        }
    }

    /// Decide what a won game means for the set: start a tie-break at
    /// `tie_break_at` all, or close the set on a two-game lead.
    fn end_game(&mut self) {
        let lg = self.state.left.games;
        let rg = self.state.right.games;

        if lg == self.rules.tie_break_at && rg == self.rules.tie_break_at {
            self.state.in_tie_break = true;
            self.state.tie_break_left = 0;
            self.state.tie_break_right = 0;
            return;
        }

        let need = self.rules.games_per_set;
        if (lg >= need || rg >= need) && lg.abs_diff(rg) >= 2 {
            self.finish_set(None, None);
            self.check_match_finished();
        }
    }

    fn tie_break_target(&self) -> u32 {
        let one_short = self.rules.sets_to_win.saturating_sub(1);
        let deciding_set =
            self.state.left.sets == one_short && self.state.right.sets == one_short;
        if self.rules.super_tie_break_final_set && deciding_set {
            SUPER_TIE_BREAK_POINTS
        } else {
            TIE_BREAK_POINTS
        }
    }

    fn check_tie_break_end(&mut self) {
        let l = self.state.tie_break_left;
        let r = self.state.tie_break_right;
        let target = self.tie_break_target();
        if (l < target && r < target) || l.abs_diff(r) < 2 {
            return;
        }

        let won = self.rules.tie_break_at + 1;
        let lost = self.rules.tie_break_at;
        if l > r {
            self.state.left.games = won;
            self.state.right.games = lost;
        } else {
            self.state.left.games = lost;
            self.state.right.games = won;
        }
        self.finish_set(Some(l), Some(r));

        self.state.in_tie_break = false;
        self.state.tie_break_left = 0;
        self.state.tie_break_right = 0;
        self.check_match_finished();
    }

    fn finish_set(&mut self, tie_break_left: Option<u32>, tie_break_right: Option<u32>) {
        let s = &mut self.state;
        s.completed_sets.push(SetRecord::new(
            s.left.games,
            s.right.games,
            tie_break_left,
            tie_break_right,
        ));
        if s.left.games > s.right.games {
            s.left.sets += 1;
        } else {
            s.right.sets += 1;
        }
        s.left.games = 0;
        s.right.games = 0;
    }

    fn check_match_finished(&mut self) {
        let need = self.rules.sets_to_win;
        self.state.finished = self.state.left.sets >= need || self.state.right.sets >= need;
    }
}

impl RulesEngine for ScoreEngine {
    fn from_rules(rules: MatchRules) -> Self {
        Self::new(rules)
    }

    fn rules(&self) -> &MatchRules {
        &self.rules
    }

    fn state(&self) -> &MatchState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut MatchState {
        &mut self.state
    }

    fn point_left(&mut self) {
        self.point(true);
    }

    fn point_right(&mut self) {
        self.point(false);
    }

    fn toggle_server(&mut self) {
        self.state.server_left = !self.state.server_left;
    }
}

/// Next (scorer, opponent) point pair after the scorer wins a rally.
fn next_point(scorer: u32, opponent: u32, golden_point: bool) -> (u32, u32) {
    match (scorer, opponent) {
        (0, _) => (15, opponent),
        (15, _) => (30, opponent),
        (30, _) => (40, opponent),
        (40, o) if o < 40 => (POINT_GAME, o),
        (40, 40) if golden_point => (POINT_GAME, 40),
        (40, 40) => (POINT_ADVANTAGE, 40),
        (40, POINT_ADVANTAGE) => (40, 40),
        (POINT_ADVANTAGE, _) => (POINT_GAME, opponent),
        _ => (scorer, opponent),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Sport;

    fn tennis() -> ScoreEngine {
        ScoreEngine::new(MatchRules::new(Sport::Tennis))
    }

    fn win_game(engine: &mut ScoreEngine, left: bool) {
        for _ in 0..4 {
            if left {
                engine.point_left();
            } else {
                engine.point_right();
            }
        }
    }

    fn win_games(engine: &mut ScoreEngine, left: bool, n: usize) {
        for _ in 0..n {
            win_game(engine, left);
        }
    }

    /// Alternate games up to 6-6 so the next point is a tie-break point.
    fn reach_tie_break(engine: &mut ScoreEngine) {
        for _ in 0..6 {
            win_game(engine, true);
            win_game(engine, false);
        }
        assert!(engine.state().in_tie_break);
    }

    #[test]
    fn four_straight_points_win_a_game() {
        let mut engine = tennis();
        engine.point_left();
        engine.point_left();
        engine.point_left();
        assert_eq!(engine.state().left.points, 40);
        engine.point_left();

        let s = engine.state();
        assert_eq!(s.left.games, 1);
        assert_eq!((s.left.points, s.right.points), (0, 0));
        assert!(!s.server_left, "server changes after a game");
    }

    #[test]
    fn deuce_and_advantage() {
        let mut engine = tennis();
        for _ in 0..3 {
            engine.point_left();
            engine.point_right();
        }
        assert_eq!((engine.state().left.points, engine.state().right.points), (40, 40));

        engine.point_left();
        assert_eq!(engine.state().left.points, POINT_ADVANTAGE);

        engine.point_right();
        assert_eq!((engine.state().left.points, engine.state().right.points), (40, 40));

        engine.point_right();
        engine.point_right();
        assert_eq!(engine.state().right.games, 1);
        assert_eq!(engine.state().right.points, 0);
    }

    #[test]
    fn golden_point_decides_at_deuce() {
        let rules = MatchRules::new(Sport::Padel).with_golden_point(true);
        let mut engine = ScoreEngine::new(rules);
        for _ in 0..3 {
            engine.point_left();
            engine.point_right();
        }
        engine.point_right();
        assert_eq!(engine.state().right.games, 1);
    }

    #[test]
    fn six_love_closes_the_set() {
        let mut engine = tennis();
        win_games(&mut engine, true, 6);

        let s = engine.state();
        assert_eq!(s.left.sets, 1);
        assert_eq!((s.left.games, s.right.games), (0, 0));
        assert_eq!(s.completed_sets, vec![SetRecord::new(6, 0, None, None)]);
        assert!(!s.finished);
    }

    #[test]
    fn six_five_needs_another_game() {
        let mut engine = tennis();
        for _ in 0..5 {
            win_game(&mut engine, true);
            win_game(&mut engine, false);
        }
        win_game(&mut engine, true);
        assert_eq!((engine.state().left.games, engine.state().right.games), (6, 5));
        assert!(engine.state().completed_sets.is_empty());

        win_game(&mut engine, true);
        assert_eq!(engine.state().completed_sets, vec![SetRecord::new(7, 5, None, None)]);
    }

    #[test]
    fn tie_break_records_raw_points() {
        let mut engine = tennis();
        reach_tie_break(&mut engine);
        let server_before = engine.state().server_left;

        for _ in 0..5 {
            engine.point_left();
            engine.point_right();
        }
        engine.point_left();
        engine.point_left();

        let s = engine.state();
        assert!(!s.in_tie_break);
        assert_eq!((s.tie_break_left, s.tie_break_right), (0, 0));
        assert_eq!(s.left.sets, 1);
        assert_eq!(s.completed_sets, vec![SetRecord::new(7, 6, Some(7), Some(5))]);
        assert_eq!(s.server_left, server_before);
    }

    #[test]
    fn tie_break_needs_two_point_lead() {
        let mut engine = tennis();
        reach_tie_break(&mut engine);
        for _ in 0..6 {
            engine.point_left();
            engine.point_right();
        }
        engine.point_right();
        assert!(engine.state().in_tie_break);
        assert_eq!(engine.state().tie_break_right, 7);

        engine.point_right();
        assert_eq!(engine.state().completed_sets, vec![SetRecord::new(6, 7, Some(6), Some(8))]);
    }

    #[test]
    fn super_tie_break_in_deciding_set() {
        let rules = MatchRules::new(Sport::Padel).with_super_tie_break_final_set(true);
        let mut engine = ScoreEngine::new(rules);
        win_games(&mut engine, true, 6);
        win_games(&mut engine, false, 6);
        reach_tie_break(&mut engine);

        for _ in 0..7 {
            engine.point_left();
        }
        assert!(engine.state().in_tie_break, "deciding tie-break goes to ten");

        for _ in 0..3 {
            engine.point_left();
        }
        assert!(engine.state().finished);
        assert_eq!(engine.state().completed_sets[2], SetRecord::new(7, 6, Some(10), Some(0)));
    }

    #[test]
    fn match_finishes_at_two_sets_and_ignores_later_points() {
        let mut engine = tennis();
        win_games(&mut engine, false, 12);

        let s = engine.state().clone();
        assert!(s.finished);
        assert_eq!(s.right.sets, 2);

        engine.point_left();
        assert_eq!(engine.state(), &s);
    }

    #[test]
    fn toggle_server_only_flips_indicator() {
        let mut engine = tennis();
        engine.point_left();
        engine.toggle_server();
        assert!(!engine.state().server_left);
        assert_eq!(engine.state().left.points, 15);
    }

    #[test]
    fn score_line_marks_left_server() {
        let mut engine = tennis();
        assert_eq!(engine.score_line(), "0-0 0-0*");
        win_game(&mut engine, true);
        assert_eq!(engine.score_line(), "0-0 1-0");
    }

    #[test]
    fn reset_clears_everything() {
        let mut engine = tennis();
        win_games(&mut engine, true, 7);
        engine.reset();
        assert_eq!(engine.state(), &MatchState::default());
    }
}
