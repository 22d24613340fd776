/// Advantage, in the engine's point encoding (0, 15, 30, 40, 50, 100).
pub const POINT_ADVANTAGE: u32 = 50;
/// Transient value a side holds for the instant it wins a game.
pub const POINT_GAME: u32 = 100;

/// Scoreboard label for a point value.
pub fn point_label(points: u32) -> String {
    match points {
        POINT_ADVANTAGE => "Ad".to_string(),
        POINT_GAME => "Game".to_string(),
        other => other.to_string(),
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SideState {
    pub points: u32,
    pub games: u32,
    pub sets: u32,
}

impl SideState {
    pub fn new(points: u32, games: u32, sets: u32) -> Self {
        Self { points, games, sets }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// A completed set. The tie-break counts are present only when a tie-break
/// decided the set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetRecord {
    left_games: u32,
    right_games: u32,
    tie_break_left: Option<u32>,
    tie_break_right: Option<u32>,
}

impl SetRecord {
    pub fn new(
        left_games: u32,
        right_games: u32,
        tie_break_left: Option<u32>,
        tie_break_right: Option<u32>,
    ) -> Self {
        Self {
            left_games,
            right_games,
            tie_break_left,
            tie_break_right,
        }
    }

    pub fn left_games(&self) -> u32 {
        self.left_games
    }

    pub fn right_games(&self) -> u32 {
        self.right_games
    }

    pub fn tie_break_left(&self) -> Option<u32> {
        self.tie_break_left
    }

    pub fn tie_break_right(&self) -> Option<u32> {
        self.tie_break_right
    }

    pub fn left_won(&self) -> bool {
        self.left_games > self.right_games
    }

    /// Tie-break points of the side that lost the set, the number shown in
    /// parentheses in "7-6(5)". `None` unless both tie-break counts are recorded.
    pub fn loser_tie_break(&self) -> Option<u32> {
        match (self.tie_break_left, self.tie_break_right) {
            (Some(left), Some(right)) => Some(if self.left_won() { right } else { left }),
            _ => None,
        }
    }
}

/// Live scoreboard owned by a rules engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchState {
    pub left: SideState,
    pub right: SideState,
    pub server_left: bool,
    pub in_tie_break: bool,
    pub finished: bool,
    pub tie_break_left: u32,
    pub tie_break_right: u32,
    pub completed_sets: Vec<SetRecord>,
}

impl Default for MatchState {
    fn default() -> Self {
        Self {
            left: SideState::default(),
            right: SideState::default(),
            server_left: true,
            in_tie_break: false,
            finished: false,
            tie_break_left: 0,
            tie_break_right: 0,
            completed_sets: Vec::new(),
        }
    }
}

impl MatchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to a fresh match: zero counters, left serving, no completed sets.
    pub fn reset(&mut self) {
        self.left.clear();
        self.right.clear();
        self.server_left = true;
        self.in_tie_break = false;
        self.finished = false;
        self.tie_break_left = 0;
        self.tie_break_right = 0;
        self.completed_sets.clear();
    }
}
