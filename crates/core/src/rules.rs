use serde::{Deserialize, Serialize};

/// Points needed to take a regular tie-break.
pub const TIE_BREAK_POINTS: u32 = 7;
/// Points needed to take a super tie-break in the deciding set.
pub const SUPER_TIE_BREAK_POINTS: u32 = 10;

/// Serialized under its upper-case wire name ("TENNIS", "PADEL") in the
/// history document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Sport {
    #[default]
    Tennis,
    Padel,
}

impl Sport {
    /// Human-readable name for history rows.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Tennis => "Tennis",
            Self::Padel => "Padel",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchRules {
    pub sport: Sport,
    pub sets_to_win: u32,
    pub games_per_set: u32,
    pub tie_break_at: u32,
    pub super_tie_break_final_set: bool,
    pub golden_point: bool,
}

impl MatchRules {
    /// Best of three sets, six-game sets with a tie-break at 6-6, advantage scoring.
    pub fn new(sport: Sport) -> Self {
        Self {
            sport,
            sets_to_win: 2,
            games_per_set: 6,
            tie_break_at: 6,
            super_tie_break_final_set: false,
            golden_point: false,
        }
    }

    pub fn with_golden_point(mut self, golden_point: bool) -> Self {
        self.golden_point = golden_point;
        self
    }

    pub fn with_super_tie_break_final_set(mut self, enabled: bool) -> Self {
        self.super_tie_break_final_set = enabled;
        self
    }

    pub fn with_sets_to_win(mut self, sets_to_win: u32) -> Self {
        self.sets_to_win = sets_to_win;
        self
    }
}

impl Default for MatchRules {
    fn default() -> Self {
        Self::new(Sport::default())
    }
}
