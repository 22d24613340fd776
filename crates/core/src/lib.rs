pub mod clock;
pub mod engine;
pub mod error;
pub mod record;
pub mod rules;
pub mod state;

pub use clock::{Clock, ManualClock, SystemClock};
pub use engine::{RulesEngine, ScoreEngine};
pub use error::CoreError;
pub use record::MatchRecord;
pub use rules::{MatchRules, Sport};
pub use state::{MatchState, SetRecord, SideState, point_label};
