pub mod device;
pub mod rally;

pub use device::TestDevice;
pub use rally::{Action, apply, play_game, play_games, random_actions};
