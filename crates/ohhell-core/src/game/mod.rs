pub mod engine;
pub mod error;
pub mod options;
pub mod outcome;
pub mod player;
pub mod scripted;

pub use engine::{MAX_HAND_SIZE, MAX_PLAYERS, MIN_PLAYERS, OhHell, round_sizes};
pub use error::{ErrorKind, GameError};
pub use options::{EngineOptions, ShufflePolicy};
pub use outcome::{MatchOutcome, RoundSummary};
pub use player::Player;
pub use scripted::{ScriptEvent, ScriptedPlayer};
