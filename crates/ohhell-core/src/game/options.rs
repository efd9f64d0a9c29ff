use crate::model::seat::Seat;
use serde::{Deserialize, Serialize};

/// When the engine shuffles its deck. The deck is reset at the start of
/// every round regardless; with `Never` each round deals from the same order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShufflePolicy {
    #[default]
    Never,
    OncePerMatch,
    EveryRound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineOptions {
    pub shuffle: ShufflePolicy,
    /// Seeds shuffling; `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Dealer before the first round. The seat after it is dealt first.
    pub first_dealer: Seat,
}

impl EngineOptions {
    pub fn shuffled_every_round(seed: u64) -> Self {
        Self {
            shuffle: ShufflePolicy::EveryRound,
            seed: Some(seed),
            ..Self::default()
        }
    }

    pub fn with_first_dealer(mut self, dealer: Seat) -> Self {
        self.first_dealer = dealer;
        self
    }
}
