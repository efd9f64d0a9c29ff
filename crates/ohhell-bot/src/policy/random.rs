use super::{Policy, PolicyContext};
use ohhell_core::model::card::Card;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Uniformly random bids and legal plays from a seeded generator.
#[derive(Debug, Clone)]
pub struct RandomPolicy {
    rng: StdRng,
}

impl RandomPolicy {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Policy for RandomPolicy {
    fn choose_bid(&mut self, ctx: &PolicyContext) -> u32 {
        self.rng.gen_range(0..=ctx.cards_per_player as u32)
    }

    fn choose_play(&mut self, ctx: &PolicyContext) -> Option<Card> {
        ctx.legal.choose(&mut self.rng).copied()
    }
}
