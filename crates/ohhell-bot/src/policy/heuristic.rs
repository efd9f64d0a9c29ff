use super::{Policy, PolicyContext};
use ohhell_core::model::card::Card;
use ohhell_core::model::rank::Rank;

const MAX_CAUTION: u8 = 3;

/// Counts sure-looking winners to bid, then plays to reach the bid and no
/// further.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeuristicPolicy {
    caution: u8,
}

impl Default for HeuristicPolicy {
    fn default() -> Self {
        Self::new(1)
    }
}

impl HeuristicPolicy {
    /// `caution` 0..=3 raises the trump rank counted as a likely winner from
    /// jack up to ace, and stops counting kings past zero.
    pub fn new(caution: u8) -> Self {
        Self {
            caution: caution.min(MAX_CAUTION),
        }
    }

    pub fn caution(&self) -> u8 {
        self.caution
    }

    fn trump_threshold(&self) -> Rank {
        Rank::from_value(Rank::Jack.value() + self.caution).unwrap_or(Rank::Ace)
    }

    fn estimate(&self, ctx: &PolicyContext) -> u32 {
        let trump = ctx.trump_suit();
        let threshold = self.trump_threshold();
        let count = ctx
            .hand
            .iter()
            .filter(|card| {
                if Some(card.suit) == trump {
                    card.rank >= threshold
                } else {
                    card.rank == Rank::Ace
                        || (self.caution == 0
                            && card.rank == Rank::King
                            && ctx.hand.count_of(card.suit) <= 2)
                }
            })
            .count();
        count as u32
    }

    /// Sort key preferring off-trump cards, then lower ranks.
    fn spend_order(ctx: &PolicyContext, card: Card) -> (bool, Rank) {
        (Some(card.suit) == ctx.trump_suit(), card.rank)
    }
}

impl Policy for HeuristicPolicy {
    fn choose_bid(&mut self, ctx: &PolicyContext) -> u32 {
        self.estimate(ctx)
    }

    fn choose_play(&mut self, ctx: &PolicyContext) -> Option<Card> {
        let wants_tricks = ctx.own_tricks() < ctx.own_bid().unwrap_or(0);
        let legal = ctx.legal.iter().copied();

        if ctx.trick.is_empty() {
            return if wants_tricks {
                legal.max_by_key(|card| (card.rank, Some(card.suit) != ctx.trump_suit()))
            } else {
                legal.min_by_key(|card| Self::spend_order(ctx, *card))
            };
        }

        let (winning, losing): (Vec<Card>, Vec<Card>) = legal.partition(|card| ctx.would_win(*card));
        if wants_tricks {
            winning
                .iter()
                .copied()
                .min_by_key(|card| Self::spend_order(ctx, *card))
                .or_else(|| losing.iter().copied().min_by_key(|card| Self::spend_order(ctx, *card)))
        } else {
            losing
                .iter()
                .copied()
                .max_by_key(|card| card.rank)
                .or_else(|| winning.iter().copied().max_by_key(|card| card.rank))
        }
    }
}
