use crate::model::card::Card;
use crate::model::rank::Rank;
use crate::model::suit::Suit;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use thiserror::Error;

pub const DECK_SIZE: usize = 52;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    #[error("deck exhausted: requested {requested} card(s) but only {remaining} remain")]
    Exhausted { requested: usize, remaining: usize },
}

/// All 52 cards in a fixed order plus a cursor marking the next undealt card.
///
/// Resetting rewinds the cursor without reshuffling, so a deck that is never
/// shuffled deals the same sequence after every reset.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    cursor: usize,
}

impl Deck {
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for rank in Rank::ORDERED.iter().copied() {
            for suit in Suit::ALL.iter().copied() {
                cards.push(Card::new(rank, suit));
            }
        }
        Self { cards, cursor: 0 }
    }

    /// Standard order with `top` moved to the front, in the order given.
    pub fn stacked(top: &[Card]) -> Self {
        let mut deck = Self::standard();
        for (target, card) in top.iter().enumerate() {
            if let Some(found) = deck.cards.iter().position(|c| c == card) {
                if found >= target {
                    let moved = deck.cards.remove(found);
                    deck.cards.insert(target, moved);
                }
            }
        }
        deck
    }

    pub fn shuffle<R: rand::Rng + ?Sized>(&mut self, rng: &mut R) -> &mut Self {
        self.cards.shuffle(rng);
        self
    }

    pub fn shuffle_with_seed(&mut self, seed: u64) -> &mut Self {
        let mut rng = StdRng::seed_from_u64(seed);
        self.shuffle(&mut rng)
    }

    pub fn reset(&mut self) -> &mut Self {
        self.cursor = 0;
        self
    }

    pub fn deal(&mut self) -> Result<Card, DeckError> {
        let card = self
            .cards
            .get(self.cursor)
            .copied()
            .ok_or(DeckError::Exhausted {
                requested: 1,
                remaining: 0,
            })?;
        self.cursor += 1;
        Ok(card)
    }

    pub fn deal_many(&mut self, count: usize) -> Result<Vec<Card>, DeckError> {
        let remaining = self.size();
        if count > remaining {
            return Err(DeckError::Exhausted {
                requested: count,
                remaining,
            });
        }
        let end = self.cursor + count;
        let dealt = self.cards[self.cursor..end].to_vec();
        self.cursor = end;
        Ok(dealt)
    }

    /// Cards not yet dealt since the last reset.
    pub fn size(&self) -> usize {
        self.cards.len() - self.cursor
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}
