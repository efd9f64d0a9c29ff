use crate::model::card::Card;
use crate::model::seat::Seat;
use crate::model::suit::Suit;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone)]
pub struct Trick {
    seats: usize,
    plays: Vec<Play>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Play {
    pub seat: Seat,
    pub card: Card,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrickError {
    #[error("trick already complete")]
    TrickComplete,
    #[error("{0} has already played this trick")]
    AlreadyPlayed(Seat),
    #[error("trick has no plays to decide a winner")]
    NoPlays,
}

impl Trick {
    pub fn new(seats: usize) -> Self {
        Self {
            seats,
            plays: Vec::with_capacity(seats),
        }
    }

    pub fn plays(&self) -> &[Play] {
        &self.plays
    }

    pub fn is_complete(&self) -> bool {
        self.plays.len() == self.seats
    }

    pub fn lead_suit(&self) -> Option<Suit> {
        self.plays.first().map(|play| play.card.suit)
    }

    pub fn play(&mut self, seat: Seat, card: Card) -> Result<(), TrickError> {
        if self.is_complete() {
            return Err(TrickError::TrickComplete);
        }
        if self.plays.iter().any(|play| play.seat == seat) {
            return Err(TrickError::AlreadyPlayed(seat));
        }
        self.plays.push(Play { seat, card });
        Ok(())
    }

    /// The seat holding the winning card so far: the highest trump if any
    /// trump was played, otherwise the highest card of the led suit.
    pub fn winner(&self, trump: Suit) -> Option<Seat> {
        let lead_suit = self.lead_suit()?;
        let winning_suit = if self.plays.iter().any(|play| play.card.suit == trump) {
            trump
        } else {
            lead_suit
        };
        self.plays
            .iter()
            .filter(|play| play.card.suit == winning_suit)
            .max_by_key(|play| play.card.rank)
            .map(|play| play.seat)
    }
}
