mod heuristic;
mod random;

pub use heuristic::HeuristicPolicy;
pub use random::RandomPolicy;

use ohhell_core::model::card::Card;
use ohhell_core::model::hand::Hand;
use ohhell_core::model::seat::Seat;
use ohhell_core::model::suit::Suit;
use ohhell_core::model::trick::{Play, Trick};

/// Everything a policy may look at when deciding
pub struct PolicyContext<'a> {
    pub seat: Seat,
    pub seats: usize,
    pub hand: &'a Hand,
    pub trump: Option<Card>,
    pub cards_per_player: usize,
    /// Bids heard so far this round, indexed by seat
    pub bids: &'a [Option<u32>],
    pub tricks_won: &'a [u32],
    /// Cards already in the current trick, in play order
    pub trick: &'a [Play],
    pub legal: &'a [Card],
}

impl PolicyContext<'_> {
    pub fn trump_suit(&self) -> Option<Suit> {
        self.trump.map(|card| card.suit)
    }

    pub fn led_suit(&self) -> Option<Suit> {
        self.trick.first().map(|play| play.card.suit)
    }

    pub fn own_bid(&self) -> Option<u32> {
        self.bids[self.seat.index()]
    }

    pub fn own_tricks(&self) -> u32 {
        self.tricks_won[self.seat.index()]
    }

    /// Whether playing `card` now would leave this seat winning the trick so far.
    pub fn would_win(&self, card: Card) -> bool {
        let mut trick = Trick::new(self.seats);
        for play in self.trick {
            if trick.play(play.seat, play.card).is_err() {
                return false;
            }
        }
        if trick.play(self.seat, card).is_err() {
            return false;
        }
        let trump = self.trump_suit().or(trick.lead_suit());
        trump.and_then(|suit| trick.winner(suit)) == Some(self.seat)
    }
}

/// Decision-making for an automated seat
pub trait Policy: Send {
    /// Tricks this seat expects to take; clamped to the hand size by the caller.
    fn choose_bid(&mut self, ctx: &PolicyContext) -> u32;

    /// One of `ctx.legal`; `None` leaves the choice to the caller.
    fn choose_play(&mut self, ctx: &PolicyContext) -> Option<Card>;
}
