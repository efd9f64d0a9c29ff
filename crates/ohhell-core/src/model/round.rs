use crate::model::card::Card;
use crate::model::seat::Seat;

/// Points added to a seat's round score when its tricks won equal its bid.
pub const MATCHED_BID_BONUS: u32 = 10;

/// Per-round bookkeeping, rebuilt at the start of every round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    cards_per_player: usize,
    trump: Option<Card>,
    bids: Vec<Option<u32>>,
    tricks_won: Vec<u32>,
}

impl RoundState {
    pub fn new(seats: usize, cards_per_player: usize) -> Self {
        Self {
            cards_per_player,
            trump: None,
            bids: vec![None; seats],
            tricks_won: vec![0; seats],
        }
    }

    pub fn cards_per_player(&self) -> usize {
        self.cards_per_player
    }

    pub fn trump(&self) -> Option<Card> {
        self.trump
    }

    pub fn set_trump(&mut self, card: Card) {
        self.trump = Some(card);
    }

    pub fn record_bid(&mut self, seat: Seat, bid: u32) {
        self.bids[seat.index()] = Some(bid);
    }

    pub fn bid(&self, seat: Seat) -> Option<u32> {
        self.bids[seat.index()]
    }

    /// Bids indexed by seat; seats that have not bid yet count as zero.
    pub fn bids(&self) -> Vec<u32> {
        self.bids.iter().map(|bid| bid.unwrap_or(0)).collect()
    }

    /// Summed wide so that any set of accepted bids fits.
    pub fn bid_total(&self) -> u64 {
        self.bids.iter().flatten().map(|bid| u64::from(*bid)).sum()
    }

    /// The bid total may never equal the number of tricks available.
    pub fn bids_are_valid(&self) -> bool {
        self.bid_total() != self.cards_per_player as u64
    }

    pub fn record_trick(&mut self, winner: Seat) {
        self.tricks_won[winner.index()] += 1;
    }

    pub fn tricks_won(&self) -> &[u32] {
        &self.tricks_won
    }

    pub fn tricks_total(&self) -> u32 {
        self.tricks_won.iter().sum()
    }

    pub fn tricks_are_complete(&self) -> bool {
        self.tricks_total() as usize == self.cards_per_player
    }

    pub fn matched_bid(&self, seat: Seat) -> bool {
        self.bids[seat.index()] == Some(self.tricks_won[seat.index()])
    }

    /// Tricks won per seat, plus the bonus for seats that matched their bid.
    pub fn round_scores(&self) -> Vec<u32> {
        (0..self.tricks_won.len())
            .map(|index| {
                let seat = Seat::new(index);
                let tricks = self.tricks_won[index];
                if self.matched_bid(seat) {
                    tricks + MATCHED_BID_BONUS
                } else {
                    tricks
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{MATCHED_BID_BONUS, RoundState};
    use crate::model::seat::Seat;

    #[test]
    fn bid_total_equal_to_tricks_is_invalid() {
        let mut round = RoundState::new(3, 4);
        round.record_bid(Seat(0), 1);
        round.record_bid(Seat(1), 2);
        round.record_bid(Seat(2), 1);
        assert_eq!(round.bid_total(), 4);
        assert!(!round.bids_are_valid());

        round.record_bid(Seat(2), 0);
        assert!(round.bids_are_valid());
    }

    #[test]
    fn zero_bids_are_valid_whenever_tricks_exist() {
        let mut round = RoundState::new(2, 1);
        round.record_bid(Seat(0), 0);
        round.record_bid(Seat(1), 0);
        assert!(round.bids_are_valid());
    }

    #[test]
    fn scores_add_bonus_only_for_matched_bids() {
        let mut round = RoundState::new(3, 3);
        round.record_bid(Seat(0), 2);
        round.record_bid(Seat(1), 0);
        round.record_bid(Seat(2), 0);
        round.record_trick(Seat(0));
        round.record_trick(Seat(0));
        round.record_trick(Seat(2));
        assert!(round.tricks_are_complete());
        assert_eq!(
            round.round_scores(),
            vec![2 + MATCHED_BID_BONUS, MATCHED_BID_BONUS, 1]
        );
    }

    #[test]
    fn incomplete_trick_count_is_detected() {
        let mut round = RoundState::new(2, 2);
        round.record_trick(Seat(1));
        assert!(!round.tricks_are_complete());
        assert_eq!(round.tricks_total(), 1);
    }
}
