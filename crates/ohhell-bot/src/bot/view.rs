use ohhell_core::model::card::Card;
use ohhell_core::model::seat::Seat;
use ohhell_core::model::suit::Suit;
use ohhell_core::model::trick::Play;

/// The public side of a round as one seat hears it.
#[derive(Debug, Clone, Default)]
pub struct RoundView {
    seats: usize,
    cards_per_player: usize,
    trump: Option<Card>,
    bids: Vec<Option<u32>>,
    tricks_won: Vec<u32>,
    trick: Vec<Play>,
}

impl RoundView {
    pub fn new(seats: usize, cards_per_player: usize) -> Self {
        Self {
            seats,
            cards_per_player,
            trump: None,
            bids: vec![None; seats],
            tricks_won: vec![0; seats],
            trick: Vec::with_capacity(seats),
        }
    }

    pub fn seats(&self) -> usize {
        self.seats
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

    pub fn bids(&self) -> &[Option<u32>] {
        &self.bids
    }

    pub fn record_bid(&mut self, seat: Seat, bid: u32) {
        if let Some(slot) = self.bids.get_mut(seat.index()) {
            *slot = Some(bid);
        }
    }

    /// Sum of the other seats' bids, when `seat` is the only one yet to bid.
    pub fn others_total_if_last(&self, seat: Seat) -> Option<u64> {
        self.bids
            .iter()
            .enumerate()
            .filter(|(index, _)| *index != seat.index())
            .try_fold(0u64, |total, (_, bid)| bid.map(|bid| total + u64::from(bid)))
    }

    pub fn tricks_won(&self) -> &[u32] {
        &self.tricks_won
    }

    pub fn trick(&self) -> &[Play] {
        &self.trick
    }

    pub fn led_suit(&self) -> Option<Suit> {
        self.trick.first().map(|play| play.card.suit)
    }

    pub fn record_play(&mut self, seat: Seat, card: Card) {
        self.trick.push(Play { seat, card });
    }

    pub fn finish_trick(&mut self, winner: Seat) {
        if let Some(count) = self.tricks_won.get_mut(winner.index()) {
            *count += 1;
        }
        self.trick.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::RoundView;
    use ohhell_core::model::card::Card;
    use ohhell_core::model::seat::Seat;

    #[test]
    fn others_total_waits_for_every_other_bid() {
        let mut view = RoundView::new(3, 5);
        view.record_bid(Seat(2), 1);
        assert_eq!(view.others_total_if_last(Seat(0)), None);
        view.record_bid(Seat(1), 3);
        assert_eq!(view.others_total_if_last(Seat(0)), Some(4));
    }

    #[test]
    fn finishing_a_trick_counts_it_and_clears_the_table() {
        let mut view = RoundView::new(2, 1);
        view.record_play(Seat(0), "4C".parse::<Card>().unwrap());
        assert!(view.led_suit().is_some());
        view.finish_trick(Seat(0));
        assert_eq!(view.tricks_won(), &[1, 0]);
        assert!(view.trick().is_empty());
        assert_eq!(view.led_suit(), None);
    }
}
