use crate::model::card::Card;
use crate::model::seat::Seat;

/// One seat's decision maker, as seen by the engine.
///
/// Every call is a blocking round trip. Requests (`request_bid`,
/// `request_card_to_play`) are answered once and never retried; the engine
/// validates the answer and aborts the match on a rule violation.
pub trait Player {
    /// Deliver this round's hand, replacing any previous one.
    fn assign_hand(&mut self, cards: Vec<Card>);

    /// The hand as it stands now, without cards already played this round.
    /// The engine reads this to check that a seat followed suit.
    fn current_hand(&self) -> &[Card];

    fn notify_trump_card(&mut self, card: Card);

    /// Tricks this seat expects to win. Negative answers are rejected.
    fn request_bid(&mut self) -> i32;

    fn notify_bid(&mut self, seat: Seat, bid: u32);

    /// The card to play. It must already be gone from `current_hand` when
    /// this returns. The engine asks once per trick, `cards_per_player`
    /// times a round, so it never calls this on an empty hand.
    fn request_card_to_play(&mut self) -> Card;

    fn notify_card_played(&mut self, seat: Seat, card: Card);

    /// Sent to every seat, the winner included.
    fn notify_trick_winner(&mut self, seat: Seat);

    fn notify_match_result(&mut self, won: bool, joint: bool);
}

impl<P: Player + ?Sized> Player for Box<P> {
    fn assign_hand(&mut self, cards: Vec<Card>) {
        (**self).assign_hand(cards)
    }

    fn current_hand(&self) -> &[Card] {
        (**self).current_hand()
    }

    fn notify_trump_card(&mut self, card: Card) {
        (**self).notify_trump_card(card)
    }

    fn request_bid(&mut self) -> i32 {
        (**self).request_bid()
    }

    fn notify_bid(&mut self, seat: Seat, bid: u32) {
        (**self).notify_bid(seat, bid)
    }

    fn request_card_to_play(&mut self) -> Card {
        (**self).request_card_to_play()
    }

    fn notify_card_played(&mut self, seat: Seat, card: Card) {
        (**self).notify_card_played(seat, card)
    }

    fn notify_trick_winner(&mut self, seat: Seat) {
        (**self).notify_trick_winner(seat)
    }

    fn notify_match_result(&mut self, won: bool, joint: bool) {
        (**self).notify_match_result(won, joint)
    }
}
