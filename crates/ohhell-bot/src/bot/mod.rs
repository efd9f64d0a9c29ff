mod view;

pub use view::RoundView;

use crate::policy::{Policy, PolicyContext};
use ohhell_core::game::Player;
use ohhell_core::model::card::Card;
use ohhell_core::model::hand::Hand;
use ohhell_core::model::seat::Seat;
use tracing::{Level, event};

/// A seat played by a [`Policy`]. Keeps its own hand and everything the
/// engine announces, and never answers with an illegal card or a bid that
/// would make the bid total equal the tricks available.
pub struct BotPlayer<P> {
    seat: Seat,
    policy: P,
    hand: Hand,
    view: RoundView,
    result: Option<(bool, bool)>,
}

impl<P: Policy> BotPlayer<P> {
    pub fn new(seat: Seat, seats: usize, policy: P) -> Self {
        Self {
            seat,
            policy,
            hand: Hand::new(),
            view: RoundView::new(seats, 0),
            result: None,
        }
    }

    pub fn seat(&self) -> Seat {
        self.seat
    }

    pub fn view(&self) -> &RoundView {
        &self.view
    }

    pub fn match_result(&self) -> Option<(bool, bool)> {
        self.result
    }
}

fn context<'a>(
    seat: Seat,
    hand: &'a Hand,
    view: &'a RoundView,
    legal: &'a [Card],
) -> PolicyContext<'a> {
    PolicyContext {
        seat,
        seats: view.seats(),
        hand,
        trump: view.trump(),
        cards_per_player: view.cards_per_player(),
        bids: view.bids(),
        tricks_won: view.tricks_won(),
        trick: view.trick(),
        legal,
    }
}

/// Moves a last bid off the one value that would make the total equal the
/// number of tricks.
pub fn avoid_forbidden_total(bid: u32, view: &RoundView, seat: Seat) -> u32 {
    let bid = bid.min(view.cards_per_player() as u32);
    let Some(others) = view.others_total_if_last(seat) else {
        return bid;
    };
    if others + u64::from(bid) != view.cards_per_player() as u64 {
        return bid;
    }
    if bid == 0 { 1 } else { bid - 1 }
}

impl<P: Policy> Player for BotPlayer<P> {
    fn assign_hand(&mut self, cards: Vec<Card>) {
        self.view = RoundView::new(self.view.seats(), cards.len());
        self.hand = Hand::with_cards(cards);
    }

    fn current_hand(&self) -> &[Card] {
        self.hand.cards()
    }

    fn notify_trump_card(&mut self, card: Card) {
        self.view.set_trump(card);
    }

    fn request_bid(&mut self) -> i32 {
        let wanted = {
            let ctx = context(self.seat, &self.hand, &self.view, &[]);
            self.policy.choose_bid(&ctx)
        };
        let bid = avoid_forbidden_total(wanted, &self.view, self.seat);
        self.view.record_bid(self.seat, bid);

        if tracing::enabled!(Level::DEBUG) {
            event!(
                target: "ohhell_bot::bid",
                Level::DEBUG,
                seat = %self.seat,
                wanted,
                bid,
                hand_size = self.hand.len(),
                trump = ?self.view.trump(),
            );
        }
        bid as i32
    }

    fn notify_bid(&mut self, seat: Seat, bid: u32) {
        self.view.record_bid(seat, bid);
    }

    fn request_card_to_play(&mut self) -> Card {
        let legal = self.hand.legal_plays(self.view.led_suit());
        let chosen = {
            let ctx = context(self.seat, &self.hand, &self.view, &legal);
            self.policy.choose_play(&ctx)
        };
        let card = match chosen {
            Some(card) if legal.contains(&card) => card,
            other => {
                if let Some(card) = other {
                    tracing::warn!(
                        target: "ohhell_bot::play",
                        seat = %self.seat,
                        card = %card,
                        "policy chose an illegal card; playing the first legal card"
                    );
                }
                *legal
                    .first()
                    .expect("engine only asks a seat that still holds cards")
            }
        };
        self.hand.remove(card);
        self.view.record_play(self.seat, card);

        if tracing::enabled!(Level::DEBUG) {
            event!(
                target: "ohhell_bot::play",
                Level::DEBUG,
                seat = %self.seat,
                card = %card,
                legal_count = legal.len(),
                tricks = self.view.tricks_won()[self.seat.index()],
                bid = ?self.view.bids()[self.seat.index()],
            );
        }
        card
    }

    fn notify_card_played(&mut self, seat: Seat, card: Card) {
        self.view.record_play(seat, card);
    }

    fn notify_trick_winner(&mut self, seat: Seat) {
        self.view.finish_trick(seat);
    }

    fn notify_match_result(&mut self, won: bool, joint: bool) {
        self.result = Some((won, joint));
        event!(
            target: "ohhell_bot::match",
            Level::DEBUG,
            seat = %self.seat,
            won,
            joint,
        );
    }
}
