use crate::game::player::Player;
use crate::model::card::Card;
use crate::model::hand::Hand;
use crate::model::seat::Seat;
use crate::model::suit::Suit;
use std::collections::VecDeque;

/// A notification or hand delivery observed by a [`ScriptedPlayer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptEvent {
    HandAssigned(Vec<Card>),
    Trump(Card),
    Bid { seat: Seat, bid: u32 },
    CardPlayed { seat: Seat, card: Card },
    TrickWinner(Seat),
    MatchResult { won: bool, joint: bool },
}

/// Plays back queued bids and cards, then falls back to bidding zero and
/// playing its lowest legal card. Records everything the engine tells it.
///
/// Scripted cards are answered as given, even when they break the rules, so
/// fixtures can drive the engine into its failure paths.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPlayer {
    hand: Hand,
    bids: VecDeque<i32>,
    plays: VecDeque<Card>,
    led: Option<Suit>,
    events: Vec<ScriptEvent>,
}

impl ScriptedPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bids(mut self, bids: impl IntoIterator<Item = i32>) -> Self {
        self.bids.extend(bids);
        self
    }

    pub fn with_plays(mut self, plays: impl IntoIterator<Item = Card>) -> Self {
        self.plays.extend(plays);
        self
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn events(&self) -> &[ScriptEvent] {
        &self.events
    }

    pub fn match_result(&self) -> Option<(bool, bool)> {
        self.events.iter().rev().find_map(|event| match event {
            ScriptEvent::MatchResult { won, joint } => Some((*won, *joint)),
            _ => None,
        })
    }

    fn fallback_play(&self) -> Option<Card> {
        let legal = self.hand.legal_plays(self.led);
        legal.iter().copied().min_by_key(|card| card.rank)
    }
}

impl Player for ScriptedPlayer {
    fn assign_hand(&mut self, cards: Vec<Card>) {
        self.events.push(ScriptEvent::HandAssigned(cards.clone()));
        self.hand = Hand::with_cards(cards);
        self.led = None;
    }

    fn current_hand(&self) -> &[Card] {
        self.hand.cards()
    }

    fn notify_trump_card(&mut self, card: Card) {
        self.events.push(ScriptEvent::Trump(card));
    }

    fn request_bid(&mut self) -> i32 {
        self.bids.pop_front().unwrap_or(0)
    }

    fn notify_bid(&mut self, seat: Seat, bid: u32) {
        self.events.push(ScriptEvent::Bid { seat, bid });
    }

    fn request_card_to_play(&mut self) -> Card {
        let card = self
            .plays
            .pop_front()
            .or_else(|| self.fallback_play())
            .expect("scripted player asked to play with an empty hand and no script");
        self.hand.remove(card);
        self.led.get_or_insert(card.suit);
        card
    }

    fn notify_card_played(&mut self, seat: Seat, card: Card) {
        self.led.get_or_insert(card.suit);
        self.events.push(ScriptEvent::CardPlayed { seat, card });
    }

    fn notify_trick_winner(&mut self, seat: Seat) {
        self.led = None;
        self.events.push(ScriptEvent::TrickWinner(seat));
    }

    fn notify_match_result(&mut self, won: bool, joint: bool) {
        self.events.push(ScriptEvent::MatchResult { won, joint });
    }
}
