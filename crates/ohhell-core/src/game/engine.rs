use crate::game::error::GameError;
use crate::game::options::{EngineOptions, ShufflePolicy};
use crate::game::outcome::{MatchOutcome, RoundSummary};
use crate::game::player::Player;
use crate::model::card::Card;
use crate::model::deck::{DECK_SIZE, Deck};
use crate::model::round::RoundState;
use crate::model::score::ScoreBoard;
use crate::model::seat::{Rotation, Seat};
use crate::model::suit::Suit;
use crate::model::trick::{Trick, TrickError};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{Level, event};

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 6;
pub const MAX_HAND_SIZE: usize = 10;

/// Hand sizes for a match: `min(10, 52 / seats)` down to one card.
pub fn round_sizes(seats: usize) -> impl Iterator<Item = usize> {
    let first = MAX_HAND_SIZE.min(DECK_SIZE / seats.max(1));
    (1..=first).rev()
}

/// Runs one match of Oh Hell between a fixed list of seats.
///
/// A single rotation index drives dealing, bidding and trick play. It moves
/// one seat per action, so each round starts one seat further round the table
/// than the last and the lead never follows the previous trick's winner.
pub struct OhHell<P> {
    players: Vec<P>,
    deck: Deck,
    rotation: Rotation,
    shuffle: ShufflePolicy,
    rng: StdRng,
    scores: ScoreBoard,
    rounds: Vec<RoundSummary>,
}

impl<P: Player> OhHell<P> {
    pub fn new(players: Vec<P>) -> Result<Self, GameError> {
        Self::with_options(players, EngineOptions::default())
    }

    pub fn with_options(players: Vec<P>, options: EngineOptions) -> Result<Self, GameError> {
        Self::with_deck(players, Deck::standard(), options)
    }

    /// Uses `deck` in its current order. Only `options.shuffle` reorders it.
    pub fn with_deck(
        players: Vec<P>,
        deck: Deck,
        options: EngineOptions,
    ) -> Result<Self, GameError> {
        let seats = players.len();
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&seats) {
            return Err(GameError::SeatCount {
                found: seats,
                min: MIN_PLAYERS,
                max: MAX_PLAYERS,
            });
        }

        let rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Self {
            players,
            deck,
            rotation: Rotation::new(options.first_dealer, seats),
            shuffle: options.shuffle,
            rng,
            scores: ScoreBoard::new(seats),
            rounds: Vec::new(),
        })
    }

    pub fn players(&self) -> &[P] {
        &self.players
    }

    pub fn players_mut(&mut self) -> &mut [P] {
        &mut self.players
    }

    pub fn into_players(self) -> Vec<P> {
        self.players
    }

    pub fn scores(&self) -> &ScoreBoard {
        &self.scores
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn rounds(&self) -> &[RoundSummary] {
        &self.rounds
    }

    pub fn play_match(&mut self) -> Result<MatchOutcome, GameError> {
        if self.shuffle == ShufflePolicy::OncePerMatch {
            self.deck.shuffle(&mut self.rng);
        }
        for cards_per_player in round_sizes(self.players.len()) {
            self.play_round(cards_per_player)?;
        }
        Ok(self.declare_winners())
    }

    /// Plays a single round with `cards_per_player` cards dealt to each seat.
    pub fn play_round(&mut self, cards_per_player: usize) -> Result<RoundSummary, GameError> {
        self.run_round(cards_per_player).inspect_err(|err| {
            event!(
                target: "ohhell_core::round",
                Level::WARN,
                cards_per_player,
                kind = ?err.kind(),
                error = %err,
                "round aborted"
            );
        })
    }

    fn run_round(&mut self, cards_per_player: usize) -> Result<RoundSummary, GameError> {
        if self.shuffle == ShufflePolicy::EveryRound {
            self.deck.shuffle(&mut self.rng);
        }
        self.deck.reset();

        let mut round = RoundState::new(self.players.len(), cards_per_player);
        let dealer = self.rotation.active();

        self.deal(cards_per_player)?;
        let trump = self.reveal_trump(&mut round)?;
        event!(
            target: "ohhell_core::round",
            Level::INFO,
            cards_per_player,
            dealer = %dealer,
            trump = %trump,
            "round started"
        );

        self.gather_bids(&mut round)?;
        if !round.bids_are_valid() {
            return Err(GameError::BidTotalMatchesTricks {
                total: round.bid_total(),
                tricks: cards_per_player,
            });
        }

        for _ in 0..cards_per_player {
            self.play_trick(&mut round, trump.suit)?;
        }

        if !round.tricks_are_complete() {
            return Err(GameError::TrickCountMismatch {
                expected: cards_per_player,
                actual: round.tricks_total(),
            });
        }

        let round_scores = self.scores.apply_round(&round);
        event!(
            target: "ohhell_core::round",
            Level::INFO,
            cards_per_player,
            bids = ?round.bids(),
            tricks = ?round.tricks_won(),
            scores = ?round_scores,
            "round scored"
        );

        let summary = RoundSummary::capture(&round, dealer, trump, round_scores);
        self.rounds.push(summary.clone());
        Ok(summary)
    }

    /// The seat whose turn it is; the rotation moves on behind it.
    fn take_turn(&mut self) -> Seat {
        let seat = self.rotation.active();
        self.rotation.advance();
        seat
    }

    fn deal(&mut self, cards_per_player: usize) -> Result<(), GameError> {
        // The active seat is the dealer; the seat after it receives cards first.
        self.rotation.advance();
        for _ in 0..self.players.len() {
            let seat = self.take_turn();
            let hand = self.deck.deal_many(cards_per_player)?;
            self.players[seat.index()].assign_hand(hand);
        }
        Ok(())
    }

    fn reveal_trump(&mut self, round: &mut RoundState) -> Result<Card, GameError> {
        let trump = self.deck.deal()?;
        round.set_trump(trump);
        broadcast(&mut self.players, None, |_, player| {
            player.notify_trump_card(trump)
        });
        Ok(trump)
    }

    fn gather_bids(&mut self, round: &mut RoundState) -> Result<(), GameError> {
        for _ in 0..self.players.len() {
            let seat = self.take_turn();
            let requested = self.players[seat.index()].request_bid();
            let bid = u32::try_from(requested).map_err(|_| GameError::InvalidBid {
                seat,
                bid: requested,
            })?;
            broadcast(&mut self.players, Some(seat), |_, player| {
                player.notify_bid(seat, bid)
            });
            round.record_bid(seat, bid);
        }
        event!(
            target: "ohhell_core::round",
            Level::DEBUG,
            total = round.bid_total(),
            tricks = round.cards_per_player(),
            "bids gathered"
        );
        Ok(())
    }

    fn play_trick(&mut self, round: &mut RoundState, trump: Suit) -> Result<(), GameError> {
        let mut trick = Trick::new(self.players.len());
        for _ in 0..self.players.len() {
            let seat = self.take_turn();
            let card = self.players[seat.index()].request_card_to_play();
            broadcast(&mut self.players, Some(seat), |_, player| {
                player.notify_card_played(seat, card)
            });
            if let Some(led) = trick.lead_suit() {
                self.check_follows_suit(seat, led, card)?;
            }
            trick.play(seat, card)?;
        }

        let winner = trick.winner(trump).ok_or(TrickError::NoPlays)?;
        round.record_trick(winner);
        event!(
            target: "ohhell_core::trick",
            Level::DEBUG,
            winner = %winner,
            led = ?trick.lead_suit(),
            trump = ?trump,
            "trick won"
        );
        broadcast(&mut self.players, None, |_, player| {
            player.notify_trick_winner(winner)
        });
        Ok(())
    }

    /// Checked after the fact against the hand the seat reports once the
    /// played card has left it.
    fn check_follows_suit(&self, seat: Seat, led: Suit, card: Card) -> Result<(), GameError> {
        if card.suit == led {
            return Ok(());
        }
        let still_holds_led = self.players[seat.index()]
            .current_hand()
            .iter()
            .any(|held| held.suit == led);
        if still_holds_led {
            return Err(GameError::SuitNotFollowed {
                seat,
                led,
                played: card,
            });
        }
        Ok(())
    }

    fn declare_winners(&mut self) -> MatchOutcome {
        let winners = self.scores.winners();
        let joint = winners.len() > 1;
        broadcast(&mut self.players, None, |seat, player| {
            player.notify_match_result(winners.contains(&seat), joint)
        });
        event!(
            target: "ohhell_core::match",
            Level::INFO,
            winners = ?winners,
            joint,
            scores = ?self.scores.standings(),
            "match finished"
        );
        MatchOutcome {
            winners,
            joint,
            scores: self.scores.standings().to_vec(),
            rounds: self.rounds.clone(),
        }
    }
}

/// Notifies every seat in index order, skipping `except`.
fn broadcast<P: Player>(players: &mut [P], except: Option<Seat>, mut notify: impl FnMut(Seat, &mut P)) {
    for (index, player) in players.iter_mut().enumerate() {
        let seat = Seat::new(index);
        if except != Some(seat) {
            notify(seat, player);
        }
    }
}
