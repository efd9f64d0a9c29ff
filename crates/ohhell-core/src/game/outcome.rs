use crate::model::card::Card;
use crate::model::round::RoundState;
use crate::model::seat::Seat;
use serde::Serialize;

/// What happened in one completed round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundSummary {
    pub cards_per_player: usize,
    pub dealer: Seat,
    pub trump: Card,
    pub bids: Vec<u32>,
    pub tricks_won: Vec<u32>,
    pub round_scores: Vec<u32>,
}

impl RoundSummary {
    pub(crate) fn capture(
        round: &RoundState,
        dealer: Seat,
        trump: Card,
        round_scores: Vec<u32>,
    ) -> Self {
        Self {
            cards_per_player: round.cards_per_player(),
            dealer,
            trump,
            bids: round.bids(),
            tricks_won: round.tricks_won().to_vec(),
            round_scores,
        }
    }

    pub fn matched_bids(&self) -> impl Iterator<Item = Seat> + '_ {
        self.bids
            .iter()
            .zip(&self.tricks_won)
            .enumerate()
            .filter(|(_, (bid, won))| bid == won)
            .map(|(index, _)| Seat::new(index))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchOutcome {
    pub winners: Vec<Seat>,
    pub joint: bool,
    pub scores: Vec<u32>,
    pub rounds: Vec<RoundSummary>,
}

impl MatchOutcome {
    pub fn is_winner(&self, seat: Seat) -> bool {
        self.winners.contains(&seat)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::{MatchOutcome, RoundSummary};
    use crate::model::card::Card;
    use crate::model::rank::Rank;
    use crate::model::seat::Seat;
    use crate::model::suit::Suit;

    fn sample_round() -> RoundSummary {
        RoundSummary {
            cards_per_player: 2,
            dealer: Seat(0),
            trump: Card::new(Rank::Ace, Suit::Spades),
            bids: vec![1, 0, 0],
            tricks_won: vec![1, 1, 0],
            round_scores: vec![11, 1, 10],
        }
    }

    #[test]
    fn matched_bids_lists_seats() {
        let round = sample_round();
        assert_eq!(round.matched_bids().collect::<Vec<_>>(), vec![Seat(0), Seat(2)]);
    }

    #[test]
    fn outcome_serializes_seats_as_indices() {
        let outcome = MatchOutcome {
            winners: vec![Seat(0), Seat(2)],
            joint: true,
            scores: vec![11, 1, 11],
            rounds: vec![sample_round()],
        };
        let json = outcome.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["joint"], serde_json::json!(true));
        assert_eq!(value["winners"], serde_json::json!([0, 2]));
        assert_eq!(value["rounds"][0]["trump"]["suit"], serde_json::json!("Spades"));
        assert!(outcome.is_winner(Seat(2)));
        assert!(!outcome.is_winner(Seat(1)));
    }
}
