use crate::model::round::RoundState;
use crate::model::seat::Seat;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreBoard {
    totals: Vec<u32>,
}

impl ScoreBoard {
    pub fn new(seats: usize) -> Self {
        Self {
            totals: vec![0; seats],
        }
    }

    pub fn add(&mut self, seat: Seat, points: u32) {
        self.totals[seat.index()] += points;
    }

    #[cfg(test)]
    pub(crate) fn set_totals(&mut self, totals: Vec<u32>) {
        self.totals = totals;
    }

    pub fn score(&self, seat: Seat) -> u32 {
        self.totals[seat.index()]
    }

    pub fn standings(&self) -> &[u32] {
        &self.totals
    }

    /// Adds a finished round to the totals and returns the round's scores.
    pub fn apply_round(&mut self, round: &RoundState) -> Vec<u32> {
        let round_scores = round.round_scores();
        for (total, points) in self.totals.iter_mut().zip(&round_scores) {
            *total += points;
        }
        round_scores
    }

    /// Every seat sharing the highest total.
    pub fn winners(&self) -> Vec<Seat> {
        let Some(best) = self.totals.iter().copied().max() else {
            return Vec::new();
        };
        self.totals
            .iter()
            .enumerate()
            .filter(|(_, total)| **total == best)
            .map(|(index, _)| Seat::new(index))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::ScoreBoard;
    use crate::model::round::RoundState;
    use crate::model::seat::Seat;

    #[test]
    fn scoreboard_accumulates_points() {
        let mut board = ScoreBoard::new(3);
        board.add(Seat(1), 13);
        board.add(Seat(1), 2);
        assert_eq!(board.score(Seat(1)), 15);
        assert_eq!(board.score(Seat(0)), 0);
    }

    #[test]
    fn apply_round_returns_round_scores() {
        let mut board = ScoreBoard::new(2);
        board.set_totals(vec![5, 7]);
        let mut round = RoundState::new(2, 1);
        round.record_bid(Seat(0), 1);
        round.record_bid(Seat(1), 1);
        round.record_trick(Seat(0));
        assert_eq!(board.apply_round(&round), vec![11, 0]);
        assert_eq!(board.standings(), &[16, 7]);
    }

    #[test]
    fn winners_include_every_tied_seat() {
        let mut board = ScoreBoard::new(4);
        board.set_totals(vec![30, 42, 17, 42]);
        assert_eq!(board.winners(), vec![Seat(1), Seat(3)]);

        board.set_totals(vec![50, 42, 17, 42]);
        assert_eq!(board.winners(), vec![Seat(0)]);
    }
}
