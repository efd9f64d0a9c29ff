/// Deterministic seatings: agent `i` sits at seat `(i + shift) % n`, one
/// shift per match, so every agent takes every seat over `n` matches.
pub struct SeatRotations {
    rotations: Vec<Vec<usize>>,
}

impl SeatRotations {
    pub fn new(agents: usize, rotate: bool) -> Self {
        let count = if rotate { agents } else { 1 };
        let rotations = (0..count)
            .map(|shift| {
                (0..agents)
                    .map(|seat| (seat + agents - shift) % agents)
                    .collect()
            })
            .collect();
        Self { rotations }
    }

    /// Agent index for each seat in the given match.
    pub fn for_match(&self, match_index: usize) -> &[usize] {
        &self.rotations[match_index % self.rotations.len()]
    }

    pub fn len(&self) -> usize {
        self.rotations.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_match_keeps_config_order() {
        let rotations = SeatRotations::new(4, true);
        assert_eq!(rotations.for_match(0), &[0, 1, 2, 3]);
        assert_eq!(rotations.for_match(1), &[3, 0, 1, 2]);
        assert_eq!(rotations.for_match(4), &[0, 1, 2, 3]);
    }

    #[test]
    fn every_agent_visits_every_seat() {
        let rotations = SeatRotations::new(3, true);
        assert_eq!(rotations.len(), 3);
        for agent in 0..3 {
            let mut seats: Vec<usize> = (0..3)
                .map(|m| {
                    rotations
                        .for_match(m)
                        .iter()
                        .position(|a| *a == agent)
                        .unwrap()
                })
                .collect();
            seats.sort_unstable();
            assert_eq!(seats, vec![0, 1, 2]);
        }
    }

    #[test]
    fn fixed_seating_never_moves() {
        let rotations = SeatRotations::new(5, false);
        assert_eq!(rotations.len(), 1);
        assert_eq!(rotations.for_match(7), &[0, 1, 2, 3, 4]);
    }
}
