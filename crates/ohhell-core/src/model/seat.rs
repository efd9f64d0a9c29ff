use core::fmt;
use serde::{Deserialize, Serialize};

/// Positional index of a participant in the engine's ordered player list.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Seat(pub u8);

impl Seat {
    pub const fn new(index: usize) -> Self {
        Seat(index as u8)
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }

    pub const fn next(self, seats: usize) -> Seat {
        Seat::new((self.index() + 1) % seats)
    }

    /// Every seat of an `seats`-player table, in index order.
    pub fn all(seats: usize) -> impl Iterator<Item = Seat> {
        (0..seats).map(Seat::new)
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Seat {}", self.0)
    }
}

/// The active/dealer index. Advances one seat per action and wraps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rotation {
    active: Seat,
    seats: usize,
}

impl Rotation {
    pub fn new(start: Seat, seats: usize) -> Self {
        Self {
            active: Seat::new(start.index() % seats.max(1)),
            seats,
        }
    }

    pub const fn active(&self) -> Seat {
        self.active
    }

    pub const fn seats(&self) -> usize {
        self.seats
    }

    pub fn advance(&mut self) -> Seat {
        self.active = self.active.next(self.seats);
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::{Rotation, Seat};

    #[test]
    fn next_wraps_around() {
        assert_eq!(Seat(3).next(4), Seat(0));
        assert_eq!(Seat(1).next(4), Seat(2));
    }

    #[test]
    fn rotation_cycles_through_every_seat() {
        let mut rotation = Rotation::new(Seat(0), 3);
        let visited: Vec<_> = (0..4).map(|_| rotation.advance()).collect();
        assert_eq!(visited, vec![Seat(1), Seat(2), Seat(0), Seat(1)]);
    }

    #[test]
    fn rotation_start_is_normalized() {
        let rotation = Rotation::new(Seat(7), 4);
        assert_eq!(rotation.active(), Seat(3));
    }

    #[test]
    fn display_names_the_index() {
        assert_eq!(Seat(2).to_string(), "Seat 2");
        assert_eq!(Seat::all(3).collect::<Vec<_>>(), vec![Seat(0), Seat(1), Seat(2)]);
    }
}
