use crate::model::card::Card;
use crate::model::deck::DeckError;
use crate::model::seat::Seat;
use crate::model::suit::Suit;
use crate::model::trick::TrickError;
use thiserror::Error;

/// Who is to blame for a failed match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Rejected before any round started.
    Configuration,
    /// A seat broke a rule of the game.
    PlayerFault,
    /// Engine bookkeeping went wrong; unreachable under correct play.
    Internal,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("unsupported number of players: {found} (expected {min}..={max})")]
    SeatCount {
        found: usize,
        min: usize,
        max: usize,
    },
    #[error(transparent)]
    Deck(#[from] DeckError),
    #[error("{seat} made an invalid bid: {bid}")]
    InvalidBid { seat: Seat, bid: i32 },
    #[error("total bid {total} cannot equal the number of tricks ({tricks})")]
    BidTotalMatchesTricks { total: u64, tricks: usize },
    #[error("{seat} played {played} but still holds {led}; must follow suit")]
    SuitNotFollowed { seat: Seat, led: Suit, played: Card },
    #[error("round should have produced {expected} tricks but recorded {actual}")]
    TrickCountMismatch { expected: usize, actual: u32 },
    #[error(transparent)]
    Trick(#[from] TrickError),
}

impl GameError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GameError::SeatCount { .. } => ErrorKind::Configuration,
            GameError::InvalidBid { .. }
            | GameError::BidTotalMatchesTricks { .. }
            | GameError::SuitNotFollowed { .. } => ErrorKind::PlayerFault,
            GameError::Deck(_) | GameError::TrickCountMismatch { .. } | GameError::Trick(_) => {
                ErrorKind::Internal
            }
        }
    }

    pub fn is_player_fault(&self) -> bool {
        self.kind() == ErrorKind::PlayerFault
    }
}
