//! Error types for chess-rules

use thiserror::Error;

use crate::notation::DecodeError;
use crate::types::{PieceKind, Square};

/// Why a single move attempt was rejected. Every variant is recoverable:
/// the board is untouched (or rolled back) when one of these is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("Could not decode input - use long algebraic notation.")]
    InvalidNotation(#[source] DecodeError),

    #[error("There is no piece at {0} to move!")]
    NoPieceAtSource(Square),

    #[error("That's not your piece!")]
    NotYourPiece,

    #[error("There's no {expected} at that space. Did you mean to move the {found}?")]
    PieceTypeMismatch { expected: PieceKind, found: PieceKind },

    #[error("That piece can't move like that.")]
    IllegalMove,

    #[error("You can't allow your own king to be in check!")]
    SelfCheck,

    #[error("The game is already over.")]
    GameOver,
}

/// Failure to read a FEN piece-placement field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    #[error("Invalid piece placement: must have 8 ranks, found {0}")]
    RankCount(usize),

    #[error("Too many squares in rank {0}")]
    Overfull(u8),

    #[error("Incomplete rank {0}")]
    Incomplete(u8),

    #[error("Unknown piece: {0}")]
    UnknownPiece(char),
}

pub type Result<T> = std::result::Result<T, MoveError>;
