//! Chess rules engine: move generation, threat and check analysis, and
//! long algebraic move notation over an 8x8 board.

pub mod board;
pub mod error;
pub mod game;
pub mod logger;
pub mod notation;
pub mod types;

pub use board::*;
pub use error::{MoveError, PlacementError};
pub use game::{Game, MoveOutcome};
pub use logger::{ChessLogger, LoggerConfig};
pub use notation::{decode, encode_result, DecodeError, DecodedMove};
pub use types::*;
