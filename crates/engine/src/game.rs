use crate::board::Board;
use crate::error::{MoveError, Result};
use crate::notation::{decode, encode_result};
use crate::types::*;

/// What a committed move produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The move text as reported back, with capture/check/mate annotation.
    pub notation: String,
    pub captured: Option<Piece>,
    /// State of the side that now has to move.
    pub status: GameStatus,
}

/// A board plus the two players in turn order.
///
/// `players[0]` is always the side to move; a successful move rotates them.
#[derive(Debug, Clone)]
pub struct Game {
    pub board: Board,
    players: [Player; 2],
    victor: Option<Player>,
}

impl Game {
    pub fn new(white_human: bool, black_human: bool) -> Self {
        Self::with_board(
            Board::standard(),
            [Player::new(Color::White, white_human), Player::new(Color::Black, black_human)],
        )
    }

    /// Start from an arbitrary position; `players[0]` moves first.
    pub fn with_board(board: Board, players: [Player; 2]) -> Self {
        Self {
            board,
            players,
            victor: None,
        }
    }

    pub fn current_player(&self) -> Player {
        self.players[0]
    }

    pub fn opponent(&self) -> Player {
        self.players[1]
    }

    pub fn victor(&self) -> Option<Player> {
        self.victor
    }

    pub fn in_check(&self, color: Color) -> bool {
        self.board.in_check(color)
    }

    pub fn is_checkmate(&self, color: Color) -> bool {
        self.board.is_checkmate(color)
    }

    /// Check/mate state of the side to move.
    pub fn status(&self) -> GameStatus {
        self.board.status(self.current_player().color)
    }

    /// Destinations for the piece on `square` that do not leave its own
    /// king in check.
    pub fn legal_destinations(&mut self, square: Square) -> Vec<Square> {
        let Some(piece) = self.board.get_piece(square) else {
            return Vec::new();
        };

        self.board
            .pseudo_legal_moves(square)
            .into_iter()
            .filter(|&to| {
                self.board
                    .with_move(square, to, |b| !b.in_check(piece.color))
                    .unwrap_or(false)
            })
            .collect()
    }

    /// Validate and play `text` for the side to move.
    ///
    /// Every rejection happens before the board is touched, except a move
    /// into self-check, which is rolled back before returning.
    pub fn apply_move(&mut self, text: &str) -> Result<MoveOutcome> {
        if self.victor.is_some() {
            return Err(MoveError::GameOver);
        }

        let decoded = decode(text).map_err(MoveError::InvalidNotation)?;
        let mover = self.current_player();
        log::trace!("{} attempts {}", mover.color, text);

        let piece = self
            .board
            .get_piece(decoded.from)
            .ok_or(MoveError::NoPieceAtSource(decoded.from))?;

        if piece.color != mover.color {
            return Err(MoveError::NotYourPiece);
        }

        if piece.kind != decoded.kind {
            return Err(MoveError::PieceTypeMismatch {
                expected: decoded.kind,
                found: piece.kind,
            });
        }

        if !self.board.pseudo_legal_moves(decoded.from).contains(&decoded.to) {
            return Err(MoveError::IllegalMove);
        }

        let pending = self
            .board
            .stage_move(decoded.from, decoded.to)
            .ok_or(MoveError::NoPieceAtSource(decoded.from))?;

        if self.board.in_check(mover.color) {
            self.board.rollback(pending);
            return Err(MoveError::SelfCheck);
        }

        let captured = self.board.commit(pending);

        let opponent = self.opponent();
        let check = self.board.in_check(opponent.color);
        let mate = check && self.board.is_checkmate(opponent.color);
        if mate {
            self.victor = Some(mover);
            log::debug!("{} checkmates {}", mover.color, opponent.color);
        }

        let notation = encode_result(text, captured.is_some(), check, mate, mover.color);
        let status = if mate {
            GameStatus::Checkmate(opponent.color)
        } else if check {
            GameStatus::Check(opponent.color)
        } else {
            GameStatus::InProgress
        };

        self.players.rotate_left(1);

        Ok(MoveOutcome {
            notation,
            captured,
            status,
        })
    }

    /// Boundary form of [`Game::apply_move`]: `(true, notation)` or
    /// `(false, reason)`.
    pub fn make_move(&mut self, text: &str) -> (bool, String) {
        match self.apply_move(text) {
            Ok(outcome) => (true, outcome.notation),
            Err(err) => (false, err.to_string()),
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(true, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notation::DecodeError;

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    fn players() -> [Player; 2] {
        [Player::new(Color::White, true), Player::new(Color::Black, true)]
    }

    fn from(placement: &str) -> Game {
        Game::with_board(Board::from_placement(placement).unwrap(), players())
    }

    #[test]
    fn rejects_bad_notation() {
        let mut game = Game::default();
        assert_eq!(
            game.apply_move("e2e4"),
            Err(MoveError::InvalidNotation(DecodeError::MissingSeparator))
        );
    }

    #[test]
    fn rejects_empty_source() {
        let mut game = Game::default();
        assert_eq!(game.apply_move("e3-e4"), Err(MoveError::NoPieceAtSource(sq("e3"))));
    }

    #[test]
    fn rejects_opponents_piece() {
        let mut game = Game::default();
        assert_eq!(game.apply_move("e7-e5"), Err(MoveError::NotYourPiece));
    }

    #[test]
    fn rejects_wrong_piece_letter() {
        let mut game = Game::default();
        let err = game.apply_move("Be2-e4").unwrap_err();
        assert_eq!(
            err,
            MoveError::PieceTypeMismatch {
                expected: PieceKind::Bishop,
                found: PieceKind::Pawn
            }
        );
        assert!(err.to_string().contains("Did you mean to move the pawn?"));
    }

    #[test]
    fn rejects_unreachable_destination() {
        let mut game = Game::default();
        assert_eq!(game.apply_move("e2-e5"), Err(MoveError::IllegalMove));
        assert_eq!(game.apply_move("Nb1-d2"), Err(MoveError::IllegalMove));
    }

    #[test]
    fn failed_attempts_keep_the_turn() {
        let mut game = Game::default();
        let before = game.board.clone();
        assert!(game.apply_move("e2-e5").is_err());
        assert_eq!(game.current_player().color, Color::White);
        assert_eq!(game.board, before);
    }

    #[test]
    fn self_check_is_rolled_back() {
        // The e2 bishop is pinned against the king by the e8 rook.
        let mut game = from("4r2k/8/8/8/8/8/4B3/4K3");
        let before = game.board.clone();
        assert_eq!(game.apply_move("Be2-d3"), Err(MoveError::SelfCheck));
        assert_eq!(game.board, before);
        assert_eq!(game.current_player().color, Color::White);
    }

    #[test]
    fn king_cannot_walk_into_a_rook() {
        let mut game = from("3r3k/8/8/8/8/8/8/4K3");
        let before = game.board.clone();
        assert_eq!(game.apply_move("Ke1-d1"), Err(MoveError::SelfCheck));
        assert_eq!(game.board, before);
    }

    #[test]
    fn quiet_move_echoes_and_rotates() {
        let mut game = Game::default();
        let outcome = game.apply_move("Nb1-c3").unwrap();
        assert_eq!(outcome.notation, "Nb1-c3");
        assert_eq!(outcome.captured, None);
        assert_eq!(outcome.status, GameStatus::InProgress);
        assert_eq!(game.current_player().color, Color::Black);
        assert!(game.board.get_piece(sq("c3")).unwrap().has_moved);
    }

    #[test]
    fn capture_rewrites_separator() {
        let mut game = Game::default();
        for mv in ["e2-e4", "d7-d5"] {
            assert!(game.apply_move(mv).is_ok(), "{}", mv);
        }
        let outcome = game.apply_move("e4-d5").unwrap();
        assert_eq!(outcome.notation, "e4xd5");
        assert_eq!(outcome.captured.unwrap().kind, PieceKind::Pawn);
    }

    #[test]
    fn check_is_annotated() {
        let mut game = from("4k3/8/8/8/8/8/8/R3K3");
        let outcome = game.apply_move("Ra1-a8").unwrap();
        assert_eq!(outcome.notation, "Ra1-a8+");
        assert_eq!(outcome.status, GameStatus::Check(Color::Black));
        assert_eq!(game.status(), GameStatus::Check(Color::Black));
        assert!(game.victor().is_none());
    }

    #[test]
    fn mate_records_the_victor_and_ends_the_game() {
        let mut game = from("7k/R5pp/8/8/8/8/8/K7");
        let (ok, notation) = game.make_move("Ra7-a8");
        assert!(ok);
        assert_eq!(notation, "Ra7-a8#\n1-0");
        assert_eq!(game.victor().map(|p| p.color), Some(Color::White));
        assert!(game.is_checkmate(Color::Black));
        assert_eq!(game.apply_move("Kh8-g8"), Err(MoveError::GameOver));
    }

    #[test]
    fn boundary_reports_failures_as_text() {
        let mut game = Game::default();
        let (ok, message) = game.make_move("Ke1-e2");
        assert!(!ok);
        assert_eq!(message, "That piece can't move like that.");
    }

    #[test]
    fn legal_destinations_drop_self_checks() {
        let mut game = from("4r2k/8/8/8/8/8/4B3/4K3");
        assert!(game.legal_destinations(sq("e2")).is_empty());
        let mut king = game.legal_destinations(sq("e1"));
        king.sort();
        assert_eq!(king, vec![sq("d1"), sq("f1"), sq("d2"), sq("f2")]);
    }
}
