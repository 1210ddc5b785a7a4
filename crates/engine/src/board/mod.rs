use std::fmt;

use crate::error::PlacementError;
use crate::types::*;

// Declare submodules
pub mod moves;
pub mod state;
pub mod threats;
pub mod validation;

pub use state::PendingMove;

/// 8x8 grid of optional pieces, indexed `[file][rank]`.
///
/// The board is the only place a piece lives: a piece that no cell holds
/// has been captured. The owner mutates it; the rule queries only borrow it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<Piece>; 8]; 8],
    next_id: u8,
}

impl Board {
    pub fn empty() -> Self {
        Self {
            cells: [[None; 8]; 8],
            next_id: 0,
        }
    }

    /// The standard 32-piece starting layout.
    pub fn standard() -> Self {
        let mut board = Self::empty();
        board.setup_starting_position();
        board
    }

    fn setup_starting_position(&mut self) {
        const BACK_RANK: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        for color in [Color::White, Color::Black] {
            let back = if color == Color::White { 0 } else { 7 };
            for (file, kind) in BACK_RANK.iter().enumerate() {
                self.place(Square::new(file as u8, back), *kind, color);
            }
            for file in 0..8 {
                self.place(Square::new(file, color.home_rank()), PieceKind::Pawn, color);
            }
        }
    }

    /// Create a fresh piece on `square`, replacing whatever was there.
    pub fn place(&mut self, square: Square, kind: PieceKind, color: Color) -> PieceId {
        let id = PieceId(self.next_id);
        self.next_id += 1;
        self.set_piece(square, Some(Piece::new(id, kind, color)));
        id
    }

    // Basic board operations
    pub fn get_piece(&self, square: Square) -> Option<Piece> {
        self.cells[square.file() as usize][square.rank() as usize]
    }

    pub fn set_piece(&mut self, square: Square, piece: Option<Piece>) {
        self.cells[square.file() as usize][square.rank() as usize] = piece;
    }

    pub fn is_empty(&self, square: Square) -> bool {
        self.get_piece(square).is_none()
    }

    /// Every occupied cell, file-major (a1, a2, ... h8).
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        (0..8u8).flat_map(move |file| {
            (0..8u8).filter_map(move |rank| {
                self.cells[file as usize][rank as usize].map(|piece| (Square::new(file, rank), piece))
            })
        })
    }

    /// Build a board from the piece-placement field of a FEN string.
    pub fn from_placement(placement: &str) -> Result<Self, PlacementError> {
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(PlacementError::RankCount(ranks.len()));
        }

        let mut board = Self::empty();
        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - rank_idx as u8; // FEN starts from rank 8, we start from rank 0
            let mut file = 0u8;

            for ch in rank_str.chars() {
                if let Some(skip) = ch.to_digit(10) {
                    file += skip as u8;
                    if file > 8 {
                        return Err(PlacementError::Overfull(rank + 1));
                    }
                } else {
                    if file >= 8 {
                        return Err(PlacementError::Overfull(rank + 1));
                    }

                    let (kind, color) = char_to_piece(ch)?;
                    let square = Square::new(file, rank);
                    let id = board.place(square, kind, color);
                    if kind == PieceKind::Pawn && rank != color.home_rank() {
                        board.set_piece(
                            square,
                            Some(Piece {
                                has_moved: true,
                                ..Piece::new(id, kind, color)
                            }),
                        );
                    }
                    file += 1;
                }
            }

            if file != 8 {
                return Err(PlacementError::Incomplete(rank + 1));
            }
        }

        Ok(board)
    }
}

fn char_to_piece(ch: char) -> Result<(PieceKind, Color), PlacementError> {
    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return Err(PlacementError::UnknownPiece(ch)),
    };

    let color = if ch.is_uppercase() { Color::White } else { Color::Black };
    Ok((kind, color))
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            for file in 0..8 {
                if file > 0 {
                    f.write_str(" ")?;
                }
                match self.get_piece(Square::new(file, rank)) {
                    Some(piece) => write!(f, "{}", piece.symbol())?,
                    None => f.write_str(".")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_layout_has_32_distinct_pieces() {
        let board = Board::standard();
        let pieces: Vec<_> = board.pieces().collect();
        assert_eq!(pieces.len(), 32);

        let mut ids: Vec<_> = pieces.iter().map(|(_, p)| p.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 32);

        let e1 = board.get_piece(Square::new(4, 0)).unwrap();
        assert_eq!((e1.kind, e1.color), (PieceKind::King, Color::White));
        let d8 = board.get_piece(Square::new(3, 7)).unwrap();
        assert_eq!((d8.kind, d8.color), (PieceKind::Queen, Color::Black));

        // The two rooks on each side are different pieces.
        let a1 = board.get_piece(Square::new(0, 0)).unwrap();
        let h1 = board.get_piece(Square::new(7, 0)).unwrap();
        assert!(!a1.is_same(&h1));
    }

    #[test]
    fn placement_matches_standard_layout() {
        let parsed = Board::from_placement("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR").unwrap();
        let standard = Board::standard();
        for square in Square::all() {
            let a = parsed.get_piece(square).map(|p| (p.kind, p.color, p.has_moved));
            let b = standard.get_piece(square).map(|p| (p.kind, p.color, p.has_moved));
            assert_eq!(a, b, "mismatch on {}", square);
        }
    }

    #[test]
    fn advanced_pawns_count_as_moved() {
        let board = Board::from_placement("4k3/8/8/8/4P3/8/3P4/4K3").unwrap();
        assert!(board.get_piece(Square::new(4, 3)).unwrap().has_moved);
        assert!(!board.get_piece(Square::new(3, 1)).unwrap().has_moved);
    }

    #[test]
    fn placement_errors() {
        assert_eq!(Board::from_placement("8/8/8"), Err(PlacementError::RankCount(3)));
        assert_eq!(
            Board::from_placement("9/8/8/8/8/8/8/8"),
            Err(PlacementError::Overfull(8))
        );
        assert_eq!(
            Board::from_placement("7/8/8/8/8/8/8/8"),
            Err(PlacementError::Incomplete(8))
        );
        assert_eq!(
            Board::from_placement("8/8/8/8/8/8/8/7X"),
            Err(PlacementError::UnknownPiece('X'))
        );
    }

    #[test]
    fn renders_rank_eight_first() {
        let text = Board::standard().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "♜ ♞ ♝ ♛ ♚ ♝ ♞ ♜");
        assert_eq!(lines[4], ". . . . . . . .");
        assert_eq!(lines[7], "♖ ♘ ♗ ♕ ♔ ♗ ♘ ♖");
    }
}
