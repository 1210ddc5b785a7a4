use super::Board;
use crate::types::*;

impl Board {
    /// Where `piece` currently stands, `None` once it has been captured.
    pub fn locate(&self, piece: PieceId) -> Option<Square> {
        self.pieces()
            .find(|(_, occupant)| occupant.id == piece)
            .map(|(square, _)| square)
    }

    /// The king of `color`. Each side is expected to have exactly one.
    pub fn king_of(&self, color: Color) -> Option<(Square, Piece)> {
        self.pieces()
            .find(|(_, piece)| piece.kind == PieceKind::King && piece.color == color)
    }

    /// Every piece, of either color, whose pseudo-legal moves reach `target`.
    ///
    /// This scans the whole board and generates moves for each occupant, so
    /// it dominates the cost of check and mate detection.
    pub fn threats_to(&self, target: Square) -> Vec<Piece> {
        self.pieces()
            .filter(|&(square, _)| self.pseudo_legal_moves(square).contains(&target))
            .map(|(_, piece)| piece)
            .collect()
    }

    /// Whether any piece of `color` reaches `target`.
    pub fn is_threatened_by(&self, target: Square, color: Color) -> bool {
        self.threats_to(target).iter().any(|piece| piece.color == color)
    }
}
