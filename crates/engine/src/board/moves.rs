use super::Board;
use crate::types::*;

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
    (1, 2),
    (2, 1),
];

const DIAGONALS: [(i8, i8); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];
const ORTHOGONALS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

impl Board {
    /// Destinations the occupant of `square` can reach by its movement
    /// rules and the current occupancy. Does not look at whose turn it is
    /// or at the safety of the mover's own king.
    pub fn pseudo_legal_moves(&self, square: Square) -> Vec<Square> {
        let Some(piece) = self.get_piece(square) else {
            return Vec::new();
        };

        match piece.kind {
            PieceKind::Pawn => self.pawn_moves(square, piece.color, piece.has_moved),
            PieceKind::Knight => self.knight_moves(square, piece.color),
            PieceKind::Bishop => self.bishop_moves(square, piece.color),
            PieceKind::Rook => self.rook_moves(square, piece.color),
            PieceKind::Queen => self.queen_moves(square, piece.color),
            PieceKind::King => self.king_moves(square, piece.color),
        }
    }

    /// Empty or enemy-occupied; an ally blocks.
    fn open_to(&self, square: Square, color: Color) -> bool {
        self.get_piece(square).map_or(true, |occupant| occupant.color != color)
    }

    pub fn knight_moves(&self, from: Square, color: Color) -> Vec<Square> {
        KNIGHT_OFFSETS
            .iter()
            .filter_map(|&(df, dr)| from.offset(df, dr))
            .filter(|&to| self.open_to(to, color))
            .collect()
    }

    pub fn bishop_moves(&self, from: Square, color: Color) -> Vec<Square> {
        let mut moves = Vec::new();
        for direction in DIAGONALS {
            self.cast_ray(from, direction, color, &mut moves);
        }
        moves
    }

    pub fn rook_moves(&self, from: Square, color: Color) -> Vec<Square> {
        let mut moves = Vec::new();
        for direction in ORTHOGONALS {
            self.cast_ray(from, direction, color, &mut moves);
        }
        moves
    }

    pub fn queen_moves(&self, from: Square, color: Color) -> Vec<Square> {
        let mut moves = self.bishop_moves(from, color);
        moves.extend(self.rook_moves(from, color));
        moves
    }

    // Walk outward until the edge or the first occupied square. An enemy
    // there is included (capture), an ally is not.
    fn cast_ray(&self, from: Square, (df, dr): (i8, i8), color: Color, moves: &mut Vec<Square>) {
        let mut current = from;
        while let Some(next) = current.offset(df, dr) {
            match self.get_piece(next) {
                None => moves.push(next),
                Some(occupant) => {
                    if occupant.color != color {
                        moves.push(next);
                    }
                    break;
                }
            }
            current = next;
        }
    }

    pub fn king_moves(&self, from: Square, color: Color) -> Vec<Square> {
        let mut moves = Vec::with_capacity(8);
        for df in -1..=1 {
            for dr in -1..=1 {
                if df == 0 && dr == 0 {
                    continue;
                }
                if let Some(to) = from.offset(df, dr) {
                    if self.open_to(to, color) {
                        moves.push(to);
                    }
                }
            }
        }
        moves
    }

    /// Pushes and diagonal captures. An empty diagonal is never offered,
    /// so pawns do not register as guarding empty squares.
    pub fn pawn_moves(&self, from: Square, color: Color, has_moved: bool) -> Vec<Square> {
        let mut moves = Vec::with_capacity(4);
        if from.rank() == color.end_rank() {
            return moves;
        }

        let forward = color.forward();
        if let Some(one) = from.offset(0, forward) {
            if self.is_empty(one) {
                moves.push(one);

                if from.rank() == color.home_rank() && !has_moved {
                    if let Some(two) = from.offset(0, 2 * forward) {
                        if self.is_empty(two) {
                            moves.push(two);
                        }
                    }
                }
            }
        }

        for df in [-1, 1] {
            if let Some(diagonal) = from.offset(df, forward) {
                if let Some(occupant) = self.get_piece(diagonal) {
                    if occupant.color != color {
                        moves.push(diagonal);
                    }
                }
            }
        }

        moves
    }
}
