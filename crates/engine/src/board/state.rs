use super::Board;
use crate::types::*;

/// A relocation written to the board but not yet final.
///
/// Produced by [`Board::stage_move`]; consumed by exactly one of
/// [`Board::commit`] or [`Board::rollback`], so the two cell writes and the
/// movement flag are always applied or undone together.
#[derive(Debug)]
#[must_use = "a staged move must be committed or rolled back"]
pub struct PendingMove {
    from: Square,
    to: Square,
    piece: Piece,
    displaced: Option<Piece>,
}

impl PendingMove {
    pub fn piece(&self) -> Piece {
        self.piece
    }

    /// The piece that stood on the destination, if any.
    pub fn displaced(&self) -> Option<Piece> {
        self.displaced
    }
}

impl Board {
    /// Move the occupant of `from` onto `to`, remembering what was there.
    /// Returns `None` if `from` is empty.
    pub fn stage_move(&mut self, from: Square, to: Square) -> Option<PendingMove> {
        let piece = self.get_piece(from)?;
        let displaced = self.get_piece(to);

        self.set_piece(to, Some(piece));
        self.set_piece(from, None);

        Some(PendingMove {
            from,
            to,
            piece,
            displaced,
        })
    }

    /// Put both cells back exactly as they were before staging.
    pub fn rollback(&mut self, pending: PendingMove) {
        self.set_piece(pending.to, pending.displaced);
        self.set_piece(pending.from, Some(pending.piece));
    }

    /// Finalise the move: the piece is marked as having moved. Returns the
    /// captured piece, if any.
    pub fn commit(&mut self, pending: PendingMove) -> Option<Piece> {
        let moved = Piece {
            has_moved: true,
            ..pending.piece
        };
        self.set_piece(pending.to, Some(moved));
        pending.displaced
    }

    /// Stage a move, evaluate `probe` on the resulting position, then undo it.
    pub fn with_move<T>(&mut self, from: Square, to: Square, probe: impl FnOnce(&Board) -> T) -> Option<T> {
        let pending = self.stage_move(from, to)?;
        let result = probe(&*self);
        self.rollback(pending);
        Some(result)
    }
}
