use super::Board;
use crate::types::*;

impl Board {
    /// True if any enemy piece reaches the king of `color`.
    pub fn in_check(&self, color: Color) -> bool {
        let Some((king_square, _)) = self.king_of(color) else {
            log::warn!("no {} king on the board", color);
            return false;
        };

        self.threats_to(king_square)
            .iter()
            .any(|piece| piece.color != color)
    }

    /// True if every square the king of `color` could step to is reached by
    /// an enemy piece. A king with nowhere to step is trapped.
    pub fn king_trapped(&self, color: Color) -> bool {
        let Some((king_square, _)) = self.king_of(color) else {
            log::warn!("no {} king on the board", color);
            return false;
        };

        let candidates = self.king_moves(king_square, color);

        // Lift the king off so it does not shadow a slider's ray across the
        // squares next to it.
        let mut without_king = self.clone();
        without_king.set_piece(king_square, None);

        candidates
            .iter()
            .all(|&escape| without_king.is_threatened_by(escape, color.opposite()))
    }

    /// Whether a piece of the victim's side other than the victim can step
    /// between `attacker` and `victim`. Knights, pawns and kings cannot be
    /// interposed.
    pub fn can_be_blocked(&self, attacker: &Piece, victim: &Piece) -> bool {
        if !attacker.kind.is_slider() {
            return false;
        }

        let (Some(from), Some(to)) = (self.locate(attacker.id), self.locate(victim.id)) else {
            log::warn!("can_be_blocked: attacker or victim is not on the board");
            return true;
        };

        if !self.threats_to(to).iter().any(|piece| piece.is_same(attacker)) {
            log::warn!(
                "can_be_blocked: {} {} on {} does not threaten {} on {}",
                attacker.color,
                attacker.kind,
                from,
                victim.kind,
                to
            );
            return true;
        }

        let df = (to.file() as i8 - from.file() as i8).signum();
        let dr = (to.rank() as i8 - from.rank() as i8).signum();

        let mut between = Vec::new();
        let mut current = from;
        loop {
            let Some(next) = current.offset(df, dr) else {
                log::warn!("can_be_blocked: path from {} missed {}", from, to);
                return true;
            };
            if next == to {
                break;
            }
            between.push(next);
            current = next;
        }

        between.iter().any(|&square| {
            self.threats_to(square)
                .iter()
                .any(|piece| !piece.is_same(victim) && piece.color == victim.color)
        })
    }

    /// Checkmate for `color`: in check, no safe king step, and at least one
    /// checking piece that can be neither blocked nor captured.
    ///
    /// Each attacker is judged on its own, so a double check is not proven
    /// to need two separate answers.
    pub fn is_checkmate(&self, color: Color) -> bool {
        if !self.in_check(color) {
            return false;
        }
        if !self.king_trapped(color) {
            log::debug!("{} is in check but the king can step away", color);
            return false;
        }

        let Some((king_square, king)) = self.king_of(color) else {
            return false;
        };

        let attackers: Vec<Piece> = self
            .threats_to(king_square)
            .into_iter()
            .filter(|piece| piece.color != color)
            .collect();

        for attacker in &attackers {
            let blockable = self.can_be_blocked(attacker, &king);
            let capturable = self
                .locate(attacker.id)
                .is_some_and(|square| self.is_threatened_by(square, color));

            log::debug!(
                "{} {} checking {}: blockable={} capturable={}",
                attacker.color,
                attacker.kind,
                color,
                blockable,
                capturable
            );

            if !blockable && !capturable {
                return true;
            }
        }

        false
    }

    /// Check/mate state of `color`, for turn-loop decisions.
    pub fn status(&self, color: Color) -> GameStatus {
        if self.is_checkmate(color) {
            GameStatus::Checkmate(color)
        } else if self.in_check(color) {
            GameStatus::Check(color)
        } else {
            GameStatus::InProgress
        }
    }
}
