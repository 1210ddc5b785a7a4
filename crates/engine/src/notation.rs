//! Long algebraic move notation: `[Piece]<from>{-|x}<to>`, e.g. `Nd3-e1`, `a2-a4`, `Rh1xh8`.

use thiserror::Error;

use crate::types::{Color, PieceKind, Square};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("empty move")]
    Empty,

    #[error("unknown piece letter '{0}'")]
    UnknownPiece(char),

    #[error("move needs a '-' or 'x' between the squares")]
    MissingSeparator,

    #[error("'{0}' is not a square")]
    BadSquare(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedMove {
    pub kind: PieceKind,
    pub from: Square,
    pub to: Square,
}

/// Parse a long algebraic move. The separator is taken at face value: an
/// `x` does not have to match an actual capture on the board.
pub fn decode(text: &str) -> Result<DecodedMove, DecodeError> {
    let first = text.chars().next().ok_or(DecodeError::Empty)?;

    let (kind, body) = if first.is_ascii_uppercase() {
        let kind = PieceKind::from_letter(first).ok_or(DecodeError::UnknownPiece(first))?;
        (kind, &text[1..])
    } else {
        (PieceKind::Pawn, text)
    };

    let (from, to) = body
        .split_once('-')
        .or_else(|| body.split_once('x'))
        .ok_or(DecodeError::MissingSeparator)?;

    Ok(DecodedMove {
        kind,
        from: parse_square(from)?,
        to: parse_square(to)?,
    })
}

fn parse_square(text: &str) -> Result<Square, DecodeError> {
    Square::from_algebraic(text).ok_or_else(|| DecodeError::BadSquare(text.to_string()))
}

/// Build the annotated notation reported back for a committed move.
///
/// Captures rewrite the separator to `x`; mate appends `#`, a newline and
/// the result token for `mover`; a plain check appends `+`.
pub fn encode_result(original: &str, captured: bool, check: bool, mate: bool, mover: Color) -> String {
    let mut notation = if captured {
        original.replacen('-', "x", 1)
    } else {
        original.to_string()
    };

    if mate {
        notation.push_str("#\n");
        notation.push_str(mover.win_token());
    } else if check {
        notation.push('+');
    }

    notation
}

/// Render a move the way `decode` reads it.
pub fn format_move(kind: PieceKind, from: Square, to: Square, capture: bool) -> String {
    let mut text = String::with_capacity(6);
    if let Some(letter) = kind.letter() {
        text.push(letter);
    }
    text.push_str(&from.to_string());
    text.push(if capture { 'x' } else { '-' });
    text.push_str(&to.to_string());
    text
}
