use super::Board;
use crate::types::{Flank, Move, PieceType};

/// No legal move in the current position is written as the given string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("illegal move string '{0}'")]
pub struct ParseMoveError(pub String);

impl Board {
    /// Finds the legal move written in long algebraic notation, e.g. `e2e4` or `e7e8q`.
    pub fn parse_move(&self, text: &str) -> Result<Move, ParseMoveError> {
        self.legal_moves()
            .iter()
            .copied()
            .find(|mv| mv.to_string() == text)
            .ok_or_else(|| ParseMoveError(text.to_string()))
    }

    /// Parses a move in long algebraic notation and plays it.
    pub fn make_move_str(&mut self, text: &str) -> Result<(), ParseMoveError> {
        let mv = self.parse_move(text)?;
        self.make_move(mv);
        Ok(())
    }

    /// Renders a move of the current position in a simplified standard algebraic notation.
    ///
    /// Moves of the same piece type to the same square are not disambiguated, and
    /// check or mate is not annotated.
    pub fn to_san(&self, mv: Move) -> String {
        if mv.is_castling() {
            let flank = if mv.to().file() > mv.from().file() { Flank::Kingside } else { Flank::Queenside };
            return flank.san().to_string();
        }

        let mut san = String::new();
        let piece = self.piece_on(mv.from());

        if let Some(pt) = piece.filter(|&pt| pt != PieceType::Pawn) {
            san.push(pt.symbol());
        }

        if mv.is_capture() {
            if piece == Some(PieceType::Pawn) {
                san.push((b'a' + mv.from().file()) as char);
            }
            san.push('x');
        }

        san.push_str(&mv.to().to_string());

        if let Some(promotion) = mv.promotion_piece() {
            san.push(promotion.symbol().to_ascii_lowercase());
        }

        san
    }
}

impl Flank {
    /// The castling notation for this flank.
    pub const fn san(self) -> &'static str {
        match self {
            Self::Kingside => "O-O",
            Self::Queenside => "O-O-O",
        }
    }
}
