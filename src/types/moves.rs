use super::{PieceType, Square};

/// Represents a chess move containing the from and to squares, as well as flags for special moves.
/// The information encoded as a 16-bit integer, 6 bits for the from/to square and 4 bits for the flags.
///
/// See [Encoding Moves](https://www.chessprogramming.org/Encoding_Moves) for more information.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Move(u16);

/// Represents a typed enumeration of move kinds, which is the 4-bit part of the encoded bit move.
///
/// See [From-To Based](https://www.chessprogramming.org/Encoding_Moves#From-To_Based) for more information.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[rustfmt::skip]
pub enum MoveKind {
    Normal            = 0b0000,
    DoublePush        = 0b0001,
    Castling          = 0b0010,

    Capture           = 0b0100,
    EnPassant         = 0b0101,

    PromotionN        = 0b1000,
    PromotionB        = 0b1001,
    PromotionR        = 0b1010,
    PromotionQ        = 0b1011,

    PromotionCaptureN = 0b1100,
    PromotionCaptureB = 0b1101,
    PromotionCaptureR = 0b1110,
    PromotionCaptureQ = 0b1111,
}

impl MoveKind {
    pub const PROMOTIONS: [Self; 4] = [Self::PromotionQ, Self::PromotionR, Self::PromotionB, Self::PromotionN];

    #[rustfmt::skip]
    pub const PROMOTION_CAPTURES: [Self; 4] =
        [Self::PromotionCaptureQ, Self::PromotionCaptureR, Self::PromotionCaptureB, Self::PromotionCaptureN];

    const fn from_bits(bits: u8) -> Self {
        debug_assert!(bits != 0b0011 && bits != 0b0110 && bits != 0b0111);

        unsafe { std::mem::transmute(bits) }
    }
}

impl Move {
    pub const fn new(from: Square, to: Square, kind: MoveKind) -> Self {
        Self(from as u16 | ((to as u16) << 6) | ((kind as u16) << 12))
    }

    pub const fn from(self) -> Square {
        Square::new((self.0 & 0b0000_0000_0011_1111) as u8)
    }

    pub const fn to(self) -> Square {
        Square::new(((self.0 & 0b0000_1111_1100_0000) >> 6) as u8)
    }

    pub const fn kind(self) -> MoveKind {
        MoveKind::from_bits((self.0 >> 12) as u8)
    }

    pub const fn is_capture(self) -> bool {
        (self.0 >> 14) & 1 != 0
    }

    pub const fn is_promotion(self) -> bool {
        (self.0 >> 15) != 0
    }

    pub const fn is_en_passant(self) -> bool {
        matches!(self.kind(), MoveKind::EnPassant)
    }

    pub const fn is_castling(self) -> bool {
        matches!(self.kind(), MoveKind::Castling)
    }

    pub const fn is_double_push(self) -> bool {
        matches!(self.kind(), MoveKind::DoublePush)
    }

    pub const fn promotion_piece(self) -> Option<PieceType> {
        match self.kind() {
            MoveKind::PromotionN | MoveKind::PromotionCaptureN => Some(PieceType::Knight),
            MoveKind::PromotionB | MoveKind::PromotionCaptureB => Some(PieceType::Bishop),
            MoveKind::PromotionR | MoveKind::PromotionCaptureR => Some(PieceType::Rook),
            MoveKind::PromotionQ | MoveKind::PromotionCaptureQ => Some(PieceType::Queen),
            _ => None,
        }
    }
}

impl std::fmt::Display for Move {
    /// Formats the move in long algebraic notation, e.g. `e2e4`, `e1g1` or `a7a8q`.
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut output = format!("{}{}", self.from(), self.to());

        if let Some(piece) = self.promotion_piece() {
            output.push(piece.symbol().to_ascii_lowercase());
        }

        f.pad(&output)
    }
}

impl std::fmt::Debug for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{self} ({:?})", self.kind())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_squares_and_kind() {
        let mv = Move::new(Square::B7, Square::A8, MoveKind::PromotionCaptureN);

        assert_eq!(mv.from(), Square::B7);
        assert_eq!(mv.to(), Square::A8);
        assert_eq!(mv.kind(), MoveKind::PromotionCaptureN);
        assert!(mv.is_capture());
        assert!(mv.is_promotion());
        assert_eq!(mv.promotion_piece(), Some(PieceType::Knight));
        assert_eq!(mv.to_string(), "b7a8n");
    }

    #[test]
    fn special_kinds() {
        let ep = Move::new(Square::E5, Square::D6, MoveKind::EnPassant);
        assert!(ep.is_capture() && ep.is_en_passant() && !ep.is_promotion());

        let castle = Move::new(Square::E1, Square::G1, MoveKind::Castling);
        assert!(castle.is_castling() && !castle.is_capture());
        assert_eq!(castle.to_string(), "e1g1");

        let push = Move::new(Square::E2, Square::E4, MoveKind::DoublePush);
        assert!(push.is_double_push());
        assert_eq!(format!("{push:>6}"), "  e2e4");
    }
}
