use super::{Bitboard, Color, Square};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Flank {
    Kingside,
    Queenside,
}

/// One of the four castling rights, keyed by side and flank.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
#[rustfmt::skip]
pub enum CastlingKind {
    WhiteKingside  = 0b0001,
    WhiteQueenside = 0b0010,
    BlackKingside  = 0b0100,
    BlackQueenside = 0b1000,
}

impl CastlingKind {
    #[rustfmt::skip]
    pub const ALL: [Self; 4] = [Self::WhiteKingside, Self::WhiteQueenside, Self::BlackKingside, Self::BlackQueenside];

    pub const fn new(color: Color, flank: Flank) -> Self {
        match (color, flank) {
            (Color::White, Flank::Kingside) => Self::WhiteKingside,
            (Color::White, Flank::Queenside) => Self::WhiteQueenside,
            (Color::Black, Flank::Kingside) => Self::BlackKingside,
            (Color::Black, Flank::Queenside) => Self::BlackQueenside,
        }
    }

    pub const fn color(self) -> Color {
        match self {
            Self::WhiteKingside | Self::WhiteQueenside => Color::White,
            Self::BlackKingside | Self::BlackQueenside => Color::Black,
        }
    }

    pub const fn flank(self) -> Flank {
        match self {
            Self::WhiteKingside | Self::BlackKingside => Flank::Kingside,
            Self::WhiteQueenside | Self::BlackQueenside => Flank::Queenside,
        }
    }

    /// Dense index in `0..4`, used to address the zobrist keys.
    pub const fn index(self) -> usize {
        (self as u8).trailing_zeros() as usize
    }

    pub const fn king_start(self) -> Square {
        match self.color() {
            Color::White => Square::E1,
            Color::Black => Square::E8,
        }
    }

    pub const fn landing_square(self) -> Square {
        match self {
            Self::WhiteKingside => Square::G1,
            Self::WhiteQueenside => Square::C1,
            Self::BlackKingside => Square::G8,
            Self::BlackQueenside => Square::C8,
        }
    }

    pub const fn rook_start(self) -> Square {
        match self {
            Self::WhiteKingside => Square::H1,
            Self::WhiteQueenside => Square::A1,
            Self::BlackKingside => Square::H8,
            Self::BlackQueenside => Square::A8,
        }
    }

    pub const fn rook_target(self) -> Square {
        match self {
            Self::WhiteKingside => Square::F1,
            Self::WhiteQueenside => Square::D1,
            Self::BlackKingside => Square::F8,
            Self::BlackQueenside => Square::D8,
        }
    }

    /// Squares strictly between the king and the rook, which must be empty.
    pub const fn path_mask(self) -> Bitboard {
        match self {
            Self::WhiteKingside => Bitboard(0x0000_0000_0000_0060),
            Self::WhiteQueenside => Bitboard(0x0000_0000_0000_000E),
            Self::BlackKingside => Bitboard(0x6000_0000_0000_0000),
            Self::BlackQueenside => Bitboard(0x0E00_0000_0000_0000),
        }
    }

    /// The king's start, transit and destination squares, none of which may be attacked.
    pub const fn check_squares(self) -> [Square; 3] {
        match self {
            Self::WhiteKingside => [Square::E1, Square::F1, Square::G1],
            Self::WhiteQueenside => [Square::E1, Square::D1, Square::C1],
            Self::BlackKingside => [Square::E8, Square::F8, Square::G8],
            Self::BlackQueenside => [Square::E8, Square::D8, Square::C8],
        }
    }

    /// Resolves a castling move from the king's landing square.
    pub const fn from_landing_square(square: Square) -> Option<Self> {
        match square {
            Square::G1 => Some(Self::WhiteKingside),
            Square::C1 => Some(Self::WhiteQueenside),
            Square::G8 => Some(Self::BlackKingside),
            Square::C8 => Some(Self::BlackQueenside),
            _ => None,
        }
    }

    pub const fn symbol(self) -> char {
        match self {
            Self::WhiteKingside => 'K',
            Self::WhiteQueenside => 'Q',
            Self::BlackKingside => 'k',
            Self::BlackQueenside => 'q',
        }
    }
}

/// The set of castling rights still available in a position.
#[derive(Copy, Clone, Default, Eq, PartialEq, Debug, Hash)]
#[repr(transparent)]
pub struct CastlingRights {
    raw: u8,
}

/// Rights that survive a move touching the square: the king and rook home squares
/// clear their rights, every other square keeps all of them.
#[rustfmt::skip]
const UPDATE_MASKS: [u8; Square::NUM] = {
    let mut masks = [0b1111; Square::NUM];
    masks[Square::E1 as usize] = 0b1100;
    masks[Square::H1 as usize] = 0b1110;
    masks[Square::A1 as usize] = 0b1101;
    masks[Square::E8 as usize] = 0b0011;
    masks[Square::H8 as usize] = 0b1011;
    masks[Square::A8 as usize] = 0b0111;
    masks
};

impl CastlingRights {
    pub const NONE: Self = Self { raw: 0 };
    pub const ALL: Self = Self { raw: 0b1111 };

    pub fn set(&mut self, kind: CastlingKind) {
        self.raw |= kind as u8;
    }

    pub fn revoke(&mut self, kind: CastlingKind) {
        self.raw &= !(kind as u8);
    }

    pub const fn is_allowed(self, kind: CastlingKind) -> bool {
        self.raw & kind as u8 != 0
    }

    pub const fn is_empty(self) -> bool {
        self.raw == 0
    }

    /// Revokes the rights tied to the start and target squares of a move.
    pub fn update(&mut self, start: Square, target: Square) {
        self.raw &= UPDATE_MASKS[start] & UPDATE_MASKS[target];
    }

    /// Returns the rights that are present in exactly one of `self` and `other`.
    pub fn difference(self, other: Self) -> impl Iterator<Item = CastlingKind> {
        let changed = self.raw ^ other.raw;
        CastlingKind::ALL.into_iter().filter(move |&kind| changed & kind as u8 != 0)
    }

    /// Returns the rights currently allowed.
    pub fn iter(self) -> impl Iterator<Item = CastlingKind> {
        CastlingKind::ALL.into_iter().filter(move |&kind| self.is_allowed(kind))
    }
}

impl std::fmt::Display for CastlingRights {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "-");
        }

        for kind in self.iter() {
            write!(f, "{}", kind.symbol())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_are_keyed_by_side_and_flank() {
        for kind in CastlingKind::ALL {
            assert_eq!(CastlingKind::new(kind.color(), kind.flank()), kind);
            assert_eq!(CastlingKind::from_landing_square(kind.landing_square()), Some(kind));
        }

        let indices = CastlingKind::ALL.map(CastlingKind::index);
        assert_eq!(indices, [0, 1, 2, 3]);
    }

    #[test]
    fn path_masks_cover_squares_between_king_and_rook() {
        assert_eq!(CastlingKind::WhiteKingside.path_mask(), Square::F1.to_bb() | Square::G1.to_bb());
        assert_eq!(
            CastlingKind::BlackQueenside.path_mask(),
            Square::B8.to_bb() | Square::C8.to_bb() | Square::D8.to_bb()
        );
    }

    #[test]
    fn moves_from_home_squares_revoke_rights() {
        let mut rights = CastlingRights::ALL;

        rights.update(Square::H1, Square::H5);
        assert!(!rights.is_allowed(CastlingKind::WhiteKingside));
        assert!(rights.is_allowed(CastlingKind::WhiteQueenside));

        rights.update(Square::B2, Square::A8);
        assert!(!rights.is_allowed(CastlingKind::BlackQueenside));
        assert!(rights.is_allowed(CastlingKind::BlackKingside));

        rights.update(Square::E8, Square::E7);
        assert_eq!(rights.to_string(), "Q");
    }

    #[test]
    fn difference_lists_flipped_rights() {
        let mut rights = CastlingRights::ALL;
        rights.revoke(CastlingKind::WhiteKingside);
        rights.revoke(CastlingKind::BlackQueenside);

        let flipped = rights.difference(CastlingRights::ALL).collect::<Vec<_>>();
        assert_eq!(flipped, vec![CastlingKind::WhiteKingside, CastlingKind::BlackQueenside]);
        assert_eq!(CastlingRights::NONE.to_string(), "-");
    }
}
