use std::ops::{BitXor, Index, IndexMut};

use super::Bitboard;

/// A board square in [Little-Endian Rank-File Mapping][LERFM]: `A1` is 0, `H1` is 7
/// and `H8` is 63. `Square::None` stands for "no square", e.g. an absent en passant target.
///
/// [LERFM]: https://www.chessprogramming.org/Square_Mapping_Considerations#Little-Endian_Rank-File_Mapping
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default, Hash)]
#[repr(u8)]
#[rustfmt::skip]
pub enum Square {
    A1, B1, C1, D1, E1, F1, G1, H1,
    A2, B2, C2, D2, E2, F2, G2, H2,
    A3, B3, C3, D3, E3, F3, G3, H3,
    A4, B4, C4, D4, E4, F4, G4, H4,
    A5, B5, C5, D5, E5, F5, G5, H5,
    A6, B6, C6, D6, E6, F6, G6, H6,
    A7, B7, C7, D7, E7, F7, G7, H7,
    A8, B8, C8, D8, E8, F8, G8, H8,
    #[default]
    None,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
#[repr(u8)]
pub enum Rank {
    R1,
    R2,
    R3,
    R4,
    R5,
    R6,
    R7,
    R8,
}

impl Square {
    pub const NUM: usize = 64;

    /// Converts an index in `0..64` into a square.
    pub const fn new(index: u8) -> Self {
        debug_assert!(index < Self::NUM as u8);

        // SAFETY: `Square` is `repr(u8)` with variants 0..=64 and `index` is below 64.
        unsafe { std::mem::transmute(index) }
    }

    pub const fn from_rank_file(rank: u8, file: u8) -> Self {
        debug_assert!(rank < 8 && file < 8);
        Self::new(rank * 8 + file)
    }

    pub const fn file(self) -> u8 {
        self as u8 % 8
    }

    pub const fn rank(self) -> u8 {
        self as u8 / 8
    }

    /// Moves the square by `offset` indices, which must stay on the board.
    pub const fn shift(self, offset: i8) -> Self {
        let index = self as i8 + offset;
        debug_assert!(index >= 0 && index < Self::NUM as i8);

        Self::new(index as u8)
    }

    /// The square halfway between two squares on the same file, such as the square
    /// skipped by a double pawn push.
    pub const fn midpoint(self, other: Self) -> Self {
        Self::new((self as u8 + other as u8) / 2)
    }

    pub const fn to_bb(self) -> Bitboard {
        Bitboard(1 << self as u8)
    }
}

impl TryFrom<&str> for Square {
    type Error = ();

    /// Reads a square in algebraic form, such as `e4`.
    fn try_from(text: &str) -> Result<Self, Self::Error> {
        let mut chars = text.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(());
        };

        if !('a'..='h').contains(&file) || !('1'..='8').contains(&rank) {
            return Err(());
        }

        Ok(Self::from_rank_file(rank as u8 - b'1', file as u8 - b'a'))
    }
}

impl BitXor<u8> for Square {
    type Output = Self;

    /// Flips bit 3 of the index. `target ^ 8` maps an en passant target on the third or
    /// sixth rank to the square of the pawn captured there.
    fn bitxor(self, rhs: u8) -> Self::Output {
        Self::new(self as u8 ^ rhs)
    }
}

impl<T> Index<Square> for [T] {
    type Output = T;

    fn index(&self, square: Square) -> &Self::Output {
        debug_assert!(square != Square::None);
        &self[square as usize]
    }
}

impl<T> IndexMut<Square> for [T] {
    fn index_mut(&mut self, square: Square) -> &mut Self::Output {
        debug_assert!(square != Square::None);
        &mut self[square as usize]
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::None => f.write_str("-"),
            _ => write!(f, "{}{}", (b'a' + self.file()) as char, (b'1' + self.rank()) as char),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn algebraic_names() {
        assert_eq!(Square::try_from("a1"), Ok(Square::A1));
        assert_eq!(Square::try_from("e4"), Ok(Square::E4));
        assert_eq!(Square::try_from("h8"), Ok(Square::H8));

        assert_eq!(Square::try_from("i1"), Err(()));
        assert_eq!(Square::try_from("a9"), Err(()));
        assert_eq!(Square::try_from("e44"), Err(()));
        assert_eq!(Square::try_from(""), Err(()));

        assert_eq!(Square::G7.to_string(), "g7");
        assert_eq!(Square::None.to_string(), "-");
    }

    #[test]
    fn geometry() {
        assert_eq!(Square::C6.rank(), 5);
        assert_eq!(Square::C6.file(), 2);
        assert_eq!(Square::E2.midpoint(Square::E4), Square::E3);
        assert_eq!(Square::D7.midpoint(Square::D5), Square::D6);
        assert_eq!(Square::E6 ^ 8, Square::E5);
        assert_eq!(Square::E3 ^ 8, Square::E4);
        assert_eq!(Square::B1.shift(16), Square::B3);
    }
}
