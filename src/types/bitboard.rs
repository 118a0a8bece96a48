use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

use super::{Rank, Square};

/// A set of squares packed into a `u64`, bit `n` standing for `Square::new(n)`.
///
/// See [Bitboards](https://www.chessprogramming.org/Bitboards).
#[derive(Copy, Clone, PartialEq, Eq, Default, Hash)]
#[repr(transparent)]
pub struct Bitboard(pub u64);

impl Bitboard {
    pub const EMPTY: Self = Self(0);
    pub const FULL: Self = Self(u64::MAX);

    const A_FILE: u64 = 0x0101_0101_0101_0101;
    const H_FILE: u64 = Self::A_FILE << 7;

    /// Creates a bitboard with all bits set in the specified rank.
    pub const fn rank(rank: Rank) -> Self {
        Self(0xFF << (rank as usize * 8))
    }

    /// Creates a bitboard with all bits set in the specified file.
    pub const fn file(file: u8) -> Self {
        Self(Self::A_FILE << file)
    }

    /// Checks if the bitboard has zero bits set.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn contains(self, square: Square) -> bool {
        self.0 & (1 << square as u64) != 0
    }

    /// Returns `true` if more than one bit is set.
    pub const fn multiple(self) -> bool {
        self.0 & self.0.wrapping_sub(1) != 0
    }

    /// Counts the number of set bits in the bitboard.
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns the least significant set bit in the bitboard.
    pub const fn lsb(self) -> Square {
        Square::new(self.0.trailing_zeros() as u8)
    }

    /// Returns the most significant set bit in the bitboard.
    pub const fn msb(self) -> Square {
        Square::new(63 - self.0.leading_zeros() as u8)
    }

    /// Shifts the bits of the bitboard by the specified offset.
    pub const fn shift(self, offset: i8) -> Self {
        if offset > 0 {
            Self(self.0 << offset)
        } else {
            Self(self.0 >> -offset)
        }
    }

    pub const fn north(self) -> Self {
        Self(self.0 << 8)
    }

    pub const fn south(self) -> Self {
        Self(self.0 >> 8)
    }

    pub const fn east(self) -> Self {
        Self((self.0 & !Self::H_FILE) << 1)
    }

    pub const fn west(self) -> Self {
        Self((self.0 & !Self::A_FILE) >> 1)
    }

    pub const fn north_east(self) -> Self {
        self.north().east()
    }

    pub const fn north_west(self) -> Self {
        self.north().west()
    }

    pub const fn south_east(self) -> Self {
        self.south().east()
    }

    pub const fn south_west(self) -> Self {
        self.south().west()
    }

    pub fn set(&mut self, square: Square) {
        *self |= square.to_bb();
    }

    pub fn clear(&mut self, square: Square) {
        *self &= !square.to_bb();
    }
}

/// Yields the set squares from `A1` towards `H8`, consuming the bits as it goes.
impl Iterator for Bitboard {
    type Item = Square;

    fn next(&mut self) -> Option<Self::Item> {
        (!self.is_empty()).then(|| {
            let square = self.lsb();
            self.0 &= self.0 - 1;
            square
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

macro_rules! impl_bit_ops {
    ($($trait:ident::$method:ident, $assign:ident::$assign_method:ident => $op:tt;)*) => {$(
        impl $trait for Bitboard {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self::Output {
                Self(self.0 $op rhs.0)
            }
        }

        impl $assign for Bitboard {
            fn $assign_method(&mut self, rhs: Self) {
                *self = *self $op rhs;
            }
        }
    )*};
}

impl_bit_ops! {
    BitAnd::bitand, BitAndAssign::bitand_assign => &;
    BitOr::bitor, BitOrAssign::bitor_assign => |;
    BitXor::bitxor, BitXorAssign::bitxor_assign => ^;
}

impl Not for Bitboard {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self(!self.0)
    }
}

impl std::fmt::Debug for Bitboard {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "Bitboard({:#018x})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shifts_do_not_wrap_files() {
        let h_file = Bitboard::file(7);
        let a_file = Bitboard::file(0);

        assert_eq!(h_file.east(), Bitboard::EMPTY);
        assert_eq!(a_file.west(), Bitboard::EMPTY);
        assert_eq!(a_file.east(), Bitboard::file(1));
        assert_eq!(Square::H4.to_bb().north_west(), Square::G5.to_bb());
        assert_eq!(Square::A4.to_bb().south_east(), Square::B3.to_bb());
    }

    #[test]
    fn ranks_fall_off_the_board() {
        assert_eq!(Bitboard::rank(Rank::R8).north(), Bitboard::EMPTY);
        assert_eq!(Bitboard::rank(Rank::R1).south(), Bitboard::EMPTY);
        assert_eq!(Bitboard::rank(Rank::R2).north(), Bitboard::rank(Rank::R3));
    }

    #[test]
    fn bit_scans() {
        let bb = Square::C3.to_bb() | Square::F7.to_bb();

        assert_eq!(bb.lsb(), Square::C3);
        assert_eq!(bb.msb(), Square::F7);
        assert_eq!(bb.len(), 2);
        assert!(bb.multiple());
        assert!(!Square::C3.to_bb().multiple());
        assert!(!Bitboard::EMPTY.multiple());
        assert_eq!(bb.collect::<Vec<_>>(), vec![Square::C3, Square::F7]);
    }
}
