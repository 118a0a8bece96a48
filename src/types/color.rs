use std::ops::{Index, IndexMut, Not};

use super::Rank;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub const NUM: usize = 2;

    /// Returns the difference between two adjacent ranks based on the current color.
    ///
    /// The result can only be `8` or `-8`.
    pub const fn offset(self) -> i8 {
        match self {
            Self::White => 8,
            Self::Black => -8,
        }
    }

    /// The rank a pawn of this color promotes from.
    pub const fn seventh_rank(self) -> Rank {
        match self {
            Self::White => Rank::R7,
            Self::Black => Rank::R2,
        }
    }

    /// The rank a pawn of this color lands on after a single push from its starting rank.
    pub const fn third_rank(self) -> Rank {
        match self {
            Self::White => Rank::R3,
            Self::Black => Rank::R6,
        }
    }
}

impl Not for Color {
    type Output = Self;

    fn not(self) -> Self::Output {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }
}

impl<T> Index<Color> for [T] {
    type Output = T;

    fn index(&self, index: Color) -> &Self::Output {
        &self[index as usize]
    }
}

impl<T> IndexMut<Color> for [T] {
    fn index_mut(&mut self, index: Color) -> &mut Self::Output {
        &mut self[index as usize]
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::White => write!(f, "w"),
            Self::Black => write!(f, "b"),
        }
    }
}
