use std::ops::{Index, IndexMut};

use super::Color;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum PieceType {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceType {
    pub const NUM: usize = 6;

    #[rustfmt::skip]
    pub const ALL: [Self; Self::NUM] = [Self::Pawn, Self::Knight, Self::Bishop, Self::Rook, Self::Queen, Self::King];

    pub const fn from_index(index: usize) -> Self {
        Self::ALL[index]
    }

    /// Returns the uppercase letter used by SAN and FEN for white pieces.
    pub const fn symbol(self) -> char {
        match self {
            Self::Pawn => 'P',
            Self::Knight => 'N',
            Self::Bishop => 'B',
            Self::Rook => 'R',
            Self::Queen => 'Q',
            Self::King => 'K',
        }
    }
}

impl TryFrom<char> for PieceType {
    type Error = ();

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value.to_ascii_lowercase() {
            'p' => Ok(Self::Pawn),
            'n' => Ok(Self::Knight),
            'b' => Ok(Self::Bishop),
            'r' => Ok(Self::Rook),
            'q' => Ok(Self::Queen),
            'k' => Ok(Self::King),
            _ => Err(()),
        }
    }
}

impl<T> Index<PieceType> for [T] {
    type Output = T;

    fn index(&self, index: PieceType) -> &Self::Output {
        &self[index as usize]
    }
}

impl<T> IndexMut<PieceType> for [T] {
    fn index_mut(&mut self, index: PieceType) -> &mut Self::Output {
        &mut self[index as usize]
    }
}

/// A piece type together with its color.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[repr(u8)]
#[rustfmt::skip]
pub enum Piece {
    WhitePawn, WhiteKnight, WhiteBishop, WhiteRook, WhiteQueen, WhiteKing,
    BlackPawn, BlackKnight, BlackBishop, BlackRook, BlackQueen, BlackKing,
}

impl Piece {
    pub const NUM: usize = 12;

    pub const fn new(color: Color, piece_type: PieceType) -> Self {
        unsafe { std::mem::transmute(color as u8 * PieceType::NUM as u8 + piece_type as u8) }
    }

    pub const fn piece_type(self) -> PieceType {
        PieceType::from_index(self as usize % PieceType::NUM)
    }

    pub const fn piece_color(self) -> Color {
        if (self as usize) < PieceType::NUM {
            Color::White
        } else {
            Color::Black
        }
    }
}

impl TryFrom<char> for Piece {
    type Error = ();

    fn try_from(value: char) -> Result<Self, Self::Error> {
        let color = if value.is_ascii_uppercase() { Color::White } else { Color::Black };
        PieceType::try_from(value).map(|piece_type| Self::new(color, piece_type))
    }
}

impl<T> Index<Piece> for [T] {
    type Output = T;

    fn index(&self, index: Piece) -> &Self::Output {
        &self[index as usize]
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let symbol = self.piece_type().symbol();
        match self.piece_color() {
            Color::White => write!(f, "{symbol}"),
            Color::Black => write!(f, "{}", symbol.to_ascii_lowercase()),
        }
    }
}
