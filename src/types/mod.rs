pub mod arrayvec;
pub mod bitboard;
pub mod castling;
pub mod color;
pub mod movelist;
pub mod moves;
pub mod piece;
pub mod square;
pub mod zobrist;

pub use arrayvec::*;
pub use bitboard::*;
pub use castling::*;
pub use color::*;
pub use movelist::*;
pub use moves::*;
pub use piece::*;
pub use square::*;

/// According to [Chess Programming Wiki](https://www.chessprogramming.org/Encoding_Moves#MoveIndex),
/// the maximum number of legal chess moves in a certain position *appears* to be 218.
/// Pseudo legal generation can exceed that, so the capacity is rounded up.
pub const MAX_MOVES: usize = 256;
