//! Chess position core: bitboard board representation, legal move generation,
//! make/unmake with incremental hashing, draw detection and perft.

pub mod board;
pub mod lookup;
pub mod shell;
pub mod tools;
pub mod types;
