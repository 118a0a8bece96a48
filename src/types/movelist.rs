use super::{ArrayVec, Bitboard, Move, MoveKind, Square, MAX_MOVES};

pub type MoveList = ArrayVec<Move, MAX_MOVES>;

/// A destination for generated moves.
///
/// Move generation is written once against this trait, so the same code can
/// collect moves into a list or merely count them.
pub trait MoveSink {
    fn add(&mut self, mv: Move);

    /// Adds a move from `start` to every square of `targets`.
    fn add_many(&mut self, start: Square, targets: Bitboard, kind: MoveKind) {
        for target in targets {
            self.add(Move::new(start, target, kind));
        }
    }
}

impl MoveSink for MoveList {
    fn add(&mut self, mv: Move) {
        self.push(mv);
    }
}

impl MoveSink for Vec<Move> {
    fn add(&mut self, mv: Move) {
        self.push(mv);
    }
}

/// Counts moves without storing them.
#[derive(Default)]
pub struct MoveCounter(pub usize);

impl MoveSink for MoveCounter {
    fn add(&mut self, _: Move) {
        self.0 += 1;
    }

    fn add_many(&mut self, _: Square, targets: Bitboard, _: MoveKind) {
        self.0 += targets.len();
    }
}
