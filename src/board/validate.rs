use super::Board;
use crate::types::{Bitboard, Color, PieceType, Rank, Square};

/// The reasons a position can fail [`Board::validate`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidPositionError {
    #[error("a square holds more than one piece")]
    OverlappingPieces,
    #[error("the color sets don't partition the pieces")]
    ColorMismatch,
    #[error("{color:?} has {count} kings")]
    KingCount { color: Color, count: usize },
    #[error("the side not to move is in check")]
    ExposedKing,
    #[error("a pawn stands on the first or last rank")]
    PawnsOnBackRank,
    #[error("en passant square {0} doesn't follow a double push")]
    EnPassantSquare(Square),
    #[error("castling rights don't match the king and rook placement")]
    CastlingRights,
    #[error("the hash key doesn't match the position")]
    StaleHash,
}

impl Board {
    /// Checks the structural invariants of the position.
    pub fn validate(&self) -> Result<(), InvalidPositionError> {
        let mut union = Bitboard::EMPTY;
        for piece_type in PieceType::ALL {
            if !(union & self.pieces(piece_type)).is_empty() {
                return Err(InvalidPositionError::OverlappingPieces);
            }
            union |= self.pieces(piece_type);
        }

        let white = self.colors(Color::White);
        let black = self.colors(Color::Black);
        if !(white & black).is_empty() || white | black != union {
            return Err(InvalidPositionError::ColorMismatch);
        }

        for color in [Color::White, Color::Black] {
            let count = self.of(PieceType::King, color).len();
            if count != 1 {
                return Err(InvalidPositionError::KingCount { color, count });
            }
        }

        let stm = self.side_to_move;
        if self.square_attacked(self.king_square(!stm), stm) {
            return Err(InvalidPositionError::ExposedKing);
        }

        let back_ranks = Bitboard::rank(Rank::R1) | Bitboard::rank(Rank::R8);
        if !(self.pieces(PieceType::Pawn) & back_ranks).is_empty() {
            return Err(InvalidPositionError::PawnsOnBackRank);
        }

        let en_passant = self.state.en_passant;
        if en_passant != Square::None {
            let expected_rank = match stm {
                Color::White => Rank::R6,
                Color::Black => Rank::R3,
            };

            let pushed = en_passant.shift(-stm.offset());
            if !Bitboard::rank(expected_rank).contains(en_passant) || !self.their(PieceType::Pawn).contains(pushed) {
                return Err(InvalidPositionError::EnPassantSquare(en_passant));
            }
        }

        for kind in self.state.castling.iter() {
            let color = kind.color();
            if self.king_square(color) != kind.king_start() || !self.of(PieceType::Rook, color).contains(kind.rook_start()) {
                return Err(InvalidPositionError::CastlingRights);
            }
        }

        if self.hash() != self.generate_hash_key() {
            return Err(InvalidPositionError::StaleHash);
        }

        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}
