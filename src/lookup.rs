//! Attack lookups backed by the tables generated in `build/build.rs`.
//!
//! Sliding attacks use the classical approach: take the empty-board ray in each
//! direction and cut it at the nearest blocker.

use crate::types::{Bitboard, Color, Square};

include!(concat!(env!("OUT_DIR"), "/lookup.rs"));

const NORTH: usize = 0;
const NORTH_EAST: usize = 1;
const EAST: usize = 2;
const NORTH_WEST: usize = 3;
const SOUTH: usize = 4;
const SOUTH_WEST: usize = 5;
const WEST: usize = 6;
const SOUTH_EAST: usize = 7;

pub fn pawn_attacks(square: Square, color: Color) -> Bitboard {
    match color {
        Color::White => Bitboard(WHITE_PAWN_MAP[square as usize]),
        Color::Black => Bitboard(BLACK_PAWN_MAP[square as usize]),
    }
}

pub fn king_attacks(square: Square) -> Bitboard {
    Bitboard(KING_MAP[square as usize])
}

pub fn knight_attacks(square: Square) -> Bitboard {
    Bitboard(KNIGHT_MAP[square as usize])
}

pub fn rook_attacks(square: Square, occupancies: Bitboard) -> Bitboard {
    positive_ray(NORTH, square, occupancies)
        | positive_ray(EAST, square, occupancies)
        | negative_ray(SOUTH, square, occupancies)
        | negative_ray(WEST, square, occupancies)
}

pub fn bishop_attacks(square: Square, occupancies: Bitboard) -> Bitboard {
    positive_ray(NORTH_EAST, square, occupancies)
        | positive_ray(NORTH_WEST, square, occupancies)
        | negative_ray(SOUTH_EAST, square, occupancies)
        | negative_ray(SOUTH_WEST, square, occupancies)
}

pub fn queen_attacks(square: Square, occupancies: Bitboard) -> Bitboard {
    rook_attacks(square, occupancies) | bishop_attacks(square, occupancies)
}

/// Squares strictly between `a` and `b`, or an empty set if they are not aligned.
pub fn between(a: Square, b: Square) -> Bitboard {
    Bitboard(BETWEEN[a as usize][b as usize])
}

/// The whole line through `a` and `b`, or an empty set if they are not aligned.
pub fn line(a: Square, b: Square) -> Bitboard {
    Bitboard(LINE[a as usize][b as usize])
}

fn positive_ray(direction: usize, square: Square, occupancies: Bitboard) -> Bitboard {
    let ray = RAYS[direction][square as usize];
    let blockers = Bitboard(ray) & occupancies;

    if blockers.is_empty() {
        Bitboard(ray)
    } else {
        Bitboard(ray ^ RAYS[direction][blockers.lsb() as usize])
    }
}

fn negative_ray(direction: usize, square: Square, occupancies: Bitboard) -> Bitboard {
    let ray = RAYS[direction][square as usize];
    let blockers = Bitboard(ray) & occupancies;

    if blockers.is_empty() {
        Bitboard(ray)
    } else {
        Bitboard(ray ^ RAYS[direction][blockers.msb() as usize])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn squares(list: &[Square]) -> Bitboard {
        list.iter().fold(Bitboard::EMPTY, |bb, &square| bb | square.to_bb())
    }

    #[test]
    fn leaper_attacks() {
        assert_eq!(knight_attacks(Square::A1), squares(&[Square::B3, Square::C2]));
        assert_eq!(king_attacks(Square::H8), squares(&[Square::G8, Square::G7, Square::H7]));
        assert_eq!(pawn_attacks(Square::E4, Color::White), squares(&[Square::D5, Square::F5]));
        assert_eq!(pawn_attacks(Square::A7, Color::Black), squares(&[Square::B6]));
    }

    #[test]
    fn sliders_stop_at_first_blocker() {
        let occupancies = squares(&[Square::D6, Square::B4, Square::F2]);

        let rook = rook_attacks(Square::D4, occupancies);
        assert!(rook.contains(Square::D6) && !rook.contains(Square::D7));
        assert!(rook.contains(Square::B4) && !rook.contains(Square::A4));
        assert!(rook.contains(Square::H4) && rook.contains(Square::D1));
        assert_eq!(rook.len(), 2 + 2 + 4 + 3);

        let bishop = bishop_attacks(Square::D4, occupancies);
        assert!(bishop.contains(Square::F2) && !bishop.contains(Square::G1));
        assert!(bishop.contains(Square::H8) && bishop.contains(Square::A1) && bishop.contains(Square::A7));
    }

    #[test]
    fn between_and_line() {
        assert_eq!(between(Square::A1, Square::D4), squares(&[Square::B2, Square::C3]));
        assert_eq!(between(Square::E1, Square::E2), Bitboard::EMPTY);
        assert_eq!(between(Square::A1, Square::B3), Bitboard::EMPTY);

        assert_eq!(line(Square::C3, Square::E5).len(), 8);
        assert!(line(Square::C3, Square::E5).contains(Square::A1));
        assert_eq!(line(Square::A1, Square::B3), Bitboard::EMPTY);
    }
}
