use crate::attacks::{self, Color};

/// Ray directions as (rank, file) deltas. The first four increase the square index
/// and the last four decrease it, which the runtime lookup relies on to pick the
/// nearest blocker with `lsb` or `msb`.
#[rustfmt::skip]
const DIRECTIONS: [(i8, i8); 8] = [
    (1, 0), (1, 1), (0, 1), (1, -1),
    (-1, 0), (-1, -1), (0, -1), (-1, 1),
];

pub fn generate_king_map() -> Vec<u64> {
    (0..64).map(attacks::king_attacks).collect()
}

pub fn generate_knight_map() -> Vec<u64> {
    (0..64).map(attacks::knight_attacks).collect()
}

pub fn generate_white_pawn_map() -> Vec<u64> {
    (0..64).map(|square| attacks::pawn_attacks(square, Color::White)).collect()
}

pub fn generate_black_pawn_map() -> Vec<u64> {
    (0..64).map(|square| attacks::pawn_attacks(square, Color::Black)).collect()
}

/// Empty-board rays indexed by `[direction][square]`.
pub fn generate_rays() -> Vec<[u64; 64]> {
    DIRECTIONS
        .iter()
        .map(|&direction| {
            let mut rays = [0; 64];
            for (square, ray) in rays.iter_mut().enumerate() {
                *ray = attacks::sliding_attacks(square as u8, 0, direction);
            }
            rays
        })
        .collect()
}

/// Squares strictly between two squares sharing a rank, file or diagonal.
pub fn generate_between() -> Vec<[u64; 64]> {
    let mut between = vec![[0; 64]; 64];

    for a in 0..64u8 {
        for b in 0..64u8 {
            for &direction in &DIRECTIONS {
                let target = 1u64 << b;
                if attacks::sliding_attacks(a, 0, direction) & target != 0 {
                    between[a as usize][b as usize] = attacks::sliding_attacks(a, target, direction) & !target;
                }
            }
        }
    }

    between
}

/// The full line (edge to edge) through two aligned squares, including both of them.
pub fn generate_lines() -> Vec<[u64; 64]> {
    let mut lines = vec![[0; 64]; 64];

    for a in 0..64u8 {
        for b in 0..64u8 {
            for &(rank, file) in &DIRECTIONS {
                if attacks::sliding_attacks(a, 0, (rank, file)) & (1u64 << b) != 0 {
                    lines[a as usize][b as usize] = attacks::sliding_attacks(a, 0, (rank, file))
                        | attacks::sliding_attacks(a, 0, (-rank, -file))
                        | 1u64 << a;
                }
            }
        }
    }

    lines
}
