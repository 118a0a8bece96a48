//! Attack masks computed on the fly by walking (rank, file) deltas from a square.
//! Leapers take a single step per delta, sliders keep stepping until they leave
//! the board or hit an occupied square.

pub enum Color {
    White,
    Black,
}

#[rustfmt::skip]
const KING_STEPS: [(i8, i8); 8] = [
    (1, -1), (1, 0), (1, 1),
    (0, -1),         (0, 1),
    (-1, -1), (-1, 0), (-1, 1),
];

#[rustfmt::skip]
const KNIGHT_STEPS: [(i8, i8); 8] = [
    (2, -1), (2, 1), (1, -2), (1, 2),
    (-1, -2), (-1, 2), (-2, -1), (-2, 1),
];

/// Returns the bit of the square reached from `square` by `step`, or zero if it's off the board.
fn step(square: u8, (rank, file): (i8, i8)) -> u64 {
    let rank = (square / 8) as i8 + rank;
    let file = (square % 8) as i8 + file;

    if (0..8).contains(&rank) && (0..8).contains(&file) {
        1 << (rank * 8 + file)
    } else {
        0
    }
}

fn leaper_attacks(square: u8, steps: &[(i8, i8)]) -> u64 {
    steps.iter().fold(0, |attacks, &delta| attacks | step(square, delta))
}

pub fn pawn_attacks(square: u8, color: Color) -> u64 {
    match color {
        Color::White => leaper_attacks(square, &[(1, -1), (1, 1)]),
        Color::Black => leaper_attacks(square, &[(-1, -1), (-1, 1)]),
    }
}

pub fn king_attacks(square: u8) -> u64 {
    leaper_attacks(square, &KING_STEPS)
}

pub fn knight_attacks(square: u8) -> u64 {
    leaper_attacks(square, &KNIGHT_STEPS)
}

/// Walks from `square` along `direction` until the edge of the board or the first
/// occupied square, which is included in the output.
pub fn sliding_attacks(square: u8, occupancies: u64, direction: (i8, i8)) -> u64 {
    let mut output = 0;
    let mut current = square;

    loop {
        let next = step(current, direction);
        if next == 0 {
            break;
        }

        output |= next;
        if next & occupancies != 0 {
            break;
        }

        current = next.trailing_zeros() as u8;
    }

    output
}
