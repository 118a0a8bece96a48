use super::{CastlingKind, Piece, Square};

/// Represents the sets of random numbers used to produce an *almost* unique hash value
/// for a position using [Zobrist Hashing](https://en.wikipedia.org/wiki/Zobrist_hashing).
pub struct Zobrist {
    pub pieces: [[u64; Square::NUM]; Piece::NUM],
    pub en_passant: [u64; 8],
    pub castling: [u64; 4],
    pub side: u64,
}

impl Zobrist {
    pub fn piece(&self, piece: Piece, square: Square) -> u64 {
        self.pieces[piece][square]
    }

    /// The en passant key depends only on the file of the target square.
    pub fn en_passant(&self, square: Square) -> u64 {
        self.en_passant[square.file() as usize]
    }

    pub fn castling(&self, kind: CastlingKind) -> u64 {
        self.castling[kind.index()]
    }
}

// https://en.wikipedia.org/wiki/Xorshift
const fn xorshift(mut seed: u64) -> u64 {
    seed ^= seed << 13;
    seed ^= seed >> 7;
    seed ^= seed << 17;
    seed
}

pub static ZOBRIST: Zobrist = {
    let mut seed = 0xFFAA_B58C_5833_FE89u64;
    let mut zobrist = Zobrist { pieces: [[0; Square::NUM]; Piece::NUM], en_passant: [0; 8], castling: [0; 4], side: 0 };

    let mut piece = 0;
    while piece < Piece::NUM {
        let mut square = 0;
        while square < Square::NUM {
            seed = xorshift(seed);
            zobrist.pieces[piece][square] = seed;
            square += 1;
        }
        piece += 1;
    }

    let mut file = 0;
    while file < zobrist.en_passant.len() {
        seed = xorshift(seed);
        zobrist.en_passant[file] = seed;
        file += 1;
    }

    let mut kind = 0;
    while kind < zobrist.castling.len() {
        seed = xorshift(seed);
        zobrist.castling[kind] = seed;
        kind += 1;
    }

    zobrist.side = xorshift(seed);
    zobrist
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_distinct_and_nonzero() {
        let mut keys = ZOBRIST.pieces.iter().flatten().copied().collect::<Vec<_>>();
        keys.extend(ZOBRIST.en_passant);
        keys.extend(ZOBRIST.castling);
        keys.push(ZOBRIST.side);

        assert!(keys.iter().all(|&key| key != 0));

        let total = keys.len();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), total);
    }
}
