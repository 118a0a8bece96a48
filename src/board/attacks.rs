use super::Board;
use crate::{
    lookup::{between, bishop_attacks, king_attacks, knight_attacks, pawn_attacks, rook_attacks},
    types::{Bitboard, Color, PieceType, Square},
};

impl Board {
    /// Returns all pieces of either color attacking `square`, with sliding attacks
    /// computed against the given occupancies.
    pub fn attackers_to(&self, square: Square, occupancies: Bitboard) -> Bitboard {
        king_attacks(square) & self.pieces(PieceType::King)
            | knight_attacks(square) & self.pieces(PieceType::Knight)
            | pawn_attacks(square, Color::White) & self.of(PieceType::Pawn, Color::Black)
            | pawn_attacks(square, Color::Black) & self.of(PieceType::Pawn, Color::White)
            | rook_attacks(square, occupancies) & (self.pieces(PieceType::Rook) | self.pieces(PieceType::Queen))
            | bishop_attacks(square, occupancies) & (self.pieces(PieceType::Bishop) | self.pieces(PieceType::Queen))
    }

    /// Returns the pieces of `color` attacking `square`.
    pub fn attackers(&self, square: Square, color: Color) -> Bitboard {
        self.attackers_to(square, self.occupancies()) & self.colors(color)
    }

    /// Returns `true` if the square is attacked by pieces of the specified color.
    pub fn square_attacked(&self, square: Square, color: Color) -> bool {
        !self.attackers(square, color).is_empty()
    }

    /// Returns the union of all squares attacked by pieces of the specified color.
    pub fn squares_attacked(&self, color: Color) -> Bitboard {
        self.squares_attacked_with(color, self.occupancies())
    }

    fn squares_attacked_with(&self, color: Color, occupancies: Bitboard) -> Bitboard {
        let pawns = self.of(PieceType::Pawn, color);
        let mut threats = match color {
            Color::White => pawns.north_east() | pawns.north_west(),
            Color::Black => pawns.south_east() | pawns.south_west(),
        };

        for square in self.of(PieceType::Knight, color) {
            threats |= knight_attacks(square);
        }

        for square in self.of(PieceType::Bishop, color) | self.of(PieceType::Queen, color) {
            threats |= bishop_attacks(square, occupancies);
        }

        for square in self.of(PieceType::Rook, color) | self.of(PieceType::Queen, color) {
            threats |= rook_attacks(square, occupancies);
        }

        for square in self.of(PieceType::King, color) {
            threats |= king_attacks(square);
        }

        threats
    }

    /// Returns the enemy pieces giving check to the side to move.
    pub fn checkers(&self) -> Bitboard {
        match self.king_square(self.side_to_move) {
            Square::None => Bitboard::EMPTY,
            king => self.attackers(king, !self.side_to_move),
        }
    }

    pub fn in_check(&self) -> bool {
        !self.checkers().is_empty()
    }

    /// Returns the squares the king of `color` can step to: adjacent squares that are
    /// not occupied by its own pieces and not attacked by the opponent.
    ///
    /// Attacks are computed with the king lifted off the board, so retreating along
    /// the line of a sliding check is not allowed.
    pub fn king_allowed(&self, color: Color) -> Bitboard {
        let king = self.king_square(color);
        if king == Square::None {
            return Bitboard::EMPTY;
        }

        let occupancies = self.occupancies() ^ king.to_bb();
        king_attacks(king) & !self.colors(color) & !self.squares_attacked_with(!color, occupancies)
    }

    /// Enemy sliders that would attack the king of `color` on an empty board.
    fn snipers(&self, color: Color, king: Square) -> Bitboard {
        let rooks = self.pieces(PieceType::Rook) | self.pieces(PieceType::Queen);
        let bishops = self.pieces(PieceType::Bishop) | self.pieces(PieceType::Queen);

        (rook_attacks(king, Bitboard::EMPTY) & rooks | bishop_attacks(king, Bitboard::EMPTY) & bishops)
            & self.colors(!color)
    }

    /// Returns the pieces of `color` that are pinned to their king.
    pub fn pinned(&self, color: Color) -> Bitboard {
        let king = self.king_square(color);
        if king == Square::None {
            return Bitboard::EMPTY;
        }

        let occupancies = self.occupancies();
        let mut pinned = Bitboard::EMPTY;

        for sniper in self.snipers(color, king) {
            let blockers = between(king, sniper) & occupancies;
            if !blockers.is_empty() && !blockers.multiple() {
                pinned |= blockers & self.colors(color);
            }
        }

        pinned
    }

    /// Returns the squares the piece of `color` on `square` may move to without exposing
    /// its king: the pin ray up to and including the pinner, or the whole board if the
    /// piece is not pinned.
    pub fn pin_ray(&self, color: Color, square: Square) -> Bitboard {
        let king = self.king_square(color);
        if king == Square::None || !self.colors(color).contains(square) {
            return Bitboard::FULL;
        }

        let occupancies = self.occupancies();

        for sniper in self.snipers(color, king) {
            let ray = between(king, sniper);
            if ray & occupancies == square.to_bb() {
                return ray | sniper.to_bb();
            }
        }

        Bitboard::FULL
    }

    /// Returns the pawns of `color` with no enemy pawn in front of them on their own
    /// or an adjacent file.
    pub fn passed_pawns(&self, color: Color) -> Bitboard {
        let mut mask = self.of(PieceType::Pawn, !color);

        match color {
            Color::White => {
                mask |= mask.south_east() | mask.south_west();
                for _ in 0..6 {
                    mask |= mask.south();
                }
            }
            Color::Black => {
                mask |= mask.north_east() | mask.north_west();
                for _ in 0..6 {
                    mask |= mask.north();
                }
            }
        }

        self.of(PieceType::Pawn, color) & !mask
    }
}
