use super::Board;
use crate::{
    lookup::{between, bishop_attacks, knight_attacks, line, pawn_attacks, queen_attacks, rook_attacks},
    types::{Bitboard, CastlingKind, Color, Flank, Move, MoveKind, MoveSink, PieceType, Square},
};

/// Legal move generator.
///
/// Generation starts from the king: with two checkers only king moves are produced,
/// with one checker every other move must land on the evasion mask, and pinned
/// pieces are confined to the line through their king.
pub struct Generator<'a, S: MoveSink> {
    board: &'a Board,
    sink: &'a mut S,
    stm: Color,
    all: Bitboard,
    us: Bitboard,
    them: Bitboard,
    king: Square,
    pinned: Bitboard,
}

impl<'a, S: MoveSink> Generator<'a, S> {
    pub fn new(board: &'a Board, sink: &'a mut S) -> Self {
        let stm = board.side_to_move;

        Self {
            board,
            sink,
            stm,
            all: board.occupancies(),
            us: board.us(),
            them: board.them(),
            king: board.king_square(stm),
            pinned: board.pinned(stm),
        }
    }

    /// Generates the legal moves selected by `CAPTURES` and `QUIETS`.
    pub fn generate<const CAPTURES: bool, const QUIETS: bool>(mut self) {
        if self.king == Square::None {
            return;
        }

        let checkers = self.board.checkers();

        self.collect_king_moves::<CAPTURES, QUIETS>();

        if checkers.multiple() {
            return;
        }

        let evasions = match checkers.is_empty() {
            true => Bitboard::FULL,
            false => checkers | between(self.king, checkers.lsb()),
        };

        let mut targets = evasions & !self.us;
        if !CAPTURES {
            targets &= !self.them;
        }
        if !QUIETS {
            targets &= self.them;
        }

        let occupancies = self.all;

        self.collect_pawn_moves::<CAPTURES, QUIETS>(evasions);

        self.collect_for(PieceType::Knight, targets, knight_attacks);
        self.collect_for(PieceType::Bishop, targets, |square| bishop_attacks(square, occupancies));
        self.collect_for(PieceType::Rook, targets, |square| rook_attacks(square, occupancies));
        self.collect_for(PieceType::Queen, targets, |square| queen_attacks(square, occupancies));

        if QUIETS && checkers.is_empty() {
            self.collect_castling();
        }
    }

    /// Squares the piece on `start` may reach without uncovering its king.
    fn pin_mask(&self, start: Square) -> Bitboard {
        match self.pinned.contains(start) {
            true => line(self.king, start),
            false => Bitboard::FULL,
        }
    }

    fn collect_king_moves<const CAPTURES: bool, const QUIETS: bool>(&mut self) {
        let targets = self.board.king_allowed(self.stm);

        if CAPTURES {
            self.sink.add_many(self.king, targets & self.them, MoveKind::Capture);
        }
        if QUIETS {
            self.sink.add_many(self.king, targets & !self.them, MoveKind::Normal);
        }
    }

    /// Adds moves for the piece type using the specified attack function.
    fn collect_for<T: Fn(Square) -> Bitboard>(&mut self, piece: PieceType, allowed: Bitboard, gen: T) {
        for start in self.board.our(piece) {
            let targets = gen(start) & allowed & self.pin_mask(start);

            self.sink.add_many(start, targets & self.them, MoveKind::Capture);
            self.sink.add_many(start, targets & !self.them, MoveKind::Normal);
        }
    }

    fn collect_pawn_moves<const CAPTURES: bool, const QUIETS: bool>(&mut self, evasions: Bitboard) {
        let pawns = self.board.our(PieceType::Pawn);
        let seventh_rank = Bitboard::rank(self.stm.seventh_rank());

        if QUIETS {
            self.collect_pawn_pushes(pawns, seventh_rank, evasions);
        }

        if CAPTURES {
            self.collect_pawn_captures(pawns, seventh_rank, evasions);
            self.collect_en_passant_moves(pawns);
        }
    }

    /// Adds single, double and promotion pawn pushes.
    fn collect_pawn_pushes(&mut self, pawns: Bitboard, seventh_rank: Bitboard, evasions: Bitboard) {
        let up = self.stm.offset();
        let third_rank = Bitboard::rank(self.stm.third_rank());
        let empty = !self.all;

        let single_pushes = (pawns & !seventh_rank).shift(up) & empty;
        let double_pushes = (single_pushes & third_rank).shift(up) & empty;

        for target in single_pushes & evasions {
            let start = target.shift(-up);
            if self.pin_mask(start).contains(target) {
                self.sink.add(Move::new(start, target, MoveKind::Normal));
            }
        }

        for target in double_pushes & evasions {
            let start = target.shift(-up * 2);
            if self.pin_mask(start).contains(target) {
                self.sink.add(Move::new(start, target, MoveKind::DoublePush));
            }
        }

        for target in (pawns & seventh_rank).shift(up) & empty & evasions {
            let start = target.shift(-up);
            if self.pin_mask(start).contains(target) {
                for kind in MoveKind::PROMOTIONS {
                    self.sink.add(Move::new(start, target, kind));
                }
            }
        }
    }

    /// Adds regular pawn captures and promotion captures.
    fn collect_pawn_captures(&mut self, pawns: Bitboard, seventh_rank: Bitboard, evasions: Bitboard) {
        for start in pawns {
            let targets = pawn_attacks(start, self.stm) & self.them & evasions & self.pin_mask(start);

            if seventh_rank.contains(start) {
                for target in targets {
                    for kind in MoveKind::PROMOTION_CAPTURES {
                        self.sink.add(Move::new(start, target, kind));
                    }
                }
            } else {
                self.sink.add_many(start, targets, MoveKind::Capture);
            }
        }
    }

    /// Adds en passant captures, replaying the capture on the occupancy set to make sure
    /// that removing both pawns does not expose the king.
    fn collect_en_passant_moves(&mut self, pawns: Bitboard) {
        let target = self.board.state.en_passant;
        if target == Square::None {
            return;
        }

        let captured = target.shift(-self.stm.offset());

        for start in pawns & pawn_attacks(target, !self.stm) {
            let occupancies = self.all ^ start.to_bb() ^ captured.to_bb() ^ target.to_bb();
            let attackers = self.board.attackers_to(self.king, occupancies) & self.them & !captured.to_bb();

            if attackers.is_empty() {
                self.sink.add(Move::new(start, target, MoveKind::EnPassant));
            }
        }
    }

    fn collect_castling(&mut self) {
        for flank in [Flank::Kingside, Flank::Queenside] {
            let kind = CastlingKind::new(self.stm, flank);

            if self.board.castling_allowed(kind) {
                self.sink.add(Move::new(kind.king_start(), kind.landing_square(), MoveKind::Castling));
            }
        }
    }
}

impl Board {
    /// Returns `true` if castling of the given kind is allowed right now. The king's start
    /// square is one of the squares that must not be attacked, so a king in check can't castle.
    pub(super) fn castling_allowed(&self, kind: CastlingKind) -> bool {
        let color = kind.color();

        self.state.castling.is_allowed(kind)
            && self.king_square(color) == kind.king_start()
            && self.of(PieceType::Rook, color).contains(kind.rook_start())
            && (kind.path_mask() & self.occupancies()).is_empty()
            && kind.check_squares().into_iter().all(|square| !self.square_attacked(square, !color))
    }
}
