use super::{generator::Generator, Board};
use crate::{
    lookup::{bishop_attacks, king_attacks, knight_attacks, pawn_attacks, queen_attacks, rook_attacks},
    types::{Bitboard, CastlingKind, Flank, Move, MoveCounter, MoveKind, MoveList, MoveSink, PieceType, Square},
};

macro_rules! push {
    ($list:ident, $from:expr, $to:expr, $kind:expr) => {
        $list.push(Move::new($from, $to, $kind));
    };
}

impl Board {
    /// Generates all legal moves for the current position.
    pub fn legal_moves(&self) -> MoveList {
        let mut list = MoveList::new();
        self.append_legal_moves(&mut list);
        list
    }

    pub fn append_legal_moves<S: MoveSink>(&self, sink: &mut S) {
        Generator::new(self, sink).generate::<true, true>();
    }

    /// Generates the legal moves flagged as captures, en passant and promotion captures included.
    pub fn legal_captures(&self) -> MoveList {
        let mut list = MoveList::new();
        self.append_legal_captures(&mut list);
        list
    }

    pub fn append_legal_captures<S: MoveSink>(&self, sink: &mut S) {
        Generator::new(self, sink).generate::<true, false>();
    }

    /// Generates the legal moves that capture nothing, castling and quiet promotions included.
    pub fn legal_noncaptures(&self) -> MoveList {
        let mut list = MoveList::new();
        self.append_legal_noncaptures(&mut list);
        list
    }

    pub fn append_legal_noncaptures<S: MoveSink>(&self, sink: &mut S) {
        Generator::new(self, sink).generate::<false, true>();
    }

    /// Generates the moves that get the side to move out of check, or nothing if
    /// it's not in check.
    pub fn check_evasions(&self) -> MoveList {
        let mut list = MoveList::new();
        if self.in_check() {
            self.append_legal_moves(&mut list);
        }
        list
    }

    /// Counts the legal moves without storing them.
    pub fn count_moves(&self) -> usize {
        let mut counter = MoveCounter::default();
        self.append_legal_moves(&mut counter);
        counter.0
    }

    /// Generates all possible pseudo legal moves for the current position.
    ///
    /// These moves follow the piece movement rules but may leave the own king in check.
    /// Pieces are walked one square at a time, independently of the legal generator,
    /// which lets [`Board::is_legal`] act as a cross-check for it.
    pub fn pseudo_legal_moves(&self) -> MoveList {
        let mut list = MoveList::new();

        for from in self.us() {
            match self.piece_on(from) {
                Some(PieceType::Pawn) => self.collect_pawn(&mut list, from),
                Some(pt) => self.collect_piece(&mut list, from, self.piece_targets(pt, from)),
                None => (),
            }
        }

        for flank in [Flank::Kingside, Flank::Queenside] {
            let kind = CastlingKind::new(self.side_to_move, flank);
            if self.castling_allowed(kind) {
                push!(list, kind.king_start(), kind.landing_square(), MoveKind::Castling);
            }
        }

        list
    }

    /// Checks a single move: it must be pseudo legal, and playing it must not leave
    /// the mover's king attacked.
    pub fn is_legal(&self, mv: Move) -> bool {
        let stm = self.side_to_move;
        if self.king_square(stm) == Square::None || !self.pseudo_legal_moves().contains(&mv) {
            return false;
        }

        let mut board = self.detached();
        board.make_move(mv);

        !board.square_attacked(board.king_square(stm), !stm)
    }

    /// Squares a non-pawn piece standing on `from` could move to, own pieces excluded.
    fn piece_targets(&self, pt: PieceType, from: Square) -> Bitboard {
        let occupancies = self.occupancies();
        let attacks = match pt {
            PieceType::Knight => knight_attacks(from),
            PieceType::Bishop => bishop_attacks(from, occupancies),
            PieceType::Rook => rook_attacks(from, occupancies),
            PieceType::Queen => queen_attacks(from, occupancies),
            PieceType::King => king_attacks(from),
            PieceType::Pawn => Bitboard::EMPTY,
        };
        attacks & !self.us()
    }

    fn collect_piece(&self, list: &mut MoveList, from: Square, targets: Bitboard) {
        for to in targets {
            let kind = if self.them().contains(to) { MoveKind::Capture } else { MoveKind::Normal };
            push!(list, from, to, kind);
        }
    }

    fn collect_pawn(&self, list: &mut MoveList, from: Square) {
        let stm = self.side_to_move;
        let up = stm.offset();
        let promoting = from.rank() == stm.seventh_rank() as u8;
        let occupancies = self.occupancies();

        for ahead in from.to_bb().shift(up) & !occupancies {
            if promoting {
                for kind in MoveKind::PROMOTIONS {
                    push!(list, from, ahead, kind);
                }
                continue;
            }

            push!(list, from, ahead, MoveKind::Normal);

            if ahead.rank() == stm.third_rank() as u8 {
                for target in ahead.to_bb().shift(up) & !occupancies {
                    push!(list, from, target, MoveKind::DoublePush);
                }
            }
        }

        let attacks = pawn_attacks(from, stm);
        for to in attacks & self.them() {
            if promoting {
                for kind in MoveKind::PROMOTION_CAPTURES {
                    push!(list, from, to, kind);
                }
            } else {
                push!(list, from, to, MoveKind::Capture);
            }
        }

        let en_passant = self.state.en_passant;
        if en_passant != Square::None && attacks.contains(en_passant) {
            push!(list, from, en_passant, MoveKind::EnPassant);
        }
    }
}
