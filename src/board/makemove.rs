use super::{Board, Snapshot};
use crate::types::{zobrist::ZOBRIST, CastlingKind, Color, Move, MoveKind, Piece, PieceType, Square};

impl Board {
    /// Passes the turn without moving a piece.
    ///
    /// The en passant target is cleared and the halfmove clock is reset, so repetition
    /// scans never reach back across a null move.
    pub fn make_null_move(&mut self) {
        self.history.push(Snapshot { state: self.state, mv: None, captured: None });

        self.side_to_move = !self.side_to_move;
        self.state.hash_key ^= ZOBRIST.side;
        self.state.halfmove_clock = 0;

        if self.state.en_passant != Square::None {
            self.state.hash_key ^= ZOBRIST.en_passant(self.state.en_passant);
            self.state.en_passant = Square::None;
        }
    }

    /// Takes back the most recent null move.
    ///
    /// # Panics
    ///
    /// Panics if the history is empty or its last entry is a real move.
    pub fn undo_null_move(&mut self) {
        let snapshot = self.history.pop().expect("undo_null_move called with an empty history");
        assert!(snapshot.mv.is_none(), "undo_null_move called after a real move");

        self.side_to_move = !self.side_to_move;
        self.state = snapshot.state;
    }

    /// Plays a move generated for the current position.
    ///
    /// # Panics
    ///
    /// Panics if there is no piece on the origin square of the move.
    pub fn make_move(&mut self, mv: Move) {
        let start = mv.from();
        let target = mv.to();
        let stm = self.side_to_move;
        let pt = self.piece_on(start).expect("make_move called with an empty origin square");

        let mut snapshot = Snapshot { state: self.state, mv: Some(mv), captured: None };

        self.state.hash_key ^= ZOBRIST.side;

        if self.state.en_passant != Square::None {
            self.state.hash_key ^= ZOBRIST.en_passant(self.state.en_passant);
            self.state.en_passant = Square::None;
        }

        if mv.is_capture() || pt == PieceType::Pawn {
            self.state.halfmove_clock = 0;
        } else {
            self.state.halfmove_clock = self.state.halfmove_clock.saturating_add(1);
        }

        if mv.is_en_passant() {
            self.remove_piece(!stm, PieceType::Pawn, target ^ 8);
            snapshot.captured = Some(PieceType::Pawn);
        } else if let Some(captured) = self.piece_on(target) {
            self.remove_piece(!stm, captured, target);
            snapshot.captured = Some(captured);
        }

        self.move_piece(stm, pt, start, target);

        match mv.kind() {
            MoveKind::DoublePush => {
                self.state.en_passant = start.midpoint(target);
                self.state.hash_key ^= ZOBRIST.en_passant(self.state.en_passant);
            }
            MoveKind::Castling => {
                let kind = castling_kind(target);
                self.move_piece(stm, PieceType::Rook, kind.rook_start(), kind.rook_target());
            }
            _ => {
                if let Some(promotion) = mv.promotion_piece() {
                    self.remove_piece(stm, PieceType::Pawn, target);
                    self.add_piece(stm, promotion, target);
                }
            }
        }

        let castling = self.state.castling;
        self.state.castling.update(start, target);
        for kind in castling.difference(self.state.castling) {
            self.state.hash_key ^= ZOBRIST.castling(kind);
        }

        if stm == Color::Black {
            self.fullmove_number += 1;
        }

        self.side_to_move = !stm;
        self.history.push(snapshot);
    }

    /// Takes back the most recent move, restoring the exact prior state.
    ///
    /// # Panics
    ///
    /// Panics if the history is empty or its last entry is a null move.
    pub fn undo_move(&mut self) {
        let snapshot = self.history.pop().expect("undo_move called with an empty history");
        let mv = snapshot.mv.expect("undo_move called after a null move");

        self.side_to_move = !self.side_to_move;

        let start = mv.from();
        let target = mv.to();
        let stm = self.side_to_move;

        if let Some(promotion) = mv.promotion_piece() {
            self.remove_piece(stm, promotion, target);
            self.add_piece(stm, PieceType::Pawn, start);
        } else if let Some(pt) = self.piece_on(target) {
            self.move_piece(stm, pt, target, start);
        }

        match snapshot.captured {
            Some(_) if mv.is_en_passant() => self.add_piece(!stm, PieceType::Pawn, target ^ 8),
            Some(captured) => self.add_piece(!stm, captured, target),
            None => (),
        }

        if mv.is_castling() {
            let kind = castling_kind(target);
            self.move_piece(stm, PieceType::Rook, kind.rook_target(), kind.rook_start());
        }

        if stm == Color::Black {
            self.fullmove_number -= 1;
        }

        self.state = snapshot.state;
    }

    /// Returns the hash the position would have after `mv`, without playing it.
    ///
    /// # Panics
    ///
    /// Panics if there is no piece on the origin square of the move.
    pub fn predict_hash(&self, mv: Move) -> u64 {
        let start = mv.from();
        let target = mv.to();
        let stm = self.side_to_move;
        let pt = self.piece_on(start).expect("predict_hash called with an empty origin square");

        let mut hash = self.hash() ^ ZOBRIST.side;

        if self.state.en_passant != Square::None {
            hash ^= ZOBRIST.en_passant(self.state.en_passant);
        }

        if mv.is_en_passant() {
            hash ^= ZOBRIST.piece(Piece::new(!stm, PieceType::Pawn), target ^ 8);
        } else if let Some(captured) = self.piece_on(target) {
            hash ^= ZOBRIST.piece(Piece::new(!stm, captured), target);
        }

        let placed = mv.promotion_piece().unwrap_or(pt);
        hash ^= ZOBRIST.piece(Piece::new(stm, pt), start);
        hash ^= ZOBRIST.piece(Piece::new(stm, placed), target);

        match mv.kind() {
            MoveKind::DoublePush => {
                hash ^= ZOBRIST.en_passant(start.midpoint(target));
            }
            MoveKind::Castling => {
                let kind = castling_kind(target);
                let rook = Piece::new(stm, PieceType::Rook);
                hash ^= ZOBRIST.piece(rook, kind.rook_start()) ^ ZOBRIST.piece(rook, kind.rook_target());
            }
            _ => (),
        }

        let mut castling = self.state.castling;
        castling.update(start, target);
        for kind in castling.difference(self.state.castling) {
            hash ^= ZOBRIST.castling(kind);
        }

        hash
    }
}

fn castling_kind(king_target: Square) -> CastlingKind {
    CastlingKind::from_landing_square(king_target).expect("castling move with an unexpected king target")
}
