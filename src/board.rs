use crate::types::{zobrist::ZOBRIST, Bitboard, CastlingKind, CastlingRights, Color, Flank, Move, Piece, PieceType, Square};

pub use self::{notation::ParseMoveError, parser::ParseFenError, validate::InvalidPositionError};


mod attacks;
mod draw;
mod generator;
mod makemove;
mod movegen;
mod notation;
mod parser;
mod perft;
mod validate;

/// The starting position in Forsyth–Edwards notation.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// The part of the position that cannot be recomputed when a move is taken back.
/// It's copied into the history on every make call and copied back on undo.
#[derive(Copy, Clone, Default, PartialEq, Eq, Debug)]
struct InternalState {
    hash_key: u64,
    en_passant: Square,
    castling: CastlingRights,
    halfmove_clock: u32,
}

/// A history entry pushed by every real or null move.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Snapshot {
    state: InternalState,
    mv: Option<Move>,
    captured: Option<PieceType>,
}

impl Snapshot {
    /// The hash of the position before the move was made.
    pub const fn hash(&self) -> u64 {
        self.state.hash_key
    }

    /// The move that was made, or `None` for a null move.
    pub const fn mv(&self) -> Option<Move> {
        self.mv
    }

    pub const fn en_passant(&self) -> Square {
        self.state.en_passant
    }

    pub const fn halfmove_clock(&self) -> u32 {
        self.state.halfmove_clock
    }

    pub const fn castling(&self) -> CastlingRights {
        self.state.castling
    }

    pub const fn captured(&self) -> Option<PieceType> {
        self.captured
    }
}

/// Contains the same information as a FEN string, used to describe a chess position,
/// along with the history required to take moves back.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board {
    side_to_move: Color,
    pieces: [Bitboard; PieceType::NUM],
    colors: [Bitboard; Color::NUM],
    state: InternalState,
    fullmove_number: u32,
    history: Vec<Snapshot>,
}

impl Board {
    /// Returns the board corresponding to the starting position.
    pub fn starting_position() -> Self {
        Self::new(STARTING_FEN).expect("the starting position is a valid FEN")
    }

    pub const fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Returns the Zobrist hash key for the current position.
    pub const fn hash(&self) -> u64 {
        self.state.hash_key
    }

    /// Returns the en passant target square, or `Square::None` if there is none.
    pub const fn en_passant(&self) -> Square {
        self.state.en_passant
    }

    pub const fn castling(&self) -> CastlingRights {
        self.state.castling
    }

    pub const fn can_castle(&self, color: Color, flank: Flank) -> bool {
        self.state.castling.is_allowed(CastlingKind::new(color, flank))
    }

    pub const fn halfmove_clock(&self) -> u32 {
        self.state.halfmove_clock
    }

    pub const fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Returns the snapshots of all moves that have not been taken back, oldest first.
    pub fn history(&self) -> &[Snapshot] {
        &self.history
    }

    /// Returns a `Bitboard` for the specified `Color`.
    pub fn colors(&self, color: Color) -> Bitboard {
        self.colors[color]
    }

    /// Returns a `Bitboard` for the specified `PieceType`.
    pub fn pieces(&self, piece_type: PieceType) -> Bitboard {
        self.pieces[piece_type]
    }

    /// Returns a `Bitboard` for all pieces on the board.
    pub fn occupancies(&self) -> Bitboard {
        self.colors(Color::White) | self.colors(Color::Black)
    }

    /// Returns a `Bitboard` for the specified `PieceType` and `Color`.
    pub fn of(&self, piece_type: PieceType, color: Color) -> Bitboard {
        self.pieces(piece_type) & self.colors(color)
    }

    /// Returns a `Bitboard` with friendly pieces for the current state.
    pub fn us(&self) -> Bitboard {
        self.colors(self.side_to_move)
    }

    /// Returns a `Bitboard` with enemy pieces for the current state.
    pub fn them(&self) -> Bitboard {
        self.colors(!self.side_to_move)
    }

    /// Returns a `Bitboard` with friendly pieces of the specified `PieceType`.
    pub fn our(&self, piece_type: PieceType) -> Bitboard {
        self.pieces(piece_type) & self.us()
    }

    /// Returns a `Bitboard` with enemy pieces of the specified `PieceType`.
    pub fn their(&self, piece_type: PieceType) -> Bitboard {
        self.pieces(piece_type) & self.them()
    }

    /// Finds the type of the piece on the specified square by testing each piece set.
    pub fn piece_on(&self, square: Square) -> Option<PieceType> {
        PieceType::ALL.into_iter().find(|&piece_type| self.pieces[piece_type].contains(square))
    }

    pub fn color_on(&self, square: Square) -> Option<Color> {
        if self.colors[Color::White].contains(square) {
            Some(Color::White)
        } else if self.colors[Color::Black].contains(square) {
            Some(Color::Black)
        } else {
            None
        }
    }

    /// Returns the colored piece on the specified square, if any.
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        Some(Piece::new(self.color_on(square)?, self.piece_on(square)?))
    }

    /// Returns the square of the king of the specified color, or `Square::None` if it's missing.
    pub fn king_square(&self, color: Color) -> Square {
        let king = self.of(PieceType::King, color);
        if king.is_empty() {
            Square::None
        } else {
            king.lsb()
        }
    }

    /// Places a piece of the specified type and color on the square.
    fn add_piece(&mut self, color: Color, piece_type: PieceType, square: Square) {
        self.colors[color].set(square);
        self.pieces[piece_type].set(square);
        self.update_hash(Piece::new(color, piece_type), square);
    }

    /// Removes a piece of the specified type and color from the square.
    fn remove_piece(&mut self, color: Color, piece_type: PieceType, square: Square) {
        self.colors[color].clear(square);
        self.pieces[piece_type].clear(square);
        self.update_hash(Piece::new(color, piece_type), square);
    }

    fn move_piece(&mut self, color: Color, piece_type: PieceType, start: Square, target: Square) {
        self.remove_piece(color, piece_type, start);
        self.add_piece(color, piece_type, target);
    }

    fn update_hash(&mut self, piece: Piece, square: Square) {
        self.state.hash_key ^= ZOBRIST.piece(piece, square);
    }

    /// Resets the board to an empty position with white to move.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Performs Zobrist hashing on `self`, generating an *almost* unique
    /// position hash key from scratch.
    ///
    /// The key kept in `hash()` is updated incrementally and must always be equal
    /// to the value returned here.
    pub fn generate_hash_key(&self) -> u64 {
        let mut hash = 0;

        for color in [Color::White, Color::Black] {
            for piece_type in PieceType::ALL {
                for square in self.of(piece_type, color) {
                    hash ^= ZOBRIST.piece(Piece::new(color, piece_type), square);
                }
            }
        }

        if self.side_to_move == Color::Black {
            hash ^= ZOBRIST.side;
        }

        for kind in self.state.castling.iter() {
            hash ^= ZOBRIST.castling(kind);
        }

        if self.state.en_passant != Square::None {
            hash ^= ZOBRIST.en_passant(self.state.en_passant);
        }

        hash
    }

    /// Returns a copy of the position without its history.
    fn detached(&self) -> Self {
        Self {
            side_to_move: self.side_to_move,
            pieces: self.pieces,
            colors: self.colors,
            state: self.state,
            fullmove_number: self.fullmove_number,
            history: Vec::new(),
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self {
            side_to_move: Color::White,
            pieces: [Bitboard::default(); PieceType::NUM],
            colors: [Bitboard::default(); Color::NUM],
            state: InternalState::default(),
            fullmove_number: 1,
            history: Vec::default(),
        }
    }
}

impl std::fmt::Display for Board {
    /// Prints the board from white's point of view followed by a summary of the state.
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for rank in (0..8).rev() {
            for file in 0..8 {
                match self.piece_at(Square::from_rank_file(rank, file)) {
                    Some(piece) => write!(f, "{piece}")?,
                    None => write!(f, "-")?,
                }
            }
            writeln!(f)?;
        }

        writeln!(f, "Castling: {}", self.state.castling)?;
        writeln!(f, "EP: {}", self.state.en_passant)?;
        write!(f, "Turn: {}", self.side_to_move)
    }
}
