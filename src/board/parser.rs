use super::Board;
use crate::types::{CastlingKind, Color, Piece, Square};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseFenError {
    /// The FEN string is missing piece placement data.
    #[error("missing piece placement data")]
    MissingPlacementData,
    /// A rank of the placement data doesn't describe exactly eight files, or there
    /// aren't exactly eight ranks.
    #[error("invalid piece placement '{0}'")]
    InvalidPlacement(String),
    /// The FEN string contains an invalid piece type character.
    #[error("invalid piece character '{0}'")]
    InvalidPieceType(char),
    #[error("invalid active color '{0}'")]
    InvalidActiveColor(String),
    #[error("invalid castling availability '{0}'")]
    InvalidCastling(String),
    #[error("invalid en passant square '{0}'")]
    InvalidEnPassant(String),
    #[error("invalid move clock '{0}'")]
    InvalidClock(String),
}

impl Board {
    /// Parses a [Forsyth–Edwards Notation][fen] string into a `Board`.
    ///
    /// Missing castling and en passant fields are read as `-`, and missing clocks
    /// as `0 1`.
    ///
    /// [fen]: https://en.wikipedia.org/wiki/Forsyth%E2%80%93Edwards_Notation
    pub fn new(fen: &str) -> Result<Self, ParseFenError> {
        Self::from_fen(fen)
    }

    /// Replaces the whole position, history included, with the one described by `fen`.
    /// On error the board is left untouched.
    pub fn set_fen(&mut self, fen: &str) -> Result<(), ParseFenError> {
        *self = Self::from_fen(fen)?;
        log::debug!("Loaded position '{}'", self.to_fen());
        Ok(())
    }

    fn from_fen(fen: &str) -> Result<Self, ParseFenError> {
        let mut board = Self::default();
        let mut parts = fen.split_whitespace();

        let placement = parts.next().ok_or(ParseFenError::MissingPlacementData)?;
        let rows = placement.split('/').collect::<Vec<_>>();
        if rows.len() != 8 {
            return Err(ParseFenError::InvalidPlacement(placement.to_string()));
        }

        for (rank, row) in rows.into_iter().rev().enumerate() {
            let mut file = 0;

            for symbol in row.chars() {
                if let Some(skip) = symbol.to_digit(10).filter(|skip| (1..=8).contains(skip)) {
                    file += skip as u8;
                    if file > 8 {
                        return Err(ParseFenError::InvalidPlacement(row.to_string()));
                    }
                    continue;
                }

                let piece = Piece::try_from(symbol).map_err(|()| ParseFenError::InvalidPieceType(symbol))?;
                if file >= 8 {
                    return Err(ParseFenError::InvalidPlacement(row.to_string()));
                }

                let square = Square::from_rank_file(rank as u8, file);
                board.add_piece(piece.piece_color(), piece.piece_type(), square);
                file += 1;
            }

            if file != 8 {
                return Err(ParseFenError::InvalidPlacement(row.to_string()));
            }
        }

        board.side_to_move = match parts.next() {
            Some("w") => Color::White,
            Some("b") => Color::Black,
            other => return Err(ParseFenError::InvalidActiveColor(other.unwrap_or_default().to_string())),
        };

        let castling = parts.next().unwrap_or("-");
        if castling != "-" {
            for symbol in castling.chars() {
                let kind = CastlingKind::ALL
                    .into_iter()
                    .find(|kind| kind.symbol() == symbol)
                    .ok_or_else(|| ParseFenError::InvalidCastling(castling.to_string()))?;

                board.state.castling.set(kind);
            }
        }

        board.state.en_passant = match parts.next().unwrap_or("-") {
            "-" => Square::None,
            text => match Square::try_from(text) {
                Ok(square) if square.rank() == 2 || square.rank() == 5 => square,
                _ => return Err(ParseFenError::InvalidEnPassant(text.to_string())),
            },
        };

        board.state.halfmove_clock = parse_clock(parts.next().unwrap_or("0"))?;
        board.fullmove_number = parse_clock(parts.next().unwrap_or("1"))?.max(1);

        board.state.hash_key = board.generate_hash_key();
        Ok(board)
    }

    pub fn to_fen(&self) -> String {
        let mut fen = String::new();

        for rank in (0..8).rev() {
            let mut empty_count = 0;

            for file in 0..8 {
                let Some(piece) = self.piece_at(Square::from_rank_file(rank, file)) else {
                    empty_count += 1;
                    continue;
                };

                if empty_count > 0 {
                    fen.push_str(&empty_count.to_string());
                    empty_count = 0;
                }
                fen.push_str(&piece.to_string());
            }

            if empty_count > 0 {
                fen.push_str(&empty_count.to_string());
            }

            if rank > 0 {
                fen.push('/');
            }
        }

        fen.push(' ');
        fen.push_str(&self.side_to_move.to_string());
        fen.push(' ');
        fen.push_str(&self.state.castling.to_string());
        fen.push(' ');
        fen.push_str(&self.state.en_passant.to_string());
        fen.push(' ');
        fen.push_str(&self.state.halfmove_clock.to_string());
        fen.push(' ');
        fen.push_str(&self.fullmove_number.to_string());
        fen
    }
}

fn parse_clock(text: &str) -> Result<u32, ParseFenError> {
    text.parse().map_err(|_| ParseFenError::InvalidClock(text.to_string()))
}

impl std::str::FromStr for Board {
    type Err = ParseFenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_fen(s)
    }
}
