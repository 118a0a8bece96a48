#![allow(dead_code)]

use kestrel::board::Board;

/// Counts leaf nodes with the plain make/undo recursion, independent of `Board::perft`.
pub fn perft(board: &mut Board, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let mut nodes = 0;

    for &mv in board.legal_moves().iter() {
        board.make_move(mv);
        nodes += perft(board, depth - 1);
        board.undo_move();
    }

    nodes
}

/// Asserts that the incremental state of the board agrees with its from-scratch counterparts.
pub fn assert_consistent(board: &Board) {
    assert_eq!(board.hash(), board.generate_hash_key(), "stale hash in {}", board.to_fen());
    assert_eq!(board.count_moves(), board.legal_moves().len());
    assert!(board.occupancies() == board.colors(kestrel::types::Color::White) | board.colors(kestrel::types::Color::Black));
}

macro_rules! assert_perft {
    ($($name:ident: ($fen:tt, $depth:tt, $expected:tt),)*) => {$(
        #[test]
        fn $name() {
            let mut board = kestrel::board::Board::new($fen).unwrap();
            assert_eq!(common::perft(&mut board, $depth), $expected);
            assert_eq!(board.perft($depth), $expected);
        }
    )*};
}

#[allow(unused_imports)]
pub(crate) use assert_perft;
