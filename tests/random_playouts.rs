mod common;

use kestrel::board::{Board, STARTING_FEN};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

const PLAYOUTS: u64 = 24;
const MAX_PLIES: usize = 300;

const OPENINGS: [&str; 3] = [
    STARTING_FEN,
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
];

/// Plays random legal and null moves, then takes all of them back, checking the
/// incremental state after every step.
fn playout(seed: u64) {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);

    let initial = Board::new(OPENINGS[rng.random_range(0..OPENINGS.len())]).unwrap();
    let mut board = initial.clone();
    let mut trail = Vec::new();

    for _ in 0..MAX_PLIES {
        common::assert_consistent(&board);
        assert!(board.is_valid(), "{}", board.to_fen());
        assert!(!(board.is_checkmate() && board.is_stalemate()));
        assert!(!(board.is_checkmate() && board.is_draw()));

        let moves = board.legal_moves();
        if moves.is_empty() || board.is_draw() {
            break;
        }

        if !board.in_check() && rng.random_range(0..10) == 0 {
            let hash = board.hash();
            board.make_null_move();
            assert_ne!(board.hash(), hash);
            trail.push(None);
            continue;
        }

        let mv = moves[rng.random_range(0..moves.len())];
        let predicted = board.predict_hash(mv);

        board.make_move(mv);
        assert_eq!(board.hash(), predicted, "{mv:?}");
        trail.push(Some(mv));
    }

    assert_eq!(board.history().len(), trail.len());

    while let Some(entry) = trail.pop() {
        match entry {
            Some(mv) => {
                assert_eq!(board.history().last().and_then(|snapshot| snapshot.mv()), Some(mv));
                board.undo_move();
            }
            None => board.undo_null_move(),
        }
        common::assert_consistent(&board);
    }

    assert_eq!(board, initial);
}

#[test]
fn random_playouts_round_trip() {
    for seed in 0..PLAYOUTS {
        playout(seed);
    }
}

#[test]
fn fen_survives_random_games() {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(0x5EED);
    let mut board = Board::starting_position();

    for _ in 0..120 {
        let moves = board.legal_moves();
        if moves.is_empty() {
            break;
        }

        board.make_move(moves[rng.random_range(0..moves.len())]);

        let reparsed = Board::new(&board.to_fen()).unwrap();
        assert_eq!(reparsed.to_fen(), board.to_fen());
        assert_eq!(reparsed.hash(), board.hash());
    }
}
