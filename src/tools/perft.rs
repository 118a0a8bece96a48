//! Divide output for [perft](https://www.chessprogramming.org/Perft), the leaf node count
//! of the legal move tree at a fixed depth.

use std::time::Instant;

use crate::board::Board;

/// Runs a split perft on the `Board`: every root move is printed in the `e2e4: 20` divide
/// format followed by the total, so the output can be diffed against other generators.
pub fn perft(depth: usize, board: &mut Board) -> u64 {
    if depth == 0 {
        return 1;
    }

    let start = Instant::now();
    let mut nodes = 0;

    let mut moves = board.legal_moves().iter().copied().collect::<Vec<_>>();
    moves.sort_by_key(ToString::to_string);

    for mv in moves {
        board.make_move(mv);
        let count = board.perft(depth - 1);
        board.undo_move();

        println!("{mv}: {count}");
        nodes += count;
    }

    let elapsed = start.elapsed();
    let knps = nodes as f64 / elapsed.as_secs_f64().max(f64::EPSILON) / 1000.0;

    println!();
    println!("Nodes searched: {nodes}");
    println!("Elapsed: {:.3}s ({knps:.0} kN/s)", elapsed.as_secs_f64());

    log::info!("perft {depth} of '{}': {nodes} nodes", board.to_fen());
    nodes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn divide_sums_to_perft() {
        let mut board = Board::new("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1").unwrap();
        let before = board.clone();

        assert_eq!(perft(2, &mut board), 2039);
        assert_eq!(perft(0, &mut board), 1);
        assert_eq!(board, before);
    }
}
