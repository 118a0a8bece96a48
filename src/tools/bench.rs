//! Bench runs perft over a fixed set of positions and reports the total node count
//! and speed. A changed node count means the move generator changed its behavior.

use std::time::Instant;

use crate::board::Board;

pub const DEFAULT_BENCH_DEPTH: usize = 4;

const POSITIONS: [&str; 6] = [
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
    "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
    "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
    "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w - - 0 10",
];

/// Runs a fixed depth perft on the bench positions and returns the total node count.
pub fn bench(depth: usize) -> u64 {
    println!("{}", "-".repeat(50));
    println!("{:>15} {:>13} {:>15}", "Nodes", "Elapsed", "NPS");
    println!("{}", "-".repeat(50));

    let time = Instant::now();

    let mut nodes = 0;

    for (index, position) in POSITIONS.iter().enumerate() {
        let now = Instant::now();

        let mut board = match Board::new(position) {
            Ok(board) => board,
            Err(e) => {
                log::error!("Skipping bench position '{position}': {e}");
                continue;
            }
        };

        let count = board.perft(depth);
        nodes += count;

        let seconds = now.elapsed().as_secs_f32();
        let knps = count as f32 / seconds / 1000f32;

        println!("{:>3} {count:>11} {seconds:>12.3}s {knps:>15.3} kN/s", index + 1);
    }

    let seconds = time.elapsed().as_secs_f32();
    let knps = nodes as f32 / seconds / 1000f32;

    println!("{}", "-".repeat(50));
    println!("{nodes:>15} {seconds:>12.3}s {knps:>15.3} kN/s");
    println!("{}", "-".repeat(50));

    log::info!("bench depth {depth}: {nodes} nodes, {:.0} nps", nodes as f32 / seconds);
    nodes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bench_node_count() {
        assert_eq!(bench(2), 400 + 2039 + 191 + 264 + 1486 + 2079);
    }
}
