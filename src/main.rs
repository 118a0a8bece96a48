use env_logger::Env;
use kestrel::{board::Board, shell, tools};

const USAGE: &str = "Usage: kestrel [perft <depth> [fen] | bench [depth]]";

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = std::env::args().skip(1).collect::<Vec<_>>();
    let args = args.iter().map(String::as_str).collect::<Vec<_>>();

    match args.as_slice() {
        ["perft", depth, fen @ ..] => perft(depth, fen),
        ["bench"] => {
            tools::bench(tools::DEFAULT_BENCH_DEPTH);
        }
        ["bench", depth] => match depth.parse() {
            Ok(depth) => {
                tools::bench(depth);
            }
            Err(_) => log::error!("{USAGE}"),
        },
        [] => shell::message_loop(),
        _ => log::error!("{USAGE}"),
    }
}

fn perft(depth: &str, fen: &[&str]) {
    let Ok(depth) = depth.parse() else {
        log::error!("{USAGE}");
        return;
    };

    let board = match fen {
        [] => Ok(Board::starting_position()),
        fen => Board::new(&fen.join(" ")),
    };

    match board {
        Ok(mut board) => {
            tools::perft(depth, &mut board);
        }
        Err(e) => log::error!("Invalid FEN: {e}"),
    }
}
