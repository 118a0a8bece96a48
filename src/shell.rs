//! A line-oriented command shell for inspecting positions and running perft.

use std::io::BufRead;

use crate::{board::Board, tools};

#[derive(Debug, PartialEq, Eq)]
enum Control {
    Continue,
    Quit,
}

pub fn message_loop() {
    let mut board = Board::starting_position();

    for line in std::io::stdin().lock().lines() {
        let command = match line {
            Ok(command) => command,
            Err(e) => {
                log::error!("Failed to read from stdin: {e}");
                break;
            }
        };

        if execute(&mut board, &command) == Control::Quit {
            break;
        }
    }
}

fn execute(board: &mut Board, command: &str) -> Control {
    let tokens = command.split_whitespace().collect::<Vec<_>>();
    match tokens.as_slice() {
        [] => (),

        ["position", tokens @ ..] => position(board, tokens),
        ["perft", depth] => match depth.parse() {
            Ok(depth) => {
                tools::perft(depth, board);
            }
            Err(_) => log::warn!("Invalid perft depth: '{depth}'"),
        },
        ["bench"] => {
            tools::bench(tools::DEFAULT_BENCH_DEPTH);
        }
        ["bench", depth] => match depth.parse() {
            Ok(depth) => {
                tools::bench(depth);
            }
            Err(_) => log::warn!("Invalid bench depth: '{depth}'"),
        },

        ["d"] => println!("{board}"),
        ["fen"] => println!("{}", board.to_fen()),
        ["moves"] => println!("{}", join(board.legal_moves().iter().map(ToString::to_string))),
        ["captures"] => println!("{}", join(board.legal_captures().iter().map(ToString::to_string))),
        ["san"] => println!("{}", join(board.legal_moves().iter().map(|&mv| board.to_san(mv)))),
        ["status"] => println!("{}", status(board)),
        ["hash"] => println!("{:016x}", board.hash()),
        ["undo"] => match board.history().last().map(|snapshot| snapshot.mv()) {
            Some(Some(_)) => board.undo_move(),
            Some(None) => board.undo_null_move(),
            None => log::warn!("Nothing to undo"),
        },

        ["quit"] => return Control::Quit,

        _ => log::warn!("Unknown command: '{}'", command.trim_end()),
    };

    Control::Continue
}

fn position(board: &mut Board, mut tokens: &[&str]) {
    while !tokens.is_empty() {
        match tokens {
            ["startpos", rest @ ..] => {
                *board = Board::starting_position();
                tokens = rest;
            }
            ["fen", rest @ ..] => {
                let length = rest.iter().position(|&token| token == "moves").unwrap_or(rest.len());
                if let Err(e) = board.set_fen(&rest[..length].join(" ")) {
                    log::warn!("Invalid FEN: {e}");
                    return;
                }
                tokens = &rest[length..];
            }
            ["moves", rest @ ..] => {
                for text in rest {
                    if let Err(e) = board.make_move_str(text) {
                        log::warn!("{e}");
                        return;
                    }
                }
                break;
            }
            _ => {
                tokens = &tokens[1..];
                continue;
            }
        }
    }
}

fn status(board: &Board) -> &'static str {
    if board.is_checkmate() {
        "checkmate"
    } else if board.is_stalemate() {
        "stalemate"
    } else if board.threefold() {
        "draw by threefold repetition"
    } else if board.fifty_moves() {
        "draw by the fifty-move rule"
    } else if board.in_check() {
        "check"
    } else {
        "ongoing"
    }
}

fn join(items: impl Iterator<Item = String>) -> String {
    items.collect::<Vec<_>>().join(" ")
}
