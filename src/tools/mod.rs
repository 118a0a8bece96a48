mod bench;
mod perft;

pub use bench::{bench, DEFAULT_BENCH_DEPTH};
pub use perft::perft;
