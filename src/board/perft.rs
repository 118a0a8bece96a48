use super::Board;

impl Board {
    /// Counts the leaf nodes of the legal move tree of the given depth.
    ///
    /// See [Perft](https://www.chessprogramming.org/Perft) for more information.
    pub fn perft(&mut self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        if depth == 1 {
            return self.count_moves() as u64;
        }

        let mut nodes = 0;
        for &mv in self.legal_moves().iter() {
            self.make_move(mv);
            nodes += self.perft(depth - 1);
            self.undo_move();
        }
        nodes
    }
}
