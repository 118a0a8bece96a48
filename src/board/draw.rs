use super::Board;

impl Board {
    /// Returns `true` if the current position has occurred twice before with the same
    /// side to move.
    ///
    /// Only positions within the halfmove clock are considered, since anything older
    /// is separated from the current position by an irreversible move.
    pub fn threefold(&self) -> bool {
        let halfmove_clock = self.state.halfmove_clock as usize;
        if halfmove_clock < 8 {
            return false;
        }

        let len = self.history.len();
        let mut repetitions = 0;

        for distance in (2..=halfmove_clock.min(len)).step_by(2) {
            if self.history[len - distance].hash() == self.hash() {
                repetitions += 1;
                if repetitions == 2 {
                    return true;
                }
            }
        }

        false
    }

    pub const fn fifty_moves(&self) -> bool {
        self.state.halfmove_clock >= 100
    }

    /// Returns `true` if the game is drawn by repetition or the fifty-move rule.
    /// A checkmate delivered on the hundredth halfmove still counts as a win.
    pub fn is_draw(&self) -> bool {
        (self.threefold() || self.fifty_moves()) && !self.is_checkmate()
    }

    pub fn is_checkmate(&self) -> bool {
        self.in_check() && self.count_moves() == 0
    }

    pub fn is_stalemate(&self) -> bool {
        !self.in_check() && self.count_moves() == 0
    }

    /// Returns `true` if the game is over: no legal moves remain or the position is drawn.
    pub fn is_terminal(&self) -> bool {
        self.count_moves() == 0 || self.is_draw()
    }
}
