use rayon::prelude::*;

use super::*;

impl<const L: usize> Position<L> {
    /// Perft (Performance Test) - counts leaf nodes at a given depth.
    /// Used to validate move generation correctness.
    pub fn perft(&mut self, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }

        let mut moves = MoveList::new();
        self.all_legal_moves_into(&mut moves);

        // Bulk counting at the last ply
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for mv in moves {
            self.make_move(mv);
            nodes += self.perft(depth - 1);
            self.unmake_move(mv);
        }
        nodes
    }

    /// Divide - perft count below each legal move (debugging tool)
    pub fn divide(&mut self, depth: u32) -> Vec<(Move, u64)> {
        let moves = self.all_legal_moves();
        let mut counts = Vec::with_capacity(moves.len());

        for mv in moves {
            self.make_move(mv);
            let count = if depth > 1 { self.perft(depth - 1) } else { 1 };
            self.unmake_move(mv);
            log::debug!("{}: {}", mv, count);
            counts.push((mv, count));
        }
        counts
    }

    /// Same as [`Position::divide`], with each root move searched on its own
    /// copy of the position by the rayon pool.
    pub fn divide_parallel(&self, depth: u32) -> Vec<(Move, u64)> {
        let moves = self.clone().all_legal_moves();

        moves[..]
            .par_iter()
            .map(|&mv| {
                let mut pos = self.clone();
                pos.make_move(mv);
                let count = if depth > 1 { pos.perft(depth - 1) } else { 1 };
                (mv, count)
            })
            .collect()
    }

    /// Perft summed over [`Position::divide_parallel`]
    pub fn perft_parallel(&self, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }
        self.divide_parallel(depth).iter().map(|(_, count)| count).sum()
    }
}
