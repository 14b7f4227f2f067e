//! Randomized-frontier (Prim's style) generation.
//!
//! Junctions sit on the odd lattice inside the border, two cells apart, and
//! the single cell between two junctions is the passage linking them. Every
//! frontier junction is joined to the carved region exactly once, so the
//! result is a spanning tree: a perfect maze.

use gridwalk_core::{Control, EventSink, Pos};
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::maze::{MazeGen, cell_count};

/// Offsets to the four neighbouring junctions.
const JUNCTION_STEPS: [(i32, i32); 4] = [(-2, 0), (0, 2), (2, 0), (0, -2)];

/// The junction growth starts from.
const SEED: Pos = Pos::new(1, 1);

impl<R: Rng> MazeGen<R> {
    /// Carve a perfect maze into a fully walled grid. Returns `true` if the
    /// run was cancelled.
    pub fn randomized_frontier(&mut self, sink: &mut impl EventSink, ctl: &mut Control) -> bool {
        let interior = self.interior();
        if !interior.contains(SEED) {
            return false;
        }

        self.carve(SEED);
        self.emit(sink, &[SEED]);

        let mut frontier: Vec<Pos> = Vec::new();
        let mut queued = vec![false; cell_count(self.size())];
        self.queue_junctions(SEED, &mut frontier, &mut queued);

        while !frontier.is_empty() {
            if ctl.checkpoint() {
                return true;
            }

            let i = self.rng.random_range(0..frontier.len());
            let candidate = frontier.swap_remove(i);
            if self.is_open(candidate) {
                continue;
            }

            let carved: Vec<Pos> = self
                .junctions(candidate)
                .filter(|&j| self.is_open(j))
                .collect();
            let Some(&link) = carved.choose(&mut self.rng) else {
                continue;
            };

            let passage = candidate.midpoint(link);
            self.carve(candidate);
            self.carve(passage);
            self.emit(sink, &[candidate, passage]);

            self.queue_junctions(candidate, &mut frontier, &mut queued);
        }
        false
    }

    /// Junctions two steps from `p` that lie inside the border.
    fn junctions(&self, p: Pos) -> impl Iterator<Item = Pos> + use<R> {
        let interior = self.interior();
        JUNCTION_STEPS
            .into_iter()
            .map(move |(dr, dc)| p.shift(dr, dc))
            .filter(move |&j| interior.contains(j))
    }

    /// Add the uncarved junctions around `p` to the frontier, once each.
    fn queue_junctions(&self, p: Pos, frontier: &mut Vec<Pos>, queued: &mut [bool]) {
        for j in self.junctions(p) {
            let i = j.row as usize * self.size() as usize + j.col as usize;
            if self.is_open(j) || queued[i] {
                continue;
            }
            queued[i] = true;
            frontier.push(j);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::{Generation, is_connected};
    use gridwalk_core::{Dir, EventLog, NoopSink, Region};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn generate(size: i32, seed: u64) -> MazeGen<StdRng> {
        let mut mg = MazeGen::new(size, StdRng::seed_from_u64(seed));
        assert!(!mg.randomized_frontier(&mut NoopSink, &mut Control::unpaced()));
        mg
    }

    /// Number of adjacent open pairs.
    fn edges(mg: &MazeGen<StdRng>) -> usize {
        Region::square(mg.size())
            .iter()
            .filter(|&p| mg.is_open(p))
            .map(|p| {
                [Dir::Right, Dir::Down]
                    .into_iter()
                    .filter(|&d| mg.is_open(p.step(d)))
                    .count()
            })
            .sum()
    }

    #[test]
    fn carves_every_junction() {
        for size in [5, 7, 11, 21] {
            let mg = generate(size, size as u64);
            for p in mg.interior() {
                if p.row % 2 == 1 && p.col % 2 == 1 {
                    assert!(mg.is_open(p), "junction {p} left walled");
                }
            }
            let n = ((size - 1) / 2) as usize;
            assert_eq!(mg.open_count(), 2 * n * n - 1);
        }
    }

    #[test]
    fn result_is_a_spanning_tree() {
        for seed in 0..20 {
            let mg = generate(13, seed);
            let walls = mg.walls();
            assert!(is_connected(13, &walls));
            assert_eq!(edges(&mg), mg.open_count() - 1);
        }
    }

    #[test]
    fn border_stays_solid() {
        let mg = generate(9, 7);
        for p in Region::square(9) {
            if !mg.interior().contains(p) {
                assert!(!mg.is_open(p));
            }
        }
    }

    #[test]
    fn even_size_leaves_last_line_walled() {
        let mg = generate(8, 4);
        assert!(is_connected(8, &mg.walls()));
        for i in 0..8 {
            assert!(!mg.is_open(Pos::new(6, i)));
            assert!(!mg.is_open(Pos::new(i, 6)));
        }
    }

    #[test]
    fn three_by_three_is_a_single_cell() {
        let mg = generate(3, 0);
        assert_eq!(mg.open_count(), 1);
        assert!(mg.is_open(SEED));
    }

    #[test]
    fn each_carve_reports_two_cells() {
        let mut log = EventLog::new();
        Generation::RandomizedFrontier.generate(
            7,
            StdRng::seed_from_u64(11),
            &mut log,
            &mut Control::unpaced(),
        );
        let working: Vec<_> = log
            .events
            .iter()
            .filter_map(|e| match e {
                gridwalk_core::Event::WorkingCells(c) => Some(c.len()),
                _ => None,
            })
            .collect();
        // Seed, 8 carves, then the final clear.
        assert_eq!(working.len(), 10);
        assert_eq!(working[0], 1);
        assert!(working[1..9].iter().all(|&n| n == 2));
        assert_eq!(working[9], 0);
    }
}
