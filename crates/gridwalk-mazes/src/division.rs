//! Recursive-division generation.
//!
//! The interior starts open inside a solid border and is split by straight
//! wall lines, each with one passage cell. Lines always sit on even rows or
//! columns and passages on odd ones, so a later line can never seal the
//! passage of an earlier one. Pending regions are kept on an explicit stack
//! so every line placement is a separate step.

use gridwalk_core::{Control, EventSink, Pos, Region};
use rand::Rng;

use crate::maze::MazeGen;

/// Direction of a dividing wall line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// A row of wall cells; splits a region into top and bottom.
    Horizontal,
    /// A column of wall cells; splits a region into left and right.
    Vertical,
}

impl Orientation {
    pub fn flip(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }
}

impl<R: Rng> MazeGen<R> {
    /// Open the interior and divide it. Returns `true` if the run was
    /// cancelled.
    pub fn recursive_division(&mut self, sink: &mut impl EventSink, ctl: &mut Control) -> bool {
        let interior = self.interior();
        for p in interior {
            self.carve(p);
        }
        self.emit(sink, &[]);
        if interior.is_empty() {
            return false;
        }

        let first = if self.rng.random_bool(0.5) {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let mut pending = vec![(interior, first)];

        while let Some((region, orientation)) = pending.pop() {
            if !divisible(region, orientation) {
                continue;
            }
            if ctl.checkpoint() {
                return true;
            }

            let (line, halves) = self.divide(region, orientation);
            self.emit(sink, &line);

            // Second half pushed first so the first half is divided first.
            pending.push((halves[1], orientation.flip()));
            pending.push((halves[0], orientation.flip()));
        }
        false
    }

    /// Wall off one line across `region`, leaving a single passage. Returns
    /// the wall cells placed and the two sub-regions on either side.
    fn divide(&mut self, region: Region, orientation: Orientation) -> (Vec<Pos>, [Region; 2]) {
        let Region { min, max } = region;
        let (h, w) = (region.height(), region.width());

        match orientation {
            Orientation::Horizontal => {
                let row = min.row + 1 + 2 * self.rng.random_range(0..(h - 1) / 2);
                let gap = (min.col + 2 * self.rng.random_range(0..(w + 1) / 2)).min(max.col - 1);
                let line: Vec<Pos> = (min.col..max.col)
                    .filter(|&c| c != gap)
                    .map(|c| Pos::new(row, c))
                    .collect();
                for &p in &line {
                    self.block(p);
                }
                let top = Region::sized(min, row - min.row, w);
                let bottom = Region::sized(Pos::new(row + 1, min.col), max.row - row - 1, w);
                (line, [top, bottom])
            }
            Orientation::Vertical => {
                let col = min.col + 1 + 2 * self.rng.random_range(0..(w - 1) / 2);
                let gap = (min.row + 2 * self.rng.random_range(0..(h + 1) / 2)).min(max.row - 1);
                let line: Vec<Pos> = (min.row..max.row)
                    .filter(|&r| r != gap)
                    .map(|r| Pos::new(r, col))
                    .collect();
                for &p in &line {
                    self.block(p);
                }
                let left = Region::sized(min, h, col - min.col);
                let right = Region::sized(Pos::new(min.row, col + 1), h, max.col - col - 1);
                (line, [left, right])
            }
        }
    }
}

/// A region can take a line if it is at least two cells in both directions
/// and at least three across the line.
fn divisible(region: Region, orientation: Orientation) -> bool {
    let (h, w) = (region.height(), region.width());
    if h < 2 || w < 2 {
        return false;
    }
    match orientation {
        Orientation::Horizontal => h >= 3,
        Orientation::Vertical => w >= 3,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::{Generation, is_connected};
    use gridwalk_core::{Event, EventLog, NoopSink};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn generate(size: i32, seed: u64) -> MazeGen<StdRng> {
        let mut mg = MazeGen::new(size, StdRng::seed_from_u64(seed));
        assert!(!mg.recursive_division(&mut NoopSink, &mut Control::unpaced()));
        mg
    }

    #[test]
    fn interior_stays_connected() {
        for size in [5, 6, 7, 10, 15, 24, 31] {
            for seed in 0..10 {
                let mg = generate(size, seed);
                assert!(is_connected(size, &mg.walls()), "size {size} seed {seed}");
            }
        }
    }

    #[test]
    fn border_is_solid_and_interior_partly_open() {
        let mg = generate(11, 3);
        for p in Region::square(11) {
            if !mg.interior().contains(p) {
                assert!(!mg.is_open(p));
            }
        }
        assert!(mg.open_count() > 0);
        assert!(mg.open_count() < mg.interior().len());
    }

    #[test]
    fn lines_on_even_passages_on_odd() {
        let mg = generate(17, 9);
        for p in mg.interior() {
            if p.row % 2 == 1 && p.col % 2 == 1 {
                assert!(mg.is_open(p), "odd cell {p} walled");
            }
        }
    }

    #[test]
    fn small_interiors_stay_open() {
        // 4x4 has a 2x2 interior: too small for any line.
        let mg = generate(4, 1);
        assert_eq!(mg.open_count(), 4);
        let mg = generate(3, 1);
        assert_eq!(mg.open_count(), 1);
    }

    #[test]
    fn five_by_five_gets_exactly_one_line() {
        let mut log = EventLog::new();
        let out = Generation::RecursiveDivision.generate(
            5,
            StdRng::seed_from_u64(2),
            &mut log,
            &mut Control::unpaced(),
        );
        // Border (16) plus a three-cell line with one gap.
        assert_eq!(out.walls.len(), 18);
        let lines: Vec<usize> = log
            .events
            .iter()
            .filter_map(|e| match e {
                Event::WorkingCells(c) if !c.is_empty() => Some(c.len()),
                _ => None,
            })
            .collect();
        assert_eq!(lines, vec![2]);
    }

    #[test]
    fn divisible_thresholds() {
        let r = Region::new(1, 1, 2, 6);
        assert!(!divisible(r, Orientation::Vertical));
        let r = Region::new(1, 1, 3, 4);
        assert!(!divisible(r, Orientation::Horizontal));
        assert!(divisible(r, Orientation::Vertical));
        assert_eq!(Orientation::Horizontal.flip(), Orientation::Vertical);
    }
}
