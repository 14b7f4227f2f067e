//! Shared generator state and algorithm selection.

use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use gridwalk_core::{Control, Dir, EventSink, Pos, Region, UnknownAlgorithm, Walls};
use rand::Rng;

/// Result of one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MazeOutcome {
    /// Every cell that was not carved.
    pub walls: Walls,
    /// Whether the run stopped early; `walls` is then the partial layout.
    pub cancelled: bool,
}

// ---------------------------------------------------------------------------
// MazeGen
// ---------------------------------------------------------------------------

/// Working state of one generation run on a `size` × `size` grid.
///
/// Starts fully walled. Cells become passages with [`carve`](Self::carve)
/// and walls again with [`block`](Self::block).
pub struct MazeGen<R: Rng> {
    pub rng: R,
    size: i32,
    open: Vec<bool>,
}

impl<R: Rng> MazeGen<R> {
    /// Create a fully walled grid.
    pub fn new(size: i32, rng: R) -> Self {
        let size = size.max(0);
        Self {
            rng,
            size,
            open: vec![false; cell_count(size)],
        }
    }

    #[inline]
    pub fn size(&self) -> i32 {
        self.size
    }

    /// Everything inside the one-cell border.
    #[inline]
    pub fn interior(&self) -> Region {
        Region::square(self.size).inset(1)
    }

    #[inline]
    fn idx(&self, p: Pos) -> Option<usize> {
        if p.row < 0 || p.col < 0 || p.row >= self.size || p.col >= self.size {
            return None;
        }
        Some(p.row as usize * self.size as usize + p.col as usize)
    }

    /// Whether `p` has been carved. Cells off the grid are never open.
    #[inline]
    pub fn is_open(&self, p: Pos) -> bool {
        self.idx(p).is_some_and(|i| self.open[i])
    }

    /// Make `p` a passage. Ignored off the grid.
    #[inline]
    pub fn carve(&mut self, p: Pos) {
        if let Some(i) = self.idx(p) {
            self.open[i] = true;
        }
    }

    /// Make `p` a wall. Ignored off the grid.
    #[inline]
    pub fn block(&mut self, p: Pos) {
        if let Some(i) = self.idx(p) {
            self.open[i] = false;
        }
    }

    /// Number of carved cells.
    pub fn open_count(&self) -> usize {
        self.open.iter().filter(|&&o| o).count()
    }

    /// Snapshot of every cell that is not carved.
    pub fn walls(&self) -> Walls {
        Region::square(self.size)
            .iter()
            .filter(|&p| !self.is_open(p))
            .collect()
    }

    /// Report the cells being worked on, then the full wall layout.
    pub(crate) fn emit(&self, sink: &mut impl EventSink, working: &[Pos]) {
        sink.on_working_cells_changed(working);
        sink.on_walls_changed(&self.walls());
    }

    /// Final snapshot, clear the highlight, and hand back the layout.
    pub(crate) fn finish(self, sink: &mut impl EventSink, cancelled: bool) -> MazeOutcome {
        let walls = self.walls();
        sink.on_walls_changed(&walls);
        sink.on_working_cells_changed(&[]);
        MazeOutcome { walls, cancelled }
    }
}

/// Number of cells on a `size` × `size` grid, counted in `usize` so large
/// sizes do not overflow.
pub(crate) fn cell_count(size: i32) -> usize {
    let side = size.max(0) as usize;
    side * side
}

/// Whether the open cells (those not in `walls`) of a `size` × `size` grid
/// form a single 4-connected region. An empty region counts as connected.
pub fn is_connected(size: i32, walls: &Walls) -> bool {
    let bounds = Region::square(size);
    let open = |p: Pos| bounds.contains(p) && !walls.contains(&p);
    let Some(first) = bounds.iter().find(|&p| open(p)) else {
        return true;
    };

    let width = size as usize;
    let idx = |p: Pos| p.row as usize * width + p.col as usize;
    let total = bounds.iter().filter(|&p| open(p)).count();
    let mut reached = vec![false; bounds.len()];
    reached[idx(first)] = true;
    let mut count = 1;
    let mut queue = VecDeque::from([first]);
    while let Some(p) = queue.pop_front() {
        for d in Dir::ALL {
            let n = p.step(d);
            if open(n) && !reached[idx(n)] {
                reached[idx(n)] = true;
                count += 1;
                queue.push_back(n);
            }
        }
    }
    count == total
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

/// The maze algorithms that can be selected for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Generation {
    RandomizedFrontier,
    RecursiveDivision,
}

impl Generation {
    pub const ALL: [Generation; 2] = [Generation::RandomizedFrontier, Generation::RecursiveDivision];

    /// The identifier used on the outside, e.g. `"recursive-division"`.
    pub fn name(self) -> &'static str {
        match self {
            Self::RandomizedFrontier => "randomized-frontier",
            Self::RecursiveDivision => "recursive-division",
        }
    }

    /// Generate a fresh `size` × `size` layout.
    ///
    /// Grids too small for any interior structure come back as the bare
    /// border.
    pub fn generate<R: Rng>(
        self,
        size: i32,
        rng: R,
        sink: &mut impl EventSink,
        ctl: &mut Control,
    ) -> MazeOutcome {
        log::debug!("{}: generating {size}x{size} maze", self.name());
        let mut mg = MazeGen::new(size, rng);
        let cancelled = match self {
            Self::RandomizedFrontier => mg.randomized_frontier(sink, ctl),
            Self::RecursiveDivision => mg.recursive_division(sink, ctl),
        };
        let carved = mg.open_count();
        let out = mg.finish(sink, cancelled);
        log::debug!(
            "{}: {} carved, {} walls{}",
            self.name(),
            carved,
            out.walls.len(),
            if cancelled { " (cancelled)" } else { "" }
        );
        out
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Generation {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|g| g.name() == s)
            .ok_or_else(|| UnknownAlgorithm(s.to_string()))
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn generation_uses_identifiers() {
        let json = serde_json::to_string(&Generation::RandomizedFrontier).unwrap();
        assert_eq!(json, "\"randomized-frontier\"");
    }
}
