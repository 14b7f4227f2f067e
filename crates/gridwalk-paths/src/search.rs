//! Search outcomes and algorithm selection.

use std::fmt;
use std::str::FromStr;

use gridwalk_core::{Control, Dir, EventSink, Grid, GridError, Pos, UnknownAlgorithm};

use crate::{breadth_first, depth_first, uniform_cost};

/// Neighbour order of breadth-first search.
pub const BREADTH_FIRST_ORDER: [Dir; 4] = [Dir::Up, Dir::Right, Dir::Down, Dir::Left];
/// Neighbour order of uniform-cost search.
pub const UNIFORM_COST_ORDER: [Dir; 4] = BREADTH_FIRST_ORDER;
/// Priority of the plain depth-first search: down is explored first.
pub const DEPTH_FIRST_ORDER: [Dir; 4] = [Dir::Down, Dir::Right, Dir::Left, Dir::Up];
/// Priority of the top-down depth-first search.
pub const TOP_DOWN_ORDER: [Dir; 4] = [Dir::Down, Dir::Up, Dir::Right, Dir::Left];

// ---------------------------------------------------------------------------
// SearchOutcome
// ---------------------------------------------------------------------------

/// How a search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// The target was expanded.
    Found,
    /// The frontier ran empty.
    NoPath,
    /// The cancellation predicate fired.
    Cancelled,
}

/// Summary of one search run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchOutcome {
    pub status: Status,
    /// From the cell after the start through the target; `[start]` when
    /// start and target coincide; empty unless found.
    pub path: Vec<Pos>,
    /// Size of the visited set, start included.
    pub visited_count: usize,
}

impl SearchOutcome {
    #[inline]
    pub fn found(&self) -> bool {
        self.status == Status::Found
    }

    #[inline]
    pub fn cancelled(&self) -> bool {
        self.status == Status::Cancelled
    }

    /// Number of cells in the path.
    #[inline]
    pub fn path_len(&self) -> usize {
        self.path.len()
    }
}

// ---------------------------------------------------------------------------
// Traversal
// ---------------------------------------------------------------------------

/// The search algorithms that can be selected for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Traversal {
    BreadthFirst,
    DepthFirst,
    DepthFirstTopDown,
    UniformCost,
}

impl Traversal {
    pub const ALL: [Traversal; 4] = [
        Traversal::BreadthFirst,
        Traversal::DepthFirst,
        Traversal::DepthFirstTopDown,
        Traversal::UniformCost,
    ];

    /// The identifier used on the outside, e.g. `"breadth-first"`.
    pub fn name(self) -> &'static str {
        match self {
            Self::BreadthFirst => "breadth-first",
            Self::DepthFirst => "depth-first",
            Self::DepthFirstTopDown => "depth-first-top-down",
            Self::UniformCost => "uniform-cost",
        }
    }

    /// Whether the returned path is always a shortest one.
    pub fn is_optimal(self) -> bool {
        matches!(self, Self::BreadthFirst | Self::UniformCost)
    }

    /// Search `grid` from its start to its target.
    ///
    /// Refuses to explore anything if an endpoint is off the board or
    /// blocked. Exhausting the frontier or being cancelled is not an error;
    /// see [`SearchOutcome::status`].
    pub fn search(
        self,
        grid: &Grid,
        sink: &mut impl EventSink,
        ctl: &mut Control,
    ) -> Result<SearchOutcome, GridError> {
        if let Err(e) = grid.validate() {
            log::warn!("{}: refusing to search: {e}", self.name());
            return Err(e);
        }
        let (from, to) = (grid.start(), grid.target());
        log::debug!(
            "{}: searching {}x{} grid from {from} to {to}",
            self.name(),
            grid.size(),
            grid.size()
        );

        let out = match self {
            Self::BreadthFirst => breadth_first(grid, from, to, sink, ctl),
            Self::DepthFirst => depth_first(grid, from, to, DEPTH_FIRST_ORDER, sink, ctl),
            Self::DepthFirstTopDown => depth_first(grid, from, to, TOP_DOWN_ORDER, sink, ctl),
            Self::UniformCost => uniform_cost(grid, from, to, sink, ctl),
        };

        log::debug!(
            "{}: {:?} after {} visited, path length {}",
            self.name(),
            out.status,
            out.visited_count,
            out.path_len()
        );
        Ok(out)
    }
}

impl fmt::Display for Traversal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Traversal {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.name() == s)
            .ok_or_else(|| UnknownAlgorithm(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridwalk_core::{Endpoint, EventLog, NoopSink};

    #[test]
    fn names_round_trip() {
        for t in Traversal::ALL {
            assert_eq!(t.name().parse::<Traversal>(), Ok(t));
        }
        assert_eq!(
            "a-star".parse::<Traversal>(),
            Err(UnknownAlgorithm("a-star".to_string()))
        );
    }

    #[test]
    fn invalid_endpoint_is_refused_without_events() {
        let grid = Grid::new(5, Pos::new(0, 0), Pos::new(9, 9));
        for t in Traversal::ALL {
            let mut log = EventLog::new();
            let err = t
                .search(&grid, &mut log, &mut Control::unpaced())
                .unwrap_err();
            assert_eq!(err.endpoint(), Endpoint::Target);
            assert!(log.events.is_empty());
        }
    }

    #[test]
    fn start_equals_target_for_every_algorithm() {
        let grid = Grid::new(5, Pos::new(1, 1), Pos::new(1, 1));
        for t in Traversal::ALL {
            let mut log = EventLog::new();
            let out = t.search(&grid, &mut log, &mut Control::unpaced()).unwrap();
            assert!(out.found());
            assert_eq!(out.path, vec![Pos::new(1, 1)]);
            assert_eq!(out.path_len(), 1);
            assert!(out.visited_count <= 1);
            assert!(log.visits().is_empty());
        }
    }

    #[test]
    fn optimal_algorithms_agree_on_length() {
        let grid = Grid::new(7, Pos::new(0, 0), Pos::new(6, 6)).with_walls(
            (0..6).map(|r| Pos::new(r, 3)).chain((1..7).map(|c| Pos::new(4, c))),
        );
        let bfs = Traversal::BreadthFirst
            .search(&grid, &mut NoopSink, &mut Control::unpaced())
            .unwrap();
        let ucs = Traversal::UniformCost
            .search(&grid, &mut NoopSink, &mut Control::unpaced())
            .unwrap();
        assert!(bfs.found());
        assert_eq!(bfs.path_len(), ucs.path_len());
    }
}
