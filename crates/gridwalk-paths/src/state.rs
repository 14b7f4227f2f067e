use gridwalk_core::{EventSink, Pos, Region};

use crate::search::{SearchOutcome, Status};
use crate::traits::Pather;

const NO_PARENT: usize = usize::MAX;

// ---------------------------------------------------------------------------
// SearchState
// ---------------------------------------------------------------------------

/// Working state of one search: visited flags and parent links over a flat
/// array covering the pather's bounds. Created fresh for every run.
pub(crate) struct SearchState {
    bounds: Region,
    width: usize,
    visited: Vec<bool>,
    parent: Vec<usize>,
    visited_count: usize,
}

impl SearchState {
    pub(crate) fn new(bounds: Region) -> Self {
        let len = bounds.len();
        Self {
            bounds,
            width: bounds.width().max(0) as usize,
            visited: vec![false; len],
            parent: vec![NO_PARENT; len],
            visited_count: 0,
        }
    }

    /// Convert a `Pos` to a flat index. Returns `None` if out of bounds.
    #[inline]
    pub(crate) fn idx(&self, p: Pos) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        let r = (p.row - self.bounds.min.row) as usize;
        let c = (p.col - self.bounds.min.col) as usize;
        Some(r * self.width + c)
    }

    /// Convert a flat index back to a `Pos`.
    #[inline]
    pub(crate) fn pos(&self, idx: usize) -> Pos {
        let r = (idx / self.width) as i32 + self.bounds.min.row;
        let c = (idx % self.width) as i32 + self.bounds.min.col;
        Pos::new(r, c)
    }

    #[inline]
    pub(crate) fn is_visited(&self, idx: usize) -> bool {
        self.visited[idx]
    }

    /// Mark `idx` visited. Returns `false` if it already was.
    #[inline]
    pub(crate) fn mark(&mut self, idx: usize) -> bool {
        if self.visited[idx] {
            return false;
        }
        self.visited[idx] = true;
        self.visited_count += 1;
        true
    }

    /// Record `parent` for `child` unless it already has one.
    #[inline]
    pub(crate) fn link_once(&mut self, child: usize, parent: usize) {
        if self.parent[child] == NO_PARENT {
            self.parent[child] = parent;
        }
    }

    /// Record `parent` for `child`, replacing any earlier link.
    #[inline]
    pub(crate) fn relink(&mut self, child: usize, parent: usize) {
        self.parent[child] = parent;
    }

    // -----------------------------------------------------------------------
    // Outcomes
    // -----------------------------------------------------------------------

    /// Rebuild the path from `start` (excluded) to `goal` (included), report
    /// each step, and return the success outcome.
    pub(crate) fn found(
        &self,
        start: usize,
        goal: usize,
        sink: &mut impl EventSink,
    ) -> SearchOutcome {
        let mut path = Vec::new();
        let mut ci = goal;
        while ci != start && ci != NO_PARENT {
            path.push(self.pos(ci));
            ci = self.parent[ci];
        }
        path.reverse();
        for &p in &path {
            sink.on_path_step(p);
        }
        SearchOutcome {
            status: Status::Found,
            path,
            visited_count: self.visited_count,
        }
    }

    pub(crate) fn exhausted(&self) -> SearchOutcome {
        SearchOutcome {
            status: Status::NoPath,
            path: Vec::new(),
            visited_count: self.visited_count,
        }
    }

    pub(crate) fn cancelled(&self) -> SearchOutcome {
        SearchOutcome {
            status: Status::Cancelled,
            path: Vec::new(),
            visited_count: self.visited_count,
        }
    }
}

/// Resolve both endpoints to indices, or produce the outcome that ends the
/// search before it explores anything. An endpoint off the bounds or not
/// passable ends it with nothing visited.
pub(crate) fn endpoints<P: Pather>(
    state: &SearchState,
    pather: &P,
    from: Pos,
    to: Pos,
    sink: &mut impl EventSink,
) -> Result<(usize, usize), SearchOutcome> {
    let (Some(si), Some(gi)) = (state.idx(from), state.idx(to)) else {
        return Err(state.exhausted());
    };
    if !pather.is_passable(from) || !pather.is_passable(to) {
        return Err(state.exhausted());
    }
    if si == gi {
        sink.on_path_step(from);
        return Err(SearchOutcome {
            status: Status::Found,
            path: vec![from],
            visited_count: 1,
        });
    }
    Ok((si, gi))
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridwalk_core::{Grid, NoopSink};

    #[test]
    fn index_round_trip() {
        let st = SearchState::new(Region::square(4));
        for p in Region::square(4) {
            let i = st.idx(p).unwrap();
            assert_eq!(st.pos(i), p);
        }
        assert_eq!(st.idx(Pos::new(4, 0)), None);
        assert_eq!(st.idx(Pos::new(0, -1)), None);
    }

    #[test]
    fn mark_counts_once() {
        let mut st = SearchState::new(Region::square(3));
        assert!(st.mark(4));
        assert!(!st.mark(4));
        assert!(st.is_visited(4));
        assert_eq!(st.exhausted().visited_count, 1);
    }

    #[test]
    fn first_link_wins() {
        let mut st = SearchState::new(Region::square(3));
        st.link_once(1, 0);
        st.link_once(1, 2);
        let out = st.found(0, 1, &mut NoopSink);
        assert_eq!(out.path, vec![Pos::new(0, 1)]);

        st.relink(1, 4);
        st.link_once(4, 0);
        let out = st.found(0, 1, &mut NoopSink);
        assert_eq!(out.path, vec![Pos::new(1, 1), Pos::new(0, 1)]);
    }

    #[test]
    fn equal_endpoints_short_circuit() {
        let grid = Grid::new(3, Pos::new(1, 1), Pos::new(1, 1));
        let st = SearchState::new(grid.bounds());
        let out = endpoints(&st, &grid, Pos::new(1, 1), Pos::new(1, 1), &mut NoopSink).unwrap_err();
        assert_eq!(out.status, Status::Found);
        assert_eq!(out.path, vec![Pos::new(1, 1)]);
        assert_eq!(out.visited_count, 1);
    }

    #[test]
    fn blocked_endpoint_short_circuits() {
        let grid = Grid::new(3, Pos::new(0, 0), Pos::new(2, 2)).with_walls([Pos::new(1, 1)]);
        let st = SearchState::new(grid.bounds());
        let mut log = gridwalk_core::EventLog::new();
        let out = endpoints(&st, &grid, Pos::new(1, 1), Pos::new(1, 1), &mut log).unwrap_err();
        assert_eq!(out.status, Status::NoPath);
        assert_eq!(out.visited_count, 0);
        assert!(log.events.is_empty());
    }
}
