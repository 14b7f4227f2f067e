use gridwalk_core::{Control, EventSink, Pos};

use crate::frontier::PriorityFrontier;
use crate::search::{SearchOutcome, UNIFORM_COST_ORDER};
use crate::state::{SearchState, endpoints};
use crate::traits::Pather;

const UNREACHABLE: i32 = i32::MAX;

/// Uniform-cost (Dijkstra) search from `from` to `to` with unit step cost.
///
/// The frontier is ordered by accumulated distance, ties broken by push
/// order. A neighbour is re-pushed whenever a strictly shorter distance to it
/// is found, even if it is already pending; stale entries are dropped when
/// popped.
pub fn uniform_cost<P: Pather>(
    pather: &P,
    from: Pos,
    to: Pos,
    sink: &mut impl EventSink,
    ctl: &mut Control,
) -> SearchOutcome {
    let mut st = SearchState::new(pather.bounds());
    let (si, gi) = match endpoints(&st, pather, from, to, sink) {
        Ok(ends) => ends,
        Err(out) => return out,
    };

    let mut dist = vec![UNREACHABLE; pather.bounds().len()];
    dist[si] = 0;
    let mut open: PriorityFrontier<usize> = PriorityFrontier::new();
    open.push(si, 0);

    let mut nbuf: Vec<Pos> = Vec::with_capacity(4);

    loop {
        if ctl.checkpoint() {
            return st.cancelled();
        }
        let ci = loop {
            match open.pop() {
                Some(i) if st.is_visited(i) => continue,
                other => break other,
            }
        };
        let Some(ci) = ci else {
            return st.exhausted();
        };

        st.mark(ci);
        let cp = st.pos(ci);
        if ci != si {
            sink.on_visit(cp);
        }
        if ci == gi {
            return st.found(si, gi, sink);
        }

        let current = dist[ci];
        nbuf.clear();
        pather.neighbors(cp, UNIFORM_COST_ORDER, &mut nbuf);

        for &np in nbuf.iter() {
            let Some(ni) = st.idx(np) else {
                continue;
            };
            if st.is_visited(ni) {
                continue;
            }
            let tentative = current + 1;
            if tentative >= dist[ni] {
                continue;
            }
            dist[ni] = tentative;
            st.relink(ni, ci);
            open.push(ni, tentative);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breadth_first;
    use gridwalk_core::{Dir, EventLog, Grid, NoopSink, Region};

    fn run(grid: &Grid) -> (SearchOutcome, EventLog) {
        let mut log = EventLog::new();
        let out = uniform_cost(
            grid,
            grid.start(),
            grid.target(),
            &mut log,
            &mut Control::unpaced(),
        );
        (out, log)
    }

    #[test]
    fn open_grid_corner_to_corner() {
        let grid = Grid::new(5, Pos::new(0, 0), Pos::new(4, 4));
        let (out, log) = run(&grid);
        assert!(out.found());
        assert_eq!(out.path_len(), 8);
        assert_eq!(log.path_steps(), out.path);
        assert_eq!(log.visits().last(), Some(&Pos::new(4, 4)));
    }

    #[test]
    fn expands_in_distance_order() {
        let grid = Grid::new(5, Pos::new(2, 2), Pos::new(0, 0));
        let (_, log) = run(&grid);
        let d: Vec<i32> = log
            .visits()
            .iter()
            .map(|&p| crate::manhattan(p, grid.start()))
            .collect();
        assert!(d.windows(2).all(|w| w[0] <= w[1]));
        // Ties keep push order: the start's neighbours come out up, right,
        // down, left.
        assert_eq!(
            &log.visits()[..4],
            &[Pos::new(1, 2), Pos::new(2, 3), Pos::new(3, 2), Pos::new(2, 1)]
        );
    }

    #[test]
    fn matches_breadth_first_length_on_mazes() {
        let walls = [
            Pos::new(1, 1),
            Pos::new(1, 2),
            Pos::new(1, 3),
            Pos::new(3, 0),
            Pos::new(3, 1),
            Pos::new(3, 3),
            Pos::new(3, 4),
            Pos::new(5, 2),
        ];
        for (s, t) in [
            (Pos::new(0, 0), Pos::new(5, 5)),
            (Pos::new(2, 0), Pos::new(4, 4)),
            (Pos::new(5, 0), Pos::new(0, 4)),
        ] {
            let grid = Grid::new(6, s, t).with_walls(walls);
            let (ucs, _) = run(&grid);
            let bfs = breadth_first(&grid, s, t, &mut NoopSink, &mut Control::unpaced());
            assert_eq!(ucs.found(), bfs.found());
            assert_eq!(ucs.path_len(), bfs.path_len());
        }
    }

    /// Four cells joined in a cycle; not a grid.
    struct Ring;

    impl Pather for Ring {
        fn bounds(&self) -> Region {
            Region::new(0, 0, 1, 4)
        }

        fn is_passable(&self, p: Pos) -> bool {
            self.bounds().contains(p)
        }

        fn neighbors(&self, p: Pos, _order: [Dir; 4], buf: &mut Vec<Pos>) {
            let c = p.col;
            buf.extend([(c + 1) % 4, (c + 3) % 4].map(|c| Pos::new(0, c)));
        }
    }

    #[test]
    fn shortest_way_round_a_cycle() {
        let mut log = EventLog::new();
        let out = uniform_cost(
            &Ring,
            Pos::new(0, 0),
            Pos::new(0, 3),
            &mut log,
            &mut Control::unpaced(),
        );
        assert!(out.found());
        assert_eq!(out.path, vec![Pos::new(0, 3)]);
        assert_eq!(log.visits(), vec![Pos::new(0, 1), Pos::new(0, 3)]);
    }

    #[test]
    fn no_path_reports_expanded_cells() {
        let grid = Grid::new(4, Pos::new(0, 0), Pos::new(0, 3))
            .with_walls((0..4).map(|r| Pos::new(r, 2)));
        let (out, _) = run(&grid);
        assert_eq!(out.status, crate::Status::NoPath);
        assert_eq!(out.visited_count, 8);
    }

    #[test]
    fn cancellation() {
        let grid = Grid::new(5, Pos::new(0, 0), Pos::new(4, 4));
        let out = uniform_cost(
            &grid,
            grid.start(),
            grid.target(),
            &mut NoopSink,
            &mut Control::step_limit(0),
        );
        assert!(out.cancelled());
        assert_eq!(out.visited_count, 0);
    }
}
