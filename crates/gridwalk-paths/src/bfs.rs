use std::collections::VecDeque;

use gridwalk_core::{Control, EventSink, Pos};

use crate::search::{BREADTH_FIRST_ORDER, SearchOutcome};
use crate::state::{SearchState, endpoints};
use crate::traits::Pather;

/// Breadth-first search from `from` to `to`.
///
/// Neighbours are enqueued up, right, down, left and marked visited as they
/// are enqueued, so every cell enters the queue at most once. The returned
/// path has the minimum number of cells.
pub fn breadth_first<P: Pather>(
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

    st.mark(si);
    let mut queue: VecDeque<usize> = VecDeque::from([si]);
    let mut nbuf: Vec<Pos> = Vec::with_capacity(4);

    loop {
        if ctl.checkpoint() {
            return st.cancelled();
        }
        let Some(ci) = queue.pop_front() else {
            return st.exhausted();
        };
        let cp = st.pos(ci);
        if ci != si {
            sink.on_visit(cp);
        }
        if ci == gi {
            return st.found(si, gi, sink);
        }

        nbuf.clear();
        pather.neighbors(cp, BREADTH_FIRST_ORDER, &mut nbuf);

        for &np in nbuf.iter() {
            let Some(ni) = st.idx(np) else {
                continue;
            };
            if !st.mark(ni) {
                continue;
            }
            st.link_once(ni, ci);
            queue.push_back(ni);
        }
    }
}
