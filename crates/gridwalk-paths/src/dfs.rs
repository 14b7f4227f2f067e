use gridwalk_core::{Control, Dir, EventSink, Pos};

use crate::search::SearchOutcome;
use crate::state::{SearchState, endpoints};
use crate::traits::Pather;

/// Depth-first search from `from` to `to` with an explicit stack.
///
/// `order` is the exploration priority: the first direction is popped
/// first. A cell is marked visited only when popped, so it may sit on the
/// stack several times; its parent is the first cell that pushed it. The
/// path found is not necessarily a shortest one.
pub fn depth_first<P: Pather>(
    pather: &P,
    from: Pos,
    to: Pos,
    order: [Dir; 4],
    sink: &mut impl EventSink,
    ctl: &mut Control,
) -> SearchOutcome {
    let mut st = SearchState::new(pather.bounds());
    let (si, gi) = match endpoints(&st, pather, from, to, sink) {
        Ok(ends) => ends,
        Err(out) => return out,
    };

    let mut stack: Vec<usize> = vec![si];
    let mut nbuf: Vec<Pos> = Vec::with_capacity(4);

    loop {
        if ctl.checkpoint() {
            return st.cancelled();
        }
        // Lazy dedup: drop entries expanded since they were pushed.
        let ci = loop {
            match stack.pop() {
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

        nbuf.clear();
        pather.neighbors(cp, order, &mut nbuf);

        // Push lowest priority first so the first direction is on top.
        for &np in nbuf.iter().rev() {
            let Some(ni) = st.idx(np) else {
                continue;
            };
            if st.is_visited(ni) {
                continue;
            }
            st.link_once(ni, ci);
            stack.push(ni);
        }
    }
}
