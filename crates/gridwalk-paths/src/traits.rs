use gridwalk_core::{Dir, Grid, Pos, Region};

/// Graph interface the searches run on.
pub trait Pather {
    /// Every position the search may index. Neighbours outside are ignored.
    fn bounds(&self) -> Region;

    /// Whether a search may stand on `p`. Both endpoints must be passable.
    fn is_passable(&self, p: Pos) -> bool;

    /// Append the passable neighbours of `p`, in `order`, into `buf`. The
    /// caller clears `buf` before calling.
    fn neighbors(&self, p: Pos, order: [Dir; 4], buf: &mut Vec<Pos>);
}

impl Pather for Grid {
    fn bounds(&self) -> Region {
        Grid::bounds(self)
    }

    fn is_passable(&self, p: Pos) -> bool {
        self.is_open(p)
    }

    fn neighbors(&self, p: Pos, order: [Dir; 4], buf: &mut Vec<Pos>) {
        buf.extend(self.neighbors4(p, order).filter(|&n| !self.is_blocked(n)));
    }
}
