//! Geometry primitives: [`Pos`], [`Dir`] and [`Region`].
//!
//! Positions are `(row, col)` pairs, 0-indexed, with rows growing down and
//! columns growing right.

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Pos
// ---------------------------------------------------------------------------

/// A grid position. Coordinates are signed so that neighbour offsets can be
/// computed before bounds filtering.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pos {
    pub row: i32,
    pub col: i32,
}

impl Pos {
    /// Create a new position.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a position shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// The neighbour one step away in direction `d`.
    #[inline]
    pub const fn step(self, d: Dir) -> Self {
        let (dr, dc) = d.offset();
        self.shift(dr, dc)
    }

    /// The cell exactly halfway between `self` and `other`.
    ///
    /// Only meaningful for two positions an even distance apart on one axis,
    /// such as two maze junctions.
    #[inline]
    pub const fn midpoint(self, other: Pos) -> Self {
        Self {
            row: (self.row + other.row) / 2,
            col: (self.col + other.col) / 2,
        }
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl Add for Pos {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Pos {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}

// ---------------------------------------------------------------------------
// Dir
// ---------------------------------------------------------------------------

/// One of the four axis-aligned directions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Dir {
    Up,
    Right,
    Down,
    Left,
}

impl Dir {
    /// Clockwise from up.
    pub const ALL: [Dir; 4] = [Dir::Up, Dir::Right, Dir::Down, Dir::Left];

    /// `(drow, dcol)` for one step in this direction.
    #[inline]
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Dir::Up => (-1, 0),
            Dir::Right => (0, 1),
            Dir::Down => (1, 0),
            Dir::Left => (0, -1),
        }
    }
}

// ---------------------------------------------------------------------------
// Region
// ---------------------------------------------------------------------------

/// A half-open rectangle \[min, max). `min` is inclusive, `max` is exclusive.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Region {
    pub min: Pos,
    pub max: Pos,
}

impl Region {
    /// Create a region from two corners, canonicalised so that `min` ≤ `max`
    /// on each axis.
    #[inline]
    pub fn new(row0: i32, col0: i32, row1: i32, col1: i32) -> Self {
        Self {
            min: Pos::new(row0.min(row1), col0.min(col1)),
            max: Pos::new(row0.max(row1), col0.max(col1)),
        }
    }

    /// The `size` × `size` square anchored at the origin.
    #[inline]
    pub fn square(size: i32) -> Self {
        Self::new(0, 0, size.max(0), size.max(0))
    }

    /// Region of `height` rows and `width` columns whose top-left cell is
    /// `origin`.
    #[inline]
    pub fn sized(origin: Pos, height: i32, width: i32) -> Self {
        Self {
            min: origin,
            max: origin.shift(height.max(0), width.max(0)),
        }
    }

    /// Number of rows.
    #[inline]
    pub fn height(self) -> i32 {
        self.max.row - self.min.row
    }

    /// Number of columns.
    #[inline]
    pub fn width(self) -> i32 {
        self.max.col - self.min.col
    }

    /// Total number of cells.
    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            return 0;
        }
        (self.width() as usize) * (self.height() as usize)
    }

    /// Whether the region has zero or negative area.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.min.row >= self.max.row || self.min.col >= self.max.col
    }

    /// Whether `p` is inside the half-open region.
    #[inline]
    pub fn contains(self, p: Pos) -> bool {
        p.row >= self.min.row && p.row < self.max.row && p.col >= self.min.col && p.col < self.max.col
    }

    /// Shrink by `n` cells on every side. May become empty.
    #[inline]
    pub fn inset(self, n: i32) -> Self {
        let r = Self {
            min: self.min.shift(n, n),
            max: self.max.shift(-n, -n),
        };
        if r.is_empty() { Self::default() } else { r }
    }

    /// Row-major iterator over every position in the region.
    #[inline]
    pub fn iter(self) -> RegionIter {
        RegionIter {
            region: self,
            cur: self.min,
        }
    }
}

impl IntoIterator for Region {
    type Item = Pos;
    type IntoIter = RegionIter;
    #[inline]
    fn into_iter(self) -> RegionIter {
        self.iter()
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}-{})", self.min, self.max)
    }
}

/// Row-major iterator over the positions in a [`Region`].
#[derive(Clone, Debug)]
pub struct RegionIter {
    region: Region,
    cur: Pos,
}

impl Iterator for RegionIter {
    type Item = Pos;

    #[inline]
    fn next(&mut self) -> Option<Pos> {
        if self.cur.row >= self.region.max.row || self.region.is_empty() {
            return None;
        }
        let p = self.cur;
        self.cur.col += 1;
        if self.cur.col >= self.region.max.col {
            self.cur.col = self.region.min.col;
            self.cur.row += 1;
        }
        Some(p)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.region.is_empty() || self.cur.row >= self.region.max.row {
            return (0, Some(0));
        }
        let w = self.region.width() as usize;
        let remaining_in_row = (self.region.max.col - self.cur.col) as usize;
        let remaining_rows = (self.region.max.row - self.cur.row - 1) as usize;
        let total = remaining_in_row + remaining_rows * w;
        (total, Some(total))
    }
}

impl ExactSizeIterator for RegionIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pos_arithmetic() {
        let a = Pos::new(1, 2);
        let b = Pos::new(3, 4);
        assert_eq!(a + b, Pos::new(4, 6));
        assert_eq!(b - a, Pos::new(2, 2));
        assert_eq!(a.step(Dir::Up), Pos::new(0, 2));
        assert_eq!(a.step(Dir::Left), Pos::new(1, 1));
    }

    #[test]
    fn pos_midpoint_between_junctions() {
        assert_eq!(Pos::new(1, 1).midpoint(Pos::new(1, 3)), Pos::new(1, 2));
        assert_eq!(Pos::new(3, 5).midpoint(Pos::new(1, 5)), Pos::new(2, 5));
    }

    #[test]
    fn pos_orders_row_major() {
        let mut v = vec![Pos::new(1, 0), Pos::new(0, 3), Pos::new(0, 1)];
        v.sort();
        assert_eq!(v, vec![Pos::new(0, 1), Pos::new(0, 3), Pos::new(1, 0)]);
    }

    #[test]
    fn region_basics() {
        let r = Region::new(0, 0, 2, 3);
        assert_eq!(r.height(), 2);
        assert_eq!(r.width(), 3);
        assert_eq!(r.len(), 6);
        assert!(r.contains(Pos::new(1, 2)));
        assert!(!r.contains(Pos::new(2, 0)));
        assert!(!r.contains(Pos::new(0, -1)));
    }

    #[test]
    fn region_iter_row_major() {
        let pts: Vec<_> = Region::new(0, 0, 2, 3).iter().collect();
        assert_eq!(pts.len(), 6);
        assert_eq!(pts[0], Pos::new(0, 0));
        assert_eq!(pts[3], Pos::new(1, 0));
        assert_eq!(pts[5], Pos::new(1, 2));
    }

    #[test]
    fn region_inset() {
        let r = Region::square(5).inset(1);
        assert_eq!(r, Region::new(1, 1, 4, 4));
        assert!(Region::square(2).inset(1).is_empty());
    }

    #[test]
    fn region_sized() {
        let r = Region::sized(Pos::new(1, 3), 2, 5);
        assert_eq!(r.max, Pos::new(3, 8));
        assert_eq!(r.iter().len(), 10);
    }
}
