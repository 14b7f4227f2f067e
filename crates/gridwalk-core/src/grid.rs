//! The [`Grid`] model: a square board with walls and two endpoints.
//!
//! A `Grid` is read-only for the duration of a run. The editing methods
//! (`add_wall`, `move_start`, ...) are for use between runs and never let an
//! endpoint become blocked.

use std::collections::BTreeSet;

use crate::error::{Endpoint, GridError};
use crate::geom::{Dir, Pos, Region};

/// Set of blocked positions.
pub type Walls = BTreeSet<Pos>;

/// A square `size` × `size` grid with a wall set, a start and a target.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    size: i32,
    walls: Walls,
    start: Pos,
    target: Pos,
}

impl Grid {
    /// Create an empty grid. Endpoints are not checked here; see
    /// [`validate`](Grid::validate).
    pub fn new(size: i32, start: Pos, target: Pos) -> Self {
        Self {
            size: size.max(0),
            walls: Walls::new(),
            start,
            target,
        }
    }

    /// Builder form of [`set_walls`](Grid::set_walls).
    pub fn with_walls(mut self, walls: impl IntoIterator<Item = Pos>) -> Self {
        self.set_walls(walls);
        self
    }

    /// Side length.
    #[inline]
    pub fn size(&self) -> i32 {
        self.size
    }

    /// The whole board as a region.
    #[inline]
    pub fn bounds(&self) -> Region {
        Region::square(self.size)
    }

    #[inline]
    pub fn start(&self) -> Pos {
        self.start
    }

    #[inline]
    pub fn target(&self) -> Pos {
        self.target
    }

    #[inline]
    pub fn walls(&self) -> &Walls {
        &self.walls
    }

    /// Whether `p` lies on the board.
    #[inline]
    pub fn in_bounds(&self, p: Pos) -> bool {
        p.row >= 0 && p.row < self.size && p.col >= 0 && p.col < self.size
    }

    /// Whether `p` is a wall.
    #[inline]
    pub fn is_blocked(&self, p: Pos) -> bool {
        self.walls.contains(&p)
    }

    /// Whether `p` is on the board and not a wall.
    #[inline]
    pub fn is_open(&self, p: Pos) -> bool {
        self.in_bounds(p) && !self.is_blocked(p)
    }

    /// The up-to-four axis-aligned neighbours of `p`, in `order`, filtered to
    /// the board. Walls are *not* filtered out.
    pub fn neighbors4(&self, p: Pos, order: [Dir; 4]) -> impl Iterator<Item = Pos> + '_ {
        order
            .into_iter()
            .map(move |d| p.step(d))
            .filter(move |&n| self.in_bounds(n))
    }

    /// Check that both endpoints are on the board and open.
    pub fn validate(&self) -> Result<(), GridError> {
        for (endpoint, pos) in [(Endpoint::Start, self.start), (Endpoint::Target, self.target)] {
            if !self.in_bounds(pos) {
                return Err(GridError::EndpointOutOfBounds {
                    endpoint,
                    pos,
                    size: self.size,
                });
            }
            if self.is_blocked(pos) {
                return Err(GridError::EndpointBlocked { endpoint, pos });
            }
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Editing (between runs only)
    // -----------------------------------------------------------------------

    /// Block `p`. Returns `false` if `p` is off the board, an endpoint, or
    /// already a wall.
    pub fn add_wall(&mut self, p: Pos) -> bool {
        if !self.in_bounds(p) || self.is_endpoint(p) {
            return false;
        }
        self.walls.insert(p)
    }

    /// Unblock `p`. Returns whether it was a wall.
    pub fn remove_wall(&mut self, p: Pos) -> bool {
        self.walls.remove(&p)
    }

    /// Flip `p` between wall and open. Returns whether `p` is now a wall.
    pub fn toggle_wall(&mut self, p: Pos) -> bool {
        if self.remove_wall(p) {
            return false;
        }
        self.add_wall(p)
    }

    pub fn clear_walls(&mut self) {
        self.walls.clear();
    }

    /// Replace the wall set, e.g. with a freshly generated maze. Positions
    /// off the board and the two endpoints are dropped.
    pub fn set_walls(&mut self, walls: impl IntoIterator<Item = Pos>) {
        self.walls = walls
            .into_iter()
            .filter(|&p| self.in_bounds(p) && !self.is_endpoint(p))
            .collect();
    }

    /// Move the start cell, clearing any wall at the destination.
    pub fn move_start(&mut self, p: Pos) -> Result<(), GridError> {
        self.check_on_board(Endpoint::Start, p)?;
        self.walls.remove(&p);
        self.start = p;
        Ok(())
    }

    /// Move the target cell, clearing any wall at the destination.
    pub fn move_target(&mut self, p: Pos) -> Result<(), GridError> {
        self.check_on_board(Endpoint::Target, p)?;
        self.walls.remove(&p);
        self.target = p;
        Ok(())
    }

    fn is_endpoint(&self, p: Pos) -> bool {
        p == self.start || p == self.target
    }

    fn check_on_board(&self, endpoint: Endpoint, pos: Pos) -> Result<(), GridError> {
        if self.in_bounds(pos) {
            Ok(())
        } else {
            Err(GridError::EndpointOutOfBounds {
                endpoint,
                pos,
                size: self.size,
            })
        }
    }
}
