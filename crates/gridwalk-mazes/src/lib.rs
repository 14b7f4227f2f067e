//! Maze generation for square grids, one carve at a time.
//!
//! Provides two generators, both producing a fully connected set of open
//! cells inside a solid border:
//! - **Randomized frontier** (Prim's style): grows a spanning tree over a
//!   lattice of junction cells, giving a perfect maze.
//! - **Recursive division**: splits an open room with wall lines, leaving one
//!   passage in each.
//!
//! Progress is reported through an [`EventSink`](gridwalk_core::EventSink)
//! as full wall snapshots plus the set of cells being worked on.

pub mod division;
pub mod maze;
pub mod prim;

pub use maze::{Generation, MazeGen, MazeOutcome, is_connected};
