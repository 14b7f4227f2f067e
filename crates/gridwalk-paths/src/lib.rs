//! Step-by-step search algorithms for square grids.
//!
//! Three single-target searches share one visited/parent bookkeeping and
//! differ only in how their frontier is ordered:
//!
//! - **Breadth-first** ([`breadth_first`]): FIFO queue, shortest path in
//!   cell count.
//! - **Depth-first** ([`depth_first`]): explicit LIFO stack with a fixed
//!   direction priority, no length guarantee.
//! - **Uniform-cost** ([`uniform_cost`]): Dijkstra-style relaxation over a
//!   stable priority frontier.
//!
//! Each search reports progress through an [`EventSink`](gridwalk_core::EventSink)
//! and yields at a [`Control`](gridwalk_core::Control) checkpoint between
//! expansions, so it can be paced or cancelled. [`Traversal`] selects one of
//! them by name and checks the grid before running.

mod bfs;
mod dfs;
mod dijkstra;
mod distance;
mod frontier;
mod search;
mod state;
mod traits;

pub use bfs::breadth_first;
pub use dfs::depth_first;
pub use dijkstra::uniform_cost;
pub use distance::manhattan;
pub use frontier::PriorityFrontier;
pub use search::{
    BREADTH_FIRST_ORDER, DEPTH_FIRST_ORDER, SearchOutcome, Status, TOP_DOWN_ORDER, Traversal,
    UNIFORM_COST_ORDER,
};
pub use traits::Pather;
