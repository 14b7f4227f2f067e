//! Shared types for step-by-step grid algorithms.
//!
//! This crate provides the pieces every search and maze run agrees on:
//! geometry primitives, the [`Grid`] model (size, walls, endpoints), the
//! [`EventSink`] through which progress is reported, and the [`Control`]
//! yield point that paces and cancels a run.

pub mod control;
pub mod error;
pub mod events;
pub mod geom;
pub mod grid;

pub use control::{Context, Control, Pacer, Throttle, Unpaced};
pub use error::{Endpoint, GridError, UnknownAlgorithm};
pub use events::{Event, EventLog, EventSink, NoopSink};
pub use geom::{Dir, Pos, Region};
pub use grid::{Grid, Walls};
