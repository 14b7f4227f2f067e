//! Lifecycle of a single search or generation run.
//!
//! A [`RunController`] accepts one [`RunRequest`] at a time against a grid,
//! builds its pacing and cancellation from a [`RunConfig`], invokes exactly
//! one algorithm and hands back a [`RunReport`].

pub mod config;
pub mod controller;
pub mod error;

pub use config::RunConfig;
pub use controller::{RunController, RunReport, RunRequest};
pub use error::RunError;

pub use gridwalk_mazes::{Generation, MazeOutcome};
pub use gridwalk_paths::{SearchOutcome, Status, Traversal};
