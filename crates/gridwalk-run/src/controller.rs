//! The [`RunController`]: one run at a time.

use std::sync::atomic::{AtomicBool, Ordering};

use gridwalk_core::{Context, Control, EventSink, Grid};
use gridwalk_mazes::{Generation, MazeOutcome};
use gridwalk_paths::{SearchOutcome, Traversal};
use rand::Rng;

use crate::config::RunConfig;
use crate::error::RunError;

/// What to run.
#[derive(Debug, Clone, Copy)]
pub enum RunRequest<'a> {
    /// Search `grid` from its start to its target.
    Traverse { grid: &'a Grid, traversal: Traversal },
    /// Generate a new `size` × `size` wall layout.
    Generate { size: i32, generation: Generation },
}

/// What a run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunReport {
    Search(SearchOutcome),
    Maze(MazeOutcome),
}

impl RunReport {
    pub fn search(&self) -> Option<&SearchOutcome> {
        match self {
            Self::Search(s) => Some(s),
            Self::Maze(_) => None,
        }
    }

    pub fn maze(&self) -> Option<&MazeOutcome> {
        match self {
            Self::Maze(m) => Some(m),
            Self::Search(_) => None,
        }
    }
}

/// Owns the in-flight flag for one grid.
///
/// The flag is set for the whole duration of a run, including every sink
/// callback, so a request issued from inside a callback is refused with
/// [`RunError::Busy`].
#[derive(Debug, Default)]
pub struct RunController {
    in_flight: AtomicBool,
}

/// Clears the in-flight flag however the run ends.
struct RunGuard<'a>(&'a AtomicBool);

impl Drop for RunGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl RunController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a run is in flight.
    pub fn is_running(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    fn begin(&self) -> Result<RunGuard<'_>, RunError> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            log::warn!("run refused: another run is in flight");
            return Err(RunError::Busy);
        }
        Ok(RunGuard(&self.in_flight))
    }

    /// Run `request` with pacing built from `config` and cancellation through
    /// `ctx`.
    pub fn run(
        &self,
        request: RunRequest<'_>,
        config: &RunConfig,
        sink: &mut impl EventSink,
        ctx: Context,
    ) -> Result<RunReport, RunError> {
        let mut ctl = config.control(ctx);
        match request {
            RunRequest::Traverse { grid, traversal } => self
                .traverse(grid, traversal, sink, &mut ctl)
                .map(RunReport::Search),
            RunRequest::Generate { size, generation } => self
                .generate(size, generation, config.rng(), sink, &mut ctl)
                .map(RunReport::Maze),
        }
    }

    /// Search `grid` with `traversal`.
    pub fn traverse(
        &self,
        grid: &Grid,
        traversal: Traversal,
        sink: &mut impl EventSink,
        ctl: &mut Control,
    ) -> Result<SearchOutcome, RunError> {
        let _guard = self.begin()?;
        let out = traversal.search(grid, sink, ctl)?;
        log::debug!("{traversal} run finished after {} steps", ctl.steps());
        Ok(out)
    }

    /// Generate a `size` × `size` layout with `generation`.
    pub fn generate<R: Rng>(
        &self,
        size: i32,
        generation: Generation,
        rng: R,
        sink: &mut impl EventSink,
        ctl: &mut Control,
    ) -> Result<MazeOutcome, RunError> {
        let _guard = self.begin()?;
        let out = generation.generate(size, rng, sink, ctl);
        log::debug!("{generation} run finished after {} steps", ctl.steps());
        Ok(out)
    }
}
