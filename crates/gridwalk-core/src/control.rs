//! Pacing and cooperative cancellation.
//!
//! Every algorithm calls [`Control::checkpoint`] once per step. That call is
//! the only suspension point of a run: it lets the [`Pacer`] slow the run
//! down for a watching consumer and then polls the cancellation predicate.
//! With [`Control::unpaced`] a run is a plain synchronous loop.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

// ---------------------------------------------------------------------------
// Context (cancellation token)
// ---------------------------------------------------------------------------

/// A simple cooperative-cancellation token backed by an [`AtomicBool`].
#[derive(Clone, Debug)]
pub struct Context {
    done: Arc<AtomicBool>,
}

impl Context {
    /// Create a new, non-cancelled context.
    pub fn new() -> Self {
        Self {
            done: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Whether cancellation has been requested.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.done.load(Ordering::Relaxed)
    }

    /// Request cancellation.
    #[inline]
    pub fn cancel(&self) {
        self.done.store(true, Ordering::Relaxed);
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Pacer
// ---------------------------------------------------------------------------

/// Decides how long to hold a run at each checkpoint.
pub trait Pacer {
    /// Called after step number `step` (1-based) has completed.
    fn pace(&mut self, step: u64);
}

/// Never waits.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unpaced;

impl Pacer for Unpaced {
    fn pace(&mut self, _step: u64) {}
}

/// Sleeps for `interval` after every `every`-th step.
#[derive(Debug, Clone, Copy)]
pub struct Throttle {
    pub interval: Duration,
    pub every: u64,
}

impl Throttle {
    /// Sleep `ms` milliseconds after every `every`-th step. `every` of 0 is
    /// treated as 1.
    pub fn from_millis(ms: u64, every: u64) -> Self {
        Self {
            interval: Duration::from_millis(ms),
            every: every.max(1),
        }
    }
}

impl Pacer for Throttle {
    fn pace(&mut self, step: u64) {
        if self.interval.is_zero() || step % self.every.max(1) != 0 {
            return;
        }
        std::thread::sleep(self.interval);
    }
}

// ---------------------------------------------------------------------------
// Control
// ---------------------------------------------------------------------------

/// Per-run pacing and cancellation state.
pub struct Control {
    cancelled: Box<dyn FnMut() -> bool>,
    pacer: Box<dyn Pacer>,
    steps: u64,
}

impl Control {
    /// Run until done, without waiting and without cancellation.
    pub fn unpaced() -> Self {
        Self::with_predicate(|| false, Unpaced)
    }

    /// Cancel when `ctx` is cancelled.
    pub fn new(ctx: Context, pacer: impl Pacer + 'static) -> Self {
        Self::with_predicate(move || ctx.is_done(), pacer)
    }

    /// Cancel when `cancelled` returns `true`. It is polled once per step.
    pub fn with_predicate(
        cancelled: impl FnMut() -> bool + 'static,
        pacer: impl Pacer + 'static,
    ) -> Self {
        Self {
            cancelled: Box::new(cancelled),
            pacer: Box::new(pacer),
            steps: 0,
        }
    }

    /// Cancel after `limit` completed steps; handy as a step budget.
    pub fn step_limit(limit: u64) -> Self {
        let mut seen = 0u64;
        Self::with_predicate(
            move || {
                seen += 1;
                seen > limit
            },
            Unpaced,
        )
    }

    /// The yield point between two steps. Counts the step just finished,
    /// paces, and returns `true` if the run must stop now.
    pub fn checkpoint(&mut self) -> bool {
        if self.steps > 0 {
            self.pacer.pace(self.steps);
        }
        self.steps += 1;
        (self.cancelled)()
    }

    /// Number of checkpoints passed so far.
    #[inline]
    pub fn steps(&self) -> u64 {
        self.steps
    }
}

impl Default for Control {
    fn default() -> Self {
        Self::unpaced()
    }
}

impl fmt::Debug for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Control").field("steps", &self.steps).finish()
    }
}
