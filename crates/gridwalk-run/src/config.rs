//! Per-run settings.

use gridwalk_core::{Context, Control, Throttle, Unpaced};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Pacing and randomness for a run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RunConfig {
    /// Milliseconds to hold the run at a checkpoint. Zero runs the whole
    /// algorithm synchronously.
    pub pace_ms: u64,
    /// Hold only after every `pace_every`-th step, for throughput.
    pub pace_every: u32,
    /// Seed for maze generation. `None` draws from the thread RNG.
    pub seed: Option<u64>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            pace_ms: 0,
            pace_every: 1,
            seed: None,
        }
    }
}

impl RunConfig {
    /// A config that paces every step by `ms` milliseconds.
    pub fn paced(ms: u64) -> Self {
        Self {
            pace_ms: ms,
            ..Self::default()
        }
    }

    /// Builder for [`seed`](Self::seed).
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Pacing plus cancellation through `ctx`.
    pub fn control(&self, ctx: Context) -> Control {
        if self.pace_ms == 0 {
            Control::new(ctx, Unpaced)
        } else {
            Control::new(ctx, Throttle::from_millis(self.pace_ms, u64::from(self.pace_every)))
        }
    }

    /// The generator RNG for this run.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        }
    }
}
