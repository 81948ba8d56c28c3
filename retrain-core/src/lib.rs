pub mod checkpoint;
pub mod config;
pub mod error;
pub mod harness;
pub mod metrics;
pub mod rollout;
pub mod runtime;

pub use error::{Error, Result};

use checkpoint::CheckpointRef;
use metrics::IterationStats;
use std::path::Path;

/// The external collaborator that owns the policy, the environment and
/// whatever worker parallelism it wants. The harness only ever calls
/// these three operations and treats everything behind them as opaque.
pub trait Trainer {
    /// Runs one optimization iteration, blocking until it completes
    fn train(&mut self) -> Result<IterationStats>;

    /// Persists the current trainer state under `dir`
    fn save(&mut self, dir: &Path) -> Result<CheckpointRef>;

    /// Loads previously persisted state
    fn restore(&mut self, checkpoint: &CheckpointRef) -> Result<()>;
}
