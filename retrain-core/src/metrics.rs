use crate::Result;
use crate::checkpoint::CheckpointRef;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// What the trainer reports for one optimization iteration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct IterationStats {
    pub episode_reward_min: f32,
    pub episode_reward_mean: f32,
    pub episode_reward_max: f32,
    pub episode_len_mean: f32,
}

/// [`IterationStats`] tagged with the 0-based iteration index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IterationMetrics {
    pub iteration: usize,
    #[serde(flatten)]
    pub stats: IterationStats,
}

/// One metrics record and one checkpoint reference per iteration, both
/// in iteration order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    pub metrics: Vec<IterationMetrics>,
    pub checkpoints: Vec<CheckpointRef>,
}

impl RunReport {
    pub fn iterations(&self) -> usize {
        self.metrics.len()
    }

    pub fn final_checkpoint(&self) -> Option<&CheckpointRef> {
        self.checkpoints.last()
    }

    pub fn write_json(&self, path: &Path) -> Result<()> {
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}
