use crate::{
    Result, Trainer,
    checkpoint::CheckpointRef,
    metrics::{IterationMetrics, RunReport},
};
use std::path::PathBuf;
use tracing::debug;

/// Observation point after each completed iteration. Hooks watch the
/// run, they cannot steer it.
pub trait HarnessHooks {
    fn post_iteration(&mut self, metrics: &IterationMetrics, checkpoint: &CheckpointRef);
}

/// Default hooks: one progress line per iteration on stdout.
pub struct StdoutProgress;

impl HarnessHooks for StdoutProgress {
    fn post_iteration(&mut self, metrics: &IterationMetrics, checkpoint: &CheckpointRef) {
        println!("{}", format_progress_line(metrics, checkpoint));
    }
}

/// The single formatting point for the progress line: 1-indexed
/// iteration in a 3-char field, stats with 4 decimals in 8-char fields.
pub fn format_progress_line(metrics: &IterationMetrics, checkpoint: &CheckpointRef) -> String {
    format!(
        "iter: {:>3} reward min: {:>8.4} mean: {:>8.4} max: {:>8.4} len mean: {:>8.4} checkpoint: {}",
        metrics.iteration + 1,
        metrics.stats.episode_reward_min,
        metrics.stats.episode_reward_mean,
        metrics.stats.episode_reward_max,
        metrics.stats.episode_len_mean,
        checkpoint,
    )
}

/// Drives a bounded number of training iterations against an external
/// trainer, checkpointing after every one of them.
pub struct Harness<T: Trainer, H: HarnessHooks> {
    pub trainer: T,
    pub hooks: H,
    pub iterations: usize,
    pub checkpoint_dir: PathBuf,
    pub resume_from: Option<CheckpointRef>,
}

impl<T: Trainer, H: HarnessHooks> Harness<T, H> {
    /// Restores the resume checkpoint if one was supplied, then runs
    /// train / record / save per iteration. Failures propagate
    /// immediately: failing on iteration k leaves exactly k records.
    pub fn run(&mut self) -> Result<RunReport> {
        if let Some(checkpoint) = &self.resume_from {
            debug!(checkpoint = %checkpoint, "restoring before first iteration");
            self.trainer.restore(checkpoint)?;
        }
        let mut report = RunReport::default();
        for iteration in 0..self.iterations {
            let stats = self.trainer.train()?;
            let metrics = IterationMetrics { iteration, stats };
            report.metrics.push(metrics);
            let checkpoint = self.trainer.save(&self.checkpoint_dir)?;
            self.hooks.post_iteration(&metrics, &checkpoint);
            report.checkpoints.push(checkpoint);
        }
        debug!(iterations = report.iterations(), "run finished");
        Ok(report)
    }
}
