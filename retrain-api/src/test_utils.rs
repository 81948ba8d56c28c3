use retrain_core::{
    Error, Result, Trainer,
    checkpoint::CheckpointRef,
    harness::{HarnessHooks, format_progress_line},
    metrics::{IterationMetrics, IterationStats},
};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrainerCall {
    Restore(String),
    Train,
    Save,
}

/// Scripted stand-in for the external trainer: replays a fixed stats
/// sequence, records every call in order, and can be armed to fail on a
/// given train call.
pub struct ScriptedTrainer {
    pub script: Vec<IterationStats>,
    pub calls: Vec<TrainerCall>,
    fail_on_train: Option<usize>,
    train_count: usize,
    save_count: usize,
}

impl ScriptedTrainer {
    pub fn new(script: Vec<IterationStats>) -> Self {
        ScriptedTrainer {
            script,
            calls: vec![],
            fail_on_train: None,
            train_count: 0,
            save_count: 0,
        }
    }

    /// Replays the same stats on every train call.
    pub fn constant(stats: IterationStats) -> Self {
        Self::new(vec![stats])
    }

    /// Arms a failure on the given 0-indexed train call.
    pub fn fail_on_train(mut self, call: usize) -> Self {
        self.fail_on_train = Some(call);
        self
    }

    pub fn restore_calls(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, TrainerCall::Restore(_)))
            .count()
    }
}

impl Trainer for ScriptedTrainer {
    fn train(&mut self) -> Result<IterationStats> {
        self.calls.push(TrainerCall::Train);
        if self.fail_on_train == Some(self.train_count) {
            return Err(Error::trainer_msg(format!(
                "scripted failure on train call {}",
                self.train_count
            )));
        }
        // past the end of the script the last entry repeats
        let stats = self
            .script
            .get(self.train_count)
            .or(self.script.last())
            .copied()
            .unwrap_or_default();
        self.train_count += 1;
        Ok(stats)
    }

    fn save(&mut self, dir: &Path) -> Result<CheckpointRef> {
        self.calls.push(TrainerCall::Save);
        self.save_count += 1;
        let path = dir.join(format!("checkpoint-{:06}", self.save_count));
        Ok(CheckpointRef::from_path(&path))
    }

    fn restore(&mut self, checkpoint: &CheckpointRef) -> Result<()> {
        self.calls
            .push(TrainerCall::Restore(checkpoint.as_str().to_owned()));
        Ok(())
    }
}

/// Captures the formatted progress lines instead of printing them.
#[derive(Default)]
pub struct RecordingHooks {
    pub lines: Vec<String>,
}

impl HarnessHooks for RecordingHooks {
    fn post_iteration(&mut self, metrics: &IterationMetrics, checkpoint: &CheckpointRef) {
        self.lines.push(format_progress_line(metrics, checkpoint));
    }
}
