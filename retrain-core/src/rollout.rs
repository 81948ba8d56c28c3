use crate::{Result, checkpoint::CheckpointRef, config::TrainerConfig};
use std::path::PathBuf;
use std::process::Command;

/// Invocation of the external rollout executable; pins the arguments
/// that must stay consistent with the training run.
#[derive(Debug, Clone)]
pub struct RolloutCommand {
    pub program: PathBuf,
    pub checkpoint: CheckpointRef,
    pub algorithm: String,
    pub steps: u64,
    pub config: TrainerConfig,
}

impl RolloutCommand {
    pub fn command(&self) -> Result<Command> {
        let mut cmd = Command::new(&self.program);
        cmd.arg(self.checkpoint.as_str())
            .arg("--run")
            .arg(&self.algorithm)
            .arg("--steps")
            .arg(self.steps.to_string())
            .arg("--config")
            .arg(self.config.to_json()?);
        Ok(cmd)
    }

    /// Shell-style rendering for logs and docs.
    pub fn rendered(&self) -> Result<String> {
        Ok(format!(
            "{} {} --run {} --steps {} --config '{}'",
            self.program.display(),
            self.checkpoint,
            self.algorithm,
            self.steps,
            self.config.to_json()?
        ))
    }
}
