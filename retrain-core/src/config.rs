use crate::Result;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Verbosity level forwarded to the external trainer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

/// The named fields are the options the harness cares about; everything
/// else rides in `extra` and reaches the external trainer untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainerConfig {
    pub num_workers: usize,
    pub train_batch_size: usize,
    pub sgd_minibatch_size: usize,
    pub evaluation_num_episodes: usize,
    pub log_level: LogLevel,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        TrainerConfig {
            num_workers: 2,
            train_batch_size: 4000,
            sgd_minibatch_size: 128,
            evaluation_num_episodes: 10,
            log_level: LogLevel::Warn,
            extra: Map::new(),
        }
    }
}

impl TrainerConfig {
    pub fn set_extra(&mut self, key: impl Into<String>, value: Value) -> &mut Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// The JSON object the rollout tool expects on its `--config` flag.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
