use retrain_core::config::{LogLevel, TrainerConfig};
use serde_json::Map;

/// The settings the classic-control resume run uses. Anything the
/// external trainer needs beyond these goes through the extra map.
pub fn resume_defaults() -> TrainerConfig {
    TrainerConfig {
        num_workers: 3,
        train_batch_size: 4000,
        sgd_minibatch_size: 128,
        evaluation_num_episodes: 10,
        log_level: LogLevel::Warn,
        extra: Map::new(),
    }
}
