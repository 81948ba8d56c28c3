use retrain_core::{
    Trainer,
    checkpoint::CheckpointRef,
    harness::{Harness, HarnessHooks, StdoutProgress},
};
use std::path::PathBuf;

pub struct HarnessBuilder {
    pub iterations: usize,
    pub checkpoint_dir: PathBuf,
    pub resume_from: Option<CheckpointRef>,
}

impl Default for HarnessBuilder {
    fn default() -> Self {
        HarnessBuilder {
            iterations: 5,
            checkpoint_dir: PathBuf::from("checkpoints"),
            resume_from: None,
        }
    }
}

impl HarnessBuilder {
    pub fn build<T: Trainer>(self, trainer: T) -> Harness<T, StdoutProgress> {
        self.build_with_hooks(trainer, StdoutProgress)
    }

    pub fn build_with_hooks<T: Trainer, H: HarnessHooks>(
        self,
        trainer: T,
        hooks: H,
    ) -> Harness<T, H> {
        Harness {
            trainer,
            hooks,
            iterations: self.iterations,
            checkpoint_dir: self.checkpoint_dir,
            resume_from: self.resume_from,
        }
    }
}
