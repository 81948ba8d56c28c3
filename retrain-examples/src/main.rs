use anyhow::Context;
use rand::Rng;
use retrain_api::{builders::harness::HarnessBuilder, presets::resume_defaults};
use retrain_core::{
    Error, Trainer,
    checkpoint::{CheckpointRef, prepare_checkpoint_dir},
    metrics::IterationStats,
    rollout::RolloutCommand,
    runtime::{LocalRuntime, RuntimeScope},
};
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Stand-in trainer replaying an improving reward curve. There is no
/// environment behind it; the real collaborator lives outside this
/// repository.
struct CurveTrainer {
    iteration: usize,
    mean: f32,
}

impl CurveTrainer {
    fn new() -> Self {
        CurveTrainer {
            iteration: 0,
            mean: -200.0,
        }
    }
}

impl Trainer for CurveTrainer {
    fn train(&mut self) -> retrain_core::Result<IterationStats> {
        let mut rng = rand::rng();
        self.iteration += 1;
        self.mean = (self.mean + 2.5).min(-90.0);
        let mean = self.mean + rng.random_range(-1.5..1.5);
        Ok(IterationStats {
            episode_reward_min: mean - rng.random_range(5.0..20.0),
            episode_reward_mean: mean,
            episode_reward_max: mean + rng.random_range(5.0..20.0),
            episode_len_mean: -mean,
        })
    }

    fn save(&mut self, dir: &Path) -> retrain_core::Result<CheckpointRef> {
        let path = dir.join(format!("checkpoint-{:06}", self.iteration));
        std::fs::create_dir_all(&path)?;
        std::fs::write(
            path.join("state"),
            format!("{} {}", self.iteration, self.mean),
        )?;
        Ok(CheckpointRef::from_path(&path))
    }

    fn restore(&mut self, checkpoint: &CheckpointRef) -> retrain_core::Result<()> {
        let raw = std::fs::read_to_string(Path::new(checkpoint.as_str()).join("state"))?;
        let mut parts = raw.split_whitespace();
        let (Some(iteration), Some(mean)) = (parts.next(), parts.next()) else {
            return Err(Error::trainer_msg(format!(
                "malformed checkpoint state: {raw:?}"
            )));
        };
        self.iteration = iteration
            .parse()
            .map_err(|_| Error::trainer_msg("bad iteration count in checkpoint"))?;
        self.mean = mean
            .parse()
            .map_err(|_| Error::trainer_msg("bad reward mean in checkpoint"))?;
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let _runtime = RuntimeScope::enter(LocalRuntime);

    let checkpoint_dir = PathBuf::from("mountain-car-checkpoints");
    prepare_checkpoint_dir(&checkpoint_dir)?;

    let mut config = resume_defaults();
    config.set_extra("env", json!("MountainCar-v0"));

    // first leg: a short run from scratch
    let mut harness = HarnessBuilder {
        iterations: 4,
        checkpoint_dir: checkpoint_dir.clone(),
        resume_from: None,
    }
    .build(CurveTrainer::new());
    let first = harness.run()?;
    let resume = first
        .final_checkpoint()
        .cloned()
        .context("first leg saved no checkpoint")?;
    info!(checkpoint = %resume, "resuming from the first leg");

    // second leg: a fresh trainer picking up where the first one stopped
    let mut harness = HarnessBuilder {
        iterations: 6,
        checkpoint_dir: checkpoint_dir.clone(),
        resume_from: Some(resume),
    }
    .build(CurveTrainer::new());
    let report = harness.run()?;
    report.write_json(&checkpoint_dir.join("run_report.json"))?;

    let rollout = RolloutCommand {
        program: PathBuf::from("rollout"),
        checkpoint: report
            .final_checkpoint()
            .cloned()
            .context("resumed leg saved no checkpoint")?,
        algorithm: "PPO".to_owned(),
        steps: 1000,
        config,
    };
    println!("visualize with: {}", rollout.rendered()?);
    Ok(())
}
