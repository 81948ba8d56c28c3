use retrain_api::builders::harness::HarnessBuilder;
use retrain_api::test_utils::{RecordingHooks, ScriptedTrainer, TrainerCall};
use retrain_core::checkpoint::{CheckpointRef, prepare_checkpoint_dir};
use retrain_core::metrics::IterationStats;
use retrain_core::{Error, Result};
use std::collections::HashSet;
use std::path::PathBuf;

fn mountain_car_stats() -> IterationStats {
    IterationStats {
        episode_reward_min: -200.0,
        episode_reward_mean: -150.0,
        episode_reward_max: -100.0,
        episode_len_mean: 200.0,
    }
}

fn builder(iterations: usize) -> HarnessBuilder {
    HarnessBuilder {
        iterations,
        checkpoint_dir: PathBuf::from("ckpts"),
        resume_from: None,
    }
}

#[test]
fn a_run_yields_one_record_per_iteration_in_order() -> Result<()> {
    for n in [0usize, 1, 3, 7] {
        let mut harness = builder(n).build_with_hooks(
            ScriptedTrainer::constant(mountain_car_stats()),
            RecordingHooks::default(),
        );
        let report = harness.run()?;
        assert_eq!(report.iterations(), n);
        assert_eq!(report.checkpoints.len(), n);
        for (idx, metrics) in report.metrics.iter().enumerate() {
            assert_eq!(metrics.iteration, idx);
        }
    }
    Ok(())
}

#[test]
fn every_train_is_followed_by_exactly_one_save() -> Result<()> {
    let mut harness = builder(4).build_with_hooks(
        ScriptedTrainer::constant(mountain_car_stats()),
        RecordingHooks::default(),
    );
    harness.run()?;
    let calls = &harness.trainer.calls;
    assert_eq!(calls.len(), 8);
    for pair in calls.chunks(2) {
        assert_eq!(pair, [TrainerCall::Train, TrainerCall::Save]);
    }
    Ok(())
}

#[test]
fn resume_restores_once_before_the_first_train() -> Result<()> {
    let mut harness = HarnessBuilder {
        iterations: 2,
        checkpoint_dir: PathBuf::from("ckpts"),
        resume_from: Some(CheckpointRef::from("prior/checkpoint-000042")),
    }
    .build_with_hooks(
        ScriptedTrainer::constant(mountain_car_stats()),
        RecordingHooks::default(),
    );
    harness.run()?;
    let calls = &harness.trainer.calls;
    assert_eq!(harness.trainer.restore_calls(), 1);
    assert_eq!(
        calls[0],
        TrainerCall::Restore("prior/checkpoint-000042".to_owned())
    );
    assert_eq!(calls[1], TrainerCall::Train);
    Ok(())
}

#[test]
fn no_restore_happens_without_a_resume_checkpoint() -> Result<()> {
    let mut harness = builder(2).build_with_hooks(
        ScriptedTrainer::constant(mountain_car_stats()),
        RecordingHooks::default(),
    );
    harness.run()?;
    assert_eq!(harness.trainer.restore_calls(), 0);
    Ok(())
}

#[test]
fn a_train_failure_keeps_the_completed_iterations_only() {
    let mut harness = builder(5).build_with_hooks(
        ScriptedTrainer::constant(mountain_car_stats()).fail_on_train(2),
        RecordingHooks::default(),
    );
    let err = harness.run().unwrap_err();
    assert!(matches!(err, Error::Trainer(_)));
    // two iterations completed, nothing saved for the failing third
    assert_eq!(harness.hooks.lines.len(), 2);
    let saves = harness
        .trainer
        .calls
        .iter()
        .filter(|call| **call == TrainerCall::Save)
        .count();
    assert_eq!(saves, 2);
}

#[test]
fn three_iterations_print_three_lines_and_three_checkpoints() -> Result<()> {
    let mut harness = builder(3).build_with_hooks(
        ScriptedTrainer::constant(mountain_car_stats()),
        RecordingHooks::default(),
    );
    let report = harness.run()?;

    assert_eq!(harness.hooks.lines.len(), 3);
    for (idx, line) in harness.hooks.lines.iter().enumerate() {
        let expected = format!(
            "iter: {:>3} reward min: -200.0000 mean: -150.0000 max: -100.0000 len mean: 200.0000 checkpoint: {}",
            idx + 1,
            report.checkpoints[idx],
        );
        assert_eq!(line, &expected);
    }

    assert!(report.checkpoints.iter().all(|c| !c.as_str().is_empty()));
    let distinct: HashSet<&str> = report.checkpoints.iter().map(|c| c.as_str()).collect();
    assert_eq!(distinct.len(), 3);
    assert_eq!(report.final_checkpoint(), Some(&report.checkpoints[2]));
    Ok(())
}

#[test]
fn clearing_a_missing_checkpoint_dir_is_not_an_error() -> Result<()> {
    let root = tempfile::tempdir()?;
    let dir = root.path().join("never-created");
    prepare_checkpoint_dir(&dir)?;
    assert!(dir.exists());

    // a fresh run starts empty even when leftovers exist
    std::fs::write(dir.join("stale"), b"old run")?;
    prepare_checkpoint_dir(&dir)?;
    assert!(dir.exists());
    assert_eq!(std::fs::read_dir(&dir)?.count(), 0);
    Ok(())
}
