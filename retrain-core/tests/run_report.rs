use retrain_core::Result;
use retrain_core::checkpoint::CheckpointRef;
use retrain_core::metrics::{IterationMetrics, IterationStats, RunReport};
use serde_json::{Value, json};

fn one_iteration_report() -> RunReport {
    RunReport {
        metrics: vec![IterationMetrics {
            iteration: 0,
            stats: IterationStats {
                episode_reward_min: -200.0,
                episode_reward_mean: -150.0,
                episode_reward_max: -100.0,
                episode_len_mean: 200.0,
            },
        }],
        checkpoints: vec![CheckpointRef::from("ckpts/checkpoint-000001")],
    }
}

#[test]
fn written_report_keeps_the_flat_record_shape() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("run_report.json");
    let report = one_iteration_report();
    report.write_json(&path)?;

    let value: Value = serde_json::from_str(&std::fs::read_to_string(&path)?)?;
    // stats flatten into the record, checkpoints stay plain strings
    let record = &value["metrics"][0];
    assert_eq!(record["iteration"], json!(0));
    assert_eq!(record["episode_reward_min"], json!(-200.0));
    assert_eq!(record["episode_reward_mean"], json!(-150.0));
    assert_eq!(record["episode_reward_max"], json!(-100.0));
    assert_eq!(record["episode_len_mean"], json!(200.0));
    assert_eq!(value["checkpoints"][0], json!("ckpts/checkpoint-000001"));

    let read_back: RunReport = serde_json::from_value(value)?;
    assert_eq!(read_back, report);
    Ok(())
}
