//! End-to-end runner tests
//!
//! Loads the shipped configuration, runs sessions over synthetic and
//! file-based samples, and checks the serialized report.

use std::fs;
use std::path::PathBuf;

use gonio_cli::config::load_config;
use gonio_cli::input::load_samples;
use gonio_cli::runner::{run_session, synthetic_samples, LogObserver};
use gonio_cli::CliError;
use gonio_core::session::SessionReport;
use gonio_core::Vec3;

fn config_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("configs/session.json")
}

fn scratch_file(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("gonio-cli-test-{}", std::process::id()));
    fs::create_dir_all(&dir).expect("create scratch dir");
    dir.join(name)
}

#[test]
fn shipped_config_runs_synthetic_session() {
    let _ = env_logger::builder().is_test(true).try_init();
    let config = load_config(&config_path()).expect("shipped config is valid");
    assert_eq!(config.seed, 7);

    let samples = synthetic_samples(&config);
    let mut observer = LogObserver::default();
    let report = run_session(&config, &samples, &config.synthetic_reference(), &mut observer);

    let center = report.batch_center().expect("batch estimate");
    assert!((center - config.sweep.shoulder).norm() < 0.03);
    assert!(report.incremental.is_some());
    assert!(report
        .messages
        .iter()
        .any(|m| m.starts_with("Calculated height (4d matrix)")));
}

#[test]
fn arm_angle_at_end_of_sweep() {
    let config = load_config(&config_path()).expect("shipped config is valid");
    let samples = synthetic_samples(&config);
    let report = run_session(&config, &samples, &config.synthetic_reference(), &mut LogObserver::default());

    // Sweep ends 80 degrees above horizontal
    let angle = report.arm_angle(samples.last().unwrap()).expect("shoulder estimate");
    assert!((angle - 170.0).abs() < 5.0, "angle {angle}");
}

#[test]
fn samples_file_round_trip_matches_in_memory_run() {
    let config = load_config(&config_path()).expect("shipped config is valid");
    let samples = synthetic_samples(&config);

    let path = scratch_file("samples.json");
    fs::write(&path, serde_json::to_string(&samples).unwrap()).unwrap();
    let loaded = load_samples(&path).expect("samples load");
    assert_eq!(loaded, samples);

    let reference = config.synthetic_reference();
    let a = run_session(&config, &samples, &reference, &mut LogObserver::default());
    let b = run_session(&config, &loaded, &reference, &mut LogObserver::default());
    assert_eq!(a, b);
}

#[test]
fn report_serializes_to_json() {
    let config = load_config(&config_path()).expect("shipped config is valid");
    let samples = synthetic_samples(&config);
    let report = run_session(&config, &samples, &config.synthetic_reference(), &mut LogObserver::default());

    let json = serde_json::to_string_pretty(&report).unwrap();
    let parsed: SessionReport = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed.samples_recorded, report.samples_recorded);
    assert_eq!(parsed.messages, report.messages);
    assert!(json.contains("\"batch\""));
}

#[test]
fn too_few_samples_reported_not_failed() {
    let config = load_config(&config_path()).expect("shipped config is valid");
    let samples: Vec<Vec3> = (0..5).map(|i| Vec3::new(0.2 * i as f64, 1.0, 0.0)).collect();

    let report = run_session(&config, &samples, &Vec3::new(0.0, 1.4, 0.0), &mut LogObserver::default());

    assert!(report.batch.center.is_none());
    assert_eq!(report.messages.first().map(String::as_str), Some("Too few points. Please try again"));
}

#[test]
fn malformed_config_is_an_error() {
    let path = scratch_file("bad.json");
    fs::write(&path, "{ \"batch\": { \"iteration_count\": \"many\" } }").unwrap();

    assert!(matches!(load_config(&path), Err(CliError::Json { .. })));
}
