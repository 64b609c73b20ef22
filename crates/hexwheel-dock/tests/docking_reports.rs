//! Integration tests: golden docking reports.
//!
//! Each fixture in tests/fixtures/ has:
//! - dataset.json: the knowledge-mapping dataset as it arrives
//! - expect.json: the exact report the battery must produce
//!
//! These load the dataset, run the battery against the rave preset,
//! and compare the serialized report to the expectation, including
//! exact error and warning wording.

use std::path::PathBuf;
use std::sync::Arc;

use hexwheel_dock::{KnowledgeDataset, dock};
use hexwheel_kernel::{PositioningEngine, SequenceConfiguration};
use serde_json::Value;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn run_fixture(name: &str) {
    let dir = fixtures_dir().join(name);

    let dataset_path = dir.join("dataset.json");
    let expect_path = dir.join("expect.json");

    let dataset_str = std::fs::read_to_string(&dataset_path)
        .unwrap_or_else(|e| panic!("failed to read {}: {e}", dataset_path.display()));
    let expect_str = std::fs::read_to_string(&expect_path)
        .unwrap_or_else(|e| panic!("failed to read {}: {e}", expect_path.display()));

    let dataset: KnowledgeDataset = serde_json::from_str(&dataset_str)
        .unwrap_or_else(|e| panic!("failed to parse {}: {e}", dataset_path.display()));
    let expected: Value = serde_json::from_str(&expect_str)
        .unwrap_or_else(|e| panic!("failed to parse {}: {e}", expect_path.display()));

    let config = SequenceConfiguration::from_preset("rave").expect("built-in preset");
    let engine = PositioningEngine::new(Arc::new(config));

    let report = dock(&dataset, &engine);
    let report_json = serde_json::to_value(&report).expect("failed to serialize report");

    assert_eq!(
        report_json,
        expected,
        "\n\nFixture: {name}\n\nGot:\n{}\n\nExpected:\n{}\n",
        serde_json::to_string_pretty(&report_json).unwrap(),
        serde_json::to_string_pretty(&expected).unwrap(),
    );
}

#[test]
fn golden_full_coverage_valid() {
    run_fixture("full_coverage_valid");
}

#[test]
fn golden_missing_gate_full_coverage() {
    run_fixture("missing_gate_full_coverage");
}

#[test]
fn golden_out_of_range_gate() {
    run_fixture("out_of_range_gate");
}

#[test]
fn golden_unnamed_unversioned() {
    run_fixture("unnamed_unversioned");
}
