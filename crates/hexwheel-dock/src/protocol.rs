//! The fixed check battery.
//!
//! Checks run in a fixed order and never short-circuit one another: a
//! dataset with an empty name still gets its ranges checked, and a
//! single undockable entry never aborts the sweep over the remaining
//! entries. Every check is a deterministic pure inspection over the
//! already-materialized dataset and the captured positioning engine:
//! no I/O, no retries, no input mutation.

use std::collections::BTreeSet;

use hexwheel_kernel::{GATE_COUNT, LINES_PER_GATE, PositioningEngine};

use crate::dataset::{COMPLETENESS_FULL, KnowledgeDataset};
use crate::report::{CheckOutcome, DockingReport};

/// Runs the full battery against one dataset and returns the report.
///
/// The completeness check only joins the battery when the dataset
/// declares itself full-coverage; the other three always run.
pub fn dock(dataset: &KnowledgeDataset, engine: &PositioningEngine) -> DockingReport {
    let mut outcomes = vec![
        check_structure(dataset),
        check_ranges(dataset),
        check_docking(dataset, engine),
    ];
    if dataset.declares_full_coverage() {
        outcomes.push(check_completeness(dataset));
    }
    DockingReport::assemble(dataset.system_name.clone(), outcomes)
}

/// Check 1: structural presence. A missing version is only a warning.
fn check_structure(dataset: &KnowledgeDataset) -> CheckOutcome {
    let mut outcome = CheckOutcome::default();
    if dataset.system_name.trim().is_empty() {
        outcome.errors.push("structure: system name is empty".into());
    }
    if dataset.version.is_none() {
        outcome
            .warnings
            .push("structure: dataset declares no version".into());
    }
    if let Some(completeness) = dataset.completeness.as_deref()
        && completeness != COMPLETENESS_FULL
    {
        outcome.warnings.push(format!(
            "structure: unrecognized completeness {completeness:?} (expected \"full\")"
        ));
    }
    outcome
}

/// Check 2: per-entry range validity for gate and (when present) line.
fn check_ranges(dataset: &KnowledgeDataset) -> CheckOutcome {
    let mut outcome = CheckOutcome::default();
    for (index, mapping) in dataset.mappings.iter().enumerate() {
        let gate = mapping.gate_number;
        if !(1..=GATE_COUNT as i64).contains(&gate) {
            outcome
                .errors
                .push(format!("ranges: entry {index} gate {gate} is outside 1..=64"));
        }
        if let Some(line) = mapping.line_number
            && !(1..=i64::from(LINES_PER_GATE)).contains(&line)
        {
            outcome.errors.push(format!(
                "ranges: entry {index} (gate {gate}) line {line} is outside 1..=6"
            ));
        }
    }
    outcome
}

/// Check 3: every entry must dock into the positioning engine.
///
/// Entries without a line number probe line 1. A positioning error is
/// captured per entry and the sweep continues.
fn check_docking(dataset: &KnowledgeDataset, engine: &PositioningEngine) -> CheckOutcome {
    let mut outcome = CheckOutcome::default();
    for (index, mapping) in dataset.mappings.iter().enumerate() {
        let gate = mapping.gate_number;
        let line = mapping.line_number.unwrap_or(1);
        if let Err(err) = engine.position(gate, line) {
            outcome
                .errors
                .push(format!("docking: entry {index} (gate {gate}): {err}"));
        }
    }
    outcome
}

/// Check 4: declared full coverage must actually span gates 1..=64.
fn check_completeness(dataset: &KnowledgeDataset) -> CheckOutcome {
    let mut outcome = CheckOutcome::default();
    let present: BTreeSet<i64> = dataset
        .mappings
        .iter()
        .map(|m| m.gate_number)
        .filter(|g| (1..=GATE_COUNT as i64).contains(g))
        .collect();
    for gate in 1..=GATE_COUNT as i64 {
        if !present.contains(&gate) {
            outcome
                .errors
                .push(format!("completeness: gate {gate} has no mapping"));
        }
    }
    outcome
}
