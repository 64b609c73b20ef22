//! The docking report: one immutable verdict per verification run.

use serde::{Deserialize, Serialize};

/// Outcome of one named check in the battery.
#[derive(Debug, Clone, Default)]
pub(crate) struct CheckOutcome {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl CheckOutcome {
    pub fn passed(&self) -> bool {
        self.errors.is_empty()
    }
}

/// The aggregate result of a docking run.
///
/// Built once by [`crate::dock`] and never mutated afterward. Errors
/// and warnings are itemized, one line per distinct violation naming
/// the offending entry, and ordered deterministically: battery order
/// first, entry order within a check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DockingReport {
    pub system_name: String,
    /// Checks executed this run (the completeness check only runs when
    /// the dataset declares full coverage).
    pub total_checks: usize,
    pub passed_checks: usize,
    pub failed_checks: usize,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    /// True exactly when no check failed. Warnings never fail a check.
    pub overall_valid: bool,
}

impl DockingReport {
    pub(crate) fn assemble(system_name: String, outcomes: Vec<CheckOutcome>) -> Self {
        let total_checks = outcomes.len();
        let passed_checks = outcomes.iter().filter(|o| o.passed()).count();
        let failed_checks = total_checks - passed_checks;
        let errors: Vec<String> = outcomes.iter().flat_map(|o| o.errors.clone()).collect();
        let warnings: Vec<String> = outcomes.iter().flat_map(|o| o.warnings.clone()).collect();
        Self {
            system_name,
            total_checks,
            passed_checks,
            failed_checks,
            errors,
            warnings,
            overall_valid: failed_checks == 0,
        }
    }

    /// Process exit-code style signal: 0 when every check passed.
    pub fn exit_code(&self) -> i32 {
        if self.overall_valid { 0 } else { 1 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assemble_counts_checks_not_errors() {
        let outcomes = vec![
            CheckOutcome::default(),
            CheckOutcome {
                errors: vec!["a".into(), "b".into()],
                warnings: vec!["w".into()],
            },
        ];
        let report = DockingReport::assemble("s".into(), outcomes);
        assert_eq!(report.total_checks, 2);
        assert_eq!(report.passed_checks, 1);
        assert_eq!(report.failed_checks, 1);
        assert_eq!(report.errors.len(), 2);
        assert_eq!(report.warnings.len(), 1);
        assert!(!report.overall_valid);
        assert_eq!(report.exit_code(), 1);
    }

    #[test]
    fn warnings_alone_stay_valid() {
        let outcomes = vec![CheckOutcome {
            errors: vec![],
            warnings: vec!["w".into()],
        }];
        let report = DockingReport::assemble("s".into(), outcomes);
        assert!(report.overall_valid);
        assert_eq!(report.exit_code(), 0);
    }
}
