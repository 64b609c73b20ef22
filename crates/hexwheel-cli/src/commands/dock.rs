use hexwheel_dock::dock;

use crate::support::{engine_or_exit, read_dataset_or_exit};

pub fn run(preset: &str, dataset_path: &str, json_output: bool) {
    let engine = engine_or_exit(preset);
    let dataset = read_dataset_or_exit(dataset_path);

    let report = dock(&dataset, &engine);

    if json_output {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).expect("json serialization")
        );
    } else {
        println!(
            "dock {:?} against preset {preset}: {}",
            report.system_name,
            if report.overall_valid { "valid" } else { "INVALID" }
        );
        println!(
            "  Checks: {} passed, {} failed of {}",
            report.passed_checks, report.failed_checks, report.total_checks
        );
        for warning in &report.warnings {
            println!("  warning: {warning}");
        }
        for error in &report.errors {
            println!("  error: {error}");
        }
    }

    std::process::exit(report.exit_code());
}
