use serde_json::json;

use crate::support::engine_or_exit;

pub fn run(preset: &str, degrees: f64, tolerance: f64, json_output: bool) {
    let engine = engine_or_exit(preset);
    let m = engine.gate_and_line_at_angle_with_tolerance(degrees, tolerance);

    if json_output {
        let payload = json!({
            "preset": preset,
            "match": m,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&payload).expect("json serialization")
        );
    } else {
        println!("angle {degrees}° on preset {preset}");
        println!(
            "  Gate {} line {} at {}°",
            m.position.gate_number, m.position.line_number, m.position.angle_degrees
        );
        println!(
            "  Match: {} (deviation {}°)",
            if m.exact { "exact" } else { "approximate" },
            m.deviation_degrees
        );
    }
}
