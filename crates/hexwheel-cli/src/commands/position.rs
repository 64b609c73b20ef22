use serde_json::json;

use crate::support::engine_or_exit;

pub fn run(preset: &str, gate: i64, line: i64, json_output: bool) {
    let engine = engine_or_exit(preset);
    let position = engine.position(gate, line).unwrap_or_else(|e| {
        eprintln!("error: {e}");
        std::process::exit(2);
    });

    if json_output {
        let payload = json!({
            "preset": preset,
            "position": position,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&payload).expect("json serialization")
        );
    } else {
        println!("gate {gate} line {line} on preset {preset}");
        println!("  Ordinal index: {}", position.ordinal_index);
        println!("  Line position: {}", position.absolute_line_position);
        println!("  Angle: {}°", position.angle_degrees);
    }
}
