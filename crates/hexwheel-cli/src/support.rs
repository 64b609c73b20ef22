use std::sync::Arc;

use hexwheel_dock::KnowledgeDataset;
use hexwheel_kernel::{PositioningEngine, SequenceConfiguration, preset};

/// Builds an engine for a named preset, or exits listing what exists.
pub fn engine_or_exit(preset_name: &str) -> PositioningEngine {
    let config = SequenceConfiguration::from_preset(preset_name).unwrap_or_else(|e| {
        eprintln!("error: {e}");
        let names: Vec<&str> = preset::all().iter().map(|p| p.name).collect();
        eprintln!("available presets: {}", names.join(", "));
        std::process::exit(2);
    });
    PositioningEngine::new(Arc::new(config))
}

/// Reads and fully materializes a dataset file before any checking.
pub fn read_dataset_or_exit(path: &str) -> KnowledgeDataset {
    let raw = std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("error: failed to read {path}: {e}");
        std::process::exit(2);
    });
    serde_json::from_str(&raw).unwrap_or_else(|e| {
        eprintln!("error: failed to parse {path}: {e}");
        std::process::exit(2);
    })
}
