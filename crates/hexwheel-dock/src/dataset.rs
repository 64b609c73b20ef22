//! The knowledge-mapping dataset shape consumed by the protocol.
//!
//! A knowledge system is pure data to the wheel: a name, an optional
//! version, and a list of gate/line mappings whose payloads the
//! protocol carries opaquely and never interprets. Field presence and
//! list-ness are enforced at the serde boundary; everything beyond
//! that (ranges, dockability, coverage) is the check battery's job.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The completeness declaration value that triggers the coverage check.
pub const COMPLETENESS_FULL: &str = "full";

/// One gate/line mapping carried by a knowledge system.
///
/// Gate and line arrive as wide integers on purpose: out-of-range
/// values are data to be reported on, not a parse failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GateMapping {
    pub gate_number: i64,
    /// Absent means the mapping addresses the whole gate; the docking
    /// check probes line 1 in that case.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_number: Option<i64>,
    /// Opaque domain content. Preserved, never inspected.
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub payload: Value,
}

/// An externally supplied knowledge-mapping dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgeDataset {
    pub system_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// `"full"` declares full 64-gate coverage and arms the
    /// completeness check. Any other value is reported as a warning.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completeness: Option<String>,
    /// Required: a dataset without a mapping list is a parse error,
    /// not a check failure.
    pub mappings: Vec<GateMapping>,
}

impl KnowledgeDataset {
    /// Whether the dataset declares full 64-gate coverage.
    pub fn declares_full_coverage(&self) -> bool {
        self.completeness.as_deref() == Some(COMPLETENESS_FULL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_dataset_parses() {
        let ds: KnowledgeDataset = serde_json::from_str(
            r#"{"systemName": "gene-keys", "mappings": [{"gateNumber": 17}]}"#,
        )
        .unwrap();
        assert_eq!(ds.system_name, "gene-keys");
        assert_eq!(ds.version, None);
        assert!(!ds.declares_full_coverage());
        assert_eq!(ds.mappings[0].gate_number, 17);
        assert_eq!(ds.mappings[0].line_number, None);
        assert!(ds.mappings[0].payload.is_null());
    }

    #[test]
    fn payload_is_carried_opaquely() {
        let ds: KnowledgeDataset = serde_json::from_str(
            r#"{
                "systemName": "lines",
                "completeness": "full",
                "mappings": [
                    {"gateNumber": 3, "lineNumber": 2, "payload": {"keyword": "mutation"}}
                ]
            }"#,
        )
        .unwrap();
        assert!(ds.declares_full_coverage());
        assert_eq!(ds.mappings[0].payload["keyword"], "mutation");
        let round = serde_json::to_value(&ds).unwrap();
        assert_eq!(round["mappings"][0]["payload"]["keyword"], "mutation");
    }
}
