//! # Hexwheel Docking Protocol
//!
//! Certifies an externally supplied knowledge-mapping dataset against
//! the positioning foundation: a fixed battery of structural checks
//! producing one itemized [`DockingReport`].
//!
//! The protocol is the trust boundary between the wheel and the
//! knowledge systems that dock onto it. It owns no domain content
//! (payloads pass through opaquely) and it never throws: violations
//! are collected, not raised, so one malformed entry cannot suppress
//! the assessment of the other sixty-three.
//!
//! ## Battery
//!
//! ```text
//! 1. structure     ← name present; missing version warns
//! 2. ranges        ← gate ∈ 1..=64, line ∈ 1..=6 per entry
//! 3. docking       ← every entry positions against the engine
//! 4. completeness  ← declared-full datasets must span 1..=64
//! ```

pub mod dataset;
pub mod protocol;
pub mod report;

pub use dataset::{COMPLETENESS_FULL, GateMapping, KnowledgeDataset};
pub use protocol::dock;
pub use report::DockingReport;
