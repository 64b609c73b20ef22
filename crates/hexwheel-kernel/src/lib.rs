//! # Hexwheel Kernel
//!
//! Positions 64 gates of 6 lines each (384 line positions) on a
//! closed 360° ordinal wheel, under a configurable arrangement, and
//! maps angles back to gates bit-exactly.
//!
//! This crate is **content-agnostic**: it does not prescribe what a
//! gate means to any knowledge system. It only prescribes where a gate
//! sits and what structural identity it carries.
//!
//! ## Architecture
//!
//! ```text
//! identity              ← Fixed per-gate facts: pattern, codon,
//!     │                   quarter, face, trigrams, opposite
//! sequence / preset     ← Validated permutation + cardinal alignment,
//!     │                   derived rotation offset
//! position              ← The angle algebra: (gate, line) ⇄ angle
//!     │
//! active                ← Process-wide swap-on-write configuration slot
//! ```
//!
//! Everything is synchronous, deterministic, and free of I/O. The only
//! shared mutable state in the whole crate is the [`active`] slot, and
//! that is replace-only.

pub mod active;
pub mod error;
pub mod identity;
pub mod position;
pub mod preset;
pub mod sequence;

pub use active::ActiveConfiguration;
pub use error::WheelError;
pub use identity::{
    GATE_COUNT, GateIdentity, LINES_PER_GATE, LinePattern, Quarter, Trigram, TrigramPair,
    binary_pattern_of, codon_of, face_of, identity_of, opposite_of, quarter_of, trigrams_of,
};
pub use position::{
    AngleMatch, DEFAULT_ANGLE_TOLERANCE_DEGREES, LINE_ARC_DEGREES, PositionResult,
    PositioningEngine, TOTAL_LINE_POSITIONS,
};
pub use preset::{DEFAULT_PRESET_NAME, Preset};
pub use sequence::{AngleProgression, ConfigSnapshot, ReferencePosition, SequenceConfiguration};
