//! Error types for hexwheel kernel operations.

/// Errors arising from out-of-domain wheel input, invalid configuration,
/// or internal table inconsistency.
#[derive(Debug, thiserror::Error)]
pub enum WheelError {
    /// A gate number outside 1..=64 was passed to a positioning or
    /// identity call.
    #[error("invalid gate number {gate}: must be within 1..=64")]
    InvalidGate { gate: i64 },

    /// A line number outside 1..=6 was passed to a positioning call.
    #[error("invalid line number {line}: must be within 1..=6")]
    InvalidLine { line: i64 },

    /// A candidate sequence does not have exactly 64 entries.
    #[error("invalid sequence length {actual}: a wheel sequence has exactly 64 gates")]
    InvalidLength { actual: usize },

    /// A candidate sequence has duplicate or out-of-range entries.
    #[error("invalid permutation: {detail}")]
    InvalidPermutation { detail: String },

    /// An angle progression token other than `ascending`/`descending`.
    #[error("invalid angle progression {token:?}: expected \"ascending\" or \"descending\"")]
    InvalidProgression { token: String },

    /// A reference position naming absent gates, or a pair that is not
    /// circularly adjacent in the sequence.
    #[error("invalid reference position: {detail}")]
    InvalidReference { detail: String },

    /// A preset name with no entry in the built-in registry.
    #[error("unknown preset {name:?}")]
    UnknownPreset { name: String },

    /// A face code with no entry in the 16-entry face table.
    ///
    /// Unreachable for the fixed identity table; any occurrence is a
    /// defect in the table, not a recoverable condition.
    #[error("unmapped face code {code:?}: no entry in the face table")]
    UnmappedCode { code: String },

    /// A lookup that validation should have made impossible.
    #[error("not found: {detail}")]
    NotFound { detail: String },
}
