//! Wheel arrangement: an ordered permutation of the 64 gates plus a
//! cardinal alignment.
//!
//! A `SequenceConfiguration` is validated exhaustively at construction
//! and never mutated afterward. Reconfiguring a running process always
//! means building a new instance and swapping it in wholesale (see
//! [`crate::active`]); no partial state is ever observable.
//!
//! Direction is deliberately expressed as *angle progression relative
//! to ordinal index*, `ascending` or `descending`, never as a
//! clockwise/counter-clockwise word. The visual reading of a rendered
//! wheel is a presentation concern, not an authoritative one.

use serde::{Deserialize, Serialize};

use crate::error::WheelError;
use crate::identity::{GATE_COUNT, LINES_PER_GATE};
use crate::position::LINE_ARC_DEGREES;
use crate::preset;

/// How angle relates to ordinal index across the wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AngleProgression {
    /// Angle grows as ordinal index grows.
    Ascending,
    /// Angle shrinks as ordinal index grows.
    Descending,
}

impl AngleProgression {
    /// Base angle (before rotation) of an absolute line position 0..=383.
    pub(crate) fn base_angle(self, line_position: u16) -> f64 {
        let swept = f64::from(line_position) * LINE_ARC_DEGREES;
        match self {
            Self::Ascending => swept,
            Self::Descending => (360.0 - swept) % 360.0,
        }
    }
}

impl std::fmt::Display for AngleProgression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ascending => write!(f, "ascending"),
            Self::Descending => write!(f, "descending"),
        }
    }
}

impl std::str::FromStr for AngleProgression {
    type Err = WheelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ascending" => Ok(Self::Ascending),
            "descending" => Ok(Self::Descending),
            other => Err(WheelError::InvalidProgression {
                token: other.to_string(),
            }),
        }
    }
}

/// Which point of the sequence must land at angle 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferencePosition {
    /// The line-1 start of a single gate maps to 0°.
    GateStart(u8),
    /// The shared boundary of two circularly adjacent gates maps to 0°.
    /// Order-insensitive.
    Boundary(u8, u8),
}

impl std::fmt::Display for ReferencePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GateStart(g) => write!(f, "{g}"),
            Self::Boundary(a, b) => write!(f, "{a}|{b}"),
        }
    }
}

impl std::str::FromStr for ReferencePosition {
    type Err = WheelError;

    /// Parses a single gate number (`"41"`) or a boundary pair
    /// (`"10|11"`, order-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |detail: String| WheelError::InvalidReference { detail };
        let parse_gate = |tok: &str| {
            tok.trim()
                .parse::<u8>()
                .map_err(|_| invalid(format!("{tok:?} is not a gate number")))
        };
        match s.split_once('|') {
            None => Ok(Self::GateStart(parse_gate(s)?)),
            Some((a, b)) => Ok(Self::Boundary(parse_gate(a)?, parse_gate(b)?)),
        }
    }
}

/// Immutable, serializable copy of a configuration's fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigSnapshot {
    pub sequence: Vec<u8>,
    pub angle_progression: AngleProgression,
    /// Absent when the rotation was supplied as an explicit override.
    pub reference_position: Option<String>,
    pub rotation_offset_degrees: f64,
}

/// A validated wheel arrangement.
///
/// Holds the gate permutation, the angle progression, the reference
/// position (when one was given) and the derived rotation offset.
/// There are no mutating methods: replacing a configuration means
/// constructing a new one.
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceConfiguration {
    sequence: [u8; GATE_COUNT],
    /// inverse[gate - 1] = ordinal index of `gate`. Total by
    /// construction: validation proves the sequence is a permutation.
    inverse: [u8; GATE_COUNT],
    progression: AngleProgression,
    reference: Option<ReferencePosition>,
    rotation_offset_degrees: f64,
}

impl SequenceConfiguration {
    /// Validates and builds a configuration, deriving the rotation
    /// offset from the reference position.
    ///
    /// Validation order: length, permutation, reference. Progression
    /// arrives typed; its textual form is policed by [`FromStr`].
    pub fn new(
        sequence: &[u8],
        progression: AngleProgression,
        reference: ReferencePosition,
    ) -> Result<Self, WheelError> {
        let (sequence, inverse) = validate_sequence(sequence)?;
        let reference_line_position = resolve_reference(&sequence, &inverse, reference)?;
        let base = progression.base_angle(reference_line_position);
        let rotation_offset_degrees = (360.0 - base) % 360.0;
        Ok(Self {
            sequence,
            inverse,
            progression,
            reference: Some(reference),
            rotation_offset_degrees,
        })
    }

    /// Builds a configuration with an explicit numeric rotation offset
    /// instead of a derived one. The offset is normalized to [0, 360).
    pub fn with_rotation(
        sequence: &[u8],
        progression: AngleProgression,
        rotation_offset_degrees: f64,
    ) -> Result<Self, WheelError> {
        let (sequence, inverse) = validate_sequence(sequence)?;
        Ok(Self {
            sequence,
            inverse,
            progression,
            reference: None,
            rotation_offset_degrees: rotation_offset_degrees.rem_euclid(360.0),
        })
    }

    /// Resolves a named preset from the built-in registry.
    pub fn from_preset(name: &str) -> Result<Self, WheelError> {
        let preset = preset::find(name).ok_or_else(|| WheelError::UnknownPreset {
            name: name.to_string(),
        })?;
        Self::new(
            &preset.sequence,
            preset.progression,
            preset.reference.parse()?,
        )
    }

    /// Ordinal index (0..=63) of a gate within this sequence.
    pub fn ordinal_index_of(&self, gate: i64) -> Result<usize, WheelError> {
        if !(1..=GATE_COUNT as i64).contains(&gate) {
            return Err(WheelError::InvalidGate { gate });
        }
        Ok(usize::from(self.inverse[(gate - 1) as usize]))
    }

    /// Gate number at an ordinal index 0..=63.
    pub fn gate_at(&self, ordinal_index: usize) -> Result<u8, WheelError> {
        self.sequence
            .get(ordinal_index)
            .copied()
            .ok_or_else(|| WheelError::NotFound {
                detail: format!("no ordinal slot {ordinal_index}"),
            })
    }

    pub fn sequence(&self) -> &[u8; GATE_COUNT] {
        &self.sequence
    }

    pub fn progression(&self) -> AngleProgression {
        self.progression
    }

    pub fn reference(&self) -> Option<ReferencePosition> {
        self.reference
    }

    pub fn rotation_offset_degrees(&self) -> f64 {
        self.rotation_offset_degrees
    }

    /// Defensive, serializable copy of every field.
    pub fn snapshot(&self) -> ConfigSnapshot {
        ConfigSnapshot {
            sequence: self.sequence.to_vec(),
            angle_progression: self.progression,
            reference_position: self.reference.map(|r| r.to_string()),
            rotation_offset_degrees: self.rotation_offset_degrees,
        }
    }
}

/// Checks length and permutation, returning the sequence together with
/// its precomputed inverse (gate → ordinal index).
fn validate_sequence(candidate: &[u8]) -> Result<([u8; GATE_COUNT], [u8; GATE_COUNT]), WheelError> {
    if candidate.len() != GATE_COUNT {
        return Err(WheelError::InvalidLength {
            actual: candidate.len(),
        });
    }
    let mut sequence = [0u8; GATE_COUNT];
    let mut inverse = [0u8; GATE_COUNT];
    let mut seen = [false; GATE_COUNT];
    for (index, &gate) in candidate.iter().enumerate() {
        if !(1..=GATE_COUNT as u8).contains(&gate) {
            return Err(WheelError::InvalidPermutation {
                detail: format!("entry {gate} at ordinal {index} is outside 1..=64"),
            });
        }
        let slot = usize::from(gate - 1);
        if seen[slot] {
            return Err(WheelError::InvalidPermutation {
                detail: format!("gate {gate} appears more than once"),
            });
        }
        seen[slot] = true;
        sequence[index] = gate;
        inverse[slot] = index as u8;
    }
    Ok((sequence, inverse))
}

/// Resolves a reference position to the absolute line position that
/// must land at angle 0.
///
/// For a boundary pair the zero point is the line-1 start of whichever
/// member circularly follows the other; "10|11" on a sequence where 11
/// sits at ordinal 57 and 10 at 58 pins the start of gate 10 to 0°.
fn resolve_reference(
    sequence: &[u8; GATE_COUNT],
    inverse: &[u8; GATE_COUNT],
    reference: ReferencePosition,
) -> Result<u16, WheelError> {
    let index_of = |gate: u8| -> Result<usize, WheelError> {
        if !(1..=GATE_COUNT as u8).contains(&gate) {
            return Err(WheelError::InvalidReference {
                detail: format!("reference gate {gate} is outside 1..=64"),
            });
        }
        let index = usize::from(inverse[usize::from(gate - 1)]);
        debug_assert_eq!(sequence[index], gate);
        Ok(index)
    };
    let start_index = match reference {
        ReferencePosition::GateStart(gate) => index_of(gate)?,
        ReferencePosition::Boundary(a, b) => {
            if a == b {
                return Err(WheelError::InvalidReference {
                    detail: format!("boundary gates must differ, got {a}|{b}"),
                });
            }
            let ia = index_of(a)?;
            let ib = index_of(b)?;
            if (ia + 1) % GATE_COUNT == ib {
                ib
            } else if (ib + 1) % GATE_COUNT == ia {
                ia
            } else {
                return Err(WheelError::InvalidReference {
                    detail: format!("gates {a} and {b} are not adjacent in the sequence"),
                });
            }
        }
    };
    Ok(start_index as u16 * u16::from(LINES_PER_GATE))
}
