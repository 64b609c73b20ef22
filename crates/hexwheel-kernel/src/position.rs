//! The angle algebra: (gate, line) ⇄ absolute wheel angle.
//!
//! The wheel carries 384 line positions (64 gates × 6 lines), each
//! spanning exactly 360/384 = 0.9375°. Every quantity the engine
//! touches is a multiple of half that step, which f64 represents
//! exactly, so forward positions are bit-exact with no epsilon
//! anywhere in the forward path. Tolerances exist only for the inverse
//! lookup,
//! whose input is a continuous angle that may legitimately fall
//! between line boundaries.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::WheelError;
use crate::identity::LINES_PER_GATE;
use crate::sequence::SequenceConfiguration;

/// Total line positions around the wheel.
pub const TOTAL_LINE_POSITIONS: u16 = 384;

/// Arc of one line: 360/384 = 0.9375°, exact in f64.
pub const LINE_ARC_DEGREES: f64 = 360.0 / TOTAL_LINE_POSITIONS as f64;

/// Default tolerance for the inverse lookup: half a line arc, nudged
/// just above it so boundary angles still match their nearest line.
pub const DEFAULT_ANGLE_TOLERANCE_DEGREES: f64 = 0.47;

/// Where one (gate, line) sits on the configured wheel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionResult {
    pub gate_number: u8,
    pub line_number: u8,
    pub ordinal_index: usize,
    /// 0..=383: ordinal index × 6 + (line − 1).
    pub absolute_line_position: u16,
    /// Final angle in [0, 360) after progression and rotation.
    pub angle_degrees: f64,
}

/// Result of an inverse lookup.
///
/// The engine never rejects a continuous angle: it returns the nearest
/// line and flags whether the recomputed forward angle lies within
/// tolerance of the input. Callers decide what an approximate match
/// means for them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AngleMatch {
    pub position: PositionResult,
    pub input_angle_degrees: f64,
    /// Circular distance between input and recomputed forward angle.
    pub deviation_degrees: f64,
    pub exact: bool,
}

/// Computes positions against one captured configuration.
///
/// The engine holds an `Arc` snapshot and never mutates it: a batch of
/// queries against one engine is deterministic even if the process-wide
/// active configuration is swapped mid-batch.
#[derive(Debug, Clone)]
pub struct PositioningEngine {
    config: Arc<SequenceConfiguration>,
}

impl PositioningEngine {
    pub fn new(config: Arc<SequenceConfiguration>) -> Self {
        Self { config }
    }

    /// The configuration this engine was captured against.
    pub fn config(&self) -> &SequenceConfiguration {
        &self.config
    }

    /// Forward mapping: (gate, line) → ordinal index and angle.
    pub fn position(&self, gate: i64, line: i64) -> Result<PositionResult, WheelError> {
        if !(1..=i64::from(LINES_PER_GATE)).contains(&line) {
            return Err(WheelError::InvalidLine { line });
        }
        let ordinal_index = self.config.ordinal_index_of(gate)?;
        let absolute_line_position =
            ordinal_index as u16 * u16::from(LINES_PER_GATE) + (line - 1) as u16;
        Ok(PositionResult {
            gate_number: gate as u8,
            line_number: line as u8,
            ordinal_index,
            absolute_line_position,
            angle_degrees: self.angle_of_line_position(absolute_line_position),
        })
    }

    /// Inverse mapping with the default tolerance.
    pub fn gate_and_line_at_angle(&self, angle_degrees: f64) -> AngleMatch {
        self.gate_and_line_at_angle_with_tolerance(angle_degrees, DEFAULT_ANGLE_TOLERANCE_DEGREES)
    }

    /// Inverse mapping: nearest (gate, line) to an arbitrary angle.
    ///
    /// Normalizes, removes the rotation offset, inverts the progression
    /// transform, rounds to the nearest of the 384 line positions, and
    /// recomputes the forward angle to measure the deviation.
    pub fn gate_and_line_at_angle_with_tolerance(
        &self,
        angle_degrees: f64,
        tolerance_degrees: f64,
    ) -> AngleMatch {
        let normalized = angle_degrees.rem_euclid(360.0);
        let unrotated = (normalized - self.config.rotation_offset_degrees()).rem_euclid(360.0);
        let steps = match self.config.progression() {
            crate::sequence::AngleProgression::Ascending => unrotated / LINE_ARC_DEGREES,
            crate::sequence::AngleProgression::Descending => (360.0 - unrotated) / LINE_ARC_DEGREES,
        };
        let line_position =
            (steps.round() as i64).rem_euclid(i64::from(TOTAL_LINE_POSITIONS)) as u16;
        let ordinal_index = usize::from(line_position / u16::from(LINES_PER_GATE));
        let line_number = (line_position % u16::from(LINES_PER_GATE)) as u8 + 1;
        let gate_number = self.config.sequence()[ordinal_index];
        let recomputed = self.angle_of_line_position(line_position);
        let raw = (recomputed - normalized).abs();
        let deviation_degrees = raw.min(360.0 - raw);
        AngleMatch {
            position: PositionResult {
                gate_number,
                line_number,
                ordinal_index,
                absolute_line_position: line_position,
                angle_degrees: recomputed,
            },
            input_angle_degrees: normalized,
            deviation_degrees,
            exact: deviation_degrees <= tolerance_degrees,
        }
    }

    fn angle_of_line_position(&self, line_position: u16) -> f64 {
        let base = self.config.progression().base_angle(line_position);
        (base + self.config.rotation_offset_degrees()) % 360.0
    }
}
