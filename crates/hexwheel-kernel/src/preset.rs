//! Built-in wheel arrangement presets.
//!
//! Which arrangement is "the" canonical one is a live dispute among the
//! knowledge systems that dock onto the wheel. The kernel refuses to
//! arbitrate: every arrangement, including the historical defaults, is
//! just a named entry here, and callers pick one explicitly.

use crate::identity::GATE_COUNT;
use crate::sequence::AngleProgression;

/// The preset restored by [`crate::active::ActiveConfiguration::reset`].
pub const DEFAULT_PRESET_NAME: &str = "rave";

/// A named built-in arrangement.
#[derive(Debug, Clone, Copy)]
pub struct Preset {
    pub name: &'static str,
    pub description: &'static str,
    pub sequence: [u8; GATE_COUNT],
    pub progression: AngleProgression,
    /// Reference position in its textual form: one gate (`"1"`) or a
    /// boundary pair (`"10|11"`).
    pub reference: &'static str,
}

/// The rave mandala order: gate 41 opens the sequence and the boundary
/// between gates 11 and 10 pins the zero point, which derives a
/// rotation offset of exactly 33.75°.
const RAVE_SEQUENCE: [u8; GATE_COUNT] = [
    41, 19, 13, 49, 30, 55, 37, 63, 22, 36, 25, 17, 21, 51, 42, 3, //
    27, 24, 2, 23, 8, 20, 16, 35, 45, 12, 15, 52, 39, 53, 62, 56, //
    31, 33, 7, 4, 29, 59, 40, 64, 47, 6, 46, 18, 48, 57, 32, 50, //
    28, 44, 1, 43, 14, 34, 9, 5, 26, 11, 10, 58, 38, 54, 61, 60,
];

/// Plain King Wen order, gate 1 at the zero point.
const KING_WEN_SEQUENCE: [u8; GATE_COUNT] = [
    1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, //
    17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31, 32, //
    33, 34, 35, 36, 37, 38, 39, 40, 41, 42, 43, 44, 45, 46, 47, 48, //
    49, 50, 51, 52, 53, 54, 55, 56, 57, 58, 59, 60, 61, 62, 63, 64,
];

const PRESETS: [Preset; 2] = [
    Preset {
        name: "rave",
        description: "rave mandala order, ascending, zero at the 11|10 boundary",
        sequence: RAVE_SEQUENCE,
        progression: AngleProgression::Ascending,
        reference: "10|11",
    },
    Preset {
        name: "kingwen",
        description: "King Wen order, ascending, zero at the start of gate 1",
        sequence: KING_WEN_SEQUENCE,
        progression: AngleProgression::Ascending,
        reference: "1",
    },
];

/// All built-in presets, in registry order.
pub fn all() -> &'static [Preset] {
    &PRESETS
}

/// Looks up a preset by name.
pub fn find(name: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|p| p.name == name)
}
