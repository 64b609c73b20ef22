//! The identity table: configuration-independent structural facts per gate.
//!
//! Every gate 1..=64 owns a fixed 6-line binary pattern (King Wen
//! hexagram lines, bottom to top). Everything else in this module is
//! a pure derivation of that pattern: codon, quarter, face, trigrams,
//! opposite. Nothing here depends on how a sequence configuration
//! arranges the gates around the wheel: identity says *what* a gate is,
//! the positioning engine says *where* it sits.
//!
//! All operations are deterministic pure functions over static data;
//! the table is safe to share across threads without synchronization.

use serde::{Deserialize, Serialize};

use crate::error::WheelError;

/// Number of gates on the wheel.
pub const GATE_COUNT: usize = 64;

/// Lines per gate.
pub const LINES_PER_GATE: u8 = 6;

/// The fixed 4-symbol base alphabet used for codons and face codes.
///
/// Indexed by a 2-bit line pair (upper line is the high bit).
pub const BASE_ALPHABET: [char; 4] = ['A', 'C', 'G', 'T'];

/// The 64 line patterns in gate-number order (index 0 = gate 1).
///
/// Bit `i` of each entry is line `i + 1`, so the literals read top line
/// first. The table is pairwise distinct and closed under bitwise
/// inversion: every gate has exactly one complementary opposite.
const PATTERNS: [u8; GATE_COUNT] = [
    0b111111, 0b000000, 0b010001, 0b100010, 0b010111, 0b111010, 0b000010, 0b010000,
    0b110111, 0b111011, 0b000111, 0b111000, 0b111101, 0b101111, 0b000100, 0b001000,
    0b011001, 0b100110, 0b000011, 0b110000, 0b101001, 0b100101, 0b100000, 0b000001,
    0b111001, 0b100111, 0b100001, 0b011110, 0b010010, 0b101101, 0b011100, 0b001110,
    0b111100, 0b001111, 0b101000, 0b000101, 0b110101, 0b101011, 0b010100, 0b001010,
    0b100011, 0b110001, 0b011111, 0b111110, 0b011000, 0b000110, 0b011010, 0b010110,
    0b011101, 0b101110, 0b001001, 0b100100, 0b110100, 0b001011, 0b001101, 0b101100,
    0b110110, 0b011011, 0b110010, 0b010011, 0b110011, 0b001100, 0b010101, 0b101010,
];

/// A gate's 6-line binary pattern.
///
/// Bit 0 is line 1 (bottom), bit 5 is line 6 (top). Only the low six
/// bits are ever populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LinePattern(u8);

impl LinePattern {
    /// Raw bits, line 1 in bit 0.
    pub fn bits(self) -> u8 {
        self.0
    }

    /// The value (0 or 1) of one line, 1..=6.
    ///
    /// Panics on a line outside 1..=6; line numbers here come from
    /// internal iteration, never from caller input.
    pub fn line(self, line: u8) -> u8 {
        assert!((1..=LINES_PER_GATE).contains(&line));
        (self.0 >> (line - 1)) & 1
    }

    /// The bitwise complement over the six line bits.
    pub fn complement(self) -> LinePattern {
        LinePattern(!self.0 & 0b111111)
    }
}

impl std::fmt::Display for LinePattern {
    /// Renders bottom to top: character 0 is line 1.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for line in 1..=LINES_PER_GATE {
            write!(f, "{}", self.line(line))?;
        }
        Ok(())
    }
}

/// One of the four digram quarters, read from lines 5-6 (the top two).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Quarter {
    /// Both top lines yin (00).
    OldYin,
    /// Line 5 yang under a yin line 6 (01).
    YoungYang,
    /// Line 5 yin under a yang line 6 (10).
    YoungYin,
    /// Both top lines yang (11).
    OldYang,
}

impl std::fmt::Display for Quarter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::OldYin => "old-yin",
            Self::YoungYang => "young-yang",
            Self::YoungYin => "young-yin",
            Self::OldYang => "old-yang",
        };
        write!(f, "{name}")
    }
}

const QUARTERS: [Quarter; 4] = [
    Quarter::OldYin,
    Quarter::YoungYang,
    Quarter::YoungYin,
    Quarter::OldYang,
];

/// One of the eight trigrams, read from a 3-line group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trigram {
    Earth,
    Thunder,
    Water,
    Lake,
    Mountain,
    Fire,
    Wind,
    Heaven,
}

impl std::fmt::Display for Trigram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Earth => "earth",
            Self::Thunder => "thunder",
            Self::Water => "water",
            Self::Lake => "lake",
            Self::Mountain => "mountain",
            Self::Fire => "fire",
            Self::Wind => "wind",
            Self::Heaven => "heaven",
        };
        write!(f, "{name}")
    }
}

/// Indexed by the 3-bit group value (top line is the high bit).
const TRIGRAMS: [Trigram; 8] = [
    Trigram::Earth,    // 000
    Trigram::Thunder,  // 001: bottom line yang
    Trigram::Water,    // 010
    Trigram::Lake,     // 011
    Trigram::Mountain, // 100: top line yang
    Trigram::Fire,     // 101
    Trigram::Wind,     // 110
    Trigram::Heaven,   // 111
];

/// The lower (lines 1-3) and upper (lines 4-6) trigrams of a gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrigramPair {
    pub lower: Trigram,
    pub upper: Trigram,
}

/// The fixed 16-entry face table, keyed by the 2-letter code formed
/// from the top four lines (lines 5-6 pair first, then lines 3-4).
///
/// Labels read top element over bottom element.
const FACE_TABLE: [(&str, &str); 16] = [
    ("AA", "earth-over-earth"),
    ("AC", "earth-over-water"),
    ("AG", "earth-over-air"),
    ("AT", "earth-over-fire"),
    ("CA", "water-over-earth"),
    ("CC", "water-over-water"),
    ("CG", "water-over-air"),
    ("CT", "water-over-fire"),
    ("GA", "air-over-earth"),
    ("GC", "air-over-water"),
    ("GG", "air-over-air"),
    ("GT", "air-over-fire"),
    ("TA", "fire-over-earth"),
    ("TC", "fire-over-water"),
    ("TG", "fire-over-air"),
    ("TT", "fire-over-fire"),
];

/// The full identity record for one gate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GateIdentity {
    pub gate_number: u8,
    /// Six characters, line 1 first.
    pub binary_pattern: String,
    pub codon: String,
    pub quarter: Quarter,
    pub face: String,
    pub trigrams: TrigramPair,
    pub opposite: u8,
}

fn pattern_checked(gate: i64) -> Result<LinePattern, WheelError> {
    if !(1..=GATE_COUNT as i64).contains(&gate) {
        return Err(WheelError::InvalidGate { gate });
    }
    Ok(LinePattern(PATTERNS[(gate - 1) as usize]))
}

fn base_letter(pair: u8) -> char {
    BASE_ALPHABET[(pair & 0b11) as usize]
}

/// The 6-line binary pattern of a gate.
pub fn binary_pattern_of(gate: i64) -> Result<LinePattern, WheelError> {
    pattern_checked(gate)
}

/// The 3-letter codon of a gate: line pairs (1-2, 3-4, 5-6) mapped
/// through the base alphabet, upper line of each pair as the high bit.
pub fn codon_of(gate: i64) -> Result<String, WheelError> {
    let p = pattern_checked(gate)?;
    let mut codon = String::with_capacity(3);
    for pair in 0..3 {
        let lo = p.line(pair * 2 + 1);
        let hi = p.line(pair * 2 + 2);
        codon.push(base_letter(hi << 1 | lo));
    }
    Ok(codon)
}

/// The quarter of a gate, read from the top two lines.
pub fn quarter_of(gate: i64) -> Result<Quarter, WheelError> {
    let p = pattern_checked(gate)?;
    Ok(QUARTERS[(p.line(6) << 1 | p.line(5)) as usize])
}

/// The 2-letter face code of a gate, read from the top four lines.
pub fn face_code_of(gate: i64) -> Result<String, WheelError> {
    let p = pattern_checked(gate)?;
    let top = base_letter(p.line(6) << 1 | p.line(5));
    let mid = base_letter(p.line(4) << 1 | p.line(3));
    Ok(format!("{top}{mid}"))
}

/// The face label of a gate, resolved through the 16-entry face table.
///
/// A code with no table entry surfaces as `UnmappedCode`. That is a
/// contract check on the table itself, never a silent default.
pub fn face_of(gate: i64) -> Result<&'static str, WheelError> {
    let code = face_code_of(gate)?;
    FACE_TABLE
        .iter()
        .find(|(k, _)| *k == code)
        .map(|(_, label)| *label)
        .ok_or(WheelError::UnmappedCode { code })
}

/// The lower and upper trigrams of a gate.
pub fn trigrams_of(gate: i64) -> Result<TrigramPair, WheelError> {
    let p = pattern_checked(gate)?;
    let lower = p.line(3) << 2 | p.line(2) << 1 | p.line(1);
    let upper = p.line(6) << 2 | p.line(5) << 1 | p.line(4);
    Ok(TrigramPair {
        lower: TRIGRAMS[lower as usize],
        upper: TRIGRAMS[upper as usize],
    })
}

/// The gate whose pattern is the exact bitwise complement.
///
/// The table is closed under inversion, so `NotFound` is unreachable;
/// it is still surfaced rather than unwrapped so a corrupted table
/// fails loudly instead of panicking.
pub fn opposite_of(gate: i64) -> Result<u8, WheelError> {
    let complement = pattern_checked(gate)?.complement().bits();
    PATTERNS
        .iter()
        .position(|&p| p == complement)
        .map(|i| (i + 1) as u8)
        .ok_or(WheelError::NotFound {
            detail: format!("no gate complements gate {gate}"),
        })
}

/// The full identity record for one gate.
pub fn identity_of(gate: i64) -> Result<GateIdentity, WheelError> {
    Ok(GateIdentity {
        gate_number: gate as u8,
        binary_pattern: binary_pattern_of(gate)?.to_string(),
        codon: codon_of(gate)?,
        quarter: quarter_of(gate)?,
        face: face_of(gate)?.to_string(),
        trigrams: trigrams_of(gate)?,
        opposite: opposite_of(gate)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn patterns_are_pairwise_distinct() {
        let set: HashSet<u8> = PATTERNS.iter().copied().collect();
        assert_eq!(set.len(), GATE_COUNT);
    }

    #[test]
    fn patterns_are_closed_under_inversion() {
        for gate in 1..=64 {
            let opp = opposite_of(gate).unwrap();
            assert_eq!(opposite_of(opp as i64).unwrap(), gate as u8);
            assert_eq!(
                binary_pattern_of(opp as i64).unwrap(),
                binary_pattern_of(gate).unwrap().complement(),
            );
        }
    }

    #[test]
    fn known_patterns() {
        assert_eq!(binary_pattern_of(1).unwrap().to_string(), "111111");
        assert_eq!(binary_pattern_of(2).unwrap().to_string(), "000000");
        // Gate 5: heaven below, water above.
        assert_eq!(binary_pattern_of(5).unwrap().to_string(), "111010");
        // Gate 63: fire below, water above.
        assert_eq!(binary_pattern_of(63).unwrap().to_string(), "101010");
    }

    #[test]
    fn known_opposites() {
        assert_eq!(opposite_of(1).unwrap(), 2);
        assert_eq!(opposite_of(63).unwrap(), 64);
        assert_eq!(opposite_of(27).unwrap(), 28);
        assert_eq!(opposite_of(51).unwrap(), 57);
    }

    #[test]
    fn codons_cover_all_64_triplets() {
        let set: HashSet<String> = (1..=64).map(|g| codon_of(g).unwrap()).collect();
        assert_eq!(set.len(), 64);
        assert_eq!(codon_of(1).unwrap(), "TTT");
        assert_eq!(codon_of(2).unwrap(), "AAA");
    }

    #[test]
    fn quarter_reads_top_two_lines() {
        assert_eq!(quarter_of(1).unwrap(), Quarter::OldYang);
        assert_eq!(quarter_of(2).unwrap(), Quarter::OldYin);
        // Gate 5 (111010): line 5 yang, line 6 yin.
        assert_eq!(quarter_of(5).unwrap(), Quarter::YoungYang);
    }

    #[test]
    fn every_face_code_is_mapped() {
        for gate in 1..=64 {
            face_of(gate).unwrap();
        }
    }

    #[test]
    fn trigrams_split_bottom_and_top() {
        let t = trigrams_of(63).unwrap();
        assert_eq!(t.lower, Trigram::Fire);
        assert_eq!(t.upper, Trigram::Water);
        let t = trigrams_of(11).unwrap();
        assert_eq!(t.lower, Trigram::Heaven);
        assert_eq!(t.upper, Trigram::Earth);
    }

    #[test]
    fn out_of_range_gates_are_rejected() {
        for gate in [0, -3, 65, 1000] {
            assert!(matches!(
                binary_pattern_of(gate),
                Err(WheelError::InvalidGate { .. })
            ));
            assert!(matches!(codon_of(gate), Err(WheelError::InvalidGate { .. })));
            assert!(matches!(
                opposite_of(gate),
                Err(WheelError::InvalidGate { .. })
            ));
        }
    }

    #[test]
    fn identity_record_is_consistent() {
        let id = identity_of(41).unwrap();
        assert_eq!(id.gate_number, 41);
        assert_eq!(id.binary_pattern, "110001");
        assert_eq!(id.opposite, opposite_of(41).unwrap());
        assert_eq!(id.codon, codon_of(41).unwrap());
    }
}
