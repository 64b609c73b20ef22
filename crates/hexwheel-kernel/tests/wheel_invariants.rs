//! Whole-wheel invariants, driven across random arrangements.
//!
//! The line-precision and round-trip properties must hold for *every*
//! valid configuration (any permutation, either progression, any
//! reference), not just the built-in presets, so they are checked here
//! with proptest in addition to the preset-specific unit tests.

use std::sync::Arc;

use approx::assert_abs_diff_eq;
use proptest::prelude::*;

use hexwheel_kernel::{
    AngleProgression, LINE_ARC_DEGREES, PositioningEngine, ReferencePosition,
    SequenceConfiguration, TOTAL_LINE_POSITIONS, preset,
};

fn arb_config() -> impl Strategy<Value = SequenceConfiguration> {
    let sequence = Just((1u8..=64).collect::<Vec<u8>>()).prop_shuffle();
    let progression = prop_oneof![
        Just(AngleProgression::Ascending),
        Just(AngleProgression::Descending),
    ];
    (sequence, progression, 0usize..64, proptest::bool::ANY).prop_map(
        |(seq, progression, slot, straddle)| {
            let reference = if straddle {
                ReferencePosition::Boundary(seq[slot], seq[(slot + 1) % 64])
            } else {
                ReferencePosition::GateStart(seq[slot])
            };
            SequenceConfiguration::new(&seq, progression, reference)
                .expect("generated configuration must validate")
        },
    )
}

proptest! {
    #[test]
    fn adjacent_lines_are_exactly_one_arc_apart(config in arb_config()) {
        let engine = PositioningEngine::new(Arc::new(config));
        for gate in 1..=64i64 {
            for line in 1..=5i64 {
                let a = engine.position(gate, line).unwrap().angle_degrees;
                let b = engine.position(gate, line + 1).unwrap().angle_degrees;
                let signed = match engine.config().progression() {
                    AngleProgression::Ascending => (b - a).rem_euclid(360.0),
                    AngleProgression::Descending => (a - b).rem_euclid(360.0),
                };
                prop_assert_eq!(signed, LINE_ARC_DEGREES);
            }
        }
    }

    #[test]
    fn every_line_round_trips(config in arb_config()) {
        let engine = PositioningEngine::new(Arc::new(config));
        for gate in 1..=64i64 {
            for line in 1..=6i64 {
                let forward = engine.position(gate, line).unwrap();
                let back = engine.gate_and_line_at_angle(forward.angle_degrees);
                prop_assert!(back.exact);
                prop_assert_eq!(back.position.gate_number as i64, gate);
                prop_assert_eq!(back.position.line_number as i64, line);
                assert_abs_diff_eq!(back.deviation_degrees, 0.0, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn the_384_positions_close_the_wheel(config in arb_config()) {
        let engine = PositioningEngine::new(Arc::new(config));
        let mut angles: Vec<f64> = (1..=64i64)
            .flat_map(|gate| (1..=6i64).map(move |line| (gate, line)))
            .map(|(gate, line)| engine.position(gate, line).unwrap().angle_degrees)
            .collect();
        angles.sort_by(|a, b| a.partial_cmp(b).unwrap());
        prop_assert_eq!(angles.len(), usize::from(TOTAL_LINE_POSITIONS));
        // Pairwise distinct, spanning [0, 360) on the exact line grid.
        for (k, pair) in angles.windows(2).enumerate() {
            prop_assert!(pair[0] < pair[1], "duplicate angle near index {}", k);
            prop_assert_eq!(pair[1] - pair[0], LINE_ARC_DEGREES);
        }
        prop_assert_eq!(angles[0], 0.0);
        prop_assert!(angles[angles.len() - 1] < 360.0);
    }
}

#[test]
fn presets_land_on_the_aligned_grid() {
    for p in preset::all() {
        let config = SequenceConfiguration::from_preset(p.name).unwrap();
        let engine = PositioningEngine::new(Arc::new(config));
        let mut angles: Vec<f64> = (1..=64i64)
            .flat_map(|gate| (1..=6i64).map(move |line| (gate, line)))
            .map(|(gate, line)| engine.position(gate, line).unwrap().angle_degrees)
            .collect();
        angles.sort_by(|a, b| a.partial_cmp(b).unwrap());
        for (k, angle) in angles.iter().enumerate() {
            assert_eq!(*angle, k as f64 * LINE_ARC_DEGREES, "preset {}", p.name);
        }
    }
}
