use clap::{Parser, Subcommand};
use hexwheel_kernel::DEFAULT_ANGLE_TOLERANCE_DEGREES;

#[derive(Parser)]
#[command(
    name = "hexwheel",
    about = "Position 64 gates on a 360° ordinal wheel and verify knowledge datasets against it",
    version
)]
pub struct Cli {
    /// Built-in arrangement preset to position against
    #[arg(long, global = true, default_value = "rave")]
    pub preset: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Forward position of one gate line
    Position {
        /// Gate number, 1..=64
        gate: i64,

        /// Line number, 1..=6
        #[arg(default_value_t = 1)]
        line: i64,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Nearest gate/line to an absolute angle
    Angle {
        /// Angle in degrees; any real value, normalized mod 360
        degrees: f64,

        /// Match tolerance in degrees
        #[arg(long, default_value_t = DEFAULT_ANGLE_TOLERANCE_DEGREES)]
        tolerance: f64,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Structural identity of one gate (pattern, codon, quarter, face, trigrams, opposite)
    Identity {
        /// Gate number, 1..=64
        gate: i64,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the built-in arrangement presets
    Presets {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Verify a knowledge-mapping dataset; exits non-zero on a failed check
    Dock {
        /// Path to the dataset JSON file
        dataset: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
