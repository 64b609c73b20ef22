use hexwheel_kernel::identity_of;

pub fn run(gate: i64, json_output: bool) {
    let identity = identity_of(gate).unwrap_or_else(|e| {
        eprintln!("error: {e}");
        std::process::exit(2);
    });

    if json_output {
        println!(
            "{}",
            serde_json::to_string_pretty(&identity).expect("json serialization")
        );
    } else {
        println!("gate {gate}");
        println!("  Pattern: {} (line 1 first)", identity.binary_pattern);
        println!("  Codon: {}", identity.codon);
        println!("  Quarter: {}", identity.quarter);
        println!("  Face: {}", identity.face);
        println!(
            "  Trigrams: {} below, {} above",
            identity.trigrams.lower, identity.trigrams.upper
        );
        println!("  Opposite: gate {}", identity.opposite);
    }
}
