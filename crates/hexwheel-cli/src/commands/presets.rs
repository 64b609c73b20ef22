use hexwheel_kernel::preset;
use serde_json::json;

pub fn run(json_output: bool) {
    if json_output {
        let payload: Vec<_> = preset::all()
            .iter()
            .map(|p| {
                json!({
                    "name": p.name,
                    "description": p.description,
                    "angleProgression": p.progression,
                    "referencePosition": p.reference,
                    "sequence": p.sequence.to_vec(),
                })
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&payload).expect("json serialization")
        );
    } else {
        for p in preset::all() {
            println!("{}", p.name);
            println!("  {}", p.description);
            println!("  Progression: {}", p.progression);
            println!("  Reference: {}", p.reference);
        }
    }
}
