use entropyguid_core::GuidGenerator;

use super::{ConfigArgs, load_config};

pub fn run(count: usize, overrides: &ConfigArgs, trace: bool, json: bool) {
    let generator = GuidGenerator::new(load_config(overrides));

    for _ in 0..count {
        let result = match generator.generate_traced() {
            Ok(result) => result,
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        };

        if json {
            let value = if trace {
                serde_json::to_value(result.summary())
            } else {
                Ok(serde_json::json!({ "identifier": result.identifier }))
            };
            match value {
                Ok(v) => println!("{v}"),
                Err(e) => {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }
            }
        } else if trace {
            println!("str = {}", result.composite.to_string_lossy());
            if result.composite.is_truncated() {
                println!("      (truncated to {} bytes)", result.composite.capacity());
            }
            println!("digest = {}", result.digest);
            println!("|{}|", result.identifier);
        } else {
            println!("{}", result.identifier);
        }
    }
}
