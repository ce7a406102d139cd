use std::time::Instant;

use entropyguid_core::ProbeSet;

use super::{ConfigArgs, load_config};

pub fn run(name: &str, overrides: &ConfigArgs) {
    let probes = ProbeSet::from_config(&load_config(overrides));

    let Some(probe) = probes.find(name) else {
        eprintln!("Probe '{name}' not found. Run 'scan' to list probes.");
        std::process::exit(1);
    };

    let info = probe.info();
    println!("Probing: {}", info.name);
    println!("  {}", info.description);
    println!("  {}", info.rationale);
    println!();

    let t0 = Instant::now();
    match probe.sample() {
        Ok(sample) => {
            println!("  Sample:  {}", sample.text());
            println!("  Length:  {} bytes", sample.text().len());
            println!("  Time:    {:.3}s", t0.elapsed().as_secs_f64());
        }
        Err(e) => {
            eprintln!("  Error: {e}");
            std::process::exit(1);
        }
    }
}
