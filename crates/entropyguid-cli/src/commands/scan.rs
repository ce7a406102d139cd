use entropyguid_core::{ProbeSet, timer_source};

pub fn run() {
    let probes = ProbeSet::default();

    println!("Composite order (6 probes):\n");
    for (i, probe) in probes.iter().enumerate() {
        let info = probe.info();
        let marker = if info.soft { "soft" } else { "hard" };
        println!(
            "  {}. {:<18} [{marker}] {}",
            i + 1,
            info.name,
            info.description
        );
    }
    println!();
    println!("Jitter counter: {}", timer_source());
}
