//! CLI for entropyguid — generate and inspect Entropy-GUIDs.

mod commands;

use clap::{Parser, Subcommand};
use env_logger::Env;

#[derive(Parser)]
#[command(name = "entropyguid")]
#[command(about = "entropyguid — identifiers from six heterogeneous entropy signals")]
#[command(version = entropyguid_core::VERSION)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one or more identifiers
    Generate {
        /// Number of identifiers to generate
        #[arg(long, short = 'n', default_value = "1")]
        count: usize,

        #[command(flatten)]
        overrides: commands::ConfigArgs,

        /// Print the composite record and digest for each identifier
        #[arg(long)]
        trace: bool,

        /// Emit one JSON object per identifier
        #[arg(long)]
        json: bool,
    },

    /// List the six probes in composite order
    Scan,

    /// Run a single probe and print its sample (partial name match)
    Probe {
        /// Probe name, e.g. "jitter" or "memory"
        name: String,

        #[command(flatten)]
        overrides: commands::ConfigArgs,
    },
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level)).init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Generate {
            count,
            overrides,
            trace,
            json,
        } => commands::generate::run(count, &overrides, trace, json),
        Commands::Scan => commands::scan::run(),
        Commands::Probe { name, overrides } => commands::probe::run(&name, &overrides),
    }
}
