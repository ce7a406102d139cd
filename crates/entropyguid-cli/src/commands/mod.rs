pub mod generate;
pub mod probe;
pub mod scan;

use std::path::PathBuf;

use clap::Args;
use entropyguid_core::{DigestAlgorithm, GeneratorConfig};

/// Config file plus per-field overrides shared by subcommands.
#[derive(Args, Debug, Default)]
pub struct ConfigArgs {
    /// JSON config file; flags below override its values
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Jitter probe sleep in milliseconds (default 256)
    #[arg(long)]
    pub sleep_ms: Option<u64>,

    /// Directory whose entries the context probe counts
    #[arg(long)]
    pub context_dir: Option<PathBuf>,

    /// Combiner digest
    #[arg(long, value_parser = ["sha256", "sha512"])]
    pub digest: Option<String>,

    /// Digest salt
    #[arg(long)]
    pub salt: Option<String>,
}

/// Build the generator config, exiting on an unreadable config file.
pub fn load_config(args: &ConfigArgs) -> GeneratorConfig {
    let mut config = match &args.config {
        Some(path) => GeneratorConfig::from_json_file(path).unwrap_or_else(|e| {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }),
        None => GeneratorConfig::default(),
    };

    if let Some(ms) = args.sleep_ms {
        config.sleep_ms = ms;
    }
    if let Some(dir) = &args.context_dir {
        config.context_dir = dir.clone();
    }
    if let Some(digest) = &args.digest {
        // value_parser restricts input to names DigestAlgorithm accepts.
        config.digest = digest.parse().unwrap_or(DigestAlgorithm::Sha256);
    }
    if let Some(salt) = &args.salt {
        config.salt = salt.clone();
    }
    log::debug!("config: {config:?}");
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_apply_on_top_of_defaults() {
        let args = ConfigArgs {
            sleep_ms: Some(3),
            digest: Some("sha512".into()),
            ..ConfigArgs::default()
        };
        let config = load_config(&args);
        assert_eq!(config.sleep_ms, 3);
        assert_eq!(config.digest, DigestAlgorithm::Sha512);
        assert_eq!(config.salt, "xx");
    }
}
