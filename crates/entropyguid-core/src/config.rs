//! Generator configuration.
//!
//! Defaults reproduce the reference constants (256 ms sleep, `.` as context
//! directory, fallback count 2, 256-byte composite buffer). A JSON file may
//! override any subset of fields.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::digest::DigestAlgorithm;
use crate::error::{GuidError, Result};

/// Default sleep of the timing-jitter probe, in milliseconds.
pub const DEFAULT_SLEEP_MS: u64 = 256;

/// Count substituted when the context directory cannot be enumerated.
pub const DEFAULT_CONTEXT_FALLBACK: u64 = 2;

/// Default composite buffer capacity in bytes.
pub const DEFAULT_BUFFER_CAPACITY: usize = 256;

/// Default digest salt.
pub const DEFAULT_SALT: &str = "xx";

/// Default static tag vendor.
pub const DEFAULT_TAG_VENDOR: &str = "entropyguid";

/// Default static tag revision.
pub const DEFAULT_TAG_REVISION: u32 = 1;

/// Signal sampled by the context probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContextSource {
    /// Number of entries in `context_dir`.
    #[default]
    Directory,
    /// Process id and a hash of the current thread id.
    ProcessId,
}

/// Tunables for [`GuidGenerator`](crate::GuidGenerator).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Sleep between the two jitter measurements, in milliseconds.
    pub sleep_ms: u64,
    /// Which context signal to sample.
    pub context_source: ContextSource,
    /// Directory whose entries are counted.
    pub context_dir: PathBuf,
    /// Count used when enumeration fails.
    pub context_fallback: u64,
    /// Composite buffer capacity in bytes.
    pub buffer_capacity: usize,
    /// Salt mixed into the digest.
    pub salt: String,
    /// Digest used as the combiner.
    pub digest: DigestAlgorithm,
    /// Static tag vendor.
    pub tag_vendor: String,
    /// Static tag revision.
    pub tag_revision: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            sleep_ms: DEFAULT_SLEEP_MS,
            context_source: ContextSource::default(),
            context_dir: PathBuf::from("."),
            context_fallback: DEFAULT_CONTEXT_FALLBACK,
            buffer_capacity: DEFAULT_BUFFER_CAPACITY,
            salt: DEFAULT_SALT.to_string(),
            digest: DigestAlgorithm::default(),
            tag_vendor: DEFAULT_TAG_VENDOR.to_string(),
            tag_revision: DEFAULT_TAG_REVISION,
        }
    }
}

impl GeneratorConfig {
    /// Load a config from a JSON file. Missing fields keep their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| GuidError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Parse a config from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn sleep_interval(&self) -> Duration {
        Duration::from_millis(self.sleep_ms)
    }

    /// Tag text emitted by the static tag probe.
    pub fn static_tag(&self) -> String {
        format!("{}::{}", self.tag_vendor, self.tag_revision)
    }
}
