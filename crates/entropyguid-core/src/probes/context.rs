//! ContextProbe — coarse differentiator between execution contexts.
//!
//! The default signal is the number of entries in a reference directory,
//! something any process can read without elevated privileges. It is a soft
//! signal: enumeration failure substitutes a fallback count and generation
//! continues.

use std::path::{Path, PathBuf};

use log::warn;

use crate::config::{ContextSource, DEFAULT_CONTEXT_FALLBACK};
use crate::error::Result;
use crate::probe::{EntropyProbe, EntropySample, ProbeInfo, ProbeKind};

use super::helpers::thread_discriminator;

/// Samples the configured [`ContextSource`].
pub struct ContextProbe {
    source: ContextSource,
    dir: PathBuf,
    fallback: u64,
}

static CONTEXT_INFO: ProbeInfo = ProbeInfo {
    name: "context",
    kind: ProbeKind::Context,
    description: "Entry count of a reference directory (or process/thread identity)",
    rationale: "Different deployments see different working directories; the \
                count needs no privileges to read.",
    soft: true,
};

impl ContextProbe {
    /// Count entries of `dir`, substituting `fallback` when it cannot be read.
    pub fn directory(dir: impl Into<PathBuf>, fallback: u64) -> Self {
        Self {
            source: ContextSource::Directory,
            dir: dir.into(),
            fallback,
        }
    }

    /// Use `"{pid}.{thread hash}"` instead of a directory count.
    pub fn process_id() -> Self {
        Self {
            source: ContextSource::ProcessId,
            dir: PathBuf::from("."),
            fallback: DEFAULT_CONTEXT_FALLBACK,
        }
    }

    pub fn source(&self) -> ContextSource {
        self.source
    }

    fn directory_count(&self) -> u64 {
        match count_entries(&self.dir) {
            Ok(n) => n,
            Err(e) => {
                warn!(
                    "context: cannot enumerate {}: {e}; using fallback count {}",
                    self.dir.display(),
                    self.fallback
                );
                self.fallback
            }
        }
    }
}

impl Default for ContextProbe {
    fn default() -> Self {
        Self::directory(".", DEFAULT_CONTEXT_FALLBACK)
    }
}

/// Number of entries in `dir` (`.` and `..` are not reported by `read_dir`).
fn count_entries(dir: &Path) -> std::io::Result<u64> {
    let mut n = 0;
    for entry in std::fs::read_dir(dir)? {
        entry?;
        n += 1;
    }
    Ok(n)
}

impl EntropyProbe for ContextProbe {
    fn info(&self) -> &ProbeInfo {
        &CONTEXT_INFO
    }

    fn sample(&self) -> Result<EntropySample> {
        let text = match self.source {
            ContextSource::Directory => self.directory_count().to_string(),
            ContextSource::ProcessId => {
                format!("{}.{:x}", std::process::id(), thread_discriminator())
            }
        };
        Ok(EntropySample::new(ProbeKind::Context, text))
    }
}
