//! Identifier generator.
//!
//! Pipeline per call:
//! 1. Run the six probes in composite order (clock, memory, jitter, context,
//!    pseudo-random, static tag)
//! 2. Concatenate their samples into a bounded [`CompositeRecord`]
//! 3. Reduce the record with a salted one-way digest
//! 4. Return the digest payload as an [`Identifier`]
//!
//! A call is synchronous and blocks for the jitter probe's sleep. The
//! generator holds no mutable state, so it can be shared between threads.

use log::{debug, warn};
use serde::Serialize;

use crate::composite::CompositeRecord;
use crate::config::GeneratorConfig;
use crate::digest::{SaltedDigest, digest_record};
use crate::error::Result;
use crate::identifier::Identifier;
use crate::probe::EntropySample;
use crate::probes::ProbeSet;

/// Everything one call produced, for diagnostics.
#[derive(Debug, Clone)]
pub struct GenerationTrace {
    pub samples: Vec<EntropySample>,
    pub composite: CompositeRecord,
    pub digest: SaltedDigest,
    pub identifier: Identifier,
}

impl GenerationTrace {
    /// Serializable view with the composite rendered as text.
    pub fn summary(&self) -> TraceSummary<'_> {
        TraceSummary {
            samples: &self.samples,
            composite: self.composite.to_string_lossy().into_owned(),
            truncated: self.composite.is_truncated(),
            digest: self.digest.to_string(),
            identifier: &self.identifier,
        }
    }
}

/// JSON-friendly form of a [`GenerationTrace`].
#[derive(Debug, Serialize)]
pub struct TraceSummary<'a> {
    pub samples: &'a [EntropySample],
    pub composite: String,
    pub truncated: bool,
    pub digest: String,
    pub identifier: &'a Identifier,
}

/// Entropy-GUID generator.
pub struct GuidGenerator {
    probes: ProbeSet,
    config: GeneratorConfig,
}

impl GuidGenerator {
    /// Generator with real probes built from `config`.
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            probes: ProbeSet::from_config(&config),
            config,
        }
    }

    /// Generator with caller-supplied probes; `config` still controls the
    /// buffer capacity, salt and digest.
    pub fn with_probes(probes: ProbeSet, config: GeneratorConfig) -> Self {
        Self { probes, config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn probes(&self) -> &ProbeSet {
        &self.probes
    }

    /// Generate one identifier.
    pub fn generate(&self) -> Result<Identifier> {
        Ok(self.generate_traced()?.identifier)
    }

    /// Generate one identifier, keeping every intermediate value.
    pub fn generate_traced(&self) -> Result<GenerationTrace> {
        let samples = self.collect_samples()?;
        let composite = CompositeRecord::assemble(&samples, self.config.buffer_capacity);
        if composite.is_truncated() {
            warn!(
                "composite record truncated to {} bytes",
                composite.capacity()
            );
        }
        debug!("str = {}", composite.to_string_lossy());

        let digest = digest_record(&composite, &self.config.salt, self.config.digest);
        let identifier = digest.clone().into_identifier();
        debug!("digest = {identifier}");

        Ok(GenerationTrace {
            samples,
            composite,
            digest,
            identifier,
        })
    }

    /// Run every probe once, in composite order. Stops at the first hard error.
    pub fn collect_samples(&self) -> Result<Vec<EntropySample>> {
        let mut samples = Vec::with_capacity(6);
        for probe in self.probes.iter() {
            let sample = probe.sample()?;
            if sample.kind() != probe.kind() {
                warn!(
                    "probe {} returned a {} sample; expected {}",
                    probe.name(),
                    sample.kind(),
                    probe.kind()
                );
            }
            samples.push(sample);
        }
        Ok(samples)
    }
}

impl Default for GuidGenerator {
    fn default() -> Self {
        Self::new(GeneratorConfig::default())
    }
}

/// Generate one identifier with the default configuration.
///
/// Blocks for the default jitter sleep (256 ms).
pub fn generate() -> Result<Identifier> {
    GuidGenerator::default().generate()
}
