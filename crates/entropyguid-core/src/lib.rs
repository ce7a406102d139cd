//! # entropyguid-core
//!
//! **Identifiers from six loosely-correlated entropy signals.**
//!
//! `entropyguid-core` builds a probabilistically-unique identifier without
//! relying on a single strong random source. Six independent probes each
//! contribute a short serialized sample; the samples are concatenated into a
//! bounded composite record and reduced by a salted SHA-2 digest.
//!
//! ## Quick Start
//!
//! ```no_run
//! use entropyguid_core::{GeneratorConfig, GuidGenerator};
//!
//! // Default config: 256 ms jitter sleep, SHA-256 combiner
//! let id = entropyguid_core::generate().unwrap();
//! assert_eq!(id.len(), 64);
//!
//! // Shorter sleep, diagnostic trace
//! let generator = GuidGenerator::new(GeneratorConfig {
//!     sleep_ms: 16,
//!     ..GeneratorConfig::default()
//! });
//! let trace = generator.generate_traced().unwrap();
//! println!("str = {}", trace.composite.to_string_lossy());
//! println!("digest = {}", trace.identifier);
//! ```
//!
//! ## Architecture
//!
//! Probes → CompositeRecord (fixed order, capped) → salted digest → Identifier
//!
//! Probe order is fixed: clock, memory identity, timing jitter, context,
//! pseudo-random, static tag. Clock and allocation failures are hard errors;
//! the other probes degrade to fallback values instead of failing.
//!
//! This is not a cryptographically secure generator, not an RFC 4122 UUID,
//! and makes no collision-probability guarantee.

pub mod composite;
pub mod config;
pub mod digest;
pub mod error;
pub mod generator;
pub mod identifier;
pub mod probe;
pub mod probes;

pub use composite::CompositeRecord;
pub use config::{ContextSource, GeneratorConfig};
pub use digest::{DigestAlgorithm, SaltedDigest, digest_record, strip_scheme_prefix};
pub use error::{GuidError, Result};
pub use generator::{GenerationTrace, GuidGenerator, TraceSummary, generate};
pub use identifier::{IDENTIFIER_CAPACITY, Identifier};
pub use probe::{EntropyProbe, EntropySample, ProbeInfo, ProbeKind};
pub use probes::ProbeSet;
pub use probes::helpers::{TimerSource, timer_source};

/// Library version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
