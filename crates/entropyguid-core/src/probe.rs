//! Abstract entropy probe trait and the samples probes produce.
//!
//! Every probe implements the [`EntropyProbe`] trait, which provides metadata
//! via [`ProbeInfo`] and a single serialized [`EntropySample`] per call.

use serde::Serialize;

use crate::error::Result;

/// Byte cap for a serialized sample of most kinds.
pub const SAMPLE_CAPACITY: usize = 64;

/// Byte cap for memory-identity samples (room for wide pointer renderings).
pub const MEMORY_SAMPLE_CAPACITY: usize = 128;

/// Which of the six signals a sample carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbeKind {
    /// Wall-clock seconds and microseconds.
    Clock,
    /// Address of a short-lived heap object.
    MemoryIdentity,
    /// Elapsed wall time and counter ticks across a fixed sleep.
    Jitter,
    /// Environment-dependent count.
    Context,
    /// One draw from a freshly seeded PRNG.
    PseudoRandom,
    /// Implementation tag.
    StaticTag,
}

impl ProbeKind {
    /// Composite concatenation order. Must not change within a revision.
    pub const ORDER: [ProbeKind; 6] = [
        Self::Clock,
        Self::MemoryIdentity,
        Self::Jitter,
        Self::Context,
        Self::PseudoRandom,
        Self::StaticTag,
    ];

    /// Maximum serialized length in bytes for samples of this kind.
    pub fn capacity(self) -> usize {
        match self {
            Self::MemoryIdentity => MEMORY_SAMPLE_CAPACITY,
            _ => SAMPLE_CAPACITY,
        }
    }

    /// Zero-based position in [`ProbeKind::ORDER`].
    pub fn position(self) -> usize {
        match self {
            Self::Clock => 0,
            Self::MemoryIdentity => 1,
            Self::Jitter => 2,
            Self::Context => 3,
            Self::PseudoRandom => 4,
            Self::StaticTag => 5,
        }
    }
}

impl std::fmt::Display for ProbeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Clock => write!(f, "clock"),
            Self::MemoryIdentity => write!(f, "memory_identity"),
            Self::Jitter => write!(f, "jitter"),
            Self::Context => write!(f, "context"),
            Self::PseudoRandom => write!(f, "pseudo_random"),
            Self::StaticTag => write!(f, "static_tag"),
        }
    }
}

/// Metadata about a probe.
#[derive(Debug, Clone)]
pub struct ProbeInfo {
    /// Unique identifier (e.g. `"jitter"`).
    pub name: &'static str,
    /// Signal this probe contributes.
    pub kind: ProbeKind,
    /// One-line human-readable description.
    pub description: &'static str,
    /// Why two contexts are unlikely to observe the same value.
    pub rationale: &'static str,
    /// Soft probes substitute a fallback instead of failing generation.
    pub soft: bool,
}

/// One probe's serialized output, valid for a single generation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntropySample {
    kind: ProbeKind,
    text: String,
}

impl EntropySample {
    /// Build a sample, truncating `text` to the kind's capacity.
    ///
    /// Truncation lands on the largest UTF-8 character boundary that fits.
    pub fn new(kind: ProbeKind, text: impl Into<String>) -> Self {
        let mut text = text.into();
        let cap = kind.capacity();
        if text.len() > cap {
            let mut end = cap;
            while !text.is_char_boundary(end) {
                end -= 1;
            }
            text.truncate(end);
        }
        Self { kind, text }
    }

    pub fn kind(&self) -> ProbeKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Trait that every entropy probe must implement.
pub trait EntropyProbe: Send + Sync {
    /// Probe metadata.
    fn info(&self) -> &ProbeInfo;

    /// Take one sample. Only hard failures return `Err`.
    fn sample(&self) -> Result<EntropySample>;

    /// Convenience: kind from info.
    fn kind(&self) -> ProbeKind {
        self.info().kind
    }

    /// Convenience: name from info.
    fn name(&self) -> &'static str {
        self.info().name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_positions_match() {
        for (i, kind) in ProbeKind::ORDER.iter().enumerate() {
            assert_eq!(kind.position(), i);
        }
    }

    #[test]
    fn sample_truncates_to_kind_capacity() {
        let s = EntropySample::new(ProbeKind::Context, "7".repeat(200));
        assert_eq!(s.text().len(), SAMPLE_CAPACITY);

        let m = EntropySample::new(ProbeKind::MemoryIdentity, "f".repeat(200));
        assert_eq!(m.text().len(), MEMORY_SAMPLE_CAPACITY);
    }

    #[test]
    fn sample_truncation_respects_char_boundary() {
        // 63 ASCII bytes followed by a 2-byte character straddling the cap.
        let text = format!("{}é", "a".repeat(63));
        let s = EntropySample::new(ProbeKind::StaticTag, text);
        assert_eq!(s.text().len(), 63);
    }

    #[test]
    fn kind_display_names() {
        assert_eq!(ProbeKind::MemoryIdentity.to_string(), "memory_identity");
        assert_eq!(ProbeKind::PseudoRandom.to_string(), "pseudo_random");
    }
}
