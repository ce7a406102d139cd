//! The six entropy probes and the fixed-order set that runs them.

pub mod helpers;

pub mod clock;
pub mod context;
pub mod jitter;
pub mod memory;
pub mod prng;
pub mod tag;

pub use clock::ClockProbe;
pub use context::ContextProbe;
pub use jitter::JitterProbe;
pub use memory::MemoryIdentityProbe;
pub use prng::PseudoRandomProbe;
pub use tag::StaticTagProbe;

use crate::config::{ContextSource, GeneratorConfig};
use crate::probe::EntropyProbe;

/// One probe per [`ProbeKind`](crate::ProbeKind), held in composite order.
///
/// Each slot can be replaced, which is how tests pin individual signals.
pub struct ProbeSet {
    clock: Box<dyn EntropyProbe>,
    memory: Box<dyn EntropyProbe>,
    jitter: Box<dyn EntropyProbe>,
    context: Box<dyn EntropyProbe>,
    prng: Box<dyn EntropyProbe>,
    tag: Box<dyn EntropyProbe>,
}

impl ProbeSet {
    /// Real probes parameterized by `config`.
    pub fn from_config(config: &GeneratorConfig) -> Self {
        let context = match config.context_source {
            ContextSource::Directory => {
                ContextProbe::directory(&config.context_dir, config.context_fallback)
            }
            ContextSource::ProcessId => ContextProbe::process_id(),
        };
        Self {
            clock: Box::new(ClockProbe),
            memory: Box::new(MemoryIdentityProbe),
            jitter: Box::new(JitterProbe::new(config.sleep_interval())),
            context: Box::new(context),
            prng: Box::new(PseudoRandomProbe),
            tag: Box::new(StaticTagProbe::new(&config.tag_vendor, config.tag_revision)),
        }
    }

    pub fn with_clock(mut self, probe: impl EntropyProbe + 'static) -> Self {
        self.clock = Box::new(probe);
        self
    }

    pub fn with_memory(mut self, probe: impl EntropyProbe + 'static) -> Self {
        self.memory = Box::new(probe);
        self
    }

    pub fn with_jitter(mut self, probe: impl EntropyProbe + 'static) -> Self {
        self.jitter = Box::new(probe);
        self
    }

    pub fn with_context(mut self, probe: impl EntropyProbe + 'static) -> Self {
        self.context = Box::new(probe);
        self
    }

    pub fn with_prng(mut self, probe: impl EntropyProbe + 'static) -> Self {
        self.prng = Box::new(probe);
        self
    }

    pub fn with_tag(mut self, probe: impl EntropyProbe + 'static) -> Self {
        self.tag = Box::new(probe);
        self
    }

    /// Probes in composite order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn EntropyProbe> {
        [
            &self.clock,
            &self.memory,
            &self.jitter,
            &self.context,
            &self.prng,
            &self.tag,
        ]
        .into_iter()
        .map(|p| &**p)
    }

    /// Find a probe by exact name, or by case-insensitive substring.
    pub fn find(&self, name: &str) -> Option<&dyn EntropyProbe> {
        let needle = name.to_lowercase();
        self.iter()
            .find(|p| p.name() == name)
            .or_else(|| self.iter().find(|p| p.name().contains(&needle)))
    }
}

impl Default for ProbeSet {
    fn default() -> Self {
        Self::from_config(&GeneratorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::ProbeKind;

    #[test]
    fn set_iterates_in_composite_order() {
        let set = ProbeSet::default();
        let kinds: Vec<_> = set.iter().map(|p| p.kind()).collect();
        assert_eq!(kinds, ProbeKind::ORDER.to_vec());
    }

    #[test]
    fn find_by_partial_name() {
        let set = ProbeSet::default();
        assert_eq!(set.find("memory").map(|p| p.name()), Some("memory_identity"));
        assert_eq!(set.find("TAG").map(|p| p.name()), Some("static_tag"));
        assert!(set.find("bluetooth").is_none());
    }

    #[test]
    fn config_selects_process_context() {
        let cfg = GeneratorConfig {
            context_source: ContextSource::ProcessId,
            ..GeneratorConfig::default()
        };
        let set = ProbeSet::from_config(&cfg);
        let sample = set.find("context").unwrap().sample().unwrap();
        assert!(sample.text().contains('.'));
    }
}
