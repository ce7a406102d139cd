//! StaticTagProbe — fixed implementation tag.
//!
//! Contributes no entropy. It namespaces digests by implementation revision so
//! two revisions never share an input space.

use crate::error::Result;
use crate::probe::{EntropyProbe, EntropySample, ProbeInfo, ProbeKind};

pub struct StaticTagProbe {
    tag: String,
}

static TAG_INFO: ProbeInfo = ProbeInfo {
    name: "static_tag",
    kind: ProbeKind::StaticTag,
    description: "Implementation vendor and revision tag",
    rationale: "Separates digest inputs across implementation revisions.",
    soft: false,
};

impl StaticTagProbe {
    /// Tag rendered as `"{vendor}::{revision}"`.
    pub fn new(vendor: &str, revision: u32) -> Self {
        Self {
            tag: format!("{vendor}::{revision}"),
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }
}

impl EntropyProbe for StaticTagProbe {
    fn info(&self) -> &ProbeInfo {
        &TAG_INFO
    }

    fn sample(&self) -> Result<EntropySample> {
        Ok(EntropySample::new(ProbeKind::StaticTag, self.tag.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_is_constant() {
        let probe = StaticTagProbe::new("entropyguid", 1);
        assert_eq!(probe.sample().unwrap().text(), "entropyguid::1");
        assert_eq!(probe.sample().unwrap(), probe.sample().unwrap());
    }
}
