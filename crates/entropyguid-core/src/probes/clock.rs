//! ClockProbe — wall-clock seconds and microseconds since the Unix epoch.
//!
//! Two runs collide only when they read the identical microsecond.

use crate::error::Result;
use crate::probe::{EntropyProbe, EntropySample, ProbeInfo, ProbeKind};

use super::helpers::since_epoch;

/// Reads the wall clock and serializes `"{secs}{micros}"` with no separator.
pub struct ClockProbe;

static CLOCK_INFO: ProbeInfo = ProbeInfo {
    name: "clock",
    kind: ProbeKind::Clock,
    description: "Wall-clock seconds and microseconds since the Unix epoch",
    rationale: "A collision needs two invocations at the identical microsecond \
                of the process-local clock.",
    soft: false,
};

impl EntropyProbe for ClockProbe {
    fn info(&self) -> &ProbeInfo {
        &CLOCK_INFO
    }

    fn sample(&self) -> Result<EntropySample> {
        let now = since_epoch()?;
        Ok(EntropySample::new(
            ProbeKind::Clock,
            format!("{}{}", now.as_secs(), now.subsec_micros()),
        ))
    }
}
