//! JitterProbe — wall-clock and counter deltas across a fixed blocking sleep.
//!
//! The gap between the requested sleep and what the wall clock and the
//! monotonic counter actually observe carries scheduler wake-up latency,
//! timer-interrupt granularity and frequency-scaling noise.
//!
//! **Output:** `"{ΔT}:{ΔC}"` where ΔT is elapsed wall time in milliseconds
//! with six decimals and ΔC is elapsed counter ticks. When no hardware
//! counter exists the counter falls back to `clock_gettime` or `Instant`
//! (see [`TimerSource`]), which lowers the resolution of ΔC.

use std::thread;
use std::time::Duration;

use log::debug;

use crate::error::Result;
use crate::probe::{EntropyProbe, EntropySample, ProbeInfo, ProbeKind};

use super::helpers::{TimerSource, read_counter, timer_source, wall_millis};

/// Blocks for `interval` and reports the observed wall/counter deltas.
pub struct JitterProbe {
    interval: Duration,
}

static JITTER_INFO: ProbeInfo = ProbeInfo {
    name: "jitter",
    kind: ProbeKind::Jitter,
    description: "Wall-clock and monotonic counter deltas across a fixed sleep",
    rationale: "OS scheduling and hardware timer noise make the observed sleep \
                length differ from the requested one in unrepeatable ways.",
    soft: true,
};

impl JitterProbe {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Counter used for ΔC on this build.
    pub fn timer_source(&self) -> TimerSource {
        timer_source()
    }
}

impl Default for JitterProbe {
    fn default() -> Self {
        Self::new(Duration::from_millis(crate::config::DEFAULT_SLEEP_MS))
    }
}

impl EntropyProbe for JitterProbe {
    fn info(&self) -> &ProbeInfo {
        &JITTER_INFO
    }

    fn sample(&self) -> Result<EntropySample> {
        let c1 = read_counter();
        let t1 = wall_millis()?;
        thread::sleep(self.interval);
        let t2 = wall_millis()?;
        let c2 = read_counter();

        let dt = t2 - t1;
        let dc = c2.wrapping_sub(c1);
        debug!(
            "jitter: requested {:?}, observed {dt:.6} ms, {dc} {} ticks",
            self.interval,
            timer_source()
        );
        Ok(EntropySample::new(ProbeKind::Jitter, format!("{dt:.6}:{dc}")))
    }
}
