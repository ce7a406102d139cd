//! Shared timing helpers used by the clock, jitter and pseudo-random probes.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::error::Result;

// ---------------------------------------------------------------------------
// Wall clock
// ---------------------------------------------------------------------------

/// Time since the Unix epoch. A clock set before the epoch is an error.
pub fn since_epoch() -> Result<Duration> {
    Ok(SystemTime::now().duration_since(UNIX_EPOCH)?)
}

/// Wall clock in fractional milliseconds since the epoch.
pub fn wall_millis() -> Result<f64> {
    let t = since_epoch()?;
    Ok(t.as_secs() as f64 * 1000.0 + f64::from(t.subsec_micros()) / 1000.0)
}

// ---------------------------------------------------------------------------
// Monotonic high-resolution counter
// ---------------------------------------------------------------------------

/// Counter backing [`read_counter`] on this build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerSource {
    /// x86 time-stamp counter (`rdtsc`), CPU cycles.
    Tsc,
    /// ARM generic timer (`cntvct_el0`), fixed-frequency ticks.
    Cntvct,
    /// `clock_gettime` on a monotonic clock, nanoseconds.
    ClockGettime,
    /// Process-local `Instant`, nanoseconds. Lowest resolution fallback.
    Instant,
}

impl std::fmt::Display for TimerSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Tsc => write!(f, "tsc"),
            Self::Cntvct => write!(f, "cntvct"),
            Self::ClockGettime => write!(f, "clock_gettime"),
            Self::Instant => write!(f, "instant"),
        }
    }
}

/// Best available counter on this build.
pub const fn timer_source() -> TimerSource {
    if cfg!(any(target_arch = "x86_64", target_arch = "x86")) {
        TimerSource::Tsc
    } else if cfg!(target_arch = "aarch64") {
        TimerSource::Cntvct
    } else if cfg!(unix) {
        TimerSource::ClockGettime
    } else {
        TimerSource::Instant
    }
}

/// Read the best available monotonic counter.
///
/// Units depend on [`timer_source`]; only differences are meaningful.
/// On modern out-of-order cores the TSC may not be serializing, which only
/// adds noise here.
#[cfg(target_arch = "x86_64")]
#[inline(always)]
#[allow(unused_unsafe)]
pub fn read_counter() -> u64 {
    // SAFETY: RDTSC is available on every x86_64 CPU and has no side effects.
    unsafe {
        core::arch::x86_64::_rdtsc()
    }
}

#[cfg(target_arch = "x86")]
#[inline(always)]
#[allow(unused_unsafe)]
pub fn read_counter() -> u64 {
    // SAFETY: RDTSC has no side effects; assumed present on supported x86 targets.
    unsafe {
        core::arch::x86::_rdtsc()
    }
}

#[cfg(target_arch = "aarch64")]
#[inline(always)]
pub fn read_counter() -> u64 {
    let val: u64;
    // SAFETY: CNTVCT_EL0 is readable from EL0 on Linux and macOS.
    // Read-only system register, no side effects.
    unsafe {
        std::arch::asm!("mrs {}, cntvct_el0", out(reg) val, options(nostack, nomem));
    }
    val
}

#[cfg(all(
    unix,
    not(any(target_arch = "x86_64", target_arch = "x86", target_arch = "aarch64"))
))]
pub fn read_counter() -> u64 {
    #[cfg(target_os = "linux")]
    const CLOCK: libc::clockid_t = libc::CLOCK_MONOTONIC_RAW;
    #[cfg(not(target_os = "linux"))]
    const CLOCK: libc::clockid_t = libc::CLOCK_MONOTONIC;

    let mut ts = libc::timespec {
        tv_sec: 0,
        tv_nsec: 0,
    };
    // SAFETY: `ts` is a valid, writable timespec.
    let rc = unsafe { libc::clock_gettime(CLOCK, &mut ts) };
    if rc != 0 {
        return instant_nanos();
    }
    (ts.tv_sec as u64)
        .wrapping_mul(1_000_000_000)
        .wrapping_add(ts.tv_nsec as u64)
}

#[cfg(not(any(
    unix,
    target_arch = "x86_64",
    target_arch = "x86",
    target_arch = "aarch64"
)))]
pub fn read_counter() -> u64 {
    instant_nanos()
}

/// Nanoseconds since a process-local epoch.
#[allow(dead_code)]
fn instant_nanos() -> u64 {
    use std::sync::OnceLock;
    use std::time::Instant;
    static EPOCH: OnceLock<Instant> = OnceLock::new();
    let epoch = EPOCH.get_or_init(Instant::now);
    epoch.elapsed().as_nanos() as u64
}

// ---------------------------------------------------------------------------
// Thread discriminator
// ---------------------------------------------------------------------------

/// Stable per-thread hash of the current thread id.
pub fn thread_discriminator() -> u64 {
    use std::hash::{DefaultHasher, Hash, Hasher};
    let mut h = DefaultHasher::new();
    std::thread::current().id().hash(&mut h);
    h.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_advances_across_sleep() {
        let a = read_counter();
        std::thread::sleep(Duration::from_millis(2));
        let b = read_counter();
        assert_ne!(a, b);
    }

    #[test]
    fn wall_millis_is_after_2020() {
        // 2020-01-01T00:00:00Z in ms.
        assert!(wall_millis().unwrap() > 1_577_836_800_000.0);
    }

    #[test]
    fn thread_discriminator_differs_between_threads() {
        let here = thread_discriminator();
        let there = std::thread::spawn(thread_discriminator).join().unwrap();
        assert_ne!(here, there);
        assert_eq!(here, thread_discriminator());
    }
}
