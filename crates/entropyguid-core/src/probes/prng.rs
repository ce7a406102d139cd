//! PseudoRandomProbe — one draw from a freshly seeded non-cryptographic PRNG.
//!
//! Weak entropy, kept as a cheap extra differentiator. Each call builds its
//! own generator, so concurrent calls share no seed state.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::error::Result;
use crate::probe::{EntropyProbe, EntropySample, ProbeInfo, ProbeKind};

use super::helpers::{since_epoch, thread_discriminator};

/// Upper bound of a draw, matching the range of C `rand()`.
const DRAW_MAX: u32 = i32::MAX as u32;

pub struct PseudoRandomProbe;

static PRNG_INFO: ProbeInfo = ProbeInfo {
    name: "pseudo_random",
    kind: ProbeKind::PseudoRandom,
    description: "Single draw from a PRNG seeded with the current time",
    rationale: "The seed moves with the clock and the calling thread, so \
                successive or concurrent calls rarely draw the same value.",
    soft: true,
};

impl PseudoRandomProbe {
    /// Seed from wall-clock nanoseconds mixed with the calling thread.
    ///
    /// A clock before the epoch contributes 0; the thread hash still varies.
    fn seed() -> u64 {
        let nanos = since_epoch().map(|d| d.as_nanos() as u64).unwrap_or(0);
        nanos ^ thread_discriminator().rotate_left(32)
    }

    /// Draw from a generator built for `seed`.
    fn draw(seed: u64) -> u32 {
        let mut rng = SmallRng::seed_from_u64(seed);
        rng.random_range(0..=DRAW_MAX)
    }
}

impl EntropyProbe for PseudoRandomProbe {
    fn info(&self) -> &ProbeInfo {
        &PRNG_INFO
    }

    fn sample(&self) -> Result<EntropySample> {
        let value = Self::draw(Self::seed());
        Ok(EntropySample::new(ProbeKind::PseudoRandom, value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draw_is_a_function_of_seed() {
        assert_eq!(PseudoRandomProbe::draw(42), PseudoRandomProbe::draw(42));
        assert!(PseudoRandomProbe::draw(42) <= DRAW_MAX);
    }

    #[test]
    fn sample_is_non_negative_decimal() {
        let s = PseudoRandomProbe.sample().unwrap();
        let v: u64 = s.text().parse().unwrap();
        assert!(v <= u64::from(DRAW_MAX));
    }

    #[test]
    fn successive_samples_vary() {
        let draws: std::collections::HashSet<_> = (0..32)
            .map(|_| {
                std::thread::sleep(std::time::Duration::from_micros(10));
                PseudoRandomProbe.sample().unwrap().text().to_string()
            })
            .collect();
        assert!(draws.len() > 1);
    }
}
