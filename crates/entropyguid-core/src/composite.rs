//! Composite record: the fixed-order concatenation of all probe samples.
//!
//! The record is a byte buffer with a hard capacity. Input beyond the
//! capacity is cut at the exact byte boundary; the cut may split a UTF-8
//! sequence, which is harmless because the record is only ever hashed or
//! rendered lossily.

use std::borrow::Cow;

use crate::probe::{EntropySample, ProbeKind};

/// Bounded concatenation of serialized samples.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositeRecord {
    bytes: Vec<u8>,
    capacity: usize,
    truncated: bool,
}

impl CompositeRecord {
    /// Concatenate `samples` in [`ProbeKind::ORDER`], capped at `capacity` bytes.
    ///
    /// Samples are grouped by kind; within a kind, input order is kept.
    pub fn assemble(samples: &[EntropySample], capacity: usize) -> Self {
        let mut record = Self::empty(capacity);
        for kind in ProbeKind::ORDER {
            for sample in samples.iter().filter(|s| s.kind() == kind) {
                record.push(sample.text().as_bytes());
            }
        }
        record
    }

    /// Build a record from raw bytes, capped at `capacity` bytes.
    pub fn from_bytes(bytes: &[u8], capacity: usize) -> Self {
        let mut record = Self::empty(capacity);
        record.push(bytes);
        record
    }

    fn empty(capacity: usize) -> Self {
        Self {
            // Reserve up to the realistic maximum, not an arbitrary caller value.
            bytes: Vec::with_capacity(capacity.min(1024)),
            capacity,
            truncated: false,
        }
    }

    fn push(&mut self, data: &[u8]) {
        let room = self.capacity - self.bytes.len();
        if data.len() > room {
            self.bytes.extend_from_slice(&data[..room]);
            self.truncated = true;
        } else {
            self.bytes.extend_from_slice(data);
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether any input was dropped to respect the capacity.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// Record as text; invalid UTF-8 (from a mid-character cut) is replaced.
    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(kind: ProbeKind, text: &str) -> EntropySample {
        EntropySample::new(kind, text)
    }

    #[test]
    fn concatenates_in_fixed_order() {
        // Deliberately shuffled input.
        let samples = vec![
            sample(ProbeKind::StaticTag, "tag::1"),
            sample(ProbeKind::Jitter, "256.1:99"),
            sample(ProbeKind::Clock, "1700000000123"),
            sample(ProbeKind::PseudoRandom, "42"),
            sample(ProbeKind::Context, "7"),
            sample(ProbeKind::MemoryIdentity, "0x1000"),
        ];
        let r = CompositeRecord::assemble(&samples, 256);
        assert_eq!(r.to_string_lossy(), "17000000001230x1000256.1:99742tag::1");
        assert!(!r.is_truncated());
    }

    #[test]
    fn truncates_at_capacity() {
        let samples = vec![
            sample(ProbeKind::Clock, "0123456789"),
            sample(ProbeKind::Context, "abcdef"),
        ];
        let r = CompositeRecord::assemble(&samples, 12);
        assert_eq!(r.as_bytes(), b"0123456789ab");
        assert!(r.is_truncated());
        assert_eq!(r.len(), r.capacity());
    }

    #[test]
    fn truncation_is_deterministic() {
        let long = "z".repeat(64);
        let samples: Vec<_> = ProbeKind::ORDER.iter().map(|k| sample(*k, &long)).collect();
        let a = CompositeRecord::assemble(&samples, 256);
        let b = CompositeRecord::assemble(&samples, 256);
        assert_eq!(a, b);
        assert_eq!(a.len(), 256);
    }

    #[test]
    fn cut_inside_multibyte_char_does_not_panic() {
        let r = CompositeRecord::from_bytes("aé".as_bytes(), 2);
        assert_eq!(r.as_bytes(), &[b'a', 0xc3]);
        assert_eq!(r.to_string_lossy(), "a\u{fffd}");
    }

    #[test]
    fn zero_capacity_yields_empty_record() {
        let r = CompositeRecord::from_bytes(b"anything", 0);
        assert!(r.is_empty());
        assert!(r.is_truncated());
    }
}
