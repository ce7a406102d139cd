//! Combiner digest.
//!
//! The composite record is reduced to a fixed-length payload by a salted
//! one-way hash. The hash is a uniform-length mixer here: it carries no
//! authentication or security guarantee.
//!
//! # Layout
//!
//! ```text
//! payload = hex( H(salt || "$" || composite) )
//! diagnostic form = "$" scheme "$" salt "$" payload
//! identifier = payload
//! ```

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256, Sha512};

use crate::composite::CompositeRecord;
use crate::identifier::Identifier;

/// One-way hash used by the combiner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DigestAlgorithm {
    /// SHA-256, 64 hex characters (default).
    #[default]
    Sha256,
    /// SHA-512, 128 hex characters.
    Sha512,
}

impl DigestAlgorithm {
    /// Modular-crypt scheme id used in the diagnostic form.
    pub fn scheme_id(self) -> &'static str {
        match self {
            Self::Sha256 => "5",
            Self::Sha512 => "6",
        }
    }

    /// Length of the hex payload this algorithm produces.
    pub fn payload_len(self) -> usize {
        match self {
            Self::Sha256 => 64,
            Self::Sha512 => 128,
        }
    }
}

impl std::fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sha256 => write!(f, "sha256"),
            Self::Sha512 => write!(f, "sha512"),
        }
    }
}

impl std::str::FromStr for DigestAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sha256" => Ok(Self::Sha256),
            "sha512" => Ok(Self::Sha512),
            other => Err(format!("unknown digest '{other}' (expected sha256 or sha512)")),
        }
    }
}

/// Digest output together with the metadata that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SaltedDigest {
    pub algorithm: DigestAlgorithm,
    pub salt: String,
    pub payload: String,
}

impl SaltedDigest {
    /// Drop scheme and salt metadata, keeping only the hash payload.
    pub fn into_identifier(self) -> Identifier {
        Identifier::new(self.payload)
    }
}

impl std::fmt::Display for SaltedDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "${}${}${}",
            self.algorithm.scheme_id(),
            self.salt,
            self.payload
        )
    }
}

// ---------------------------------------------------------------------------
// Combiner
// ---------------------------------------------------------------------------

/// Hash a composite record with `salt`.
///
/// Pure: the same record, salt and algorithm always give the same digest.
pub fn digest_record(
    record: &CompositeRecord,
    salt: &str,
    algorithm: DigestAlgorithm,
) -> SaltedDigest {
    let raw = match algorithm {
        DigestAlgorithm::Sha256 => salted_hash::<Sha256>(salt.as_bytes(), record.as_bytes()),
        DigestAlgorithm::Sha512 => salted_hash::<Sha512>(salt.as_bytes(), record.as_bytes()),
    };
    SaltedDigest {
        algorithm,
        salt: salt.to_string(),
        payload: hex_encode(&raw),
    }
}

fn salted_hash<D: Digest>(salt: &[u8], data: &[u8]) -> Vec<u8> {
    let mut h = D::new();
    h.update(salt);
    h.update(b"$");
    h.update(data);
    h.finalize().to_vec()
}

/// Strip a `$scheme$salt$` prefix, returning the payload.
///
/// Payloads are hex and never contain `$`, so everything after the last `$`
/// is the payload. Text without a leading `$` is returned unchanged.
pub fn strip_scheme_prefix(s: &str) -> &str {
    if !s.starts_with('$') {
        return s;
    }
    s.rsplit_once('$').map_or(s, |(_, payload)| payload)
}

/// Hex-encode bytes without any separator.
fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(text: &str) -> CompositeRecord {
        CompositeRecord::from_bytes(text.as_bytes(), 256)
    }

    #[test]
    fn payload_lengths() {
        let r = record("abc");
        assert_eq!(digest_record(&r, "xx", DigestAlgorithm::Sha256).payload.len(), 64);
        assert_eq!(digest_record(&r, "xx", DigestAlgorithm::Sha512).payload.len(), 128);
    }

    #[test]
    fn digest_is_deterministic() {
        let r = record("1700000000123456");
        let a = digest_record(&r, "xx", DigestAlgorithm::Sha256);
        let b = digest_record(&r, "xx", DigestAlgorithm::Sha256);
        assert_eq!(a, b);
    }

    #[test]
    fn salt_changes_payload() {
        let r = record("same input");
        let a = digest_record(&r, "xx", DigestAlgorithm::Sha256);
        let b = digest_record(&r, "yy", DigestAlgorithm::Sha256);
        assert_ne!(a.payload, b.payload);
    }

    #[test]
    fn matches_direct_sha256() {
        let r = record("hello");
        let d = digest_record(&r, "xx", DigestAlgorithm::Sha256);
        let direct = Sha256::digest(b"xx$hello");
        assert_eq!(d.payload, hex_encode(&direct));
    }

    #[test]
    fn display_carries_scheme_prefix() {
        let d = digest_record(&record("x"), "xx", DigestAlgorithm::Sha256);
        let shown = d.to_string();
        assert!(shown.starts_with("$5$xx$"));
        assert_eq!(strip_scheme_prefix(&shown), d.payload);
    }

    #[test]
    fn identifier_has_no_prefix() {
        let d = digest_record(&record("x"), "a$b", DigestAlgorithm::Sha512);
        let payload = d.payload.clone();
        let id = d.into_identifier();
        assert_eq!(id.as_str(), payload);
        assert!(!id.as_str().contains('$'));
    }

    #[test]
    fn strip_leaves_plain_text_alone() {
        assert_eq!(strip_scheme_prefix("deadbeef"), "deadbeef");
        assert_eq!(strip_scheme_prefix("$6$salt$cafe"), "cafe");
    }

    #[test]
    fn algorithm_parses_case_insensitively() {
        assert_eq!("SHA512".parse::<DigestAlgorithm>(), Ok(DigestAlgorithm::Sha512));
        assert!("md5".parse::<DigestAlgorithm>().is_err());
    }
}
