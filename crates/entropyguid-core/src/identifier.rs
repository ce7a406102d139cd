//! The opaque identifier returned to callers.

use serde::Serialize;

/// Maximum identifier length in bytes.
pub const IDENTIFIER_CAPACITY: usize = 256;

/// Opaque, bounded-length identifier text.
///
/// Holds only the digest payload. It is not parsed or versioned; callers own
/// it once returned.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Identifier(String);

impl Identifier {
    /// Wrap `text`, truncating to [`IDENTIFIER_CAPACITY`] bytes on a char boundary.
    pub(crate) fn new(mut text: String) -> Self {
        if text.len() > IDENTIFIER_CAPACITY {
            let mut end = IDENTIFIER_CAPACITY;
            while !text.is_char_boundary(end) {
                end -= 1;
            }
            text.truncate(end);
        }
        Self(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
