//! Error types for entropyguid.
//!
//! Only hard failures live here. Soft signals (context enumeration, missing
//! high-resolution counter) fall back to documented defaults inside their
//! probes and never produce a [`GuidError`].

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by identifier generation and configuration loading.
#[derive(Debug, Error)]
pub enum GuidError {
    /// The memory-identity probe could not allocate its probe object.
    #[error("allocation of {size}-byte probe object failed")]
    AllocationFailure { size: usize },

    /// The wall clock could not be read (or reads before the Unix epoch).
    #[error("clock unavailable: {0}")]
    ClockUnavailable(String),

    /// A configuration file could not be read.
    #[error("cannot read config {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A configuration file was read but is not valid JSON for [`GeneratorConfig`].
    ///
    /// [`GeneratorConfig`]: crate::config::GeneratorConfig
    #[error("invalid config: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

impl From<std::time::SystemTimeError> for GuidError {
    fn from(err: std::time::SystemTimeError) -> Self {
        Self::ClockUnavailable(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GuidError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, UNIX_EPOCH};

    #[test]
    fn system_time_error_maps_to_clock_unavailable() {
        let before_epoch = UNIX_EPOCH - Duration::from_secs(1);
        let err: GuidError = before_epoch.duration_since(UNIX_EPOCH).unwrap_err().into();
        assert!(matches!(err, GuidError::ClockUnavailable(_)));
    }

    #[test]
    fn allocation_failure_message_names_size() {
        let err = GuidError::AllocationFailure { size: 1 };
        assert_eq!(err.to_string(), "allocation of 1-byte probe object failed");
    }
}
