//! Typed error variants for the profile selection workflow.
//!
//! Callers at the crate boundary can match on specific failure modes instead
//! of opaque strings. Settings failures propagate mid-workflow; there are no
//! retries and no partial-failure recovery.

use thiserror::Error;

/// Top-level error type for profile selection and persistence operations.
#[derive(Debug, Error)]
pub enum PickError {
    /// An I/O error occurred reading or writing the settings file.
    #[error("settings I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A stored value could not be serialized or deserialized.
    #[error("settings value error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// The platform configuration directory could not be determined.
    #[error("configuration directory could not be determined")]
    ConfigDirUnavailable,
}
