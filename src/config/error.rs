//! Errors raised while loading or validating `lingora.toml`.

use std::path::PathBuf;
use thiserror::Error;

/// Why a config could not be used. Loading distinguishes a file that cannot
/// be read from one that does not parse; everything `validate` rejects is
/// [`ConfigError::Invalid`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config `{0}`")]
    Unreadable(PathBuf, #[source] std::io::Error),

    #[error("config is not valid TOML")]
    Malformed(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}
