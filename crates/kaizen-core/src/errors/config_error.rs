use thiserror::Error;

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid wellness weights: {reason}")]
    InvalidWeights { reason: String },

    #[error("invalid wellness target: {reason}")]
    InvalidTarget { reason: String },
}
