//! Error types for all kaizen subsystems.

mod config_error;
mod store_error;

pub use config_error::ConfigError;
pub use store_error::StoreError;

use thiserror::Error;

/// Umbrella error covering every subsystem.
#[derive(Debug, Error)]
pub enum KaizenError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result alias used across the workspace.
pub type KaizenResult<T> = Result<T, KaizenError>;
