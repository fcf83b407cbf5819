use thiserror::Error;

/// Reasons a learning configuration is rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("module has no items")]
    NoItems,

    #[error("repeat count must be between 1 and {max} (got {value})", max = crate::model::RepeatThreshold::MAX.get())]
    InvalidRepeatThreshold { value: i64 },

    #[error("item #{position} has an empty name")]
    EmptyItemName { position: usize },

    #[error("item '{name}' has an invalid color (expected three components in 0..=255)")]
    InvalidColor { name: String },

    #[error("module key cannot be empty")]
    EmptyModuleKey,
}

/// Errors raised by the learning engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EngineError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),

    #[error("item index {index} is out of range for {len} items")]
    IndexOutOfRange { index: usize, len: usize },
}
