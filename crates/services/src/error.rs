//! Shared error types for the services crate.

use learn_core::EngineError;
use thiserror::Error;

/// Errors emitted by session services.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error(transparent)]
    Engine(#[from] EngineError),
}
