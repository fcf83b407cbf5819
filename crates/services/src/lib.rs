#![forbid(unsafe_code)]

pub mod error;
pub mod sessions;

pub use learn_core::Clock;

pub use error::SessionError;
pub use sessions::{ProgressInfo, SessionService, SessionSummary};
