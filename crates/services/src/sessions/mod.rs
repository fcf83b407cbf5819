mod progress;
mod service;
mod summary;

// Public API of the session subsystem.
pub use crate::error::SessionError;
pub use progress::ProgressInfo;
pub use service::SessionService;
pub use summary::SessionSummary;
