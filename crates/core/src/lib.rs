#![forbid(unsafe_code)]

pub mod engine;
pub mod error;
pub mod model;
pub mod time;

pub use engine::LearningEngine;
pub use error::{ConfigError, EngineError};
pub use time::Clock;
