mod item;
mod module;
mod session;

pub use item::{ItemVisual, LearningItem, Rgb};
pub use module::{LearningModule, RepeatThreshold};
pub use session::SessionState;
