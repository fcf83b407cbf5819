mod learning_vm;
mod summary_vm;
mod theme_vm;
mod time_fmt;

pub use learning_vm::{LearningVm, SwatchVm, map_learning_item};
pub use summary_vm::SummaryVm;
pub use theme_vm::{FontScale, page_style};
pub use time_fmt::format_elapsed;
