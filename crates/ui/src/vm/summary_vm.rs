use services::SessionSummary;

use crate::vm::time_fmt::format_elapsed;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryVm {
    pub module: String,
    pub interactions_label: String,
    pub items_completed_label: String,
    pub time_label: String,
}

impl From<&SessionSummary> for SummaryVm {
    fn from(summary: &SessionSummary) -> Self {
        Self {
            module: summary.module.clone(),
            interactions_label: format!("Interactions: {}", summary.total_interactions),
            items_completed_label: format!("Items Completed: {}", summary.items_completed),
            time_label: format!("Time: {}", format_elapsed(summary.duration)),
        }
    }
}
