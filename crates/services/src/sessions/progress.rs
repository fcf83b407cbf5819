use learn_core::model::LearningItem;

/// Everything the UI needs to draw the current item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressInfo {
    pub item: LearningItem,
    /// 1-based showing of the current item.
    pub repeat_number: u32,
    pub total_repeats: u32,
    pub item_index: usize,
    pub total_items: usize,
}

impl ProgressInfo {
    /// Share of the current item's repeats reached so far, in `0.0..=100.0`.
    #[must_use]
    pub fn percentage(&self) -> f64 {
        if self.total_repeats == 0 {
            return 0.0;
        }
        f64::from(self.repeat_number.min(self.total_repeats)) / f64::from(self.total_repeats)
            * 100.0
    }

    /// One flag per progress dot, `true` for dots already reached.
    #[must_use]
    pub fn dots(&self) -> Vec<bool> {
        (1..=self.total_repeats)
            .map(|dot| dot <= self.repeat_number)
            .collect()
    }

    /// Whether the next advance moves on to another item.
    #[must_use]
    pub fn is_last_repeat(&self) -> bool {
        self.repeat_number >= self.total_repeats
    }
}
