/// Progress through a module at one point in time.
///
/// `SessionState` is a plain value: every transition builds a new one and the
/// previous value stays valid. Use [`SessionState::initial`] to start a session
/// and [`crate::engine::advance`] to move it forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionState {
    current_index: usize,
    repeat_count: u32,
    total_interactions: u64,
    items_completed: u64,
}

impl SessionState {
    /// The state every session starts from: first item, first showing.
    #[must_use]
    pub const fn initial() -> Self {
        Self {
            current_index: 0,
            repeat_count: 1,
            total_interactions: 0,
            items_completed: 0,
        }
    }

    /// Rebuild a state from its raw parts.
    ///
    /// No bounds are checked here; the engine reports inconsistencies when the
    /// state is used against a concrete module.
    #[must_use]
    pub const fn from_parts(
        current_index: usize,
        repeat_count: u32,
        total_interactions: u64,
        items_completed: u64,
    ) -> Self {
        Self {
            current_index,
            repeat_count,
            total_interactions,
            items_completed,
        }
    }

    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.current_index
    }

    /// 1-based count of how many times the current item has been shown.
    #[must_use]
    pub const fn repeat_count(&self) -> u32 {
        self.repeat_count
    }

    #[must_use]
    pub const fn total_interactions(&self) -> u64 {
        self.total_interactions
    }

    /// Number of times the session moved past an item.
    #[must_use]
    pub const fn items_completed(&self) -> u64 {
        self.items_completed
    }

    #[must_use]
    pub const fn with_interaction(self) -> Self {
        Self {
            total_interactions: self.total_interactions.saturating_add(1),
            ..self
        }
    }

    #[must_use]
    pub const fn with_repeat(self) -> Self {
        Self {
            repeat_count: self.repeat_count.saturating_add(1),
            ..self
        }
    }

    /// Move to `next_index` and start counting repeats from 1 again.
    #[must_use]
    pub const fn with_next_item(self, next_index: usize) -> Self {
        Self {
            current_index: next_index,
            repeat_count: 1,
            items_completed: self.items_completed.saturating_add(1),
            ..self
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::initial()
    }
}
