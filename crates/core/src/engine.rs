//! Repeat-then-advance progression.
//!
//! Each item is shown `repeat_threshold` times. The advance that follows the
//! last showing moves to the next item, wrapping back to the first item after
//! the last one. The sequence never ends.

use crate::error::{ConfigError, EngineError};
use crate::model::{LearningItem, LearningModule, RepeatThreshold, SessionState};

/// The state a new session starts from.
#[must_use]
pub const fn initial_state() -> SessionState {
    SessionState::initial()
}

/// Apply one "advance" event to `state`.
///
/// # Errors
///
/// Returns `EngineError::InvalidConfiguration` when `item_count` or
/// `repeat_threshold` is zero.
pub fn advance(
    state: SessionState,
    item_count: usize,
    repeat_threshold: u32,
) -> Result<SessionState, EngineError> {
    if item_count == 0 {
        return Err(ConfigError::NoItems.into());
    }
    if repeat_threshold == 0 {
        return Err(ConfigError::InvalidRepeatThreshold { value: 0 }.into());
    }

    let next = state.with_interaction();
    if next.repeat_count() < repeat_threshold {
        return Ok(next.with_repeat());
    }

    let next_index = (next.current_index() + 1) % item_count;
    Ok(next.with_next_item(next_index))
}

/// The item `state` points at.
///
/// # Errors
///
/// Returns `EngineError::IndexOutOfRange` when the state and the item list
/// disagree on the number of items.
pub fn current_item<'a>(
    state: &SessionState,
    items: &'a [LearningItem],
) -> Result<&'a LearningItem, EngineError> {
    items
        .get(state.current_index())
        .ok_or(EngineError::IndexOutOfRange {
            index: state.current_index(),
            len: items.len(),
        })
}

/// `(current, total)` for drawing per-item progress dots.
#[must_use]
pub const fn progress_within_item(state: &SessionState, repeat_threshold: u32) -> (u32, u32) {
    (state.repeat_count(), repeat_threshold)
}

/// A validated module bound to the progression functions.
///
/// Construction proves the preconditions of [`advance`], so the only error left
/// at runtime is a state that does not belong to this module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LearningEngine {
    module: LearningModule,
}

impl LearningEngine {
    #[must_use]
    pub fn new(module: LearningModule) -> Self {
        Self { module }
    }

    /// Build an engine straight from parts, validating them.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidConfiguration` for an empty item list or a
    /// zero threshold.
    pub fn from_items(
        key: impl Into<String>,
        items: Vec<LearningItem>,
        repeat_threshold: u32,
    ) -> Result<Self, EngineError> {
        let threshold = RepeatThreshold::new(repeat_threshold)?;
        let module = LearningModule::new(key, None, threshold, items)?;
        Ok(Self::new(module))
    }

    #[must_use]
    pub fn module(&self) -> &LearningModule {
        &self.module
    }

    #[must_use]
    pub fn item_count(&self) -> usize {
        self.module.item_count()
    }

    #[must_use]
    pub fn repeat_threshold(&self) -> u32 {
        self.module.repeat_threshold().get()
    }

    #[must_use]
    pub const fn initial_state(&self) -> SessionState {
        initial_state()
    }

    /// # Errors
    ///
    /// Unreachable for a constructed engine; kept as `Result` so callers
    /// propagate instead of unwrapping.
    pub fn advance(&self, state: SessionState) -> Result<SessionState, EngineError> {
        advance(state, self.item_count(), self.repeat_threshold())
    }

    /// # Errors
    ///
    /// Returns `EngineError::IndexOutOfRange` for a state from another module.
    pub fn current_item(&self, state: &SessionState) -> Result<&LearningItem, EngineError> {
        current_item(state, self.module.items())
    }

    #[must_use]
    pub fn progress_within_item(&self, state: &SessionState) -> (u32, u32) {
        progress_within_item(state, self.repeat_threshold())
    }
}
