use chrono::{DateTime, Utc};
use learn_core::model::{LearningItem, LearningModule, SessionState};
use learn_core::{Clock, LearningEngine};
use tracing::{debug, info};

use super::progress::ProgressInfo;
use super::summary::SessionSummary;
use crate::error::SessionError;

/// One learner working through one module.
///
/// Owns the engine and the current [`SessionState`]. Every [`advance`] swaps in
/// the state computed by the engine; nothing is mutated in place.
///
/// [`advance`]: SessionService::advance
#[derive(Debug, Clone)]
pub struct SessionService {
    engine: LearningEngine,
    state: SessionState,
    clock: Clock,
    started_at: DateTime<Utc>,
}

impl SessionService {
    #[must_use]
    pub fn new(module: LearningModule, clock: Clock) -> Self {
        let engine = LearningEngine::new(module);
        let state = engine.initial_state();
        let started_at = clock.now();
        info!(
            module = engine.module().key(),
            items = engine.item_count(),
            repeat_threshold = engine.repeat_threshold(),
            "session started"
        );
        Self {
            engine,
            state,
            clock,
            started_at,
        }
    }

    #[must_use]
    pub fn module(&self) -> &LearningModule {
        self.engine.module()
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Mutable access to the clock, so tests can move time forward.
    pub fn clock_mut(&mut self) -> &mut Clock {
        &mut self.clock
    }

    /// # Errors
    ///
    /// Returns `SessionError::Engine` if the state points outside the module.
    pub fn current_item(&self) -> Result<&LearningItem, SessionError> {
        Ok(self.engine.current_item(&self.state)?)
    }

    /// # Errors
    ///
    /// Returns `SessionError::Engine` if the state points outside the module.
    pub fn progress(&self) -> Result<ProgressInfo, SessionError> {
        let item = self.current_item()?.clone();
        let (repeat_number, total_repeats) = self.engine.progress_within_item(&self.state);
        Ok(ProgressInfo {
            item,
            repeat_number,
            total_repeats,
            item_index: self.state.current_index(),
            total_items: self.engine.item_count(),
        })
    }

    /// Record one affirmative interaction and return what to show next.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Engine` on an engine invariant violation.
    pub fn advance(&mut self) -> Result<ProgressInfo, SessionError> {
        let previous = self.state;
        let next = self.engine.advance(previous)?;
        self.state = next;

        debug!(
            index = next.current_index(),
            repeat = next.repeat_count(),
            interactions = next.total_interactions(),
            "advanced"
        );
        if next.current_index() != previous.current_index() && next.current_index() == 0 {
            info!(
                module = self.engine.module().key(),
                items_completed = next.items_completed(),
                "wrapped around to the first item"
            );
        }

        self.progress()
    }

    #[must_use]
    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            module: self.engine.module().display_name().to_owned(),
            total_interactions: self.state.total_interactions(),
            items_completed: self.state.items_completed(),
            current_index: self.state.current_index(),
            total_items: self.engine.item_count(),
            repeat_threshold: self.engine.repeat_threshold(),
            started_at: self.started_at,
            duration: self.clock.elapsed_since(self.started_at),
        }
    }

    /// Go back to the first item and restart the session timer.
    pub fn reset(&mut self) {
        self.state = self.engine.initial_state();
        self.started_at = self.clock.now();
        info!(module = self.engine.module().key(), "session reset");
    }
}
