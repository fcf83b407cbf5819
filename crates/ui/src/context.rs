use std::sync::Arc;
use std::time::Duration;

use content::DisplaySettings;
use dioxus::prelude::*;
use learn_core::Clock;
use learn_core::model::LearningModule;
use services::SessionService;

use crate::platform::WindowRef;

/// How long the goodbye screen stays up before the window closes by itself.
pub const DEFAULT_GOODBYE_DELAY: Duration = Duration::from_secs(2);

pub trait UiApp: Send + Sync {
    fn module(&self) -> Arc<LearningModule>;
    fn display(&self) -> DisplaySettings;
    fn clock(&self) -> Clock;
    fn window(&self) -> WindowRef;

    /// `None` keeps the goodbye screen until the learner presses a key.
    fn goodbye_delay(&self) -> Option<Duration> {
        Some(DEFAULT_GOODBYE_DELAY)
    }
}

/// Read-only configuration shared by every view.
#[derive(Clone)]
pub struct AppContext {
    module: Arc<LearningModule>,
    display: DisplaySettings,
    clock: Clock,
    window: WindowRef,
    goodbye_delay: Option<Duration>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            module: app.module(),
            display: app.display(),
            clock: app.clock(),
            window: app.window(),
            goodbye_delay: app.goodbye_delay(),
        }
    }

    #[must_use]
    pub fn module(&self) -> Arc<LearningModule> {
        Arc::clone(&self.module)
    }

    #[must_use]
    pub fn display(&self) -> &DisplaySettings {
        &self.display
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    #[must_use]
    pub fn window(&self) -> WindowRef {
        Arc::clone(&self.window)
    }

    #[must_use]
    pub fn goodbye_delay(&self) -> Option<Duration> {
        self.goodbye_delay
    }

    #[must_use]
    pub fn new_session(&self) -> SessionService {
        SessionService::new(self.module.as_ref().clone(), self.clock)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

/// Provide the session signal shared by the welcome, learning and goodbye views.
///
/// The session lives as long as the calling component and is only replaced
/// through `SessionService` transitions.
pub fn use_session_provider(ctx: &AppContext) -> Signal<SessionService> {
    let ctx = ctx.clone();
    use_context_provider(move || Signal::new(ctx.new_session()))
}

/// The session provided by [`use_session_provider`].
#[must_use]
pub fn use_session() -> Signal<SessionService> {
    use_context::<Signal<SessionService>>()
}
