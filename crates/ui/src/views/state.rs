#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[cfg(test)]
use dioxus::prelude::*;
#[cfg(test)]
use services::SessionService;
use services::SessionError;

#[cfg(test)]
use crate::input::Intent;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    /// The session points at an item the module does not have.
    ItemUnavailable,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::ItemUnavailable => "This item could not be shown.",
            ViewError::Unknown => "Something went wrong. Please try again.",
        }
    }
}

impl From<&SessionError> for ViewError {
    fn from(err: &SessionError) -> Self {
        match err {
            SessionError::Engine(_) => ViewError::ItemUnavailable,
            _ => ViewError::Unknown,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Ready(T),
    Error(ViewError),
}

impl<T> ViewState<T> {
    /// Keep service error mapping at the UI boundary.
    pub fn from_result(result: Result<T, SessionError>) -> Self {
        match result {
            Ok(value) => ViewState::Ready(value),
            Err(err) => {
                tracing::error!(%err, "view failed to load");
                ViewState::Error(ViewError::from(&err))
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct IntentTestHandles {
    dispatch: Rc<RefCell<Option<Callback<Intent>>>>,
    session: Rc<RefCell<Option<Signal<SessionService>>>>,
}

#[cfg(test)]
impl IntentTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<Intent>, session: Signal<SessionService>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.session.borrow_mut() = Some(session);
    }

    pub(crate) fn dispatch(&self) -> Callback<Intent> {
        (*self.dispatch.borrow()).expect("intent dispatch registered")
    }

    pub(crate) fn session(&self) -> Signal<SessionService> {
        (*self.session.borrow()).expect("session registered")
    }
}

/// Hand the mounted view's dispatcher to the test harness, once per mount.
#[cfg(test)]
pub(crate) fn use_intent_test_handles(dispatch: Callback<Intent>, session: Signal<SessionService>) {
    let mut registered = use_signal(|| false);
    if !registered() {
        registered.set(true);
        if let Some(handles) = try_consume_context::<IntentTestHandles>() {
            handles.register(dispatch, session);
        }
    }
}
