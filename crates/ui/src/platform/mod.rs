use std::sync::Arc;

mod desktop;

/// Window operations the views need, kept behind a trait so views can be
/// rendered without a real window.
pub trait UiWindow: Send + Sync {
    fn close(&self);
}

pub type WindowRef = Arc<dyn UiWindow>;

pub use desktop::DesktopWindow;
