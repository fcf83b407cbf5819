use super::UiWindow;

pub struct DesktopWindow;

impl UiWindow for DesktopWindow {
    fn close(&self) {
        dioxus::desktop::window().close();
    }
}
