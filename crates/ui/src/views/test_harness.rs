use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use content::DisplaySettings;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use learn_core::model::{LearningItem, LearningModule, RepeatThreshold, Rgb};
use learn_core::time::fixed_clock;
use services::{Clock, SessionService};

use crate::context::{UiApp, build_app_context, use_session_provider};
use crate::input::Intent;
use crate::platform::{UiWindow, WindowRef};
use crate::routes::Route;
use crate::views::state::IntentTestHandles;
use crate::views::{GoodbyeView, LearnView, WelcomeView};

#[derive(Default)]
pub struct RecordingWindow {
    closed: AtomicUsize,
}

impl RecordingWindow {
    pub fn close_count(&self) -> usize {
        self.closed.load(Ordering::SeqCst)
    }
}

impl UiWindow for RecordingWindow {
    fn close(&self) {
        self.closed.fetch_add(1, Ordering::SeqCst);
    }
}

struct TestApp {
    module: Arc<LearningModule>,
    display: DisplaySettings,
    window: Arc<RecordingWindow>,
    goodbye_delay: Option<Duration>,
}

impl UiApp for TestApp {
    fn module(&self) -> Arc<LearningModule> {
        Arc::clone(&self.module)
    }

    fn display(&self) -> DisplaySettings {
        self.display
    }

    fn clock(&self) -> Clock {
        fixed_clock()
    }

    fn window(&self) -> WindowRef {
        self.window.clone()
    }

    fn goodbye_delay(&self) -> Option<Duration> {
        self.goodbye_delay
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Welcome,
    Learn,
    Goodbye,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    session: SessionService,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| Signal::new(props.session.clone()));
    use_context_provider(|| props.view);
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Welcome => rsx! { WelcomeView {} },
        ViewKind::Learn => rsx! { LearnView {} },
        ViewKind::Goodbye => rsx! { GoodbyeView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub window: Arc<RecordingWindow>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Red, Blue, Green with a threshold of 2.
pub fn colors_module() -> LearningModule {
    let items = vec![
        LearningItem::color(0, "Red", Rgb::new(255, 0, 0), "Like an apple").expect("item"),
        LearningItem::color(1, "Blue", Rgb::new(0, 0, 255), "Like the sky").expect("item"),
        LearningItem::color(2, "Green", Rgb::new(0, 128, 0), "").expect("item"),
    ];
    LearningModule::new(
        "colors",
        None,
        RepeatThreshold::new(2).expect("threshold"),
        items,
    )
    .expect("module")
}

pub fn setup_view_harness(view: ViewKind, module: LearningModule) -> ViewHarness {
    let session = SessionService::new(module.clone(), fixed_clock());
    setup_view_harness_with_session(view, module, session, None)
}

pub fn setup_view_harness_with_session(
    view: ViewKind,
    module: LearningModule,
    session: SessionService,
    goodbye_delay: Option<Duration>,
) -> ViewHarness {
    let window = Arc::new(RecordingWindow::default());
    let app = Arc::new(TestApp {
        module: Arc::new(module),
        display: DisplaySettings::default(),
        window: Arc::clone(&window),
        goodbye_delay,
    });

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps { app, view, session },
    );

    ViewHarness { dom, window }
}

#[derive(Props, Clone)]
struct AppHarnessProps {
    app: Arc<TestApp>,
    handles: IntentTestHandles,
}

impl PartialEq for AppHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for AppHarnessProps {}

/// The real route table, starting on the welcome screen.
#[component]
fn AppRouterHarness(props: AppHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    let ctx = use_context_provider(|| build_app_context(&app));
    use_session_provider(&ctx);
    use_context_provider(|| props.handles.clone());
    rsx! { Router::<Route> {} }
}

pub struct IntentHarness {
    pub dom: VirtualDom,
    pub window: Arc<RecordingWindow>,
    handles: IntentTestHandles,
}

impl IntentHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    /// Send `intent` to whichever view is mounted, then let the dom settle.
    pub fn dispatch(&mut self, intent: Intent) {
        let dispatch = self.handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
    }

    pub fn session(&self) -> Signal<SessionService> {
        self.handles.session()
    }

    pub fn state(&self) -> learn_core::model::SessionState {
        let session = self.session();
        self.dom.in_runtime(|| session.peek().state())
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn setup_intent_harness(module: LearningModule) -> IntentHarness {
    let window = Arc::new(RecordingWindow::default());
    let app = Arc::new(TestApp {
        module: Arc::new(module),
        display: DisplaySettings::default(),
        window: Arc::clone(&window),
        goodbye_delay: None,
    });
    let handles = IntentTestHandles::default();

    let dom = VirtualDom::new_with_props(
        AppRouterHarness,
        AppHarnessProps {
            app,
            handles: handles.clone(),
        },
    );

    IntentHarness {
        dom,
        window,
        handles,
    }
}
