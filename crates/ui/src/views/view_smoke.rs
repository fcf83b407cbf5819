use std::time::Duration;

use learn_core::model::{ItemVisual, LearningItem, LearningModule, RepeatThreshold};
use learn_core::time::fixed_clock;
use services::SessionService;

use super::test_harness::{
    ViewKind, colors_module, setup_view_harness, setup_view_harness_with_session,
};

fn advanced(module: &LearningModule, steps: usize) -> SessionService {
    let mut session = SessionService::new(module.clone(), fixed_clock());
    for _ in 0..steps {
        session.advance().expect("advance");
    }
    session
}

#[tokio::test(flavor = "current_thread")]
async fn welcome_view_smoke_renders_title_and_module() {
    let mut harness = setup_view_harness(ViewKind::Welcome, colors_module());
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Toddler Learning"), "missing title in {html}");
    assert!(html.contains("Colors"), "missing module name in {html}");
    assert!(html.contains("Click to start!"), "missing prompt in {html}");
    assert_eq!(harness.window.close_count(), 0);
}

#[tokio::test(flavor = "current_thread")]
async fn learn_view_smoke_renders_first_item() {
    let mut harness = setup_view_harness(ViewKind::Learn, colors_module());
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Learning: Colors"), "missing heading in {html}");
    assert!(html.contains("Red"), "missing item name in {html}");
    assert!(html.contains("Like an apple"), "missing description in {html}");
    assert!(html.contains("rgb(255, 0, 0)"), "missing swatch color in {html}");
    assert!(html.contains("1 of 2"), "missing progress label in {html}");
    assert!(html.contains("Item 1 of 3"), "missing position label in {html}");
    assert_eq!(html.matches("dot dot--filled").count(), 1, "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn learn_view_smoke_follows_session_state() {
    let module = colors_module();
    // Red, Red, Blue, Blue: the fourth showing is Blue's second repeat.
    let session = advanced(&module, 3);
    let mut harness = setup_view_harness_with_session(ViewKind::Learn, module, session, None);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Blue"), "missing item name in {html}");
    assert!(!html.contains("Like an apple"), "stale description in {html}");
    assert!(html.contains("2 of 2"), "missing progress label in {html}");
    assert!(html.contains("Item 2 of 3"), "missing position label in {html}");
    assert_eq!(html.matches("dot dot--filled").count(), 2, "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn learn_view_smoke_wraps_to_first_item() {
    let module = colors_module();
    let session = advanced(&module, 6);
    let mut harness = setup_view_harness_with_session(ViewKind::Learn, module, session, None);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Red"), "missing wrapped item in {html}");
    assert!(html.contains("Item 1 of 3"), "missing position label in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn learn_view_smoke_renders_label_items_without_swatch() {
    let cat = LearningItem::new(0, "Cat", ItemVisual::Label, "Says meow")
        .expect("item")
        .with_audio_hint(Some("meow".into()));
    let module = LearningModule::new("animals", None, RepeatThreshold::DEFAULT, vec![cat])
        .expect("module");

    let mut harness = setup_view_harness(ViewKind::Learn, module);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Learning: Animals"), "missing heading in {html}");
    assert!(html.contains("Cat"), "missing item name in {html}");
    assert!(html.contains("meow"), "missing hint in {html}");
    assert!(!html.contains("swatch"), "unexpected swatch in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn goodbye_view_smoke_renders_summary() {
    let module = colors_module();
    let mut session = advanced(&module, 5);
    session.clock_mut().advance(chrono::Duration::seconds(42));
    let mut harness = setup_view_harness_with_session(ViewKind::Goodbye, module, session, None);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Great Learning!"), "missing farewell in {html}");
    assert!(html.contains("Interactions: 5"), "missing interactions in {html}");
    assert!(html.contains("Items Completed: 2"), "missing items in {html}");
    assert!(html.contains("Time: 42 seconds"), "missing time in {html}");
    assert_eq!(harness.window.close_count(), 0);
}

#[tokio::test(flavor = "current_thread")]
async fn goodbye_view_closes_window_after_delay() {
    let module = colors_module();
    let session = SessionService::new(module.clone(), fixed_clock());
    let mut harness = setup_view_harness_with_session(
        ViewKind::Goodbye,
        module,
        session,
        Some(Duration::from_millis(1)),
    );
    harness.rebuild();

    for _ in 0..5 {
        if harness.window.close_count() > 0 {
            break;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
        harness.drive_async().await;
    }

    assert_eq!(harness.window.close_count(), 1);
}
