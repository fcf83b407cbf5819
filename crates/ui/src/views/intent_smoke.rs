use dioxus::prelude::*;
use learn_core::model::SessionState;

use crate::input::Intent;

use super::test_harness::{colors_module, setup_intent_harness};

#[tokio::test(flavor = "current_thread")]
async fn welcome_advance_resets_session_and_opens_learning() {
    let mut harness = setup_intent_harness(colors_module());
    harness.rebuild();
    assert!(harness.render().contains("welcome-root"));

    let mut session = harness.session();
    harness.dom.in_runtime(|| {
        session.write().advance().expect("advance");
    });
    assert_ne!(harness.state(), SessionState::initial());

    harness.dispatch(Intent::Advance);

    assert_eq!(harness.state(), SessionState::initial());
    let html = harness.render();
    assert!(html.contains("learn-root"), "not on learning screen: {html}");
    assert!(html.contains("Red"), "missing first item in {html}");
    assert!(html.contains("1 of 2"), "missing progress label in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn learn_advance_repeats_then_moves_on_and_wraps() {
    let mut harness = setup_intent_harness(colors_module());
    harness.rebuild();
    harness.dispatch(Intent::Advance);

    harness.dispatch(Intent::Advance);
    let html = harness.render();
    assert!(html.contains("Red"), "{html}");
    assert!(html.contains("2 of 2"), "{html}");
    assert_eq!(harness.state(), SessionState::from_parts(0, 2, 1, 0));

    harness.dispatch(Intent::Advance);
    let html = harness.render();
    assert!(html.contains("Blue"), "{html}");
    assert!(html.contains("Item 2 of 3"), "{html}");
    assert!(html.contains("1 of 2"), "{html}");

    for _ in 0..4 {
        harness.dispatch(Intent::Advance);
    }
    let html = harness.render();
    assert!(html.contains("Item 1 of 3"), "{html}");
    assert_eq!(harness.state(), SessionState::from_parts(0, 1, 6, 3));
    assert_eq!(harness.window.close_count(), 0);
}

#[tokio::test(flavor = "current_thread")]
async fn learn_quit_shows_goodbye_and_input_there_closes_window() {
    let mut harness = setup_intent_harness(colors_module());
    harness.rebuild();
    harness.dispatch(Intent::Advance);
    for _ in 0..3 {
        harness.dispatch(Intent::Advance);
    }

    harness.dispatch(Intent::Quit);
    let html = harness.render();
    assert!(html.contains("goodbye-root"), "not on goodbye screen: {html}");
    assert!(html.contains("Interactions: 3"), "{html}");
    assert!(html.contains("Items Completed: 1"), "{html}");
    assert_eq!(harness.window.close_count(), 0);

    harness.dispatch(Intent::Advance);
    assert_eq!(harness.window.close_count(), 1);
}

#[tokio::test(flavor = "current_thread")]
async fn welcome_quit_closes_window_without_learning() {
    let mut harness = setup_intent_harness(colors_module());
    harness.rebuild();

    harness.dispatch(Intent::Quit);

    assert_eq!(harness.window.close_count(), 1);
    assert!(harness.render().contains("welcome-root"));
    assert_eq!(harness.state(), SessionState::initial());
}
