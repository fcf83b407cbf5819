use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::context::{AppContext, use_session};
use crate::input::{Intent, intent_for_key};
use crate::routes::Route;
use crate::views::{ViewError, ViewState};
use crate::vm::{LearningVm, map_learning_item};

#[component]
pub fn LearnView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let mut session = use_session();
    let mut error = use_signal(|| None::<ViewError>);

    let state = {
        let session = session.read();
        ViewState::from_result(session.progress().map(|info| {
            map_learning_item(&info, session.module().display_name(), ctx.display())
        }))
    };

    let dispatch = use_callback(move |intent: Intent| match intent {
        Intent::Advance => {
            let result = session.write().advance();
            match result {
                Ok(_) => error.set(None),
                Err(err) => {
                    tracing::error!(%err, "advance failed");
                    error.set(Some(ViewError::from(&err)));
                }
            }
        }
        Intent::Quit => {
            let summary = session.read().summary();
            tracing::info!(
                module = %summary.module,
                interactions = summary.total_interactions,
                items_completed = summary.items_completed,
                duration_secs = summary.duration_secs(),
                "session finished"
            );
            navigator.push(Route::Goodbye {});
        }
    });

    #[cfg(test)]
    {
        crate::views::state::use_intent_test_handles(dispatch, session);
    }

    let on_key = move |evt: KeyboardEvent| {
        if let Some(intent) = intent_for_key(&evt.data.key(), evt.data.code()) {
            evt.prevent_default();
            dispatch.call(intent);
        }
    };

    rsx! {
        div {
            class: "page learn-page",
            id: "learn-root",
            tabindex: "0",
            onkeydown: on_key,
            onclick: move |_| dispatch.call(Intent::Advance),
            onmounted: move |evt: MountedEvent| async move {
                let _ = evt.set_focus(true).await;
            },
            match state {
                ViewState::Ready(vm) => rsx! {
                    ItemCard { vm }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "error", "{err.message()}" }
                },
            }
            if let Some(err) = *error.read() {
                p { class: "error", "{err.message()}" }
            }
        }
    }
}

#[component]
fn ItemCard(vm: LearningVm) -> Element {
    rsx! {
        h2 { class: "learn-heading", style: "{vm.detail_style}", "{vm.heading}" }
        if let Some(swatch) = vm.swatch.as_ref() {
            div {
                class: "swatch",
                role: "img",
                aria_label: "{vm.name}",
                style: "{swatch.style}",
            }
        }
        p { class: "item-name", style: "{vm.name_style}", "{vm.name}" }
        if let Some(description) = vm.description.as_ref() {
            p { class: "item-description", style: "{vm.detail_style}", "{description}" }
        }
        if let Some(hint) = vm.hint.as_ref() {
            p { class: "item-hint", style: "{vm.detail_style}", "{hint}" }
        }
        div {
            class: "dots",
            role: "progressbar",
            aria_label: "{vm.progress_label}",
            title: "{vm.position_label}",
            for (idx, filled) in vm.dots.iter().copied().enumerate() {
                span {
                    key: "{idx}",
                    class: if filled { "dot dot--filled" } else { "dot" },
                }
            }
        }
        p { class: "instructions", style: "{vm.instructions_style}",
            "Click anywhere or press SPACE to continue. Press ESC to quit."
        }
    }
}
