use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::context::{AppContext, use_session};
use crate::input::{Intent, intent_for_key};
use crate::routes::Route;
use crate::vm::FontScale;

#[component]
pub fn WelcomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let mut session = use_session();
    let fonts = FontScale::from_display(ctx.display());
    let module_name = ctx.module().display_name().to_owned();
    let window = ctx.window();

    let dispatch = use_callback(move |intent: Intent| match intent {
        Intent::Advance => {
            // The session clock starts when learning starts, not at launch.
            session.write().reset();
            navigator.push(Route::Learn {});
        }
        Intent::Quit => {
            tracing::info!("quit from welcome screen");
            window.close();
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
            class: "page welcome-page",
            id: "welcome-root",
            tabindex: "0",
            onkeydown: on_key,
            onclick: move |_| dispatch.call(Intent::Advance),
            onmounted: move |evt: MountedEvent| async move {
                let _ = evt.set_focus(true).await;
            },
            h1 { class: "welcome-title", style: "font-size: {fonts.large_px}px;", "Toddler Learning" }
            p { class: "welcome-module", style: "font-size: {fonts.medium_px}px;", "{module_name}" }
            p { class: "welcome-subtitle", style: "font-size: {fonts.medium_px}px;", "Click to start!" }
        }
    }
}
