use dioxus::prelude::*;

use crate::context::{AppContext, use_session};
use crate::input::{Intent, intent_for_key};
use crate::vm::{FontScale, SummaryVm};

#[component]
pub fn GoodbyeView() -> Element {
    let ctx = use_context::<AppContext>();
    let session = use_session();
    let fonts = FontScale::from_display(ctx.display());
    let vm = SummaryVm::from(&session.read().summary());

    let auto_close = ctx.window();
    let delay = ctx.goodbye_delay();
    use_future(move || {
        let window = auto_close.clone();
        async move {
            if let Some(delay) = delay {
                tokio::time::sleep(delay).await;
                window.close();
            }
        }
    });

    // Any recognized input ends the app from here.
    let dispatch = {
        let window = ctx.window();
        use_callback(move |_intent: Intent| window.close())
    };

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
            class: "page goodbye-page",
            id: "goodbye-root",
            tabindex: "0",
            onkeydown: on_key,
            onclick: move |_| dispatch.call(Intent::Advance),
            onmounted: move |evt: MountedEvent| async move {
                let _ = evt.set_focus(true).await;
            },
            h1 { style: "font-size: {fonts.large_px}px;", "Great Learning!" }
            ul { class: "summary-lines", style: "font-size: {fonts.medium_px}px;",
                li { "{vm.module}" }
                li { "{vm.interactions_label}" }
                li { "{vm.items_completed_label}" }
                li { "{vm.time_label}" }
            }
        }
    }
}
