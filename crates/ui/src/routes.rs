use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use crate::context::AppContext;
use crate::views::{GoodbyeView, LearnView, WelcomeView};
use crate::vm::page_style;

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", WelcomeView)] Welcome {},
        #[route("/learn", LearnView)] Learn {},
        #[route("/goodbye", GoodbyeView)] Goodbye {},
}

#[component]
fn Layout() -> Element {
    let ctx = use_context::<AppContext>();
    let style = page_style(ctx.display());

    rsx! {
        div { class: "app", style: "{style}",
            Outlet::<Route> {}
        }
    }
}
