use dioxus::prelude::*;
use secfolio_engine::{Route, SiteInfo};

#[component]
pub fn Nav(site: SiteInfo, current: Route, on_navigate: EventHandler<Route>) -> Element {
    let blog_active = matches!(current, Route::Blog | Route::Post(_));

    rsx! {
        nav {
            class: "site-nav",
            button {
                class: "brand",
                onclick: move |_| on_navigate.call(Route::Home),
                "{site.author}"
            }
            button {
                class: link_class(current == Route::Home),
                onclick: move |_| on_navigate.call(Route::Home),
                "Home"
            }
            button {
                class: link_class(blog_active),
                onclick: move |_| on_navigate.call(Route::Blog),
                "Blog"
            }
        }
    }
}

fn link_class(active: bool) -> &'static str {
    if active { "nav-link active" } else { "nav-link" }
}
