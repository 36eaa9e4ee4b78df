use dioxus::prelude::*;
use secfolio_engine::{
    Catalog, FilterState, PageMeta, Post, Route, SiteInfo, all_tags, resolve, router,
};

use super::components::{BlogList, Home, Nav, PostDetail};

const THEME_CSS: &str = include_str!("../assets/theme.css");

#[component]
pub fn App(catalog: Catalog, site: SiteInfo, dark_mode: bool, initial_route: Route) -> Element {
    let mut route = use_signal(|| router::navigate(&catalog, initial_route.clone()));
    let mut filter = use_signal(FilterState::new);

    let navigate = use_callback({
        let catalog = catalog.clone();
        move |target: Route| {
            log::debug!("Navigating to {target}");
            let next = router::navigate(&catalog, target);
            if let Some(fresh) = filter_after_navigation(&route.peek(), &next) {
                filter.set(fresh);
            }
            route.set(next);
        }
    });

    let current = route.read().clone();
    let post = match &current {
        Route::Post(slug) => resolve(&catalog, slug).post().cloned(),
        _ => None,
    };

    let meta = match (&current, &post) {
        (Route::Home, _) => PageMeta::for_home(&site),
        (_, Some(post)) => PageMeta::for_post(post, &site),
        _ => PageMeta::for_blog(&site),
    };

    let theme_class = if dark_mode { "theme-dark" } else { "theme-light" };

    let page = match (&current, post) {
        (Route::Home, _) => rsx! {
            Home {
                site: site.clone(),
                post_count: catalog.len(),
                on_navigate: navigate,
            }
        },
        (_, Some(post)) => rsx! {
            PostDetail {
                post,
                on_back: move |_| navigate.call(Route::Blog),
            }
        },
        // The blog route, and any post slug that stopped resolving
        _ => {
            let state = filter.read().clone();
            let posts: Vec<Post> = state.apply(&catalog).into_iter().cloned().collect();
            rsx! {
                BlogList {
                    posts,
                    tags: all_tags(&catalog),
                    filter: state,
                    on_query: move |query: String| filter.write().set_query(query),
                    on_toggle_tag: move |tag: String| filter.write().toggle_tag(&tag),
                    on_clear: move |_| filter.write().clear(),
                    on_open: move |slug: String| navigate.call(Route::Post(slug)),
                }
            }
        }
    };

    rsx! {
        style { {THEME_CSS} }
        document::Title { "{meta.title}" }
        document::Meta { name: "description", content: "{meta.description}" }
        document::Meta { name: "keywords", content: "{meta.keywords}" }
        div {
            class: "app-container {theme_class}",
            Nav {
                site: site.clone(),
                current,
                on_navigate: navigate,
            }
            main { class: "main-content", {page} }
        }
    }
}

/// The list starts from an empty filter every time it is entered or left.
/// Returns `None` when the route does not change.
fn filter_after_navigation(current: &Route, next: &Route) -> Option<FilterState> {
    (current != next).then(FilterState::new)
}
