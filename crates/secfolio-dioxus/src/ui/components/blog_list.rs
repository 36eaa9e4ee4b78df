use crate::ui::components::{post_card::PostCard, search_box::SearchBox, tag_filter::TagFilter};
use dioxus::prelude::*;
use secfolio_engine::{FilterState, Post};

/// The blog list page: search box, tag buttons and the posts that survived
/// filtering, in catalog order.
#[component]
pub fn BlogList(
    posts: Vec<Post>,
    tags: Vec<String>,
    filter: FilterState,
    on_query: EventHandler<String>,
    on_toggle_tag: EventHandler<String>,
    on_clear: EventHandler<()>,
    on_open: EventHandler<String>,
) -> Element {
    rsx! {
        section {
            class: "blog-list",
            h1 { "Security Blog" }
            p {
                class: "blog-intro",
                "Deep dives into cybersecurity, penetration testing, and security research."
            }
            SearchBox { query: filter.query.clone(), on_input: on_query }
            TagFilter {
                tags,
                selected: filter.selected_tag.clone(),
                on_toggle: on_toggle_tag,
            }
            if posts.is_empty() {
                div {
                    class: "no-results",
                    p { "No posts found matching your criteria." }
                    button {
                        class: "clear-filters",
                        onclick: move |_| on_clear.call(()),
                        "Clear filters"
                    }
                }
            } else {
                div {
                    class: "post-grid",
                    for post in posts.iter() {
                        PostCard { key: "{post.slug}", post: post.clone(), on_open }
                    }
                }
            }
        }
    }
}
