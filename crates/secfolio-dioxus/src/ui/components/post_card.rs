use dioxus::prelude::*;
use secfolio_engine::Post;

#[component]
pub fn PostCard(post: Post, on_open: EventHandler<String>) -> Element {
    let slug = post.slug.clone();

    rsx! {
        article {
            class: "post-card",
            onclick: move |_| on_open.call(slug.clone()),
            div { class: "post-date", "{post.date}" }
            h2 { class: "post-title", "{post.title}" }
            p { class: "post-excerpt", "{post.excerpt}" }
            div {
                class: "post-tags",
                for tag in post.tags.iter() {
                    span { key: "{tag}", class: "tag", "{tag}" }
                }
            }
        }
    }
}
