use crate::ui::components::post_body::PostBody;
use dioxus::prelude::*;
use secfolio_engine::Post;

#[component]
pub fn PostDetail(post: Post, on_back: EventHandler<()>) -> Element {
    rsx! {
        article {
            class: "post-detail",
            button {
                class: "back-link",
                onclick: move |_| on_back.call(()),
                "← Back to blog"
            }
            header {
                div {
                    class: "post-meta",
                    span { class: "post-date", "{post.date}" }
                    for tag in post.tags.iter() {
                        span { key: "{tag}", class: "tag", "{tag}" }
                    }
                }
                h1 { class: "post-title", "{post.title}" }
                p { class: "post-excerpt", "{post.excerpt}" }
            }
            PostBody { blocks: post.content.clone() }
        }
    }
}
