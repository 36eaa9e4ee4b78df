use crate::ui::components::content_unit::ContentUnit;
use dioxus::prelude::*;
use secfolio_engine::{ContentBlock, render};

/// A post's content blocks, rendered in order
#[component]
pub fn PostBody(blocks: Vec<ContentBlock>) -> Element {
    let units = render(&blocks);

    rsx! {
        div {
            class: "post-body",
            for (i, unit) in units.into_iter().enumerate() {
                ContentUnit { key: "{i}", unit }
            }
        }
    }
}
