use dioxus::prelude::*;
use secfolio_engine::HeadingLevel;

#[component]
pub fn Heading(text: String, level: HeadingLevel) -> Element {
    let class_name = format!("heading level-{}", level.get());

    match level.get() {
        1 => rsx! { h1 { class: "{class_name}", "{text}" } },
        2 => rsx! { h2 { class: "{class_name}", "{text}" } },
        3 => rsx! { h3 { class: "{class_name}", "{text}" } },
        4 => rsx! { h4 { class: "{class_name}", "{text}" } },
        5 => rsx! { h5 { class: "{class_name}", "{text}" } },
        _ => rsx! { h6 { class: "{class_name}", "{text}" } },
    }
}
