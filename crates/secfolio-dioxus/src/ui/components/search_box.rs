use dioxus::prelude::*;

#[component]
pub fn SearchBox(query: String, on_input: EventHandler<String>) -> Element {
    rsx! {
        div {
            class: "search-box",
            input {
                r#type: "text",
                placeholder: "Search posts...",
                value: "{query}",
                oninput: move |evt| on_input.call(evt.value()),
            }
        }
    }
}
