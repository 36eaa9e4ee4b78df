use dioxus::prelude::*;

/// One button per tag. Clicking the selected tag clears the selection.
#[component]
pub fn TagFilter(
    tags: Vec<String>,
    selected: Option<String>,
    on_toggle: EventHandler<String>,
) -> Element {
    rsx! {
        div {
            class: "tag-filter",
            for tag in tags {
                button {
                    key: "{tag}",
                    class: tag_class(selected.as_deref(), &tag),
                    onclick: {
                        let tag = tag.clone();
                        move |_| on_toggle.call(tag.clone())
                    },
                    "{tag}"
                }
            }
        }
    }
}

fn tag_class(selected: Option<&str>, tag: &str) -> &'static str {
    if selected == Some(tag) {
        "tag selected"
    } else {
        "tag"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;

    #[test]
    fn test_only_selected_tag_is_highlighted() {
        fn app() -> Element {
            rsx! {
                TagFilter {
                    tags: vec!["AWS".to_string(), "OAuth".to_string(), "Web3".to_string()],
                    selected: Some("OAuth".to_string()),
                    on_toggle: move |_| {},
                }
            }
        }
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        let html = render(&dom);

        assert_eq!(html.matches("<button").count(), 3);
        assert!(html.contains("class=\"tag selected\">OAuth"), "{html}");
        assert!(html.contains("class=\"tag\">AWS"));
    }

    #[test]
    fn test_tag_match_is_case_sensitive() {
        assert_eq!(tag_class(Some("OAuth"), "OAuth"), "tag selected");
        assert_eq!(tag_class(Some("oauth"), "OAuth"), "tag");
        assert_eq!(tag_class(None, "OAuth"), "tag");
    }
}
