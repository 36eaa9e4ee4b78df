//! Blog list filtering.
//!
//! [`filter`] is a pure function of the catalog, the free-text query and the
//! selected tag. Frontends keep a [`FilterState`] and call it again on every
//! keystroke or tag click; nothing here holds hidden state.

use crate::catalog::{Catalog, Post};

/// Posts matching both the text query and the tag, in catalog order.
///
/// - A blank query (empty or whitespace only) matches every post. Otherwise the
///   query must appear, case-insensitively, in the title or the excerpt.
/// - `None` for the tag matches every post. Otherwise the post must carry
///   exactly that tag (case-sensitive).
pub fn filter<'a>(catalog: &'a Catalog, query: &str, selected_tag: Option<&str>) -> Vec<&'a Post> {
    let needle = normalize_query(query);

    catalog
        .iter()
        .filter(|post| text_match(post, needle.as_deref()) && tag_match(post, selected_tag))
        .collect()
}

/// Lowercased query, or `None` when the query matches everything
fn normalize_query(query: &str) -> Option<String> {
    if query.trim().is_empty() {
        None
    } else {
        Some(query.to_lowercase())
    }
}

fn text_match(post: &Post, needle: Option<&str>) -> bool {
    match needle {
        None => true,
        Some(needle) => {
            post.title.to_lowercase().contains(needle)
                || post.excerpt.to_lowercase().contains(needle)
        }
    }
}

fn tag_match(post: &Post, selected_tag: Option<&str>) -> bool {
    selected_tag.is_none_or(|tag| post.has_tag(tag))
}

/// UI-owned filter inputs for the blog list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub query: String,
    pub selected_tag: Option<String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Select `tag`, or clear the selection if `tag` is already selected.
    pub fn toggle_tag(&mut self, tag: &str) {
        if self.selected_tag.as_deref() == Some(tag) {
            self.selected_tag = None;
        } else {
            self.selected_tag = Some(tag.to_string());
        }
    }

    pub fn is_selected(&self, tag: &str) -> bool {
        self.selected_tag.as_deref() == Some(tag)
    }

    /// True when neither a query nor a tag narrows the list
    pub fn is_empty(&self) -> bool {
        self.query.trim().is_empty() && self.selected_tag.is_none()
    }

    pub fn clear(&mut self) {
        self.query.clear();
        self.selected_tag = None;
    }

    pub fn apply<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Post> {
        filter(catalog, &self.query, self.selected_tag.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{catalog_of, post, post_with_excerpt};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn slugs<'a>(posts: &[&'a Post]) -> Vec<&'a str> {
        posts.iter().map(|p| p.slug.as_str()).collect()
    }

    fn sample() -> Catalog {
        catalog_of(vec![
            post_with_excerpt("oauth", "Breaking OAuth", "Tokens and flows", &["OAuth", "Web"]),
            post_with_excerpt("k8s", "Cluster Hardening", "Kubernetes policies", &["Cloud"]),
            post_with_excerpt("web3", "Smart Contracts", "Reentrancy and more", &["Web3", "Web"]),
        ])
    }

    #[test]
    fn test_empty_inputs_return_everything_in_order() {
        let catalog = sample();
        assert_eq!(slugs(&filter(&catalog, "", None)), vec!["oauth", "k8s", "web3"]);
    }

    #[rstest]
    #[case(" ")]
    #[case("\t\n")]
    fn test_blank_query_matches_everything(#[case] query: &str) {
        let catalog = sample();
        assert_eq!(filter(&catalog, query, None).len(), 3);
    }

    #[rstest]
    #[case("oauth")]
    #[case("OAUTH")]
    #[case("OAuth")]
    fn test_query_is_case_insensitive(#[case] query: &str) {
        let catalog = sample();
        assert_eq!(slugs(&filter(&catalog, query, None)), vec!["oauth"]);
    }

    #[test]
    fn test_query_matches_excerpt() {
        let catalog = sample();
        assert_eq!(slugs(&filter(&catalog, "kubernetes", None)), vec!["k8s"]);
    }

    #[test]
    fn test_query_does_not_match_tags_or_body() {
        let catalog = sample();
        assert!(filter(&catalog, "Cloud", None).is_empty());
        assert!(filter(&catalog, "Body of", None).is_empty());
    }

    #[test]
    fn test_tag_is_exact_and_case_sensitive() {
        let catalog = sample();
        assert_eq!(slugs(&filter(&catalog, "", Some("OAuth"))), vec!["oauth"]);
        assert!(filter(&catalog, "", Some("oauth")).is_empty());
        // "Web" must not match "Web3"
        assert_eq!(slugs(&filter(&catalog, "", Some("Web"))), vec!["oauth", "web3"]);
    }

    #[test]
    fn test_query_and_tag_combine() {
        let catalog = sample();
        assert_eq!(slugs(&filter(&catalog, "smart", Some("Web"))), vec!["web3"]);
        assert!(filter(&catalog, "smart", Some("OAuth")).is_empty());
    }

    #[test]
    fn test_empty_catalog() {
        assert!(filter(&Catalog::empty(), "anything", Some("tag")).is_empty());
    }

    #[test]
    fn test_non_blank_query_is_not_trimmed() {
        let catalog = catalog_of(vec![post("a", "Zero Day", &[]), post("b", "Day Zero", &[])]);
        assert_eq!(slugs(&filter(&catalog, "zero ", None)), vec!["a"]);
    }

    #[test]
    fn test_toggle_same_tag_clears_selection() {
        let mut state = FilterState::new();
        state.toggle_tag("Web3");
        assert_eq!(state.selected_tag.as_deref(), Some("Web3"));
        assert!(state.is_selected("Web3"));

        state.toggle_tag("Web3");
        assert_eq!(state.selected_tag, None);
    }

    #[test]
    fn test_toggle_other_tag_replaces_selection() {
        let mut state = FilterState::new();
        state.toggle_tag("Web3");
        state.toggle_tag("Cloud");
        assert_eq!(state.selected_tag.as_deref(), Some("Cloud"));
    }

    #[test]
    fn test_state_apply_and_clear() {
        let catalog = sample();
        let mut state = FilterState::new();
        assert!(state.is_empty());

        state.set_query("contracts");
        state.toggle_tag("Web");
        assert!(!state.is_empty());
        assert_eq!(slugs(&state.apply(&catalog)), vec!["web3"]);

        state.clear();
        assert!(state.is_empty());
        assert_eq!(state.apply(&catalog).len(), 3);
    }
}
