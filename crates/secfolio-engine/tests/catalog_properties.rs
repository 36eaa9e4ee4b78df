//! Properties of the full pipeline against the bundled catalog.

use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};
use std::collections::HashSet;

use secfolio_engine::{
    Catalog, ContentBlock, Highlight, Post, RenderUnit, Resolution, Route, all_tags, data, filter,
    render, resolve, router,
};

#[fixture]
fn catalog() -> Catalog {
    data::bundled()
}

fn slugs<'a>(posts: &[&'a Post]) -> Vec<&'a str> {
    posts.iter().map(|p| p.slug.as_str()).collect()
}

#[rstest]
fn slugs_are_pairwise_distinct(catalog: Catalog) {
    let unique: HashSet<_> = catalog.iter().map(|p| &p.slug).collect();
    assert_eq!(unique.len(), catalog.len());
}

#[rstest]
fn empty_filter_is_identity(catalog: Catalog) {
    let all: Vec<&Post> = catalog.iter().collect();
    assert_eq!(filter(&catalog, "", None), all);
}

#[rstest]
#[case("security", None)]
#[case("", Some("Cloud Security"))]
#[case("vulnerab", Some("Authentication"))]
#[case("nothing matches this", None)]
fn filter_is_an_ordered_subset(catalog: Catalog, #[case] query: &str, #[case] tag: Option<&str>) {
    let full = filter(&catalog, "", None);
    let subset = filter(&catalog, query, tag);

    // Every match appears in the full list, and in the same relative order
    let positions: Vec<usize> = subset
        .iter()
        .map(|p| full.iter().position(|q| q.slug == p.slug).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[rstest]
fn filter_query_is_case_insensitive(catalog: Catalog) {
    assert_eq!(filter(&catalog, "OAUTH", None), filter(&catalog, "oauth", None));
    assert_eq!(
        slugs(&filter(&catalog, "oauth", None)),
        vec!["oauth2-vulnerability-analysis"]
    );
}

#[rstest]
fn tag_match_is_exact(catalog: Catalog) {
    let exact = filter(&catalog, "", Some("OAuth"));
    let lower = filter(&catalog, "", Some("oauth"));

    assert_ne!(exact, lower);
    assert_eq!(slugs(&exact), vec!["oauth2-vulnerability-analysis"]);
    assert!(lower.is_empty());
}

#[rstest]
fn shared_tag_matches_several_posts(catalog: Catalog) {
    assert_eq!(
        slugs(&filter(&catalog, "", Some("Authentication"))),
        vec!["oauth2-vulnerability-analysis", "api-security-testing"]
    );
}

#[rstest]
fn kubernetes_query_finds_only_the_kubernetes_post(catalog: Catalog) {
    let titles: Vec<_> = filter(&catalog, "kubernetes", None)
        .iter()
        .map(|p| p.title.as_str())
        .collect();
    assert_eq!(
        titles,
        vec!["Kubernetes Security Hardening: Best Practices and Common Pitfalls"]
    );
}

#[rstest]
fn web3_tag_finds_only_the_web3_post(catalog: Catalog) {
    assert_eq!(slugs(&filter(&catalog, "", Some("Web3"))), vec!["web3-security"]);
}

#[rstest]
fn tag_index_is_strictly_ascending(catalog: Catalog) {
    let tags = all_tags(&catalog);
    assert!(tags.windows(2).all(|w| w[0] < w[1]));
    insta::assert_yaml_snapshot!("all_tags", tags);
}

#[rstest]
fn resolver_finds_exact_slug(catalog: Catalog) {
    match resolve(&catalog, "oauth2-vulnerability-analysis") {
        Resolution::Found(post) => assert_eq!(post.slug, "oauth2-vulnerability-analysis"),
        Resolution::NotFound => panic!("expected the OAuth post"),
    }
    assert_eq!(resolve(&catalog, "does-not-exist"), Resolution::NotFound);
}

#[rstest]
fn unknown_post_route_redirects_to_the_list(catalog: Catalog) {
    let route = Route::parse("/blog/does-not-exist");
    assert_eq!(router::navigate(&catalog, route), Route::Blog);
}

#[rstest]
fn renderer_maps_heading_paragraph_code(catalog: Catalog) {
    let post = catalog.find_by_slug("oauth2-vulnerability-analysis").unwrap();
    // Blocks 1..4 are Heading(2), Paragraph, Code
    let units = render(&post.content[1..4]);

    assert_eq!(units.len(), 3);
    assert!(matches!(&units[0], RenderUnit::Heading { level, .. } if level.get() == 2));
    assert!(matches!(&units[1], RenderUnit::Text { .. }));
    assert!(matches!(
        &units[2],
        RenderUnit::Code { highlight: Highlight::Tokens(_), .. }
    ));
}

#[test]
fn renderer_falls_back_for_unknown_grammar() {
    let units = render(&[ContentBlock::code("not-a-real-grammar", "rm -rf / --no-preserve-root")]);
    assert_eq!(
        units,
        vec![RenderUnit::Code {
            language: "not-a-real-grammar".to_string(),
            text: "rm -rf / --no-preserve-root".to_string(),
            highlight: Highlight::Plain,
        }]
    );
}

#[test]
fn render_units_snapshot() {
    let units = render(&[
        ContentBlock::heading(2, "Setup"),
        ContentBlock::paragraph("Run the scanner."),
        ContentBlock::code("not-a-real-grammar", "rm -rf /tmp/scan"),
    ]);
    insta::assert_yaml_snapshot!("render_units", units);
}

#[rstest]
fn every_bundled_code_block_highlights_losslessly(catalog: Catalog) {
    for post in catalog.iter() {
        for unit in render(&post.content) {
            if let RenderUnit::Code {
                language,
                text,
                highlight: Highlight::Tokens(lines),
            } = unit
            {
                let rebuilt = lines.iter().map(|l| l.text()).collect::<Vec<_>>().join("\n");
                assert_eq!(rebuilt, text, "{} ({language})", post.slug);
            }
        }
    }
}

#[rstest]
fn every_bundled_language_has_a_grammar(catalog: Catalog) {
    let plain: Vec<_> = catalog
        .iter()
        .flat_map(|post| render(&post.content))
        .filter_map(|unit| match unit {
            RenderUnit::Code {
                language,
                highlight: Highlight::Plain,
                ..
            } => Some(language),
            _ => None,
        })
        .collect();
    assert!(plain.is_empty(), "unhighlighted languages: {plain:?}");
}
