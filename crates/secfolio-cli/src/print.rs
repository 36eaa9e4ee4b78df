use std::io::Write;

use anyhow::Result;
use log::warn;
use secfolio_engine::{Catalog, FilterState, Resolution, all_tags, resolve};

use crate::text::{plain_list, plain_post};

/// What `--print` should write
pub struct PrintRequest<'a> {
    pub filter: &'a FilterState,
    pub post: Option<&'a str>,
    pub tags_only: bool,
    pub page_size: Option<usize>,
}

/// Write the requested view as plain text. An unknown post slug falls back
/// to the filtered list.
pub fn print(catalog: &Catalog, request: &PrintRequest<'_>, out: &mut impl Write) -> Result<()> {
    if request.tags_only {
        for tag in all_tags(catalog) {
            writeln!(out, "{tag}")?;
        }
        return Ok(());
    }

    if let Some(slug) = request.post {
        match resolve(catalog, slug) {
            Resolution::Found(post) => {
                out.write_all(plain_post(post).as_bytes())?;
                return Ok(());
            }
            Resolution::NotFound => warn!("No post with slug '{slug}', showing the blog list"),
        }
    }

    let posts = request.filter.apply(catalog);
    out.write_all(plain_list(&posts, request.page_size).as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use secfolio_engine::data;

    fn run(request: &PrintRequest<'_>) -> String {
        let mut out = Vec::new();
        print(&data::bundled(), request, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_print_tags() {
        let filter = FilterState::new();
        let out = run(&PrintRequest {
            filter: &filter,
            post: None,
            tags_only: true,
            page_size: None,
        });

        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 16);
        assert_eq!(lines.first(), Some(&"API Security"));
        assert_eq!(lines.last(), Some(&"Zero-Day"));
    }

    #[test]
    fn test_print_known_post() {
        let filter = FilterState::new();
        let out = run(&PrintRequest {
            filter: &filter,
            post: Some("web3-security"),
            tags_only: false,
            page_size: None,
        });

        assert!(out.starts_with("Web3 Security: Smart Contract Vulnerabilities and Auditing\n"));
        assert!(out.contains("```solidity\n"));
    }

    #[test]
    fn test_print_unknown_post_falls_back_to_list() {
        let filter = FilterState::new();
        let out = run(&PrintRequest {
            filter: &filter,
            post: Some("does-not-exist"),
            tags_only: false,
            page_size: None,
        });

        assert!(out.contains("/blog/oauth2-vulnerability-analysis"));
        assert!(out.contains("/blog/cloud-security-architecture"));
    }

    #[rstest]
    #[case("kubernetes", None, "/blog/kubernetes-security-hardening")]
    #[case("", Some("Web3"), "/blog/web3-security")]
    #[case("zzz", None, "No posts match.")]
    fn test_print_filtered_list(
        #[case] query: &str,
        #[case] tag: Option<&str>,
        #[case] expected: &str,
    ) {
        let mut filter = FilterState::new();
        filter.set_query(query);
        if let Some(tag) = tag {
            filter.toggle_tag(tag);
        }

        let out = run(&PrintRequest {
            filter: &filter,
            post: None,
            tags_only: false,
            page_size: None,
        });

        assert!(out.contains(expected), "{out}");
        assert!(!out.contains("/blog/api-security-testing"));
    }
}
