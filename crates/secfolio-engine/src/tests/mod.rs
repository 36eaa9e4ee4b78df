//! Shared helpers for unit tests across the engine.

use crate::catalog::{Catalog, ContentBlock, Post};

/// A minimal post with a generated excerpt and a single paragraph body
pub fn post(slug: &str, title: &str, tags: &[&str]) -> Post {
    Post {
        slug: slug.to_string(),
        title: title.to_string(),
        date: "January 1, 2024".to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        excerpt: format!("About {title}"),
        content: vec![ContentBlock::paragraph(format!("Body of {title}"))],
    }
}

/// Same as [`post`] but with an explicit excerpt
pub fn post_with_excerpt(slug: &str, title: &str, excerpt: &str, tags: &[&str]) -> Post {
    Post {
        excerpt: excerpt.to_string(),
        ..post(slug, title, tags)
    }
}

pub fn catalog_of(posts: Vec<Post>) -> Catalog {
    Catalog::new(posts).unwrap()
}
