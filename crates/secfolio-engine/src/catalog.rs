use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Duplicate slug in catalog: {0}")]
    DuplicateSlug(String),

    #[error("Slug must be lowercase kebab-case: {0:?}")]
    InvalidSlug(String),

    #[error("Post '{slug}' has an empty tag")]
    EmptyTag { slug: String },
}

/// One typed unit of a post body.
///
/// Serialized with an internal `type` tag: `{"type": "heading", "text": ..., "level": 2}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentBlock {
    Paragraph { text: String },
    Heading { text: String, level: u8 },
    Code { text: String, language: String },
}

impl ContentBlock {
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::Paragraph { text: text.into() }
    }

    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Self::Heading {
            text: text.into(),
            level,
        }
    }

    pub fn code(language: impl Into<String>, text: impl Into<String>) -> Self {
        Self::Code {
            text: text.into(),
            language: language.into(),
        }
    }
}

/// A blog post. The slug is its identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub slug: String,
    pub title: String,
    /// Display-formatted date, never parsed
    pub date: String,
    pub tags: Vec<String>,
    pub excerpt: String,
    pub content: Vec<ContentBlock>,
}

impl Post {
    /// Exact, case-sensitive tag membership
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// The fixed, ordered collection of posts.
///
/// Cheap to clone: all clones share one read-only allocation. Catalog order is
/// display order and is never re-sorted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    posts: Arc<[Post]>,
}

impl Catalog {
    /// Build a catalog, rejecting posts that break the catalog invariants.
    pub fn new(posts: Vec<Post>) -> Result<Self, CatalogError> {
        validate(&posts)?;
        Ok(Self::from_trusted(posts))
    }

    /// Build a catalog from data already known to be well-formed (bundled data).
    pub(crate) fn from_trusted(posts: Vec<Post>) -> Self {
        Self {
            posts: Arc::from(posts),
        }
    }

    pub fn empty() -> Self {
        Self::from_trusted(Vec::new())
    }

    /// Every post, in catalog order
    pub fn all(&self) -> &[Post] {
        &self.posts
    }

    pub fn find_by_slug(&self, slug: &str) -> Option<&Post> {
        self.posts.iter().find(|post| post.slug == slug)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Post> {
        self.posts.iter()
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::empty()
    }
}

fn validate(posts: &[Post]) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();

    for post in posts {
        if !is_valid_slug(&post.slug) {
            return Err(CatalogError::InvalidSlug(post.slug.clone()));
        }
        if !seen.insert(post.slug.as_str()) {
            return Err(CatalogError::DuplicateSlug(post.slug.clone()));
        }
        if post.tags.iter().any(|tag| tag.is_empty()) {
            return Err(CatalogError::EmptyTag {
                slug: post.slug.clone(),
            });
        }
    }

    Ok(())
}

/// Lowercase kebab-case: `[a-z0-9]+(-[a-z0-9]+)*`
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && !slug.contains("--")
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}
