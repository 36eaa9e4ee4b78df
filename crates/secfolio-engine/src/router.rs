use crate::catalog::{Catalog, Post};
use std::fmt;

/// Application routes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    /// `/`
    Home,
    /// `/blog`
    Blog,
    /// `/blog/:slug`
    Post(String),
}

impl Route {
    /// Parse an application path. Anything unrecognised falls back to [`Route::Home`].
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Self::Home,
            ["blog"] => Self::Blog,
            ["blog", slug] => Self::Post((*slug).to_string()),
            _ => {
                log::debug!("unknown path {path:?}, falling back to home");
                Self::Home
            }
        }
    }

    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Blog => "/blog".to_string(),
            Self::Post(slug) => format!("/blog/{slug}"),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Outcome of looking a slug up in the catalog.
///
/// `NotFound` is an ordinary outcome: the caller shows the blog list instead
/// of a detail page and says nothing to the reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'a> {
    Found(&'a Post),
    NotFound,
}

impl<'a> Resolution<'a> {
    pub fn post(self) -> Option<&'a Post> {
        match self {
            Self::Found(post) => Some(post),
            Self::NotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// The route to actually display: the post itself, or the blog list.
    pub fn or_redirect(&self) -> Route {
        match self {
            Self::Found(post) => Route::Post(post.slug.clone()),
            Self::NotFound => Route::Blog,
        }
    }
}

/// Exact-match slug lookup.
pub fn resolve<'a>(catalog: &'a Catalog, slug: &str) -> Resolution<'a> {
    match catalog.find_by_slug(slug) {
        Some(post) => Resolution::Found(post),
        None => {
            log::debug!("no post with slug {slug:?}, redirecting to the blog list");
            Resolution::NotFound
        }
    }
}

/// Resolve a route against the catalog, redirecting unknown posts to the list.
pub fn navigate(catalog: &Catalog, route: Route) -> Route {
    match route {
        Route::Post(slug) => resolve(catalog, &slug).or_redirect(),
        other => other,
    }
}
