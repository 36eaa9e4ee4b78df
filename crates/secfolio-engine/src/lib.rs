pub mod catalog;
pub mod data;
pub mod filter;
pub mod highlight;
pub mod meta;
pub mod render;
pub mod router;
pub mod showcase;
pub mod tags;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use catalog::{Catalog, CatalogError, ContentBlock, Post};
pub use filter::{FilterState, filter};
pub use highlight::{Line, Token, TokenKind};
pub use meta::{PageMeta, SiteInfo};
pub use render::{HeadingLevel, Highlight, RenderUnit, render};
pub use router::{Resolution, Route, resolve};
pub use showcase::{Advisory, Certification, Severity, Stat};
pub use tags::all_tags;
