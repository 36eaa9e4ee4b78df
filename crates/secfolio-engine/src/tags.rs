use crate::catalog::Catalog;
use std::collections::BTreeSet;

/// Every tag used in the catalog, deduplicated and sorted.
///
/// Ordering is ordinal (byte-wise, case-sensitive), so `"AWS"` sorts before
/// `"Architecture"` and `"OAuth"` and `"oauth"` are distinct entries.
/// Always derived from the catalog passed in; nothing is cached.
pub fn all_tags(catalog: &Catalog) -> Vec<String> {
    catalog
        .iter()
        .flat_map(|post| post.tags.iter().map(String::as_str))
        .collect::<BTreeSet<&str>>()
        .into_iter()
        .map(str::to_owned)
        .collect()
}
