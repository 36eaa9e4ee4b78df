use crate::catalog::Post;

/// Who the site belongs to; used to build page titles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteInfo {
    pub author: String,
    pub role: String,
}

impl SiteInfo {
    pub fn new(author: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            role: role.into(),
        }
    }

    /// `"{author} - {role}"`, the suffix every page title shares
    pub fn byline(&self) -> String {
        format!("{} - {}", self.author, self.role)
    }
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self::new("Dipesh Thakur", "Cybersecurity Specialist")
    }
}

/// Document head metadata for a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub keywords: String,
}

impl PageMeta {
    pub fn for_blog(site: &SiteInfo) -> Self {
        Self {
            title: format!("Blog | {}", site.byline()),
            description:
                "Deep dives into cybersecurity, penetration testing, and security research."
                    .to_string(),
            keywords:
                "cybersecurity, blog, penetration testing, security research, vulnerability analysis"
                    .to_string(),
        }
    }

    pub fn for_post(post: &Post, site: &SiteInfo) -> Self {
        Self {
            title: format!("{} | {}", post.title, site.byline()),
            description: post.excerpt.clone(),
            keywords: post.tags.join(", "),
        }
    }

    pub fn for_home(site: &SiteInfo) -> Self {
        Self {
            title: site.byline(),
            description: format!("{}, {}", site.author, site.role),
            keywords: "cybersecurity, security research, portfolio".to_string(),
        }
    }
}
