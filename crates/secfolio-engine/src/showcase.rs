//! Static landing-page showcase: headline stats, certifications and disclosed advisories.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Critical,
    High,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::High => "High",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::Critical => "severity-critical",
            Self::High => "severity-high",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A headline number, e.g. `"300+"` vulnerabilities found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Certification {
    /// Short name, e.g. `"OSCP"`
    pub title: &'static str,
    pub full_name: &'static str,
    /// Year obtained
    pub date: &'static str,
    pub description: &'static str,
}

/// A disclosed vulnerability report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Advisory {
    pub severity: Severity,
    pub platform: &'static str,
    pub bounty: &'static str,
    pub description: &'static str,
    pub impact: &'static str,
    pub status: &'static str,
    pub date: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_display_and_class() {
        assert_eq!(Severity::Critical.to_string(), "Critical");
        assert_eq!(Severity::High.css_class(), "severity-high");
        assert_ne!(Severity::Critical.css_class(), Severity::High.css_class());
    }
}
