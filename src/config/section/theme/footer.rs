//! `[theme.footer]` configuration.
//!
//! # Example
//!
//! ```toml
//! [theme.footer]
//! style = "dark"
//! copyright = "Copyright © {year} Magniv, Inc."
//!
//! [[theme.footer.links]]
//! title = "Docs"
//! items = [
//!     { label = "Getting Started", to = "/" },
//!     { label = "GitHub", href = "https://github.com/MagnivOrg" },
//! ]
//! ```

use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;
use crate::config::section::{LINK_SCHEMES, check_absolute_url};

/// Placeholder in `copyright` replaced by the current year at load time.
pub const YEAR_PLACEHOLDER: &str = "{year}";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterConfig {
    pub style: FooterStyle,

    /// Link groups in insertion order.
    pub links: Vec<FooterLinkGroup>,

    /// Copyright line; may contain `{year}`.
    pub copyright: String,
}

crate::config_fields!(FooterConfig => FooterFields, "theme.footer" { style, links, copyright });

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FooterStyle {
    #[default]
    Dark,
    Light,
}

impl FooterStyle {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FooterLinkGroup {
    pub title: String,
    #[serde(default)]
    pub items: Vec<FooterItem>,
}

/// A footer entry; exactly one of `to` and `href` is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FooterItem {
    pub label: String,

    /// Internal route, e.g. "/tutorials".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,

    /// Absolute URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

/// Where a link points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget<'a> {
    /// Route under the site root.
    Route(&'a str),
    /// Absolute URL, used as-is.
    External(&'a str),
    /// Documentation page by doc ID.
    Doc(&'a str),
}

impl FooterItem {
    /// Resolved target, or `None` when the item sets both or neither field.
    pub fn target(&self) -> Option<LinkTarget<'_>> {
        match (&self.to, &self.href) {
            (Some(to), None) if is_absolute_url(to) => Some(LinkTarget::External(to)),
            (Some(to), None) => Some(LinkTarget::Route(to)),
            (None, Some(href)) => Some(LinkTarget::External(href)),
            _ => None,
        }
    }
}

fn is_absolute_url(s: &str) -> bool {
    url::Url::parse(s).is_ok_and(|u| LINK_SCHEMES.contains(&u.scheme()))
}

impl FooterConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for (i, group) in self.links.iter().enumerate() {
            let group_field = Self::FIELDS.links.index(i);
            if group.title.trim().is_empty() {
                diag.error(group_field.join("title"), "required field is missing or empty");
            }

            for (j, item) in group.items.iter().enumerate() {
                let field = group_field.join("items").index(j);
                if item.label.trim().is_empty() {
                    diag.error(field.join("label"), "required field is missing or empty");
                }

                match (&item.to, &item.href) {
                    (Some(_), Some(_)) => diag.error_with_hint(
                        field.clone(),
                        "`to` and `href` are mutually exclusive",
                        "use `to` for routes on this site and `href` for external URLs",
                    ),
                    (None, None) => diag.error(field.clone(), "one of `to` or `href` is required"),
                    (Some(to), None) if is_absolute_url(to) => diag.warn(
                        field.join("to"),
                        format!("'{to}' is an absolute URL, prefer `href`"),
                    ),
                    (Some(to), None) if !to.starts_with('/') => diag.error_with_hint(
                        field.join("to"),
                        format!("route '{to}' must start with '/'"),
                        format!("use \"/{to}\""),
                    ),
                    (Some(_), None) => {}
                    (None, Some(href)) => check_absolute_url(href, field.join("href"), diag),
                }
            }
        }

        if self.copyright.matches(YEAR_PLACEHOLDER).count() > 1 {
            diag.warn(
                Self::FIELDS.copyright,
                format!("{YEAR_PLACEHOLDER} appears more than once"),
            );
        }
    }

    /// Expand `{year}` in the copyright line.
    pub fn expand_year(&mut self, year: u16) {
        if self.copyright.contains(YEAR_PLACEHOLDER) {
            self.copyright = self.copyright.replace(YEAR_PLACEHOLDER, &year.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    const FOOTER: &str = r#"[theme.footer]
style = "dark"
copyright = "Copyright © {year} Magniv, Inc."

[[theme.footer.links]]
title = "Docs"
items = [
    { label = "Getting Started", to = "/" },
    { label = "Tutorials", to = "/tutorials" },
]

[[theme.footer.links]]
title = "Community"
items = [{ label = "Twitter", href = "https://twitter.com/magnivApp" }]

[[theme.footer.links]]
title = "More"
items = [
    { label = "Blog", to = "https://blog.magniv.io" },
    { label = "GitHub", href = "https://github.com/MagnivOrg" },
]"#;

    #[test]
    fn test_groups_preserve_order() {
        let footer = test_parse_config(FOOTER).theme.footer;
        let titles: Vec<_> = footer.links.iter().map(|g| g.title.as_str()).collect();
        assert_eq!(titles, ["Docs", "Community", "More"]);
        assert_eq!(footer.links[0].items[1].label, "Tutorials");
    }

    #[test]
    fn test_targets() {
        let footer = test_parse_config(FOOTER).theme.footer;
        assert_eq!(
            footer.links[0].items[1].target(),
            Some(LinkTarget::Route("/tutorials"))
        );
        assert_eq!(
            footer.links[1].items[0].target(),
            Some(LinkTarget::External("https://twitter.com/magnivApp"))
        );
        // absolute URL under `to` is treated as external
        assert_eq!(
            footer.links[2].items[0].target(),
            Some(LinkTarget::External("https://blog.magniv.io"))
        );
    }

    #[test]
    fn test_absolute_to_is_a_warning() {
        let footer = test_parse_config(FOOTER).theme.footer;
        let mut diag = ConfigDiagnostics::new();
        footer.validate(&mut diag);
        assert!(!diag.has_errors());
        assert_eq!(
            diag.warnings()[0].field.as_str(),
            "theme.footer.links[2].items[0].to"
        );
    }

    #[test]
    fn test_exactly_one_target() {
        let both = FooterItem {
            label: "Both".into(),
            to: Some("/a".into()),
            href: Some("https://example.com".into()),
        };
        let neither = FooterItem {
            label: "Neither".into(),
            to: None,
            href: None,
        };
        assert_eq!(both.target(), None);
        assert_eq!(neither.target(), None);

        let footer = FooterConfig {
            links: vec![FooterLinkGroup {
                title: "Group".into(),
                items: vec![both, neither],
            }],
            ..FooterConfig::default()
        };
        let mut diag = ConfigDiagnostics::new();
        footer.validate(&mut diag);
        let fields: Vec<_> = diag.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            fields,
            ["theme.footer.links[0].items[0]", "theme.footer.links[0].items[1]"]
        );
    }

    #[test]
    fn test_relative_route_needs_slash() {
        let footer = FooterConfig {
            links: vec![FooterLinkGroup {
                title: "Docs".into(),
                items: vec![FooterItem {
                    label: "FAQ".into(),
                    to: Some("faq".into()),
                    href: None,
                }],
            }],
            ..FooterConfig::default()
        };
        let mut diag = ConfigDiagnostics::new();
        footer.validate(&mut diag);
        assert_eq!(
            diag.errors()[0].hint.as_deref(),
            Some("use \"/faq\"")
        );
    }

    #[test]
    fn test_script_url_in_to_rejected() {
        let item = FooterItem {
            label: "Run".into(),
            to: Some("javascript:alert(1)".into()),
            href: None,
        };
        assert_eq!(item.target(), Some(LinkTarget::Route("javascript:alert(1)")));

        let footer = FooterConfig {
            links: vec![FooterLinkGroup {
                title: "More".into(),
                items: vec![item],
            }],
            ..FooterConfig::default()
        };
        let mut diag = ConfigDiagnostics::new();
        footer.validate(&mut diag);
        assert!(diag.warnings().is_empty());
        assert_eq!(
            diag.errors()[0].field.as_str(),
            "theme.footer.links[0].items[0].to"
        );
    }

    #[test]
    fn test_expand_year() {
        let mut footer = test_parse_config(FOOTER).theme.footer;
        footer.expand_year(2026);
        assert_eq!(footer.copyright, "Copyright © 2026 Magniv, Inc.");

        // idempotent once expanded
        footer.expand_year(2030);
        assert_eq!(footer.copyright, "Copyright © 2026 Magniv, Inc.");
    }

    #[test]
    fn test_style_values() {
        let footer: FooterConfig = toml::from_str("style = \"light\"").unwrap();
        assert_eq!(footer.style, FooterStyle::Light);
        assert!(toml::from_str::<FooterConfig>("style = \"blue\"").is_err());
    }
}
