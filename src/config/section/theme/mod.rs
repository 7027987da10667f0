//! `[theme]` section configuration.
//!
//! Contains metadata tags, navbar, footer and code highlighting.
//!
//! # Example
//!
//! ```toml
//! [[theme.metadata]]
//! name = "keywords"
//! content = "docs, tutorials"
//!
//! [theme.navbar]
//! title = "Magniv"
//!
//! [theme.footer]
//! style = "dark"
//!
//! [theme.code]
//! light = "github"
//! dark = "dracula"
//! ```

mod code;
mod footer;
mod navbar;

pub use code::{CodeTheme, CodeThemeConfig};
pub use footer::{FooterConfig, FooterItem, FooterLinkGroup, FooterStyle, LinkTarget};
pub use navbar::{LogoConfig, NavItem, NavPosition, NavbarConfig};

use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;

/// Theme section configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeSectionConfig {
    /// Extra `<meta>` tags.
    pub metadata: Vec<MetaTag>,

    pub navbar: NavbarConfig,

    pub footer: FooterConfig,

    /// Syntax highlighting themes.
    pub code: CodeThemeConfig,
}

crate::config_fields!(ThemeSectionConfig => ThemeFields, "theme" { metadata, navbar, footer, code });

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetaTag {
    pub name: String,
    pub content: String,
}

impl ThemeSectionConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for (i, tag) in self.metadata.iter().enumerate() {
            if tag.name.trim().is_empty() {
                diag.error(
                    Self::FIELDS.metadata.index(i).join("name"),
                    "required field is missing or empty",
                );
            }
        }

        self.navbar.validate(diag);
        self.footer.validate(diag);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_metadata() {
        let config = test_parse_config(
            "[[theme.metadata]]\nname = \"keywords\"\ncontent = \"docs, cron\"",
        );
        assert_eq!(
            config.theme.metadata,
            [MetaTag {
                name: "keywords".into(),
                content: "docs, cron".into()
            }]
        );
    }

    #[test]
    fn test_empty_meta_name() {
        let theme = ThemeSectionConfig {
            metadata: vec![MetaTag {
                name: String::new(),
                content: "x".into(),
            }],
            navbar: NavbarConfig {
                title: "Docs".into(),
                ..NavbarConfig::default()
            },
            ..ThemeSectionConfig::default()
        };
        let mut diag = ConfigDiagnostics::new();
        theme.validate(&mut diag);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "theme.metadata[0].name");
    }
}
