//! `[theme.navbar]` configuration.
//!
//! # Example
//!
//! ```toml
//! [theme.navbar]
//! title = "Magniv"
//! logo = { alt = "Magniv Logo", src = "img/logo.png" }
//!
//! [[theme.navbar.items]]
//! type = "doc"
//! doc_id = "documentation/index"
//! label = "Documentation"
//!
//! [[theme.navbar.items]]
//! type = "link"
//! href = "https://github.com/MagnivOrg"
//! label = "GitHub"
//! position = "right"
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::ConfigDiagnostics;
use crate::config::section::{check_absolute_url, check_relative_path};

/// Top navigation bar.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavbarConfig {
    /// Text shown next to the logo.
    pub title: String,

    pub logo: Option<LogoConfig>,

    /// Entries in insertion order.
    pub items: Vec<NavItem>,
}

crate::config_fields!(NavbarConfig => NavbarFields, "theme.navbar" { title, logo, items });

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogoConfig {
    pub alt: String,
    pub src: PathBuf,
}

/// A navbar entry.
///
/// Deserialized through [`RawNavItem`] so unknown keys inside an item are
/// reported like any other unknown field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase", try_from = "RawNavItem")]
pub enum NavItem {
    /// Link to a documentation page by its doc ID.
    Doc {
        doc_id: String,
        label: String,
        #[serde(default)]
        position: NavPosition,
    },
    /// Link to an absolute URL.
    Link {
        href: String,
        label: String,
        #[serde(default)]
        position: NavPosition,
    },
}

#[derive(Deserialize)]
#[serde(rename_all = "lowercase")]
enum NavItemKind {
    Doc,
    Link,
}

/// Flat on-disk form of [`NavItem`].
#[derive(Deserialize)]
struct RawNavItem {
    #[serde(rename = "type")]
    kind: NavItemKind,
    label: String,
    #[serde(default)]
    position: NavPosition,
    doc_id: Option<String>,
    href: Option<String>,
}

impl TryFrom<RawNavItem> for NavItem {
    type Error = String;

    fn try_from(raw: RawNavItem) -> Result<Self, Self::Error> {
        let RawNavItem {
            kind,
            label,
            position,
            doc_id,
            href,
        } = raw;
        match (kind, doc_id, href) {
            (NavItemKind::Doc, Some(doc_id), None) => Ok(Self::Doc {
                doc_id,
                label,
                position,
            }),
            (NavItemKind::Link, None, Some(href)) => Ok(Self::Link {
                href,
                label,
                position,
            }),
            (NavItemKind::Doc, _, Some(_)) => {
                Err("`href` is not allowed on a `doc` item".to_string())
            }
            (NavItemKind::Link, Some(_), _) => {
                Err("`doc_id` is not allowed on a `link` item".to_string())
            }
            (NavItemKind::Doc, None, None) => Err("missing field `doc_id`".to_string()),
            (NavItemKind::Link, None, None) => Err("missing field `href`".to_string()),
        }
    }
}

impl NavItem {
    pub fn label(&self) -> &str {
        match self {
            Self::Doc { label, .. } | Self::Link { label, .. } => label,
        }
    }

    pub const fn position(&self) -> NavPosition {
        match self {
            Self::Doc { position, .. } | Self::Link { position, .. } => *position,
        }
    }

    /// The doc ID, for doc links.
    pub fn doc_id(&self) -> Option<&str> {
        match self {
            Self::Doc { doc_id, .. } => Some(doc_id),
            Self::Link { .. } => None,
        }
    }
}

/// Side of the navbar an item is rendered on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavPosition {
    #[default]
    Left,
    Right,
}

impl NavPosition {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl NavbarConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.title.trim().is_empty() {
            diag.error(Self::FIELDS.title, "required field is missing or empty");
        }

        if let Some(logo) = &self.logo {
            if logo.alt.trim().is_empty() {
                diag.error(Self::FIELDS.logo.join("alt"), "required field is missing or empty");
            }
            check_relative_path(&logo.src, Self::FIELDS.logo.join("src"), diag);
        }

        for (i, item) in self.items.iter().enumerate() {
            let field = Self::FIELDS.items.index(i);
            if item.label().trim().is_empty() {
                diag.error(field.join("label"), "required field is missing or empty");
            }
            match item {
                NavItem::Doc { doc_id, .. } => {
                    if doc_id.trim().is_empty() {
                        diag.error(field.join("doc_id"), "required field is missing or empty");
                    }
                }
                NavItem::Link { href, .. } => check_absolute_url(href, field.join("href"), diag),
            }
        }
    }

    /// Items on one side, in insertion order.
    pub fn items_at(&self, position: NavPosition) -> impl Iterator<Item = &NavItem> {
        self.items.iter().filter(move |item| item.position() == position)
    }
}
