//! `[site]` section configuration.
//!
//! Site identity plus the broken-link policies handed to the generator.
//!
//! # Example
//!
//! ```toml
//! [site]
//! title = "Magniv Documentation"
//! tagline = "Getting Started With Magniv"
//! url = "https://docs.magniv.io"
//! base_url = "/"
//! favicon = "img/logo.png"
//! organization_name = "MagnivOrg"
//! project_name = "documentation"
//! on_broken_links = "ignore"
//! on_broken_markdown_links = "warn"
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::check_relative_path;
use crate::config::ConfigDiagnostics;

/// Site identity and link policies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfoConfig {
    /// Site title.
    pub title: String,

    /// One-line tagline.
    pub tagline: String,

    /// Canonical origin, e.g. "https://docs.example.io".
    pub url: String,

    /// Path the site is served under, starting and ending with `/`.
    pub base_url: String,

    /// Favicon path (relative to the project root).
    pub favicon: Option<PathBuf>,

    /// Owner of the source repository (usually the GitHub org/user name).
    pub organization_name: String,

    /// Repository name.
    pub project_name: String,

    /// What the generator does with a link to a missing page.
    pub on_broken_links: LinkPolicy,

    /// What the generator does with a broken relative markdown link.
    pub on_broken_markdown_links: LinkPolicy,
}

crate::config_fields!(SiteInfoConfig => SiteInfoFields, "site" {
    title,
    tagline,
    url,
    base_url,
    favicon,
    organization_name,
    project_name,
    on_broken_links,
    on_broken_markdown_links,
});

impl Default for SiteInfoConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            tagline: String::new(),
            url: String::new(),
            base_url: "/".into(),
            favicon: None,
            organization_name: String::new(),
            project_name: String::new(),
            on_broken_links: LinkPolicy::Throw,
            on_broken_markdown_links: LinkPolicy::Warn,
        }
    }
}

impl SiteInfoConfig {
    /// Validate site identity.
    ///
    /// # Checks
    /// - `title`, `organization_name`, `project_name` are non-empty
    /// - `url` is an http(s) origin with a host and no path
    /// - `base_url` starts and ends with `/`
    /// - `favicon` is relative
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let required = [
            (Self::FIELDS.title, &self.title),
            (Self::FIELDS.organization_name, &self.organization_name),
            (Self::FIELDS.project_name, &self.project_name),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                diag.error(field, "required field is missing or empty");
            }
        }

        self.validate_url(diag);

        self.validate_base_url(diag);

        if let Some(favicon) = &self.favicon {
            check_relative_path(favicon, Self::FIELDS.favicon, diag);
        }
    }

    /// `base_url` is a plain path: `/` or `/segment/.../`.
    fn validate_base_url(&self, diag: &mut ConfigDiagnostics) {
        let base = &self.base_url;
        if !base.starts_with('/') || !base.ends_with('/') {
            diag.error_with_hint(
                Self::FIELDS.base_url,
                format!("'{base}' must start and end with '/'"),
                "use \"/\" for a site served at the domain root, or e.g. \"/docs/\"",
            );
        } else if base.starts_with("//") {
            // Url::join reads "//host/" as scheme-relative
            diag.error_with_hint(
                Self::FIELDS.base_url,
                format!("'{base}' would replace the host of {}", Self::FIELDS.url),
                "use a single leading '/'",
            );
        } else if let Some(c) = base.chars().find(|c| matches!(c, '\\' | '?' | '#')) {
            diag.error(
                Self::FIELDS.base_url,
                format!("'{base}' must be a plain path, found '{c}'"),
            );
        }
    }

    fn validate_url(&self, diag: &mut ConfigDiagnostics) {
        if self.url.trim().is_empty() {
            diag.error_with_hint(
                Self::FIELDS.url,
                "required field is missing or empty",
                format!("set {}, e.g.: \"https://docs.example.io\"", Self::FIELDS.url),
            );
            return;
        }

        match url::Url::parse(&self.url) {
            Ok(parsed) => {
                if !matches!(parsed.scheme(), "http" | "https") {
                    diag.error_with_hint(
                        Self::FIELDS.url,
                        format!(
                            "scheme '{}' not supported, must be http or https",
                            parsed.scheme()
                        ),
                        "use format like https://docs.example.io",
                    );
                }
                if parsed.host_str().is_none() {
                    diag.error_with_hint(
                        Self::FIELDS.url,
                        "URL must have a valid host",
                        "use format like https://docs.example.io",
                    );
                }
                if parsed.path() != "/" {
                    diag.error_with_hint(
                        Self::FIELDS.url,
                        format!("URL must not contain a path, found '{}'", parsed.path()),
                        format!("move the path into {}", Self::FIELDS.base_url),
                    );
                }
            }
            Err(e) => {
                diag.error_with_hint(
                    Self::FIELDS.url,
                    format!("invalid URL: {}", e),
                    "use format like https://docs.example.io",
                );
            }
        }
    }
}

/// How the generator treats a dangling link.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkPolicy {
    /// Silently ignore.
    Ignore,
    /// Report and continue.
    Warn,
    /// Fail the build.
    #[default]
    Throw,
}

impl LinkPolicy {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ignore => "ignore",
            Self::Warn => "warn",
            Self::Throw => "throw",
        }
    }
}
