//! `[presets.<name>]` configuration.
//!
//! A preset is a named bundle of generator options applied together.
//!
//! # Example
//!
//! ```toml
//! [presets.classic.docs]
//! sidebar_path = "sidebars.js"
//! route_base_path = "/"
//!
//! [presets.classic.theme]
//! custom_css = "src/css/custom.css"
//!
//! [presets.classic.analytics]
//! tracking_id = "G-XXXXXXXXXX"
//! anonymize_ip = true
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

use super::check_relative_path;
use crate::config::{ConfigDiagnostics, FieldPath};

/// All presets, keyed by preset name.
pub type PresetsConfig = BTreeMap<String, PresetConfig>;

const PRESETS: FieldPath = FieldPath::new("presets");

/// One preset bundle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresetConfig {
    /// Docs plugin options.
    pub docs: DocsOptions,

    /// Theme options.
    pub theme: ThemeOptions,

    /// Analytics (gtag) options, omitted when the site has no tracking.
    pub analytics: Option<AnalyticsOptions>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocsOptions {
    /// Docs content directory (relative to the project root).
    pub path: PathBuf,

    /// Sidebar definition file.
    pub sidebar_path: Option<PathBuf>,

    /// URL route the docs are mounted under.
    pub route_base_path: String,
}

impl Default for DocsOptions {
    fn default() -> Self {
        Self {
            path: PathBuf::from("docs"),
            sidebar_path: None,
            route_base_path: "docs".into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeOptions {
    /// Custom stylesheet.
    pub custom_css: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsOptions {
    pub tracking_id: String,

    #[serde(default = "default_anonymize_ip")]
    pub anonymize_ip: bool,
}

const fn default_anonymize_ip() -> bool {
    true
}

impl DocsOptions {
    /// Route base path as a URL path segment without surrounding slashes.
    ///
    /// `"/"` and `""` both mean the docs are served at the site root.
    pub fn route_segment(&self) -> &str {
        self.route_base_path.trim_matches('/')
    }
}

impl PresetConfig {
    pub fn validate(&self, name: &str, diag: &mut ConfigDiagnostics) {
        let field = PRESETS.join(name);

        if self.docs.path.as_os_str().is_empty() {
            diag.error(field.join("docs.path"), "docs directory must not be empty");
        } else {
            check_relative_path(&self.docs.path, field.join("docs.path"), diag);
        }

        if let Some(sidebar) = &self.docs.sidebar_path {
            check_relative_path(sidebar, field.join("docs.sidebar_path"), diag);
        }

        if self.docs.route_base_path.contains(['?', '#', ' ']) {
            diag.error(
                field.join("docs.route_base_path"),
                format!("'{}' is not a valid route", self.docs.route_base_path),
            );
        }

        if let Some(css) = &self.theme.custom_css {
            check_relative_path(css, field.join("theme.custom_css"), diag);
        }

        if let Some(analytics) = &self.analytics
            && analytics.tracking_id.trim().is_empty()
        {
            diag.error_with_hint(
                field.join("analytics.tracking_id"),
                "required field is missing or empty",
                format!("remove [{}.analytics] to disable tracking", field.as_str()),
            );
        }
    }
}

/// Validate the preset table as a whole.
pub fn validate_presets(presets: &PresetsConfig, diag: &mut ConfigDiagnostics) {
    if presets.is_empty() {
        diag.error_with_hint(
            PRESETS,
            "at least one preset is required",
            "add a [presets.classic.docs] section",
        );
    }

    for (name, preset) in presets {
        preset.validate(name, diag);
    }
}
