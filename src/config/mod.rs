//! Site configuration management for `docsite.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── site       # [site]
//! │   ├── preset     # [presets.<name>]
//! │   └── theme/     # [theme], navbar, footer, code
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! ├── profile        # [profiles.<name>] overlays
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section              | Purpose                                          |
//! |----------------------|--------------------------------------------------|
//! | `[site]`             | Title, tagline, url, base_url, link policies     |
//! | `[presets.<name>]`   | Docs dir, sidebar, custom CSS, analytics         |
//! | `[theme]`            | Meta tags, navbar, footer, code highlighting     |
//! | `[profiles.<name>]`  | Partial overrides merged over everything above   |

pub mod profile;
pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::{
    AnalyticsOptions, DocsOptions, LinkPolicy, PresetConfig, PresetsConfig, SiteInfoConfig,
    ThemeOptions, ThemeSectionConfig,
};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};

use crate::link::{LinkResolver, LinkTarget};
use crate::{debug, log};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use url::Url;

/// Default config filename
pub const CONFIG_FILE: &str = "docsite.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing docsite.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Profile merged into this config, if any (internal use only)
    #[serde(skip)]
    pub profile: Option<String>,

    /// Profiles declared in the file (internal use only)
    #[serde(skip)]
    pub profiles: Vec<String>,

    /// Site identity and link policies
    #[serde(default)]
    pub site: SiteInfoConfig,

    /// Preset bundles keyed by name
    #[serde(default)]
    pub presets: PresetsConfig,

    /// Navbar, footer, metadata and code themes
    #[serde(default)]
    pub theme: ThemeSectionConfig,
}

impl SiteConfig {
    /// Find `config_name` from `cwd` upward, then load it.
    pub fn locate_and_load(config_name: &Path, cwd: &Path, profile: Option<&str>) -> Result<Self> {
        let path = find_config_file(config_name, cwd).with_context(|| {
            format!(
                "config file '{}' not found. Run 'docsite init' to create one.",
                config_name.display()
            )
        })?;
        Self::load(&path, profile)
    }

    /// Load, finalize and validate the configuration at `path`.
    pub fn load(path: &Path, profile: Option<&str>) -> Result<Self> {
        let mut config = Self::from_path(path, profile)?;

        config.config_path = crate::utils::path::normalize_path(path);
        config.root = config
            .config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        config.finalize(crate::utils::date::current_year());

        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML string (no profile selected)
    pub fn from_str(content: &str) -> Result<Self> {
        let (config, _) = Self::parse(content, None)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path, profile: Option<&str>) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse(&content, profile)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, merging `profile` over the base and collecting
    /// any unknown fields.
    pub fn parse(content: &str, profile: Option<&str>) -> Result<(Self, Vec<String>)> {
        let doc: toml::Table = toml::from_str(content).map_err(ConfigError::Toml)?;
        let (doc, profiles) = profile::apply_profile(doc, profile)?;

        let mut ignored = Vec::new();
        let mut config: Self =
            serde_ignored::deserialize(toml::Value::Table(doc), |path: serde_ignored::Path| {
                ignored.push(path.to_string());
            })
            .map_err(ConfigError::Toml)?;

        config.profile = profile.map(str::to_string);
        config.profiles = profiles;

        if let Some(name) = profile {
            debug!("config"; "merged profile `{}`", name);
        }

        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Apply load-time substitutions.
    fn finalize(&mut self, year: u16) {
        self.theme.footer.expand_year(year);
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Join a path with the root directory.
    pub fn root_join(&self, path: impl AsRef<Path>) -> PathBuf {
        self.root.join(path)
    }

    /// `url` joined with `base_url`; the prefix of every absolute link.
    ///
    /// `https://docs.example.io` + `/` gives `https://docs.example.io/`.
    pub fn site_root(&self) -> Result<Url, url::ParseError> {
        Url::parse(&self.site.url)?.join(&self.site.base_url)
    }

    /// Absolute URL of a navbar or footer target.
    pub fn resolve(&self, target: LinkTarget<'_>) -> Result<Url> {
        LinkResolver::new(self)?.resolve(target)
    }

    /// Names of the profiles declared in the file, sorted.
    pub fn profiles(&self) -> &[String] {
        &self.profiles
    }

    /// The preset whose docs options drive doc links: `classic` if declared,
    /// otherwise the first by name.
    pub fn primary_preset(&self) -> Option<(&str, &PresetConfig)> {
        self.presets
            .get_key_value("classic")
            .or_else(|| self.presets.iter().next())
            .map(|(name, preset)| (name.as_str(), preset))
    }

    /// Docs options of the primary preset (defaults if none is declared).
    pub fn docs(&self) -> DocsOptions {
        self.primary_preset()
            .map(|(_, preset)| preset.docs.clone())
            .unwrap_or_default()
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate the configuration shape.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let diag = self.diagnose();

        diag.print_warnings();

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }

    /// Run every section check without printing anything.
    pub fn diagnose(&self) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();

        self.site.validate(&mut diag);
        section::validate_presets(&self.presets, &mut diag);
        self.theme.validate(&mut diag);

        // Only meaningful once url and base_url are individually valid
        if !diag.has_errors() {
            match (Url::parse(&self.site.url), self.site_root()) {
                (Ok(origin), Ok(root)) if origin.origin() != root.origin() => diag.error(
                    SiteInfoConfig::FIELDS.base_url,
                    format!("site root {root} is not on {}", origin.origin().ascii_serialization()),
                ),
                (_, Err(e)) => diag.error(
                    SiteInfoConfig::FIELDS.base_url,
                    format!("cannot combine url and base_url: {e}"),
                ),
                _ => {}
            }
        }

        diag
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config with the required `[site]` fields; `extra` is appended
/// inside `[site]` until it opens another table.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let config = format!(
        "[site]\ntitle = \"Test\"\nurl = \"https://docs.example.io\"\n\
         organization_name = \"TestOrg\"\nproject_name = \"docs\"\n{extra}"
    );
    let (parsed, ignored) = SiteConfig::parse(&config, None).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

/// A complete, valid configuration modelled on a real docs site.
#[cfg(test)]
pub const TEST_SITE: &str = r#"
[site]
title = "Magniv Documentation"
tagline = "Getting Started With Magniv"
url = "https://docs.magniv.io"
base_url = "/"
favicon = "img/logo.png"
organization_name = "MagnivOrg"
project_name = "documentation"
on_broken_links = "ignore"
on_broken_markdown_links = "warn"

[presets.classic.docs]
sidebar_path = "sidebars.js"
route_base_path = "/"

[presets.classic.theme]
custom_css = "src/css/custom.css"

[presets.classic.analytics]
tracking_id = "G-H75VMNQ5FL"
anonymize_ip = true

[[theme.metadata]]
name = "keywords"
content = "docs, tutorials, job orchestration"

[theme.navbar]
title = "Magniv"
logo = { alt = "Magniv Logo", src = "img/logo.png" }

[[theme.navbar.items]]
type = "doc"
doc_id = "documentation/index"
label = "Documentation"

[[theme.navbar.items]]
type = "doc"
doc_id = "tutorials/index"
label = "Tutorials"

[[theme.navbar.items]]
type = "link"
href = "https://github.com/MagnivOrg"
label = "GitHub"
position = "right"

[theme.footer]
style = "dark"
copyright = "Copyright © {year} Magniv, Inc."

[[theme.footer.links]]
title = "Docs"
items = [
    { label = "Getting Started", to = "/" },
    { label = "Tutorials", to = "/tutorials" },
]

[[theme.footer.links]]
title = "More"
items = [
    { label = "Blog", href = "https://blog.magniv.io" },
    { label = "GitHub", href = "https://github.com/MagnivOrg" },
]

[theme.code]
light = "github"
dark = "dracula"

[profiles.staging.site]
url = "https://staging.docs.magniv.io"

[profiles.staging.presets.classic.analytics]
tracking_id = "G-STAGING"
"#;

// ============================================================================
// tests
// ============================================================================
