//! Configuration section definitions.
//!
//! Each module corresponds to a section in `docsite.toml`:
//!
//! | Module    | TOML Section         | Purpose                              |
//! |-----------|----------------------|--------------------------------------|
//! | `site`    | `[site]`             | Identity, url/base_url, link policy  |
//! | `preset`  | `[presets.<name>]`   | Docs, theme and analytics options    |
//! | `theme`   | `[theme]`            | Metadata, navbar, footer, code theme |

mod preset;
mod site;
pub mod theme;

pub use preset::{
    AnalyticsOptions, DocsOptions, PresetConfig, PresetsConfig, ThemeOptions, validate_presets,
};
pub use site::{LinkPolicy, SiteInfoConfig};
pub use theme::ThemeSectionConfig;

use std::path::Path;

use crate::config::{ConfigDiagnostics, FieldPath};

/// File references are resolved by the generator against the project root.
pub(crate) fn check_relative_path(path: &Path, field: FieldPath, diag: &mut ConfigDiagnostics) {
    if path.is_absolute() || path.has_root() {
        diag.error_with_hint(
            field,
            format!("path '{}' must be relative to the project root", path.display()),
            "remove the leading '/'",
        );
    }
}

/// Schemes accepted for external links.
pub(crate) const LINK_SCHEMES: &[&str] = &["http", "https", "mailto"];

/// External links must be absolute URLs with a scheme from [`LINK_SCHEMES`].
pub(crate) fn check_absolute_url(href: &str, field: FieldPath, diag: &mut ConfigDiagnostics) {
    match url::Url::parse(href) {
        Ok(parsed) if LINK_SCHEMES.contains(&parsed.scheme()) => {}
        Ok(parsed) => diag.error(
            field,
            format!("scheme '{}' not supported in '{href}'", parsed.scheme()),
        ),
        Err(e) => diag.error_with_hint(
            field,
            format!("'{href}' is not an absolute URL: {e}"),
            "use `to` for routes on this site",
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_relative_path() {
        let mut diag = ConfigDiagnostics::new();
        check_relative_path(Path::new("img/logo.png"), FieldPath::new("a"), &mut diag);
        assert!(!diag.has_errors());
        check_relative_path(Path::new("/img/logo.png"), FieldPath::new("b"), &mut diag);
        assert_eq!(diag.errors()[0].field.as_str(), "b");
    }

    #[test]
    fn test_check_absolute_url() {
        let mut diag = ConfigDiagnostics::new();
        check_absolute_url("https://github.com/MagnivOrg", FieldPath::new("a"), &mut diag);
        check_absolute_url("mailto:team@example.io", FieldPath::new("a"), &mut diag);
        assert!(!diag.has_errors());

        check_absolute_url("/faq", FieldPath::new("b"), &mut diag);
        check_absolute_url("ftp://example.io", FieldPath::new("c"), &mut diag);
        let fields: Vec<_> = diag.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, ["b", "c"]);
    }
}
