//! `docsite check`: validate the configuration and its doc references.

use anyhow::Result;

use crate::config::{ConfigDiagnostics, ConfigError, SiteConfig};
use crate::link::docs;
use crate::{debug, log, logger};

/// Run every check and summarize.
///
/// Shape errors already failed `SiteConfig::load`; this adds the doc ID
/// check governed by `site.on_broken_links`.
pub fn check_site(config: &SiteConfig, scan_docs: bool) -> Result<()> {
    let mut diag = ConfigDiagnostics::new();

    if scan_docs {
        let missing = docs::check_site(config, &mut diag);
        debug!("check"; "{} missing doc id(s), policy `{}`",
            missing, config.site.on_broken_links.as_str());
    }

    diag.print_warnings();
    if let Err(diag) = diag.into_result() {
        logger::status_error("config check failed", "");
        return Err(ConfigError::Diagnostics(diag).into());
    }

    let profile = config
        .profile
        .as_deref()
        .map(|p| format!(" (profile `{p}`)"))
        .unwrap_or_default();
    log!("check"; "{} navbar items, {} footer groups, {} preset(s)",
        config.theme.navbar.items.len(),
        config.theme.footer.links.len(),
        config.presets.len());
    logger::status_success(&format!("{} is valid{profile}", config.config_path.display()));
    Ok(())
}
