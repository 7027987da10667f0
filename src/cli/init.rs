//! Site initialization.
//!
//! Writes a commented starter `docsite.toml`.

use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

use crate::config::{CONFIG_FILE, SiteConfig};
use crate::log;

/// Starter configuration, valid as written.
pub const CONFIG_TEMPLATE: &str = r#"# docsite configuration file

[site]
title = "My Project"
tagline = "Documentation for My Project"
url = "https://docs.example.io"        # origin only, no path
base_url = "/"                         # path the site is served under
favicon = "img/favicon.ico"
organization_name = "my-org"           # usually your GitHub org/user name
project_name = "my-project"            # usually your repo name
on_broken_links = "throw"              # ignore | warn | throw
on_broken_markdown_links = "warn"      # ignore | warn | throw

[presets.classic.docs]
path = "docs"
sidebar_path = "sidebars.js"
route_base_path = "/"

[presets.classic.theme]
custom_css = "src/css/custom.css"

# [presets.classic.analytics]
# tracking_id = "G-XXXXXXXXXX"
# anonymize_ip = true

[theme.navbar]
title = "My Project"
logo = { alt = "My Project Logo", src = "img/logo.svg" }

[[theme.navbar.items]]
type = "doc"
doc_id = "intro"
label = "Docs"
position = "left"

[[theme.navbar.items]]
type = "link"
href = "https://github.com/my-org/my-project"
label = "GitHub"
position = "right"

[theme.footer]
style = "dark"
copyright = "Copyright © {year} My Project"

[[theme.footer.links]]
title = "Docs"
items = [{ label = "Getting Started", to = "/" }]

[[theme.footer.links]]
title = "More"
items = [{ label = "GitHub", href = "https://github.com/my-org/my-project" }]

[theme.code]
light = "github"
dark = "dracula"

# Profiles are merged over everything above with `docsite -p <name> ...`.
# [profiles.staging.site]
# url = "https://staging.docs.example.io"
"#;

/// Write the starter config into `root`, refusing to overwrite.
pub fn new_site(root: &Path, dry_run: bool) -> Result<()> {
    if dry_run {
        print!("{CONFIG_TEMPLATE}");
        return Ok(());
    }

    let path = root.join(CONFIG_FILE);
    if path.exists() {
        bail!("'{}' already exists", path.display());
    }

    fs::create_dir_all(root)
        .with_context(|| format!("Failed to create directory '{}'", root.display()))?;
    fs::write(&path, CONFIG_TEMPLATE)
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;

    log!("init"; "wrote {}", path.display());
    Ok(())
}

/// Parse the template; used to keep it in sync with the config schema.
pub fn parse_template() -> Result<SiteConfig> {
    let (config, ignored) = SiteConfig::parse(CONFIG_TEMPLATE, None)?;
    if !ignored.is_empty() {
        bail!("template has unknown fields: {}", ignored.join(", "));
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_template_is_valid() {
        let config = parse_template().unwrap();
        let diag = config.diagnose();
        assert!(!diag.has_errors(), "{diag}");
        assert!(diag.warnings().is_empty());
    }

    #[test]
    fn test_write_config() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("site");
        new_site(&root, false).unwrap();

        let content = fs::read_to_string(root.join(CONFIG_FILE)).unwrap();
        assert!(content.contains("[site]"));
        assert!(content.contains("[theme.navbar]"));
    }

    #[test]
    fn test_existing_config_not_overwritten() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE);
        fs::write(&path, "custom content").unwrap();

        assert!(new_site(temp.path(), false).is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "custom content");
    }
}
