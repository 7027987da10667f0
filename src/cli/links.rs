//! `docsite links` and `docsite profiles`: human-readable listings.

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::config::SiteConfig;
use crate::link::LinkResolver;
use crate::log;

/// Print the site root, then every navbar/footer entry with its URL.
pub fn print_links(config: &SiteConfig) -> Result<()> {
    let resolver = LinkResolver::new(config)?;
    let links = resolver.resolve_all(config)?;

    log!("links"; "site root {}", resolver.root());

    let width = links.iter().map(|l| l.label.len()).max().unwrap_or(0);
    let mut group = "";
    for link in &links {
        if link.group != group {
            group = &link.group;
            println!("{}", group.bold());
        }
        println!("  {:width$}  {}", link.label, link.url.dimmed());
    }
    Ok(())
}

/// Print declared profile names, marking the selected one.
pub fn print_profiles(config: &SiteConfig) {
    if config.profiles().is_empty() {
        log!("profiles"; "no profiles declared in {}", config.config_path.display());
        return;
    }

    for name in config.profiles() {
        if config.profile.as_deref() == Some(name.as_str()) {
            println!("{} {}", "*".green(), name.bold());
        } else {
            println!("  {name}");
        }
    }
}
