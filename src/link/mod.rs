//! Absolute link resolution for navbar and footer entries.
//!
//! Every generated absolute link is the site root (`url` + `base_url`)
//! joined with a route, except external hrefs which pass through.
//!
//! | Target                 | Resolves to                                  |
//! |------------------------|----------------------------------------------|
//! | `to = "/tutorials"`    | `<root>tutorials`                            |
//! | `doc_id = "faq/index"` | `<root><route_base_path>/faq/`               |
//! | `href = "https://.."`  | unchanged                                    |

pub mod docs;

pub use crate::config::section::theme::LinkTarget;

use crate::config::SiteConfig;
use crate::config::section::theme::NavItem;
use anyhow::{Context, Result};
use url::Url;

/// Resolves link targets against one site root.
#[derive(Debug, Clone)]
pub struct LinkResolver {
    root: Url,
    /// Docs route base without surrounding slashes ("" = site root).
    docs_route: String,
}

/// One navbar/footer entry with its absolute URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLink {
    /// Where the entry lives, e.g. "navbar" or "footer/Docs".
    pub group: String,
    pub label: String,
    pub url: String,
}

impl LinkResolver {
    pub fn new(config: &SiteConfig) -> Result<Self> {
        let root = config.site_root().with_context(|| {
            format!(
                "cannot build site root from url '{}' and base_url '{}'",
                config.site.url, config.site.base_url
            )
        })?;
        Ok(Self {
            root,
            docs_route: config.docs().route_segment().to_string(),
        })
    }

    pub fn root(&self) -> &Url {
        &self.root
    }

    /// Absolute URL for a target.
    pub fn resolve(&self, target: LinkTarget<'_>) -> Result<Url> {
        match target {
            LinkTarget::External(href) => {
                Url::parse(href).with_context(|| format!("invalid external URL '{href}'"))
            }
            LinkTarget::Route(route) => self.join(route.trim_start_matches('/')),
            LinkTarget::Doc(doc_id) => {
                let page = doc_route(doc_id);
                if self.docs_route.is_empty() {
                    self.join(&page)
                } else {
                    self.join(&format!("{}/{page}", self.docs_route))
                }
            }
        }
    }

    fn join(&self, relative: &str) -> Result<Url> {
        self.root
            .join(relative)
            .with_context(|| format!("cannot join '{relative}' onto {}", self.root))
    }

    /// Resolve every navbar and footer entry, in display order.
    pub fn resolve_all(&self, config: &SiteConfig) -> Result<Vec<ResolvedLink>> {
        let mut links = Vec::new();

        for item in &config.theme.navbar.items {
            let target = match item {
                NavItem::Doc { doc_id, .. } => LinkTarget::Doc(doc_id),
                NavItem::Link { href, .. } => LinkTarget::External(href),
            };
            links.push(ResolvedLink {
                group: format!("navbar/{}", item.position().as_str()),
                label: item.label().to_string(),
                url: self.resolve(target)?.into(),
            });
        }

        for group in &config.theme.footer.links {
            for item in &group.items {
                let target = item.target().with_context(|| {
                    format!("footer item '{}' needs exactly one of `to` or `href`", item.label)
                })?;
                links.push(ResolvedLink {
                    group: format!("footer/{}", group.title),
                    label: item.label.clone(),
                    url: self.resolve(target)?.into(),
                });
            }
        }

        Ok(links)
    }
}

/// Route of a doc page: `index` documents map to their directory.
fn doc_route(doc_id: &str) -> String {
    let id = doc_id.trim_matches('/');
    if id == "index" {
        String::new()
    } else if let Some(dir) = id.strip_suffix("/index") {
        format!("{dir}/")
    } else {
        id.to_string()
    }
}

// ============================================================================
// tests
// ============================================================================
