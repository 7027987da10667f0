//! Doc ID check for navbar `doc` items.
//!
//! The generator owns link checking; this mirrors its `on_broken_links`
//! policy so a config can be checked before a full build. Loading a config
//! never runs it.
//!
//! A doc ID is the file path relative to the docs directory without its
//! extension, unless front matter sets `id:`, which replaces the file name.

use jwalk::WalkDir;
use rustc_hash::FxHashSet;
use std::{fs, path::Path};

use crate::config::section::theme::NavbarConfig;
use crate::config::{ConfigDiagnostics, LinkPolicy, SiteConfig};

const DOC_EXTENSIONS: &[&str] = &["md", "mdx"];

/// Collect doc IDs under `dir`: relative path without extension, `/`-separated.
///
/// A missing directory yields an empty set.
pub fn scan_doc_ids(dir: &Path) -> FxHashSet<String> {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| {
            let path = e.path();
            let ext = path.extension()?.to_str()?;
            if !DOC_EXTENSIONS.contains(&ext) {
                return None;
            }
            let relative = path.strip_prefix(dir).ok()?.with_extension("");
            let mut segments: Vec<_> = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect();
            if let Some(id) = fs::read_to_string(&path)
                .ok()
                .and_then(|content| front_matter_id(&content))
                && let Some(last) = segments.last_mut()
            {
                *last = id;
            }
            Some(segments.join("/"))
        })
        .collect()
}

/// `id:` from a leading `---` front matter block, which replaces the file
/// name in the doc ID.
fn front_matter_id(content: &str) -> Option<String> {
    let mut lines = content.lines();
    if lines.next()?.trim_end() != "---" {
        return None;
    }
    for line in lines {
        let line = line.trim_end();
        if line == "---" {
            break;
        }
        if let Some(value) = line.strip_prefix("id:") {
            let id = value.trim().trim_matches(|c| c == '"' || c == '\'');
            return (!id.is_empty()).then(|| id.to_string());
        }
    }
    None
}

/// Report navbar doc IDs missing from `known`, per `policy`.
///
/// Returns the number of missing IDs regardless of policy.
pub fn check_doc_refs(
    navbar: &NavbarConfig,
    known: &FxHashSet<String>,
    policy: LinkPolicy,
    diag: &mut ConfigDiagnostics,
) -> usize {
    let mut missing = 0;

    for (i, item) in navbar.items.iter().enumerate() {
        let Some(doc_id) = item.doc_id() else {
            continue;
        };
        if known.contains(doc_id.trim_matches('/')) {
            continue;
        }

        missing += 1;
        let field = NavbarConfig::FIELDS.items.index(i).join("doc_id");
        let message = format!("doc '{doc_id}' not found in docs directory");
        match policy {
            LinkPolicy::Ignore => {}
            LinkPolicy::Warn => diag.warn(field, message),
            LinkPolicy::Throw => diag.error(field, message),
        }
    }

    missing
}

/// Scan the primary preset's docs directory and check the navbar against it.
pub fn check_site(config: &SiteConfig, diag: &mut ConfigDiagnostics) -> usize {
    let dir = config.root_join(&config.docs().path);
    let known = scan_doc_ids(&dir);
    crate::debug!("check"; "found {} docs in {}", known.len(), dir.display());
    check_doc_refs(&config.theme.navbar, &known, config.site.on_broken_links, diag)
}
