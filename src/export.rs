//! Generator-facing JSON export.
//!
//! Renders [`SiteConfig`] in the shape the documentation generator reads at
//! build start: camelCase keys, presets as `[name, options]` pairs and the
//! code theme pair under `prism`.
//!
//! ```json
//! {
//!   "title": "Magniv Documentation",
//!   "url": "https://docs.magniv.io",
//!   "baseUrl": "/",
//!   "presets": [["classic", { "docs": { "sidebarPath": "sidebars.js" } }]],
//!   "themeConfig": { "navbar": { "items": [{ "type": "doc", "docId": "faq/index" }] } }
//! }
//! ```
//!
//! Key order is fixed (`serde_json` with `preserve_order`), so identical
//! configs export byte-identical JSON.

use serde_json::{Map, Value, json};
use std::path::Path;

use crate::config::section::theme::{
    FooterConfig, FooterItem, NavItem, NavbarConfig, ThemeSectionConfig,
};
use crate::config::{PresetConfig, SiteConfig};

/// Full generator object.
pub fn to_value(config: &SiteConfig) -> Value {
    let site = &config.site;

    let mut root = Map::new();
    root.insert("title".into(), json!(site.title));
    root.insert("tagline".into(), json!(site.tagline));
    root.insert("url".into(), json!(site.url));
    root.insert("baseUrl".into(), json!(site.base_url));
    root.insert("onBrokenLinks".into(), json!(site.on_broken_links.as_str()));
    root.insert(
        "onBrokenMarkdownLinks".into(),
        json!(site.on_broken_markdown_links.as_str()),
    );
    if let Some(favicon) = &site.favicon {
        root.insert("favicon".into(), path_value(favicon));
    }
    root.insert("organizationName".into(), json!(site.organization_name));
    root.insert("projectName".into(), json!(site.project_name));
    root.insert(
        "presets".into(),
        Value::Array(
            config
                .presets
                .iter()
                .map(|(name, preset)| json!([name, preset_value(preset)]))
                .collect(),
        ),
    );
    root.insert("themeConfig".into(), theme_value(&config.theme));

    Value::Object(root)
}

/// Serialize the generator object.
pub fn to_json(config: &SiteConfig, pretty: bool) -> serde_json::Result<String> {
    let value = to_value(config);
    if pretty {
        serde_json::to_string_pretty(&value)
    } else {
        serde_json::to_string(&value)
    }
}

fn path_value(path: &Path) -> Value {
    // Generators expect forward slashes on every platform
    let parts: Vec<_> = path
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect();
    json!(parts.join("/"))
}

fn preset_value(preset: &PresetConfig) -> Value {
    let mut docs = Map::new();
    docs.insert("path".into(), path_value(&preset.docs.path));
    if let Some(sidebar) = &preset.docs.sidebar_path {
        docs.insert("sidebarPath".into(), path_value(sidebar));
    }
    docs.insert("routeBasePath".into(), json!(preset.docs.route_base_path));

    let mut theme = Map::new();
    if let Some(css) = &preset.theme.custom_css {
        theme.insert("customCss".into(), path_value(css));
    }

    let mut options = Map::new();
    options.insert("docs".into(), Value::Object(docs));
    options.insert("theme".into(), Value::Object(theme));
    if let Some(analytics) = &preset.analytics {
        options.insert(
            "gtag".into(),
            json!({
                "trackingID": analytics.tracking_id,
                "anonymizeIP": analytics.anonymize_ip,
            }),
        );
    }
    Value::Object(options)
}

fn theme_value(theme: &ThemeSectionConfig) -> Value {
    json!({
        "metadata": theme
            .metadata
            .iter()
            .map(|tag| json!({ "name": tag.name, "content": tag.content }))
            .collect::<Vec<_>>(),
        "navbar": navbar_value(&theme.navbar),
        "footer": footer_value(&theme.footer),
        "prism": {
            "theme": theme.code.light.module_name(),
            "darkTheme": theme.code.dark.module_name(),
        },
    })
}

/// `themeConfig.navbar`.
pub fn navbar_value(navbar: &NavbarConfig) -> Value {
    let mut out = Map::new();
    out.insert("title".into(), json!(navbar.title));
    if let Some(logo) = &navbar.logo {
        out.insert(
            "logo".into(),
            json!({ "alt": logo.alt, "src": path_value(&logo.src) }),
        );
    }
    out.insert(
        "items".into(),
        Value::Array(navbar.items.iter().map(nav_item_value).collect()),
    );
    Value::Object(out)
}

fn nav_item_value(item: &NavItem) -> Value {
    match item {
        NavItem::Doc {
            doc_id,
            label,
            position,
        } => json!({
            "type": "doc",
            "docId": doc_id,
            "position": position.as_str(),
            "label": label,
        }),
        NavItem::Link {
            href,
            label,
            position,
        } => json!({
            "href": href,
            "label": label,
            "position": position.as_str(),
        }),
    }
}

/// `themeConfig.footer`.
pub fn footer_value(footer: &FooterConfig) -> Value {
    json!({
        "style": footer.style.as_str(),
        "links": footer
            .links
            .iter()
            .map(|group| json!({
                "title": group.title,
                "items": group.items.iter().map(footer_item_value).collect::<Vec<_>>(),
            }))
            .collect::<Vec<_>>(),
        "copyright": footer.copyright,
    })
}

fn footer_item_value(item: &FooterItem) -> Value {
    let mut out = Map::new();
    out.insert("label".into(), json!(item.label));
    if let Some(to) = &item.to {
        out.insert("to".into(), json!(to));
    }
    if let Some(href) = &item.href {
        out.insert("href".into(), json!(href));
    }
    Value::Object(out)
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TEST_SITE;

    fn site() -> SiteConfig {
        SiteConfig::from_str(TEST_SITE).unwrap()
    }

    #[test]
    fn test_top_level_keys_in_order() {
        let value = to_value(&site());
        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        assert_eq!(
            keys,
            [
                "title",
                "tagline",
                "url",
                "baseUrl",
                "onBrokenLinks",
                "onBrokenMarkdownLinks",
                "favicon",
                "organizationName",
                "projectName",
                "presets",
                "themeConfig"
            ]
        );
    }

    #[test]
    fn test_presets_shape() {
        let value = to_value(&site());
        let preset = &value["presets"][0];
        assert_eq!(preset[0], "classic");
        assert_eq!(preset[1]["docs"]["sidebarPath"], "sidebars.js");
        assert_eq!(preset[1]["docs"]["routeBasePath"], "/");
        assert_eq!(preset[1]["theme"]["customCss"], "src/css/custom.css");
        assert_eq!(preset[1]["gtag"]["trackingID"], "G-H75VMNQ5FL");
        assert_eq!(preset[1]["gtag"]["anonymizeIP"], true);
    }

    #[test]
    fn test_no_analytics_no_gtag() {
        let mut config = site();
        config.presets.get_mut("classic").unwrap().analytics = None;
        let value = to_value(&config);
        assert!(value["presets"][0][1].get("gtag").is_none());
    }

    #[test]
    fn test_navbar_items() {
        let value = to_value(&site());
        let items = &value["themeConfig"]["navbar"]["items"];
        assert_eq!(
            items[0],
            json!({
                "type": "doc",
                "docId": "documentation/index",
                "position": "left",
                "label": "Documentation",
            })
        );
        assert_eq!(items[2]["href"], "https://github.com/MagnivOrg");
        assert!(items[2].get("type").is_none());
    }

    #[test]
    fn test_footer_and_prism() {
        let value = to_value(&site());
        let theme = &value["themeConfig"];
        assert_eq!(theme["footer"]["style"], "dark");
        assert_eq!(theme["footer"]["links"][0]["items"][1]["to"], "/tutorials");
        assert!(theme["footer"]["links"][0]["items"][1].get("href").is_none());
        assert_eq!(theme["prism"]["theme"], "github");
        assert_eq!(theme["prism"]["darkTheme"], "dracula");
        assert_eq!(theme["metadata"][0]["name"], "keywords");
    }

    #[test]
    fn test_export_is_byte_identical() {
        let a = to_json(&site(), true).unwrap();
        let b = to_json(&site(), true).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_tracking_id_change_leaves_navbar_and_footer_identical() {
        let (base, _) = SiteConfig::parse(TEST_SITE, None).unwrap();
        let mut other = base.clone();
        other
            .presets
            .get_mut("classic")
            .unwrap()
            .analytics
            .as_mut()
            .unwrap()
            .tracking_id = "G-OTHER".into();

        let a = to_value(&base);
        let b = to_value(&other);
        assert_ne!(a, b);
        assert_eq!(
            navbar_value(&base.theme.navbar).to_string(),
            navbar_value(&other.theme.navbar).to_string()
        );
        assert_eq!(
            footer_value(&base.theme.footer).to_string(),
            footer_value(&other.theme.footer).to_string()
        );
        assert_eq!(
            a["themeConfig"].to_string(),
            b["themeConfig"].to_string()
        );
    }
}
