//! `[theme.code]` syntax highlighting theme pair.
//!
//! ```toml
//! [theme.code]
//! light = "github"
//! dark = "dracula"
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodeThemeConfig {
    /// Theme used in light mode.
    pub light: CodeTheme,
    /// Theme used in dark mode.
    pub dark: CodeTheme,
}

impl Default for CodeThemeConfig {
    fn default() -> Self {
        Self {
            light: CodeTheme::Github,
            dark: CodeTheme::Dracula,
        }
    }
}

/// Highlighting themes shipped with prism-react-renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CodeTheme {
    Dracula,
    DuotoneDark,
    DuotoneLight,
    Github,
    Jettwave,
    NightOwl,
    NightOwlLight,
    OceanicNext,
    Okaidia,
    OneDark,
    OneLight,
    Palenight,
    ShadesOfPurple,
    Synthwave84,
    Ultramin,
    VsDark,
    VsLight,
}

impl CodeTheme {
    /// Module name the generator imports the theme by.
    pub const fn module_name(self) -> &'static str {
        match self {
            Self::Dracula => "dracula",
            Self::DuotoneDark => "duotoneDark",
            Self::DuotoneLight => "duotoneLight",
            Self::Github => "github",
            Self::Jettwave => "jettwaveDark",
            Self::NightOwl => "nightOwl",
            Self::NightOwlLight => "nightOwlLight",
            Self::OceanicNext => "oceanicNext",
            Self::Okaidia => "okaidia",
            Self::OneDark => "oneDark",
            Self::OneLight => "oneLight",
            Self::Palenight => "palenight",
            Self::ShadesOfPurple => "shadesOfPurple",
            Self::Synthwave84 => "synthwave84",
            Self::Ultramin => "ultramin",
            Self::VsDark => "vsDark",
            Self::VsLight => "vsLight",
        }
    }
}
