//! Type-safe config field path.

use owo_colors::OwoColorize;
use std::borrow::Cow;
use std::fmt;

/// A dotted path to a config field, e.g. `theme.navbar.items[2].label`.
///
/// Static paths are declared once per section with [`config_fields!`];
/// paths into arrays are built at validation time with [`FieldPath::index`].
///
/// # Example
///
/// ```ignore
/// config_fields!(SiteInfoConfig => SiteInfoFields, "site" { title, url });
///
/// diag.error(SiteInfoConfig::FIELDS.url, "required");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath(Cow<'static, str>);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(Cow::Borrowed(path))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Path of the `i`-th element of this array field.
    pub fn index(&self, i: usize) -> Self {
        Self(Cow::Owned(format!("{}[{i}]", self.0)))
    }

    /// Path of a child field.
    pub fn join(&self, key: &str) -> Self {
        Self(Cow::Owned(format!("{}.{key}", self.0)))
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Declare a `FIELDS` constant holding the dotted path of each field.
///
/// ```ignore
/// config_fields!(FooterConfig => FooterFields, "theme.footer" { style, links, copyright });
/// assert_eq!(FooterConfig::FIELDS.style.as_str(), "theme.footer.style");
/// ```
#[macro_export]
macro_rules! config_fields {
    ($ty:ident => $fields:ident, $section:literal { $($field:ident),* $(,)? }) => {
        #[allow(dead_code)]
        pub struct $fields {
            $(pub $field: $crate::config::FieldPath,)*
        }

        impl $ty {
            #[allow(dead_code)]
            pub const SECTION: &'static str = $section;

            pub const FIELDS: $fields = $fields {
                $($field: $crate::config::FieldPath::new(concat!($section, ".", stringify!($field))),)*
            };
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_and_join() {
        let items = FieldPath::new("theme.navbar.items");
        assert_eq!(items.index(2).as_str(), "theme.navbar.items[2]");
        assert_eq!(
            items.index(0).join("label").as_str(),
            "theme.navbar.items[0].label"
        );
    }

    #[test]
    fn test_static_path_is_borrowed() {
        let path = FieldPath::new("site.url");
        assert!(matches!(path.0, Cow::Borrowed(_)));
        assert_eq!(path.as_ref(), "site.url");
    }
}
