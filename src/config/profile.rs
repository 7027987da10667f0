//! `[profiles.<name>]` overlays.
//!
//! A profile has the same shape as the root document. Selecting one merges it
//! over the base before deserialization: tables merge key by key, arrays and
//! scalars replace.
//!
//! ```toml
//! [presets.classic.analytics]
//! tracking_id = "G-PRODUCTION"
//!
//! [profiles.staging.site]
//! url = "https://staging.docs.example.io"
//!
//! [profiles.staging.presets.classic.analytics]
//! tracking_id = "G-STAGING"
//! ```

use toml::{Table, Value};

use crate::config::ConfigError;

pub const PROFILES_KEY: &str = "profiles";

/// Remove `[profiles]` from the document and merge the selected profile over it.
///
/// Returns the merged document and the declared profile names (sorted).
pub fn apply_profile(
    mut doc: Table,
    profile: Option<&str>,
) -> Result<(Table, Vec<String>), ConfigError> {
    let profiles = match doc.remove(PROFILES_KEY) {
        Some(Value::Table(profiles)) => profiles,
        Some(_) => {
            return Err(ConfigError::Validation(format!(
                "`{PROFILES_KEY}` must be a table of named profiles"
            )));
        }
        None => Table::new(),
    };

    let mut names: Vec<String> = profiles.keys().cloned().collect();
    names.sort();

    let Some(name) = profile else {
        return Ok((doc, names));
    };

    match profiles.get(name) {
        Some(Value::Table(overlay)) => {
            merge(&mut doc, overlay.clone());
            Ok((doc, names))
        }
        Some(_) => Err(ConfigError::Validation(format!(
            "profile `{name}` must be a table"
        ))),
        None => Err(ConfigError::Profile {
            name: name.to_string(),
            available: names,
        }),
    }
}

/// Deep-merge `overlay` into `base`.
fn merge(base: &mut Table, overlay: Table) {
    for (key, value) in overlay {
        if let Value::Table(overlay_table) = value {
            if let Some(Value::Table(base_table)) = base.get_mut(&key) {
                merge(base_table, overlay_table);
                continue;
            }
            base.insert(key, Value::Table(overlay_table));
        } else {
            base.insert(key, value);
        }
    }
}
