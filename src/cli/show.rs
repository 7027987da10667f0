//! `docsite show`: print the generator JSON.

use anyhow::{Context, Result};
use std::{fs, io::Write, path::Path};

use crate::config::SiteConfig;
use crate::{export, log};

pub fn show_config(config: &SiteConfig, pretty: bool, output: Option<&Path>) -> Result<()> {
    let mut json = export::to_json(config, pretty).context("Failed to serialize config")?;
    json.push('\n');

    match output {
        Some(path) => {
            fs::write(path, &json)
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
            log!("show"; "wrote {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(json.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TEST_SITE;
    use tempfile::TempDir;

    #[test]
    fn test_write_to_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("site.json");
        let config = SiteConfig::from_str(TEST_SITE).unwrap();

        show_config(&config, false, Some(&path)).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(value["title"], "Magniv Documentation");
        assert!(written.ends_with('\n'));
    }
}
