pub mod model;

use crate::content::ContentCatalog;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub use model::{AppConfig, BehaviorConfig, LoggingConfig, UiConfig};

fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("adventmagic")
}

pub fn load_config() -> Result<AppConfig> {
    let path = config_dir().join("config.toml");
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
    tracing::info!(path = %path.display(), "config loaded");
    Ok(config)
}

/// The built-in catalog, unless a `catalog.toml` next to the config file
/// overrides it.
pub fn load_catalog() -> Result<ContentCatalog> {
    load_catalog_from(&config_dir().join("catalog.toml"))
}

fn load_catalog_from(path: &Path) -> Result<ContentCatalog> {
    if !path.exists() {
        return Ok(ContentCatalog::builtin());
    }
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;
    let catalog = ContentCatalog::from_toml_str(&contents)
        .with_context(|| format!("Invalid catalog file: {}", path.display()))?;
    tracing::info!(path = %path.display(), "catalog override loaded");
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ThemeId;
    use std::io::Write;

    #[test]
    fn missing_catalog_file_yields_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = load_catalog_from(&dir.path().join("catalog.toml")).unwrap();
        assert_eq!(
            catalog.item(ThemeId::Scientific, 1).map(|i| i.title.as_str()),
            Some("Fact #1")
        );
    }

    #[test]
    fn catalog_override_file_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        for n in 1..=24 {
            writeln!(
                file,
                "[[scientific]]\ntitle = \"Override {}\"\ndescription = \"d\"\n",
                n
            )
            .unwrap();
        }
        let catalog = load_catalog_from(&path).unwrap();
        assert_eq!(
            catalog.item(ThemeId::Scientific, 2).map(|i| i.title.as_str()),
            Some("Override 2")
        );
    }

    #[test]
    fn invalid_catalog_file_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.toml");
        std::fs::write(&path, "[[esoteric]]\ntitle = \"One\"\ndescription = \"d\"\n").unwrap();
        let err = load_catalog_from(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("catalog.toml"));
    }
}
