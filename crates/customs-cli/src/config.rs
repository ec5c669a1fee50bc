//! # CLI Configuration
//!
//! Optional YAML (or JSON) file selecting the data the engine runs on:
//!
//! ```yaml
//! catalog: data/catalog.yaml       # replaces the built-in HSN catalog
//! countries: data/countries.yaml   # replaces the built-in country table
//! default_country: AE              # used when --country is omitted
//! ```
//!
//! Relative paths resolve against the directory holding the config file.
//! Omitted tables fall back to the built-in data.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use customs_tables::{loader, CountryTable, HsnCatalog};
use customs_validate::ValidationService;
use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    #[serde(default)]
    pub catalog: Option<PathBuf>,
    #[serde(default)]
    pub countries: Option<PathBuf>,
    #[serde(default)]
    pub default_country: Option<String>,
}

impl CliConfig {
    /// Read a config file, resolving its table paths against its directory.
    pub fn load(path: &Path) -> Result<Self> {
        let mut config: Self = loader::read_document(path)
            .with_context(|| format!("failed to load config {}", path.display()))?;
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        config.catalog = config.catalog.map(|p| resolve_path(base, p));
        config.countries = config.countries.map(|p| resolve_path(base, p));
        tracing::debug!(config = %path.display(), "loaded CLI config");
        Ok(config)
    }

    /// Build the service from the configured tables.
    pub fn build_service(&self) -> Result<ValidationService> {
        let catalog = match &self.catalog {
            Some(path) => loader::load_catalog(path)
                .with_context(|| format!("failed to load HSN catalog {}", path.display()))?,
            None => HsnCatalog::builtin(),
        };
        let countries = match &self.countries {
            Some(path) => loader::load_country_table(path)
                .with_context(|| format!("failed to load country table {}", path.display()))?,
            None => CountryTable::builtin(),
        };
        Ok(ValidationService::new(Arc::new(catalog), Arc::new(countries)))
    }
}

fn resolve_path(base: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_relative_paths_resolve_against_config_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("customs.yaml");
        fs::write(
            &config_path,
            "catalog: data/catalog.yaml\ncountries: /abs/countries.yaml\ndefault_country: ae\n",
        )
        .unwrap();

        let config = CliConfig::load(&config_path).unwrap();
        assert_eq!(config.catalog, Some(dir.path().join("data/catalog.yaml")));
        assert_eq!(config.countries, Some(PathBuf::from("/abs/countries.yaml")));
        assert_eq!(config.default_country.as_deref(), Some("ae"));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("customs.yaml");
        fs::write(&config_path, "catalogue: x.yaml\n").unwrap();
        assert!(CliConfig::load(&config_path).is_err());
    }

    #[test]
    fn test_custom_tables_replace_builtin() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("catalog.yaml"),
            r#"
- code: "10000001"
  description: Test widget
  category: Widgets
  globally_restricted: true
  restriction_reason: Needs a permit
"#,
        )
        .unwrap();
        fs::write(
            dir.path().join("countries.json"),
            r#"[{"country_code":"XA","country_name":"Strictland","prohibited_categories":["Widgets"]}]"#,
        )
        .unwrap();
        let config_path = dir.path().join("customs.yaml");
        fs::write(&config_path, "catalog: catalog.yaml\ncountries: countries.json\n").unwrap();

        let service = CliConfig::load(&config_path).unwrap().build_service().unwrap();
        assert_eq!(service.catalog().len(), 1);
        assert!(service.catalog().lookup("61091000").is_none());
        let result = service.validate("10000001", "XA");
        assert_eq!(result.status, customs_core::ValidationStatus::Prohibited);
    }

    #[test]
    fn test_missing_table_file_is_error() {
        let config = CliConfig {
            catalog: Some(PathBuf::from("/nonexistent/catalog.yaml")),
            ..CliConfig::default()
        };
        assert!(config.build_service().is_err());
    }
}
