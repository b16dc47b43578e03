use anyhow::{Context, Result, bail};
use chrono::format::{Item, StrftimeItems};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct SourceConfig {
    pub base_url: String,
    pub path: String,
    pub timeout_secs: u64,
    pub sort_by: Option<String>,
    pub order: Option<SortOrder>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        SourceConfig {
            base_url: "http://localhost:3333".to_string(),
            path: "/transactions".to_string(),
            timeout_secs: 10,
            sort_by: Some("createdAt".to_string()),
            order: Some(SortOrder::Desc),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct DisplayConfig {
    pub currency_symbol: String,
    pub thousands_separator: String,
    pub decimal_separator: String,
    pub date_format: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            currency_symbol: "R$".to_string(),
            thousands_separator: ".".to_string(),
            decimal_separator: ",".to_string(),
            date_format: "%d/%m/%Y".to_string(),
        }
    }
}

impl DisplayConfig {
    pub fn validate(&self) -> Result<()> {
        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            bail!("Invalid date_format: '{}'", self.date_format);
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!(
                "No config at {}, using defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("com", "dtmoney", "dtmoney")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        config
            .display
            .validate()
            .with_context(|| format!("Invalid display settings in {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_deserialization() {
        let yaml_str = r#"
source:
  base_url: "http://example.com/api"
  path: "/v1/transactions"
  timeout_secs: 3
  sort_by: "amount"
  order: "asc"
display:
  currency_symbol: "$"
  thousands_separator: ","
  decimal_separator: "."
  date_format: "%Y-%m-%d"
"#;

        let config: AppConfig = serde_yaml::from_str(yaml_str).expect("Failed to deserialize");
        assert_eq!(config.source.base_url, "http://example.com/api");
        assert_eq!(config.source.path, "/v1/transactions");
        assert_eq!(config.source.timeout_secs, 3);
        assert_eq!(config.source.sort_by.as_deref(), Some("amount"));
        assert_eq!(config.source.order, Some(SortOrder::Asc));
        assert_eq!(config.display.currency_symbol, "$");
        assert_eq!(config.display.thousands_separator, ",");
        assert_eq!(config.display.decimal_separator, ".");
        assert_eq!(config.display.date_format, "%Y-%m-%d");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let yaml_str = r#"
source:
  base_url: "http://127.0.0.1:9000"
"#;
        let config: AppConfig = serde_yaml::from_str(yaml_str).unwrap();
        assert_eq!(config.source.base_url, "http://127.0.0.1:9000");
        assert_eq!(config.source.path, "/transactions");
        assert_eq!(config.source.timeout_secs, 10);
        assert_eq!(config.source.order, Some(SortOrder::Desc));
        assert_eq!(config.display.currency_symbol, "R$");
        assert_eq!(config.display.date_format, "%d/%m/%Y");
    }

    #[test]
    fn test_empty_document_is_default() {
        let config: AppConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config.source.base_url, "http://localhost:3333");
        assert_eq!(config.display.decimal_separator, ",");
    }

    #[test]
    fn test_load_rejects_bad_date_format() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "display:\n  date_format: \"%Q\"\n").unwrap();

        let err = AppConfig::load_from_path(&path).unwrap_err();
        assert!(err.to_string().contains("Invalid display settings"));
        assert!(format!("{err:#}").contains("Invalid date_format: '%Q'"));

        assert!(DisplayConfig::default().validate().is_ok());
    }

    #[test]
    fn test_load_from_missing_path_fails() {
        let dir = tempfile::TempDir::new().unwrap();
        let result = AppConfig::load_from_path(dir.path().join("missing.yaml"));
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Failed to read config file")
        );
    }
}
