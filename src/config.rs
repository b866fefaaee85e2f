use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::cli::{DEFAULT_PDF_PATH, Engine};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub default_path: Option<PathBuf>,
    pub engine: Option<Engine>,
}

impl Config {
    /// Get the configuration directory path
    pub fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("pdftext"))
    }

    /// Get the configuration file path
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Load configuration from file, falling back to defaults when no file exists
    pub fn load() -> Result<Self> {
        let Some(config_path) = Self::config_path() else {
            tracing::debug!("No config directory on this platform, using defaults");
            return Ok(Self::default());
        };

        if !config_path.exists() {
            tracing::debug!("No config file at {}", config_path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file at {}", config_path.display()))
    }

    fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Pick the PDF path: command line (or env) first, then config, then the built-in default
    pub fn resolve_path(&self, cli_path: Option<PathBuf>) -> PathBuf {
        cli_path
            .or_else(|| self.default_path.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PDF_PATH))
    }

    pub fn resolve_engine(&self, cli_engine: Option<Engine>) -> Engine {
        cli_engine.or(self.engine).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_toml() {
        let toml_str = r#"
            default_path = "reports/q3.pdf"
            engine = "pdf-extract"
        "#;
        let config = Config::from_toml(toml_str).unwrap();
        assert_eq!(config.default_path, Some(PathBuf::from("reports/q3.pdf")));
        assert_eq!(config.engine, Some(Engine::PdfExtract));
    }

    #[test]
    fn test_config_empty_file() {
        let config = Config::from_toml("").unwrap();
        assert!(config.default_path.is_none());
        assert!(config.engine.is_none());
    }

    #[test]
    fn test_config_rejects_unknown_engine() {
        assert!(Config::from_toml(r#"engine = "poppler""#).is_err());
    }

    #[test]
    fn test_resolve_path_defaults_to_concept_note() {
        let config = Config::default();
        assert_eq!(config.resolve_path(None), PathBuf::from(DEFAULT_PDF_PATH));
    }

    #[test]
    fn test_resolve_path_precedence() {
        let config = Config {
            default_path: Some(PathBuf::from("from-config.pdf")),
            engine: None,
        };
        assert_eq!(config.resolve_path(None), PathBuf::from("from-config.pdf"));
        assert_eq!(
            config.resolve_path(Some(PathBuf::from("from-cli.pdf"))),
            PathBuf::from("from-cli.pdf")
        );
    }

    #[test]
    fn test_resolve_engine_precedence() {
        let config = Config {
            default_path: None,
            engine: Some(Engine::PdfExtract),
        };
        assert_eq!(config.resolve_engine(None), Engine::PdfExtract);
        assert_eq!(config.resolve_engine(Some(Engine::Lopdf)), Engine::Lopdf);
        assert_eq!(Config::default().resolve_engine(None), Engine::Lopdf);
    }

    #[test]
    fn test_config_roundtrip_toml() {
        let config = Config {
            default_path: Some(PathBuf::from("a.pdf")),
            engine: Some(Engine::Lopdf),
        };
        let serialized = toml::to_string_pretty(&config).unwrap();
        let deserialized = Config::from_toml(&serialized).unwrap();
        assert_eq!(deserialized.default_path, config.default_path);
        assert_eq!(deserialized.engine, Some(Engine::Lopdf));
    }
}
