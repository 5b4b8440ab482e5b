//! Configuration management
//!
//! Supports loading configuration from:
//! - Default values
//! - Config file (apigen.toml)
//! - Environment variables (APIGEN_*)
//!
//! ## Example config file (apigen.toml):
//! ```toml
//! [catalog]
//! versions = ["2019-02-21T00:00:00Z", "2019-05-22T00:00:00Z"]
//!
//! [registry]
//! strict_versions = true
//!
//! [export]
//! output_format = "pretty"
//! convention = "serial"
//! ```

use config_crate::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

use crate::naming::NamingConvention;
use crate::version::GW2_V2_VERSIONS;

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApigenConfig {
    /// Known schema versions
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Registration settings
    #[serde(default)]
    pub registry: RegistryConfig,

    /// Output settings
    #[serde(default)]
    pub export: ExportConfig,
}

/// Version catalog configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Version tags; the baseline is always included
    #[serde(default = "default_versions")]
    pub versions: Vec<String>,
}

/// Registry configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Reject versions that are not in the catalog
    #[serde(default = "default_true")]
    pub strict_versions: bool,
}

/// Export configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Output format (pretty or compact)
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Convention used when printing field names
    #[serde(default = "default_convention")]
    pub convention: NamingConvention,
}

/// Output format for JSON
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Pretty,
    Compact,
}

// Default value functions
fn default_versions() -> Vec<String> {
    GW2_V2_VERSIONS.iter().map(|v| v.to_string()).collect()
}

fn default_true() -> bool {
    true
}

fn default_convention() -> NamingConvention {
    NamingConvention::Serial
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            versions: default_versions(),
        }
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            strict_versions: true,
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::Pretty,
            convention: default_convention(),
        }
    }
}

impl ApigenConfig {
    /// Load configuration from default locations
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration from a specific file
    pub fn load_from(config_path: Option<&str>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        // Load from default locations
        let config_locations = ["apigen.toml", ".apigen.toml", "config/apigen.toml"];

        for location in config_locations {
            builder = builder.add_source(File::with_name(location).required(false));
        }

        // Load from XDG config directory
        if let Some(config_dir) = directories::ProjectDirs::from("com", "gw2tb", "apigen") {
            let xdg_config = config_dir.config_dir().join("apigen.toml");
            if xdg_config.exists() {
                builder = builder.add_source(File::from(xdg_config).required(false));
            }
        }

        // Load from specified path
        if let Some(path) = config_path {
            builder = builder.add_source(File::with_name(path).required(true));
        }

        // Load from environment variables (APIGEN__*)
        builder = builder.add_source(
            Environment::with_prefix("APIGEN")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Save configuration to a file
    pub fn save(&self, path: &str) -> std::io::Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::write(path, content)
    }

    /// Render a value as JSON according to `[export] output_format`
    pub fn render_json<T: Serialize>(&self, value: &T) -> serde_json::Result<String> {
        match self.export.output_format {
            OutputFormat::Pretty => serde_json::to_string_pretty(value),
            OutputFormat::Compact => serde_json::to_string(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::VersionCatalog;

    #[test]
    fn test_default_config() {
        let config = ApigenConfig::default();
        assert!(config.registry.strict_versions);
        assert_eq!(config.catalog.versions.len(), GW2_V2_VERSIONS.len());
        assert_eq!(config.export.convention, NamingConvention::Serial);
    }

    #[test]
    fn test_serialize_config() {
        let config = ApigenConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("[catalog]"));
        assert!(toml_str.contains("[registry]"));
        assert!(toml_str.contains("[export]"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("apigen.toml");
        std::fs::write(
            &path,
            r#"
[catalog]
versions = ["2019-05-22T00:00:00Z"]

[registry]
strict_versions = false

[export]
output_format = "compact"
"#,
        )
        .unwrap();

        let config = ApigenConfig::load_from(path.to_str()).unwrap();
        assert!(!config.registry.strict_versions);
        assert!(matches!(config.export.output_format, OutputFormat::Compact));

        let catalog = VersionCatalog::from_config(&config).unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_save_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("saved.toml");
        let path = path.to_str().unwrap();

        ApigenConfig::default().save(path).unwrap();
        let loaded = ApigenConfig::load_from(Some(path)).unwrap();
        assert_eq!(loaded.catalog.versions, default_versions());
    }
}
