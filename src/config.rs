use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::models::MatchThresholds;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub catalog: CatalogSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub site: SiteSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 5000 }

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogSettings {
    /// JSON file listing every bun
    #[serde(default = "default_catalog_path")]
    pub path: String,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
        }
    }
}

fn default_catalog_path() -> String { "buns.json".to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_max_threshold")]
    pub max_threshold: f64,
    #[serde(default = "default_also_valid_threshold")]
    pub also_valid_threshold: f64,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            max_threshold: default_max_threshold(),
            also_valid_threshold: default_also_valid_threshold(),
        }
    }
}

fn default_max_threshold() -> f64 { 90.0 }
fn default_also_valid_threshold() -> f64 { 20.0 }

impl MatchingSettings {
    /// Thresholds for the matcher
    ///
    /// The tie window must be narrower than the cutoff so every match keeps a
    /// positive weight.
    pub fn thresholds(&self) -> Result<MatchThresholds, ConfigError> {
        if self.max_threshold < 0.0 || self.also_valid_threshold < 0.0 {
            return Err(ConfigError::Message(
                "matching thresholds must not be negative".to_string(),
            ));
        }
        if self.also_valid_threshold >= self.max_threshold {
            return Err(ConfigError::Message(format!(
                "matching.also_valid_threshold ({}) must be below matching.max_threshold ({})",
                self.also_valid_threshold, self.max_threshold
            )));
        }

        Ok(MatchThresholds {
            max: self.max_threshold,
            also_valid: self.also_valid_threshold,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SiteSettings {
    /// Where `/` redirects to
    #[serde(default = "default_timezone")]
    pub default_timezone: String,
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
    /// Names used for buns whose name is unknown
    #[serde(default = "default_fallback_names")]
    pub fallback_names: Vec<String>,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            default_timezone: default_timezone(),
            static_dir: default_static_dir(),
            fallback_names: default_fallback_names(),
        }
    }
}

fn default_timezone() -> String { "Australia/Sydney".to_string() }
fn default_static_dir() -> String { "static".to_string() }
fn default_fallback_names() -> Vec<String> {
    vec!["Bun".to_string(), "Bunny".to_string(), "Bnuuy".to_string()]
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with BNUUY_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., BNUUY__SERVER__PORT -> server.port
            .add_source(env_source())
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(env_source())
            .build()?;

        settings.try_deserialize()
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("BNUUY")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_thresholds() {
        let matching = MatchingSettings::default();
        assert_eq!(matching.max_threshold, 90.0);
        assert_eq!(matching.also_valid_threshold, 20.0);
        assert_eq!(matching.thresholds().unwrap(), MatchThresholds::default());
    }

    #[test]
    fn test_window_wider_than_cutoff_rejected() {
        let matching = MatchingSettings {
            max_threshold: 20.0,
            also_valid_threshold: 20.0,
        };
        assert!(matching.thresholds().is_err());

        let negative = MatchingSettings {
            max_threshold: 90.0,
            also_valid_threshold: -1.0,
        };
        assert!(negative.thresholds().is_err());
    }

    #[test]
    fn test_default_site() {
        let site = SiteSettings::default();
        assert_eq!(site.default_timezone, "Australia/Sydney");
        assert_eq!(site.fallback_names, vec!["Bun", "Bunny", "Bnuuy"]);
    }

    #[test]
    fn test_default_logging() {
        let level = default_log_level();
        let format = default_log_format();
        assert_eq!(level, "info");
        assert_eq!(format, "json");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[server]\nport = 8080\n\n[catalog]\npath = \"data/buns.json\"\n\n[matching]\nmax_threshold = 60.0"
        )
        .unwrap();

        let settings = Settings::load_from(file.path()).unwrap();
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.server.host, "127.0.0.1");
        assert_eq!(settings.catalog.path, "data/buns.json");
        assert_eq!(settings.matching.max_threshold, 60.0);
        assert_eq!(settings.matching.also_valid_threshold, 20.0);
        assert_eq!(settings.site.static_dir, "static");
    }
}
