use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub registration: RegistrationConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), String> {
        let lvl = self.logging.level.to_ascii_lowercase();
        let valid_levels = ["trace", "debug", "info", "warn", "error", "off"];
        if !valid_levels.contains(&lvl.as_str()) {
            return Err(format!("logging.level must be one of {valid_levels:?}"));
        }
        if self.registration.default_center_id.trim().is_empty() {
            return Err("registration.default_center_id must not be empty".into());
        }
        Ok(())
    }

    /// Heading concept source, with an explicit override taking precedence.
    pub fn heading_concept_source<'a>(&'a self, overridden: Option<&'a str>) -> Option<&'a str> {
        overridden
            .or(self.display.heading_concept_source.as_deref())
            .filter(|s| !s.is_empty())
    }
}

/// Flow-sheet display settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DisplayConfig {
    /// Mapping source whose names are shown as header abbreviations
    #[serde(default)]
    pub heading_concept_source: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationConfig {
    #[serde(default = "default_center_id")]
    pub default_center_id: String,
}

fn default_center_id() -> String {
    "SEM".into()
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self {
            default_center_id: default_center_id(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".into()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

pub mod loader {
    use super::AppConfig;
    use config::{Config, Environment, File};
    use flowsheet_core::{CoreError, Result};
    use std::path::PathBuf;

    pub const DEFAULT_CONFIG_FILE: &str = "flowsheet.toml";

    pub fn load_config(path: Option<&str>) -> Result<AppConfig> {
        let mut builder = Config::builder();
        let pathbuf = PathBuf::from(path.unwrap_or(DEFAULT_CONFIG_FILE));
        if pathbuf.exists() {
            builder = builder.add_source(File::from(pathbuf));
        } else if path.is_some() {
            return Err(CoreError::configuration(format!(
                "config file not found: {}",
                pathbuf.display()
            )));
        }
        // Environment variable overrides, e.g. FLOWSHEET__DISPLAY__HEADING_CONCEPT_SOURCE=Abbreviation
        builder = builder.add_source(
            Environment::with_prefix("FLOWSHEET")
                .try_parsing(true)
                .separator("__"),
        );
        let cfg = builder
            .build()
            .map_err(|e| CoreError::configuration(format!("config build error: {e}")))?;
        let merged: AppConfig = cfg
            .try_deserialize()
            .map_err(|e| CoreError::configuration(format!("config deserialize error: {e}")))?;
        merged.validate().map_err(CoreError::configuration)?;
        Ok(merged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let cfg = AppConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.registration.default_center_id, "SEM");
        assert_eq!(cfg.logging.level, "info");
        assert!(cfg.display.heading_concept_source.is_none());
    }

    #[test]
    fn test_invalid_log_level() {
        let mut cfg = AppConfig::default();
        cfg.logging.level = "chatty".into();
        assert!(cfg.validate().unwrap_err().contains("logging.level"));
    }

    #[test]
    fn test_heading_concept_source_override() {
        let mut cfg = AppConfig::default();
        assert_eq!(cfg.heading_concept_source(None), None);
        cfg.display.heading_concept_source = Some("Abbreviation".into());
        assert_eq!(cfg.heading_concept_source(None), Some("Abbreviation"));
        assert_eq!(cfg.heading_concept_source(Some("Custom")), Some("Custom"));
        assert_eq!(cfg.heading_concept_source(Some("")), None);
    }
}
