use crate::core::registry::TypeRegistry;
use crate::core::ConfigProvider;
use crate::utils::error::{Result, WaterChemError};
use crate::utils::logger::{is_log_level, LogFormat, LOG_LEVELS};
use crate::utils::validation::{validate_non_empty_string, validate_path, validate_range, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const MAX_DECIMAL_PLACES: usize = 6;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub registry: RegistryConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Directory the catalog paths are resolved against. Defaults to the
    /// current directory.
    pub base_dir: Option<String>,
    pub equipment_path: Option<String>,
    pub reagents_path: Option<String>,
    pub plants_path: Option<String>,
}

/// Identifiers added on top of the built-in registry defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistryConfig {
    #[serde(default)]
    pub equipment_types: Vec<String>,
    #[serde(default)]
    pub measurements: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub format: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_decimal_places")]
    pub decimal_places: usize,
}

fn default_decimal_places() -> usize {
    crate::core::form::DEFAULT_DECIMAL_PLACES
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            decimal_places: default_decimal_places(),
        }
    }
}

impl AppConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        let config = toml::from_str(&processed_content)?;
        Ok(config)
    }

    /// Replaces `${VAR}` with the environment value; unset variables are left
    /// in place so validation can report them.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| WaterChemError::ConfigError {
            message: format!("env substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        let paths = [
            ("catalog.base_dir", &self.catalog.base_dir),
            ("catalog.equipment_path", &self.catalog.equipment_path),
            ("catalog.reagents_path", &self.catalog.reagents_path),
            ("catalog.plants_path", &self.catalog.plants_path),
        ];
        for (field, value) in paths {
            if let Some(path) = value {
                validate_path(field, path)?;
                if path.contains("${") {
                    return Err(WaterChemError::InvalidConfigValueError {
                        field: field.to_string(),
                        value: path.clone(),
                        reason: "Unresolved environment variable".to_string(),
                    });
                }
            }
        }

        for t in &self.registry.equipment_types {
            validate_non_empty_string("registry.equipment_types", t)?;
        }
        for m in &self.registry.measurements {
            validate_non_empty_string("registry.measurements", m)?;
        }

        if let Some(level) = &self.logging.level {
            if !is_log_level(level) {
                return Err(WaterChemError::InvalidConfigValueError {
                    field: "logging.level".to_string(),
                    value: level.clone(),
                    reason: format!("Unsupported level. Valid levels: {}", LOG_LEVELS.join(", ")),
                });
            }
        }

        if let Some(format) = &self.logging.format {
            if LogFormat::from_name(format).is_none() {
                return Err(WaterChemError::InvalidConfigValueError {
                    field: "logging.format".to_string(),
                    value: format.clone(),
                    reason: "Unsupported format. Valid formats: compact, json".to_string(),
                });
            }
        }

        validate_range(
            "display.decimal_places",
            self.display.decimal_places,
            0,
            MAX_DECIMAL_PLACES,
        )?;

        Ok(())
    }

    /// Built-in registry extended with the `[registry]` entries.
    pub fn type_registry(&self) -> TypeRegistry {
        let mut registry = TypeRegistry::with_defaults();
        registry.extend(&self.registry.equipment_types, &self.registry.measurements);
        registry
    }

    pub fn base_dir(&self) -> &str {
        self.catalog.base_dir.as_deref().unwrap_or(".")
    }

    pub fn log_format(&self) -> LogFormat {
        self.logging
            .format
            .as_deref()
            .and_then(LogFormat::from_name)
            .unwrap_or_default()
    }
}

impl ConfigProvider for AppConfig {
    fn equipment_path(&self) -> Option<&str> {
        self.catalog.equipment_path.as_deref()
    }

    fn reagents_path(&self) -> Option<&str> {
        self.catalog.reagents_path.as_deref()
    }

    fn plants_path(&self) -> Option<&str> {
        self.catalog.plants_path.as_deref()
    }

    fn decimal_places(&self) -> usize {
        self.display.decimal_places
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
