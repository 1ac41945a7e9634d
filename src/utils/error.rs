use thiserror::Error;

#[derive(Error, Debug)]
pub enum WaterChemError {
    #[error("{field} must be greater than zero (got {value})")]
    InvalidInput { field: &'static str, value: f64 },

    #[error("{field}: '{input}' is not a valid decimal number")]
    ParseError { field: &'static str, input: String },

    #[error("Unknown {kind} '{value}' in {context}")]
    UnknownIdentifier {
        kind: &'static str,
        value: String,
        context: String,
    },

    #[error("Duplicate {kind} id '{id}'")]
    DuplicateId { kind: &'static str, id: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration value: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Catalog,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// Process exit status for a failure of this severity. Always non-zero.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl WaterChemError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            WaterChemError::InvalidInput { .. } | WaterChemError::ParseError { .. } => {
                ErrorCategory::Input
            }
            WaterChemError::UnknownIdentifier { .. }
            | WaterChemError::DuplicateId { .. }
            | WaterChemError::SerializationError(_)
            | WaterChemError::ValidationError { .. } => ErrorCategory::Catalog,
            WaterChemError::TomlError(_)
            | WaterChemError::ConfigError { .. }
            | WaterChemError::MissingConfigError { .. }
            | WaterChemError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            WaterChemError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Catalog | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Short message meant for the terminal, without source-error noise.
    pub fn user_friendly_message(&self) -> String {
        match self {
            WaterChemError::InvalidInput { field, .. } => {
                format!("{} must be a positive number", field)
            }
            WaterChemError::ParseError { field, input } => {
                format!("Could not read '{}' as a number for {}", input, field)
            }
            WaterChemError::IoError(e) => format!("Could not read file: {}", e),
            WaterChemError::SerializationError(e) => format!("Catalog file is not valid JSON: {}", e),
            WaterChemError::TomlError(e) => format!("Config file is not valid TOML: {}", e),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            WaterChemError::InvalidInput { .. } => {
                "Volume, target and stock concentration must all be greater than zero"
            }
            WaterChemError::ParseError { .. } => {
                "Use digits with '.' as the decimal separator, e.g. 1,250.5"
            }
            WaterChemError::UnknownIdentifier { .. } => {
                "Add the identifier to [registry] in the config file or fix the catalog entry"
            }
            WaterChemError::DuplicateId { .. } => "Give every catalog entry a unique id",
            WaterChemError::IoError(_) => "Check that the file exists and is readable",
            WaterChemError::SerializationError(_) => "Validate the catalog file with a JSON linter",
            WaterChemError::TomlError(_)
            | WaterChemError::ConfigError { .. }
            | WaterChemError::MissingConfigError { .. }
            | WaterChemError::InvalidConfigValueError { .. } => {
                "Review the configuration file against the documented sections"
            }
            WaterChemError::ValidationError { .. } => "Fix the reported catalog entry",
        }
    }
}

pub type Result<T> = std::result::Result<T, WaterChemError>;
