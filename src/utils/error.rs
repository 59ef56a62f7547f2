use thiserror::Error;

#[derive(Error, Debug)]
pub enum FinderError {
    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("CSV export error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Request validation error: {message}")]
    ValidationError { message: String },

    #[error("Batch processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Input,
    Network,
    Processing,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl FinderError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            FinderError::ConfigError { .. }
            | FinderError::MissingConfigError { .. }
            | FinderError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            FinderError::ValidationError { .. } | FinderError::SerializationError(_) => {
                ErrorCategory::Input
            }
            FinderError::HttpError(_) => ErrorCategory::Network,
            FinderError::ProcessingError { .. } | FinderError::CsvError(_) => {
                ErrorCategory::Processing
            }
            FinderError::ZipError(_) | FinderError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Configuration | ErrorCategory::Input | ErrorCategory::Processing => {
                ErrorSeverity::High
            }
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 給使用者的修復建議
    pub fn recovery_suggestion(&self) -> String {
        match self {
            FinderError::MissingConfigError { field } => {
                format!("Provide a value for '{}' on the command line or in the TOML file", field)
            }
            FinderError::InvalidConfigValueError { field, .. } => {
                format!("Check the value of '{}' and try again", field)
            }
            FinderError::ConfigError { .. } => {
                "Check the configuration file syntax and referenced environment variables"
                    .to_string()
            }
            FinderError::ValidationError { .. } => {
                "The request needs a non-empty `entries` array of {company, website, linkedinProfiles}"
                    .to_string()
            }
            FinderError::SerializationError(_) => {
                "Make sure the request file is valid JSON".to_string()
            }
            FinderError::HttpError(_) => "Check network connectivity and proxy settings".to_string(),
            FinderError::IoError(_) | FinderError::ZipError(_) => {
                "Check that the input file exists and the output path is writable".to_string()
            }
            FinderError::CsvError(_) | FinderError::ProcessingError { .. } => {
                "Re-run with --verbose to see which entry failed".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Input => format!("Invalid request: {}", self),
            ErrorCategory::Network => format!("Network problem: {}", self),
            ErrorCategory::Processing => format!("Processing failed: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, FinderError>;
