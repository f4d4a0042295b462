use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("Failed to fetch {page}: {message}")]
    FetchError { page: String, message: String },

    #[error("Failed to store action '{title}': {message}")]
    PersistError { title: String, message: String },

    #[error("Selector error: {message}")]
    ParseError { message: String },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Storage,
    Data,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl EtlError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            EtlError::FetchError { .. } | EtlError::ApiError(_) => ErrorCategory::Network,
            EtlError::PersistError { .. } => ErrorCategory::Storage,
            EtlError::ParseError { .. } | EtlError::CsvError(_) => ErrorCategory::Data,
            EtlError::ConfigError { .. }
            | EtlError::ConfigValidationError { .. }
            | EtlError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            EtlError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 單頁或單筆失敗不影響整體流程
            EtlError::FetchError { .. } | EtlError::PersistError { .. } => ErrorSeverity::Low,
            EtlError::ApiError(_) => ErrorSeverity::Medium,
            EtlError::ParseError { .. }
            | EtlError::CsvError(_)
            | EtlError::ConfigError { .. }
            | EtlError::ConfigValidationError { .. }
            | EtlError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            EtlError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            EtlError::FetchError { page, .. } => format!("Could not download {}", page),
            EtlError::PersistError { title, .. } => format!("Could not save '{}'", title),
            EtlError::ApiError(_) => "A network request failed".to_string(),
            EtlError::IoError(_) => "A file could not be read or written".to_string(),
            EtlError::CsvError(_) => "CSV export failed".to_string(),
            EtlError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check your internet connection and that the site is reachable",
            ErrorCategory::Storage => {
                "Check VITE_SUPABASE_URL / VITE_SUPABASE_ANON_KEY and that the table exists"
            }
            ErrorCategory::Data => "The page layout may have changed; inspect the listing markup",
            ErrorCategory::Configuration => "Review the command-line flags or the TOML config file",
            ErrorCategory::System => "Check file permissions and available disk space",
        }
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;
