use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Integer overflow in {operation}")]
    OverflowError { operation: String },

    #[error("Invalid range: start {start} is greater than end {end}")]
    InvalidRangeError { start: i32, end: i32 },

    #[error("{operation} is undefined for {value}")]
    DomainError { operation: String, value: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    System,
    Configuration,
    Arithmetic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl DemoError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DemoError::IoError(_) | DemoError::SerializationError(_) => ErrorCategory::System,
            DemoError::ConfigParseError { .. } | DemoError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            DemoError::OverflowError { .. }
            | DemoError::InvalidRangeError { .. }
            | DemoError::DomainError { .. } => ErrorCategory::Arithmetic,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            DemoError::IoError(_) => ErrorSeverity::Critical,
            DemoError::SerializationError(_) => ErrorSeverity::Critical,
            DemoError::ConfigParseError { .. } | DemoError::InvalidConfigValueError { .. } => {
                ErrorSeverity::Medium
            }
            DemoError::OverflowError { .. }
            | DemoError::InvalidRangeError { .. }
            | DemoError::DomainError { .. } => ErrorSeverity::High,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DemoError::IoError(e) => format!("Could not write or read a file: {}", e),
            DemoError::SerializationError(e) => format!("Could not render the report: {}", e),
            DemoError::ConfigParseError { message } => {
                format!("The demo script could not be read: {}", message)
            }
            DemoError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            DemoError::OverflowError { operation } => {
                format!("The result of {} does not fit in a 32-bit integer", operation)
            }
            DemoError::InvalidRangeError { start, end } => {
                format!("Cannot pick a number between {} and {}", start, end)
            }
            DemoError::DomainError { operation, value } => {
                format!("Cannot compute {} of {}", operation, value)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::System => "Check file permissions and that stdout is writable",
            ErrorCategory::Configuration => "Fix the demo script (TOML) or the command line flags",
            ErrorCategory::Arithmetic => "Use smaller inputs or a valid range in the demo script",
        }
    }
}

pub type Result<T> = std::result::Result<T, DemoError>;
