use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContactError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Email service responded with {status}: {body}")]
    ApiResponseError { status: u16, body: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Unknown form field: {key}")]
    UnknownFieldError { key: String },

    #[error("{}", crate::domain::model::INVALID_EMAIL_TEXT)]
    InvalidEmailFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Configuration,
    Input,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ContactError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ContactError::ApiError(_) | ContactError::ApiResponseError { .. } => {
                ErrorCategory::Network
            }
            ContactError::TomlError(_)
            | ContactError::ConfigValidationError { .. }
            | ContactError::InvalidConfigValueError { .. }
            | ContactError::MissingConfigError { .. } => ErrorCategory::Configuration,
            ContactError::UnknownFieldError { .. } | ContactError::InvalidEmailFormat => {
                ErrorCategory::Input
            }
            ContactError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Low,
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Whether trying the same operation again could succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            ContactError::ApiError(e) => e.is_timeout() || e.is_connect(),
            ContactError::ApiResponseError { status, .. } => *status >= 500 || *status == 429,
            _ => false,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ContactError::ApiError(_) => "Could not reach the email service".to_string(),
            ContactError::ApiResponseError { status, .. } => {
                format!("The email service rejected the message (HTTP {})", status)
            }
            ContactError::IoError(e) => format!("File operation failed: {}", e),
            ContactError::TomlError(_) => "The configuration file is not valid TOML".to_string(),
            ContactError::ConfigValidationError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            ContactError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value '{}' is invalid: {}", field, reason)
            }
            ContactError::MissingConfigError { field } => {
                format!("Configuration value '{}' is missing", field)
            }
            ContactError::UnknownFieldError { key } => {
                format!("'{}' is not a field of the contact form", key)
            }
            ContactError::InvalidEmailFormat => self.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ContactError::ApiError(_) => "Check your network connection and try again",
            ContactError::ApiResponseError { status, .. } if *status == 400 || *status == 403 => {
                "Check EMAILJS_SERVICE_ID, EMAILJS_TEMPLATE_ID and EMAILJS_ACCESS_TOKEN"
            }
            ContactError::ApiResponseError { .. } => "Wait a moment and try again",
            ContactError::IoError(_) => "Make sure the file exists and is readable",
            ContactError::TomlError(_)
            | ContactError::ConfigValidationError { .. }
            | ContactError::InvalidConfigValueError { .. }
            | ContactError::MissingConfigError { .. } => {
                "Fix the configuration file and run `contact-section check`"
            }
            ContactError::UnknownFieldError { .. } => {
                "Use one of the field keys declared in the configuration"
            }
            ContactError::InvalidEmailFormat => "Enter an address like name@example.com",
        }
    }
}

pub type Result<T> = std::result::Result<T, ContactError>;
