use thiserror::Error;

#[derive(Error, Debug)]
pub enum OfferError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Store rejected the offer (HTTP {status}): {message}")]
    PersistenceError { status: u16, message: String },

    #[error("An offer is already being saved")]
    SubmissionInProgress,

    #[error("Unknown {kind}: '{value}'")]
    UnknownOption { kind: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Persistence,
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

impl OfferError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            OfferError::ApiError(_) => ErrorCategory::Network,
            OfferError::PersistenceError { .. } | OfferError::SubmissionInProgress => {
                ErrorCategory::Persistence
            }
            OfferError::ConfigError { .. }
            | OfferError::MissingConfigError { .. }
            | OfferError::InvalidConfigValueError { .. }
            | OfferError::ConfigValidationError { .. } => ErrorCategory::Configuration,
            OfferError::UnknownOption { .. } => ErrorCategory::Input,
            OfferError::IoError(_) | OfferError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            OfferError::SubmissionInProgress => ErrorSeverity::Low,
            OfferError::ApiError(_) | OfferError::PersistenceError { .. } => ErrorSeverity::Medium,
            OfferError::ConfigError { .. }
            | OfferError::MissingConfigError { .. }
            | OfferError::InvalidConfigValueError { .. }
            | OfferError::ConfigValidationError { .. }
            | OfferError::UnknownOption { .. } => ErrorSeverity::High,
            OfferError::IoError(_) | OfferError::SerializationError(_) => ErrorSeverity::Critical,
        }
    }

    /// True when the remote store did not accept the write, for whatever reason.
    pub fn is_persistence_failure(&self) -> bool {
        matches!(
            self,
            OfferError::ApiError(_) | OfferError::PersistenceError { .. }
        )
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            OfferError::ApiError(_) => {
                "Check the network connection and the store URL, then save again".to_string()
            }
            OfferError::PersistenceError { status, .. } if *status == 401 || *status == 403 => {
                "Check that the store API key is valid for the offers table".to_string()
            }
            OfferError::PersistenceError { .. } => {
                "The selection was kept; review the store response and save again".to_string()
            }
            OfferError::SubmissionInProgress => {
                "Wait for the current save to finish".to_string()
            }
            OfferError::MissingConfigError { field } => {
                format!("Set '{}' in the config file or environment", field)
            }
            OfferError::ConfigError { .. }
            | OfferError::InvalidConfigValueError { .. }
            | OfferError::ConfigValidationError { .. } => {
                "Fix the configuration file and try again".to_string()
            }
            OfferError::UnknownOption { kind, .. } => {
                format!("Run `offer-estimator catalog` to list valid {} values", kind)
            }
            OfferError::IoError(_) => "Check file paths and permissions".to_string(),
            OfferError::SerializationError(_) => {
                "The store returned data in an unexpected shape".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            OfferError::ApiError(_) => "Could not reach the offer store".to_string(),
            OfferError::PersistenceError { status, .. } => {
                format!("The offer was not saved (store answered {})", status)
            }
            OfferError::SubmissionInProgress => "A save is already in progress".to_string(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, OfferError>;
