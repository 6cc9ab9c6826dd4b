use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

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

    #[error("Duplicate project id: {id}")]
    DuplicateProjectId { id: u32 },

    #[error("Invalid project {id}: {reason}")]
    InvalidProject { id: u32, reason: String },

    #[error("Project not found: {id}")]
    ProjectNotFound { id: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Catalog,
    Lookup,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// Process exit code for a command that failed with this severity.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Medium | ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl CatalogError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CatalogError::ConfigValidationError { .. }
            | CatalogError::InvalidConfigValueError { .. }
            | CatalogError::MissingConfigError { .. } => ErrorCategory::Configuration,
            CatalogError::DuplicateProjectId { .. } | CatalogError::InvalidProject { .. } => {
                ErrorCategory::Catalog
            }
            CatalogError::ProjectNotFound { .. } => ErrorCategory::Lookup,
            CatalogError::IoError(_) | CatalogError::SerializationError(_) => {
                ErrorCategory::System
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Lookup => ErrorSeverity::Medium,
            ErrorCategory::Configuration | ErrorCategory::Catalog => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CatalogError::IoError(e) => format!("Could not read or write a file: {}", e),
            CatalogError::SerializationError(e) => format!("Could not produce JSON output: {}", e),
            CatalogError::ConfigValidationError { field, message } => {
                format!("The catalog file is invalid ({}): {}", field, message)
            }
            CatalogError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            CatalogError::MissingConfigError { field } => {
                format!("Setting '{}' is required", field)
            }
            CatalogError::DuplicateProjectId { id } => {
                format!("Two projects share the id {}", id)
            }
            CatalogError::InvalidProject { id, reason } => {
                format!("Project {} is invalid: {}", id, reason)
            }
            CatalogError::ProjectNotFound { id } => format!("No project with id {}", id),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CatalogError::IoError(_) => "Check that the path exists and is writable",
            CatalogError::SerializationError(_) => "Try a different --format",
            CatalogError::ConfigValidationError { .. } => "Fix the TOML syntax in the catalog file",
            CatalogError::InvalidConfigValueError { .. }
            | CatalogError::MissingConfigError { .. } => "Correct the setting and run again",
            CatalogError::DuplicateProjectId { .. } => "Give every project a unique id",
            CatalogError::InvalidProject { .. } => {
                "Project ids must be positive and titles non-empty"
            }
            CatalogError::ProjectNotFound { .. } => "Run `list` to see available project ids",
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
