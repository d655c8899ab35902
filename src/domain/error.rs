use thiserror::Error;

/// Core provisioning errors
#[derive(Debug, Error)]
pub enum ProvisionError {
    #[error("Already exists: {message}")]
    AlreadyExists { message: String },

    #[error("Not found: {message}")]
    NotFound { message: String },

    #[error("Authorization failure: {message}")]
    Authorization { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Transient failure: {message}")]
    Transient { message: String },

    #[error("Service error: {message}")]
    Service { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl ProvisionError {
    pub fn already_exists(message: impl Into<String>) -> Self {
        Self::AlreadyExists {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn authorization(message: impl Into<String>) -> Self {
        Self::Authorization {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn transient(message: impl Into<String>) -> Self {
        Self::Transient {
            message: message.into(),
        }
    }

    pub fn service(message: impl Into<String>) -> Self {
        Self::Service {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// The one error kind the role ensurer recovers from locally.
    pub fn is_already_exists(&self) -> bool {
        matches!(self, Self::AlreadyExists { .. })
    }

    /// Whether an external caller could reasonably retry the failed call.
    ///
    /// The provisioner itself never retries; this classification exists for
    /// callers that wrap it with their own backoff.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Transient { .. } | Self::Service { .. })
    }

    /// Prefix the message with additional context, keeping the error kind.
    pub fn context(self, prefix: impl std::fmt::Display) -> Self {
        let rewrite = |message: String| format!("{prefix}: {message}");

        match self {
            Self::AlreadyExists { message } => Self::AlreadyExists {
                message: rewrite(message),
            },
            Self::NotFound { message } => Self::NotFound {
                message: rewrite(message),
            },
            Self::Authorization { message } => Self::Authorization {
                message: rewrite(message),
            },
            Self::Validation { message } => Self::Validation {
                message: rewrite(message),
            },
            Self::Transient { message } => Self::Transient {
                message: rewrite(message),
            },
            Self::Service { message } => Self::Service {
                message: rewrite(message),
            },
            Self::Configuration { message } => Self::Configuration {
                message: rewrite(message),
            },
        }
    }
}
