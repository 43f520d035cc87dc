use std::error::Error;

/// Base trait for all hwnd-pilot errors
pub trait PilotError: Error + Send + Sync + 'static {
    /// Error code for programmatic handling
    fn error_code(&self) -> &'static str;

    /// Whether this error is caused by caller input rather than the OS
    fn is_user_error(&self) -> bool {
        false
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {message}")]
    ParseFailed { path: String, message: String },

    #[error("Unknown clipboard encoding '{label}'")]
    InvalidEncoding { label: String },

    #[error("Clipboard encoding '{label}' can only be read, not written")]
    UnsupportedEncoding { label: String },

    #[error("Could not determine current directory: {source}")]
    CurrentDirUnavailable {
        #[source]
        source: std::io::Error,
    },
}

impl ConfigError {
    /// Whether the error just means the file is absent.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ConfigError::ReadFailed { source, .. } if source.kind() == std::io::ErrorKind::NotFound
        )
    }
}

impl PilotError for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            ConfigError::ReadFailed { .. } => "CONFIG_READ_FAILED",
            ConfigError::ParseFailed { .. } => "CONFIG_PARSE_FAILED",
            ConfigError::InvalidEncoding { .. } => "CONFIG_INVALID_ENCODING",
            ConfigError::UnsupportedEncoding { .. } => "CONFIG_UNSUPPORTED_ENCODING",
            ConfigError::CurrentDirUnavailable { .. } => "CONFIG_CURRENT_DIR_UNAVAILABLE",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            ConfigError::ParseFailed { .. }
                | ConfigError::InvalidEncoding { .. }
                | ConfigError::UnsupportedEncoding { .. }
        )
    }
}
