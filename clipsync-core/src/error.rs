/// Structured error types for clipsync-core.
///
/// Uses `thiserror` for better API surface and error composition.
/// The binary crate (clipsync-server's `main`) can still use `anyhow`
/// for convenience, but library consumers get structured errors.

use thiserror::Error;

/// Main error type for configuration loading
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable missing or empty
    #[error("Environment variable '{name}' is required but was not provided")]
    MissingEnv { name: &'static str },

    /// Environment variable present but unusable
    #[error("Environment variable '{name}' is invalid: {reason}")]
    InvalidEnv { name: &'static str, reason: String },
}

/// Result type alias for clipsync-core operations
pub type Result<T> = std::result::Result<T, ConfigError>;

impl ConfigError {
    /// Create an invalid-env error
    pub fn invalid_env(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidEnv {
            name,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ConfigError::MissingEnv {
            name: "POSTGRES_USER",
        };
        assert_eq!(
            err.to_string(),
            "Environment variable 'POSTGRES_USER' is required but was not provided"
        );

        let err = ConfigError::invalid_env("APP_PORT", "not a port number");
        assert!(err.to_string().contains("APP_PORT"));
        assert!(err.to_string().contains("not a port number"));
    }
}
