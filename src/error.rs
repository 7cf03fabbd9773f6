//! Error types for page-window
//!
//! Numeric input is never rejected (it is clamped instead), so almost every
//! failure here comes from resolving a scrolling style or loading defaults.

use thiserror::Error;

/// The main error type for page-window
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Argument Errors
    // ============================================================================
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Unknown scrolling style '{name}' (available: {available})")]
    UnknownScrollingStyle { name: String, available: String },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create an unknown scrolling style error listing the registered names
    pub fn unknown_style(name: impl Into<String>, available: &[String]) -> Self {
        Self::UnknownScrollingStyle {
            name: name.into(),
            available: available.join(", "),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid config value error
    pub fn invalid_config_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Check if this error was caused by a bad scrolling style selector.
    ///
    /// An unresolvable style name is reported as its own variant but belongs
    /// to the same invalid-argument family.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Error::InvalidArgument { .. } | Error::UnknownScrollingStyle { .. }
        )
    }
}

/// Result type alias for page-window
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::invalid_argument("selector must be a string");
        assert_eq!(
            err.to_string(),
            "Invalid argument: selector must be a string"
        );

        let err = Error::unknown_style("Bouncing", &["All".to_string(), "Jumping".to_string()]);
        assert_eq!(
            err.to_string(),
            "Unknown scrolling style 'Bouncing' (available: All, Jumping)"
        );

        let err = Error::invalid_config_value("page_range", "must be at least 1");
        assert_eq!(
            err.to_string(),
            "Invalid config value for 'page_range': must be at least 1"
        );
    }

    #[test]
    fn test_is_invalid_argument() {
        assert!(Error::invalid_argument("x").is_invalid_argument());
        assert!(Error::unknown_style("Nope", &[]).is_invalid_argument());

        assert!(!Error::config("x").is_invalid_argument());
        assert!(!Error::Other("x".to_string()).is_invalid_argument());
    }

    #[test]
    fn test_result_context() {
        let result: Result<()> = Err(Error::config("inner"));
        let with_context = result.context("outer");
        assert!(with_context
            .unwrap_err()
            .to_string()
            .contains("outer: Configuration error: inner"));
    }

    #[test]
    fn test_result_with_context() {
        let result: std::result::Result<(), std::io::Error> =
            Err(std::io::Error::new(std::io::ErrorKind::Other, "disk gone"));
        let err = result
            .with_context(|| format!("Failed to load '{}'", "nav.yaml"))
            .unwrap_err();
        assert_eq!(err.to_string(), "Failed to load 'nav.yaml': IO error: disk gone");
    }
}
