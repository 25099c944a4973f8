use thiserror::Error;

/// Result type for searchlab operations
pub type LabResult<T> = Result<T, LabError>;

/// Errors that can occur while driving a comparison run.
///
/// The search algorithms themselves never fail; every edge case they
/// meet is expressed through the outcome value. These variants cover
/// the surrounding layers: user input, configuration, and I/O.
#[derive(Error, Debug)]
pub enum LabError {
    #[error("Invalid number: {0}")]
    InvalidNumber(String),
    #[error("Invalid selection: {0}")]
    InvalidSelection(String),
    #[error("Empty sequence")]
    EmptySequence,
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl LabError {
    pub fn invalid_number(input: impl Into<String>) -> Self {
        Self::InvalidNumber(input.into())
    }

    pub fn invalid_selection(input: impl Into<String>) -> Self {
        Self::InvalidSelection(input.into())
    }

    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = LabError::invalid_number("abc");
        assert!(matches!(err, LabError::InvalidNumber(_)));

        let err = LabError::invalid_selection("7");
        assert!(matches!(err, LabError::InvalidSelection(_)));

        let err = LabError::config_error("size must be at least 1");
        assert!(matches!(err, LabError::ConfigError(_)));
    }

    #[test]
    fn test_error_messages() {
        let err = LabError::invalid_number("abc");
        assert_eq!(err.to_string(), "Invalid number: abc");

        let err = LabError::invalid_selection("7");
        assert_eq!(err.to_string(), "Invalid selection: 7");

        let err = LabError::EmptySequence;
        assert_eq!(err.to_string(), "Empty sequence");

        let err = LabError::config_error("span_factor must be at least 1");
        assert_eq!(
            err.to_string(),
            "Configuration error: span_factor must be at least 1"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = LabError::from(io);
        assert!(matches!(err, LabError::IoError(_)));
    }
}
