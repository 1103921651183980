use thiserror::Error;

/// Errors surfaced by the pattern components and the demonstration driver.
#[derive(Debug, Error)]
pub enum PatternError {
    /// `detach` was called with an observer that is not attached to the subject.
    #[error("Observer not found in subject: {name}")]
    ObserverNotFound { name: String },

    #[error("Failed to write demonstration output: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_observer_not_found_display() {
        let err = PatternError::ObserverNotFound {
            name: "Observer1".to_string(),
        };
        assert_eq!(err.to_string(), "Observer not found in subject: Observer1");
    }

    #[test]
    fn test_io_display() {
        let err: PatternError =
            std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed").into();
        assert_eq!(
            err.to_string(),
            "Failed to write demonstration output: pipe closed"
        );
    }

    #[test]
    fn test_debug_format() {
        let err = PatternError::ObserverNotFound {
            name: "ghost".to_string(),
        };
        assert_eq!(format!("{:?}", err), "ObserverNotFound { name: \"ghost\" }");
    }

    #[test]
    fn test_error_trait() {
        let err: &dyn std::error::Error = &PatternError::ObserverNotFound {
            name: "ghost".to_string(),
        };
        assert_eq!(err.to_string(), "Observer not found in subject: ghost");
        assert!(err.source().is_none());
    }
}
