//! Error types shared by the service contracts.

use thiserror::Error;

/// Error surface common to all external collaborators.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The backing system is down or unreachable. The only variant the
    /// two-stage search strategy falls back on.
    #[error("Service unavailable: {0}")]
    Unavailable(String),

    /// The requested resource does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The backing system returned an error for this specific request.
    #[error("Backend error: {0}")]
    Backend(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_carry_context() {
        let err = ServiceError::NotFound("images/chair.png".to_string());
        assert_eq!(err.to_string(), "Not found: images/chair.png");

        let err = ServiceError::Unavailable("vector index offline".to_string());
        assert!(err.to_string().contains("vector index offline"));
    }
}
