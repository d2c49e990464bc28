use thiserror::Error;

/// Failure of a backend call.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BackendError {
    /// No response: connection refused, DNS failure, aborted request.
    #[error("Network error: {message}")]
    Network { message: String },

    /// The backend rejected the request (4xx).
    #[error("Request rejected ({status}): {message}")]
    Validation { status: u16, message: String },

    /// The backend failed or answered with something unusable.
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },
}

impl BackendError {
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    pub fn validation(status: u16, message: impl Into<String>) -> Self {
        Self::Validation {
            status,
            message: message.into(),
        }
    }

    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server {
            status,
            message: message.into(),
        }
    }

    /// Classify a non-2xx response.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = if body.trim().is_empty() {
            default_reason(status).to_string()
        } else {
            body.trim().to_string()
        };
        match status {
            400..=499 => Self::validation(status, message),
            _ => Self::server(status, message),
        }
    }

    /// A 2xx response whose body could not be decoded.
    pub fn undecodable(status: u16, detail: impl std::fmt::Display) -> Self {
        Self::server(status, format!("unexpected response body: {detail}"))
    }

    /// Short heading for notifications.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Network { .. } => "Backend unreachable",
            Self::Validation { .. } => "Request rejected",
            Self::Server { .. } => "Server error",
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Network { .. } => None,
            Self::Validation { status, .. } | Self::Server { status, .. } => Some(*status),
        }
    }
}

fn default_reason(status: u16) -> &'static str {
    match status {
        400 => "bad request",
        404 => "not found",
        409 => "conflict",
        422 => "unprocessable entity",
        500 => "internal server error",
        502 => "bad gateway",
        503 => "service unavailable",
        _ => "unexpected status",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_classifies() {
        assert!(matches!(
            BackendError::from_status(404, ""),
            BackendError::Validation { status: 404, .. }
        ));
        assert!(matches!(
            BackendError::from_status(503, "down"),
            BackendError::Server { status: 503, .. }
        ));
        // Redirects and other oddities count as server failures.
        assert!(matches!(
            BackendError::from_status(302, ""),
            BackendError::Server { status: 302, .. }
        ));
    }

    #[test]
    fn test_message_falls_back_to_reason() {
        assert_eq!(
            BackendError::from_status(404, "  ").to_string(),
            "Request rejected (404): not found"
        );
        assert_eq!(
            BackendError::from_status(422, "title is required").to_string(),
            "Request rejected (422): title is required"
        );
    }

    #[test]
    fn test_title_and_status() {
        let err = BackendError::network("connection refused");
        assert_eq!(err.title(), "Backend unreachable");
        assert_eq!(err.status(), None);
        assert_eq!(BackendError::server(500, "boom").status(), Some(500));
    }
}
