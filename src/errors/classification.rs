use super::types::ObserverError;

/// Coarse error class surfaced to HTTP clients and the CLI exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Configuration,
    Transport,
    Parse,
    NotFound,
    Internal,
}

#[derive(Debug, Clone)]
pub struct ErrorClassification {
    pub error_type: &'static str,
    pub kind: ErrorKind,
    pub status: u16,
}

impl ErrorClassification {
    fn new(error_type: &'static str, kind: ErrorKind) -> Self {
        let status = match kind {
            ErrorKind::Validation => 400,
            ErrorKind::NotFound => 404,
            _ => 500,
        };
        Self { error_type, kind, status }
    }
}

impl ObserverError {
    /// Classify this error into the validation / configuration / transport /
    /// parse taxonomy. None of these classes is ever retried.
    pub fn classify(&self) -> ErrorClassification {
        match self {
            ObserverError::Validation(_) => ErrorClassification::new("ValidationError", ErrorKind::Validation),
            ObserverError::Config(_) => ErrorClassification::new("ConfigurationError", ErrorKind::Configuration),

            ObserverError::Authentication(_) => ErrorClassification::new("AuthenticationError", ErrorKind::Transport),
            ObserverError::LLMApi(_) => ErrorClassification::new("LLMApiError", ErrorKind::Transport),
            ObserverError::RateLimit(_) => ErrorClassification::new("RateLimitError", ErrorKind::Transport),
            ObserverError::Network(_) => ErrorClassification::new("NetworkError", ErrorKind::Transport),
            ObserverError::Timeout(_) => ErrorClassification::new("TimeoutError", ErrorKind::Transport),

            ObserverError::Parse(_) => ErrorClassification::new("ParseError", ErrorKind::Parse),
            ObserverError::NotFound(_) => ErrorClassification::new("NotFoundError", ErrorKind::NotFound),

            ObserverError::Database(_) => ErrorClassification::new("DatabaseError", ErrorKind::Internal),
            ObserverError::Io(_) => ErrorClassification::new("IoError", ErrorKind::Internal),
            ObserverError::Json(_) => ErrorClassification::new("JsonError", ErrorKind::Internal),
            ObserverError::Yaml(_) => ErrorClassification::new("YamlError", ErrorKind::Internal),
            ObserverError::Internal(_) => ErrorClassification::new("InternalError", ErrorKind::Internal),
        }
    }

    /// Process exit code used by the CLI.
    pub fn exit_code(&self) -> i32 {
        match self.classify().kind {
            ErrorKind::Configuration => 2,
            ErrorKind::Validation => 3,
            ErrorKind::Transport | ErrorKind::Parse => 4,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_is_bad_request() {
        let err = ObserverError::Validation("Contract code is required".into());
        let class = err.classify();
        assert_eq!(class.status, 400);
        assert_eq!(class.kind, ErrorKind::Validation);
        assert_eq!(class.error_type, "ValidationError");
    }

    #[test]
    fn test_config_error_is_server_error() {
        let err = ObserverError::Config("ANTHROPIC_API_KEY is not set".into());
        let class = err.classify();
        assert_eq!(class.status, 500);
        assert_eq!(class.kind, ErrorKind::Configuration);
    }

    #[test]
    fn test_timeout_is_transport() {
        let err = ObserverError::Timeout("model call exceeded 120s".into());
        assert_eq!(err.classify().kind, ErrorKind::Transport);
        assert_eq!(err.classify().status, 500);
    }

    #[test]
    fn test_network_and_rate_limit_are_transport() {
        assert_eq!(ObserverError::Network("refused".into()).classify().kind, ErrorKind::Transport);
        assert_eq!(ObserverError::RateLimit("429".into()).classify().kind, ErrorKind::Transport);
    }

    #[test]
    fn test_parse_error() {
        let err = ObserverError::Parse("no JSON object in reply".into());
        assert_eq!(err.classify().kind, ErrorKind::Parse);
        assert_eq!(err.classify().error_type, "ParseError");
    }

    #[test]
    fn test_not_found_status() {
        assert_eq!(ObserverError::NotFound("exploit".into()).classify().status, 404);
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(ObserverError::Config("x".into()).exit_code(), 2);
        assert_eq!(ObserverError::Validation("x".into()).exit_code(), 3);
        assert_eq!(ObserverError::Parse("x".into()).exit_code(), 4);
        assert_eq!(ObserverError::Internal("x".into()).exit_code(), 1);
    }
}
