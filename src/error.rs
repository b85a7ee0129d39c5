//! Error types for the Republik CLI

use thiserror::Error;

/// Result type alias for Republik operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
#[allow(dead_code)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Dialoguer(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Operation failed: {0}")]
    Other(String),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Dialoguer(err.to_string())
    }
}

/// API-related errors
#[derive(Debug, Error)]
#[allow(dead_code)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Not signed in or token revoked. Run `republik login` to request a new token.")]
    Unauthorized,

    #[error("The sign-in request is no longer known to the server")]
    RequestNotFound,

    #[error("API error ({status}): {message}")]
    Status { status: u16, message: String },

    #[error("Invalid API response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to API".to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Terminal failures of the sign-in handshake
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("The sign-in request was denied. Run `republik login` to start over.")]
    Denied,

    #[error(
        "The sign-in request expired before it was confirmed. Run `republik login` to start over."
    )]
    Expired,
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found. Run `republik login` to sign in.")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),

    #[error("No saved session. Run `republik login` to sign in.")]
    MissingSession,
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_unauthorized_message() {
        let err = ApiError::Unauthorized;
        assert!(err.to_string().contains("republik login"));
    }

    #[test]
    fn test_api_error_status_carries_payload() {
        let err = ApiError::Status {
            status: 502,
            message: "upstream unavailable".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("502"));
        assert!(msg.contains("upstream unavailable"));
    }

    #[test]
    fn test_api_error_network() {
        let err = ApiError::Network("Connection refused".to_string());
        assert!(err.to_string().contains("Connection refused"));
    }

    #[test]
    fn test_api_error_decode() {
        let err = ApiError::Decode("missing field `requestId`".to_string());
        assert!(err.to_string().contains("requestId"));
    }

    #[test]
    fn test_auth_error_messages_point_at_login() {
        assert!(AuthError::Denied.to_string().contains("republik login"));
        assert!(AuthError::Expired.to_string().contains("republik login"));
    }

    #[test]
    fn test_config_error_not_found() {
        let err = ConfigError::NotFound;
        assert!(err.to_string().contains("republik login"));
    }

    #[test]
    fn test_config_error_missing_session() {
        let err = ConfigError::MissingSession;
        assert!(err.to_string().contains("republik login"));
    }

    #[test]
    fn test_error_from_api_error() {
        let api_err = ApiError::Unauthorized;
        let err: Error = api_err.into();

        match err {
            Error::Api(ApiError::Unauthorized) => (),
            _ => panic!("Expected Error::Api(ApiError::Unauthorized)"),
        }
    }

    #[test]
    fn test_error_from_auth_error() {
        let err: Error = AuthError::Expired.into();

        match err {
            Error::Auth(AuthError::Expired) => (),
            _ => panic!("Expected Error::Auth(AuthError::Expired)"),
        }
    }

    #[test]
    fn test_config_error_from_yaml_error() {
        let yaml_str = "invalid: [yaml: content";
        let yaml_err = serde_yaml::from_str::<serde_yaml::Value>(yaml_str).unwrap_err();
        let config_err: ConfigError = yaml_err.into();

        match config_err {
            ConfigError::ParseError(_) => (),
            _ => panic!("Expected ConfigError::ParseError"),
        }
    }
}
