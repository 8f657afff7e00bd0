//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    /// Transport failure (DNS, connect, timeout). Surfaced as-is, never
    /// retried.
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx response from the API, with a friendlier message for the
    /// common statuses.
    #[error("{message}")]
    Api {
        status: u16,
        body: Option<String>,
        message: String,
    },

    /// The server claimed success but sent no body.
    #[error("The server returned an empty response body")]
    EmptyBody,

    /// The server claimed success but the body did not decode into the
    /// declared result type.
    #[error("Failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),
}

impl HttpError {
    /// Maps a non-2xx status and its raw body to a typed error.
    ///
    /// `body` carries whatever the server sent; callers that fail to read
    /// the body pass `None` rather than surfacing the read failure.
    pub fn from_status(status: u16, body: Option<String>) -> Self {
        let lower = body.as_deref().unwrap_or_default().to_lowercase();
        let message = match status {
            400 if lower.contains("authorization") => {
                "You must provide an authorization header.".to_string()
            }
            400 if lower.contains("bearer") => {
                "You must provide a Bearer token in the authorization header.".to_string()
            }
            400 => "The request was rejected as invalid.".to_string(),
            401 => "The provided API key is invalid.".to_string(),
            403 => "Your API key is not allowed to access this resource.".to_string(),
            _ => match body.as_deref() {
                Some(b) => format!("HTTP {}: API request failed. Body: {}", status, b),
                None => format!("HTTP {}: API request failed.", status),
            },
        };

        HttpError::Api {
            status,
            body,
            message,
        }
    }

    /// Status code of a mapped API error, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            HttpError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message_of(err: HttpError) -> String {
        err.to_string()
    }

    #[test]
    fn test_400_prefers_authorization_over_bearer() {
        let err = HttpError::from_status(
            400,
            Some("Bearer token missing from Authorization header".into()),
        );
        assert_eq!(message_of(err), "You must provide an authorization header.");
    }

    #[test]
    fn test_400_bearer_is_case_insensitive() {
        let err = HttpError::from_status(400, Some("A BEARER token is required".into()));
        assert_eq!(
            message_of(err),
            "You must provide a Bearer token in the authorization header."
        );
    }

    #[test]
    fn test_400_without_keywords_is_generic() {
        let err = HttpError::from_status(400, Some("pageSize out of range".into()));
        assert_eq!(message_of(err), "The request was rejected as invalid.");
    }

    #[test]
    fn test_401_maps_to_invalid_key() {
        let err = HttpError::from_status(401, None);
        assert_eq!(err.status(), Some(401));
        assert_eq!(message_of(err), "The provided API key is invalid.");
    }

    #[test]
    fn test_403_maps_to_forbidden() {
        let err = HttpError::from_status(403, Some("no access".into()));
        assert_eq!(
            message_of(err),
            "Your API key is not allowed to access this resource."
        );
    }

    #[test]
    fn test_other_status_appends_body_when_present() {
        let err = HttpError::from_status(503, Some("maintenance".into()));
        assert_eq!(
            message_of(err),
            "HTTP 503: API request failed. Body: maintenance"
        );

        let err = HttpError::from_status(500, None);
        assert_eq!(message_of(err), "HTTP 500: API request failed.");
    }

    #[test]
    fn test_api_error_keeps_raw_body() {
        let err = HttpError::from_status(401, Some("{\"error\":\"bad key\"}".into()));
        match err {
            HttpError::Api { status, body, .. } => {
                assert_eq!(status, 401);
                assert_eq!(body.as_deref(), Some("{\"error\":\"bad key\"}"));
            }
            other => panic!("expected Api error, got: {other:?}"),
        }
    }
}
