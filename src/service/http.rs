//! HTTP utilities for Redfish REST calls

use crate::error::Error;
use reqwest::{Method, StatusCode};

/// User agent attached to every request.
pub const USER_AGENT: &str = concat!("rfwalk/", env!("CARGO_PKG_VERSION"));

/// Path requested when the caller passes an empty path.
pub const DEFAULT_SERVICE_ROOT: &str = "/redfish/v1/";

/// Maximum length of response body to log (to avoid logging sensitive data)
const MAX_LOG_BODY_LENGTH: usize = 200;

/// HTTP verbs the transport issues, each with the status codes it accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Verb {
    /// Status codes that count as success for this verb.
    pub const fn accepted_statuses(self) -> &'static [u16] {
        match self {
            Verb::Get => &[200],
            Verb::Post | Verb::Put | Verb::Patch => &[200, 201, 202, 204],
            Verb::Delete => &[200, 202, 204],
        }
    }

    /// Classify a response status.
    pub fn accepts(self, status: StatusCode) -> bool {
        self.accepted_statuses().contains(&status.as_u16())
    }

    /// HTTP method sent for this verb.
    pub fn method(self) -> Method {
        match self {
            Verb::Get => Method::GET,
            Verb::Post => Method::POST,
            Verb::Put => Method::PUT,
            Verb::Patch => Method::PATCH,
            Verb::Delete => Method::DELETE,
        }
    }
}

/// Sanitize response body for logging
/// Truncates long responses and strips control characters
pub(crate) fn sanitize_for_log(body: &str) -> String {
    let truncated = if body.len() > MAX_LOG_BODY_LENGTH {
        let mut cut = MAX_LOG_BODY_LENGTH;
        while !body.is_char_boundary(cut) {
            cut -= 1;
        }
        format!("{}... [truncated, {} bytes total]", &body[..cut], body.len())
    } else {
        body.to_string()
    };

    truncated.replace(|c: char| !c.is_ascii_graphic() && c != ' ', "")
}

/// Format a library error for display
/// Security: maps status failures to generic messages instead of echoing
/// service bodies back to the terminal
pub fn format_error(error: &Error) -> String {
    match error {
        Error::InvalidEndpoint(endpoint) => {
            format!("Invalid endpoint '{}'. Use an http:// or https:// URL.", endpoint)
        }
        Error::Transport(_) => {
            "Could not reach the service. Check the endpoint and your network.".to_string()
        }
        Error::RequestFailed { status, .. } => match status {
            400 => "Invalid request. Check your parameters.".to_string(),
            401 => "Authentication failed. Check your session token.".to_string(),
            403 => "Permission denied for this resource.".to_string(),
            404 => "Resource not found.".to_string(),
            405 => "Operation not supported by this resource.".to_string(),
            500..=599 => "Service temporarily unavailable. Please try again.".to_string(),
            other => format!("Request failed with status {}.", other),
        },
        Error::MalformedEnvelope(_) => {
            "The service returned a response that does not match the expected schema.".to_string()
        }
        Error::DetachedEntity { id } => {
            let sanitized: String = id
                .chars()
                .filter(|c| c.is_ascii_graphic() || *c == ' ')
                .take(80)
                .collect();
            format!("Resource '{}' is not bound to a service.", sanitized)
        }
        Error::InvalidRequest(reason) => format!("Invalid request: {}.", reason),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_accepts_only_200() {
        assert!(Verb::Get.accepts(StatusCode::OK));
        assert!(!Verb::Get.accepts(StatusCode::CREATED));
        assert!(!Verb::Get.accepts(StatusCode::NO_CONTENT));
        assert!(!Verb::Get.accepts(StatusCode::NOT_FOUND));
    }

    #[test]
    fn test_mutating_verbs_accept_created_and_no_content() {
        for verb in [Verb::Post, Verb::Put, Verb::Patch] {
            for code in [200u16, 201, 202, 204] {
                let status = StatusCode::from_u16(code).unwrap();
                assert!(verb.accepts(status), "{:?} should accept {}", verb, code);
            }
            assert!(!verb.accepts(StatusCode::BAD_REQUEST));
        }
    }

    #[test]
    fn test_delete_rejects_created() {
        assert!(Verb::Delete.accepts(StatusCode::OK));
        assert!(Verb::Delete.accepts(StatusCode::ACCEPTED));
        assert!(Verb::Delete.accepts(StatusCode::NO_CONTENT));
        assert!(!Verb::Delete.accepts(StatusCode::CREATED));
    }

    #[test]
    fn test_sanitize_truncates_long_bodies() {
        let body = "x".repeat(500);
        let sanitized = sanitize_for_log(&body);
        assert!(sanitized.starts_with(&"x".repeat(200)));
        assert!(sanitized.contains("500 bytes total"));
    }

    #[test]
    fn test_sanitize_strips_control_characters() {
        assert_eq!(sanitize_for_log("a\nb\tc"), "abc");
    }

    #[test]
    fn test_format_error_maps_statuses() {
        let err = Error::RequestFailed {
            status: 401,
            body: "{\"error\":\"secret detail\"}".to_string(),
        };
        let msg = format_error(&err);
        assert!(msg.contains("Authentication"));
        assert!(!msg.contains("secret"));

        let err = Error::RequestFailed {
            status: 503,
            body: String::new(),
        };
        assert!(format_error(&err).contains("unavailable"));
    }
}
