use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{debug, error, warn};

use super::types::{reason_phrase, Error, HttpError};
use crate::config::ResponseConfig;

/// Render `err` as a JSON `{"status","code","message"}` response.
///
/// Generic errors are rendered as `internal_server_error`. Statuses that are
/// not valid HTTP codes are sent as 500, with the original value kept in the
/// body.
pub fn render(config: &ResponseConfig, err: impl Into<Error>) -> Response {
    let mut err = err.into().into_http();
    let status = StatusCode::from_u16(err.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    if status.is_server_error() {
        error!(status = err.status(), code = %err.code(), "{err}");
        if !config.expose_server_messages {
            let phrase = reason_phrase(err.status());
            err = err.with_message(phrase);
        }
    } else if status.is_client_error() {
        if config.log_client_errors {
            warn!(status = err.status(), code = %err.code(), "{err}");
        }
    } else {
        debug!(status = err.status(), code = %err.code(), "{err}");
    }

    (status, Json(err)).into_response()
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        render(&ResponseConfig::default(), self)
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        render(&ResponseConfig::default(), self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::codes::*;
    use crate::errors::merge::bad_request_with;

    #[test]
    fn test_into_response_status_catalog() {
        for (full, empty) in CATALOG {
            let response = (*full).clone().into_response();
            assert_eq!(response.status().as_u16(), full.status());

            let response = (*empty).clone().into_response();
            assert_eq!(response.status().as_u16(), empty.status());
        }
    }

    #[test]
    fn test_into_response_status_merged() {
        let response = bad_request_with("missing field").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_into_response_status_generic() {
        let response = Error::msg("unexpected").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_into_response_status_out_of_range() {
        let response = HttpError::new(42, "weird", "").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_into_response_status_custom() {
        let response = HttpError::new(429, "rate_limited", "slow down").into_response();
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    }

    #[test]
    fn test_render_redacts_server_messages() {
        let config = ResponseConfig {
            expose_server_messages: false,
            log_client_errors: false,
        };

        let response = render(&config, Error::msg("password rejected"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = render(&config, bad_request_with("missing field"));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_json_content_type() {
        let response = NOT_FOUND.clone().into_response();
        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/json");
    }
}
