//! Translation of gRPC statuses into structured HTTP errors.

pub mod codes;

pub use codes::RpcCode;

use std::error::Error as StdError;
use tracing::debug;

use crate::errors::{Error, HttpError};

/// An RPC-layer error: a status code plus the server's description.
pub trait RpcStatus: StdError + Send + Sync + 'static {
    fn rpc_code(&self) -> RpcCode;

    fn rpc_message(&self) -> &str;
}

/// Plain RPC status value, for callers that do not use `tonic`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("rpc error: code = {code} desc = {message}")]
pub struct RpcError {
    pub code: RpcCode,
    pub message: String,
}

impl RpcError {
    pub fn new(code: RpcCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl RpcStatus for RpcError {
    fn rpc_code(&self) -> RpcCode {
        self.code
    }

    fn rpc_message(&self) -> &str {
        &self.message
    }
}

#[cfg(feature = "grpc")]
impl RpcStatus for tonic::Status {
    fn rpc_code(&self) -> RpcCode {
        RpcCode::from_i32(self.code() as i32)
    }

    fn rpc_message(&self) -> &str {
        self.message()
    }
}

/// Translate an RPC error into an HTTP error.
///
/// `None` and `Ok` statuses yield `None`. Known codes become an [`HttpError`]
/// carrying the RPC message verbatim. Unrecognized codes are returned as the
/// original error, untouched, inside [`Error::Other`].
pub fn translate<S: RpcStatus>(err: Option<S>) -> Option<Error> {
    let err = err?;
    let code = err.rpc_code();

    match code.http_mapping() {
        Some((status, name)) => {
            Some(HttpError::new(status, name, err.rpc_message().to_owned()).into())
        }
        None if code == RpcCode::Ok => None,
        None => {
            debug!(rpc_code = code.as_i32(), "passing through unrecognized rpc status");
            Some(Error::other(err))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_and_ok() {
        assert!(translate::<RpcError>(None).is_none());
        assert!(translate(Some(RpcError::new(RpcCode::Ok, "fine"))).is_none());
    }

    #[test]
    fn test_known_code_keeps_message() {
        let err = translate(Some(RpcError::new(RpcCode::NotFound, "user 7 not found"))).unwrap();
        let http = err.as_http().unwrap();
        assert_eq!(http.status(), 404);
        assert_eq!(http.code(), "not_found");
        assert_eq!(http.message(), "user 7 not found");
        assert_eq!(err.to_string(), "not_found: [404] user 7 not found");
    }

    #[test]
    fn test_message_is_not_reason_phrase() {
        let err = translate(Some(RpcError::new(RpcCode::Unavailable, ""))).unwrap();
        assert_eq!(err.to_string(), "service_unavailable: [503] ");
    }

    #[test]
    fn test_unrecognized_passes_through() {
        let original = RpcError::new(RpcCode::Unrecognized(20), "brand new failure");
        let err = translate(Some(original.clone())).unwrap();
        assert!(!err.is_http());
        assert_eq!(err.downcast_ref::<RpcError>(), Some(&original));
        assert_eq!(err.to_string(), original.to_string());
    }

    #[test]
    fn test_rpc_error_display() {
        let err = RpcError::new(RpcCode::from_i32(5), "missing");
        assert_eq!(err.to_string(), "rpc error: code = not_found desc = missing");
    }

    #[cfg(feature = "grpc")]
    #[test]
    fn test_tonic_status() {
        let status = tonic::Status::already_exists("order 12 exists");
        let err = translate(Some(status)).unwrap();
        assert_eq!(err.to_string(), "already_exists: [409] order 12 exists");

        assert!(translate(Some(tonic::Status::ok("done"))).is_none());
    }
}
