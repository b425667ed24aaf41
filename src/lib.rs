//! Structured errors carrying an HTTP status, a machine-readable code and a
//! message, with helpers to merge errors and to translate gRPC statuses.
//!
//! ```
//! use httperror::{bad_request_with, Error};
//!
//! let err = bad_request_with(Error::msg("field `name` missing"));
//! assert_eq!(err.to_string(), "bad_request: [400] field `name` missing");
//! assert_eq!(err.status(), Some(400));
//! ```

pub mod config;
pub mod errors;
pub mod grpc;

pub use config::ResponseConfig;
pub use errors::*;
pub use grpc::{translate, RpcCode, RpcError, RpcStatus};
