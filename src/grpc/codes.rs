use std::fmt;

/// gRPC status codes, keyed by their wire numbers.
///
/// Codes outside the known set are kept as [`RpcCode::Unrecognized`] rather
/// than folded into `Unknown`, so callers can tell a new failure class apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RpcCode {
    /// Not an error.
    Ok,
    /// The operation was cancelled, typically by the caller.
    Cancelled,
    /// Unknown error, e.g. a status from another address space.
    Unknown,
    /// The client specified an invalid argument.
    InvalidArgument,
    /// The deadline expired before the operation could complete.
    DeadlineExceeded,
    /// Some requested entity was not found.
    NotFound,
    /// The entity a client attempted to create already exists.
    AlreadyExists,
    /// The caller lacks permission for the operation.
    PermissionDenied,
    /// Some resource (quota, disk space) has been exhausted.
    ResourceExhausted,
    /// The system is not in a state required for the operation.
    FailedPrecondition,
    /// The operation was aborted, typically by a concurrency conflict.
    Aborted,
    /// The operation was attempted past the valid range.
    OutOfRange,
    /// The operation is not implemented or supported.
    Unimplemented,
    /// Internal invariant broken in the server.
    Internal,
    /// The service is currently unavailable.
    Unavailable,
    /// Unrecoverable data loss or corruption.
    DataLoss,
    /// The request lacks valid authentication credentials.
    Unauthenticated,
    /// A wire number outside the known set.
    Unrecognized(i32),
}

impl RpcCode {
    /// Code for a wire number; unknown numbers become [`RpcCode::Unrecognized`].
    pub fn from_i32(code: i32) -> Self {
        match code {
            0 => Self::Ok,
            1 => Self::Cancelled,
            2 => Self::Unknown,
            3 => Self::InvalidArgument,
            4 => Self::DeadlineExceeded,
            5 => Self::NotFound,
            6 => Self::AlreadyExists,
            7 => Self::PermissionDenied,
            8 => Self::ResourceExhausted,
            9 => Self::FailedPrecondition,
            10 => Self::Aborted,
            11 => Self::OutOfRange,
            12 => Self::Unimplemented,
            13 => Self::Internal,
            14 => Self::Unavailable,
            15 => Self::DataLoss,
            16 => Self::Unauthenticated,
            other => Self::Unrecognized(other),
        }
    }

    pub fn as_i32(&self) -> i32 {
        match self {
            Self::Ok => 0,
            Self::Cancelled => 1,
            Self::Unknown => 2,
            Self::InvalidArgument => 3,
            Self::DeadlineExceeded => 4,
            Self::NotFound => 5,
            Self::AlreadyExists => 6,
            Self::PermissionDenied => 7,
            Self::ResourceExhausted => 8,
            Self::FailedPrecondition => 9,
            Self::Aborted => 10,
            Self::OutOfRange => 11,
            Self::Unimplemented => 12,
            Self::Internal => 13,
            Self::Unavailable => 14,
            Self::DataLoss => 15,
            Self::Unauthenticated => 16,
            Self::Unrecognized(code) => *code,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Cancelled => "cancelled",
            Self::Unknown => "unknown",
            Self::InvalidArgument => "invalid_argument",
            Self::DeadlineExceeded => "deadline_exceeded",
            Self::NotFound => "not_found",
            Self::AlreadyExists => "already_exists",
            Self::PermissionDenied => "permission_denied",
            Self::ResourceExhausted => "resource_exhausted",
            Self::FailedPrecondition => "failed_precondition",
            Self::Aborted => "aborted",
            Self::OutOfRange => "out_of_range",
            Self::Unimplemented => "unimplemented",
            Self::Internal => "internal",
            Self::Unavailable => "unavailable",
            Self::DataLoss => "data_loss",
            Self::Unauthenticated => "unauthenticated",
            Self::Unrecognized(_) => "unrecognized",
        }
    }

    /// HTTP status and error code this RPC code translates to.
    ///
    /// `None` for `Ok` (no error) and for unrecognized codes.
    pub fn http_mapping(&self) -> Option<(u16, &'static str)> {
        let mapping = match self {
            Self::Ok | Self::Unrecognized(_) => return None,
            Self::Cancelled => (408, "canceled"),
            Self::Unknown => (500, "unknown"),
            Self::InvalidArgument => (400, "invalid_argument"),
            Self::DeadlineExceeded => (408, "deadline_exceeded"),
            Self::NotFound => (404, "not_found"),
            Self::AlreadyExists => (409, "already_exists"),
            Self::PermissionDenied => (403, "permission_denied"),
            Self::Unauthenticated => (401, "unauthenticated"),
            Self::ResourceExhausted => (403, "resource_exhausted"),
            Self::FailedPrecondition => (412, "failed_precondition"),
            Self::Aborted => (409, "aborted"),
            Self::OutOfRange => (400, "out_of_range"),
            Self::Unimplemented => (501, "unimplemented"),
            Self::Internal => (500, "internal"),
            Self::Unavailable => (503, "service_unavailable"),
            Self::DataLoss => (500, "data_loss"),
        };
        Some(mapping)
    }
}

impl fmt::Display for RpcCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unrecognized(code) => write!(f, "code({code})"),
            known => write!(f, "{}", known.name()),
        }
    }
}
