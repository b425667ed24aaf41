//! Combining two errors into one.
//!
//! A structured operand always decides the status and code of the result,
//! whichever side it is on. Two generic operands collapse into a generic
//! error joined by `"; "`.

use super::codes::*;
use super::types::Error;

/// Merge `secondary` into `primary`.
///
/// - a `None` operand leaves the other one untouched;
/// - a structured `primary` gets `secondary`'s text appended to its message;
/// - otherwise a structured `secondary` gets `primary`'s text appended;
/// - two generic errors become `"<primary>; <secondary>"`.
///
/// Appending only inserts `"; "` when the structured message is non-empty.
pub fn merge(primary: Option<Error>, secondary: Option<Error>) -> Option<Error> {
    match (primary, secondary) {
        (primary, None) => primary,
        (None, secondary) => secondary,
        (Some(primary), Some(secondary)) => Some(primary.merge(secondary)),
    }
}

impl Error {
    /// Non-optional form of [`merge`], with `self` as the primary error.
    pub fn merge(self, other: impl Into<Error>) -> Error {
        match (self, other.into()) {
            (Error::Http(mut primary), secondary) => {
                primary.append(secondary);
                Error::Http(primary)
            }
            (primary, Error::Http(mut secondary)) => {
                secondary.append(primary);
                Error::Http(secondary)
            }
            (primary, secondary) => Error::msg(format!("{primary}; {secondary}")),
        }
    }
}

macro_rules! merge_with {
    ($( $fn_name:ident => $base:ident ),* $(,)?) => {
        $(
            #[doc = concat!("Attach `err` to [`", stringify!($base), "`].")]
            pub fn $fn_name(err: impl Into<Error>) -> Error {
                Error::Http($base.clone()).merge(err)
            }
        )*
    };
}

merge_with! {
    bad_request_with => EMPTY_BAD_REQUEST,
    unauthorized_with => EMPTY_UNAUTHORIZED,
    forbidden_with => EMPTY_FORBIDDEN,
    not_found_with => EMPTY_NOT_FOUND,
    method_not_allowed_with => EMPTY_METHOD_NOT_ALLOWED,
    request_timeout_with => EMPTY_REQUEST_TIMEOUT,
    conflict_with => EMPTY_CONFLICT,
    gone_with => EMPTY_GONE,
    internal_server_error_with => EMPTY_INTERNAL_SERVER_ERROR,
    not_implemented_with => EMPTY_NOT_IMPLEMENTED,
}
