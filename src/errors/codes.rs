//! Pre-built errors for the well-known HTTP statuses.
//!
//! Every status comes in two forms: one carrying the standard reason phrase
//! and an `EMPTY_*` variant with an empty message. The empty variants are
//! the bases the `*_with` merge helpers build on, so caller detail is not
//! prefixed with boilerplate like `"Bad Request; "`.

use super::types::HttpError;

macro_rules! catalog {
    ($( $name:ident, $empty:ident => ($status:literal, $code:literal, $reason:literal); )*) => {
        $(
            #[doc = concat!("`", $code, "` (", stringify!($status), " ", $reason, ").")]
            pub static $name: HttpError = HttpError::from_static($status, $code, $reason);

            #[doc = concat!("`", $code, "` (", stringify!($status), ") with an empty message.")]
            pub static $empty: HttpError = HttpError::from_static($status, $code, "");
        )*

        /// Every catalog entry as `(reason-phrase form, empty form)`.
        pub static CATALOG: &[(&HttpError, &HttpError)] = &[$((&$name, &$empty)),*];
    };
}

catalog! {
    BAD_REQUEST, EMPTY_BAD_REQUEST => (400, "bad_request", "Bad Request");
    UNAUTHORIZED, EMPTY_UNAUTHORIZED => (401, "unauthorized", "Unauthorized");
    FORBIDDEN, EMPTY_FORBIDDEN => (403, "forbidden", "Forbidden");
    NOT_FOUND, EMPTY_NOT_FOUND => (404, "not_found", "Not Found");
    METHOD_NOT_ALLOWED, EMPTY_METHOD_NOT_ALLOWED => (405, "method_not_allowed", "Method Not Allowed");
    REQUEST_TIMEOUT, EMPTY_REQUEST_TIMEOUT => (408, "request_timeout", "Request Timeout");
    CONFLICT, EMPTY_CONFLICT => (409, "conflict", "Conflict");
    GONE, EMPTY_GONE => (410, "gone", "Gone");
    INTERNAL_SERVER_ERROR, EMPTY_INTERNAL_SERVER_ERROR => (500, "internal_server_error", "Internal Server Error");
    NOT_IMPLEMENTED, EMPTY_NOT_IMPLEMENTED => (501, "not_implemented", "Not Implemented");
}
