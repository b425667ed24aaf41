//! The structured [`HttpError`] and the [`Error`] sum type that carries
//! either a structured or a generic error.

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;
use utoipa::ToSchema;

use super::codes::EMPTY_INTERNAL_SERVER_ERROR;

/// An error carrying an HTTP status, a stable machine-readable code and a
/// human-readable message.
///
/// `status` and `code` are fixed at construction. The only way to obtain a
/// different message is to build a new value (see [`HttpError::with_message`]),
/// so the shared catalog statics can never be altered through a borrow.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema, thiserror::Error)]
#[error("{code}: [{status}] {message}")]
pub struct HttpError {
    /// HTTP status code
    status: u16,
    /// Error code for programmatic handling
    #[schema(value_type = String)]
    code: Cow<'static, str>,
    /// Human-readable error message, may be empty
    #[schema(value_type = String)]
    message: Cow<'static, str>,
}

impl HttpError {
    /// Create a new error. Neither the status range nor the code format is
    /// validated.
    pub fn new(
        status: u16,
        code: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            status,
            code: code.into(),
            message: message.into(),
        }
    }

    /// Const constructor backing the catalog statics.
    pub const fn from_static(status: u16, code: &'static str, message: &'static str) -> Self {
        Self {
            status,
            code: Cow::Borrowed(code),
            message: Cow::Borrowed(message),
        }
    }

    /// Create an error whose message is the standard reason phrase of
    /// `status` (empty when the status has none).
    pub fn from_status(status: u16, code: impl Into<Cow<'static, str>>) -> Self {
        Self::new(status, code, reason_phrase(status))
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns a copy of this error with `message` replacing the current one.
    pub fn with_message(self, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
            ..self
        }
    }

    /// Appends `detail` to the message, separated by `"; "` unless the
    /// message is still empty.
    pub(crate) fn append(&mut self, detail: impl fmt::Display) {
        let message = self.message.to_mut();
        if !message.is_empty() {
            message.push_str("; ");
        }
        message.push_str(&detail.to_string());
    }
}

/// Standard reason phrase for `status`, or `""` for unknown statuses.
pub(crate) fn reason_phrase(status: u16) -> &'static str {
    StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason())
        .unwrap_or("")
}

/// Returns a function that turns any error into an [`HttpError`] with the
/// given status and code, using the error's text as the message.
pub fn factory(
    status: u16,
    code: impl Into<Cow<'static, str>>,
) -> impl Fn(&dyn fmt::Display) -> HttpError {
    let code = code.into();
    move |err: &dyn fmt::Display| HttpError::new(status, code.clone(), err.to_string())
}

/// Like [`factory`], with the code supplied per call.
pub fn with_status(status: u16) -> impl Fn(&str, &dyn fmt::Display) -> HttpError {
    move |code: &str, err: &dyn fmt::Display| HttpError::new(status, code.to_owned(), err.to_string())
}

/// Like [`factory`], with the status supplied per call.
pub fn with_code(code: impl Into<Cow<'static, str>>) -> impl Fn(u16, &dyn fmt::Display) -> HttpError {
    let code = code.into();
    move |status: u16, err: &dyn fmt::Display| HttpError::new(status, code.clone(), err.to_string())
}

/// Either a structured [`HttpError`] or an opaque generic error known only
/// by its text.
#[derive(Debug)]
pub enum Error {
    Http(HttpError),
    Other(Box<dyn StdError + Send + Sync + 'static>),
}

impl Error {
    /// A generic error with the given text.
    pub fn msg(text: impl Into<String>) -> Self {
        Self::Other(text.into().into())
    }

    /// Wraps an arbitrary error. An [`HttpError`] (or an already wrapped
    /// [`Error`]) keeps its structured form.
    pub fn other<E>(err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::from(Box::new(err) as Box<dyn StdError + Send + Sync + 'static>)
    }

    pub fn is_http(&self) -> bool {
        matches!(self, Self::Http(_))
    }

    pub fn as_http(&self) -> Option<&HttpError> {
        match self {
            Self::Http(err) => Some(err),
            Self::Other(_) => None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        self.as_http().map(HttpError::status)
    }

    pub fn code(&self) -> Option<&str> {
        self.as_http().map(HttpError::code)
    }

    /// Borrow the wrapped value as `T`, e.g. to recover an RPC error that
    /// was passed through untranslated.
    pub fn downcast_ref<T: StdError + 'static>(&self) -> Option<&T> {
        match self {
            Self::Http(err) => (err as &(dyn StdError + 'static)).downcast_ref::<T>(),
            Self::Other(err) => err.downcast_ref::<T>(),
        }
    }

    /// Structured form of this error. Generic errors become an
    /// `internal_server_error` whose message is their text.
    pub fn into_http(self) -> HttpError {
        match self {
            Self::Http(err) => err,
            Self::Other(err) => {
                let mut http = EMPTY_INTERNAL_SERVER_ERROR.clone();
                http.append(err);
                http
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(err) => fmt::Display::fmt(err, f),
            Self::Other(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Http(_) => None,
            Self::Other(err) => err.source(),
        }
    }
}

impl From<HttpError> for Error {
    fn from(err: HttpError) -> Self {
        Self::Http(err)
    }
}

impl From<Box<dyn StdError + Send + Sync + 'static>> for Error {
    fn from(err: Box<dyn StdError + Send + Sync + 'static>) -> Self {
        let err = match err.downcast::<HttpError>() {
            Ok(http) => return Self::Http(*http),
            Err(err) => err,
        };
        match err.downcast::<Error>() {
            Ok(inner) => *inner,
            Err(err) => Self::Other(err),
        }
    }
}

impl From<String> for Error {
    fn from(text: String) -> Self {
        Self::msg(text)
    }
}

impl From<&str> for Error {
    fn from(text: &str) -> Self {
        Self::msg(text)
    }
}
