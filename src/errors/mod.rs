//! Structured HTTP errors

pub mod codes;
pub mod merge;
pub mod response;
pub mod types;

pub use codes::*;
pub use merge::*;
pub use response::render;
pub use types::{factory, with_code, with_status, Error, HttpError};
