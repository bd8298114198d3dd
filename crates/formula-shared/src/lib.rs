//! # Formula Shared
//!
//! Wire types shared by the API server and its clients: request and
//! response bodies, the [`Patch`] presence wrapper and RFC 7807 errors.

pub mod dto;
pub mod patch;
pub mod response;

pub use patch::Patch;
pub use response::{ErrorResponse, FieldError};
