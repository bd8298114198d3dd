//! # Formula Core
//!
//! The domain layer of Formula Place.
//! This crate contains the formula entity, its inputs and the repository
//! ports, with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::{DomainError, RepoError};
