//! # album-core
//!
//! Core crate for the album console. Contains the unified error system,
//! the failure model for rejected API calls, configuration schemas,
//! toast types, and the traits implemented by collaborators.
//!
//! This crate has **no** internal dependencies on other album crates.

pub mod config;
pub mod error;
pub mod failure;
pub mod result;
pub mod traits;
pub mod types;

pub use error::{AppError, ErrorKind};
pub use failure::{Failure, ResponseFailure};
pub use result::AppResult;
