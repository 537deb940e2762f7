//! # spinhub-core
//!
//! Core crate for Spinhub. Contains configuration schemas, the validated
//! slug type, the slug directory trait, logging initialization, and the
//! unified error system.
//!
//! This crate has **no** internal dependencies on other Spinhub crates.

pub mod config;
pub mod error;
pub mod logging;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
