//! # lawbridge-core
//!
//! Core types, traits, and abstractions for the lawbridge service.
//!
//! This crate provides the foundational data structures and trait definitions
//! that the retrieval, inference, and API crates depend on.

pub mod error;
pub mod logging;
pub mod models;
pub mod traits;
pub mod validate;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use models::*;
pub use traits::*;
pub use validate::sanitize_question;
