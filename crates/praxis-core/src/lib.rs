//! praxis-core
//!
//! Core domain primitives for the Praxis course registry client:
//! - course parameter model and validation
//! - chain/RPC configuration objects
//! - the shared core error type
//!
//! This crate performs no I/O and reads no environment variables. All
//! configuration must be provided explicitly by the caller, and validation
//! is deterministic: same input, same result.

pub mod config;
pub mod course;
pub mod errors;

pub use crate::errors::{PraxisError, PraxisResult};

/// Convenience re-exports.
pub mod prelude {
    pub use crate::config::{validate_config, ChainConfig, Commitment};
    pub use crate::course::{CourseParams, MAX_COURSE_ID_BYTES};
    pub use crate::{PraxisError, PraxisResult};
}
