//! # oic-core - Core Types for Open in Code
//!
//! Foundation crate for the Open in Code file-manager extension. Provides
//! error handling, the logging bootstrap, and URI/path conversion.
//!
//! This crate has **zero internal dependencies** -- it only depends on
//! external crates (thiserror, tracing, percent-encoding, url).
//!
//! ## Public API
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with convenience constructors
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//!
//! ### Logging (`logging`)
//! - [`logging::init()`] - Initialize the tracing subsystem (file-backed,
//!   level controlled by the `OIC_LOG` environment variable)
//!
//! ### URI Conversion (`uri`)
//! - [`path_from_uri()`] - Convert a `file://` URI to a local path
//! - [`uri_from_path()`] - Convert an absolute local path to a `file://` URI
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use oic_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod uri;

/// Prelude for common imports used throughout the Open in Code crates
pub mod prelude {
    pub use super::error::{Error, Result};
    pub use tracing::{debug, error, info, trace, warn};
}

pub use error::{Error, Result};
pub use uri::{path_from_uri, uri_from_path};
