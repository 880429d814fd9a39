//! The `error` module defines the error types used within the `orderhub`
//! application.
//!
//! Hub operations are infallible by contract: malformed input degrades to
//! a no-op and delivery is best-effort with no observable failure. The
//! only fallible surface is configuration loading.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
