//! Crate-wide error types.
//!
//! Each module has its own `thiserror` enum ([`GracenoteError`],
//! [`ConfigError`]); [`Error`] aggregates them for the plugin contract.
//!
//! # Example
//!
//! ```ignore
//! use gracenote_autotag::error::{Result, ResultExt};
//!
//! async fn start(api: &GracenoteClient, id: &str) -> Result<String> {
//!     api.register(id).await.with_context("registering Gracenote client")
//! }
//! ```

use crate::config::ConfigError;
use crate::gracenote::GracenoteError;

/// Crate-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration could not be read or written
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Gracenote request failed
    #[error("Gracenote error: {0}")]
    Gracenote(#[from] GracenoteError),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Add context to an error.
    pub fn context(self, ctx: impl Into<String>) -> Self {
        Self::WithContext {
            context: ctx.into(),
            source: Box::new(self),
        }
    }

    /// The innermost error, with any context stripped.
    pub fn root(&self) -> &Error {
        match self {
            Self::WithContext { source, .. } => source.root(),
            other => other,
        }
    }
}

/// Extension trait for adding context to Results.
pub trait ResultExt<T> {
    /// Add context to an error result.
    fn with_context(self, ctx: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.context(ctx))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, GracenoteError> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::Gracenote(e).context(ctx))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, ConfigError> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::Config(e).context(ctx))
    }
}
