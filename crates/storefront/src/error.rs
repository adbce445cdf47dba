//! Unified error handling.
//!
//! The cart core never fails: decode problems degrade to an empty cart and
//! rejected writes fall back to memory. What can fail sits at the edges -
//! configuration, the storage backend when used directly, the checkout
//! handoff and template rendering - and adapters collect those into
//! [`StorefrontError`].

use thiserror::Error;

use crate::config::ConfigError;
use crate::handoff::HandoffError;
use crate::storage::StorageError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Storage backend operation failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Checkout handoff failed.
    #[error("Handoff error: {0}")]
    Handoff(#[from] HandoffError),

    /// Template rendering failed.
    #[error("Render error: {0}")]
    Render(#[from] askama::Error),
}

/// Result type alias for `StorefrontError`.
pub type Result<T> = std::result::Result<T, StorefrontError>;
