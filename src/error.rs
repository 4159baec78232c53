//! Unified error types for quickdrop
//!
//! The whole application is fail-soft: enumeration and persistence
//! errors are recovered close to where they happen, and external
//! process failures are swallowed at the call site. These types exist
//! so the few places that do surface errors (workspace creation,
//! explicit saves) can name what went wrong.

use std::path::PathBuf;

/// Unified error type for quickdrop operations
#[derive(Debug, thiserror::Error)]
pub enum QuickdropError {
    /// Workspace creation target is missing or not a directory
    #[error("not a directory: {path}")]
    InvalidPath { path: PathBuf },

    /// A workspace with this name is already registered
    #[error("workspace name already in use: {name}")]
    DuplicateName { name: String },

    /// Listing a workspace folder failed after the workspace existed
    #[error("failed to list {path}: {source}")]
    Enumeration {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Config file could not be written
    #[error("failed to persist config: {0}")]
    Persistence(#[from] std::io::Error),

    /// Config document could not be serialized
    #[error("failed to encode config: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Convenience Result type using QuickdropError
pub type Result<T> = std::result::Result<T, QuickdropError>;
