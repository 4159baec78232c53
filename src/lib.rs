//! QuickDrop - auto-hiding drop panel
//!
//! This crate provides the workspace registry, visibility state
//! machine, and drag-export contract behind the panel, following the
//! Elm Architecture pattern: state in `model`, inputs in `messages`,
//! transitions in `update`, side effects in `commands`, and the winit
//! shell in `runtime`.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod drag;
pub mod error;
pub mod geometry;
pub mod messages;
pub mod model;
pub mod runtime;
pub mod tracing;
pub mod update;
pub mod view;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::PersistedConfig;
pub use error::QuickdropError;
pub use messages::Msg;
pub use model::AppModel;
