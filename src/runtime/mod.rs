//! Platform shell: window, tray, timers, and command execution

pub mod app;
pub mod pointer;
pub mod tray;

pub use app::App;
