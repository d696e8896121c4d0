//! # Reel - labels for video production tracking
//!
//! The shared registry of phase titles, edit messages, error strings and
//! form field titles used by the production-tracking menus, with a small
//! command line to list, verify and export it.
//!
//! ## Features
//!
//! - **Label Registry**: every label is a `&'static str` constant
//! - **Phases and Fields**: typed access grouped by workflow phase
//! - **Verification**: `reel check` reports empty, short or duplicate labels
//! - **Export**: CSV and JSON dumps for metadata consumers
//!
//! ## Usage
//!
//! ```rust,no_run
//! use reel::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod libs;
