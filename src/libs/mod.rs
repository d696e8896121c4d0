//! Core library modules for the reel application.
//!
//! ## Features
//!
//! - **Label Registry**: phase titles, messages, errors and field titles
//! - **Typed Access**: phase and field enumerations over the registry
//! - **Verification**: invariant checks over the whole catalog
//! - **Presentation**: console tables and CSV/JSON export
//! - **Configuration**: persisted display preferences
//!
//! ## Usage
//!
//! ```rust
//! use reel::libs::field::Field;
//! use reel::libs::phase::Phase;
//!
//! assert_eq!(Field::MovieDone.title(), "Movie Done");
//! assert_eq!(Field::MovieDone.phase(), Phase::PostProduction);
//! ```

pub mod config;
pub mod data_storage;
pub mod export;
pub mod field;
pub mod messages;
pub mod phase;
pub mod registry;
pub mod view;
