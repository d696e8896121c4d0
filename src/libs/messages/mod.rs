//! Label registry and application messages.
//!
//! The registry constants are split by category: [`phases`], [`edits`],
//! [`errors`] and [`fields`]. [`Message`] covers what the command line
//! itself prints.

pub mod display;
pub mod edits;
pub mod errors;
pub mod fields;
pub mod macros;
pub mod phases;
pub mod types;

pub use types::Message;
