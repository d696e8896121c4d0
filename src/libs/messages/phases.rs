//! Titles of the six production phases, in workflow order.
//!
//! These are the headers the phase menu shows. Each phase has exactly one
//! title and no two phases share one.

pub const PHASE_TITLE_INITIAL_DETAILS: &str = "Initial Details";
pub const PHASE_TITLE_WORK_PROGRESS: &str = "Work In Progress";
pub const PHASE_TITLE_DEFINITION: &str = "Definition";
pub const PHASE_TITLE_POST_PRODUCTION: &str = "Post-Production";
pub const PHASE_TITLE_PUBLISHING_DETAILS: &str = "Publishing Details";
pub const PHASE_TITLE_POST_PUBLISH: &str = "Post-Publish Details";
