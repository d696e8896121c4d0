// Error payloads for the phase forms. The menu appends the underlying cause
// as "<message>: <cause>", so none of these end with punctuation.

// Initial details errors
pub const ERROR_INITIAL_DETAILS_FORM: &str = "error in initial details form";
pub const ERROR_SAVE_INITIAL_DETAILS: &str = "failed to save initial details";

// Work progress errors
pub const ERROR_WORK_PROGRESS_FORM: &str = "error in work progress form";
pub const ERROR_SAVE_WORK_PROGRESS: &str = "failed to save work progress";

// Definition errors
pub const ERROR_DEFINITION_FORM: &str = "error in definition form";
pub const ERROR_SAVE_DEFINITION: &str = "failed to save definition";

// Post-production errors
pub const ERROR_POST_PRODUCTION_FORM: &str = "error in post-production form";
pub const ERROR_SAVE_POST_PRODUCTION: &str = "failed to save post-production details";
