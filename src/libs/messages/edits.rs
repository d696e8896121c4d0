// Edit cancelled messages
pub const MESSAGE_INITIAL_DETAILS_EDIT_CANCELLED: &str = "Initial details edit cancelled.";
pub const MESSAGE_WORK_PROGRESS_EDIT_CANCELLED: &str = "Work progress edit cancelled.";
pub const MESSAGE_DEFINITION_EDIT_CANCELLED: &str = "Definition edit cancelled.";
pub const MESSAGE_POST_PRODUCTION_EDIT_CANCELLED: &str = "Post-production edit cancelled.";

// Success messages
pub const MESSAGE_INITIAL_DETAILS_SAVED: &str = "Initial details saved successfully.";
pub const MESSAGE_WORK_PROGRESS_SAVED: &str = "Work progress saved successfully.";
pub const MESSAGE_DEFINITION_SAVED: &str = "Definition saved successfully.";
pub const MESSAGE_POST_PRODUCTION_SAVED: &str = "Post-production details saved successfully.";

// Changes not saved messages
pub const MESSAGE_INITIAL_DETAILS_NOT_SAVED: &str = "Initial details changes not saved.";
pub const MESSAGE_WORK_PROGRESS_NOT_SAVED: &str = "Work progress changes not saved.";
pub const MESSAGE_DEFINITION_NOT_SAVED: &str = "Definition changes not saved.";
pub const MESSAGE_POST_PRODUCTION_NOT_SAVED: &str = "Post-production changes not saved.";

// Other messages
pub const MESSAGE_NO_CHANGES_DETECTED: &str = "No changes detected.";
pub const MESSAGE_RETURNING_TO_PHASE_MENU: &str = "Returning to phase menu.";
