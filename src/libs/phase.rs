//! Production phases and the messages reported after editing one.
//!
//! A video moves through six phases, from the initial details through the
//! post-publish chores. Each phase has a title and a form made of fields
//! (see [`Field`]). Four of the phases are edited interactively and report
//! the outcome of an edit with a fixed set of messages.
//!
//! ## Usage
//!
//! ```rust
//! use reel::libs::phase::{EditOutcome, Phase};
//!
//! let phase = Phase::InitialDetails;
//! assert_eq!(phase.title(), "Initial Details");
//!
//! let messages = phase.edit_messages().expect("initial details are editable");
//! assert_eq!(messages.text(EditOutcome::Cancelled), "Initial details edit cancelled.");
//! ```

use super::field::{
    Field, DEFINITION_FIELDS, INITIAL_DETAILS_FIELDS, POST_PRODUCTION_FIELDS, POST_PUBLISH_FIELDS, PUBLISHING_DETAILS_FIELDS,
    WORK_PROGRESS_FIELDS,
};
use super::messages::edits::*;
use super::messages::errors::*;
use super::messages::phases::*;
use clap::ValueEnum;
use serde::Serialize;
use std::fmt;

/// One stage of the video production workflow.
///
/// Variants are declared in workflow order; [`Phase::ALL`] preserves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    InitialDetails,
    WorkProgress,
    Definition,
    PostProduction,
    PublishingDetails,
    PostPublish,
}

/// Outcome of an interactive edit of a phase form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// The user backed out of the form.
    Cancelled,
    /// The changes were persisted.
    Saved,
    /// The user declined to keep the changes.
    NotSaved,
    /// The form itself failed.
    FormFailed,
    /// The form completed but persisting the changes failed.
    SaveFailed,
}

impl EditOutcome {
    pub const ALL: [EditOutcome; 5] = [
        EditOutcome::Cancelled,
        EditOutcome::Saved,
        EditOutcome::NotSaved,
        EditOutcome::FormFailed,
        EditOutcome::SaveFailed,
    ];

    /// Whether this outcome carries an error payload.
    pub fn is_failure(self) -> bool {
        matches!(self, EditOutcome::FormFailed | EditOutcome::SaveFailed)
    }
}

/// The messages an editable phase reports after an edit.
#[derive(Debug, PartialEq, Eq)]
pub struct EditMessages {
    pub cancelled: &'static str,
    pub saved: &'static str,
    pub not_saved: &'static str,
    pub form_error: &'static str,
    pub save_error: &'static str,
}

impl EditMessages {
    pub fn text(&self, outcome: EditOutcome) -> &'static str {
        match outcome {
            EditOutcome::Cancelled => self.cancelled,
            EditOutcome::Saved => self.saved,
            EditOutcome::NotSaved => self.not_saved,
            EditOutcome::FormFailed => self.form_error,
            EditOutcome::SaveFailed => self.save_error,
        }
    }
}

static INITIAL_DETAILS_MESSAGES: EditMessages = EditMessages {
    cancelled: MESSAGE_INITIAL_DETAILS_EDIT_CANCELLED,
    saved: MESSAGE_INITIAL_DETAILS_SAVED,
    not_saved: MESSAGE_INITIAL_DETAILS_NOT_SAVED,
    form_error: ERROR_INITIAL_DETAILS_FORM,
    save_error: ERROR_SAVE_INITIAL_DETAILS,
};

static WORK_PROGRESS_MESSAGES: EditMessages = EditMessages {
    cancelled: MESSAGE_WORK_PROGRESS_EDIT_CANCELLED,
    saved: MESSAGE_WORK_PROGRESS_SAVED,
    not_saved: MESSAGE_WORK_PROGRESS_NOT_SAVED,
    form_error: ERROR_WORK_PROGRESS_FORM,
    save_error: ERROR_SAVE_WORK_PROGRESS,
};

static DEFINITION_MESSAGES: EditMessages = EditMessages {
    cancelled: MESSAGE_DEFINITION_EDIT_CANCELLED,
    saved: MESSAGE_DEFINITION_SAVED,
    not_saved: MESSAGE_DEFINITION_NOT_SAVED,
    form_error: ERROR_DEFINITION_FORM,
    save_error: ERROR_SAVE_DEFINITION,
};

static POST_PRODUCTION_MESSAGES: EditMessages = EditMessages {
    cancelled: MESSAGE_POST_PRODUCTION_EDIT_CANCELLED,
    saved: MESSAGE_POST_PRODUCTION_SAVED,
    not_saved: MESSAGE_POST_PRODUCTION_NOT_SAVED,
    form_error: ERROR_POST_PRODUCTION_FORM,
    save_error: ERROR_SAVE_POST_PRODUCTION,
};

impl Phase {
    /// Every phase in workflow order.
    pub const ALL: [Phase; 6] = [
        Phase::InitialDetails,
        Phase::WorkProgress,
        Phase::Definition,
        Phase::PostProduction,
        Phase::PublishingDetails,
        Phase::PostPublish,
    ];

    /// The header shown for this phase in the phase menu.
    pub fn title(self) -> &'static str {
        match self {
            Phase::InitialDetails => PHASE_TITLE_INITIAL_DETAILS,
            Phase::WorkProgress => PHASE_TITLE_WORK_PROGRESS,
            Phase::Definition => PHASE_TITLE_DEFINITION,
            Phase::PostProduction => PHASE_TITLE_POST_PRODUCTION,
            Phase::PublishingDetails => PHASE_TITLE_PUBLISHING_DETAILS,
            Phase::PostPublish => PHASE_TITLE_POST_PUBLISH,
        }
    }

    /// The fields of this phase's form, in the order the form asks for them.
    pub fn fields(self) -> &'static [Field] {
        match self {
            Phase::InitialDetails => &INITIAL_DETAILS_FIELDS,
            Phase::WorkProgress => &WORK_PROGRESS_FIELDS,
            Phase::Definition => &DEFINITION_FIELDS,
            Phase::PostProduction => &POST_PRODUCTION_FIELDS,
            Phase::PublishingDetails => &PUBLISHING_DETAILS_FIELDS,
            Phase::PostPublish => &POST_PUBLISH_FIELDS,
        }
    }

    /// Edit messages for the phases that are edited interactively.
    ///
    /// Publishing and post-publish details are not edited through a form
    /// that reports outcomes, so they return `None`.
    pub fn edit_messages(self) -> Option<&'static EditMessages> {
        match self {
            Phase::InitialDetails => Some(&INITIAL_DETAILS_MESSAGES),
            Phase::WorkProgress => Some(&WORK_PROGRESS_MESSAGES),
            Phase::Definition => Some(&DEFINITION_MESSAGES),
            Phase::PostProduction => Some(&POST_PRODUCTION_MESSAGES),
            Phase::PublishingDetails | Phase::PostPublish => None,
        }
    }

    pub fn is_editable(self) -> bool {
        self.edit_messages().is_some()
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}
