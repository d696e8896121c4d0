#[cfg(test)]
mod tests {
    use reel::libs::messages::edits::*;
    use reel::libs::messages::errors::*;
    use reel::libs::messages::Message;
    use reel::libs::phase::{EditOutcome, Phase};
    use reel::libs::registry::{self, Category, MIN_ERROR_LENGTH};

    #[test]
    fn test_edit_cancelled_messages() {
        assert_eq!(MESSAGE_INITIAL_DETAILS_EDIT_CANCELLED, "Initial details edit cancelled.");
        assert_eq!(MESSAGE_WORK_PROGRESS_EDIT_CANCELLED, "Work progress edit cancelled.");
        assert_eq!(MESSAGE_DEFINITION_EDIT_CANCELLED, "Definition edit cancelled.");
        assert_eq!(MESSAGE_POST_PRODUCTION_EDIT_CANCELLED, "Post-production edit cancelled.");
    }

    #[test]
    fn test_saved_messages() {
        assert_eq!(MESSAGE_INITIAL_DETAILS_SAVED, "Initial details saved successfully.");
        assert_eq!(MESSAGE_WORK_PROGRESS_SAVED, "Work progress saved successfully.");
        assert_eq!(MESSAGE_DEFINITION_SAVED, "Definition saved successfully.");
        assert_eq!(MESSAGE_POST_PRODUCTION_SAVED, "Post-production details saved successfully.");
    }

    #[test]
    fn test_not_saved_messages() {
        assert_eq!(MESSAGE_INITIAL_DETAILS_NOT_SAVED, "Initial details changes not saved.");
        assert_eq!(MESSAGE_WORK_PROGRESS_NOT_SAVED, "Work progress changes not saved.");
        assert_eq!(MESSAGE_DEFINITION_NOT_SAVED, "Definition changes not saved.");
        assert_eq!(MESSAGE_POST_PRODUCTION_NOT_SAVED, "Post-production changes not saved.");
    }

    #[test]
    fn test_navigation_messages() {
        assert_eq!(MESSAGE_NO_CHANGES_DETECTED, "No changes detected.");
        assert_eq!(MESSAGE_RETURNING_TO_PHASE_MENU, "Returning to phase menu.");
    }

    #[test]
    fn test_messages_are_not_empty() {
        for label in registry::by_category(Category::Message) {
            assert!(!label.value.is_empty(), "{} is empty", label.name);
        }
        assert_eq!(registry::by_category(Category::Message).count(), 14);
    }

    #[test]
    fn test_error_literals() {
        assert_eq!(ERROR_INITIAL_DETAILS_FORM, "error in initial details form");
        assert_eq!(ERROR_SAVE_INITIAL_DETAILS, "failed to save initial details");
        assert_eq!(ERROR_WORK_PROGRESS_FORM, "error in work progress form");
        assert_eq!(ERROR_SAVE_WORK_PROGRESS, "failed to save work progress");
        assert_eq!(ERROR_DEFINITION_FORM, "error in definition form");
        assert_eq!(ERROR_SAVE_DEFINITION, "failed to save definition");
        assert_eq!(ERROR_POST_PRODUCTION_FORM, "error in post-production form");
        assert_eq!(ERROR_SAVE_POST_PRODUCTION, "failed to save post-production details");
    }

    #[test]
    fn test_errors_are_descriptive() {
        let errors: Vec<_> = registry::by_category(Category::Error).collect();
        assert_eq!(errors.len(), 8);
        for label in errors {
            assert!(!label.value.is_empty(), "{} is empty", label.name);
            assert!(label.value.chars().count() >= MIN_ERROR_LENGTH, "{} is too short", label.name);
        }
    }

    #[test]
    fn test_edit_messages_reference_registry() {
        let messages = Phase::InitialDetails.edit_messages().unwrap();
        assert_eq!(messages.text(EditOutcome::Cancelled), MESSAGE_INITIAL_DETAILS_EDIT_CANCELLED);
        assert_eq!(messages.text(EditOutcome::Saved), MESSAGE_INITIAL_DETAILS_SAVED);
        assert_eq!(messages.text(EditOutcome::NotSaved), MESSAGE_INITIAL_DETAILS_NOT_SAVED);
        assert_eq!(messages.text(EditOutcome::FormFailed), ERROR_INITIAL_DETAILS_FORM);
        assert_eq!(messages.text(EditOutcome::SaveFailed), ERROR_SAVE_INITIAL_DETAILS);

        let messages = Phase::PostProduction.edit_messages().unwrap();
        assert_eq!(messages.cancelled, MESSAGE_POST_PRODUCTION_EDIT_CANCELLED);
        assert_eq!(messages.save_error, ERROR_SAVE_POST_PRODUCTION);
    }

    #[test]
    fn test_edit_outcome_failures() {
        let failures: Vec<EditOutcome> = EditOutcome::ALL.into_iter().filter(|outcome| outcome.is_failure()).collect();
        assert_eq!(failures, vec![EditOutcome::FormFailed, EditOutcome::SaveFailed]);
    }

    #[test]
    fn test_edit_outcome_display() {
        assert_eq!(
            Message::EditOutcome(Phase::WorkProgress, EditOutcome::Cancelled).to_string(),
            MESSAGE_WORK_PROGRESS_EDIT_CANCELLED
        );
        assert_eq!(
            Message::EditFailed(Phase::InitialDetails, EditOutcome::SaveFailed, "disk full".to_string()).to_string(),
            "failed to save initial details: disk full"
        );
        assert_eq!(
            Message::EditOutcome(Phase::PostPublish, EditOutcome::Saved).to_string(),
            "Post-Publish Details is not edited interactively"
        );
        assert_eq!(Message::NoChangesDetected.to_string(), MESSAGE_NO_CHANGES_DETECTED);
    }

    #[test]
    fn test_edit_failed_without_failure_outcome() {
        assert_eq!(
            Message::EditFailed(Phase::InitialDetails, EditOutcome::Saved, "disk full".to_string()).to_string(),
            "Initial details saved successfully."
        );
        assert_eq!(
            Message::EditFailed(Phase::Definition, EditOutcome::Cancelled, "ignored".to_string()).to_string(),
            "Definition edit cancelled."
        );
        assert_eq!(
            Message::EditFailed(Phase::WorkProgress, EditOutcome::FormFailed, "bad input".to_string()).to_string(),
            "error in work progress form: bad input"
        );
    }

    #[test]
    fn test_command_line_warnings() {
        assert_eq!(Message::NoCategoriesSelected.to_string(), "Select at least one category.");
    }

    #[test]
    fn test_registry_message_display() {
        assert_eq!(Message::RegistryVerified(73).to_string(), "Registry verified: 73 labels, no defects.");
        assert_eq!(Message::RegistryCategoryCount(Category::Error, 8).to_string(), "Errors: 8");
        assert_eq!(Message::PhaseHeader(Phase::Definition).to_string(), "🎬 Definition");
    }
}
