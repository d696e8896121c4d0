//! Display implementation for reel application messages.
//!
//! Every piece of text the command line prints goes through this match.
//! Phase edit messages are not written here: they come from the label
//! registry through [`Phase::edit_messages`], so the menus and this crate
//! print the same literals.

use super::types::Message;
use crate::libs::phase::Phase;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === PHASE EDIT MESSAGES ===
            Message::EditOutcome(phase, outcome) => match phase.edit_messages() {
                Some(messages) => messages.text(*outcome).to_string(),
                None => not_editable(*phase),
            },
            Message::EditFailed(phase, outcome, cause) => match phase.edit_messages() {
                Some(messages) if outcome.is_failure() => format!("{}: {}", messages.text(*outcome), cause),
                Some(messages) => messages.text(*outcome).to_string(),
                None => not_editable(*phase),
            },
            Message::PhaseNotEditable(phase) => not_editable(*phase),
            Message::NoChangesDetected => super::edits::MESSAGE_NO_CHANGES_DETECTED.to_string(),
            Message::ReturningToPhaseMenu => super::edits::MESSAGE_RETURNING_TO_PHASE_MENU.to_string(),

            // === PHASE LISTING MESSAGES ===
            Message::PhaseHeader(phase) => format!("🎬 {}", phase.title()),
            Message::PhaseFieldsHeader(count) => format!("Fields ({}):", count),
            Message::PhaseEditMessagesHeader => "Edit messages:".to_string(),
            Message::PhasesHeader => "Production phases".to_string(),

            // === REGISTRY MESSAGES ===
            Message::CategoryHeader(category) => category.to_string(),
            Message::NoLabelsSelected => "No labels match the selected categories.".to_string(),
            Message::NoCategoriesSelected => "Select at least one category.".to_string(),
            Message::RegistryVerified(total) => format!("Registry verified: {} labels, no defects.", total),
            Message::RegistryCategoryCount(category, count) => format!("{}: {}", category, count),
            Message::RegistryDefectsFound(count) => format!("Registry has {} defect(s):", count),
            Message::RegistryDefect(defect) => format!("  - {}", defect),
            Message::RegistryCheckFailed => "Registry check failed".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration deleted".to_string(),
            Message::ConfigFileNotFound => "Configuration file not found".to_string(),
            Message::ConfigParseError(error) => format!("Failed to parse configuration: {}", error),
            Message::ConfigModuleDisplay => "Display settings".to_string(),

            // === EXPORT MESSAGES ===
            Message::ExportingLabels(count, format) => format!("Exporting {} label(s) in {} format...", count, format),
            Message::ExportCompleted(path) => format!("Export completed successfully: {}", path),

            // === PROMPTS ===
            Message::PromptShowNames => "Show symbolic names in listings?".to_string(),
            Message::PromptSelectCategories => "Select categories to list".to_string(),
            Message::PromptExportFormat => "Default export format".to_string(),
        };
        write!(f, "{}", text)
    }
}

fn not_editable(phase: Phase) -> String {
    format!("{} is not edited interactively", phase.title())
}
