use crate::libs::phase::{EditOutcome, Phase};
use crate::libs::registry::Category;

#[derive(Debug, Clone)]
pub enum Message {
    // === PHASE EDIT MESSAGES ===
    EditOutcome(Phase, EditOutcome),
    EditFailed(Phase, EditOutcome, String), // cause, shown only for failure outcomes
    PhaseNotEditable(Phase),
    NoChangesDetected,
    ReturningToPhaseMenu,

    // === PHASE LISTING MESSAGES ===
    PhaseHeader(Phase),
    PhaseFieldsHeader(usize), // field count
    PhaseEditMessagesHeader,
    PhasesHeader,

    // === REGISTRY MESSAGES ===
    CategoryHeader(Category),
    NoLabelsSelected,
    NoCategoriesSelected,
    RegistryVerified(usize),                // total labels
    RegistryCategoryCount(Category, usize), // category, count
    RegistryDefectsFound(usize),            // defect count
    RegistryDefect(String),                 // defect description
    RegistryCheckFailed,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigFileNotFound,
    ConfigParseError(String), // error message
    ConfigModuleDisplay,

    // === EXPORT MESSAGES ===
    ExportingLabels(usize, String), // count, format
    ExportCompleted(String),        // path

    // === PROMPTS ===
    PromptShowNames,
    PromptSelectCategories,
    PromptExportFormat,
}
