use super::phase::{EditMessages, EditOutcome, Phase};
use super::registry::Label;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn labels(labels: &[&Label], show_names: bool) -> Table {
        let mut table = Table::new();

        if show_names {
            table.add_row(row!["CATEGORY", "NAME", "VALUE"]);
            for label in labels {
                table.add_row(row![label.category, label.name, label.value]);
            }
        } else {
            table.add_row(row!["CATEGORY", "VALUE"]);
            for label in labels {
                table.add_row(row![label.category, label.value]);
            }
        }

        table
    }

    pub fn phases() -> Table {
        let mut table = Table::new();

        table.add_row(row!["#", "PHASE", "FIELDS", "EDITABLE"]);
        for (index, phase) in Phase::ALL.iter().enumerate() {
            table.add_row(row![
                index + 1,
                phase.title(),
                phase.fields().len(),
                if phase.is_editable() { "yes" } else { "no" }
            ]);
        }

        table
    }

    pub fn fields(phase: Phase) -> Table {
        let mut table = Table::new();

        table.add_row(row!["#", "KEY", "TITLE"]);
        for (index, field) in phase.fields().iter().enumerate() {
            table.add_row(row![index + 1, field.key(), field.title()]);
        }

        table
    }

    pub fn edit_messages(messages: &EditMessages) -> Table {
        let mut table = Table::new();

        table.add_row(row!["OUTCOME", "MESSAGE"]);
        for outcome in EditOutcome::ALL {
            table.add_row(row![format!("{:?}", outcome), messages.text(outcome)]);
        }

        table
    }
}
