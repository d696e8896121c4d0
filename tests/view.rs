#[cfg(test)]
mod tests {
    use reel::libs::phase::Phase;
    use reel::libs::registry::{self, Category};
    use reel::libs::view::View;

    #[test]
    fn test_labels_table_has_row_per_label() {
        let labels = registry::select(&[Category::Error]);
        let table = View::labels(&labels, false);
        assert_eq!(table.len(), labels.len() + 1);
        assert_eq!(table.get_row(0).unwrap().len(), 2);

        let table = View::labels(&labels, true);
        assert_eq!(table.get_row(0).unwrap().len(), 3);
        assert_eq!(table.get_row(1).unwrap().get_cell(1).unwrap().get_content(), "ERROR_INITIAL_DETAILS_FORM");
    }

    #[test]
    fn test_phases_table() {
        let table = View::phases();
        assert_eq!(table.len(), 7);
        assert_eq!(table.get_row(1).unwrap().get_cell(1).unwrap().get_content(), "Initial Details");
        assert_eq!(table.get_row(6).unwrap().get_cell(3).unwrap().get_content(), "no");
    }

    #[test]
    fn test_fields_table() {
        let table = View::fields(Phase::PostProduction);
        assert_eq!(table.len(), 7);
        assert_eq!(table.get_row(5).unwrap().get_cell(2).unwrap().get_content(), "Movie Done");
    }

    #[test]
    fn test_edit_messages_table() {
        let messages = Phase::Definition.edit_messages().unwrap();
        let table = View::edit_messages(messages);
        assert_eq!(table.len(), 6);
        assert_eq!(table.get_row(1).unwrap().get_cell(1).unwrap().get_content(), "Definition edit cancelled.");
    }
}
