#[cfg(test)]
mod tests {
    use reel::commands::check;
    use reel::libs::registry::{self, Category, Defect, Label, MIN_ERROR_LENGTH, PHASE_COUNT};
    use std::collections::HashSet;

    fn phase_titles() -> Vec<Label> {
        registry::by_category(Category::PhaseTitle).copied().collect()
    }

    #[test]
    fn test_catalog_verifies() {
        let summary = registry::verify(registry::labels()).unwrap();
        assert_eq!(summary.phase_titles, 6);
        assert_eq!(summary.messages, 14);
        assert_eq!(summary.errors, 8);
        assert_eq!(summary.field_titles, 45);
        assert_eq!(summary.total(), registry::labels().len());
    }

    #[test]
    fn test_catalog_names_are_unique() {
        let names: HashSet<&str> = registry::labels().iter().map(|label| label.name).collect();
        assert_eq!(names.len(), registry::labels().len());
    }

    #[test]
    fn test_catalog_names_match_categories() {
        for label in registry::labels() {
            let prefix = match label.category {
                Category::PhaseTitle => "PHASE_TITLE_",
                Category::Message => "MESSAGE_",
                Category::Error => "ERROR_",
                Category::FieldTitle => "FIELD_TITLE_",
            };
            assert!(label.name.starts_with(prefix), "{} is not a {:?}", label.name, label.category);
        }
    }

    #[test]
    fn test_select_keeps_declaration_order() {
        let selected = registry::select(&[Category::Error, Category::PhaseTitle]);
        assert_eq!(selected.len(), 14);
        assert_eq!(selected[0].name, "PHASE_TITLE_INITIAL_DETAILS");
        assert_eq!(selected[6].name, "ERROR_INITIAL_DETAILS_FORM");
        assert!(registry::select(&[]).is_empty());
    }

    #[test]
    fn test_unique_categories_keeps_first_occurrence() {
        let categories = [Category::Error, Category::PhaseTitle, Category::Error, Category::PhaseTitle];
        assert_eq!(registry::unique_categories(&categories), vec![Category::Error, Category::PhaseTitle]);
        assert!(registry::unique_categories(&[]).is_empty());

        let repeated = registry::select(&registry::unique_categories(&categories));
        assert_eq!(repeated.len(), 6 + 8);
    }

    #[test]
    fn test_empty_value_is_a_defect() {
        let mut labels = phase_titles();
        labels.push(Label {
            category: Category::Message,
            name: "MESSAGE_BLANK",
            value: "",
        });

        let error = registry::verify(&labels).unwrap_err();
        assert_eq!(error.defects(), &[Defect::Empty { name: "MESSAGE_BLANK" }]);
    }

    #[test]
    fn test_short_error_is_a_defect() {
        let mut labels = phase_titles();
        labels.push(Label {
            category: Category::Error,
            name: "ERROR_OOPS",
            value: "oops",
        });

        let error = registry::verify(&labels).unwrap_err();
        assert_eq!(
            error.defects(),
            &[Defect::TooShort {
                name: "ERROR_OOPS",
                length: 4,
                min: MIN_ERROR_LENGTH
            }]
        );
    }

    #[test]
    fn test_duplicate_phase_title_is_a_defect() {
        let mut labels = phase_titles();
        labels[5].value = "Definition";

        let error = registry::verify(&labels).unwrap_err();
        assert_eq!(
            error.defects(),
            &[Defect::DuplicatePhaseTitle {
                value: "Definition",
                first: "PHASE_TITLE_DEFINITION",
                second: "PHASE_TITLE_POST_PUBLISH"
            }]
        );
    }

    #[test]
    fn test_duplicate_field_title_is_a_defect() {
        let mut labels = phase_titles();
        labels.push(Label {
            category: Category::FieldTitle,
            name: "FIELD_TITLE_MOVIE_DONE",
            value: "Movie Done",
        });
        labels.push(Label {
            category: Category::FieldTitle,
            name: "FIELD_TITLE_VIDEO_DONE",
            value: "Movie Done",
        });

        let error = registry::verify(&labels).unwrap_err();
        assert_eq!(error.defects().len(), 1);
        assert!(matches!(
            error.defects()[0],
            Defect::DuplicateFieldTitle { second: "FIELD_TITLE_VIDEO_DONE", .. }
        ));
    }

    #[test]
    fn test_duplicate_name_and_phase_count() {
        let mut labels = phase_titles();
        labels.pop();
        labels.push(Label {
            category: Category::Message,
            name: "PHASE_TITLE_DEFINITION",
            value: "Definition saved successfully.",
        });

        let error = registry::verify(&labels).unwrap_err();
        assert_eq!(
            error.defects(),
            &[
                Defect::DuplicateName { name: "PHASE_TITLE_DEFINITION" },
                Defect::PhaseCount {
                    expected: PHASE_COUNT,
                    found: 5
                }
            ]
        );
        assert_eq!(error.to_string(), "registry has 2 defect(s)");
    }

    #[test]
    fn test_all_defects_reported_in_one_pass() {
        let labels = vec![
            Label {
                category: Category::Error,
                name: "ERROR_EMPTY",
                value: "",
            },
            Label {
                category: Category::Error,
                name: "ERROR_SHORT",
                value: "bad",
            },
        ];

        let error = registry::verify(&labels).unwrap_err();
        assert_eq!(error.defects().len(), 3);
    }

    #[test]
    fn test_defect_descriptions() {
        let defect = Defect::TooShort {
            name: "ERROR_OOPS",
            length: 4,
            min: 10,
        };
        assert_eq!(defect.to_string(), "ERROR_OOPS is 4 characters long, expected at least 10");
        assert_eq!(
            Defect::PhaseCount { expected: 6, found: 7 }.to_string(),
            "expected 6 phase titles, found 7"
        );
    }

    #[test]
    fn test_check_report() {
        let summary = check::report(registry::labels()).unwrap();
        assert_eq!(summary.count(Category::FieldTitle), 45);

        let mut labels = phase_titles();
        labels[0].value = "";
        assert!(check::report(&labels).is_err());
    }
}
