#[cfg(test)]
mod tests {
    use reel::libs::config::{categories_from_selection, Config, DisplayConfig, CONFIG_FILE_NAME};
    use reel::libs::data_storage::DataStorage;
    use reel::libs::export::ExportFormat;
    use reel::libs::registry::Category;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Gives each config test its own data directory.
    struct ConfigTestContext {
        _temp_dir: TempDir,
        storage: DataStorage,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let storage = DataStorage::with_base(temp_dir.path().join("lacodda").join("reel"));
            ConfigTestContext {
                _temp_dir: temp_dir,
                storage,
            }
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.display.is_none());

        let display = config.display();
        assert!(!display.show_names);
        assert_eq!(display.categories, Category::ALL.to_vec());
        assert_eq!(display.export_format, ExportFormat::Csv);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_nonexistent_config(ctx: &mut ConfigTestContext) {
        let config = Config::read_from(&ctx.storage).unwrap();
        assert_eq!(config, Config::default());
        assert!(ctx.storage.base_path().exists());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_config(ctx: &mut ConfigTestContext) {
        let config = Config {
            display: Some(DisplayConfig {
                show_names: true,
                categories: vec![Category::FieldTitle],
                export_format: ExportFormat::Json,
            }),
        };
        config.save_to(&ctx.storage).unwrap();

        let read_config = Config::read_from(&ctx.storage).unwrap();
        assert_eq!(read_config, config);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_config_file_shape(ctx: &mut ConfigTestContext) {
        Config::default().save_to(&ctx.storage).unwrap();
        let raw = std::fs::read_to_string(ctx.storage.get_path(CONFIG_FILE_NAME).unwrap()).unwrap();
        assert_eq!(raw.trim(), "{}");

        let config = Config {
            display: Some(DisplayConfig::default()),
        };
        config.save_to(&ctx.storage).unwrap();
        let raw = std::fs::read_to_string(ctx.storage.get_path(CONFIG_FILE_NAME).unwrap()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["display"]["export_format"], "csv");
        assert_eq!(value["display"]["categories"][0], "phase_title");
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_invalid_config(ctx: &mut ConfigTestContext) {
        let path = ctx.storage.get_path(CONFIG_FILE_NAME).unwrap();
        std::fs::write(path, "{ not json").unwrap();

        let error = Config::read_from(&ctx.storage).unwrap_err();
        assert!(error.to_string().contains("Failed to parse configuration"));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_delete_config(ctx: &mut ConfigTestContext) {
        assert!(!Config::delete_from(&ctx.storage).unwrap());

        Config::default().save_to(&ctx.storage).unwrap();
        assert!(Config::delete_from(&ctx.storage).unwrap());
        assert!(!ctx.storage.get_path(CONFIG_FILE_NAME).unwrap().exists());
    }

    #[test]
    fn test_empty_category_selection_is_rejected() {
        assert_eq!(categories_from_selection(&[]), None);
        assert_eq!(categories_from_selection(&[9]), None);
    }

    #[test]
    fn test_category_selection_maps_and_deduplicates() {
        assert_eq!(
            categories_from_selection(&[3, 0, 3]),
            Some(vec![Category::FieldTitle, Category::PhaseTitle])
        );
        assert_eq!(categories_from_selection(&[0, 1, 2, 3]), Some(Category::ALL.to_vec()));
    }
}
