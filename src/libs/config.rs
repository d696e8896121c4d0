//! User preferences for listing and exporting labels.
//!
//! The configuration is a small JSON file in the platform data directory
//! (see [`DataStorage`]). Every section is optional; a missing file or a
//! missing section falls back to defaults, so the application works with
//! no setup at all.
//!
//! ```rust,no_run
//! use reel::libs::config::Config;
//!
//! let config = Config::read()?;
//! let display = config.display();
//! println!("show names: {}", display.show_names);
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use super::export::ExportFormat;
use super::registry::{self, Category};
use crate::libs::messages::Message;
use crate::{msg_debug, msg_error_anyhow, msg_print, msg_warning};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, MultiSelect, Select};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

/// Configuration file name inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// How labels are listed and exported.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DisplayConfig {
    /// Show the symbolic constant name next to each value in listings.
    pub show_names: bool,

    /// Categories listed when no category is given on the command line.
    pub categories: Vec<Category>,

    /// Format used by `export` when no format is given on the command line.
    pub export_format: ExportFormat,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            show_names: false,
            categories: Category::ALL.to_vec(),
            export_format: ExportFormat::Csv,
        }
    }
}

/// Maps wizard selections (indices into [`Category::ALL`]) to categories.
///
/// Returns `None` for an empty selection, which would leave `list` with
/// nothing to show.
pub fn categories_from_selection(selected: &[usize]) -> Option<Vec<Category>> {
    let indices: Vec<usize> = selected.iter().copied().filter(|index| *index < Category::ALL.len()).collect();
    if indices.is_empty() {
        return None;
    }
    let categories: Vec<Category> = indices.into_iter().map(|index| Category::ALL[index]).collect();
    Some(registry::unique_categories(&categories))
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<DisplayConfig>,
}

impl Config {
    /// Reads the configuration from the platform data directory.
    pub fn read() -> Result<Config> {
        Self::read_from(&DataStorage::new())
    }

    /// Reads the configuration from `storage`, or returns defaults if no file exists.
    ///
    /// # Errors
    ///
    /// Fails if the file exists but cannot be read or is not valid JSON.
    pub fn read_from(storage: &DataStorage) -> Result<Config> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            msg_debug!(Message::ConfigFileNotFound);
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(&config_file_path)?;
        serde_json::from_str(&config_str).map_err(|e| msg_error_anyhow!(Message::ConfigParseError(e.to_string())))
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&DataStorage::new())
    }

    /// Writes the configuration to `storage` as pretty-printed JSON.
    pub fn save_to(&self, storage: &DataStorage) -> Result<()> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    pub fn delete() -> Result<bool> {
        Self::delete_from(&DataStorage::new())
    }

    /// Removes the configuration file. Returns `false` if there was none.
    pub fn delete_from(storage: &DataStorage) -> Result<bool> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(false);
        }
        fs::remove_file(config_file_path)?;
        Ok(true)
    }

    /// Display settings, or the defaults when the section is absent.
    pub fn display(&self) -> DisplayConfig {
        self.display.clone().unwrap_or_default()
    }

    /// Interactive setup wizard, seeded with the current configuration.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();
        let default = config.display();
        let theme = ColorfulTheme::default();

        msg_print!(Message::ConfigModuleDisplay);

        let show_names = Confirm::with_theme(&theme)
            .with_prompt(Message::PromptShowNames.to_string())
            .default(default.show_names)
            .interact()?;

        let category_items: Vec<String> = Category::ALL.iter().map(|category| category.to_string()).collect();
        let checked: Vec<bool> = Category::ALL.iter().map(|category| default.categories.contains(category)).collect();
        let categories = loop {
            let selected = MultiSelect::with_theme(&theme)
                .with_prompt(Message::PromptSelectCategories.to_string())
                .items(&category_items)
                .defaults(&checked)
                .interact()?;
            match categories_from_selection(&selected) {
                Some(categories) => break categories,
                None => msg_warning!(Message::NoCategoriesSelected),
            }
        };

        let formats = [ExportFormat::Csv, ExportFormat::Json];
        let format_items: Vec<String> = formats.iter().map(|format| format.to_string()).collect();
        let current = formats.iter().position(|format| *format == default.export_format).unwrap_or(0);
        let format = Select::with_theme(&theme)
            .with_prompt(Message::PromptExportFormat.to_string())
            .items(&format_items)
            .default(current)
            .interact()?;

        config.display = Some(DisplayConfig {
            show_names,
            categories,
            export_format: formats[format],
        });
        Ok(config)
    }
}
