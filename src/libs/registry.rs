//! Catalog of every label constant and the checks that keep it sound.
//!
//! The constants themselves live in [`crate::libs::messages`] and are used
//! symbolically. This module lists them once more, with their category and
//! symbolic name, so they can be listed, exported and verified as a whole.
//!
//! ## Invariants checked by [`verify`]
//!
//! - every value is non-empty
//! - symbolic names are unique across the catalog
//! - there are exactly [`PHASE_COUNT`] phase titles and they are distinct
//! - no field title literal is declared twice
//! - error values are at least [`MIN_ERROR_LENGTH`] characters long
//!
//! ## Usage
//!
//! ```rust
//! use reel::libs::registry::{self, Category};
//!
//! let summary = registry::verify(registry::labels()).unwrap();
//! assert_eq!(summary.count(Category::PhaseTitle), 6);
//! ```

use super::messages::edits::*;
use super::messages::errors::*;
use super::messages::fields::*;
use super::messages::phases::*;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

/// Number of workflow phases, one title each.
pub const PHASE_COUNT: usize = 6;

/// Shortest acceptable error message, in characters.
pub const MIN_ERROR_LENGTH: usize = 10;

/// The four groups a label belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    PhaseTitle,
    Message,
    Error,
    FieldTitle,
}

impl Category {
    pub const ALL: [Category; 4] = [Category::PhaseTitle, Category::Message, Category::Error, Category::FieldTitle];

    /// Identifier used in exports and the configuration file.
    pub fn key(self) -> &'static str {
        match self {
            Category::PhaseTitle => "phase_title",
            Category::Message => "message",
            Category::Error => "error",
            Category::FieldTitle => "field_title",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Category::PhaseTitle => "Phase titles",
            Category::Message => "Messages",
            Category::Error => "Errors",
            Category::FieldTitle => "Field titles",
        };
        f.write_str(text)
    }
}

/// One named constant of the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Label {
    pub category: Category,
    pub name: &'static str,
    pub value: &'static str,
}

macro_rules! label {
    ($category:ident, $name:ident) => {
        Label {
            category: Category::$category,
            name: stringify!($name),
            value: $name,
        }
    };
}

static LABELS: &[Label] = &[
    // Phase titles
    label!(PhaseTitle, PHASE_TITLE_INITIAL_DETAILS),
    label!(PhaseTitle, PHASE_TITLE_WORK_PROGRESS),
    label!(PhaseTitle, PHASE_TITLE_DEFINITION),
    label!(PhaseTitle, PHASE_TITLE_POST_PRODUCTION),
    label!(PhaseTitle, PHASE_TITLE_PUBLISHING_DETAILS),
    label!(PhaseTitle, PHASE_TITLE_POST_PUBLISH),
    // Messages
    label!(Message, MESSAGE_INITIAL_DETAILS_EDIT_CANCELLED),
    label!(Message, MESSAGE_WORK_PROGRESS_EDIT_CANCELLED),
    label!(Message, MESSAGE_DEFINITION_EDIT_CANCELLED),
    label!(Message, MESSAGE_POST_PRODUCTION_EDIT_CANCELLED),
    label!(Message, MESSAGE_INITIAL_DETAILS_SAVED),
    label!(Message, MESSAGE_WORK_PROGRESS_SAVED),
    label!(Message, MESSAGE_DEFINITION_SAVED),
    label!(Message, MESSAGE_POST_PRODUCTION_SAVED),
    label!(Message, MESSAGE_INITIAL_DETAILS_NOT_SAVED),
    label!(Message, MESSAGE_WORK_PROGRESS_NOT_SAVED),
    label!(Message, MESSAGE_DEFINITION_NOT_SAVED),
    label!(Message, MESSAGE_POST_PRODUCTION_NOT_SAVED),
    label!(Message, MESSAGE_NO_CHANGES_DETECTED),
    label!(Message, MESSAGE_RETURNING_TO_PHASE_MENU),
    // Errors
    label!(Error, ERROR_INITIAL_DETAILS_FORM),
    label!(Error, ERROR_SAVE_INITIAL_DETAILS),
    label!(Error, ERROR_WORK_PROGRESS_FORM),
    label!(Error, ERROR_SAVE_WORK_PROGRESS),
    label!(Error, ERROR_DEFINITION_FORM),
    label!(Error, ERROR_SAVE_DEFINITION),
    label!(Error, ERROR_POST_PRODUCTION_FORM),
    label!(Error, ERROR_SAVE_POST_PRODUCTION),
    // Field titles: initial details
    label!(FieldTitle, FIELD_TITLE_PROJECT_NAME),
    label!(FieldTitle, FIELD_TITLE_PROJECT_URL),
    label!(FieldTitle, FIELD_TITLE_SPONSORSHIP_AMOUNT),
    label!(FieldTitle, FIELD_TITLE_SPONSORSHIP_EMAILS),
    label!(FieldTitle, FIELD_TITLE_SPONSORSHIP_BLOCKED),
    label!(FieldTitle, FIELD_TITLE_PUBLISH_DATE),
    label!(FieldTitle, FIELD_TITLE_DELAYED),
    label!(FieldTitle, FIELD_TITLE_GIST_PATH),
    // Field titles: work progress
    label!(FieldTitle, FIELD_TITLE_CODE_DONE),
    label!(FieldTitle, FIELD_TITLE_TALKING_HEAD_DONE),
    label!(FieldTitle, FIELD_TITLE_SCREEN_RECORDING_DONE),
    label!(FieldTitle, FIELD_TITLE_RELATED_VIDEOS),
    label!(FieldTitle, FIELD_TITLE_THUMBNAILS_DONE),
    label!(FieldTitle, FIELD_TITLE_DIAGRAMS_DONE),
    label!(FieldTitle, FIELD_TITLE_SCREENSHOTS_DONE),
    label!(FieldTitle, FIELD_TITLE_FILES_LOCATION),
    label!(FieldTitle, FIELD_TITLE_TAGLINE),
    label!(FieldTitle, FIELD_TITLE_TAGLINE_IDEAS),
    label!(FieldTitle, FIELD_TITLE_OTHER_LOGOS),
    // Field titles: definition
    label!(FieldTitle, FIELD_TITLE_TITLE),
    label!(FieldTitle, FIELD_TITLE_DESCRIPTION),
    label!(FieldTitle, FIELD_TITLE_HIGHLIGHT),
    label!(FieldTitle, FIELD_TITLE_TAGS),
    label!(FieldTitle, FIELD_TITLE_DESCRIPTION_TAGS),
    label!(FieldTitle, FIELD_TITLE_TWEET_TEXT),
    label!(FieldTitle, FIELD_TITLE_ANIMATIONS_SCRIPT),
    label!(FieldTitle, FIELD_TITLE_REQUEST_THUMBNAIL),
    // Field titles: post-production
    label!(FieldTitle, FIELD_TITLE_THUMBNAIL_PATH),
    label!(FieldTitle, FIELD_TITLE_MEMBERS),
    label!(FieldTitle, FIELD_TITLE_REQUEST_EDIT),
    label!(FieldTitle, FIELD_TITLE_TIMECODES),
    label!(FieldTitle, FIELD_TITLE_MOVIE_DONE),
    label!(FieldTitle, FIELD_TITLE_SLIDES_DONE),
    // Field titles: publishing details
    label!(FieldTitle, FIELD_TITLE_VIDEO_FILE_PATH),
    label!(FieldTitle, FIELD_TITLE_UPLOAD_TO_YOUTUBE),
    label!(FieldTitle, FIELD_TITLE_CREATE_HUGO_POST),
    // Field titles: post-publish
    label!(FieldTitle, FIELD_TITLE_BLUESKY_POST),
    label!(FieldTitle, FIELD_TITLE_LINKEDIN_POST),
    label!(FieldTitle, FIELD_TITLE_SLACK_POST),
    label!(FieldTitle, FIELD_TITLE_YOUTUBE_HIGHLIGHT),
    label!(FieldTitle, FIELD_TITLE_YOUTUBE_COMMENT),
    label!(FieldTitle, FIELD_TITLE_YOUTUBE_COMMENT_REPLIES),
    label!(FieldTitle, FIELD_TITLE_GDE_POST),
    label!(FieldTitle, FIELD_TITLE_CODE_REPOSITORY),
    label!(FieldTitle, FIELD_TITLE_NOTIFY_SPONSORS),
];

/// Every label in declaration order.
pub fn labels() -> &'static [Label] {
    LABELS
}

/// Labels of one category in declaration order.
pub fn by_category(category: Category) -> impl Iterator<Item = &'static Label> {
    LABELS.iter().filter(move |label| label.category == category)
}

/// `categories` with repeats removed, keeping the first occurrence of each.
pub fn unique_categories(categories: &[Category]) -> Vec<Category> {
    let mut unique = Vec::with_capacity(categories.len());
    for category in categories {
        if !unique.contains(category) {
            unique.push(*category);
        }
    }
    unique
}

/// Labels belonging to any of `categories`, in declaration order.
pub fn select(categories: &[Category]) -> Vec<&'static Label> {
    LABELS.iter().filter(|label| categories.contains(&label.category)).collect()
}

/// A constant that breaks one of the registry invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Defect {
    #[error("{name} is empty")]
    Empty { name: &'static str },
    #[error("{name} is {length} characters long, expected at least {min}")]
    TooShort { name: &'static str, length: usize, min: usize },
    #[error("{name} is declared more than once")]
    DuplicateName { name: &'static str },
    #[error("phase title '{value}' is used by both {first} and {second}")]
    DuplicatePhaseTitle {
        value: &'static str,
        first: &'static str,
        second: &'static str,
    },
    #[error("field title '{value}' is declared by both {first} and {second}")]
    DuplicateFieldTitle {
        value: &'static str,
        first: &'static str,
        second: &'static str,
    },
    #[error("expected {expected} phase titles, found {found}")]
    PhaseCount { expected: usize, found: usize },
}

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("registry has {} defect(s)", .0.len())]
    Defects(Vec<Defect>),
}

impl RegistryError {
    pub fn defects(&self) -> &[Defect] {
        match self {
            RegistryError::Defects(defects) => defects,
        }
    }
}

/// Label counts per category of a verified catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub phase_titles: usize,
    pub messages: usize,
    pub errors: usize,
    pub field_titles: usize,
}

impl Summary {
    pub fn count(&self, category: Category) -> usize {
        match category {
            Category::PhaseTitle => self.phase_titles,
            Category::Message => self.messages,
            Category::Error => self.errors,
            Category::FieldTitle => self.field_titles,
        }
    }

    pub fn total(&self) -> usize {
        self.phase_titles + self.messages + self.errors + self.field_titles
    }

    fn add(&mut self, category: Category) {
        match category {
            Category::PhaseTitle => self.phase_titles += 1,
            Category::Message => self.messages += 1,
            Category::Error => self.errors += 1,
            Category::FieldTitle => self.field_titles += 1,
        }
    }
}

/// Checks a catalog against the registry invariants.
///
/// All defects are collected rather than stopping at the first one, so a
/// single run reports everything that needs fixing.
pub fn verify(labels: &[Label]) -> Result<Summary, RegistryError> {
    let mut defects = Vec::new();
    let mut summary = Summary::default();
    let mut names = HashSet::new();
    let mut phase_titles: Vec<&Label> = Vec::new();
    let mut field_titles: Vec<&Label> = Vec::new();

    for label in labels {
        summary.add(label.category);

        if !names.insert(label.name) {
            defects.push(Defect::DuplicateName { name: label.name });
        }

        if label.value.is_empty() {
            defects.push(Defect::Empty { name: label.name });
            continue;
        }

        match label.category {
            Category::PhaseTitle => {
                if let Some(first) = phase_titles.iter().find(|seen| seen.value == label.value) {
                    defects.push(Defect::DuplicatePhaseTitle {
                        value: label.value,
                        first: first.name,
                        second: label.name,
                    });
                }
                phase_titles.push(label);
            }
            Category::FieldTitle => {
                if let Some(first) = field_titles.iter().find(|seen| seen.value == label.value) {
                    defects.push(Defect::DuplicateFieldTitle {
                        value: label.value,
                        first: first.name,
                        second: label.name,
                    });
                }
                field_titles.push(label);
            }
            Category::Error => {
                let length = label.value.chars().count();
                if length < MIN_ERROR_LENGTH {
                    defects.push(Defect::TooShort {
                        name: label.name,
                        length,
                        min: MIN_ERROR_LENGTH,
                    });
                }
            }
            Category::Message => {}
        }
    }

    if summary.phase_titles != PHASE_COUNT {
        defects.push(Defect::PhaseCount {
            expected: PHASE_COUNT,
            found: summary.phase_titles,
        });
    }

    if defects.is_empty() {
        tracing::debug!(total = summary.total(), "registry verified");
        Ok(summary)
    } else {
        tracing::debug!(defects = defects.len(), "registry has defects");
        Err(RegistryError::Defects(defects))
    }
}
