//! Verifies the label registry and reports every defect found.

use crate::{
    libs::{
        messages::Message,
        registry::{self, Category, Label, Summary},
    },
    msg_bail_anyhow, msg_error, msg_print, msg_success,
};
use anyhow::Result;

pub fn cmd() -> Result<()> {
    report(registry::labels()).map(|_| ())
}

/// Verifies `labels`, printing the per-category counts or the defects.
///
/// Fails when any defect is found.
pub fn report(labels: &[Label]) -> Result<Summary> {
    match registry::verify(labels) {
        Ok(summary) => {
            msg_success!(Message::RegistryVerified(summary.total()));
            for category in Category::ALL {
                msg_print!(Message::RegistryCategoryCount(category, summary.count(category)));
            }
            Ok(summary)
        }
        Err(error) => {
            msg_error!(Message::RegistryDefectsFound(error.defects().len()));
            for defect in error.defects() {
                msg_print!(Message::RegistryDefect(defect.to_string()));
            }
            msg_bail_anyhow!(Message::RegistryCheckFailed)
        }
    }
}
