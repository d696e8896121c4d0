//! Lists registry labels as a table.
//!
//! Without `--category` the categories come from the display settings,
//! which default to all four.

use crate::{
    libs::{
        config::Config,
        messages::Message,
        registry::{self, Category},
        view::View,
    },
    msg_print, msg_warning,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Only list labels of this category (repeatable)
    #[arg(short, long, value_enum)]
    category: Vec<Category>,

    /// Show symbolic constant names next to the values
    #[arg(short, long)]
    names: bool,
}

pub fn cmd(args: ListArgs) -> Result<()> {
    let display = Config::read()?.display();
    let categories = if args.category.is_empty() { display.categories } else { args.category };
    let categories = registry::unique_categories(&categories);
    let show_names = args.names || display.show_names;

    let labels = registry::select(&categories);
    if labels.is_empty() {
        msg_warning!(Message::NoLabelsSelected);
        return Ok(());
    }

    for category in categories.iter() {
        msg_print!(Message::CategoryHeader(*category), true);
        let in_category: Vec<_> = labels.iter().copied().filter(|label| label.category == *category).collect();
        View::labels(&in_category, show_names).printstd();
    }

    Ok(())
}
