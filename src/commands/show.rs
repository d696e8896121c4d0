//! Shows one phase: its title, the titles of its form fields and, for
//! phases edited interactively, the messages reported after an edit.

use crate::{
    libs::{messages::Message, phase::Phase, view::View},
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Phase to show
    #[arg(value_enum)]
    phase: Phase,
}

pub fn cmd(args: ShowArgs) -> Result<()> {
    let phase = args.phase;

    msg_print!(Message::PhaseHeader(phase), true);
    msg_print!(Message::PhaseFieldsHeader(phase.fields().len()));
    View::fields(phase).printstd();

    match phase.edit_messages() {
        Some(messages) => {
            msg_print!(Message::PhaseEditMessagesHeader, true);
            View::edit_messages(messages).printstd();
        }
        None => {
            msg_info!(Message::PhaseNotEditable(phase), true);
        }
    }

    Ok(())
}
