use crate::{
    libs::{messages::Message, view::View},
    msg_print,
};
use anyhow::Result;

pub fn cmd() -> Result<()> {
    msg_print!(Message::PhasesHeader, true);
    View::phases().printstd();
    Ok(())
}
