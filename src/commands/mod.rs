pub mod check;
pub mod export;
pub mod init;
pub mod list;
pub mod phases;
pub mod show;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configure listing and export preferences")]
    Init(init::InitArgs),
    #[command(about = "List labels in the registry")]
    List(list::ListArgs),
    #[command(about = "Show the production phases")]
    Phases,
    #[command(about = "Show a phase with its fields and edit messages")]
    Show(show::ShowArgs),
    #[command(about = "Verify the registry invariants")]
    Check,
    #[command(about = "Export labels to CSV or JSON")]
    Export(export::ExportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::List(args) => list::cmd(args),
            Commands::Phases => phases::cmd(),
            Commands::Show(args) => show::cmd(args),
            Commands::Check => check::cmd(),
            Commands::Export(args) => export::cmd(args),
        }
    }
}
