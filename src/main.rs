use reel::commands::Cli;
use reel::libs::messages::macros::{is_debug_mode, DEBUG_ENV_VAR};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let default_level = if std::env::var(DEBUG_ENV_VAR).is_ok() { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init();
}

fn main() -> anyhow::Result<()> {
    if is_debug_mode() {
        init_tracing();
    }
    Cli::menu()
}
