use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command: write a default configuration file.
pub fn handle(cli: &Cli) -> AppResult<()> {
    if let Commands::Init { force } = &cli.command {
        let path = Config::resolve_path(cli.config.as_deref());

        info(format!("Initializing configuration at {}", path.display()));
        Config::init_file(&path, *force)?;

        success(format!("Config file: {}", path.display()));
    }
    Ok(())
}
