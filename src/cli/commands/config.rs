use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

/// Handle the `config` subcommand
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = &cli.command
    {
        let path = Config::resolve_path(cli.config.as_deref());

        if *print_config {
            info(format!("Current configuration ({}):", path.display()));
            print!("{}", serde_yaml::to_string(cfg)?);
        }

        if *check {
            if !path.exists() {
                warning(format!(
                    "{} does not exist, defaults are in use (run `init`)",
                    path.display()
                ));
                return Ok(());
            }

            let missing = Config::missing_keys(&path)?;
            if missing.is_empty() {
                success("Configuration file is complete.");
            } else {
                for key in missing {
                    warning(format!("Missing key '{key}', default value in use"));
                }
            }
        }

        if !*print_config && !*check {
            info(format!("Config file: {}", path.display()));
        }
    }
    Ok(())
}
