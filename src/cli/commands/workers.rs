use super::{build_source, load_events, parse_date_arg};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::summarize;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::ui::views::render_workers;

pub async fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Workers { date } = &cli.command {
        let day = parse_date_arg(date.as_ref())?;
        let source = build_source(cli, cfg, day)?;

        let (events, _) = load_events(&source, cfg).await?;
        let summaries = summarize(&events);

        header("Workers");
        print!("{}", render_workers(&summaries));
    }
    Ok(())
}
