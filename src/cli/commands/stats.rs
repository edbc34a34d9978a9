use super::{build_source, load_events};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::compute_metrics;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::ui::views::render_metrics;

pub async fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats = &cli.command {
        let source = build_source(cli, cfg, None)?;
        let (events, as_of) = load_events(&source, cfg).await?;
        let metrics = compute_metrics(&events, as_of);

        header(format!("Dashboard · {}", metrics.day.format("%Y-%m-%d")));
        print!("{}", render_metrics(&metrics));
    }
    Ok(())
}
