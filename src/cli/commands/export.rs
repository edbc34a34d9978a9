use super::{build_source, hourly::load_report, load_events, parse_date_arg};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::EventFilter;
use crate::errors::AppResult;
use crate::export::{export_events, export_hourly};
use crate::ui::messages::info;
use std::path::Path;

pub async fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
        hourly,
        date,
        filter,
    } = &cli.command
    {
        let day = parse_date_arg(date.as_ref())?;
        let path = Path::new(file);

        if *hourly {
            let report = load_report(cli, cfg, day).await?;
            return export_hourly(&report, *format, path, *force);
        }

        let source = build_source(cli, cfg, day)?;
        let (events, as_of) = load_events(&source, cfg).await?;
        let visible = EventFilter::from(filter).apply(&events, as_of);

        info(format!(
            "{} of {} records selected for {} export",
            visible.len(),
            events.len(),
            format.as_str()
        ));
        export_events(visible, *format, path, *force)?;
    }
    Ok(())
}
