use super::{build_source, load_events, parse_date_arg};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::{HourlyReport, build_hourly};
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::ui::views::render_hourly;
use chrono::NaiveDate;

/// Load everything and build the matrix for `day` (today by default).
///
/// The full history is fetched so workers without records that day still
/// get a column.
pub(crate) async fn load_report(
    cli: &Cli,
    cfg: &Config,
    day: Option<NaiveDate>,
) -> AppResult<HourlyReport> {
    let source = build_source(cli, cfg, None)?;
    let (events, as_of) = load_events(&source, cfg).await?;
    let day = day.unwrap_or(as_of.date());

    Ok(build_hourly(&events, day, cfg.hourly_start, cfg.hourly_end))
}

pub async fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Hourly { date } = &cli.command {
        let day = parse_date_arg(date.as_ref())?;
        let report = load_report(cli, cfg, day).await?;

        header(format!("Hourly occupancy · {}", report.date));
        print!("{}", render_hourly(&report));
    }
    Ok(())
}
