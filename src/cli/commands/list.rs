use super::{build_source, load_events, parse_date_arg};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::{EventFilter, paginate};
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::ui::views::render_events;

pub async fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::List { filter, page, date } = &cli.command {
        let day = parse_date_arg(date.as_ref())?;
        let source = build_source(cli, cfg, day)?;

        let (events, as_of) = load_events(&source, cfg).await?;

        let filter = EventFilter::from(filter);
        let visible = filter.apply(&events, as_of);
        let page = paginate(&visible, page.saturating_sub(1), cfg.page_size);

        header("Attendance Log");
        print!("{}", render_events(&page));
    }
    Ok(())
}
