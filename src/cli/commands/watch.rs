use super::build_source;
use crate::api::{PollerConfig, Snapshot, poller};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::{EventFilter, compute_metrics, paginate};
use crate::errors::AppResult;
use crate::ui::messages::{clear_screen, header, info};
use crate::ui::views::render_events;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

pub async fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Watch {
        filter,
        count,
        interval,
    } = &cli.command
    {
        let source = Arc::new(build_source(cli, cfg, None)?);
        let filter = EventFilter::from(filter);
        let every = Duration::from_secs(interval.unwrap_or(cfg.poll_interval_secs).max(1));

        let handle = poller::spawn(
            source,
            PollerConfig {
                interval: every,
                default_confidence: cfg.default_confidence,
            },
        );
        let mut updates = handle.subscribe();
        let mut shown = 0usize;

        let ctrl_c = tokio::signal::ctrl_c();
        tokio::pin!(ctrl_c);

        loop {
            tokio::select! {
                _ = &mut ctrl_c => {
                    debug!("ctrl-c received");
                    break;
                }
                changed = updates.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    let snapshot = updates.borrow_and_update().clone();
                    if let Some(s) = snapshot {
                        draw(&s, &filter, cfg.page_size, count.is_none());
                        shown += 1;
                    }
                    if count.is_some_and(|n| shown >= n) {
                        break;
                    }
                }
            }
        }

        handle.shutdown().await;
        info(format!("Stopped after {shown} update(s)."));
    }
    Ok(())
}

fn draw(snapshot: &Snapshot, filter: &EventFilter, page_size: usize, clear: bool) {
    if clear {
        clear_screen();
    }

    let visible = filter.apply(&snapshot.events, snapshot.fetched_at);
    let page = paginate(&visible, 0, page_size);

    header(format!(
        "Attendance Log · update #{} · {}",
        snapshot.seq,
        snapshot.fetched_at.format("%H:%M:%S")
    ));
    info(compute_metrics(&snapshot.events, snapshot.fetched_at).headline());
    print!("{}", render_events(&page));
}
