pub mod config;
pub mod export;
pub mod hourly;
pub mod init;
pub mod list;
pub mod stats;
pub mod watch;
pub mod workers;

use crate::api::{AnySource, FileSource, HttpSource, RecordSource};
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::{ReconcileOptions, reconcile};
use crate::errors::{AppError, AppResult};
use crate::models::AttendanceEvent;
use crate::utils::date;
use chrono::{NaiveDate, NaiveDateTime};
use std::time::Duration;

/// Parse an optional `--date` argument.
pub(crate) fn parse_date_arg(value: Option<&String>) -> AppResult<Option<NaiveDate>> {
    value
        .map(|s| date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone())))
        .transpose()
}

/// `--input` wins over the backend URL.
pub(crate) fn build_source(cli: &Cli, cfg: &Config, day: Option<NaiveDate>) -> AppResult<AnySource> {
    match &cli.input {
        Some(path) => Ok(AnySource::File(FileSource::new(path, day))),
        None => Ok(AnySource::Http(HttpSource::new(
            &cfg.api_url,
            Duration::from_secs(cfg.request_timeout_secs),
            day,
        )?)),
    }
}

/// One fetch + reconciliation pass. Returns the events and the as-of time
/// the pass used.
pub(crate) async fn load_events<S: RecordSource>(
    source: &S,
    cfg: &Config,
) -> AppResult<(Vec<AttendanceEvent>, NaiveDateTime)> {
    let records = source.fetch().await?;

    let as_of = date::now();
    let opts = ReconcileOptions::new(as_of)
        .with_default_confidence(cfg.default_confidence)
        .with_profile_base(source.profile_base());

    Ok((reconcile(&records, &opts), as_of))
}
