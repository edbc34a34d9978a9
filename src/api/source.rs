//! Where raw attendance rows come from: the backend over HTTP, or a JSON file.

use crate::errors::{AppError, AppResult};
use crate::models::{RawAttendanceRecord, parse_records};
use crate::utils::date::parse_date;
use chrono::NaiveDate;
use std::future::Future;
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;

pub const RAW_ATTENDANCE_PATH: &str = "/api/attendance/raw";

/// A fetchable collection of raw attendance rows.
pub trait RecordSource: Send + Sync {
    fn fetch(&self) -> impl Future<Output = AppResult<Vec<RawAttendanceRecord>>> + Send;

    /// Base URL used for worker profile links, when the source has one.
    fn profile_base(&self) -> Option<String> {
        None
    }
}

pub struct HttpSource {
    client: reqwest::Client,
    base_url: String,
    date: Option<NaiveDate>,
}

impl HttpSource {
    pub fn new(base_url: &str, timeout: Duration, date: Option<NaiveDate>) -> AppResult<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            date,
        })
    }

    pub fn url(&self) -> String {
        format!("{}{}", self.base_url, RAW_ATTENDANCE_PATH)
    }
}

impl RecordSource for HttpSource {
    async fn fetch(&self) -> AppResult<Vec<RawAttendanceRecord>> {
        let url = self.url();
        let mut request = self.client.get(&url);
        if let Some(d) = self.date {
            request = request.query(&[("date", d.format("%Y-%m-%d").to_string())]);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AppError::HttpStatus {
                status: status.as_u16(),
                url,
            });
        }

        let bytes = response.bytes().await?;
        let records = parse_records(&bytes)?;
        debug!(count = records.len(), %url, "fetched attendance rows");
        Ok(records)
    }

    fn profile_base(&self) -> Option<String> {
        Some(self.base_url.clone())
    }
}

/// Reads the same JSON array the backend serves from a local file.
pub struct FileSource {
    path: PathBuf,
    date: Option<NaiveDate>,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>, date: Option<NaiveDate>) -> Self {
        Self {
            path: path.into(),
            date,
        }
    }
}

impl RecordSource for FileSource {
    async fn fetch(&self) -> AppResult<Vec<RawAttendanceRecord>> {
        let bytes = tokio::fs::read(&self.path).await?;
        let records = parse_records(&bytes)?;

        // mirror the backend's `?date=` filter
        Ok(match self.date {
            Some(d) => records
                .into_iter()
                .filter(|r| r.date.as_deref().and_then(parse_date) == Some(d))
                .collect(),
            None => records,
        })
    }
}

/// Source selected from the command line.
pub enum AnySource {
    Http(HttpSource),
    File(FileSource),
}

impl RecordSource for AnySource {
    async fn fetch(&self) -> AppResult<Vec<RawAttendanceRecord>> {
        match self {
            AnySource::Http(s) => s.fetch().await,
            AnySource::File(s) => s.fetch().await,
        }
    }

    fn profile_base(&self) -> Option<String> {
        match self {
            AnySource::Http(s) => s.profile_base(),
            AnySource::File(s) => s.profile_base(),
        }
    }
}
