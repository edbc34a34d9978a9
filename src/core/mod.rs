pub mod filter;
pub mod hourly;
pub mod metrics;
pub mod paginate;
pub mod reconcile;
pub mod summary;

pub use filter::{ConfidenceFilter, DateRange, EventFilter, StatusFilter};
pub use hourly::{HourlyReport, build_hourly};
pub use metrics::{DashboardMetrics, UnknownDetection, compute_metrics};
pub use paginate::{Page, paginate};
pub use reconcile::{ReconcileOptions, reconcile};
pub use summary::{WorkerSummary, summarize};
