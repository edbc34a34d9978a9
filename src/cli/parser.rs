use crate::core::{ConfidenceFilter, DateRange, EventFilter, StatusFilter};
use crate::export::ExportFormat;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for rattendance
#[derive(Parser)]
#[command(
    name = "rattendance",
    version = env!("CARGO_PKG_VERSION"),
    about = "Attendance log viewer for a face-recognition attendance backend",
    long_about = None
)]
pub struct Cli {
    /// Override the backend base URL (e.g. http://127.0.0.1:8000)
    #[arg(global = true, long = "api", value_name = "URL")]
    pub api: Option<String>,

    /// Read raw attendance rows from a JSON file instead of the backend
    #[arg(global = true, long = "input", value_name = "FILE")]
    pub input: Option<String>,

    /// Use a specific configuration file
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Filters shared by `list`, `watch` and `export`.
#[derive(Args, Clone, Debug, Default)]
pub struct FilterArgs {
    #[arg(long, short, help = "Case-insensitive search on the worker name")]
    pub search: Option<String>,

    #[arg(long, short, value_enum, default_value = "all", help = "Date range")]
    pub range: DateRange,

    #[arg(long, short, value_enum, default_value = "all", help = "Confidence bucket")]
    pub confidence: ConfidenceFilter,

    #[arg(long, value_enum, default_value = "all", help = "Session status")]
    pub status: StatusFilter,

    #[arg(long = "present", help = "Only workers currently present")]
    pub present: bool,
}

impl From<&FilterArgs> for EventFilter {
    fn from(a: &FilterArgs) -> Self {
        EventFilter {
            search: a.search.clone(),
            range: a.range,
            confidence: a.confidence,
            status: a.status,
            present_only: a.present,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default configuration file
    Init {
        #[arg(long, short, help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Inspect the configuration file
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,
    },

    /// Show the attendance log
    List {
        #[command(flatten)]
        filter: FilterArgs,

        #[arg(long, short, default_value_t = 1, help = "Page number (1-based)")]
        page: usize,

        #[arg(long, value_name = "YYYY-MM-DD", help = "Only records of this date")]
        date: Option<String>,
    },

    /// Poll the backend and redraw the attendance log on every update
    Watch {
        #[command(flatten)]
        filter: FilterArgs,

        #[arg(long, value_name = "N", help = "Stop after N snapshots")]
        count: Option<usize>,

        #[arg(long, value_name = "SECS", help = "Override the poll interval")]
        interval: Option<u64>,
    },

    /// Per-worker totals
    Workers {
        #[arg(long, value_name = "YYYY-MM-DD", help = "Only records of this date")]
        date: Option<String>,
    },

    /// Present count, unknown-person alerts and average confidence for today
    Stats,

    /// Hourly occupancy matrix for one day
    Hourly {
        #[arg(long, value_name = "YYYY-MM-DD", help = "Day to report (default: today)")]
        date: Option<String>,
    },

    /// Export reconciled records or the hourly matrix
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,

        #[arg(long, help = "Export the hourly matrix instead of the log")]
        hourly: bool,

        #[arg(long, value_name = "YYYY-MM-DD")]
        date: Option<String>,

        #[command(flatten)]
        filter: FilterArgs,
    },
}
