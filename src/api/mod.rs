pub mod poller;
pub mod source;

pub use poller::{PollHandle, PollerConfig, Snapshot, SnapshotReceiver};
pub use source::{AnySource, FileSource, HttpSource, RecordSource};
