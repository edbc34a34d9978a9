pub mod attendance_event;
pub mod confidence;
pub mod raw_record;
pub mod session_status;

pub use attendance_event::AttendanceEvent;
pub use confidence::ConfidenceLevel;
pub use raw_record::{RawAttendanceRecord, parse_records};
pub use session_status::SessionStatus;
