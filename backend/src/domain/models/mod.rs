pub mod access_log;
pub mod leave_record;
pub mod session;
pub mod staff;

pub use access_log::AccessLog;
pub use leave_record::{LeaveRecord, LeaveValidationError};
pub use session::Session;
pub use staff::{Staff, StaffValidationError};

/// Domain view of everything the remote store holds
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub staff: Vec<Staff>,
    pub leaves: Vec<LeaveRecord>,
    pub logs: Vec<AccessLog>,
}
