//! Domain-level command and query types.
//!
//! Services take these instead of the public DTOs from `shared`; the REST
//! layer parses wire strings into dates while building them.

pub mod leave {
    use chrono::NaiveDate;
    use shared::HalfDayPeriod;

    /// A picked span before validation; `end` defaults to `start`
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct RangeInput {
        pub start: NaiveDate,
        pub end: Option<NaiveDate>,
    }

    #[derive(Debug, Clone)]
    pub struct CreateLeaveCommand {
        pub staff_id: String,
        /// Overrides the roster position when present
        pub position: Option<String>,
        pub leave_type: String,
        pub date_ranges: Vec<RangeInput>,
        pub filed_date: Option<NaiveDate>,
        pub is_half_day: bool,
        pub half_day_period: Option<HalfDayPeriod>,
        pub note: String,
    }

    /// Full replacement of a record's mutable fields
    #[derive(Debug, Clone)]
    pub struct UpdateLeaveCommand {
        pub position: String,
        pub leave_type: String,
        pub dates: Vec<NaiveDate>,
        pub filed_date: Option<NaiveDate>,
        pub is_half_day: bool,
        pub half_day_period: Option<HalfDayPeriod>,
        pub note: String,
    }

    #[derive(Debug, Clone, Default)]
    pub struct HistoryQuery {
        /// Staff name picked in the admin filter; ignored for staff users
        pub staff_name: Option<String>,
        pub year: i32,
        /// 1..=12, or `None` for the whole year
        pub month: Option<u32>,
    }
}

pub mod staff {
    #[derive(Debug, Clone)]
    pub struct CreateStaffCommand {
        pub name: String,
        pub position: Option<String>,
    }
}

pub mod auth {
    #[derive(Debug, Clone)]
    pub struct ChangePasswordCommand {
        pub staff_id: String,
        pub new_password: String,
        pub confirm_password: String,
    }
}
