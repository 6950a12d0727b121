use serde::{Deserialize, Serialize};

/// Leave categories recognised by the school's leave regulations.
///
/// Order matters: it is the order of the dashboard tally and the history
/// statistics block.
pub const LEAVE_TYPES: [&str; 11] = [
    "การลาป่วย",
    "การลาคลอดบุตร",
    "การลาไปช่วยเหลือภริยาที่คลอดบุตร",
    "การลากิจส่วนตัว",
    "การลาพักผ่อน",
    "การลาอุปสมบทหรือประกอบพิธีฮัจย์",
    "การลาเข้ารับการตรวจเลือกหรือเตรียมพล",
    "การลาไปศึกษา ฝึกอบรม ปฏิบัติการวิจัย หรือดูงาน",
    "การลาไปปฏิบัติงานในองค์การระหว่างประเทศ",
    "การลาติดตามคู่สมรส",
    "การลาไปฟื้นฟูสมรรถภาพด้านอาชีพ",
];

pub const SICK_LEAVE: &str = "การลาป่วย";
pub const PERSONAL_LEAVE: &str = "การลากิจส่วนตัว";
pub const VACATION_LEAVE: &str = "การลาพักผ่อน";

/// Staff positions offered by the personnel and leave entry forms
pub const POSITIONS: [&str; 9] = [
    "ผู้อำนวยการ",
    "รองผู้อำนวยการ",
    "ครูชำนาญการพิเศษ",
    "ครูชำนาญการ",
    "ครู",
    "ครูผู้ช่วย",
    "ลูกจ้างประจำ",
    "ครูธุรการ",
    "ครูอัตราจ้าง",
];

pub const DEFAULT_POSITION: &str = "ครู";

/// Full Thai month names, January first
pub const THAI_MONTHS: [&str; 12] = [
    "มกราคม",
    "กุมภาพันธ์",
    "มีนาคม",
    "เมษายน",
    "พฤษภาคม",
    "มิถุนายน",
    "กรกฎาคม",
    "สิงหาคม",
    "กันยายน",
    "ตุลาคม",
    "พฤศจิกายน",
    "ธันวาคม",
];

/// Abbreviated month labels in fiscal order, October first
pub const FISCAL_MONTH_LABELS: [&str; 12] = [
    "ต.ค.", "พ.ย.", "ธ.ค.", "ม.ค.", "ก.พ.", "มี.ค.", "เม.ย.", "พ.ค.", "มิ.ย.", "ก.ค.", "ส.ค.", "ก.ย.",
];

/// Offset between the Gregorian and the Thai Buddhist-era year
pub const BUDDHIST_ERA_OFFSET: i32 = 543;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Admin,
    User,
}

/// The authenticated user. Never carries a password.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub username: String,
    pub role: Role,
    pub full_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Staff {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub position: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HalfDayPeriod {
    Morning,
    Afternoon,
}

/// Leave record as stored in the spreadsheet
///
/// Dates are ISO timestamps (`2025-01-10T00:00:00.000Z`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRecord {
    pub id: String,
    pub staff_id: String,
    pub staff_name: String,
    #[serde(default)]
    pub position: String,
    pub leave_type: String,
    #[serde(default)]
    pub dates: Vec<String>,
    #[serde(default)]
    pub filed_date: String,
    #[serde(default)]
    pub total_days: f64,
    #[serde(default)]
    pub is_half_day: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub half_day_period: Option<HalfDayPeriod>,
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessLog {
    pub id: String,
    pub username: String,
    pub full_name: String,
    pub role: Role,
    pub timestamp: String,
}

/// Everything the remote store returns from its single bulk read
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreSnapshot {
    #[serde(default)]
    pub staff: Vec<Staff>,
    #[serde(default)]
    pub leaves: Vec<LeaveRecord>,
    #[serde(default)]
    pub logs: Vec<AccessLog>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangePasswordRequest {
    pub staff_id: String,
    pub new_password: String,
    pub confirm_password: String,
}

/// Generic acknowledgement for write operations that return no entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success_message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateStaffRequest {
    pub name: String,
    pub position: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffResponse {
    pub staff: Staff,
    pub success_message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffListResponse {
    pub staff: Vec<Staff>,
}

/// A start/end pair picked in the leave form. `end` defaults to `start`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateRangeInput {
    pub start: String,
    pub end: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateLeaveRequest {
    pub staff_id: String,
    pub position: Option<String>,
    pub leave_type: String,
    pub date_ranges: Vec<DateRangeInput>,
    /// Date the paper request was signed (YYYY-MM-DD), today when omitted
    pub filed_date: Option<String>,
    #[serde(default)]
    pub is_half_day: bool,
    pub half_day_period: Option<HalfDayPeriod>,
    #[serde(default)]
    pub note: String,
}

/// Full replacement of a record's mutable fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateLeaveRequest {
    pub position: String,
    pub leave_type: String,
    pub dates: Vec<String>,
    pub filed_date: String,
    #[serde(default)]
    pub is_half_day: bool,
    pub half_day_period: Option<HalfDayPeriod>,
    #[serde(default)]
    pub note: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveRecordResponse {
    pub record: LeaveRecord,
    pub success_message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpandDatesRequest {
    pub date_ranges: Vec<DateRangeInput>,
    #[serde(default)]
    pub is_half_day: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpandDatesResponse {
    /// Calendar days as YYYY-MM-DD, ascending
    pub dates: Vec<String>,
    pub total_days: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeTally {
    pub leave_type: String,
    pub times: u32,
    pub days: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryStats {
    pub total_times: u32,
    pub total_days: f64,
    pub by_type: Vec<TypeTally>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryResponse {
    pub records: Vec<LeaveRecord>,
    pub stats: HistoryStats,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyBucket {
    pub label: String,
    pub days: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeTotal {
    pub leave_type: String,
    pub days: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_records: usize,
    pub total_days: f64,
    pub staff_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub fiscal_year: i32,
    pub monthly: Vec<MonthlyBucket>,
    /// Raw tally, zero totals included
    pub by_type: Vec<TypeTotal>,
    /// Pie-chart share, zero totals omitted
    pub share: Vec<TypeTotal>,
    pub summary: DashboardSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportTitle {
    /// e.g. "ประจำเดือน มกราคม ปี 2568"
    pub heading: String,
    pub buddhist_year: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportListResponse {
    pub title: ReportTitle,
    pub records: Vec<LeaveRecord>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub times: u32,
    pub days: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatrixTotals {
    pub total_times: u32,
    pub total_days: f64,
    pub sick: CategoryCount,
    pub personal: CategoryCount,
    pub vacation: CategoryCount,
    pub maternity: CategoryCount,
    pub other: CategoryCount,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixRow {
    pub staff_name: String,
    pub position: String,
    pub in_roster: bool,
    pub totals: MatrixTotals,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixReportResponse {
    pub title: ReportTitle,
    pub rows: Vec<MatrixRow>,
    pub grand_total: MatrixTotals,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessLogListResponse {
    pub logs: Vec<AccessLog>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leave_record_reads_store_json() {
        let json = r#"{
            "id": "leave-1736467200000",
            "staffId": "staff-1",
            "staffName": "นายสมชาย ใจดี",
            "position": "ครู",
            "leaveType": "การลาป่วย",
            "dates": ["2025-01-10T00:00:00.000Z"],
            "filedDate": "2025-01-09",
            "totalDays": 0.5,
            "isHalfDay": true,
            "halfDayPeriod": "morning",
            "note": "",
            "createdAt": "2025-01-09T03:00:00.000Z"
        }"#;

        let record: LeaveRecord = serde_json::from_str(json).expect("Failed to parse record");
        assert_eq!(record.staff_name, "นายสมชาย ใจดี");
        assert_eq!(record.half_day_period, Some(HalfDayPeriod::Morning));
        assert_eq!(record.total_days, 0.5);
    }

    #[test]
    fn test_snapshot_tolerates_missing_sections() {
        let snapshot: StoreSnapshot = serde_json::from_str(r#"{"staff": []}"#).unwrap();
        assert!(snapshot.leaves.is_empty());
        assert!(snapshot.logs.is_empty());
    }

    #[test]
    fn test_role_wire_format() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"ADMIN\"");
        let user: User =
            serde_json::from_str(r#"{"username":"a","role":"USER","fullName":"A"}"#).unwrap();
        assert_eq!(user.role, Role::User);
    }
}
