use chrono::NaiveDate;

use crate::domain::calendar::{InvalidDateError, LocalCalendar};
use crate::domain::commands::leave::{CreateLeaveCommand, RangeInput, UpdateLeaveCommand};
use crate::domain::models::LeaveValidationError;
use shared::{CreateLeaveRequest, DateRangeInput, UpdateLeaveRequest};

/// Parses the leave form's wire strings into calendar days
pub struct LeaveRequestMapper;

impl LeaveRequestMapper {
    fn optional_day(raw: Option<&str>, calendar: &LocalCalendar) -> Result<Option<NaiveDate>, InvalidDateError> {
        match raw.map(str::trim).filter(|s| !s.is_empty()) {
            Some(raw) => calendar.parse_day(raw).map(Some),
            None => Ok(None),
        }
    }

    pub fn to_ranges(inputs: &[DateRangeInput], calendar: &LocalCalendar) -> Result<Vec<RangeInput>, InvalidDateError> {
        inputs
            .iter()
            .map(|input| -> Result<RangeInput, InvalidDateError> {
                Ok(RangeInput {
                    start: calendar.parse_day(input.start.trim())?,
                    end: Self::optional_day(input.end.as_deref(), calendar)?,
                })
            })
            .collect()
    }

    /// A missing filed date means the leave is filed today
    pub fn to_create_command(
        request: CreateLeaveRequest,
        calendar: &LocalCalendar,
    ) -> Result<CreateLeaveCommand, LeaveValidationError> {
        let date_ranges = Self::to_ranges(&request.date_ranges, calendar)?;
        let filed_date = Self::optional_day(request.filed_date.as_deref(), calendar)?
            .unwrap_or_else(|| calendar.today());

        Ok(CreateLeaveCommand {
            staff_id: request.staff_id,
            position: request.position,
            leave_type: request.leave_type,
            date_ranges,
            filed_date: Some(filed_date),
            is_half_day: request.is_half_day,
            half_day_period: request.half_day_period,
            note: request.note,
        })
    }

    pub fn to_update_command(
        request: UpdateLeaveRequest,
        calendar: &LocalCalendar,
    ) -> Result<UpdateLeaveCommand, LeaveValidationError> {
        let dates = request
            .dates
            .iter()
            .map(|raw| calendar.parse_day(raw.trim()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(UpdateLeaveCommand {
            position: request.position,
            leave_type: request.leave_type,
            dates,
            filed_date: Self::optional_day(Some(&request.filed_date), calendar)?,
            is_half_day: request.is_half_day,
            half_day_period: request.half_day_period,
            note: request.note,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn create_request(filed_date: Option<&str>) -> CreateLeaveRequest {
        CreateLeaveRequest {
            staff_id: "staff-1".to_string(),
            position: None,
            leave_type: "การลาป่วย".to_string(),
            date_ranges: vec![
                DateRangeInput {
                    start: "2025-01-10".to_string(),
                    end: Some("2025-01-12".to_string()),
                },
                DateRangeInput {
                    start: "2025-01-20T00:00:00.000Z".to_string(),
                    end: Some("".to_string()),
                },
            ],
            filed_date: filed_date.map(str::to_string),
            is_half_day: false,
            half_day_period: None,
            note: String::new(),
        }
    }

    #[test]
    fn test_create_request_parsing() {
        let calendar = LocalCalendar::default();
        let command = LeaveRequestMapper::to_create_command(create_request(Some("2025-01-09")), &calendar).unwrap();

        assert_eq!(
            command.date_ranges,
            vec![
                RangeInput { start: day(2025, 1, 10), end: Some(day(2025, 1, 12)) },
                RangeInput { start: day(2025, 1, 20), end: None },
            ]
        );
        assert_eq!(command.filed_date, Some(day(2025, 1, 9)));
    }

    #[test]
    fn test_missing_filed_date_defaults_to_today() {
        let calendar = LocalCalendar::default();
        let command = LeaveRequestMapper::to_create_command(create_request(None), &calendar).unwrap();
        assert_eq!(command.filed_date, Some(calendar.today()));
    }

    #[test]
    fn test_bad_date_is_a_validation_error() {
        let calendar = LocalCalendar::default();
        let mut request = create_request(None);
        request.date_ranges[0].start = "10/01/2025".to_string();
        assert!(matches!(
            LeaveRequestMapper::to_create_command(request, &calendar),
            Err(LeaveValidationError::InvalidDate(_))
        ));
    }

    #[test]
    fn test_update_request_blank_filed_date() {
        let calendar = LocalCalendar::default();
        let request = UpdateLeaveRequest {
            position: "ครู".to_string(),
            leave_type: "การลาป่วย".to_string(),
            dates: vec!["2025-01-11".to_string(), "2025-01-10".to_string()],
            filed_date: " ".to_string(),
            is_half_day: false,
            half_day_period: None,
            note: String::new(),
        };
        let command = LeaveRequestMapper::to_update_command(request, &calendar).unwrap();
        assert_eq!(command.dates, vec![day(2025, 1, 11), day(2025, 1, 10)]);
        assert_eq!(command.filed_date, None);
    }
}
