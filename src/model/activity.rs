use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

use super::attendance::AttendanceStatus;

/// Attendance row joined to the owning employee's name, if the roster has one.
#[derive(Debug, Clone)]
pub struct AttendanceWithName {
    pub attendance_id: String,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    pub full_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ActivityRecord {
    #[schema(example = "a1b2")]
    pub id: String,

    #[schema(example = "2024-03-01", value_type = String, format = "date")]
    pub date: NaiveDate,

    #[schema(example = "Alice")]
    pub employee_name: String,

    #[schema(example = "Present")]
    pub status: String,
}
