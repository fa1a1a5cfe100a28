use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Attendance status code as recorded by the marking screens.
///
/// Only `P` counts as present. Any other code is kept verbatim so exports can
/// echo it back, but it is treated as absent everywhere else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AttendanceStatus {
    Present,
    Absent,
    Other(String),
}

impl AttendanceStatus {
    pub fn code(&self) -> &str {
        match self {
            AttendanceStatus::Present => "P",
            AttendanceStatus::Absent => "A",
            AttendanceStatus::Other(code) => code,
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, AttendanceStatus::Present)
    }

    /// Human label shown in the activity feed.
    pub fn label(&self) -> &'static str {
        if self.is_present() { "Present" } else { "Absent" }
    }
}

impl From<String> for AttendanceStatus {
    fn from(code: String) -> Self {
        match code.as_str() {
            "P" => AttendanceStatus::Present,
            "A" => AttendanceStatus::Absent,
            _ => AttendanceStatus::Other(code),
        }
    }
}

impl From<&str> for AttendanceStatus {
    fn from(code: &str) -> Self {
        AttendanceStatus::from(code.to_string())
    }
}

impl From<AttendanceStatus> for String {
    fn from(status: AttendanceStatus) -> Self {
        status.code().to_string()
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct AttendanceRecord {
    pub attendance_id: String,
    pub employee_id: String,
    pub date: NaiveDate,
    #[sqlx(try_from = "String")]
    pub status: AttendanceStatus,
    pub company_id: String,
    pub marked_by_owner: Option<String>,
    pub marked_by_supervisor: Option<String>,
}

impl AttendanceRecord {
    /// Whoever recorded the row: the owner if set, otherwise the supervisor.
    pub fn marked_by(&self) -> Option<&str> {
        self.marked_by_owner
            .as_deref()
            .filter(|id| !id.is_empty())
            .or_else(|| self.marked_by_supervisor.as_deref().filter(|id| !id.is_empty()))
    }
}

#[cfg(test)]
pub(crate) fn sample(employee_id: &str, status: &str, date: &str) -> AttendanceRecord {
    AttendanceRecord {
        attendance_id: format!("{employee_id}-{date}"),
        employee_id: employee_id.to_string(),
        date: date.parse().unwrap(),
        status: AttendanceStatus::from(status),
        company_id: "C1".to_string(),
        marked_by_owner: None,
        marked_by_supervisor: Some("S1".to_string()),
    }
}
