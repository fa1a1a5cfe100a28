use chrono::NaiveDate;
use serde::Deserialize;
use strum_macros::{AsRefStr, EnumString};
use utoipa::ToSchema;

use crate::model::{
    activity::ActivityRecord, employee::Employee, wage_summary::WageSummaryRow,
};

pub const WAGE_HEADER: [&str; 4] = ["Employee Name", "Employee ID", "Present Days", "Wage"];
pub const ACTIVITY_HEADER: [&str; 3] = ["Date", "Employee", "Status"];
pub const ROSTER_HEADER: [&str; 6] = ["Name", "Phone", "Type", "Status", "Aadhar", "PAN"];

#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
}

impl Cell {
    pub fn text(&self) -> String {
        match self {
            Cell::Text(s) => s.clone(),
            Cell::Number(n) => n.to_string(),
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::Text(s)
    }
}

impl From<f64> for Cell {
    fn from(n: f64) -> Self {
        Cell::Number(n)
    }
}

/// Title line, fixed column header and body, ready for any renderer.
#[derive(Debug, Clone)]
pub struct ReportTable {
    pub title: String,
    pub sheet: &'static str,
    pub header: Vec<&'static str>,
    pub rows: Vec<Vec<Cell>>,
}

impl ReportTable {
    pub fn wage_summary(title: String, rows: &[WageSummaryRow]) -> Self {
        Self {
            title,
            sheet: "Wage Summary",
            header: WAGE_HEADER.to_vec(),
            rows: rows
                .iter()
                .map(|r| {
                    vec![
                        Cell::from(r.employee_name.as_str()),
                        Cell::from(r.employee_id.as_str()),
                        Cell::from(f64::from(r.present_days)),
                        Cell::from(r.wage),
                    ]
                })
                .collect(),
        }
    }

    pub fn activity(rows: &[ActivityRecord]) -> Self {
        Self {
            title: "Attendance History".to_string(),
            sheet: "Attendance",
            header: ACTIVITY_HEADER.to_vec(),
            rows: rows
                .iter()
                .map(|a| {
                    vec![
                        Cell::from(display_date(a.date)),
                        Cell::from(a.employee_name.as_str()),
                        Cell::from(a.status.as_str()),
                    ]
                })
                .collect(),
        }
    }

    pub fn roster(employees: &[Employee]) -> Self {
        Self {
            title: "Assigned Employees".to_string(),
            sheet: "Employees",
            header: ROSTER_HEADER.to_vec(),
            rows: employees
                .iter()
                .map(|e| {
                    vec![
                        Cell::from(e.full_name.as_str()),
                        Cell::from(e.contact().unwrap_or("")),
                        Cell::from(e.employment_type.to_string()),
                        Cell::from(e.status.to_string()),
                        Cell::from(e.aadhar.as_deref().unwrap_or("")),
                        Cell::from(e.pan.as_deref().unwrap_or("")),
                    ]
                })
                .collect(),
        }
    }
}

/// Day-first date as shown on the activity screen.
pub fn display_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, EnumString, AsRefStr, ToSchema)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Pdf,
    Xlsx,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &str {
        self.as_ref()
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "application/pdf",
            ExportFormat::Xlsx => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
            ExportFormat::Json => "application/json",
        }
    }
}

/// `wage-summary-YYYY-MM.<ext>`
pub fn wage_summary_file_name(slug: &str, format: ExportFormat) -> String {
    format!("wage-summary-{slug}.{}", format.extension())
}

/// `all-data-YYYY-MM-DD.csv`
pub fn all_data_file_name(today: NaiveDate) -> String {
    format!("all-data-{}.csv", today.format("%Y-%m-%d"))
}

/// `attendance_history.<ext>`
pub fn activity_file_name(format: ExportFormat) -> String {
    format!("attendance_history.{}", format.extension())
}

pub const ROSTER_FILE_NAME: &str = "assigned_employees.xlsx";
