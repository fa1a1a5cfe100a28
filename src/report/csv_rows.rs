use std::collections::HashMap;

use csv::WriterBuilder;

use super::aggregate::{OrphanPolicy, UNKNOWN_EMPLOYEE};
use crate::error::ReportError;
use crate::model::{attendance::AttendanceRecord, employee::Employee};

pub const CSV_HEADER: [&str; 7] = [
    "Employee Name",
    "Employee ID",
    "Mobile",
    "Status",
    "Date",
    "Marked By",
    "Company ID",
];

/// One delimited line per attendance row whose employee is known, in
/// attendance order. Fields are quoted only when they need it.
pub fn build_csv_rows(
    employees: &[Employee],
    attendance: &[AttendanceRecord],
    on_orphan: OrphanPolicy,
) -> Result<Vec<String>, ReportError> {
    let by_id: HashMap<&str, &Employee> = employees
        .iter()
        .map(|e| (e.employee_id.as_str(), e))
        .collect();

    let mut rows = Vec::with_capacity(attendance.len());
    for a in attendance {
        let (name, contact) = match by_id.get(a.employee_id.as_str()) {
            Some(employee) => (employee.full_name.as_str(), employee.contact().unwrap_or("")),
            None if on_orphan == OrphanPolicy::ReportUnknown => (UNKNOWN_EMPLOYEE, ""),
            None => continue,
        };

        let date = a.date.format("%Y-%m-%d").to_string();
        rows.push(csv_line(&[
            name,
            a.employee_id.as_str(),
            contact,
            a.status.code(),
            date.as_str(),
            a.marked_by().unwrap_or(""),
            a.company_id.as_str(),
        ])?);
    }

    Ok(rows)
}

/// Header line followed by `rows`, newline separated.
pub fn render_csv(rows: &[String]) -> Result<String, ReportError> {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(csv_line(&CSV_HEADER)?);
    lines.extend(rows.iter().cloned());
    Ok(lines.join("\n"))
}

pub(crate) fn csv_line(fields: &[&str]) -> Result<String, ReportError> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(Vec::new());
    writer
        .write_record(fields)
        .map_err(|e| ReportError::ExportFailed(e.to_string()))?;
    let bytes = writer
        .into_inner()
        .map_err(|e| ReportError::ExportFailed(e.to_string()))?;
    let line = String::from_utf8(bytes).map_err(|e| ReportError::ExportFailed(e.to_string()))?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
