//! Fetch side of the report pipeline: flat employee and attendance snapshots
//! scoped to one company.

pub mod mysql;

#[cfg(test)]
pub mod memory;

use crate::error::ReportError;
use crate::model::{attendance::AttendanceRecord, employee::Employee};
use crate::report::period::ReportPeriod;

pub use mysql::MySqlStore;

/// Which employees to load.
#[derive(Debug, Clone, Copy)]
pub struct EmployeeScope<'a> {
    pub company_id: &'a str,
    pub supervisor_id: Option<&'a str>,
}

impl<'a> EmployeeScope<'a> {
    pub fn company(company_id: &'a str) -> Self {
        Self { company_id, supervisor_id: None }
    }

    pub fn supervised_by(company_id: &'a str, supervisor_id: &'a str) -> Self {
        Self { company_id, supervisor_id: Some(supervisor_id) }
    }
}

#[allow(async_fn_in_trait)]
pub trait ReportStore: 'static {
    async fn employees(&self, scope: EmployeeScope<'_>) -> Result<Vec<Employee>, ReportError>;

    /// Attendance for the company, limited to `period` when given.
    async fn attendance(
        &self,
        company_id: &str,
        period: Option<ReportPeriod>,
    ) -> Result<Vec<AttendanceRecord>, ReportError>;

    /// At most `limit` rows marked by `supervisor_id`, newest first.
    async fn recent_activity(
        &self,
        company_id: &str,
        supervisor_id: &str,
        limit: u32,
    ) -> Result<Vec<AttendanceRecord>, ReportError>;

    async fn supervisor_name(&self, supervisor_id: &str) -> Result<Option<String>, ReportError>;
}
