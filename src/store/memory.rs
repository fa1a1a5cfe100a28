use std::collections::HashMap;

use super::{EmployeeScope, ReportStore};
use crate::error::ReportError;
use crate::model::{attendance::AttendanceRecord, employee::Employee};
use crate::report::period::ReportPeriod;

/// In-memory snapshot store for handler tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub employees: Vec<(String, Employee)>,
    pub attendance: Vec<AttendanceRecord>,
    pub supervisors: HashMap<String, String>,
    pub fail: bool,
}

impl MemoryStore {
    pub fn with_employee(mut self, company_id: &str, employee: Employee) -> Self {
        self.employees.push((company_id.to_string(), employee));
        self
    }

    pub fn with_attendance(mut self, record: AttendanceRecord) -> Self {
        self.attendance.push(record);
        self
    }

    pub fn with_supervisor(mut self, id: &str, name: &str) -> Self {
        self.supervisors.insert(id.to_string(), name.to_string());
        self
    }

    pub fn failing() -> Self {
        Self { fail: true, ..Self::default() }
    }

    fn check(&self) -> Result<(), ReportError> {
        if self.fail {
            Err(ReportError::from(sqlx::Error::PoolTimedOut))
        } else {
            Ok(())
        }
    }
}

impl ReportStore for MemoryStore {
    async fn employees(&self, scope: EmployeeScope<'_>) -> Result<Vec<Employee>, ReportError> {
        self.check()?;
        Ok(self
            .employees
            .iter()
            .filter(|(company, _)| company == scope.company_id)
            .filter(|(_, e)| match scope.supervisor_id {
                Some(id) => e.supervisor_id.as_deref() == Some(id),
                None => true,
            })
            .map(|(_, e)| e.clone())
            .collect())
    }

    async fn attendance(
        &self,
        company_id: &str,
        period: Option<ReportPeriod>,
    ) -> Result<Vec<AttendanceRecord>, ReportError> {
        self.check()?;
        Ok(self
            .attendance
            .iter()
            .filter(|a| a.company_id == company_id)
            .filter(|a| period.is_none_or(|p| p.contains(a.date)))
            .cloned()
            .collect())
    }

    async fn recent_activity(
        &self,
        company_id: &str,
        supervisor_id: &str,
        limit: u32,
    ) -> Result<Vec<AttendanceRecord>, ReportError> {
        self.check()?;
        let mut marked: Vec<AttendanceRecord> = self
            .attendance
            .iter()
            .filter(|a| a.company_id == company_id)
            .filter(|a| a.marked_by_supervisor.as_deref() == Some(supervisor_id))
            .cloned()
            .collect();
        marked.sort_by(|a, b| b.date.cmp(&a.date));
        marked.truncate(limit as usize);

        Ok(marked)
    }

    async fn supervisor_name(&self, supervisor_id: &str) -> Result<Option<String>, ReportError> {
        self.check()?;
        Ok(self.supervisors.get(supervisor_id).cloned())
    }
}
