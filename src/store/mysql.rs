use sqlx::MySqlPool;
use tracing::{debug, error};

use super::{EmployeeScope, ReportStore};
use crate::error::ReportError;
use crate::model::{
    attendance::AttendanceRecord,
    employee::{Employee, EmployeeRow},
};
use crate::report::period::ReportPeriod;

const EMPLOYEE_COLUMNS: &str = "employee_id, full_name, mobile, phone, daily_rate, monthly_salary, \
     employment_type, status, supervisor_id, aadhar, pan";

const ATTENDANCE_COLUMNS: &str =
    "attendance_id, employee_id, date, status, company_id, marked_by_owner, marked_by_supervisor";

#[derive(Clone)]
pub struct MySqlStore {
    pool: MySqlPool,
}

impl MySqlStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

impl ReportStore for MySqlStore {
    async fn employees(&self, scope: EmployeeScope<'_>) -> Result<Vec<Employee>, ReportError> {
        let mut sql = format!("SELECT {EMPLOYEE_COLUMNS} FROM employee WHERE company_id = ?");
        if scope.supervisor_id.is_some() {
            sql.push_str(" AND supervisor_id = ?");
        }
        debug!(sql = %sql, company_id = scope.company_id, "Fetching employees");

        let mut query = sqlx::query_as::<_, EmployeeRow>(&sql).bind(scope.company_id);
        if let Some(supervisor_id) = scope.supervisor_id {
            query = query.bind(supervisor_id);
        }

        let rows = query.fetch_all(&self.pool).await.map_err(|e| {
            error!(error = %e, company_id = scope.company_id, "Employee fetch failed");
            ReportError::from(e)
        })?;

        rows.into_iter().map(Employee::try_from).collect()
    }

    async fn attendance(
        &self,
        company_id: &str,
        period: Option<ReportPeriod>,
    ) -> Result<Vec<AttendanceRecord>, ReportError> {
        let mut sql = format!("SELECT {ATTENDANCE_COLUMNS} FROM attendance WHERE company_id = ?");
        if period.is_some() {
            sql.push_str(" AND date >= ? AND date <= ?");
        }
        debug!(sql = %sql, company_id, ?period, "Fetching attendance");

        let mut query = sqlx::query_as::<_, AttendanceRecord>(&sql).bind(company_id);
        if let Some(period) = period {
            let (start, end) = period.bounds();
            query = query.bind(start).bind(end);
        }

        query.fetch_all(&self.pool).await.map_err(|e| {
            error!(error = %e, company_id, "Attendance fetch failed");
            ReportError::from(e)
        })
    }

    async fn recent_activity(
        &self,
        company_id: &str,
        supervisor_id: &str,
        limit: u32,
    ) -> Result<Vec<AttendanceRecord>, ReportError> {
        let sql = format!(
            "SELECT {ATTENDANCE_COLUMNS} FROM attendance \
             WHERE company_id = ? AND marked_by_supervisor = ? \
             ORDER BY date DESC LIMIT ?"
        );
        debug!(sql = %sql, company_id, supervisor_id, limit, "Fetching recent activity");

        sqlx::query_as::<_, AttendanceRecord>(&sql)
            .bind(company_id)
            .bind(supervisor_id)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, company_id, supervisor_id, "Activity fetch failed");
                ReportError::from(e)
            })
    }

    async fn supervisor_name(&self, supervisor_id: &str) -> Result<Option<String>, ReportError> {
        sqlx::query_scalar::<_, String>(
            "SELECT full_name FROM supervisor WHERE supervisor_id = ? LIMIT 1",
        )
        .bind(supervisor_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, supervisor_id, "Error fetching supervisor");
            ReportError::from(e)
        })
    }
}
