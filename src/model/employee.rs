use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use utoipa::ToSchema;

use crate::error::ReportError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, Display, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum EmploymentType {
    Fixed,
    Daily,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, Display, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum EmployeeStatus {
    Active,
    Inactive,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(
    example = json!({
        "employee_id": "E1",
        "full_name": "Alice",
        "mobile": "9876543210",
        "phone": null,
        "daily_rate": 500.0,
        "monthly_salary": null,
        "employment_type": "DAILY",
        "status": "ACTIVE",
        "supervisor_id": "S1",
        "aadhar": null,
        "pan": null
    })
)]
pub struct Employee {
    #[schema(example = "E1")]
    pub employee_id: String,

    #[schema(example = "Alice")]
    pub full_name: String,

    #[schema(nullable = true)]
    pub mobile: Option<String>,

    #[schema(nullable = true)]
    pub phone: Option<String>,

    #[schema(example = 500.0, nullable = true)]
    pub daily_rate: Option<f64>,

    #[schema(nullable = true)]
    pub monthly_salary: Option<f64>,

    pub employment_type: EmploymentType,

    pub status: EmployeeStatus,

    #[schema(nullable = true)]
    pub supervisor_id: Option<String>,

    #[schema(nullable = true)]
    pub aadhar: Option<String>,

    #[schema(nullable = true)]
    pub pan: Option<String>,
}

impl Employee {
    /// Contact number; the reports screen stores it as `mobile`, the roster as `phone`.
    pub fn contact(&self) -> Option<&str> {
        self.mobile.as_deref().or(self.phone.as_deref())
    }

    pub fn is_active(&self) -> bool {
        self.status == EmployeeStatus::Active
    }
}

/// Raw `employee` row as the database hands it back.
#[derive(Debug, sqlx::FromRow)]
pub struct EmployeeRow {
    pub employee_id: String,
    pub full_name: String,
    pub mobile: Option<String>,
    pub phone: Option<String>,
    pub daily_rate: Option<f64>,
    pub monthly_salary: Option<f64>,
    pub employment_type: String,
    pub status: String,
    pub supervisor_id: Option<String>,
    pub aadhar: Option<String>,
    pub pan: Option<String>,
}

impl TryFrom<EmployeeRow> for Employee {
    type Error = ReportError;

    fn try_from(row: EmployeeRow) -> Result<Self, Self::Error> {
        let employment_type = row.employment_type.parse::<EmploymentType>().map_err(|_| {
            ReportError::InvalidRow(format!(
                "employee {} has employment type {:?}",
                row.employee_id, row.employment_type
            ))
        })?;
        let status = row.status.parse::<EmployeeStatus>().map_err(|_| {
            ReportError::InvalidRow(format!(
                "employee {} has status {:?}",
                row.employee_id, row.status
            ))
        })?;

        Ok(Employee {
            employee_id: row.employee_id,
            full_name: row.full_name,
            mobile: row.mobile,
            phone: row.phone,
            daily_rate: row.daily_rate,
            monthly_salary: row.monthly_salary,
            employment_type,
            status,
            supervisor_id: row.supervisor_id,
            aadhar: row.aadhar,
            pan: row.pan,
        })
    }
}

#[cfg(test)]
pub(crate) fn sample(id: &str, name: &str) -> Employee {
    Employee {
        employee_id: id.to_string(),
        full_name: name.to_string(),
        mobile: None,
        phone: None,
        daily_rate: None,
        monthly_salary: None,
        employment_type: EmploymentType::Daily,
        status: EmployeeStatus::Active,
        supervisor_id: None,
        aadhar: None,
        pan: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(employment_type: &str, status: &str) -> EmployeeRow {
        EmployeeRow {
            employee_id: "E1".into(),
            full_name: "Alice".into(),
            mobile: None,
            phone: Some("555".into()),
            daily_rate: Some(500.0),
            monthly_salary: None,
            employment_type: employment_type.into(),
            status: status.into(),
            supervisor_id: None,
            aadhar: None,
            pan: None,
        }
    }

    #[test]
    fn converts_valid_row() {
        let employee = Employee::try_from(row("FIXED", "INACTIVE")).unwrap();
        assert_eq!(employee.employment_type, EmploymentType::Fixed);
        assert!(!employee.is_active());
        assert_eq!(employee.contact(), Some("555"));
    }

    #[test]
    fn rejects_unknown_employment_type() {
        let err = Employee::try_from(row("HOURLY", "ACTIVE")).unwrap_err();
        assert!(matches!(err, ReportError::InvalidRow(_)));
    }

    #[test]
    fn mobile_wins_over_phone() {
        let mut employee = sample("E1", "Alice");
        employee.mobile = Some("111".into());
        employee.phone = Some("222".into());
        assert_eq!(employee.contact(), Some("111"));
    }
}
