use std::collections::HashMap;

use serde::Serialize;
use utoipa::ToSchema;

use super::aggregate::UNKNOWN_EMPLOYEE;
use crate::model::{
    activity::{ActivityRecord, AttendanceWithName},
    attendance::AttendanceRecord,
    employee::Employee,
};

/// Map recent attendance rows to feed entries, keeping input order.
pub fn join_activity(attendance: &[AttendanceWithName]) -> Vec<ActivityRecord> {
    attendance
        .iter()
        .map(|row| ActivityRecord {
            id: row.attendance_id.clone(),
            date: row.date,
            employee_name: row
                .full_name
                .clone()
                .unwrap_or_else(|| UNKNOWN_EMPLOYEE.to_string()),
            status: row.status.label().to_string(),
        })
        .collect()
}

/// employee_id -> full_name
pub fn employee_lookup(employees: &[Employee]) -> HashMap<&str, &str> {
    employees
        .iter()
        .map(|e| (e.employee_id.as_str(), e.full_name.as_str()))
        .collect()
}

/// Attach names to plain attendance rows using a lookup built from the roster.
pub fn with_names(
    attendance: &[AttendanceRecord],
    lookup: &HashMap<&str, &str>,
) -> Vec<AttendanceWithName> {
    attendance
        .iter()
        .map(|a| AttendanceWithName {
            attendance_id: a.attendance_id.clone(),
            date: a.date,
            status: a.status.clone(),
            full_name: lookup.get(a.employee_id.as_str()).map(|name| name.to_string()),
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct SupervisorStats {
    #[schema(example = 12)]
    pub total_assigned: usize,
    #[schema(example = 10)]
    pub active_employees: usize,
    #[schema(example = 20)]
    pub recent_attendance: usize,
}

impl SupervisorStats {
    pub fn compute(employees: &[Employee], recent: &[ActivityRecord]) -> Self {
        Self {
            total_assigned: employees.len(),
            active_employees: employees.iter().filter(|e| e.is_active()).count(),
            recent_attendance: recent.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{attendance, attendance::AttendanceStatus, employee, employee::EmployeeStatus};

    fn row(id: &str, status: &str, name: Option<&str>) -> AttendanceWithName {
        AttendanceWithName {
            attendance_id: id.to_string(),
            date: "2024-03-05".parse().unwrap(),
            status: AttendanceStatus::from(status),
            full_name: name.map(str::to_string),
        }
    }

    #[test]
    fn labels_present_and_everything_else_absent() {
        let feed = join_activity(&[
            row("1", "P", Some("Alice")),
            row("2", "A", Some("Bob")),
            row("3", "X", Some("Carol")),
        ]);
        let labels: Vec<_> = feed.iter().map(|a| a.status.as_str()).collect();
        assert_eq!(labels, ["Present", "Absent", "Absent"]);
    }

    #[test]
    fn missing_name_becomes_unknown_and_order_is_kept() {
        let feed = join_activity(&[row("b", "P", None), row("a", "P", Some("Alice"))]);
        assert_eq!(feed[0].id, "b");
        assert_eq!(feed[0].employee_name, "Unknown");
        assert_eq!(feed[1].employee_name, "Alice");
    }

    #[test]
    fn lookup_joins_roster_names() {
        let roster = vec![employee::sample("E1", "Alice")];
        let lookup = employee_lookup(&roster);
        let joined = with_names(
            &[
                attendance::sample("E1", "P", "2024-03-01"),
                attendance::sample("E9", "A", "2024-03-01"),
            ],
            &lookup,
        );
        assert_eq!(joined[0].full_name.as_deref(), Some("Alice"));
        assert_eq!(joined[1].full_name, None);
    }

    #[test]
    fn stats_count_active_roster() {
        let mut inactive = employee::sample("E2", "Bob");
        inactive.status = EmployeeStatus::Inactive;
        let roster = vec![employee::sample("E1", "Alice"), inactive];
        let feed = join_activity(&[row("1", "P", Some("Alice"))]);

        let stats = SupervisorStats::compute(&roster, &feed);

        assert_eq!(
            stats,
            SupervisorStats { total_assigned: 2, active_employees: 1, recent_attendance: 1 }
        );
    }
}
