use std::collections::{HashMap, HashSet};

use strum_macros::EnumString;
use tracing::debug;

use super::period::ReportPeriod;
use crate::model::{attendance::AttendanceRecord, employee::Employee, wage_summary::WageSummaryRow};

/// Name used for rows whose employee could not be resolved.
pub const UNKNOWN_EMPLOYEE: &str = "Unknown";

/// What to do with attendance rows that reference no fetched employee.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum OrphanPolicy {
    #[default]
    Drop,
    ReportUnknown,
}

/// Monthly wage & attendance aggregation.
#[derive(Debug, Clone, Copy, Default)]
pub struct WageAggregator {
    pub on_orphan: OrphanPolicy,
    /// Restrict counted attendance to this window. The fetch already filters by
    /// date, so this only matters for callers holding a wider snapshot.
    pub period: Option<ReportPeriod>,
}

impl WageAggregator {
    pub fn new(on_orphan: OrphanPolicy) -> Self {
        Self { on_orphan, period: None }
    }

    pub fn within(mut self, period: ReportPeriod) -> Self {
        self.period = Some(period);
        self
    }

    /// One row per employee, in input order. Orphaned attendance is appended as
    /// `Unknown` rows only under [`OrphanPolicy::ReportUnknown`].
    pub fn aggregate(
        &self,
        employees: &[Employee],
        attendance: &[AttendanceRecord],
    ) -> Vec<WageSummaryRow> {
        let known: HashSet<&str> = employees.iter().map(|e| e.employee_id.as_str()).collect();

        let mut present: HashMap<&str, u32> = HashMap::new();
        let mut orphans: Vec<&str> = Vec::new();

        for record in attendance {
            if let Some(period) = &self.period {
                if !period.contains(record.date) {
                    continue;
                }
            }

            let id = record.employee_id.as_str();
            if !known.contains(id) && !present.contains_key(id) {
                orphans.push(id);
            }

            let count = present.entry(id).or_insert(0);
            if record.status.is_present() {
                *count += 1;
            }
        }

        let mut rows: Vec<WageSummaryRow> = employees
            .iter()
            .map(|employee| {
                let present_days = present.get(employee.employee_id.as_str()).copied().unwrap_or(0);
                WageSummaryRow {
                    employee_name: employee.full_name.clone(),
                    employee_id: employee.employee_id.clone(),
                    present_days,
                    wage: wage_for(employee, present_days),
                }
            })
            .collect();

        if !orphans.is_empty() {
            debug!(orphans = orphans.len(), policy = ?self.on_orphan, "Attendance without employee");
        }

        if self.on_orphan == OrphanPolicy::ReportUnknown {
            rows.extend(orphans.into_iter().map(|id| WageSummaryRow {
                employee_name: UNKNOWN_EMPLOYEE.to_string(),
                employee_id: id.to_string(),
                present_days: present.get(id).copied().unwrap_or(0),
                wage: 0.0,
            }));
        }

        rows
    }
}

/// Fixed monthly salary if one is set, otherwise daily rate times present days.
pub fn wage_for(employee: &Employee, present_days: u32) -> f64 {
    match employee.monthly_salary {
        Some(salary) if salary != 0.0 && !salary.is_nan() => salary,
        _ => employee.daily_rate.filter(|rate| !rate.is_nan()).unwrap_or(0.0) * f64::from(present_days),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{attendance, employee};

    /// Default policy: orphans dropped, no extra date filter.
    fn aggregate(employees: &[Employee], attendance: &[AttendanceRecord]) -> Vec<WageSummaryRow> {
        WageAggregator::default().aggregate(employees, attendance)
    }

    fn with_pay(id: &str, name: &str, daily_rate: Option<f64>, monthly_salary: Option<f64>) -> Employee {
        let mut e = employee::sample(id, name);
        e.daily_rate = daily_rate;
        e.monthly_salary = monthly_salary;
        e
    }

    fn present_days(n: usize, id: &str) -> Vec<AttendanceRecord> {
        (1..=n)
            .map(|d| attendance::sample(id, "P", &format!("2024-03-{d:02}")))
            .collect()
    }

    #[test]
    fn scenario_alice() {
        let employees = vec![with_pay("E1", "Alice", Some(500.0), None)];
        let records = vec![
            attendance::sample("E1", "P", "2024-03-01"),
            attendance::sample("E1", "A", "2024-03-02"),
            attendance::sample("E1", "P", "2024-03-03"),
        ];

        let rows = aggregate(&employees, &records);

        assert_eq!(
            rows,
            vec![WageSummaryRow {
                employee_name: "Alice".into(),
                employee_id: "E1".into(),
                present_days: 2,
                wage: 1000.0,
            }]
        );
    }

    #[test]
    fn one_row_per_employee_in_input_order() {
        let employees = vec![
            employee::sample("E3", "Carol"),
            employee::sample("E1", "Alice"),
            employee::sample("E2", "Bob"),
        ];
        let records = vec![attendance::sample("E1", "P", "2024-03-01")];

        let rows = aggregate(&employees, &records);

        let ids: Vec<_> = rows.iter().map(|r| r.employee_id.as_str()).collect();
        assert_eq!(ids, ["E3", "E1", "E2"]);
        assert_eq!(rows[0].present_days, 0);
        assert_eq!(rows[2].present_days, 0);
    }

    #[test]
    fn counts_present_regardless_of_order() {
        let employees = vec![employee::sample("E1", "Alice")];
        let mut records = vec![
            attendance::sample("E1", "P", "2024-03-01"),
            attendance::sample("E1", "P", "2024-03-02"),
            attendance::sample("E1", "A", "2024-03-03"),
            attendance::sample("E1", "P", "2024-03-04"),
        ];
        assert_eq!(aggregate(&employees, &records)[0].present_days, 3);

        records.reverse();
        assert_eq!(aggregate(&employees, &records)[0].present_days, 3);
    }

    #[test]
    fn monthly_salary_takes_precedence() {
        let employees = vec![with_pay("E1", "Alice", Some(500.0), Some(15000.0))];
        let rows = aggregate(&employees, &present_days(10, "E1"));
        assert_eq!(rows[0].present_days, 10);
        assert_eq!(rows[0].wage, 15000.0);
    }

    #[test]
    fn falls_back_to_daily_rate() {
        let employees = vec![with_pay("E1", "Alice", Some(500.0), None)];
        let rows = aggregate(&employees, &present_days(12, "E1"));
        assert_eq!(rows[0].wage, 6000.0);
    }

    #[test]
    fn zero_salary_counts_as_unset() {
        let employees = vec![with_pay("E1", "Alice", Some(400.0), Some(0.0))];
        let rows = aggregate(&employees, &present_days(3, "E1"));
        assert_eq!(rows[0].wage, 1200.0);
    }

    #[test]
    fn missing_rate_and_salary_yield_zero() {
        let employees = vec![with_pay("E1", "Alice", None, None)];
        let rows = aggregate(&employees, &present_days(5, "E1"));
        assert_eq!(rows[0].present_days, 5);
        assert_eq!(rows[0].wage, 0.0);
    }

    #[test]
    fn unknown_status_is_not_present() {
        let employees = vec![employee::sample("E1", "Alice")];
        let records = vec![
            attendance::sample("E1", "L", "2024-03-01"),
            attendance::sample("E1", "P", "2024-03-02"),
        ];
        assert_eq!(aggregate(&employees, &records)[0].present_days, 1);
    }

    #[test]
    fn orphans_are_dropped_by_default() {
        let employees = vec![employee::sample("E1", "Alice")];
        let records = vec![
            attendance::sample("E1", "P", "2024-03-01"),
            attendance::sample("GHOST", "P", "2024-03-01"),
        ];

        let rows = aggregate(&employees, &records);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].present_days, 1);
    }

    #[test]
    fn orphans_reported_as_unknown_when_asked() {
        let employees = vec![employee::sample("E1", "Alice")];
        let records = vec![
            attendance::sample("G2", "A", "2024-03-01"),
            attendance::sample("G1", "P", "2024-03-01"),
            attendance::sample("G2", "P", "2024-03-02"),
        ];

        let rows = WageAggregator::new(OrphanPolicy::ReportUnknown).aggregate(&employees, &records);

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1].employee_id, "G2");
        assert_eq!(rows[1].employee_name, UNKNOWN_EMPLOYEE);
        assert_eq!(rows[1].present_days, 1);
        assert_eq!(rows[1].wage, 0.0);
        assert_eq!(rows[2].employee_id, "G1");
    }

    #[test]
    fn period_excludes_out_of_range_days() {
        let employees = vec![with_pay("E1", "Alice", Some(100.0), None)];
        let records = vec![
            attendance::sample("E1", "P", "2024-02-29"),
            attendance::sample("E1", "P", "2024-03-01"),
            attendance::sample("E1", "P", "2024-03-31"),
            attendance::sample("E1", "P", "2024-04-01"),
        ];
        let period = ReportPeriod::month(2024, 3).unwrap();

        let rows = WageAggregator::default().within(period).aggregate(&employees, &records);

        assert_eq!(rows[0].present_days, 2);
        assert_eq!(rows[0].wage, 200.0);
    }

    #[test]
    fn empty_inputs() {
        assert!(aggregate(&[], &present_days(2, "E1")).is_empty());
        assert_eq!(aggregate(&[employee::sample("E1", "Alice")], &[])[0].present_days, 0);
    }

    #[test]
    fn policy_parses_from_config_strings() {
        assert_eq!("drop".parse::<OrphanPolicy>().unwrap(), OrphanPolicy::Drop);
        assert_eq!(
            "report_unknown".parse::<OrphanPolicy>().unwrap(),
            OrphanPolicy::ReportUnknown
        );
        assert!("keep".parse::<OrphanPolicy>().is_err());
    }
}
