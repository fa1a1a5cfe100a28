use chrono::{Datelike, Months, NaiveDate};

use crate::error::ReportError;

/// Inclusive calendar-month window a wage report covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportPeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl ReportPeriod {
    pub fn month(year: i32, month: u32) -> Result<Self, ReportError> {
        let start = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
            ReportError::InvalidPeriod(format!("{year}-{month:02} is not a calendar month"))
        })?;
        let end = start
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .ok_or_else(|| ReportError::InvalidPeriod(format!("{year}-{month:02} is out of range")))?;

        Ok(Self { start, end })
    }

    /// The month containing `day`.
    pub fn containing(day: NaiveDate) -> Result<Self, ReportError> {
        Self::month(day.year(), day.month())
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }

    /// `YYYY-MM-DD` bounds as passed to the attendance query.
    pub fn bounds(&self) -> (String, String) {
        (
            self.start.format("%Y-%m-%d").to_string(),
            self.end.format("%Y-%m-%d").to_string(),
        )
    }

    /// e.g. `March 2024`
    pub fn title(&self) -> String {
        self.start.format("%B %Y").to_string()
    }

    /// e.g. `2024-03`
    pub fn slug(&self) -> String {
        self.start.format("%Y-%m").to_string()
    }
}
