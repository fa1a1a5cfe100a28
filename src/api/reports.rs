use actix_web::{HttpResponse, Responder, web};
use chrono::Local;
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::{IntoParams, ToSchema};

use super::attachment;
use crate::auth::auth::AuthUser;
use crate::config::Config;
use crate::error::ReportError;
use crate::export::table::{all_data_file_name, wage_summary_file_name};
use crate::export::{ExportFormat, ReportTable, render_pdf, render_xlsx};
use crate::model::wage_summary::WageSummaryRow;
use crate::report::aggregate::WageAggregator;
use crate::report::csv_rows::{build_csv_rows, render_csv};
use crate::report::period::ReportPeriod;
use crate::store::{EmployeeScope, ReportStore};

#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct WageSummaryQuery {
    /// Calendar year, defaults to the current one
    #[schema(example = 2024)]
    pub year: Option<i32>,

    /// Calendar month 1-12, defaults to the current one
    #[schema(example = 3)]
    pub month: Option<u32>,

    /// pdf (default), xlsx or json
    pub format: Option<ExportFormat>,
}

#[derive(Serialize, ToSchema)]
pub struct WageSummaryResponse {
    #[schema(example = "2024-03")]
    pub period: String,
    pub rows: Vec<WageSummaryRow>,
}

#[derive(Serialize, ToSchema)]
pub struct ReportAction {
    #[schema(example = "Wage Summary Report")]
    pub title: String,
    pub description: String,
    #[schema(example = "/api/reports/wage-summary")]
    pub href: String,
}

impl WageSummaryQuery {
    fn period(&self) -> Result<ReportPeriod, ReportError> {
        match (self.year, self.month) {
            (Some(year), Some(month)) => ReportPeriod::month(year, month),
            (None, None) => ReportPeriod::containing(Local::now().date_naive()),
            _ => Err(ReportError::InvalidPeriod(
                "year and month must be given together".to_string(),
            )),
        }
    }
}

/// Available report actions
#[utoipa::path(
    get,
    path = "/api/reports",
    responses(
        (status = 200, description = "Report actions", body = Vec<ReportAction>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Owner only")
    ),
    security(("bearer_auth" = [])),
    tag = "Reports"
)]
pub async fn list_reports(
    auth: AuthUser,
    config: web::Data<Config>,
) -> actix_web::Result<impl Responder> {
    auth.require_owner()?;

    let prefix = config.api_prefix.trim_end_matches('/');
    let actions = vec![
        ReportAction {
            title: "Monthly Wage Summary (Excel)".to_string(),
            description: "Days present and wage due this month for every employee, as a spreadsheet"
                .to_string(),
            href: format!("{prefix}/reports/wage-summary?format=xlsx"),
        },
        ReportAction {
            title: "Wage Summary Report".to_string(),
            description: "Download wage calculations and payment summaries".to_string(),
            href: format!("{prefix}/reports/wage-summary"),
        },
        ReportAction {
            title: "Employee History".to_string(),
            description: "View complete attendance history for individual employees".to_string(),
            href: config.history_path.clone(),
        },
        ReportAction {
            title: "Export All Data".to_string(),
            description: "Export all employee and attendance data to Excel/CSV".to_string(),
            href: format!("{prefix}/reports/export-all"),
        },
    ];

    Ok(HttpResponse::Ok().json(actions))
}

/// Monthly wage summary
#[utoipa::path(
    get,
    path = "/api/reports/wage-summary",
    params(WageSummaryQuery),
    responses(
        (status = 200, description = "Wage summary document, or rows when format=json", body = WageSummaryResponse),
        (status = 400, description = "Invalid period"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Owner only"),
        (status = 502, description = "Report data could not be fetched", body = Object, example = json!({
            "message": "Could not load report data",
            "retry": true
        }))
    ),
    security(("bearer_auth" = [])),
    tag = "Reports"
)]
pub async fn wage_summary<S: ReportStore>(
    auth: AuthUser,
    store: web::Data<S>,
    config: web::Data<Config>,
    query: web::Query<WageSummaryQuery>,
) -> actix_web::Result<HttpResponse> {
    auth.require_owner()?;

    let period = query.period()?;
    let format = query.format.unwrap_or_default();
    let company_id = auth.company_id.as_str();

    let employees = store.employees(EmployeeScope::company(company_id)).await?;
    let attendance = store.attendance(company_id, Some(period)).await?;

    let rows = WageAggregator::new(config.orphan_policy)
        .within(period)
        .aggregate(&employees, &attendance);

    info!(
        company_id,
        period = %period.slug(),
        employees = employees.len(),
        attendance = attendance.len(),
        rows = rows.len(),
        "Wage summary generated"
    );

    let table = ReportTable::wage_summary(format!("Wage Summary Report - {}", period.title()), &rows);
    let bytes = match format {
        ExportFormat::Json => {
            return Ok(HttpResponse::Ok().json(WageSummaryResponse {
                period: period.slug(),
                rows,
            }));
        }
        ExportFormat::Pdf => render_pdf(&table)?,
        ExportFormat::Xlsx => render_xlsx(&table)?,
    };

    Ok(attachment(
        bytes,
        format.content_type(),
        &wage_summary_file_name(&period.slug(), format),
    ))
}

/// Export all attendance as CSV
#[utoipa::path(
    get,
    path = "/api/reports/export-all",
    responses(
        (status = 200, description = "CSV of every attendance row with its employee", content_type = "text/csv"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Owner only"),
        (status = 502, description = "Report data could not be fetched")
    ),
    security(("bearer_auth" = [])),
    tag = "Reports"
)]
pub async fn export_all<S: ReportStore>(
    auth: AuthUser,
    store: web::Data<S>,
    config: web::Data<Config>,
) -> actix_web::Result<HttpResponse> {
    auth.require_owner()?;

    let company_id = auth.company_id.as_str();
    let employees = store.employees(EmployeeScope::company(company_id)).await?;
    let attendance = store.attendance(company_id, None).await?;

    let rows = build_csv_rows(&employees, &attendance, config.orphan_policy)?;
    let csv = render_csv(&rows)?;

    info!(company_id, rows = rows.len(), "All-data export generated");

    Ok(attachment(
        csv.into_bytes(),
        "text/csv;charset=utf-8",
        &all_data_file_name(Local::now().date_naive()),
    ))
}
