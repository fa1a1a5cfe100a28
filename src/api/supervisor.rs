use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use utoipa::{IntoParams, ToSchema};

use super::attachment;
use crate::auth::auth::AuthUser;
use crate::config::Config;
use crate::export::table::{ROSTER_FILE_NAME, activity_file_name};
use crate::export::{ExportFormat, ReportTable, render_pdf, render_xlsx};
use crate::model::{activity::ActivityRecord, employee::Employee};
use crate::report::activity::{SupervisorStats, employee_lookup, join_activity, with_names};
use crate::store::{EmployeeScope, ReportStore};

#[derive(Serialize, ToSchema)]
pub struct SupervisorProfile {
    /// None when no supervisor record exists for the account
    #[schema(example = "Ravi Kumar", nullable = true)]
    pub name: Option<String>,
    #[schema(example = "ravi@company.com")]
    pub email: String,
    pub stats: SupervisorStats,
    pub employees: Vec<Employee>,
    pub activities: Vec<ActivityRecord>,
}

#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct ActivityExportQuery {
    /// pdf (default) or xlsx
    pub format: Option<ExportFormat>,
}

/// Supervisor profile with roster and recent activity
#[utoipa::path(
    get,
    path = "/api/supervisor/profile",
    responses(
        (status = 200, description = "Profile, assigned employees and recent activity", body = SupervisorProfile),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Supervisor only"),
        (status = 502, description = "Profile data could not be fetched")
    ),
    security(("bearer_auth" = [])),
    tag = "Supervisor"
)]
pub async fn profile<S: ReportStore>(
    auth: AuthUser,
    store: web::Data<S>,
    config: web::Data<Config>,
) -> actix_web::Result<HttpResponse> {
    auth.require_supervisor()?;

    let scope = EmployeeScope::supervised_by(&auth.company_id, &auth.user_id);
    let employees = store.employees(scope).await?;

    let recent = store
        .recent_activity(&auth.company_id, &auth.user_id, config.recent_activity_limit)
        .await?;
    let activities = join_activity(&with_names(&recent, &employee_lookup(&employees)));

    let name = store.supervisor_name(&auth.user_id).await?;
    if name.is_none() {
        warn!(supervisor_id = %auth.user_id, "No supervisor record for account");
    }

    let stats = SupervisorStats::compute(&employees, &activities);

    Ok(HttpResponse::Ok().json(SupervisorProfile {
        name,
        email: auth.email.clone(),
        stats,
        employees,
        activities,
    }))
}

/// Assigned employees as a spreadsheet
#[utoipa::path(
    get,
    path = "/api/supervisor/employees/export",
    responses(
        (status = 200, description = "assigned_employees.xlsx"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Supervisor only"),
        (status = 502, description = "Roster could not be fetched")
    ),
    security(("bearer_auth" = [])),
    tag = "Supervisor"
)]
pub async fn export_employees<S: ReportStore>(
    auth: AuthUser,
    store: web::Data<S>,
) -> actix_web::Result<HttpResponse> {
    auth.require_supervisor()?;

    let scope = EmployeeScope::supervised_by(&auth.company_id, &auth.user_id);
    let employees = store.employees(scope).await?;
    let bytes = render_xlsx(&ReportTable::roster(&employees))?;

    info!(supervisor_id = %auth.user_id, rows = employees.len(), "Roster export generated");

    Ok(attachment(bytes, ExportFormat::Xlsx.content_type(), ROSTER_FILE_NAME))
}

/// Recent activity as PDF or spreadsheet
#[utoipa::path(
    get,
    path = "/api/supervisor/activity/export",
    params(ActivityExportQuery),
    responses(
        (status = 200, description = "attendance_history.pdf or .xlsx"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Supervisor only"),
        (status = 502, description = "Activity could not be fetched")
    ),
    security(("bearer_auth" = [])),
    tag = "Supervisor"
)]
pub async fn export_activity<S: ReportStore>(
    auth: AuthUser,
    store: web::Data<S>,
    config: web::Data<Config>,
    query: web::Query<ActivityExportQuery>,
) -> actix_web::Result<HttpResponse> {
    auth.require_supervisor()?;

    let format = query.format.unwrap_or_default();

    let scope = EmployeeScope::supervised_by(&auth.company_id, &auth.user_id);
    let employees = store.employees(scope).await?;
    let recent = store
        .recent_activity(&auth.company_id, &auth.user_id, config.recent_activity_limit)
        .await?;
    let activities = join_activity(&with_names(&recent, &employee_lookup(&employees)));

    info!(supervisor_id = %auth.user_id, rows = activities.len(), format = format.extension(), "Activity export generated");

    let table = ReportTable::activity(&activities);
    let bytes = match format {
        ExportFormat::Json => return Ok(HttpResponse::Ok().json(activities)),
        ExportFormat::Pdf => render_pdf(&table)?,
        ExportFormat::Xlsx => render_xlsx(&table)?,
    };

    Ok(attachment(bytes, format.content_type(), &activity_file_name(format)))
}
