use crate::api::reports::{ReportAction, WageSummaryQuery, WageSummaryResponse};
use crate::api::supervisor::{ActivityExportQuery, SupervisorProfile};
use crate::export::ExportFormat;
use crate::model::activity::ActivityRecord;
use crate::model::employee::{Employee, EmployeeStatus, EmploymentType};
use crate::model::wage_summary::WageSummaryRow;
use crate::report::activity::SupervisorStats;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi, openapi};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Attendance Reports API",
        version = "1.0.0",
        description = r#"
## Attendance & Wage Reports

Reporting endpoints for the attendance/payroll administration app.

### 🔹 Key Features
- **Reports** (owners)
  - Monthly wage summary as PDF, Excel or JSON
  - Bulk CSV export of every attendance row with its employee
- **Supervisor Profile** (supervisors)
  - Assigned employee roster and recent attendance activity
  - Excel roster export, PDF/Excel activity export

### 🔐 Security
All endpoints are protected using **JWT Bearer authentication**.

---
Built with **Rust**, **Actix Web**, **SQLx**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::reports::list_reports,
        crate::api::reports::wage_summary,
        crate::api::reports::export_all,

        crate::api::supervisor::profile,
        crate::api::supervisor::export_employees,
        crate::api::supervisor::export_activity
    ),
    components(
        schemas(
            ReportAction,
            WageSummaryQuery,
            WageSummaryResponse,
            WageSummaryRow,
            ExportFormat,
            SupervisorProfile,
            SupervisorStats,
            ActivityExportQuery,
            ActivityRecord,
            Employee,
            EmploymentType,
            EmployeeStatus
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Reports", description = "Owner report and export APIs"),
        (name = "Supervisor", description = "Supervisor profile and export APIs"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}
