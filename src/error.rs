use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use derive_more::Display;
use serde_json::json;

/// Failure of a fetch + aggregate + export pipeline.
#[derive(Debug, Display)]
pub enum ReportError {
    /// Backend unreachable, query rejected or access denied.
    #[display(fmt = "fetch failed: {}", _0)]
    FetchFailed(String),

    /// A fetched row did not match the expected shape.
    #[display(fmt = "invalid row: {}", _0)]
    InvalidRow(String),

    #[display(fmt = "invalid period: {}", _0)]
    InvalidPeriod(String),

    #[display(fmt = "export failed: {}", _0)]
    ExportFailed(String),
}

impl std::error::Error for ReportError {}

impl From<sqlx::Error> for ReportError {
    fn from(e: sqlx::Error) -> Self {
        ReportError::FetchFailed(e.to_string())
    }
}

impl ResponseError for ReportError {
    fn status_code(&self) -> StatusCode {
        match self {
            ReportError::FetchFailed(_) | ReportError::InvalidRow(_) => StatusCode::BAD_GATEWAY,
            ReportError::InvalidPeriod(_) => StatusCode::BAD_REQUEST,
            ReportError::ExportFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            ReportError::FetchFailed(_) | ReportError::InvalidRow(_) => json!({
                "message": "Could not load report data",
                "retry": true
            }),
            ReportError::InvalidPeriod(reason) => json!({ "message": reason }),
            ReportError::ExportFailed(_) => json!({
                "message": "Something went wrong, Contact with system admin"
            }),
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}
