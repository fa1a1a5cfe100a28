pub mod reports;
pub mod supervisor;

use actix_web::{HttpResponse, http::header};

/// Wrap rendered bytes as a file download.
pub(crate) fn attachment(bytes: Vec<u8>, content_type: &str, file_name: &str) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(content_type)
        .insert_header((
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{file_name}\""),
        ))
        .body(bytes)
}
