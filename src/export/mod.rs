//! Rendering of report tables into downloadable documents.

pub mod pdf;
pub mod table;
pub mod xlsx;

pub use pdf::render_pdf;
pub use table::{ExportFormat, ReportTable};
pub use xlsx::render_xlsx;
