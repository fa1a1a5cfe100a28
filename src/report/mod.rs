//! Pure, request-scoped transforms from fetched rows to report rows.

pub mod activity;
pub mod aggregate;
pub mod csv_rows;
pub mod period;
