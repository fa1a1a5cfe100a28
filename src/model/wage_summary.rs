use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct WageSummaryRow {
    #[schema(example = "Alice")]
    pub employee_name: String,

    #[schema(example = "E1")]
    pub employee_id: String,

    #[schema(example = 2)]
    pub present_days: u32,

    #[schema(example = 1000.0)]
    pub wage: f64,
}
