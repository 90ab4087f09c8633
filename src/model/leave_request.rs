use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A leave request as handed over by the platform.
///
/// Dates stay raw strings: the platform may send nulls, datetimes or values
/// that do not parse at all, and each of those has its own display rule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct LeaveRequest {
    #[schema(example = "1")]
    pub id: String,
    #[schema(example = "2026-01-01", nullable = true)]
    pub start_date: Option<String>,
    #[schema(example = "2026-01-03", nullable = true)]
    pub end_date: Option<String>,
    #[schema(example = "sick_leave", nullable = true)]
    pub leave_type: Option<String>,
    #[schema(example = "Fever", nullable = true)]
    pub reason: Option<String>,
    #[schema(example = 3.0, nullable = true)]
    pub days_taken: Option<f64>,
    #[schema(example = "Approved", nullable = true)]
    pub status: Option<String>,
}
