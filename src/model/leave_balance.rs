use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Day-based balances for one employee. Every figure is optional upstream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct LeaveBalance {
    #[schema(example = 12.0, nullable = true)]
    pub earned: Option<f64>,
    #[schema(example = 5.0, nullable = true)]
    pub sick: Option<f64>,
    pub booked_earned: Option<f64>,
    pub booked_sick: Option<f64>,
    pub booked_unpaid: Option<f64>,
    pub available_earned: Option<f64>,
    pub available_sick: Option<f64>,
}

/// Hour-based balances, tracked separately from the day figures.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct LeaveHoursBalance {
    #[schema(example = 96.0, nullable = true)]
    pub annual_leave_hours: Option<f64>,
    #[schema(example = 40.0, nullable = true)]
    pub sick_leave_hours: Option<f64>,
}

/// Organisation-wide default allotment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct LeaveBalanceSetting {
    #[schema(example = 15.0, nullable = true)]
    pub earned_casual_leave: Option<f64>,
    #[schema(example = 10.0, nullable = true)]
    pub sick_leave: Option<f64>,
}
