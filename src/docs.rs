use crate::dashboard::{
    BalanceView, CaseCard, CaseView, DashboardView, ErrorNotice, HoursBalanceView, LeaveHistoryView,
    LeaveHoursView, LeaveTableRow, LeaveView, NavigationTarget, RowStripe, StatusCategory,
    TableColumn,
};
use crate::model::leave_balance::{LeaveBalance, LeaveBalanceSetting, LeaveHoursBalance};
use crate::model::leave_request::LeaveRequest;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "HRM Leave Dashboard API",
        version = "1.0.0",
        description = r#"
## Employee Leave Dashboard

Self-service view over an employee's leave data.

### 🔹 Key Features
- **Balances**
  - Earned, sick, booked and available days, plus hour-based balances
- **Leave Requests**
  - Upcoming and past leave, each with a Pending / Approved / Rejected status
- **Open Cases**
  - Related support cases for the to-do panel
- **Apply for Leave**
  - Returns where the leave creation form lives

### 📦 Response Format
- JSON, camelCase keys
- A failing data source empties only its own section and is listed under `errors`

---
Built with **Rust**, **Actix Web**, **SQLx**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::dashboard::leave_dashboard,
        crate::api::dashboard::leave_history,
        crate::api::dashboard::leave_hours,
        crate::api::dashboard::apply_for_leave
    ),
    components(
        schemas(
            DashboardView,
            BalanceView,
            HoursBalanceView,
            LeaveHoursView,
            LeaveView,
            LeaveHistoryView,
            LeaveTableRow,
            TableColumn,
            CaseCard,
            CaseView,
            NavigationTarget,
            ErrorNotice,
            StatusCategory,
            RowStripe,
            LeaveBalance,
            LeaveHoursBalance,
            LeaveBalanceSetting,
            LeaveRequest
        )
    ),
    tags(
        (name = "Dashboard", description = "Employee leave dashboard APIs"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_dashboard_route_is_documented() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/v1/employees/{employee_id}/leave-dashboard",
            "/api/v1/employees/{employee_id}/leave-dashboard/apply",
            "/api/v1/employees/{employee_id}/leave-history",
            "/api/v1/employees/{employee_id}/leave-hours",
        ] {
            assert!(doc.paths.paths.contains_key(path), "{path} missing");
        }
    }
}
