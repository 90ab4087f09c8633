use actix_web::{HttpResponse, Responder, web};
use chrono::Local;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::config::Config;
use crate::dashboard::{Channel, DashboardInputs, LeaveAggregator, LeaveHoursView};
use crate::platform::{LeavePlatform, LeaveScope};

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct HistoryQuery {
    /// Maximum number of rows (defaults to the configured past-leave limit)
    pub limit: Option<u32>,
}

/// Leave dashboard for one employee
#[utoipa::path(
    get,
    path = "/api/v1/employees/{employee_id}/leave-dashboard",
    params(
        ("employee_id" = u64, Path, description = "Employee whose dashboard to build")
    ),
    responses(
        (status = 200, description = "Balances, upcoming and past leave, open cases", body = crate::dashboard::DashboardView),
        (status = 404, description = "Malformed employee id")
    ),
    tag = "Dashboard"
)]
pub async fn leave_dashboard(
    platform: web::Data<dyn LeavePlatform>,
    aggregator: web::Data<LeaveAggregator>,
    config: web::Data<Config>,
    path: web::Path<u64>,
) -> actix_web::Result<impl Responder> {
    let employee_id = path.into_inner();
    let today = Local::now().date_naive();

    // the three channels are independent; any of them may fail alone
    let (balance, leaves, cases) = futures::join!(
        platform.fetch_leave_balance(employee_id),
        platform.fetch_leave_requests(employee_id, LeaveScope::All),
        async {
            if config.show_cases {
                Channel::from(
                    platform
                        .fetch_open_cases(employee_id, config.open_case_limit)
                        .await,
                )
            } else {
                Channel::Pending
            }
        },
    );

    let inputs = DashboardInputs {
        balance: balance.into(),
        leaves: leaves.into(),
        cases,
    };

    let view = aggregator.aggregate(&inputs, today);
    tracing::info!(employee_id, errors = view.errors.len(), "Leave dashboard served");

    Ok(HttpResponse::Ok().json(view))
}

/// Past leave as a compact table
#[utoipa::path(
    get,
    path = "/api/v1/employees/{employee_id}/leave-history",
    params(
        ("employee_id" = u64, Path, description = "Employee whose history to list"),
        HistoryQuery
    ),
    responses(
        (status = 200, description = "Striped past-leave rows", body = crate::dashboard::LeaveHistoryView)
    ),
    tag = "Dashboard"
)]
pub async fn leave_history(
    platform: web::Data<dyn LeavePlatform>,
    aggregator: web::Data<LeaveAggregator>,
    config: web::Data<Config>,
    path: web::Path<u64>,
    query: web::Query<HistoryQuery>,
) -> actix_web::Result<impl Responder> {
    let employee_id = path.into_inner();
    let today = Local::now().date_naive();
    let limit = query.limit.unwrap_or(config.past_leave_limit).min(100);

    let leaves = Channel::from(
        platform
            .fetch_leave_requests(employee_id, LeaveScope::Past { before: today, limit })
            .await,
    );

    Ok(HttpResponse::Ok().json(aggregator.history(&leaves, today, limit as usize)))
}

/// Hour-based balances next to the organisation default
#[utoipa::path(
    get,
    path = "/api/v1/employees/{employee_id}/leave-hours",
    params(
        ("employee_id" = u64, Path, description = "Employee whose hour balances to show")
    ),
    responses(
        (status = 200, description = "Hour balances and the load error, if any", body = crate::dashboard::LeaveHoursView)
    ),
    tag = "Dashboard"
)]
pub async fn leave_hours(
    platform: web::Data<dyn LeavePlatform>,
    path: web::Path<u64>,
) -> actix_web::Result<impl Responder> {
    let employee_id = path.into_inner();

    let (hours, setting) = futures::join!(
        platform.fetch_leave_hours(employee_id),
        platform.fetch_balance_setting(),
    );

    let view = LeaveHoursView::derive(&Channel::from(hours), &Channel::from(setting));
    if let Some(error) = &view.error {
        tracing::warn!(employee_id, message = %error.message, "Leave hours unavailable");
    }

    Ok(HttpResponse::Ok().json(view))
}

/// Where to go to file a new leave request
#[utoipa::path(
    post,
    path = "/api/v1/employees/{employee_id}/leave-dashboard/apply",
    params(
        ("employee_id" = u64, Path, description = "Employee applying for leave")
    ),
    responses(
        (status = 200, description = "Leave creation target", body = crate::dashboard::NavigationTarget, example = json!({
            "method": "POST",
            "href": "https://hrm.example.com/api/v1/leave"
        }))
    ),
    tag = "Dashboard"
)]
pub async fn apply_for_leave(
    aggregator: web::Data<LeaveAggregator>,
    path: web::Path<u64>,
) -> actix_web::Result<impl Responder> {
    let employee_id = path.into_inner();
    let target = aggregator.actions().apply_leave();
    tracing::debug!(employee_id, href = %target.href, "Apply for leave requested");

    Ok(HttpResponse::Ok().json(target))
}
