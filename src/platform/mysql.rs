use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::Value;
use sqlx::{MySqlPool, prelude::FromRow};

use super::{LeavePlatform, LeaveScope, PlatformError};
use crate::model::case::Case;
use crate::model::leave_balance::{LeaveBalance, LeaveBalanceSetting, LeaveHoursBalance};
use crate::model::leave_request::LeaveRequest;

/// `LeavePlatform` backed by the HRM MySQL schema.
#[derive(Clone)]
pub struct MySqlPlatform {
    pool: MySqlPool,
}

impl MySqlPlatform {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct LeaveRow {
    id: u64,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    leave_type: Option<String>,
    reason: Option<String>,
    days_taken: Option<i64>,
    status: Option<String>,
}

impl From<LeaveRow> for LeaveRequest {
    fn from(row: LeaveRow) -> Self {
        LeaveRequest {
            id: row.id.to_string(),
            start_date: row.start_date.map(|d| d.to_string()),
            end_date: row.end_date.map(|d| d.to_string()),
            leave_type: row.leave_type,
            reason: row.reason,
            days_taken: row.days_taken.map(|d| d as f64),
            status: row.status.as_deref().map(status_label),
        }
    }
}

#[derive(FromRow)]
struct CaseRow {
    id: u64,
    subject: Option<String>,
    case_number: Option<String>,
    status: Option<String>,
}

/// The HRM schema stores statuses lower-case (`approved`); the dashboard
/// expects record labels (`Approved`).
fn status_label(raw: &str) -> String {
    let mut chars = raw.trim().chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

const LEAVE_COLUMNS: &str = r#"
    id,
    start_date,
    end_date,
    CAST(leave_type AS CHAR) AS leave_type,
    reason,
    DATEDIFF(end_date, start_date) + 1 AS days_taken,
    CAST(status AS CHAR) AS status
"#;

#[async_trait]
impl LeavePlatform for MySqlPlatform {
    async fn fetch_leave_balance(&self, employee_id: u64) -> Result<LeaveBalance, PlatformError> {
        let balance = sqlx::query_as::<_, LeaveBalance>(
            r#"
            SELECT earned, sick, booked_earned, booked_sick, booked_unpaid,
                   available_earned, available_sick
            FROM leave_balances
            WHERE employee_id = ?
            "#,
        )
        .bind(employee_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, employee_id, "Failed to fetch leave balance");
            PlatformError::new("Unable to load leave balances")
        })?;

        Ok(balance.unwrap_or_default())
    }

    async fn fetch_leave_requests(
        &self,
        employee_id: u64,
        scope: LeaveScope,
    ) -> Result<Vec<LeaveRequest>, PlatformError> {
        let sql = match scope {
            LeaveScope::All => {
                format!("SELECT {LEAVE_COLUMNS} FROM leave_requests WHERE employee_id = ?")
            }
            LeaveScope::Past { .. } => format!(
                r#"
                SELECT {LEAVE_COLUMNS} FROM leave_requests
                WHERE employee_id = ? AND end_date < ?
                ORDER BY end_date DESC
                LIMIT ?
                "#
            ),
        };

        let mut query = sqlx::query_as::<_, LeaveRow>(&sql).bind(employee_id);
        if let LeaveScope::Past { before, limit } = scope {
            query = query.bind(before).bind(limit);
        }

        let rows = query.fetch_all(&self.pool).await.map_err(|e| {
            tracing::error!(error = %e, employee_id, ?scope, "Failed to fetch leave requests");
            PlatformError::new("Unable to load leave records")
        })?;

        Ok(rows.into_iter().map(LeaveRequest::from).collect())
    }

    async fn fetch_open_cases(
        &self,
        employee_id: u64,
        limit: u32,
    ) -> Result<Value, PlatformError> {
        let rows = sqlx::query_as::<_, CaseRow>(
            r#"
            SELECT id, subject, case_number, status
            FROM support_cases
            WHERE employee_id = ? AND status <> 'Closed'
            ORDER BY created_at DESC
            LIMIT ?
            "#,
        )
        .bind(employee_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, employee_id, "Failed to fetch open cases");
            PlatformError::new("Unable to load cases")
        })?;

        let cases: Vec<Case> = rows
            .into_iter()
            .map(|r| Case {
                id: Some(r.id.to_string()),
                subject: r.subject,
                case_number: r.case_number,
                status: r.status,
            })
            .collect();

        serde_json::to_value(cases).map_err(|e| {
            tracing::error!(error = %e, employee_id, "Failed to encode open cases");
            PlatformError::new("Unable to load cases")
        })
    }

    async fn fetch_leave_hours(
        &self,
        employee_id: u64,
    ) -> Result<LeaveHoursBalance, PlatformError> {
        let hours = sqlx::query_as::<_, LeaveHoursBalance>(
            r#"
            SELECT annual_leave_hours, sick_leave_hours
            FROM leave_hours_balances
            WHERE employee_id = ?
            "#,
        )
        .bind(employee_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, employee_id, "Failed to fetch leave hours");
            PlatformError::new("Unable to load leave hours")
        })?;

        Ok(hours.unwrap_or_default())
    }

    async fn fetch_balance_setting(&self) -> Result<Option<LeaveBalanceSetting>, PlatformError> {
        sqlx::query_as::<_, LeaveBalanceSetting>(
            "SELECT earned_casual_leave, sick_leave FROM leave_balance_settings LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to fetch default leave balance setting");
            PlatformError::without_message()
        })
    }
}
