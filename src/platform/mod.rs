//! Data channels the dashboard consumes.
//!
//! The platform owns storage and retrieval; the dashboard only sees the
//! records it hands back, already scoped to one employee.

pub mod mysql;

use std::fmt;

use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::Value;

use crate::model::leave_balance::{LeaveBalance, LeaveBalanceSetting, LeaveHoursBalance};
use crate::model::leave_request::LeaveRequest;

pub use mysql::MySqlPlatform;

/// Default number of rows for the past-leave history table.
pub const DEFAULT_PAST_LIMIT: u32 = 20;

/// Which slice of an employee's leave requests to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaveScope {
    All,
    /// Requests that ended before `before`, most recent first.
    Past { before: NaiveDate, limit: u32 },
}

/// Failure reported by a platform call.
///
/// Carries the message the platform attached, if any, so callers can show
/// it to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformError {
    message: Option<String>,
}

impl PlatformError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }

    pub fn without_message() -> Self {
        Self { message: None }
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref().filter(|m| !m.trim().is_empty())
    }
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message().unwrap_or("platform call failed"))
    }
}

impl std::error::Error for PlatformError {}

#[async_trait]
pub trait LeavePlatform: Send + Sync {
    async fn fetch_leave_balance(&self, employee_id: u64) -> Result<LeaveBalance, PlatformError>;

    async fn fetch_leave_requests(
        &self,
        employee_id: u64,
        scope: LeaveScope,
    ) -> Result<Vec<LeaveRequest>, PlatformError>;

    /// Open cases come back as an opaque payload; shape is checked downstream.
    async fn fetch_open_cases(&self, employee_id: u64, limit: u32)
    -> Result<Value, PlatformError>;

    async fn fetch_leave_hours(&self, employee_id: u64)
    -> Result<LeaveHoursBalance, PlatformError>;

    /// `Ok(None)` when the organisation has no default configured.
    async fn fetch_balance_setting(&self) -> Result<Option<LeaveBalanceSetting>, PlatformError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_messages_fall_back_to_generic_text() {
        assert_eq!(PlatformError::new("  ").message(), None);
        assert_eq!(PlatformError::new("  ").to_string(), "platform call failed");
        assert_eq!(PlatformError::new("timeout").to_string(), "timeout");
    }
}
