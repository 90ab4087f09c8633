//! Leave dashboard aggregation.
//!
//! Turns the raw balance, leave and case channels into the view-model the
//! dashboard renders. Every function here is pure: the only outside input is
//! the reference date, which callers pass in once per aggregation.

pub mod actions;
pub mod balance;
pub mod cases;
pub mod dates;
pub mod error;
pub mod format;
pub mod status;

use chrono::NaiveDate;
use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

use crate::model::leave_balance::{LeaveBalance, LeaveBalanceSetting, LeaveHoursBalance};
use crate::model::leave_request::LeaveRequest;
use crate::platform::PlatformError;

pub use actions::{DashboardActions, NavigationTarget};
pub use balance::{BalanceView, HoursBalanceView};
pub use cases::CaseView;
pub use error::{ErrorNotice, LoadError};
pub use format::RowStripe;
pub use status::StatusCategory;

/// Latest state of one input channel.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Channel<T> {
    #[default]
    Pending,
    Loaded(T),
    Failed(PlatformError),
}

impl<T> Channel<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, Channel::Pending)
    }
}

impl<T> From<Result<T, PlatformError>> for Channel<T> {
    fn from(result: Result<T, PlatformError>) -> Self {
        match result {
            Ok(v) => Channel::Loaded(v),
            Err(e) => Channel::Failed(e),
        }
    }
}

/// Presentation fields for one leave request.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeaveView {
    #[schema(example = "1")]
    pub id: String,
    /// Start date, or the end date when no start date was recorded.
    #[schema(example = "01 Jan 2025, Wednesday")]
    pub formatted_date: String,
    #[schema(example = "03 Jan 2025, Friday")]
    pub formatted_end_date: String,
    #[schema(example = "Sick Leave")]
    pub type_label: String,
    pub is_sick: bool,
    #[schema(example = "3 days")]
    pub duration_label: String,
    pub status_category: StatusCategory,
    #[schema(nullable = true)]
    pub reason: Option<String>,
}

impl LeaveView {
    pub fn derive(request: &LeaveRequest) -> Self {
        let type_label = format::type_label(request.leave_type.as_deref());
        let shown_date = request.start_date.as_deref().or(request.end_date.as_deref());

        Self {
            id: request.id.clone(),
            formatted_date: format::format_rich_date(shown_date),
            formatted_end_date: format::format_rich_date(request.end_date.as_deref()),
            is_sick: format::is_sick(&type_label),
            type_label,
            duration_label: format::duration_label(request.days_taken),
            status_category: StatusCategory::classify(request.status.as_deref()),
            reason: request.reason.clone(),
        }
    }
}

/// Column descriptor for the compact leave table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TableColumn {
    pub label: String,
    pub field_name: String,
}

const LEAVE_TABLE_COLUMNS: [(&str, &str); 5] = [
    ("Start Date", "startDate"),
    ("Leave Type", "leaveType"),
    ("Reason", "reason"),
    ("Days Taken", "daysTaken"),
    ("Status", "status"),
];

pub fn leave_table_columns() -> Vec<TableColumn> {
    LEAVE_TABLE_COLUMNS
        .iter()
        .map(|(label, field_name)| TableColumn {
            label: label.to_string(),
            field_name: field_name.to_string(),
        })
        .collect()
}

/// One row of the compact leave table.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeaveTableRow {
    pub id: String,
    #[schema(example = "01/01/2025")]
    pub start_date: String,
    pub leave_type: String,
    #[schema(nullable = true)]
    pub reason: Option<String>,
    pub days_taken: f64,
    pub status: StatusCategory,
    pub stripe: RowStripe,
}

pub fn leave_table(requests: &[&LeaveRequest]) -> Vec<LeaveTableRow> {
    requests
        .iter()
        .enumerate()
        .map(|(index, r)| LeaveTableRow {
            id: r.id.clone(),
            start_date: format::format_compact_date(r.start_date.as_deref()),
            leave_type: format::type_label(r.leave_type.as_deref()),
            reason: r.reason.clone(),
            days_taken: r.days_taken.unwrap_or(0.0),
            status: StatusCategory::classify(r.status.as_deref()),
            stripe: RowStripe::for_index(index),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CaseCard {
    #[serde(flatten)]
    pub case: CaseView,
    /// Absent when the case carries no id to link to.
    #[schema(nullable = true)]
    pub view: Option<NavigationTarget>,
}

/// Whatever has arrived so far on each channel.
#[derive(Debug, Clone, Default)]
pub struct DashboardInputs {
    pub balance: Channel<LeaveBalance>,
    pub leaves: Channel<Vec<LeaveRequest>>,
    pub cases: Channel<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    #[schema(example = "2025-06-01", value_type = String, format = "date")]
    pub reference_date: NaiveDate,
    pub balances: BalanceView,
    pub upcoming: Vec<LeaveView>,
    pub past: Vec<LeaveView>,
    pub cases: Vec<CaseCard>,
    pub apply_leave: NavigationTarget,
    /// Channels that have not reported yet.
    pub pending: Vec<String>,
    pub errors: Vec<ErrorNotice>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeaveHistoryView {
    pub columns: Vec<TableColumn>,
    pub rows: Vec<LeaveTableRow>,
    #[schema(nullable = true)]
    pub error: Option<ErrorNotice>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeaveHoursView {
    #[serde(flatten)]
    pub balances: HoursBalanceView,
    #[schema(nullable = true)]
    pub error: Option<ErrorNotice>,
}

impl LeaveHoursView {
    pub fn derive(
        hours: &Channel<LeaveHoursBalance>,
        setting: &Channel<Option<LeaveBalanceSetting>>,
    ) -> Self {
        let (balances, error) = HoursBalanceView::derive(hours, setting);
        Self {
            balances,
            error: error.as_ref().map(LoadError::notice),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LeaveAggregator {
    actions: DashboardActions,
    show_cases: bool,
}

impl LeaveAggregator {
    pub fn new(actions: DashboardActions) -> Self {
        Self {
            actions,
            show_cases: true,
        }
    }

    pub fn with_cases(mut self, show_cases: bool) -> Self {
        self.show_cases = show_cases;
        self
    }

    pub fn actions(&self) -> &DashboardActions {
        &self.actions
    }

    /// Builds the full dashboard. A failed channel empties only its own
    /// section and adds one entry to `errors`.
    pub fn aggregate(&self, inputs: &DashboardInputs, today: NaiveDate) -> DashboardView {
        let mut errors = Vec::new();
        let mut pending = Vec::new();

        let (balances, balance_err) = BalanceView::from_channel(&inputs.balance);
        errors.extend(balance_err);
        if inputs.balance.is_pending() {
            pending.push("balance".to_string());
        }

        let (upcoming, past): (Vec<LeaveView>, Vec<LeaveView>) = match &inputs.leaves {
            Channel::Loaded(requests) => {
                let parts = dates::partition(requests, today);
                (
                    parts.upcoming.into_iter().map(LeaveView::derive).collect(),
                    parts.past.into_iter().map(LeaveView::derive).collect(),
                )
            }
            Channel::Failed(e) => {
                tracing::error!(error = %e, "Error loading leave records");
                errors.push(LoadError::LeaveList(e.clone()));
                (Vec::new(), Vec::new())
            }
            Channel::Pending => {
                pending.push("leaveList".to_string());
                (Vec::new(), Vec::new())
            }
        };

        let cases: Vec<CaseCard> = if self.show_cases {
            match &inputs.cases {
                Channel::Loaded(raw) => cases::normalize_cases(raw)
                    .into_iter()
                    .map(|case| CaseCard {
                        view: (!case.id.is_empty()).then(|| self.actions.view_case(&case.id)),
                        case,
                    })
                    .collect(),
                Channel::Failed(e) => {
                    tracing::error!(error = %e, "Error loading cases");
                    errors.push(LoadError::CaseList(e.clone()));
                    Vec::new()
                }
                Channel::Pending => {
                    pending.push("caseList".to_string());
                    Vec::new()
                }
            }
        } else {
            Vec::new()
        };

        tracing::debug!(
            %today,
            upcoming = upcoming.len(),
            past = past.len(),
            cases = cases.len(),
            errors = errors.len(),
            "Dashboard aggregated"
        );

        DashboardView {
            reference_date: today,
            balances,
            upcoming,
            past,
            cases,
            apply_leave: self.actions.apply_leave(),
            pending,
            errors: errors.iter().map(LoadError::notice).collect(),
        }
    }

    /// Past requests as a striped table, at most `limit` rows. Anything the
    /// platform sent that has not ended yet is left out.
    pub fn history(
        &self,
        leaves: &Channel<Vec<LeaveRequest>>,
        today: NaiveDate,
        limit: usize,
    ) -> LeaveHistoryView {
        let (rows, error) = match leaves {
            Channel::Loaded(requests) => {
                let mut past = dates::partition(requests, today).past;
                past.truncate(limit);
                (leave_table(&past), None)
            }
            Channel::Failed(e) => {
                tracing::error!(error = %e, "Error loading leave history");
                (Vec::new(), Some(LoadError::LeaveList(e.clone()).notice()))
            }
            Channel::Pending => (Vec::new(), None),
        };

        LeaveHistoryView {
            columns: leave_table_columns(),
            rows,
            error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    fn request(id: &str, start: &str, end: &str, status: Option<&str>) -> LeaveRequest {
        LeaveRequest {
            id: id.to_string(),
            start_date: Some(start.to_string()),
            end_date: Some(end.to_string()),
            leave_type: Some("Sick_Leave".to_string()),
            reason: Some("Flu".to_string()),
            days_taken: Some(1.0),
            status: status.map(str::to_string),
        }
    }

    fn aggregator() -> LeaveAggregator {
        LeaveAggregator::new(DashboardActions::from_urls("/hrm/leave/new", "/hrm/cases/{id}"))
    }

    #[test]
    fn leave_view_derives_every_field() {
        let view = LeaveView::derive(&request("7", "2025-01-01", "2025-01-03", Some("Approved")));
        assert_eq!(view.formatted_date, "01 Jan 2025, Wednesday");
        assert_eq!(view.formatted_end_date, "03 Jan 2025, Friday");
        assert_eq!(view.type_label, "Sick Leave");
        assert!(view.is_sick);
        assert_eq!(view.duration_label, "1 day");
        assert_eq!(view.status_category, StatusCategory::Approved);
    }

    #[test]
    fn leave_view_falls_back_to_end_date() {
        let req = LeaveRequest {
            id: "1".into(),
            end_date: Some("2025-01-01".into()),
            ..Default::default()
        };
        let view = LeaveView::derive(&req);
        assert_eq!(view.formatted_date, "01 Jan 2025, Wednesday");
        assert_eq!(view.type_label, "Leave");
        assert!(!view.is_sick);
        assert_eq!(view.duration_label, "0 days");
        assert_eq!(view.status_category, StatusCategory::Pending);
    }

    #[test]
    fn full_dashboard() {
        let inputs = DashboardInputs {
            balance: Channel::Loaded(LeaveBalance {
                earned: Some(12.0),
                sick: Some(5.0),
                ..Default::default()
            }),
            leaves: Channel::Loaded(vec![
                request("1", "2025-05-30", "2025-06-01", Some("Approved")),
                request("2", "2024-12-30", "2025-01-01", Some("Rejected")),
                request("3", "2025-07-01", "2025-07-04", None),
            ]),
            cases: Channel::Loaded(json!([{ "id": "c1", "caseNumber": "0001" }])),
        };

        let view = aggregator().aggregate(&inputs, today());

        assert_eq!(view.balances.earned, 12.0);
        assert_eq!(view.balances.booked_unpaid, 0.0);
        let upcoming: Vec<&str> = view.upcoming.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(upcoming, ["1", "3"]);
        assert_eq!(view.past.len(), 1);
        assert_eq!(view.past[0].status_category, StatusCategory::Rejected);
        assert_eq!(view.cases[0].case.subject, "0001");
        assert_eq!(view.cases[0].view.as_ref().map(|t| t.href.as_str()), Some("/hrm/cases/c1"));
        assert_eq!(view.apply_leave.href, "/hrm/leave/new");
        assert!(view.errors.is_empty());
        assert!(view.pending.is_empty());
    }

    #[test]
    fn failed_case_channel_leaves_the_rest_intact() {
        let inputs = DashboardInputs {
            balance: Channel::Loaded(LeaveBalance {
                earned: Some(4.0),
                ..Default::default()
            }),
            leaves: Channel::Loaded(vec![request("1", "2025-06-01", "2025-06-02", None)]),
            cases: Channel::Failed(PlatformError::new("case service down")),
        };

        let view = aggregator().aggregate(&inputs, today());

        assert_eq!(view.balances.earned, 4.0);
        assert_eq!(view.upcoming.len(), 1);
        assert!(view.cases.is_empty());
        assert_eq!(
            view.errors,
            [ErrorNotice {
                channel: "caseList".into(),
                message: "case service down".into(),
            }]
        );
    }

    #[test]
    fn failed_leave_list_empties_both_buckets() {
        let inputs = DashboardInputs {
            balance: Channel::Failed(PlatformError::without_message()),
            leaves: Channel::Failed(PlatformError::without_message()),
            cases: Channel::Loaded(json!([])),
        };

        let view = aggregator().aggregate(&inputs, today());

        assert_eq!(view.balances, BalanceView::default());
        assert!(view.upcoming.is_empty() && view.past.is_empty());
        let messages: Vec<&str> = view.errors.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, ["Error loading leave balances", "Error loading leave records"]);
    }

    #[test]
    fn partial_arrival_is_reported_as_pending() {
        let inputs = DashboardInputs {
            balance: Channel::Loaded(LeaveBalance::default()),
            ..Default::default()
        };

        let view = aggregator().aggregate(&inputs, today());

        assert_eq!(view.pending, ["leaveList", "caseList"]);
        assert!(view.errors.is_empty());
    }

    #[test]
    fn hidden_case_panel_ignores_the_channel() {
        let inputs = DashboardInputs {
            cases: Channel::Failed(PlatformError::new("ignored")),
            ..Default::default()
        };

        let view = aggregator().with_cases(false).aggregate(&inputs, today());

        assert!(view.cases.is_empty());
        assert!(view.errors.is_empty());
        assert!(!view.pending.contains(&"caseList".to_string()));
    }

    #[test]
    fn case_without_id_gets_no_view_link() {
        let inputs = DashboardInputs {
            cases: Channel::Loaded(json!([{ "subject": "Orphan" }, { "Id": "c2" }])),
            ..Default::default()
        };

        let view = aggregator().aggregate(&inputs, today());

        assert_eq!(view.cases.len(), 2);
        assert_eq!(view.cases[0].case.subject, "Orphan");
        assert!(view.cases[0].view.is_none());
        assert_eq!(view.cases[1].view, Some(NavigationTarget::new("GET", "/hrm/cases/c2")));
    }

    #[test]
    fn hours_view_carries_the_load_error() {
        let setting = Channel::Loaded(Some(LeaveBalanceSetting {
            earned_casual_leave: Some(15.0),
            sick_leave: Some(10.0),
        }));
        let view = LeaveHoursView::derive(
            &Channel::Failed(PlatformError::new("hours service down")),
            &setting,
        );
        assert!(view.balances.has_error);
        assert_eq!(view.balances.setting_sick, 10.0);
        assert_eq!(
            view.error,
            Some(ErrorNotice {
                channel: "hours".into(),
                message: "hours service down".into(),
            })
        );

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["hasError"], true);
        assert_eq!(json["error"]["message"], "hours service down");
    }

    #[test]
    fn loaded_hours_have_no_error() {
        let hours = Channel::Loaded(LeaveHoursBalance {
            annual_leave_hours: Some(96.0),
            sick_leave_hours: None,
        });
        let view = LeaveHoursView::derive(&hours, &Channel::Loaded(None));
        assert_eq!(view.balances.earned_casual_hours, 96.0);
        assert!(view.error.is_none());
        assert_eq!(serde_json::to_value(&view).unwrap()["error"], Value::Null);
    }

    #[test]
    fn history_is_striped_limited_and_past_only() {
        let leaves = Channel::Loaded(vec![
            request("1", "2025-05-01", "2025-05-02", Some("Approved")),
            request("2", "2025-06-01", "2025-06-01", None),
            request("3", "2025-04-01", "2025-04-01", Some("Rejected")),
            request("4", "2025-03-01", "2025-03-01", None),
        ]);

        let history = aggregator().history(&leaves, today(), 2);

        assert_eq!(history.columns.len(), 5);
        assert_eq!(history.columns[0].label, "Start Date");
        let ids: Vec<&str> = history.rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["1", "3"]);
        assert_eq!(history.rows[0].start_date, "01/05/2025");
        assert_eq!(history.rows[0].stripe, RowStripe::Even);
        assert_eq!(history.rows[1].stripe, RowStripe::Odd);
        assert!(history.error.is_none());
    }

    #[test]
    fn history_failure_carries_the_table_error() {
        let history = aggregator().history(
            &Channel::Failed(PlatformError::without_message()),
            today(),
            20,
        );
        assert!(history.rows.is_empty());
        assert_eq!(
            history.error.map(|e| e.message).as_deref(),
            Some("Error loading leave records")
        );
    }

    #[test]
    fn serialises_with_camel_case_keys() {
        let view = aggregator().aggregate(&DashboardInputs::default(), today());
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["referenceDate"], "2025-06-01");
        assert_eq!(json["applyLeave"]["method"], "POST");
        assert!(json["balances"]["availableSick"].is_number());
    }
}
