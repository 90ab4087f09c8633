use serde::Serialize;
use utoipa::ToSchema;

use super::Channel;
use super::error::LoadError;
use crate::model::leave_balance::{LeaveBalance, LeaveBalanceSetting, LeaveHoursBalance};

/// Day balances with every figure filled in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BalanceView {
    #[schema(example = 12.0)]
    pub earned: f64,
    #[schema(example = 5.0)]
    pub sick: f64,
    pub booked_earned: f64,
    pub booked_sick: f64,
    pub booked_unpaid: f64,
    pub available_earned: f64,
    pub available_sick: f64,
}

impl BalanceView {
    /// Missing figures become 0. So does everything when `failed` is set.
    /// Values are passed through as-is, negatives included.
    pub fn derive(record: Option<&LeaveBalance>, failed: bool) -> Self {
        let Some(b) = record.filter(|_| !failed) else {
            return Self::default();
        };

        Self {
            earned: b.earned.unwrap_or(0.0),
            sick: b.sick.unwrap_or(0.0),
            booked_earned: b.booked_earned.unwrap_or(0.0),
            booked_sick: b.booked_sick.unwrap_or(0.0),
            booked_unpaid: b.booked_unpaid.unwrap_or(0.0),
            available_earned: b.available_earned.unwrap_or(0.0),
            available_sick: b.available_sick.unwrap_or(0.0),
        }
    }

    pub fn from_channel(channel: &Channel<LeaveBalance>) -> (Self, Option<LoadError>) {
        match channel {
            Channel::Loaded(b) => (Self::derive(Some(b), false), None),
            Channel::Pending => (Self::default(), None),
            Channel::Failed(e) => {
                tracing::error!(error = %e, "Error loading balances");
                (
                    Self::derive(None, true),
                    Some(LoadError::Balance(e.clone())),
                )
            }
        }
    }
}

/// Hour balances next to the organisation default allotment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HoursBalanceView {
    #[schema(example = 96.0)]
    pub earned_casual_hours: f64,
    #[schema(example = 40.0)]
    pub sick_hours: f64,
    #[schema(example = 15.0)]
    pub setting_earned_casual: f64,
    #[schema(example = 10.0)]
    pub setting_sick: f64,
    pub has_error: bool,
}

impl HoursBalanceView {
    /// A failed hours load is flagged; a failed setting load is not, its
    /// figures just drop back to 0.
    pub fn derive(
        hours: &Channel<LeaveHoursBalance>,
        setting: &Channel<Option<LeaveBalanceSetting>>,
    ) -> (Self, Option<LoadError>) {
        let mut view = Self::default();
        let mut error = None;

        match hours {
            Channel::Loaded(h) => {
                view.earned_casual_hours = h.annual_leave_hours.unwrap_or(0.0);
                view.sick_hours = h.sick_leave_hours.unwrap_or(0.0);
            }
            Channel::Failed(e) => {
                tracing::error!(error = %e, "Error loading leave hours");
                view.has_error = true;
                error = Some(LoadError::Hours(e.clone()));
            }
            Channel::Pending => {}
        }

        if let Channel::Loaded(Some(s)) = setting {
            view.setting_earned_casual = s.earned_casual_leave.unwrap_or(0.0);
            view.setting_sick = s.sick_leave.unwrap_or(0.0);
        } else if let Channel::Failed(e) = setting {
            tracing::debug!(error = %e, "Balance setting unavailable");
        }

        (view, error)
    }
}
