use derive_more::Display;
use serde::Serialize;
use utoipa::ToSchema;

use crate::platform::PlatformError;

/// One failed input channel. Never raised; collected into the view.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum LoadError {
    #[display(fmt = "Error loading leave balances: {}", _0)]
    Balance(PlatformError),
    #[display(fmt = "Error loading leave records: {}", _0)]
    LeaveList(PlatformError),
    #[display(fmt = "Error loading cases: {}", _0)]
    CaseList(PlatformError),
    #[display(fmt = "Error loading leave hours: {}", _0)]
    Hours(PlatformError),
}

impl std::error::Error for LoadError {}

impl LoadError {
    pub fn channel(&self) -> &'static str {
        match self {
            LoadError::Balance(_) => "balance",
            LoadError::LeaveList(_) => "leaveList",
            LoadError::CaseList(_) => "caseList",
            LoadError::Hours(_) => "hours",
        }
    }

    /// Text for a banner or toast: the platform's own message when it sent
    /// one, otherwise a fixed per-channel fallback.
    pub fn user_message(&self) -> String {
        let (source, fallback) = match self {
            LoadError::Balance(e) => (e, "Error loading leave balances"),
            LoadError::LeaveList(e) => (e, "Error loading leave records"),
            LoadError::CaseList(e) => (e, "Error loading cases"),
            LoadError::Hours(e) => (e, "Error loading leave hours"),
        };
        source.message().unwrap_or(fallback).to_string()
    }

    pub fn notice(&self) -> ErrorNotice {
        ErrorNotice {
            channel: self.channel().to_string(),
            message: self.user_message(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ErrorNotice {
    #[schema(example = "leaveList")]
    pub channel: String,
    #[schema(example = "Error loading leave records")]
    pub message: String,
}
