use serde::Serialize;
use strum_macros::{AsRefStr, Display, EnumIter};
use utoipa::ToSchema;

/// Display bucket for a request's status.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, ToSchema, Display, AsRefStr, EnumIter,
)]
pub enum StatusCategory {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl StatusCategory {
    /// Only the exact labels `Approved` and `Rejected` leave `Pending`.
    pub fn classify(raw: Option<&str>) -> Self {
        match raw {
            Some("Approved") => StatusCategory::Approved,
            Some("Rejected") => StatusCategory::Rejected,
            _ => StatusCategory::Pending,
        }
    }
}
