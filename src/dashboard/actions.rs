use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use utoipa::ToSchema;

/// Where the platform should take the user next.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct NavigationTarget {
    #[schema(example = "POST")]
    pub method: String,
    #[schema(example = "https://hrm.example.com/api/v1/leave")]
    pub href: String,
}

impl NavigationTarget {
    pub fn new(method: &str, href: impl Into<String>) -> Self {
        Self {
            method: method.to_string(),
            href: href.into(),
        }
    }
}

pub const CASE_ID_PLACEHOLDER: &str = "{id}";

type ApplyLeaveHook = Arc<dyn Fn() -> NavigationTarget + Send + Sync>;
type ViewCaseHook = Arc<dyn Fn(&str) -> NavigationTarget + Send + Sync>;

/// User actions the dashboard offers but does not carry out itself.
#[derive(Clone)]
pub struct DashboardActions {
    apply_leave: ApplyLeaveHook,
    view_case: ViewCaseHook,
}

impl DashboardActions {
    pub fn new<A, V>(apply_leave: A, view_case: V) -> Self
    where
        A: Fn() -> NavigationTarget + Send + Sync + 'static,
        V: Fn(&str) -> NavigationTarget + Send + Sync + 'static,
    {
        Self {
            apply_leave: Arc::new(apply_leave),
            view_case: Arc::new(view_case),
        }
    }

    /// Hooks into the HRM platform's leave form and case pages. Every
    /// `{id}` in `case_view_url` is replaced by the case id.
    pub fn from_urls(leave_create_url: &str, case_view_url: &str) -> Self {
        let leave_create_url = leave_create_url.to_string();
        let case_view_url = case_view_url.to_string();
        Self::new(
            move || NavigationTarget::new("POST", leave_create_url.as_str()),
            move |case_id| {
                NavigationTarget::new("GET", case_view_url.replace(CASE_ID_PLACEHOLDER, case_id))
            },
        )
    }

    pub fn apply_leave(&self) -> NavigationTarget {
        (self.apply_leave)()
    }

    pub fn view_case(&self, case_id: &str) -> NavigationTarget {
        (self.view_case)(case_id)
    }
}

impl fmt::Debug for DashboardActions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DashboardActions").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_urls_are_emitted() {
        let actions = DashboardActions::from_urls(
            "https://hrm.example.com/api/v1/leave",
            "https://hrm.example.com/cases/{id}/view",
        );
        assert_eq!(
            actions.apply_leave(),
            NavigationTarget::new("POST", "https://hrm.example.com/api/v1/leave")
        );
        assert_eq!(actions.view_case("42").href, "https://hrm.example.com/cases/42/view");
        assert_eq!(actions.view_case("42").method, "GET");
    }

    #[test]
    fn custom_hooks_are_invoked() {
        let actions = DashboardActions::new(
            || NavigationTarget::new("GET", "/lightning/o/Leave__c/new"),
            |id| NavigationTarget::new("GET", format!("/lightning/r/Case/{id}/view")),
        );
        assert_eq!(actions.apply_leave().href, "/lightning/o/Leave__c/new");
        assert_eq!(actions.view_case("500").href, "/lightning/r/Case/500/view");
    }
}
