use serde::Serialize;
use serde_json::{Map, Value};
use utoipa::ToSchema;

use crate::model::case::Case;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CaseView {
    #[schema(example = "5003000000D8cuI")]
    pub id: String,
    #[schema(example = "Laptop replacement")]
    pub subject: String,
    #[schema(example = "00001026", nullable = true)]
    pub case_number: Option<String>,
    #[schema(example = "New", nullable = true)]
    pub status: Option<String>,
}

impl CaseView {
    /// Subject falls back to the case number, then to `"Case"`.
    pub fn from_case(case: &Case) -> Self {
        let subject = non_blank(case.subject.as_deref())
            .or_else(|| non_blank(case.case_number.as_deref()))
            .unwrap_or("Case")
            .to_string();

        Self {
            id: case.id.clone().unwrap_or_default(),
            subject,
            case_number: case.case_number.clone(),
            status: case.status.clone(),
        }
    }
}

fn non_blank(s: Option<&str>) -> Option<&str> {
    s.filter(|v| !v.trim().is_empty())
}

/// Anything but a JSON array yields no cases. Non-object elements are
/// skipped; fields of an unexpected type count as absent.
pub fn normalize_cases(raw: &Value) -> Vec<CaseView> {
    let Some(items) = raw.as_array() else {
        if !raw.is_null() {
            tracing::warn!("Case payload is not a list, ignoring");
        }
        return Vec::new();
    };

    items
        .iter()
        .filter_map(Value::as_object)
        .map(|obj| CaseView::from_case(&case_from_object(obj)))
        .collect()
}

fn case_from_object(obj: &Map<String, Value>) -> Case {
    Case {
        id: text_field(obj, &["id", "Id"]),
        subject: text_field(obj, &["subject", "Subject"]),
        case_number: text_field(obj, &["caseNumber", "CaseNumber"]),
        status: text_field(obj, &["status", "Status"]),
    }
}

fn text_field(obj: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|k| match obj.get(*k)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}
