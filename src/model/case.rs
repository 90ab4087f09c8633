use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Case {
    pub id: Option<String>,
    pub subject: Option<String>,
    pub case_number: Option<String>,
    pub status: Option<String>,
}
