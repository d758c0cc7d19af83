use serde::{Deserialize, Serialize};

/// A monitored bot; owns the stats rows and lends its display name to the
/// series returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bot {
    pub id: i64,
    pub name: String,
}
