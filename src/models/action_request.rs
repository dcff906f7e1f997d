use serde::{Deserialize, Serialize};

/// Body of a request to the action endpoint.
///
/// Serializes as `{"action":"status"}`, `{"action":"create","name":..}`
/// or `{"action":"delete","name":..}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum ActionRequest {
    Status,
    /// `name` is the application name.
    Create { name: String },
    /// `name` is the stack name, which may differ from the application name.
    Delete { name: String },
}

impl ActionRequest {
    pub fn action(&self) -> &'static str {
        match self {
            ActionRequest::Status => "status",
            ActionRequest::Create { .. } => "create",
            ActionRequest::Delete { .. } => "delete",
        }
    }
}
