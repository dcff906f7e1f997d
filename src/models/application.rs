use serde::{Deserialize, Deserializer, Serialize};

/// Stack status reported once provisioning has finished.
pub const STATUS_CREATE_COMPLETE: &str = "CREATE_COMPLETE";

/// An application as reported by the status action.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub stack: Stack,
}

/// Provisioning record embedded in an [`Application`]. An empty `status`
/// means no stack has been created.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stack {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub status: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationListResponse {
    #[serde(default)]
    pub message: Option<String>,
    // The endpoint encodes an empty list as `null`.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub application_list: Vec<Application>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Application>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Application>>::deserialize(deserializer)?.unwrap_or_default())
}
