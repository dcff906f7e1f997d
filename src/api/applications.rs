use serde_json::Value;

use super::client::Transport;
use super::error::TransportError;
use crate::models::{ActionRequest, Application, ApplicationListResponse};

/// Issue a `status` action and decode the application list.
pub async fn load_applications<T: Transport>(transport: &T) -> Result<Vec<Application>, TransportError> {
    let payload = transport.send(&ActionRequest::Status).await?;
    decode_application_list(payload).map(|resp| resp.application_list)
}

pub fn decode_application_list(payload: Value) -> Result<ApplicationListResponse, TransportError> {
    serde_json::from_value(payload).map_err(|e| TransportError::Parse(e.to_string()))
}

/// Request creation of a stack for the named application.
pub async fn create_stack<T: Transport>(transport: &T, application: &str) -> Result<Value, TransportError> {
    transport
        .send(&ActionRequest::Create {
            name: application.to_string(),
        })
        .await
}

/// Request deletion of the named stack.
pub async fn delete_stack<T: Transport>(transport: &T, stack: &str) -> Result<Value, TransportError> {
    transport
        .send(&ActionRequest::Delete {
            name: stack.to_string(),
        })
        .await
}
