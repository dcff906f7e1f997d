//! Create/delete entry points.
//!
//! These bypass the reconciler: they fire the request and, once the
//! endpoint accepts it, schedule a short refresh so the next poll shows
//! the new stack status.

use std::time::Duration;

use serde_json::Value;

use crate::api::{create_stack, delete_stack, Transport, TransportError};
use crate::scheduler::RefreshScheduler;

/// Delay before refreshing after an accepted create/delete.
pub const ACTION_REFRESH: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StackAction {
    /// Create a stack for the named application.
    Create { application: String },
    /// Delete the named stack.
    Delete { stack: String },
}

impl StackAction {
    pub fn verb(&self) -> &'static str {
        match self {
            StackAction::Create { .. } => "create",
            StackAction::Delete { .. } => "delete",
        }
    }

    pub fn target(&self) -> &str {
        match self {
            StackAction::Create { application } => application,
            StackAction::Delete { stack } => stack,
        }
    }
}

/// Visual state of the control that triggered an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControlState {
    #[default]
    Enabled,
    /// Disabled with a spinner.
    Loading,
}

/// Run `action`, driving `control` and scheduling the follow-up refresh.
///
/// On failure the message is logged, nothing is scheduled and the control
/// goes back to [`ControlState::Enabled`].
pub async fn run_action<T, S>(
    transport: &T,
    scheduler: &S,
    action: &StackAction,
    control: &mut ControlState,
) -> Result<Value, TransportError>
where
    T: Transport,
    S: RefreshScheduler + ?Sized,
{
    *control = ControlState::Loading;
    let result = match action {
        StackAction::Create { application } => create_stack(transport, application).await,
        StackAction::Delete { stack } => delete_stack(transport, stack).await,
    };
    match &result {
        Ok(resp) => {
            tracing::info!(action = action.verb(), target = action.target(), response = %resp, "Stack action accepted");
            scheduler.schedule_refresh(ACTION_REFRESH);
        }
        Err(e) => {
            tracing::error!(action = action.verb(), target = action.target(), error = %e.message(), "Stack action failed");
            *control = ControlState::Enabled;
        }
    }
    result
}
