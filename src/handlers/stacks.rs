use axum::{
    extract::{Form, State},
    response::{IntoResponse, Redirect, Response},
};

use crate::actions::{run_action, ControlState, StackAction, ACTION_REFRESH};
use crate::models::{AppState, StackActionForm};
use crate::scheduler::PageRefresh;
use crate::templates::ActionPendingTemplate;

use super::helpers::{build_template_globals, render_template, TemplateGlobals};

pub async fn stack_create_post(State(state): State<AppState>, Form(form): Form<StackActionForm>) -> impl IntoResponse {
    let action = StackAction::Create { application: form.name };
    handle_stack_action(&state, action).await
}

pub async fn stack_delete_post(State(state): State<AppState>, Form(form): Form<StackActionForm>) -> impl IntoResponse {
    let action = StackAction::Delete { stack: form.name };
    handle_stack_action(&state, action).await
}

async fn handle_stack_action(state: &AppState, action: StackAction) -> Response {
    if action.target().is_empty() {
        tracing::warn!(action = action.verb(), "Ignoring stack action without a name");
        return Redirect::to("/").into_response();
    }
    let refresh = PageRefresh::new();
    let mut control = ControlState::default();

    match run_action(&state.client, &refresh, &action, &mut control).await {
        Ok(_) => {
            let TemplateGlobals { endpoint_host, version } = build_template_globals(state);
            render_template(ActionPendingTemplate {
                endpoint_host,
                version,
                verb_label: match action {
                    StackAction::Create { .. } => "Creating",
                    StackAction::Delete { .. } => "Deleting",
                },
                target: action.target().to_string(),
                refresh_after_secs: refresh.pending_secs().unwrap_or(ACTION_REFRESH.as_secs()),
            })
        }
        // Already logged; the dashboard shows the control enabled again.
        Err(_) => Redirect::to("/").into_response(),
    }
}
