use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Serialize;

use crate::models::{AppState, RenderedList};
use crate::reconciler::Reconciler;
use crate::scheduler::PageRefresh;
use crate::templates::DashboardTemplate;

use super::helpers::{build_template_globals, now_display, render_template, TemplateGlobals};

/// Result of a page-level poll, ready for either the HTML page or JSON.
struct PagePoll {
    rendered: RenderedList,
    refresh_after_secs: Option<u64>,
    stale: bool,
    error: Option<String>,
}

async fn poll_for_page(state: &AppState) -> PagePoll {
    let refresh = PageRefresh::new();
    let reconciler = Reconciler::new(&state.client);
    match reconciler.poll(&refresh).await {
        Ok(rendered) => {
            state.remember_render(&rendered);
            PagePoll {
                rendered,
                refresh_after_secs: refresh.pending_secs(),
                stale: false,
                error: None,
            }
        }
        Err(e) => {
            // A failed poll keeps whatever was last on screen and stops refreshing.
            tracing::warn!("Serving last rendered list after failed poll");
            PagePoll {
                rendered: state.last_render().unwrap_or_default(),
                refresh_after_secs: None,
                stale: true,
                error: Some(e.message()),
            }
        }
    }
}

pub async fn dashboard_get(State(state): State<AppState>) -> impl IntoResponse {
    let page = poll_for_page(&state).await;
    let TemplateGlobals { endpoint_host, version } = build_template_globals(&state);
    render_template(DashboardTemplate {
        endpoint_host,
        version,
        items: &page.rendered.items,
        refresh_after_secs: page.refresh_after_secs,
        stale: page.stale,
        updated_at: now_display(),
    })
}

#[derive(Serialize)]
pub struct DashboardJson {
    #[serde(flatten)]
    pub rendered: RenderedList,
    pub refresh_after_secs: Option<u64>,
    pub stale: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub async fn dashboard_json(State(state): State<AppState>) -> impl IntoResponse {
    let page = poll_for_page(&state).await;
    let status = if page.stale {
        StatusCode::SERVICE_UNAVAILABLE
    } else {
        StatusCode::OK
    };
    (
        status,
        Json(DashboardJson {
            rendered: page.rendered,
            refresh_after_secs: page.refresh_after_secs,
            stale: page.stale,
            error: page.error,
        }),
    )
}
