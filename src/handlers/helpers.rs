use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::models::AppState;

#[derive(Default)]
pub struct TemplateGlobals {
    pub endpoint_host: String,
    pub version: &'static str,
}

pub fn build_template_globals(state: &AppState) -> TemplateGlobals {
    TemplateGlobals {
        endpoint_host: crate::utils::hostname_from_url(&state.endpoint_url),
        version: env!("CARGO_PKG_VERSION"),
    }
}

pub fn render_template<T: askama::Template>(t: T) -> Response {
    match t.render() {
        Ok(body) => Html(body).into_response(),
        Err(e) => {
            tracing::error!(%e, "Template render error");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}

pub fn now_display() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
