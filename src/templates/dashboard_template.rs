use askama::Template;
use crate::models::ApplicationItem;

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate<'a> {
    pub endpoint_host: String,
    pub version: &'static str,
    pub items: &'a [ApplicationItem],
    /// Seconds until the page reloads itself; `None` stops polling.
    pub refresh_after_secs: Option<u64>,
    /// The status request failed and `items` is the last known list.
    pub stale: bool,
    pub updated_at: String,
}
