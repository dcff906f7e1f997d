use askama::Template;

#[derive(Template)]
#[template(path = "action_pending.html")]
pub struct ActionPendingTemplate {
    pub endpoint_host: String,
    pub version: &'static str,
    /// "Creating" or "Deleting".
    pub verb_label: &'static str,
    pub target: String,
    pub refresh_after_secs: u64,
}
