use std::sync::{Arc, Mutex};

use crate::api::EndpointClient;
use crate::models::application_view::RenderedList;

#[derive(Clone)]
pub struct AppState {
    pub client: EndpointClient,
    pub endpoint_url: String,
    pub custom_css: Option<String>,
    /// Last successfully rendered list, shown again when a poll fails.
    pub last_render: Arc<Mutex<Option<RenderedList>>>,
}

impl AppState {
    pub fn new(client: EndpointClient) -> Self {
        let endpoint_url = client.endpoint_url().to_string();
        Self {
            client,
            endpoint_url,
            custom_css: None,
            last_render: Arc::new(Mutex::new(None)),
        }
    }

    pub fn remember_render(&self, rendered: &RenderedList) {
        *self.last_render.lock().unwrap() = Some(rendered.clone());
    }

    pub fn last_render(&self) -> Option<RenderedList> {
        self.last_render.lock().unwrap().clone()
    }
}
