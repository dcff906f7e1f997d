//! Status polling and rendering.
//!
//! Every poll fetches the complete application list, rebuilds the view
//! from scratch and decides whether another refresh is needed. Nothing is
//! remembered between polls.

use std::time::Duration;

use crate::api::{load_applications, Transport, TransportError};
use crate::models::{Application, RenderedList};
use crate::scheduler::RefreshScheduler;

/// Delay before refreshing while any stack is transitioning.
pub const TRANSITION_REFRESH: Duration = Duration::from_secs(60);

pub struct Reconciler<T> {
    transport: T,
}

impl<T: Transport> Reconciler<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetch the status of every application and render it.
    ///
    /// Failures are logged and returned; nothing is retried and no refresh
    /// is scheduled.
    pub async fn poll<S: RefreshScheduler + ?Sized>(&self, scheduler: &S) -> Result<RenderedList, TransportError> {
        match load_applications(&self.transport).await {
            Ok(list) => Ok(self.render(&list, scheduler)),
            Err(e) => {
                tracing::error!(error = %e.message(), "Status poll failed");
                Err(e)
            }
        }
    }

    /// Build the full item list for `list` and schedule a refresh when any
    /// stack is still transitioning.
    pub fn render<S: RefreshScheduler + ?Sized>(&self, list: &[Application], scheduler: &S) -> RenderedList {
        let rendered = RenderedList::from_applications(list);
        if rendered.transitioning {
            scheduler.schedule_refresh(TRANSITION_REFRESH);
        }
        tracing::info!(
            items = rendered.len(),
            transitioning = rendered.transitioning,
            "Rendered application list"
        );
        rendered
    }
}
