use serde::Serialize;

use crate::models::application::{Application, STATUS_CREATE_COMPLETE};
use crate::utils::format_status;

/// Lifecycle state derived from a single snapshot of `stack.status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LifecycleState {
    Unprovisioned,
    Ready,
    Transitioning,
}

impl LifecycleState {
    pub fn from_status(status: &str) -> Self {
        match status {
            "" => LifecycleState::Unprovisioned,
            STATUS_CREATE_COMPLETE => LifecycleState::Ready,
            _ => LifecycleState::Transitioning,
        }
    }
}

/// Control rendered next to an application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Affordance {
    /// Enabled "Create" button keyed on the application name.
    Create { application: String },
    /// Enabled "Delete" button keyed on the stack name.
    Delete { stack: String },
    /// Disabled spinner while the stack is changing.
    Pending { status: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApplicationItem {
    pub name: String,
    pub description: String,
    /// Hyperlink target for the name; `None` renders plain text.
    pub link: Option<String>,
    pub state: LifecycleState,
    pub affordance: Affordance,
    pub status_display: String,
}

impl ApplicationItem {
    pub fn from_application(app: &Application) -> Self {
        let state = LifecycleState::from_status(&app.stack.status);
        let affordance = match state {
            LifecycleState::Unprovisioned => Affordance::Create {
                application: app.name.clone(),
            },
            LifecycleState::Ready => Affordance::Delete {
                stack: app.stack.name.clone(),
            },
            LifecycleState::Transitioning => Affordance::Pending {
                status: app.stack.status.clone(),
            },
        };
        let link = if app.stack.url.is_empty() {
            None
        } else {
            Some(app.stack.url.clone())
        };
        ApplicationItem {
            name: app.name.clone(),
            description: app.description.clone(),
            link,
            state,
            affordance,
            status_display: format_status(&app.stack.status),
        }
    }

    pub fn is_transitioning(&self) -> bool {
        self.state == LifecycleState::Transitioning
    }

    pub fn is_enabled(&self) -> bool {
        !matches!(self.affordance, Affordance::Pending { .. })
    }

    pub fn button_label(&self) -> &'static str {
        match self.affordance {
            Affordance::Create { .. } => "Create",
            Affordance::Delete { .. } => "Delete",
            Affordance::Pending { .. } => "",
        }
    }

    pub fn button_class(&self) -> &'static str {
        match self.affordance {
            Affordance::Create { .. } => "ui green button",
            Affordance::Delete { .. } => "ui red button",
            Affordance::Pending { .. } => "ui teal disabled loading button",
        }
    }

    /// Form target of the enabled control.
    pub fn action_path(&self) -> &'static str {
        match self.affordance {
            Affordance::Create { .. } => "/stacks/create",
            Affordance::Delete { .. } => "/stacks/delete",
            Affordance::Pending { .. } => "",
        }
    }

    /// Name sent back to the endpoint when the control is used.
    pub fn action_target(&self) -> &str {
        match &self.affordance {
            Affordance::Create { application } => application,
            Affordance::Delete { stack } => stack,
            Affordance::Pending { .. } => "",
        }
    }
}

/// Output of one render cycle: the complete item list in response order
/// and whether any item is still transitioning.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenderedList {
    pub items: Vec<ApplicationItem>,
    pub transitioning: bool,
}

impl RenderedList {
    pub fn from_applications(list: &[Application]) -> Self {
        let items: Vec<ApplicationItem> = list.iter().map(ApplicationItem::from_application).collect();
        let transitioning = items.iter().any(ApplicationItem::is_transitioning);
        RenderedList { items, transitioning }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::application::Stack;

    fn app(name: &str, stack_name: &str, url: &str, status: &str) -> Application {
        Application {
            name: name.into(),
            description: format!("{} description", name),
            stack: Stack {
                name: stack_name.into(),
                url: url.into(),
                status: status.into(),
            },
        }
    }

    #[test]
    fn test_state_from_status() {
        assert_eq!(LifecycleState::from_status(""), LifecycleState::Unprovisioned);
        assert_eq!(LifecycleState::from_status("CREATE_COMPLETE"), LifecycleState::Ready);
        assert_eq!(LifecycleState::from_status("CREATE_IN_PROGRESS"), LifecycleState::Transitioning);
        assert_eq!(LifecycleState::from_status("DELETE_IN_PROGRESS"), LifecycleState::Transitioning);
        // Matching is exact.
        assert_eq!(LifecycleState::from_status("create_complete"), LifecycleState::Transitioning);
    }

    #[test]
    fn test_unprovisioned_item_creates_by_application_name() {
        let item = ApplicationItem::from_application(&app("A", "", "", ""));
        assert_eq!(item.affordance, Affordance::Create { application: "A".into() });
        assert!(item.is_enabled());
        assert_eq!(item.button_class(), "ui green button");
        assert_eq!(item.action_target(), "A");
        assert_eq!(item.link, None);
    }

    #[test]
    fn test_ready_item_deletes_by_stack_name() {
        let item = ApplicationItem::from_application(&app("A", "A20240101120000", "http://x", "CREATE_COMPLETE"));
        assert_eq!(item.affordance, Affordance::Delete { stack: "A20240101120000".into() });
        assert_eq!(item.action_target(), "A20240101120000");
        assert_eq!(item.action_path(), "/stacks/delete");
        assert_eq!(item.button_label(), "Delete");
        assert_eq!(item.link.as_deref(), Some("http://x"));
    }

    #[test]
    fn test_transitioning_item_is_disabled() {
        let item = ApplicationItem::from_application(&app("A", "A1", "", "DELETE_IN_PROGRESS"));
        assert!(item.is_transitioning());
        assert!(!item.is_enabled());
        assert_eq!(item.button_class(), "ui teal disabled loading button");
        assert_eq!(item.status_display, "Delete In Progress");
    }

    #[test]
    fn test_list_reduction() {
        let calm = RenderedList::from_applications(&[app("A", "", "", ""), app("B", "B1", "", "CREATE_COMPLETE")]);
        assert!(!calm.transitioning);

        let busy = RenderedList::from_applications(&[app("A", "", "", ""), app("B", "B1", "", "CREATE_IN_PROGRESS")]);
        assert!(busy.transitioning);
        assert_eq!(busy.len(), 2);
    }
}
