pub mod dashboard_template;
pub mod action_pending_template;

pub use dashboard_template::DashboardTemplate;
pub use action_pending_template::ActionPendingTemplate;
