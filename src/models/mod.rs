pub mod action_request;
pub mod app_state;
pub mod application;
pub mod application_view;
pub mod stack_action_form;

pub use action_request::ActionRequest;
pub use app_state::AppState;
pub use application::{Application, ApplicationListResponse, Stack, STATUS_CREATE_COMPLETE};
pub use application_view::{Affordance, ApplicationItem, LifecycleState, RenderedList};
pub use stack_action_form::StackActionForm;
