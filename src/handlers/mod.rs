pub mod helpers;
pub mod dashboard;
pub mod stacks;
