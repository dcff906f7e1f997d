//! Provisioning dashboard for stack-backed applications.
//!
//! The crate polls a single action endpoint for the status of every
//! application, derives a lifecycle state per application, renders the
//! result as a list of view models and decides whether another refresh
//! is needed. The same engine drives the web dashboard (`serve`) and the
//! terminal commands.

pub mod actions;
pub mod api;
pub mod config;
pub mod handlers;
pub mod models;
pub mod reconciler;
pub mod routes;
pub mod scheduler;
pub mod templates;
pub mod utils;
