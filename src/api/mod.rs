// Action endpoint transport
pub mod client;
pub mod error;
pub mod applications;

// Re-export commonly used items
pub use client::{set_silent, EndpointClient, Transport};
pub use error::TransportError;
pub use applications::{create_stack, decode_application_list, delete_stack, load_applications};
