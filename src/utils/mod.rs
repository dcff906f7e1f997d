// URL handling utilities
pub mod url_parser;

// Display helpers
pub mod status_formatter;

pub use url_parser::hostname_from_url;
pub use status_formatter::format_status;
