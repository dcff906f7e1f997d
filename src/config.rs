use std::env;
use std::path::Path;
use std::time::Duration;

// Default configuration constants
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_API_BASE_URL: &str = "";
pub const DEFAULT_API_PATH: &str = "/api";

pub fn load_env_file(env_file: Option<&str>) {
    if let Some(path) = env_file {
        dotenvy::from_path(Path::new(path)).ok();
    } else {
        dotenvy::dotenv().ok();
    }
}

pub fn get_api_base_url() -> String {
    sanitize_base_url(&env::var("API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string()))
}

pub fn get_api_path() -> String {
    sanitize_api_path(&env::var("API_PATH").unwrap_or_else(|_| DEFAULT_API_PATH.to_string()))
}

/// Full URL of the action endpoint: base URL joined with the API path.
pub fn get_endpoint_url() -> String {
    endpoint_url(&get_api_base_url(), &get_api_path())
}

/// Optional client-wide request timeout. Unset, empty, zero or
/// unparseable values mean no timeout.
pub fn get_request_timeout() -> Option<Duration> {
    let raw = env::var("REQUEST_TIMEOUT_SECS").unwrap_or_default();
    match raw.trim().parse::<u64>() {
        Ok(0) | Err(_) => None,
        Ok(secs) => Some(Duration::from_secs(secs)),
    }
}

pub fn endpoint_url(base_url: &str, api_path: &str) -> String {
    if api_path == "/" {
        return format!("{}/", base_url);
    }
    format!("{}{}", base_url, api_path)
}

pub fn sanitize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        "http://localhost:5000".to_string()
    } else {
        trimmed.to_string()
    }
}

pub fn sanitize_api_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{}", trimmed)
    }
}
