use once_cell::sync::Lazy;
use stackboard::config;
use std::env;
use std::sync::Mutex;
use std::time::Duration;

// Tests below mutate process-wide environment variables.
static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

#[test]
fn test_sanitize_base_url_removes_trailing_slash() {
    assert_eq!(
        config::sanitize_base_url("https://abc123.execute-api.us-east-1.amazonaws.com/"),
        "https://abc123.execute-api.us-east-1.amazonaws.com"
    );
}

#[test]
fn test_sanitize_base_url_multiple_trailing_slashes_and_whitespace() {
    assert_eq!(
        config::sanitize_base_url("  https://dash.example.com///  "),
        "https://dash.example.com"
    );
}

#[test]
fn test_sanitize_base_url_empty_string() {
    assert_eq!(config::sanitize_base_url(""), "http://localhost:5000");
    assert_eq!(config::sanitize_base_url("   "), "http://localhost:5000");
}

#[test]
fn test_sanitize_api_path() {
    assert_eq!(config::sanitize_api_path("Prod/api"), "/Prod/api");
    assert_eq!(config::sanitize_api_path("/Prod/api/"), "/Prod/api");
    assert_eq!(config::sanitize_api_path(""), "/");
    assert_eq!(config::sanitize_api_path("/"), "/");
}

#[test]
fn test_endpoint_url_joins_base_and_path() {
    assert_eq!(
        config::endpoint_url("https://dash.example.com", "/Prod/api"),
        "https://dash.example.com/Prod/api"
    );
    assert_eq!(config::endpoint_url("https://dash.example.com", "/"), "https://dash.example.com/");
}

#[test]
fn test_get_endpoint_url_from_env() {
    let _guard = ENV_LOCK.lock().unwrap();
    env::set_var("API_BASE_URL", "https://dash.example.com/");
    env::set_var("API_PATH", "Prod/api");

    assert_eq!(config::get_endpoint_url(), "https://dash.example.com/Prod/api");

    env::remove_var("API_BASE_URL");
    env::remove_var("API_PATH");
}

#[test]
fn test_get_endpoint_url_uses_defaults() {
    let _guard = ENV_LOCK.lock().unwrap();
    env::remove_var("API_BASE_URL");
    env::remove_var("API_PATH");

    assert_eq!(config::get_endpoint_url(), "http://localhost:5000/api");
}

#[test]
fn test_request_timeout() {
    let _guard = ENV_LOCK.lock().unwrap();
    env::remove_var("REQUEST_TIMEOUT_SECS");
    assert_eq!(config::get_request_timeout(), None);

    env::set_var("REQUEST_TIMEOUT_SECS", "30");
    assert_eq!(config::get_request_timeout(), Some(Duration::from_secs(30)));

    env::set_var("REQUEST_TIMEOUT_SECS", "0");
    assert_eq!(config::get_request_timeout(), None);

    env::set_var("REQUEST_TIMEOUT_SECS", "soon");
    assert_eq!(config::get_request_timeout(), None);

    env::remove_var("REQUEST_TIMEOUT_SECS");
}
