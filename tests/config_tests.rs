use launchpad::config;
use std::env;

#[test]
fn test_sanitize_base_url_removes_trailing_slash() {
    assert_eq!(
        config::sanitize_base_url("https://controller.example.com/"),
        "https://controller.example.com"
    );
}

#[test]
fn test_sanitize_base_url_multiple_trailing_slashes() {
    assert_eq!(
        config::sanitize_base_url("https://controller.example.com///"),
        "https://controller.example.com"
    );
}

#[test]
fn test_sanitize_base_url_with_whitespace() {
    assert_eq!(
        config::sanitize_base_url("  https://controller.example.com/  "),
        "https://controller.example.com"
    );
}

#[test]
fn test_sanitize_base_url_empty_string() {
    assert_eq!(config::sanitize_base_url(""), "http://localhost:8043");
    assert_eq!(config::sanitize_base_url("   "), "http://localhost:8043");
}

#[test]
fn test_normalize_api_prefix() {
    assert_eq!(config::normalize_api_prefix("/api/v2/"), "/api/v2");
    assert_eq!(config::normalize_api_prefix("api/v2"), "/api/v2");
    assert_eq!(config::normalize_api_prefix("/"), "");
    assert_eq!(config::normalize_api_prefix(""), "");
}

#[test]
fn test_get_controller_url_from_env() {
    env::set_var("CONTROLLER_URL", "https://awx.internal/");

    let result = config::get_controller_url();

    assert_eq!(result, "https://awx.internal");

    // Clean up
    env::remove_var("CONTROLLER_URL");
}

#[test]
fn test_get_api_prefix_from_env() {
    env::set_var("CONTROLLER_API_PREFIX", "/controller/api/v2/");
    assert_eq!(config::get_api_prefix(), "/controller/api/v2");
    env::remove_var("CONTROLLER_API_PREFIX");
}

#[test]
fn test_get_public_base_url_falls_back_to_controller() {
    env::remove_var("PUBLIC_BASE_URL");
    assert_eq!(config::get_public_base_url("https://awx.internal"), "https://awx.internal");

    env::set_var("PUBLIC_BASE_URL", "https://ui.example.com/");
    assert_eq!(config::get_public_base_url("https://awx.internal"), "https://ui.example.com");
    env::remove_var("PUBLIC_BASE_URL");
}

#[test]
fn test_get_timeout_secs_rejects_garbage() {
    env::set_var("CONTROLLER_TIMEOUT_SECS", "abc");
    assert_eq!(config::get_timeout_secs(), config::DEFAULT_TIMEOUT_SECS);

    env::set_var("CONTROLLER_TIMEOUT_SECS", "0");
    assert_eq!(config::get_timeout_secs(), config::DEFAULT_TIMEOUT_SECS);

    env::set_var("CONTROLLER_TIMEOUT_SECS", " 90 ");
    assert_eq!(config::get_timeout_secs(), 90);

    env::remove_var("CONTROLLER_TIMEOUT_SECS");
}
