use std::env;
use std::path::Path;

// Default configuration constants
pub const DEFAULT_CONTROLLER_URL: &str = "http://localhost:8043";
pub const DEFAULT_CONTROLLER_TOKEN: &str = "";
pub const DEFAULT_API_PREFIX: &str = "/api/v2";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for the controller REST API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerConfig {
    pub controller_url: String,
    pub token: String,
    pub api_prefix: String,
    /// Base of the web UI, used to print job output links.
    pub public_base_url: String,
    pub timeout_secs: u64,
}

impl ControllerConfig {
    pub fn from_env() -> Self {
        let controller_url = get_controller_url();
        let public_base_url = get_public_base_url(&controller_url);
        ControllerConfig {
            controller_url,
            token: get_controller_token(),
            api_prefix: get_api_prefix(),
            public_base_url,
            timeout_secs: get_timeout_secs(),
        }
    }
}

pub fn load_env_file(env_file: Option<&str>) {
    if let Some(path) = env_file {
        dotenvy::from_path(Path::new(path)).ok();
    } else {
        dotenvy::dotenv().ok();
    }
}

pub fn get_controller_url() -> String {
    sanitize_base_url(&env::var("CONTROLLER_URL").unwrap_or_else(|_| DEFAULT_CONTROLLER_URL.to_string()))
}

pub fn get_controller_token() -> String {
    env::var("CONTROLLER_TOKEN").unwrap_or_else(|_| DEFAULT_CONTROLLER_TOKEN.to_string())
}

pub fn get_api_prefix() -> String {
    normalize_api_prefix(&env::var("CONTROLLER_API_PREFIX").unwrap_or_else(|_| DEFAULT_API_PREFIX.to_string()))
}

/// Falls back to the controller URL when `PUBLIC_BASE_URL` is unset or blank.
pub fn get_public_base_url(controller_url: &str) -> String {
    match env::var("PUBLIC_BASE_URL") {
        Ok(raw) if !raw.trim().is_empty() => sanitize_base_url(&raw),
        _ => controller_url.to_string(),
    }
}

pub fn get_timeout_secs() -> u64 {
    env::var("CONTROLLER_TIMEOUT_SECS")
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|secs| *secs > 0)
        .unwrap_or(DEFAULT_TIMEOUT_SECS)
}

pub fn sanitize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_CONTROLLER_URL.to_string()
    } else {
        trimmed.to_string()
    }
}

pub fn normalize_api_prefix(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}
