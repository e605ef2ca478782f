use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use yansi::Paint;

use crate::config::ControllerConfig;
use crate::error::ApiError;
use crate::models::ENCRYPTED_SENTINEL;

static SILENT: AtomicBool = AtomicBool::new(false);

pub fn set_silent(silent: bool) {
    SILENT.store(silent, Ordering::Relaxed);
}

fn log_output(msg: String) {
    if !SILENT.load(Ordering::Relaxed) {
        println!("{}", msg);
    }
}

/// Thin client over the controller REST API.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    api_prefix: String,
    token: String,
    /// `extra_vars` keys masked in request logs
    secret_vars: Vec<String>,
}

impl ApiClient {
    pub fn new(config: &ControllerConfig) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .user_agent(format!("launchpad/{}", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ApiError::Client(e.to_string()))?;
        Ok(ApiClient {
            client,
            base_url: config.controller_url.clone(),
            api_prefix: config.api_prefix.clone(),
            token: config.token.clone(),
            secret_vars: Vec::new(),
        })
    }

    /// A client that also masks these `extra_vars` keys when logging bodies.
    pub fn with_secret_vars<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.secret_vars.extend(keys.into_iter().map(Into::into));
        self
    }

    /// Full URL for an API path such as `/job_templates/7/`.
    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{}{}", self.base_url, self.api_prefix, endpoint)
    }

    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let value = self.send(Method::GET, endpoint, None).await?;
        decode(endpoint, value)
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(&self, endpoint: &str, body: &B) -> Result<T, ApiError> {
        let body = serde_json::to_value(body).map_err(|e| ApiError::Decode {
            endpoint: endpoint.to_string(),
            reason: e.to_string(),
        })?;
        let value = self.send(Method::POST, endpoint, Some(body)).await?;
        decode(endpoint, value)
    }

    /// Core request function: authentication, curl-style logging and error mapping.
    async fn send(&self, method: Method, endpoint: &str, body: Option<Value>) -> Result<Value, ApiError> {
        let url = self.url(endpoint);
        log_output(format!("Request:\n{}", self.curl_line(&method, &url, body.as_ref())));
        tracing::debug!(%method, %url, "controller request");

        let mut req = self.client.request(method, &url);
        if !self.token.is_empty() {
            req = req.bearer_auth(&self.token);
        }
        if let Some(ref b) = body {
            req = req.json(b);
        }

        let resp = req.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        let status = resp.status();
        let text = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;

        if !status.is_success() {
            log_output(format!(
                "Response:\n{}",
                Paint::new(format!("HTTP {}: {}", status, text)).fg(yansi::Color::Red)
            ));
            let parsed = serde_json::from_str::<Value>(&text).ok();
            let message = parsed
                .as_ref()
                .and_then(server_message)
                .unwrap_or_else(|| if text.trim().is_empty() { status.to_string() } else { text.clone() });
            tracing::warn!(status = status.as_u16(), %message, "controller request failed");
            return Err(ApiError::Status { status: status.as_u16(), message });
        }

        // Grayed out response body
        log_output(format!("Response:\n{}", Paint::new(&text).rgb(100, 100, 100)));

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&text).map_err(|e| ApiError::Decode {
            endpoint: endpoint.to_string(),
            reason: e.to_string(),
        })
    }

    fn curl_line(&self, method: &Method, url: &str, body: Option<&Value>) -> String {
        let mut parts = Vec::new();
        parts.push(Paint::new("curl").fg(yansi::Color::Green).bold().to_string());
        parts.push(format!("-X {}", Paint::new(method.as_str()).fg(yansi::Color::Yellow).bold()));
        parts.push(format!("'{}'", Paint::new(url).fg(yansi::Color::Cyan)));

        if !self.token.is_empty() {
            parts.push(format!(
                "{} {}",
                Paint::new("-H").fg(yansi::Color::Magenta),
                Paint::new("'Authorization: Bearer ****'").fg(yansi::Color::Magenta)
            ));
        }
        if let Some(d) = body {
            let d = &redact_body(d, &self.secret_vars);
            parts.push(format!(
                "{} {}",
                Paint::new("-H").fg(yansi::Color::Magenta),
                Paint::new("'Content-Type: application/json'").fg(yansi::Color::Magenta)
            ));
            let json_str = serde_json::to_string_pretty(d).unwrap_or_default();
            let escaped_json = json_str.replace('\'', "'\\''");
            parts.push(format!(
                "{} {}",
                Paint::new("-d").fg(yansi::Color::Blue),
                Paint::new(format!("'{}'", escaped_json)).fg(yansi::Color::White)
            ));
        }
        parts.join(" ")
    }
}

/// Copy of a request body safe to log: every credential password and the
/// given `extra_vars` keys are replaced with the encrypted sentinel.
fn redact_body(body: &Value, secret_vars: &[String]) -> Value {
    let mut body = body.clone();
    let Some(obj) = body.as_object_mut() else {
        return body;
    };
    if let Some(Value::Object(passwords)) = obj.get_mut("credential_passwords") {
        for value in passwords.values_mut() {
            *value = Value::String(ENCRYPTED_SENTINEL.to_string());
        }
    }
    if let Some(Value::Object(vars)) = obj.get_mut("extra_vars") {
        for key in secret_vars {
            if let Some(value) = vars.get_mut(key) {
                *value = Value::String(ENCRYPTED_SENTINEL.to_string());
            }
        }
    }
    body
}

fn decode<T: DeserializeOwned>(endpoint: &str, value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|e| ApiError::Decode {
        endpoint: endpoint.to_string(),
        reason: e.to_string(),
    })
}

/// Pull a readable message out of a controller error body.
///
/// The controller reports `{"detail": ...}`, `{"error": ...}`, or per-field
/// lists such as `{"extra_vars": ["..."]}`.
pub fn server_message(body: &Value) -> Option<String> {
    let obj = body.as_object()?;
    for key in ["detail", "error", "msg"] {
        if let Some(s) = obj.get(key).and_then(Value::as_str) {
            return Some(s.to_string());
        }
    }
    obj.iter().find_map(|(field, value)| {
        let text = match value {
            Value::String(s) => s.clone(),
            Value::Array(items) => items
                .iter()
                .filter_map(Value::as_str)
                .collect::<Vec<_>>()
                .join(" "),
            _ => return None,
        };
        if text.is_empty() {
            None
        } else {
            Some(format!("{}: {}", field, text))
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_server_message_prefers_detail() {
        let body = json!({"detail": "You do not have permission.", "error": "x"});
        assert_eq!(server_message(&body), Some("You do not have permission.".to_string()));
    }

    #[test]
    fn test_server_message_from_field_errors() {
        let body = json!({"extra_vars": ["Must be a valid JSON or YAML dictionary."]});
        assert_eq!(
            server_message(&body),
            Some("extra_vars: Must be a valid JSON or YAML dictionary.".to_string())
        );
    }

    #[test]
    fn test_server_message_none_for_non_objects() {
        assert_eq!(server_message(&json!(["oops"])), None);
        assert_eq!(server_message(&json!({})), None);
    }

    fn client() -> ApiClient {
        ApiClient::new(&ControllerConfig {
            controller_url: "https://controller.example.com".into(),
            token: "t0ken".into(),
            api_prefix: "/api/v2".into(),
            public_base_url: "https://controller.example.com".into(),
            timeout_secs: 5,
        })
        .unwrap()
    }

    #[test]
    fn test_curl_line_hides_secrets() {
        let api = client().with_secret_vars(["db_pass"]);
        let body = json!({
            "credential_passwords": {"ssh_password": "hunter2", "vault_password.prod": "v4ult"},
            "extra_vars": {"db_pass": "s3cr3t", "region": "eu"}
        });
        let line = api.curl_line(&Method::POST, "https://controller.example.com/api/v2/job_templates/7/launch/", Some(&body));
        assert!(!line.contains("hunter2"));
        assert!(!line.contains("v4ult"));
        assert!(!line.contains("s3cr3t"));
        assert!(!line.contains("t0ken"));
        assert!(line.contains("region"));
        assert!(line.contains(ENCRYPTED_SENTINEL));
    }

    #[test]
    fn test_redact_leaves_other_bodies_alone() {
        let body = json!({"name": "fresh", "organization": 1});
        assert_eq!(redact_body(&body, &["name".to_string()]), body);
        assert_eq!(redact_body(&json!(null), &[]), json!(null));
    }

    #[test]
    fn test_url_joins_prefix() {
        let config = ControllerConfig {
            controller_url: "https://controller.example.com".into(),
            token: String::new(),
            api_prefix: "/api/v2".into(),
            public_base_url: "https://controller.example.com".into(),
            timeout_secs: 5,
        };
        let api = ApiClient::new(&config).unwrap();
        assert_eq!(api.url("/job_templates/7/launch/"), "https://controller.example.com/api/v2/job_templates/7/launch/");
    }
}
