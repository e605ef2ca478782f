use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Input value meaning "prompt for this secret at launch time".
pub const PROMPT_SENTINEL: &str = "ASK";

/// Credential inputs that may be deferred to launch time.
pub const PASSWORD_INPUTS: [&str; 4] = ["password", "become_password", "ssh_key_unlock", "vault_password"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credential {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub credential_type: Option<i64>,
    /// Only present on credentials fetched from the credentials endpoint;
    /// launch defaults carry `passwords_needed` instead.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inputs: Option<Map<String, Value>>,
}

impl Credential {
    /// Whether any password input is set to prompt on launch.
    ///
    /// `None` when the credential carries no inputs at all.
    pub fn prompts_for_password(&self) -> Option<bool> {
        let inputs = self.inputs.as_ref()?;
        Some(
            PASSWORD_INPUTS
                .iter()
                .any(|name| inputs.get(*name).and_then(Value::as_str) == Some(PROMPT_SENTINEL)),
        )
    }
}
