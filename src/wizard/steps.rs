use serde::{Deserialize, Serialize};

use crate::models::{LaunchConfiguration, LaunchFlag, WizardFormState};

/// Launch wizard steps, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WizardStep {
    Inventory,
    Credentials,
    CredentialPasswords,
    ExecutionEnvironment,
    InstanceGroups,
    OtherPrompts,
    Survey,
    Review,
}

impl WizardStep {
    pub const ALL: [WizardStep; 8] = [
        WizardStep::Inventory,
        WizardStep::Credentials,
        WizardStep::CredentialPasswords,
        WizardStep::ExecutionEnvironment,
        WizardStep::InstanceGroups,
        WizardStep::OtherPrompts,
        WizardStep::Survey,
        WizardStep::Review,
    ];

    pub fn id(self) -> &'static str {
        match self {
            WizardStep::Inventory => "inventory",
            WizardStep::Credentials => "credentials",
            WizardStep::CredentialPasswords => "credential-passwords",
            WizardStep::ExecutionEnvironment => "execution-environment",
            WizardStep::InstanceGroups => "instance-groups",
            WizardStep::OtherPrompts => "other-prompts",
            WizardStep::Survey => "survey",
            WizardStep::Review => "review",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            WizardStep::Inventory => "Inventory",
            WizardStep::Credentials => "Credentials",
            WizardStep::CredentialPasswords => "Credential Passwords",
            WizardStep::ExecutionEnvironment => "Execution Environment",
            WizardStep::InstanceGroups => "Instance Groups",
            WizardStep::OtherPrompts => "Other prompts",
            WizardStep::Survey => "Survey",
            WizardStep::Review => "Review",
        }
    }

    /// Position in the fixed step order; hidden steps keep their slot.
    pub fn index(self) -> usize {
        WizardStep::ALL.iter().position(|s| *s == self).unwrap_or(WizardStep::ALL.len())
    }

    pub fn from_id(id: &str) -> Option<Self> {
        WizardStep::ALL.iter().copied().find(|s| s.id() == id)
    }

    pub fn is_visible(self, config: &LaunchConfiguration, form: &WizardFormState) -> bool {
        match self {
            WizardStep::Inventory => config.asks(LaunchFlag::Inventory),
            WizardStep::Credentials => config.asks(LaunchFlag::Credential),
            WizardStep::CredentialPasswords => needs_credential_passwords(config, form),
            WizardStep::ExecutionEnvironment => config.asks(LaunchFlag::ExecutionEnvironment),
            WizardStep::InstanceGroups => config.asks(LaunchFlag::InstanceGroups),
            WizardStep::OtherPrompts => config.asks_other_prompts(),
            WizardStep::Survey => config.survey_enabled,
            WizardStep::Review => true,
        }
    }
}

/// Steps shown for the given configuration and values, in order.
pub fn visible_steps(config: &LaunchConfiguration, form: &WizardFormState) -> Vec<WizardStep> {
    WizardStep::ALL
        .iter()
        .copied()
        .filter(|s| s.is_visible(config, form))
        .collect()
}

/// Whether the credential passwords step must be shown.
///
/// A template that requires passwords without prompting for credentials
/// always shows it. Otherwise each selected credential (or each default
/// credential when none were chosen) is checked two ways: credentials with
/// inputs prompt when a password input is set to `ASK`; credentials without
/// inputs prompt when the matching default still reports `passwords_needed`.
pub fn needs_credential_passwords(config: &LaunchConfiguration, form: &WizardFormState) -> bool {
    if !config.ask_credential_on_launch && config.requires_passwords() {
        return true;
    }

    match &form.credentials.credentials {
        Some(selected) => selected.iter().any(|credential| match credential.prompts_for_password() {
            Some(prompts) => prompts,
            None => config
                .default_credential(credential.id)
                .map_or(false, |d| !d.passwords_needed.is_empty()),
        }),
        None => config
            .defaults
            .credentials
            .iter()
            .any(|d| !d.passwords_needed.is_empty()),
    }
}

/// Human label for a `passwords_needed_to_start` entry.
pub fn credential_password_label(field: &str) -> String {
    if let Some(vault_id) = field.strip_prefix("vault_password.") {
        return format!("Vault password | {}", vault_id);
    }
    match field {
        "ssh_password" => "SSH password".to_string(),
        "ssh_key_unlock" => "Private key passphrase".to_string(),
        "become_password" => "Privilege escalation password".to_string(),
        "vault_password" => "Vault password".to_string(),
        other => other.to_string(),
    }
}
