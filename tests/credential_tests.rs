mod common;

use serde_json::json;
use std::collections::HashMap;

use launchpad::api::ApiClient;
use launchpad::config::ControllerConfig;
use launchpad::models::Credential;
use launchpad::services::{apply_credential_details, credentials_missing_details, load_credential_details, PayloadAssembler};
use launchpad::wizard::{LaunchValues, WizardSession, WizardStep};

use common::{config_with, job_template};

fn prompted_credential(id: i64) -> Credential {
    serde_json::from_value(json!({
        "id": id,
        "name": "Prompted SSH",
        "credential_type": 1,
        "inputs": {"username": "deploy", "password": "ASK"}
    }))
    .unwrap()
}

fn session_with_values_file_credential() -> WizardSession {
    let config = config_with(json!({
        "ask_credential_on_launch": true,
        "defaults": {"credentials": []}
    }));
    let mut session = WizardSession::new(job_template(), config).unwrap();
    let values = LaunchValues::from_yaml(
        "credentials: [{id: 9}]\ncredential_passwords: {ssh_password: hunter2}\n",
    )
    .unwrap();
    session.update(|form| values.apply(form));
    session
}

#[test]
fn test_values_file_credentials_need_details() {
    let session = session_with_values_file_credential();
    assert_eq!(credentials_missing_details(session.config(), session.form()), vec![9]);
    assert!(!session.is_visible(WizardStep::CredentialPasswords));
}

#[test]
fn test_default_credentials_need_no_details() {
    let config = config_with(json!({ "ask_credential_on_launch": true }));
    let session = WizardSession::new(job_template(), config).unwrap();
    assert!(credentials_missing_details(session.config(), session.form()).is_empty());
}

#[test]
fn test_fetched_details_reveal_passwords_and_keep_them() {
    let mut session = session_with_values_file_credential();
    let details: HashMap<i64, Credential> = [(9, prompted_credential(9))].into_iter().collect();
    session.update(|form| apply_credential_details(form, &details));

    assert!(session.is_visible(WizardStep::CredentialPasswords));
    assert!(credentials_missing_details(session.config(), session.form()).is_empty());

    let payload = PayloadAssembler::new(session.config(), session.kind())
        .assemble(session.form())
        .unwrap();
    assert_eq!(payload.credentials, Some(vec![9]));
    assert_eq!(
        payload.credential_passwords.as_ref().and_then(|p| p.get("ssh_password")).map(String::as_str),
        Some("hunter2")
    );
}

#[tokio::test]
async fn test_failed_lookups_leave_session_unchanged() {
    let api = ApiClient::new(&ControllerConfig {
        controller_url: "http://127.0.0.1:9".into(),
        token: String::new(),
        api_prefix: "/api/v2".into(),
        public_base_url: "http://127.0.0.1:9".into(),
        timeout_secs: 2,
    })
    .unwrap();
    let mut session = session_with_values_file_credential();
    let before = session.form().clone();

    load_credential_details(&api, &mut session).await;
    assert_eq!(session.form(), &before);
}
