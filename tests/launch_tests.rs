mod common;

use serde_json::json;

use launchpad::api::ApiClient;
use launchpad::config::ControllerConfig;
use launchpad::models::{LabelRef, UnifiedJob};
use launchpad::services::{resolve_label_ids, LaunchOutcome, LaunchService};
use launchpad::wizard::WizardSession;
use launchpad::LaunchError;

use common::{config_with, job_template, workflow_template};

// Nothing listens on the discard port, so any request fails fast.
fn unreachable_client() -> ApiClient {
    ApiClient::new(&ControllerConfig {
        controller_url: "http://127.0.0.1:9".into(),
        token: "token".into(),
        api_prefix: "/api/v2".into(),
        public_base_url: "http://127.0.0.1:9".into(),
        timeout_secs: 2,
    })
    .unwrap()
}

fn job(job_type: &str, id: i64) -> UnifiedJob {
    serde_json::from_value(json!({"id": id, "type": job_type, "status": "pending"})).unwrap()
}

#[test]
fn test_output_paths_by_job_type() {
    assert_eq!(job("job", 42).output_path(), "/jobs/playbook/42/output");
    assert_eq!(job("workflow_job", 3).output_path(), "/jobs/workflow/3/output");
    assert_eq!(job("project_update", 1).output_path(), "/jobs/project/1/output");
    assert_eq!(job("inventory_update", 1).output_path(), "/jobs/inventory/1/output");
    assert_eq!(job("system_job", 1).output_path(), "/jobs/management/1/output");
    assert_eq!(job("ad_hoc_command", 1).output_path(), "/jobs/command/1/output");
}

#[test]
fn test_outcome_url_uses_public_base() {
    let outcome = LaunchOutcome::from_job(job("job", 42));
    assert_eq!(outcome.output_path, "/jobs/playbook/42/output");
    assert_eq!(
        outcome.output_url("https://controller.example.com"),
        "https://controller.example.com/jobs/playbook/42/output"
    );
}

#[tokio::test]
async fn test_malformed_extra_vars_fail_before_any_request() {
    let config = config_with(json!({
        "ask_variables_on_launch": true,
        "ask_labels_on_launch": true
    }));
    let mut session = WizardSession::new(workflow_template(), config).unwrap();
    session.update(|form| {
        form.other_prompts.extra_vars = Some("{not: [valid".into());
        form.other_prompts.labels = Some(vec![LabelRef { id: None, name: "new".into(), read_only: false }]);
    });

    let service = LaunchService::new(unreachable_client());
    let err = service.launch(&session).await.unwrap_err();
    assert!(matches!(err, LaunchError::ExtraVarsParse(_)), "got {:?}", err);
    assert_eq!(err.notification().title, "Failure to launch");
}

#[tokio::test]
async fn test_prepare_keeps_existing_label_ids() {
    let config = config_with(json!({ "ask_labels_on_launch": true }));
    let mut session = WizardSession::new(job_template(), config).unwrap();
    session.update(|form| {
        form.other_prompts.labels = Some(vec![
            LabelRef { id: Some(3), name: "prod".into(), read_only: true },
            LabelRef { id: Some(8), name: "web".into(), read_only: false },
        ]);
    });

    let service = LaunchService::new(unreachable_client());
    let payload = service.prepare(&session).await.unwrap();
    assert_eq!(payload.labels, Some(vec![3, 8]));
}

#[tokio::test]
async fn test_new_label_needs_an_organization() {
    let mut template = job_template();
    template.organization = None;
    template.summary_fields.organization = None;
    let labels = vec![LabelRef { id: None, name: "fresh".into(), read_only: false }];

    let err = resolve_label_ids(&unreachable_client(), &labels, &template).await.unwrap_err();
    assert!(matches!(err, LaunchError::LabelOrganizationMissing(name) if name == "fresh"));
}

#[tokio::test]
async fn test_submit_failure_is_reported_and_session_kept() {
    let session = WizardSession::new(job_template(), config_with(json!({ "ask_limit_on_launch": true }))).unwrap();
    let before = session.form().clone();

    let service = LaunchService::new(unreachable_client());
    let err = service.launch(&session).await.unwrap_err();
    assert!(matches!(err, LaunchError::Submit(_)), "got {:?}", err);
    assert_eq!(session.form(), &before);
}
