mod common;

use serde_json::json;
use std::io::Write;

use launchpad::models::{LabelRef, Tag, WizardFormState};
use launchpad::wizard::LaunchValues;
use launchpad::LaunchError;

use common::quiet_config;

#[test]
fn test_values_file_overrides_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
inventory: {{id: 30, name: Staging}}
limit: web
job_tags: deploy, db
skip_tags: [slow]
labels:
  - fresh
  - {{id: 3, name: prod}}
extra_vars:
  release: "1.4"
survey:
  db_pass: hunter2
"#
    )
    .unwrap();

    let values = LaunchValues::from_file(file.path()).unwrap();
    let mut form = WizardFormState::from_defaults(&quiet_config());
    values.apply(&mut form);

    assert_eq!(form.inventory.inventory.as_ref().map(|i| i.id), Some(30));
    assert_eq!(form.other_prompts.limit.as_deref(), Some("web"));
    assert_eq!(form.other_prompts.job_tags, Some(vec![Tag::new("deploy"), Tag::new("db")]));
    assert_eq!(form.other_prompts.skip_tags, Some(vec![Tag::new("slow")]));
    assert_eq!(
        form.other_prompts.labels,
        Some(vec![
            LabelRef { id: None, name: "fresh".into(), read_only: false },
            LabelRef { id: Some(3), name: "prod".into(), read_only: false },
        ])
    );
    let extra: serde_json::Value =
        serde_yaml::from_str(form.other_prompts.extra_vars.as_deref().unwrap()).unwrap();
    assert_eq!(extra, json!({"release": "1.4"}));
    assert_eq!(form.survey.answers.unwrap().get("db_pass"), Some(&json!("hunter2")));
    // Untouched fields keep their defaults.
    assert_eq!(form.credentials.credentials.map(|c| c.len()), Some(1));
}

#[test]
fn test_empty_values_file_changes_nothing() {
    let values = LaunchValues::from_yaml("  \n").unwrap();
    let mut form = WizardFormState::from_defaults(&quiet_config());
    let before = form.clone();
    values.apply(&mut form);
    assert_eq!(form, before);
}

#[test]
fn test_unknown_keys_are_rejected() {
    assert!(LaunchValues::from_yaml("limt: web\n").is_err());
}

#[test]
fn test_missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.yaml");
    let err = LaunchValues::from_file(&path).unwrap_err();
    match err {
        LaunchError::Values { path: reported, .. } => assert!(reported.ends_with("absent.yaml")),
        other => panic!("unexpected error: {:?}", other),
    }
}
