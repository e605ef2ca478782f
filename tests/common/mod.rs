#![allow(dead_code)]

use serde_json::json;

use launchpad::models::{LaunchConfiguration, Template};

pub fn job_template() -> Template {
    serde_json::from_value(json!({
        "id": 7,
        "name": "Deploy web",
        "type": "job_template",
        "organization": 1,
        "playbook": "site.yml",
        "summary_fields": {
            "organization": {"id": 1, "name": "Default"},
            "project": {"id": 3, "name": "Web project"},
            "inventory": {"id": 2, "name": "Prod"}
        }
    }))
    .unwrap()
}

pub fn workflow_template() -> Template {
    serde_json::from_value(json!({
        "id": 12,
        "name": "Release train",
        "type": "workflow_job_template",
        "organization": 1,
        "summary_fields": {"organization": {"id": 1, "name": "Default"}}
    }))
    .unwrap()
}

/// Launch configuration with no prompts at all.
pub fn quiet_config() -> LaunchConfiguration {
    serde_json::from_value(json!({
        "can_start_without_user_input": true,
        "defaults": {
            "inventory": {"id": 2, "name": "Prod"},
            "credentials": [{"id": 5, "name": "Machine", "passwords_needed": []}],
            "extra_vars": "---\nregion: eu\n",
            "job_tags": "",
            "skip_tags": "",
            "verbosity": 0
        }
    }))
    .unwrap()
}

pub fn config_with(value: serde_json::Value) -> LaunchConfiguration {
    let mut base = serde_json::to_value(quiet_config()).unwrap();
    if let (Some(base), Some(extra)) = (base.as_object_mut(), value.as_object()) {
        for (k, v) in extra {
            base.insert(k.clone(), v.clone());
        }
    }
    serde_json::from_value(base).unwrap()
}
