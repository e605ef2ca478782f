use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use crate::models::{
    Credential, InstanceGroupRef, InventoryRef, LabelRef, LaunchConfiguration, Tag,
};
use crate::utils::parse_string_to_tag_array;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InventoryValues {
    pub inventory: Option<InventoryRef>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CredentialsValues {
    pub credentials: Option<Vec<Credential>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CredentialPasswordsValues {
    /// Keyed by the names in `passwords_needed_to_start`
    pub credential_passwords: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExecutionEnvironmentValues {
    pub execution_environment: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InstanceGroupsValues {
    pub instance_groups: Option<Vec<InstanceGroupRef>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OtherPromptValues {
    pub diff_mode: Option<bool>,
    pub scm_branch: Option<String>,
    /// YAML or JSON text
    pub extra_vars: Option<String>,
    pub forks: Option<i64>,
    pub job_slice_count: Option<i64>,
    pub job_tags: Option<Vec<Tag>>,
    pub job_type: Option<String>,
    pub labels: Option<Vec<LabelRef>>,
    pub limit: Option<String>,
    pub skip_tags: Option<Vec<Tag>>,
    pub timeout: Option<i64>,
    pub verbosity: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SurveyValues {
    pub answers: Option<Map<String, Value>>,
}

/// Values collected by the launch wizard, one group per step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WizardFormState {
    pub inventory: InventoryValues,
    pub credentials: CredentialsValues,
    pub credential_passwords: CredentialPasswordsValues,
    pub execution_environment: ExecutionEnvironmentValues,
    pub instance_groups: InstanceGroupsValues,
    pub other_prompts: OtherPromptValues,
    pub survey: SurveyValues,
}

impl WizardFormState {
    /// Initial wizard values taken from the launch configuration defaults.
    pub fn from_defaults(config: &LaunchConfiguration) -> Self {
        let defaults = &config.defaults;
        let inventory = defaults.inventory.id.map(|id| InventoryRef {
            id,
            name: defaults.inventory.name.clone().unwrap_or_default(),
            kind: defaults.inventory.kind.clone().unwrap_or_default(),
        });
        let credentials = defaults
            .credentials
            .iter()
            .map(|c| Credential {
                id: c.id,
                name: c.name.clone(),
                kind: None,
                credential_type: c.credential_type,
                inputs: None,
            })
            .collect();
        let labels = defaults
            .labels
            .iter()
            .map(|l| LabelRef { id: l.id, name: l.name.clone(), read_only: true })
            .collect();

        WizardFormState {
            inventory: InventoryValues { inventory },
            credentials: CredentialsValues { credentials: Some(credentials) },
            credential_passwords: CredentialPasswordsValues::default(),
            execution_environment: ExecutionEnvironmentValues {
                execution_environment: defaults.execution_environment.as_ref().and_then(|ee| ee.id),
            },
            instance_groups: InstanceGroupsValues {
                instance_groups: Some(defaults.instance_groups.clone()),
            },
            other_prompts: OtherPromptValues {
                diff_mode: defaults.diff_mode,
                scm_branch: defaults.scm_branch.clone(),
                extra_vars: defaults.extra_vars.clone(),
                forks: defaults.forks,
                job_slice_count: defaults.job_slice_count,
                job_tags: Some(parse_string_to_tag_array(defaults.job_tags.as_deref())),
                job_type: defaults.job_type.clone(),
                labels: Some(labels),
                limit: defaults.limit.clone(),
                skip_tags: Some(parse_string_to_tag_array(defaults.skip_tags.as_deref())),
                timeout: defaults.timeout,
                verbosity: defaults.verbosity,
            },
            survey: SurveyValues { answers: Some(Map::new()) },
        }
    }
}
