use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::LaunchError;
use crate::models::{Credential, InstanceGroupRef, InventoryRef, LabelRef, Tag, WizardFormState};
use crate::utils::parse_string_to_tag_array;

/// Tags given either as `"a,b"` or as `[a, b]`.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl OneOrMany {
    pub fn into_tags(self) -> Vec<Tag> {
        match self {
            OneOrMany::One(s) => parse_string_to_tag_array(Some(&s)),
            OneOrMany::Many(v) => v
                .into_iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .map(Tag::new)
                .collect(),
        }
    }
}

/// A label given by name (created on launch if new) or by reference.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum LabelInput {
    Name(String),
    Ref { id: Option<i64>, name: String },
}

impl From<LabelInput> for LabelRef {
    fn from(input: LabelInput) -> Self {
        match input {
            LabelInput::Name(name) => LabelRef { id: None, name, read_only: false },
            LabelInput::Ref { id, name } => LabelRef { id, name, read_only: false },
        }
    }
}

/// Extra variables given as text or inline as a mapping.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum ExtraVarsInput {
    Text(String),
    Mapping(Map<String, Value>),
}

/// Wizard answers read from a YAML (or JSON) values file. Every field that
/// is present replaces the corresponding default.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct LaunchValues {
    pub inventory: Option<InventoryRef>,
    pub credentials: Option<Vec<Credential>>,
    pub credential_passwords: Option<BTreeMap<String, String>>,
    pub execution_environment: Option<i64>,
    pub instance_groups: Option<Vec<InstanceGroupRef>>,
    pub diff_mode: Option<bool>,
    pub scm_branch: Option<String>,
    pub extra_vars: Option<ExtraVarsInput>,
    pub forks: Option<i64>,
    pub job_slice_count: Option<i64>,
    pub job_tags: Option<OneOrMany>,
    pub job_type: Option<String>,
    pub labels: Option<Vec<LabelInput>>,
    pub limit: Option<String>,
    pub skip_tags: Option<OneOrMany>,
    pub timeout: Option<i64>,
    pub verbosity: Option<i64>,
    pub survey: Option<Map<String, Value>>,
}

impl LaunchValues {
    pub fn from_yaml(text: &str) -> Result<Self, serde_yaml::Error> {
        if text.trim().is_empty() {
            return Ok(LaunchValues::default());
        }
        serde_yaml::from_str(text)
    }

    pub fn from_file(path: &Path) -> Result<Self, LaunchError> {
        let text = std::fs::read_to_string(path).map_err(|e| LaunchError::Values {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_yaml(&text).map_err(|e| LaunchError::Values {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// Overlay these values onto a wizard form.
    pub fn apply(self, form: &mut WizardFormState) {
        if let Some(v) = self.inventory {
            form.inventory.inventory = Some(v);
        }
        if let Some(v) = self.credentials {
            form.credentials.credentials = Some(v);
        }
        if let Some(v) = self.credential_passwords {
            form.credential_passwords.credential_passwords = Some(v);
        }
        if let Some(v) = self.execution_environment {
            form.execution_environment.execution_environment = Some(v);
        }
        if let Some(v) = self.instance_groups {
            form.instance_groups.instance_groups = Some(v);
        }

        let other = &mut form.other_prompts;
        if let Some(v) = self.diff_mode {
            other.diff_mode = Some(v);
        }
        if let Some(v) = self.scm_branch {
            other.scm_branch = Some(v);
        }
        if let Some(v) = self.extra_vars {
            other.extra_vars = Some(match v {
                ExtraVarsInput::Text(text) => text,
                ExtraVarsInput::Mapping(map) => crate::utils::json_to_yaml(&map),
            });
        }
        if let Some(v) = self.forks {
            other.forks = Some(v);
        }
        if let Some(v) = self.job_slice_count {
            other.job_slice_count = Some(v);
        }
        if let Some(v) = self.job_tags {
            other.job_tags = Some(v.into_tags());
        }
        if let Some(v) = self.job_type {
            other.job_type = Some(v);
        }
        if let Some(v) = self.labels {
            other.labels = Some(v.into_iter().map(LabelRef::from).collect());
        }
        if let Some(v) = self.limit {
            other.limit = Some(v);
        }
        if let Some(v) = self.skip_tags {
            other.skip_tags = Some(v.into_tags());
        }
        if let Some(v) = self.timeout {
            other.timeout = Some(v);
        }
        if let Some(v) = self.verbosity {
            other.verbosity = Some(v);
        }

        if let Some(answers) = self.survey {
            form.survey.answers = Some(answers);
        }
    }
}
