use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Extra variables as sent to the controller: the raw text when no survey
/// answers are merged in, a mapping otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExtraVars {
    Text(String),
    Mapping(Map<String, Value>),
}

/// Body of `POST /<templates>/<id>/launch/`. Absent fields are left out of
/// the request entirely.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LaunchPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credentials: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credential_passwords: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff_mode: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_environment: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_vars: Option<ExtraVars>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forks: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_groups: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_slice_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_tags: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scm_branch: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_tags: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verbosity: Option<i64>,
}
