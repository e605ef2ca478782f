use serde::{Deserialize, Serialize};

use crate::models::{InstanceGroupRef, LabelRef};

/// One `ask_<field>_on_launch` switch of a launch configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LaunchFlag {
    JobType,
    Inventory,
    Credential,
    ExecutionEnvironment,
    InstanceGroups,
    ScmBranch,
    Forks,
    DiffMode,
    JobSliceCount,
    Labels,
    Limit,
    SkipTags,
    Tags,
    Timeout,
    Variables,
    Verbosity,
}

impl LaunchFlag {
    /// Flags collected on the "Other prompts" step.
    pub const OTHER_PROMPTS: [LaunchFlag; 12] = [
        LaunchFlag::JobType,
        LaunchFlag::Limit,
        LaunchFlag::Verbosity,
        LaunchFlag::Tags,
        LaunchFlag::SkipTags,
        LaunchFlag::Variables,
        LaunchFlag::ScmBranch,
        LaunchFlag::DiffMode,
        LaunchFlag::Labels,
        LaunchFlag::Forks,
        LaunchFlag::JobSliceCount,
        LaunchFlag::Timeout,
    ];

    /// Wire name of the flag.
    pub fn key(self) -> &'static str {
        match self {
            LaunchFlag::JobType => "ask_job_type_on_launch",
            LaunchFlag::Inventory => "ask_inventory_on_launch",
            LaunchFlag::Credential => "ask_credential_on_launch",
            LaunchFlag::ExecutionEnvironment => "ask_execution_environment_on_launch",
            LaunchFlag::InstanceGroups => "ask_instance_groups_on_launch",
            LaunchFlag::ScmBranch => "ask_scm_branch_on_launch",
            LaunchFlag::Forks => "ask_forks_on_launch",
            LaunchFlag::DiffMode => "ask_diff_mode_on_launch",
            LaunchFlag::JobSliceCount => "ask_job_slice_count_on_launch",
            LaunchFlag::Labels => "ask_labels_on_launch",
            LaunchFlag::Limit => "ask_limit_on_launch",
            LaunchFlag::SkipTags => "ask_skip_tags_on_launch",
            LaunchFlag::Tags => "ask_tags_on_launch",
            LaunchFlag::Timeout => "ask_timeout_on_launch",
            LaunchFlag::Variables => "ask_variables_on_launch",
            LaunchFlag::Verbosity => "ask_verbosity_on_launch",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultInventory {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultCredential {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub credential_type: Option<i64>,
    #[serde(default)]
    pub passwords_needed: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultExecutionEnvironment {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
}

/// Current template values for every promptable field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaunchDefaults {
    pub inventory: DefaultInventory,
    pub credentials: Vec<DefaultCredential>,
    pub execution_environment: Option<DefaultExecutionEnvironment>,
    pub instance_groups: Vec<InstanceGroupRef>,
    pub labels: Vec<LabelRef>,
    pub diff_mode: Option<bool>,
    pub scm_branch: Option<String>,
    pub extra_vars: Option<String>,
    pub forks: Option<i64>,
    pub job_slice_count: Option<i64>,
    pub job_tags: Option<String>,
    pub skip_tags: Option<String>,
    pub job_type: Option<String>,
    pub limit: Option<String>,
    pub timeout: Option<i64>,
    pub verbosity: Option<i64>,
}

/// Response of `GET /<templates>/<id>/launch/`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaunchConfiguration {
    pub ask_job_type_on_launch: bool,
    pub ask_inventory_on_launch: bool,
    pub ask_credential_on_launch: bool,
    pub ask_execution_environment_on_launch: bool,
    pub ask_instance_groups_on_launch: bool,
    pub ask_scm_branch_on_launch: bool,
    pub ask_forks_on_launch: bool,
    pub ask_diff_mode_on_launch: bool,
    pub ask_job_slice_count_on_launch: bool,
    pub ask_labels_on_launch: bool,
    pub ask_limit_on_launch: bool,
    pub ask_skip_tags_on_launch: bool,
    pub ask_tags_on_launch: bool,
    pub ask_timeout_on_launch: bool,
    pub ask_variables_on_launch: bool,
    pub ask_verbosity_on_launch: bool,
    pub survey_enabled: bool,
    pub passwords_needed_to_start: Vec<String>,
    pub variables_needed_to_start: Vec<String>,
    pub can_start_without_user_input: bool,
    pub defaults: LaunchDefaults,
}

impl LaunchConfiguration {
    pub fn asks(&self, flag: LaunchFlag) -> bool {
        match flag {
            LaunchFlag::JobType => self.ask_job_type_on_launch,
            LaunchFlag::Inventory => self.ask_inventory_on_launch,
            LaunchFlag::Credential => self.ask_credential_on_launch,
            LaunchFlag::ExecutionEnvironment => self.ask_execution_environment_on_launch,
            LaunchFlag::InstanceGroups => self.ask_instance_groups_on_launch,
            LaunchFlag::ScmBranch => self.ask_scm_branch_on_launch,
            LaunchFlag::Forks => self.ask_forks_on_launch,
            LaunchFlag::DiffMode => self.ask_diff_mode_on_launch,
            LaunchFlag::JobSliceCount => self.ask_job_slice_count_on_launch,
            LaunchFlag::Labels => self.ask_labels_on_launch,
            LaunchFlag::Limit => self.ask_limit_on_launch,
            LaunchFlag::SkipTags => self.ask_skip_tags_on_launch,
            LaunchFlag::Tags => self.ask_tags_on_launch,
            LaunchFlag::Timeout => self.ask_timeout_on_launch,
            LaunchFlag::Variables => self.ask_variables_on_launch,
            LaunchFlag::Verbosity => self.ask_verbosity_on_launch,
        }
    }

    pub fn asks_other_prompts(&self) -> bool {
        LaunchFlag::OTHER_PROMPTS.iter().any(|flag| self.asks(*flag))
    }

    pub fn requires_passwords(&self) -> bool {
        !self.passwords_needed_to_start.is_empty()
    }

    pub fn default_credential(&self, id: i64) -> Option<&DefaultCredential> {
        self.defaults.credentials.iter().find(|c| c.id == id)
    }
}
