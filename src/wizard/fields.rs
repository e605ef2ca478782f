use serde::{Deserialize, Serialize};

use crate::models::{LaunchConfiguration, LaunchFlag, TemplateKind};
use crate::wizard::WizardStep;

/// A field of the launch request body.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromptField {
    Credentials,
    CredentialPasswords,
    DiffMode,
    ExecutionEnvironment,
    ExtraVars,
    Forks,
    InstanceGroups,
    Inventory,
    JobSliceCount,
    JobTags,
    JobType,
    Labels,
    Limit,
    ScmBranch,
    SkipTags,
    Timeout,
    Verbosity,
}

impl PromptField {
    pub const ALL: [PromptField; 17] = [
        PromptField::Credentials,
        PromptField::CredentialPasswords,
        PromptField::DiffMode,
        PromptField::ExecutionEnvironment,
        PromptField::ExtraVars,
        PromptField::Forks,
        PromptField::InstanceGroups,
        PromptField::Inventory,
        PromptField::JobSliceCount,
        PromptField::JobTags,
        PromptField::JobType,
        PromptField::Labels,
        PromptField::Limit,
        PromptField::ScmBranch,
        PromptField::SkipTags,
        PromptField::Timeout,
        PromptField::Verbosity,
    ];

    /// The `ask_*_on_launch` switch governing this field. Credential
    /// passwords have none: they are demanded by the credentials themselves.
    pub fn launch_flag(self) -> Option<LaunchFlag> {
        match self {
            PromptField::Credentials => Some(LaunchFlag::Credential),
            PromptField::CredentialPasswords => None,
            PromptField::DiffMode => Some(LaunchFlag::DiffMode),
            PromptField::ExecutionEnvironment => Some(LaunchFlag::ExecutionEnvironment),
            PromptField::ExtraVars => Some(LaunchFlag::Variables),
            PromptField::Forks => Some(LaunchFlag::Forks),
            PromptField::InstanceGroups => Some(LaunchFlag::InstanceGroups),
            PromptField::Inventory => Some(LaunchFlag::Inventory),
            PromptField::JobSliceCount => Some(LaunchFlag::JobSliceCount),
            PromptField::JobTags => Some(LaunchFlag::Tags),
            PromptField::JobType => Some(LaunchFlag::JobType),
            PromptField::Labels => Some(LaunchFlag::Labels),
            PromptField::Limit => Some(LaunchFlag::Limit),
            PromptField::ScmBranch => Some(LaunchFlag::ScmBranch),
            PromptField::SkipTags => Some(LaunchFlag::SkipTags),
            PromptField::Timeout => Some(LaunchFlag::Timeout),
            PromptField::Verbosity => Some(LaunchFlag::Verbosity),
        }
    }

    /// The wizard step that collects this field.
    pub fn step(self) -> WizardStep {
        match self {
            PromptField::Inventory => WizardStep::Inventory,
            PromptField::Credentials => WizardStep::Credentials,
            PromptField::CredentialPasswords => WizardStep::CredentialPasswords,
            PromptField::ExecutionEnvironment => WizardStep::ExecutionEnvironment,
            PromptField::InstanceGroups => WizardStep::InstanceGroups,
            PromptField::DiffMode
            | PromptField::ExtraVars
            | PromptField::Forks
            | PromptField::JobSliceCount
            | PromptField::JobTags
            | PromptField::JobType
            | PromptField::Labels
            | PromptField::Limit
            | PromptField::ScmBranch
            | PromptField::SkipTags
            | PromptField::Timeout
            | PromptField::Verbosity => WizardStep::OtherPrompts,
        }
    }

    /// Whether a defined value for this field goes into the launch request.
    ///
    /// Job templates accept any defined value. Workflow job templates only
    /// accept fields they prompt for, or any field while a survey is enabled.
    pub fn is_admitted(self, config: &LaunchConfiguration, kind: TemplateKind) -> bool {
        if !kind.is_workflow() {
            return true;
        }
        self.launch_flag().map_or(false, |flag| config.asks(flag)) || config.survey_enabled
    }
}
