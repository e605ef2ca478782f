pub mod credential;
pub mod execution_environment;
pub mod form_state;
pub mod job;
pub mod label;
pub mod launch_config;
pub mod launch_payload;
pub mod references;
pub mod review_view;
pub mod survey;
pub mod template;

pub use credential::{Credential, PASSWORD_INPUTS, PROMPT_SENTINEL};
pub use execution_environment::ExecutionEnvironment;
pub use form_state::{
    CredentialPasswordsValues, CredentialsValues, ExecutionEnvironmentValues, InstanceGroupsValues,
    InventoryValues, OtherPromptValues, SurveyValues, WizardFormState,
};
pub use job::UnifiedJob;
pub use label::Label;
pub use launch_config::{DefaultCredential, DefaultInventory, LaunchConfiguration, LaunchDefaults, LaunchFlag};
pub use launch_payload::{ExtraVars, LaunchPayload};
pub use references::{InstanceGroupRef, InventoryRef, LabelRef, NamedRef, Tag};
pub use review_view::{ReviewRow, ReviewValue, ReviewView};
pub use survey::{SurveyQuestion, SurveySpec, ENCRYPTED_SENTINEL};
pub use template::{SummaryFields, Template, TemplateKind};
