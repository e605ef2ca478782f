use crate::error::LaunchError;
use crate::models::{ExtraVars, LaunchConfiguration, LaunchPayload, TemplateKind, WizardFormState};
use crate::utils::{join_tag_names, merge_survey_answers};
use crate::wizard::{submitted_values, PromptField};

/// Turns wizard values into the launch request body for one template.
#[derive(Debug, Clone, Copy)]
pub struct PayloadAssembler<'a> {
    config: &'a LaunchConfiguration,
    kind: TemplateKind,
}

impl<'a> PayloadAssembler<'a> {
    pub fn new(config: &'a LaunchConfiguration, kind: TemplateKind) -> Self {
        PayloadAssembler { config, kind }
    }

    fn admit<T>(&self, field: PromptField, value: Option<T>) -> Option<T> {
        value.filter(|_| field.is_admitted(self.config, self.kind))
    }

    /// Build the payload, without labels.
    ///
    /// Fields of hidden steps are dropped first. Extra variables are merged
    /// with survey answers for job templates with an enabled survey and,
    /// unconditionally, for workflow job templates.
    pub fn assemble(&self, form: &WizardFormState) -> Result<LaunchPayload, LaunchError> {
        let form = submitted_values(self.config, form);
        let other = &form.other_prompts;

        let mut payload = LaunchPayload {
            credentials: self.admit(
                PromptField::Credentials,
                form.credentials
                    .credentials
                    .as_ref()
                    .map(|creds| creds.iter().map(|c| c.id).collect()),
            ),
            credential_passwords: self.admit(
                PromptField::CredentialPasswords,
                form.credential_passwords.credential_passwords.clone(),
            ),
            diff_mode: self.admit(PromptField::DiffMode, other.diff_mode),
            execution_environment: self.admit(
                PromptField::ExecutionEnvironment,
                form.execution_environment.execution_environment,
            ),
            extra_vars: self.admit(PromptField::ExtraVars, other.extra_vars.clone().map(ExtraVars::Text)),
            forks: self.admit(PromptField::Forks, other.forks),
            instance_groups: self.admit(
                PromptField::InstanceGroups,
                form.instance_groups
                    .instance_groups
                    .as_ref()
                    .map(|groups| groups.iter().map(|g| g.id).collect()),
            ),
            inventory: self.admit(PromptField::Inventory, form.inventory.inventory.as_ref().map(|i| i.id)),
            job_slice_count: self.admit(PromptField::JobSliceCount, other.job_slice_count),
            job_tags: self.admit(PromptField::JobTags, other.job_tags.as_deref().and_then(join_tag_names)),
            job_type: self.admit(PromptField::JobType, other.job_type.clone()),
            labels: None,
            limit: self.admit(PromptField::Limit, other.limit.clone()),
            scm_branch: self.admit(PromptField::ScmBranch, other.scm_branch.clone()),
            skip_tags: self.admit(PromptField::SkipTags, other.skip_tags.as_deref().and_then(join_tag_names)),
            timeout: self.admit(PromptField::Timeout, other.timeout),
            verbosity: self.admit(PromptField::Verbosity, other.verbosity),
        };

        let merge_survey = match self.kind {
            TemplateKind::JobTemplate => self.config.survey_enabled,
            TemplateKind::WorkflowJobTemplate => true,
        };
        if merge_survey {
            let merged = merge_survey_answers(other.extra_vars.as_deref(), form.survey.answers.as_ref())?;
            payload.extra_vars = Some(ExtraVars::Mapping(merged));
        }

        Ok(payload)
    }

    /// Attach resolved label ids. An empty list leaves labels out.
    pub fn apply_labels(&self, payload: &mut LaunchPayload, label_ids: Vec<i64>) {
        if label_ids.is_empty() {
            return;
        }
        payload.labels = self.admit(PromptField::Labels, Some(label_ids));
    }
}

/// Assemble the full launch payload, labels included.
pub fn assemble_payload(
    form: &WizardFormState,
    config: &LaunchConfiguration,
    kind: TemplateKind,
    label_ids: &[i64],
) -> Result<LaunchPayload, LaunchError> {
    let assembler = PayloadAssembler::new(config, kind);
    let mut payload = assembler.assemble(form)?;
    assembler.apply_labels(&mut payload, label_ids.to_vec());
    Ok(payload)
}
