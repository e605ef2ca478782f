use crate::error::LaunchError;
use crate::models::{
    CredentialPasswordsValues, CredentialsValues, ExecutionEnvironmentValues, InstanceGroupsValues,
    InventoryValues, LaunchConfiguration, OtherPromptValues, SurveyValues, Template, TemplateKind,
    WizardFormState,
};
use crate::wizard::steps::{visible_steps, WizardStep};

/// Values that reach submission: every hidden step's group is cleared.
pub fn submitted_values(config: &LaunchConfiguration, form: &WizardFormState) -> WizardFormState {
    let shown = |step: WizardStep| step.is_visible(config, form);
    WizardFormState {
        inventory: if shown(WizardStep::Inventory) {
            form.inventory.clone()
        } else {
            InventoryValues::default()
        },
        credentials: if shown(WizardStep::Credentials) {
            form.credentials.clone()
        } else {
            CredentialsValues::default()
        },
        credential_passwords: if shown(WizardStep::CredentialPasswords) {
            form.credential_passwords.clone()
        } else {
            CredentialPasswordsValues::default()
        },
        execution_environment: if shown(WizardStep::ExecutionEnvironment) {
            form.execution_environment.clone()
        } else {
            ExecutionEnvironmentValues::default()
        },
        instance_groups: if shown(WizardStep::InstanceGroups) {
            form.instance_groups.clone()
        } else {
            InstanceGroupsValues::default()
        },
        other_prompts: if shown(WizardStep::OtherPrompts) {
            form.other_prompts.clone()
        } else {
            OtherPromptValues::default()
        },
        survey: if shown(WizardStep::Survey) {
            form.survey.clone()
        } else {
            SurveyValues::default()
        },
    }
}

/// One pass through the launch wizard for a single template.
#[derive(Debug, Clone)]
pub struct WizardSession {
    template: Template,
    config: LaunchConfiguration,
    kind: TemplateKind,
    form: WizardFormState,
    current: WizardStep,
}

impl WizardSession {
    /// Start a session with values initialized from the launch defaults.
    pub fn new(template: Template, config: LaunchConfiguration) -> Result<Self, LaunchError> {
        let kind = template
            .kind()
            .ok_or_else(|| LaunchError::UnsupportedType(template.resource_type.clone()))?;
        let form = WizardFormState::from_defaults(&config);
        let mut session = WizardSession {
            template,
            config,
            kind,
            form,
            current: WizardStep::ALL[0],
        };
        session.settle();
        Ok(session)
    }

    pub fn template(&self) -> &Template {
        &self.template
    }

    pub fn config(&self) -> &LaunchConfiguration {
        &self.config
    }

    pub fn kind(&self) -> TemplateKind {
        self.kind
    }

    pub fn form(&self) -> &WizardFormState {
        &self.form
    }

    pub fn current_step(&self) -> WizardStep {
        self.current
    }

    pub fn visible_steps(&self) -> Vec<WizardStep> {
        visible_steps(&self.config, &self.form)
    }

    pub fn is_visible(&self, step: WizardStep) -> bool {
        step.is_visible(&self.config, &self.form)
    }

    /// Change form values; visibility is re-evaluated afterwards.
    pub fn update<F>(&mut self, change: F)
    where
        F: FnOnce(&mut WizardFormState),
    {
        change(&mut self.form);
        self.settle();
    }

    /// Advance to the next visible step. Stays on Review.
    pub fn next(&mut self) -> WizardStep {
        if let Some(step) = WizardStep::ALL[self.current.index() + 1..]
            .iter()
            .copied()
            .find(|s| self.is_visible(*s))
        {
            self.current = step;
        }
        self.current
    }

    /// Return to the previous visible step. Stays on the first one.
    pub fn back(&mut self) -> WizardStep {
        if let Some(step) = WizardStep::ALL[..self.current.index()]
            .iter()
            .rev()
            .copied()
            .find(|s| self.is_visible(*s))
        {
            self.current = step;
        }
        self.current
    }

    pub fn go_to(&mut self, step: WizardStep) -> Result<(), LaunchError> {
        if !self.is_visible(step) {
            return Err(LaunchError::StepHidden(step));
        }
        self.current = step;
        Ok(())
    }

    /// Values that will be submitted.
    pub fn submitted_values(&self) -> WizardFormState {
        submitted_values(&self.config, &self.form)
    }

    // Keep the cursor on a visible step after a form change.
    fn settle(&mut self) {
        if !self.is_visible(self.current) {
            self.next();
        }
    }
}
