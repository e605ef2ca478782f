use futures_util::future::join_all;
use serde_json::{Map, Value};
use std::collections::HashMap;

use crate::api::{get_credential, get_execution_environment, get_survey_spec, ApiClient};
use crate::error::LaunchError;
use crate::models::{
    Credential, ReviewValue, ReviewView, SurveySpec, Tag, Template, WizardFormState,
};
use crate::utils::{is_empty_field, json_to_yaml, merge_survey_answers, verbosity_string};
use crate::wizard::WizardSession;

pub use crate::models::ENCRYPTED_SENTINEL;

/// Display-only data fetched alongside the review. Anything missing is
/// simply left out of the rendered view.
#[derive(Debug, Clone, Default)]
pub struct ReviewContext {
    pub survey_spec: Option<SurveySpec>,
    pub execution_environment_name: Option<String>,
    pub credentials: HashMap<i64, Credential>,
}

/// Fetch review display data concurrently, tolerating every failure.
pub async fn load_review_context(api: &ApiClient, template: &Template, form: &WizardFormState) -> ReviewContext {
    let survey_fut = async {
        let kind = template.kind()?;
        match get_survey_spec(api, kind, template.id).await {
            Ok(spec) => Some(spec),
            Err(e) => {
                tracing::warn!(%e, template = template.id, "survey spec unavailable");
                None
            }
        }
    };

    let ee_fut = async {
        let id = form.execution_environment.execution_environment?;
        match get_execution_environment(api, id).await {
            Ok(ee) => Some(ee.name),
            Err(e) => {
                tracing::warn!(%e, execution_environment = id, "execution environment unavailable");
                None
            }
        }
    };

    let credential_ids: Vec<i64> = form
        .credentials
        .credentials
        .as_ref()
        .map(|creds| creds.iter().map(|c| c.id).collect())
        .unwrap_or_default();
    let credentials_fut = join_all(credential_ids.into_iter().map(|id| async move {
        match get_credential(api, id).await {
            Ok(credential) => Some((id, credential)),
            Err(e) => {
                tracing::warn!(%e, credential = id, "credential detail unavailable");
                None
            }
        }
    }));

    let (survey_spec, execution_environment_name, credentials) = tokio::join!(survey_fut, ee_fut, credentials_fut);
    ReviewContext {
        survey_spec,
        execution_environment_name,
        credentials: credentials.into_iter().flatten().collect(),
    }
}

/// Replace the answers to password questions with the encrypted sentinel.
pub fn mask_passwords(answers: &Map<String, Value>, password_keys: &[&str]) -> Map<String, Value> {
    let mut masked = answers.clone();
    for key in password_keys {
        if let Some(value) = masked.get_mut(*key) {
            *value = Value::String(ENCRYPTED_SENTINEL.to_string());
        }
    }
    masked
}

/// Extra variables as they will be submitted, in YAML.
///
/// Without survey answers the raw text is shown (`{}` when blank). With
/// answers, the same merge the launch performs is rebuilt and answers to
/// password questions are masked. Extra variables that merely share a name
/// with a password question are left alone.
pub fn extra_vars_display(
    extra_vars: Option<&str>,
    answers: Option<&Map<String, Value>>,
    survey_spec: Option<&SurveySpec>,
) -> Result<String, LaunchError> {
    let answers = match answers {
        Some(a) => a,
        None => {
            return Ok(extra_vars.filter(|t| !t.is_empty()).unwrap_or("{}").to_string());
        }
    };
    let password_keys = survey_spec.map(SurveySpec::password_variables).unwrap_or_default();
    let masked = mask_passwords(answers, &password_keys);
    let merged = merge_survey_answers(extra_vars, Some(&masked))?;
    Ok(json_to_yaml(&merged))
}

fn text(value: Option<String>) -> ReviewValue {
    match value {
        Some(v) if !v.is_empty() => ReviewValue::Text(v),
        _ => ReviewValue::Empty,
    }
}

fn tag_list(tags: &Option<Vec<Tag>>) -> ReviewValue {
    if is_empty_field(tags) {
        return ReviewValue::Empty;
    }
    ReviewValue::List(tags.iter().flatten().map(|t| t.name.clone()).collect())
}

/// Render the review of a pending launch from the submitted values.
pub fn render_review(
    template: &Template,
    form: &WizardFormState,
    context: &ReviewContext,
) -> Result<ReviewView, LaunchError> {
    let other = &form.other_prompts;
    let is_job_template = template.is_job_template();
    let mut view = ReviewView::default();

    view.push("Name", ReviewValue::Text(template.name.clone()));
    view.push("Job type", text(other.job_type.clone()));
    view.push(
        "Organization",
        text(template.summary_fields.organization.as_ref().map(|o| o.name.clone())),
    );
    view.push("Inventory", text(form.inventory.inventory.as_ref().map(|i| i.name.clone())));
    if is_job_template {
        view.push("Project", text(template.summary_fields.project.as_ref().map(|p| p.name.clone())));
    }
    view.push(
        "Execution environment",
        match form.execution_environment.execution_environment {
            None => ReviewValue::Empty,
            Some(_) => ReviewValue::Text(context.execution_environment_name.clone().unwrap_or_default()),
        },
    );
    view.push("Source control branch", text(other.scm_branch.clone()));
    if is_job_template {
        view.push("Playbook", text(template.playbook.clone()));
    }

    // Only credentials whose detail loaded are listed.
    let credential_names: Vec<String> = form
        .credentials
        .credentials
        .iter()
        .flatten()
        .filter_map(|c| context.credentials.get(&c.id).map(|d| d.name.clone()))
        .collect();
    view.push(
        "Credentials",
        if credential_names.is_empty() {
            ReviewValue::Empty
        } else {
            ReviewValue::List(credential_names)
        },
    );

    let groups = &form.instance_groups.instance_groups;
    view.push(
        "Instance groups",
        if is_empty_field(groups) {
            ReviewValue::Empty
        } else {
            ReviewValue::List(groups.iter().flatten().map(|g| g.name.clone()).collect())
        },
    );

    view.push("Forks", ReviewValue::Text(other.forks.unwrap_or(0).to_string()));
    view.push("Limit", text(other.limit.clone()));
    view.push("Verbosity", ReviewValue::Text(verbosity_string(other.verbosity)));
    view.push("Timeout", ReviewValue::Text(other.timeout.unwrap_or(0).to_string()));
    view.push(
        "Show changes",
        ReviewValue::Text(if other.diff_mode.unwrap_or(false) { "On" } else { "Off" }.to_string()),
    );
    view.push("Job slicing", text(other.job_slice_count.map(|n| n.to_string())));

    let labels = &other.labels;
    view.push(
        "Labels",
        if is_empty_field(labels) {
            ReviewValue::Empty
        } else {
            ReviewValue::List(labels.iter().flatten().map(|l| l.name.clone()).collect())
        },
    );
    view.push("Job tags", tag_list(&other.job_tags));
    view.push("Skip tags", tag_list(&other.skip_tags));
    view.push(
        "Extra vars",
        ReviewValue::Code(extra_vars_display(
            other.extra_vars.as_deref(),
            form.survey.answers.as_ref(),
            context.survey_spec.as_ref(),
        )?),
    );

    Ok(view)
}

/// Review of what a session would submit right now.
pub fn review_session(session: &WizardSession, context: &ReviewContext) -> Result<ReviewView, LaunchError> {
    render_review(session.template(), &session.submitted_values(), context)
}
