use crate::api::{launch_template, ApiClient};
use crate::error::LaunchError;
use crate::models::{LaunchPayload, UnifiedJob};
use crate::services::label_service::resolve_label_ids;
use crate::services::payload_service::PayloadAssembler;
use crate::utils::absolute_url;
use crate::wizard::WizardSession;

/// A successful launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchOutcome {
    pub job: UnifiedJob,
    /// UI route of the job's output view
    pub output_path: String,
}

impl LaunchOutcome {
    pub fn from_job(job: UnifiedJob) -> Self {
        let output_path = job.output_path();
        LaunchOutcome { job, output_path }
    }

    pub fn output_url(&self, public_base_url: &str) -> String {
        absolute_url(public_base_url, &self.output_path)
    }
}

/// Submits wizard sessions. The session is only borrowed, so a failed
/// attempt leaves every value in place for a retry.
pub struct LaunchService {
    api: ApiClient,
}

impl LaunchService {
    pub fn new(api: ApiClient) -> Self {
        LaunchService { api }
    }

    /// Payload the session would submit, creating any new labels.
    pub async fn prepare(&self, session: &WizardSession) -> Result<LaunchPayload, LaunchError> {
        let assembler = PayloadAssembler::new(session.config(), session.kind());
        // Extra variables are validated here, before anything is sent.
        let mut payload = assembler.assemble(session.form())?;

        let submitted = session.submitted_values();
        let labels = submitted.other_prompts.labels.unwrap_or_default();
        let label_ids = resolve_label_ids(&self.api, &labels, session.template()).await?;
        assembler.apply_labels(&mut payload, label_ids);
        Ok(payload)
    }

    /// Submit the session; one request per call, never retried.
    pub async fn launch(&self, session: &WizardSession) -> Result<LaunchOutcome, LaunchError> {
        let payload = self.prepare(session).await?;
        let template = session.template();
        tracing::info!(template = template.id, kind = %session.kind(), "launching template");

        // Survey answers may be passwords; keep them out of the request log.
        let survey_keys: Vec<String> = session
            .submitted_values()
            .survey
            .answers
            .map(|answers| answers.keys().cloned().collect())
            .unwrap_or_default();
        let api = self.api.clone().with_secret_vars(survey_keys);

        let job = launch_template(&api, session.kind(), template.id, &payload)
            .await
            .map_err(LaunchError::Submit)?;
        tracing::info!(job = job.id, job_type = %job.job_type, "launch accepted");
        Ok(LaunchOutcome::from_job(job))
    }
}
