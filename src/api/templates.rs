use crate::api::ApiClient;
use crate::error::ApiError;
use crate::models::{LaunchConfiguration, LaunchPayload, SurveySpec, Template, TemplateKind, UnifiedJob};

pub fn template_endpoint(kind: TemplateKind, id: i64) -> String {
    format!("/{}/{}/", kind.collection(), id)
}

pub fn launch_endpoint(kind: TemplateKind, id: i64) -> String {
    format!("/{}/{}/launch/", kind.collection(), id)
}

pub fn survey_spec_endpoint(kind: TemplateKind, id: i64) -> String {
    format!("/{}/{}/survey_spec/", kind.collection(), id)
}

pub async fn get_template(api: &ApiClient, kind: TemplateKind, id: i64) -> Result<Template, ApiError> {
    api.get(&template_endpoint(kind, id)).await
}

pub async fn get_launch_configuration(
    api: &ApiClient,
    kind: TemplateKind,
    id: i64,
) -> Result<LaunchConfiguration, ApiError> {
    api.get(&launch_endpoint(kind, id)).await
}

pub async fn get_survey_spec(api: &ApiClient, kind: TemplateKind, id: i64) -> Result<SurveySpec, ApiError> {
    api.get(&survey_spec_endpoint(kind, id)).await
}

/// Submit a launch; the controller answers with the created job.
pub async fn launch_template(
    api: &ApiClient,
    kind: TemplateKind,
    id: i64,
    payload: &LaunchPayload,
) -> Result<UnifiedJob, ApiError> {
    api.post(&launch_endpoint(kind, id), payload).await
}
