use serde::Serialize;
use serde_json::Value;

use crate::api::ApiClient;
use crate::error::ApiError;
use crate::models::{Credential, ExecutionEnvironment, Label};

#[derive(Serialize)]
struct NewLabel<'a> {
    name: &'a str,
    organization: i64,
}

pub async fn get_execution_environment(api: &ApiClient, id: i64) -> Result<ExecutionEnvironment, ApiError> {
    api.get(&format!("/execution_environments/{}/", id)).await
}

pub async fn get_credential(api: &ApiClient, id: i64) -> Result<Credential, ApiError> {
    api.get(&format!("/credentials/{}/", id)).await
}

pub async fn create_label(api: &ApiClient, name: &str, organization: i64) -> Result<Label, ApiError> {
    api.post("/labels/", &NewLabel { name, organization }).await
}

/// Unauthenticated health endpoint.
pub async fn ping(api: &ApiClient) -> Result<Value, ApiError> {
    api.get("/ping/").await
}
