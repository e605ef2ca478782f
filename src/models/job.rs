use serde::{Deserialize, Serialize};

/// The job resource returned by a launch request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnifiedJob {
    pub id: i64,
    #[serde(rename = "type")]
    pub job_type: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub status: String,
}

impl UnifiedJob {
    /// UI route segment for the job's type.
    pub fn route_segment(&self) -> &str {
        match self.job_type.as_str() {
            "job" => "playbook",
            "workflow_job" => "workflow",
            "project_update" => "project",
            "inventory_update" => "inventory",
            "system_job" => "management",
            "ad_hoc_command" => "command",
            other => other,
        }
    }

    /// Path of the job's output view, e.g. `/jobs/playbook/42/output`.
    pub fn output_path(&self) -> String {
        format!("/jobs/{}/{}/output", self.route_segment(), self.id)
    }
}
