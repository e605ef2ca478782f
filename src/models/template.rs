use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::models::NamedRef;

/// The two launchable template resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateKind {
    JobTemplate,
    WorkflowJobTemplate,
}

impl TemplateKind {
    /// REST collection, e.g. `job_templates`.
    pub fn collection(self) -> &'static str {
        match self {
            TemplateKind::JobTemplate => "job_templates",
            TemplateKind::WorkflowJobTemplate => "workflow_job_templates",
        }
    }

    /// Value of the resource's `type` field.
    pub fn resource_type(self) -> &'static str {
        match self {
            TemplateKind::JobTemplate => "job_template",
            TemplateKind::WorkflowJobTemplate => "workflow_job_template",
        }
    }

    pub fn from_resource_type(value: &str) -> Option<Self> {
        match value {
            "job_template" => Some(TemplateKind::JobTemplate),
            "workflow_job_template" => Some(TemplateKind::WorkflowJobTemplate),
            _ => None,
        }
    }

    pub fn is_workflow(self) -> bool {
        matches!(self, TemplateKind::WorkflowJobTemplate)
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.resource_type())
    }
}

impl FromStr for TemplateKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "job_template" | "job_templates" | "jt" => Ok(TemplateKind::JobTemplate),
            "workflow_job_template" | "workflow_job_templates" | "workflow" | "wfjt" => {
                Ok(TemplateKind::WorkflowJobTemplate)
            }
            other => Err(format!(
                "unknown template kind '{}' (expected job_template or workflow_job_template)",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryFields {
    #[serde(default)]
    pub organization: Option<NamedRef>,
    #[serde(default)]
    pub project: Option<NamedRef>,
    #[serde(default)]
    pub inventory: Option<NamedRef>,
}

/// A job template or workflow job template as returned by its detail endpoint.
/// Prompting flags are read from the launch configuration, not from here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub resource_type: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub organization: Option<i64>,
    #[serde(default)]
    pub playbook: Option<String>,
    #[serde(default)]
    pub summary_fields: SummaryFields,
}

impl Template {
    pub fn kind(&self) -> Option<TemplateKind> {
        TemplateKind::from_resource_type(&self.resource_type)
    }

    pub fn is_job_template(&self) -> bool {
        self.kind() == Some(TemplateKind::JobTemplate)
    }
}
