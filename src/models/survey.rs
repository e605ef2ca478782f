use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Replacement shown for secret values.
pub const ENCRYPTED_SENTINEL: &str = "$encrypted$";

/// Question type whose answers are masked on review.
pub const PASSWORD_QUESTION_TYPE: &str = "password";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyQuestion {
    pub variable: String,
    #[serde(rename = "type")]
    pub question_type: String,
    #[serde(default)]
    pub question_name: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub default: Option<Value>,
}

/// Response of `GET /<templates>/<id>/survey_spec/`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurveySpec {
    pub name: String,
    pub description: String,
    pub spec: Vec<SurveyQuestion>,
}

impl SurveySpec {
    pub fn password_variables(&self) -> Vec<&str> {
        self.spec
            .iter()
            .filter(|q| q.question_type == PASSWORD_QUESTION_TYPE)
            .map(|q| q.variable.as_str())
            .collect()
    }
}
