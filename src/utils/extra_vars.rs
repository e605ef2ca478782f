use serde_json::{Map, Value};

use crate::error::LaunchError;

/// Parse extra variables text (YAML, or JSON as a subset of it) into a
/// mapping. Blank text and empty documents yield an empty mapping.
pub fn parse_extra_vars(raw: Option<&str>) -> Result<Map<String, Value>, LaunchError> {
    let text = match raw {
        Some(t) if !t.trim().is_empty() => t,
        _ => return Ok(Map::new()),
    };
    let value: Value =
        serde_yaml::from_str(text).map_err(|e| LaunchError::ExtraVarsParse(e.to_string()))?;
    match value {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Map::new()),
        Value::Array(_) => Err(LaunchError::ExtraVarsNotMapping("a list")),
        Value::String(_) => Err(LaunchError::ExtraVarsNotMapping("a string")),
        Value::Number(_) => Err(LaunchError::ExtraVarsNotMapping("a number")),
        Value::Bool(_) => Err(LaunchError::ExtraVarsNotMapping("a boolean")),
    }
}

/// Shallow merge of survey answers over parsed extra variables; survey keys win.
pub fn merge_survey_answers(
    extra_vars: Option<&str>,
    answers: Option<&Map<String, Value>>,
) -> Result<Map<String, Value>, LaunchError> {
    let mut merged = parse_extra_vars(extra_vars)?;
    if let Some(answers) = answers {
        for (key, value) in answers {
            merged.insert(key.clone(), value.clone());
        }
    }
    Ok(merged)
}

/// Render a mapping as YAML for display.
pub fn json_to_yaml(value: &Map<String, Value>) -> String {
    serde_yaml::to_string(value).unwrap_or_else(|_| "{}\n".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_yaml_and_json() {
        let yaml = parse_extra_vars(Some("region: eu\nreplicas: 3\n")).unwrap();
        assert_eq!(yaml.get("region"), Some(&json!("eu")));
        assert_eq!(yaml.get("replicas"), Some(&json!(3)));

        let json_text = parse_extra_vars(Some(r#"{"region": "us"}"#)).unwrap();
        assert_eq!(json_text.get("region"), Some(&json!("us")));
    }

    #[test]
    fn test_blank_and_empty_documents_are_empty() {
        assert!(parse_extra_vars(None).unwrap().is_empty());
        assert!(parse_extra_vars(Some("  \n")).unwrap().is_empty());
        assert!(parse_extra_vars(Some("---\n")).unwrap().is_empty());
    }

    #[test]
    fn test_malformed_text_is_rejected() {
        let err = parse_extra_vars(Some("region: [eu")).unwrap_err();
        assert!(matches!(err, LaunchError::ExtraVarsParse(_)));
    }

    #[test]
    fn test_non_mapping_is_rejected() {
        let err = parse_extra_vars(Some("- a\n- b\n")).unwrap_err();
        assert!(matches!(err, LaunchError::ExtraVarsNotMapping("a list")));
    }

    #[test]
    fn test_survey_answers_override_extra_vars() {
        let answers = json!({"region": "ap", "size": "large"});
        let merged = merge_survey_answers(Some("region: eu\nkeep: true"), answers.as_object()).unwrap();
        assert_eq!(merged.get("region"), Some(&json!("ap")));
        assert_eq!(merged.get("size"), Some(&json!("large")));
        assert_eq!(merged.get("keep"), Some(&json!(true)));
    }
}
