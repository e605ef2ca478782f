use serde::Serialize;
use serde_json::Value;

/// Whether a value should be shown as "nothing selected".
///
/// Null, empty arrays and empty objects are empty, and so is an object whose
/// values are all empty. Scalars (including `0`, `false` and `""`) are not.
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty() || map.values().all(is_empty),
        _ => false,
    }
}

/// [`is_empty`] for any serializable form value.
pub fn is_empty_field<T: Serialize>(value: &T) -> bool {
    serde_json::to_value(value).map(|v| is_empty(&v)).unwrap_or(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_null_and_empty_collections_are_empty() {
        assert!(is_empty(&Value::Null));
        assert!(is_empty(&json!([])));
        assert!(is_empty(&json!({})));
    }

    #[test]
    fn test_object_of_empty_values_is_empty() {
        assert!(is_empty(&json!({"a": []})));
        assert!(is_empty(&json!({"a": null, "b": {"c": {}}})));
    }

    #[test]
    fn test_populated_values_are_not_empty() {
        assert!(!is_empty(&json!({"a": [1]})));
        assert!(!is_empty(&json!([null])));
        assert!(!is_empty(&json!(0)));
        assert!(!is_empty(&json!("")));
    }

    #[test]
    fn test_is_empty_field_handles_options() {
        let none: Option<Vec<i64>> = None;
        assert!(is_empty_field(&none));
        assert!(is_empty_field(&Some(Vec::<i64>::new())));
        assert!(!is_empty_field(&Some(vec![3])));
    }
}
