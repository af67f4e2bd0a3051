use serde_json::Value;

pub(crate) const API_SUFFIX: &str = "/api";
pub(crate) const CONFIG_SUFFIX: &str = "/config";

pub(crate) fn join_path(base: &str, suffix: &str) -> String {
    let mut url = base.trim_end_matches('/').to_string();
    url.push_str(suffix);
    url
}

pub(crate) fn normalize_endpoint(endpoint: &str) -> String {
    if endpoint.starts_with('/') {
        endpoint.to_string()
    } else {
        format!("/{}", endpoint)
    }
}

// JSON truthiness: false, null, 0 and "" are falsy.
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn join_path_trims_trailing_slash() {
        assert_eq!(join_path("", API_SUFFIX), "/api");
        assert_eq!(join_path("/sub", API_SUFFIX), "/sub/api");
        assert_eq!(join_path("/sub/", API_SUFFIX), "/sub/api");
        assert_eq!(join_path("/", CONFIG_SUFFIX), "/config");
    }

    #[test]
    fn normalize_adds_single_slash() {
        assert_eq!(normalize_endpoint("servers"), "/servers");
        assert_eq!(normalize_endpoint("/servers"), "/servers");
        assert_eq!(normalize_endpoint(""), "/");
    }

    #[test]
    fn truthiness() {
        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!(1)));
        assert!(is_truthy(&json!("yes")));
        assert!(is_truthy(&json!({})));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!("")));
        assert!(!is_truthy(&Value::Null));
    }
}
