/// Utility functions for tolerant extraction from upstream JSON
use serde_json::Value;

/// Walk a nested path, returning the value if every segment exists.
pub fn v_at<'a>(v: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut cur = v;
    for key in path {
        cur = cur.get(*key)?;
    }
    Some(cur)
}

/// Extract a string at a nested path. Numbers are rendered to strings so a
/// numeric sol or id still reads as text; empty strings count as absent.
pub fn s_at(v: &Value, path: &[&str]) -> Option<String> {
    let x = v_at(v, path)?;
    if let Some(s) = x.as_str() {
        if !s.is_empty() {
            return Some(s.to_string());
        }
    } else if x.is_number() {
        return Some(x.to_string());
    }
    None
}

/// Extract a string at a nested path, defaulting when absent.
pub fn s_at_or(v: &Value, path: &[&str], default: &str) -> String {
    s_at(v, path).unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_v_at_nested() {
        let json = serde_json::json!({"rover": {"name": "curiosity"}});
        assert_eq!(
            v_at(&json, &["rover", "name"]),
            Some(&Value::String("curiosity".into()))
        );
        assert_eq!(v_at(&json, &["rover", "status"]), None);
    }

    #[test]
    fn test_s_at_string() {
        let json = serde_json::json!({"camera": {"name": "MAST"}});
        assert_eq!(s_at(&json, &["camera", "name"]), Some("MAST".to_string()));
    }

    #[test]
    fn test_s_at_number_renders() {
        let json = serde_json::json!({"sol": 1000});
        assert_eq!(s_at(&json, &["sol"]), Some("1000".to_string()));
    }

    #[test]
    fn test_s_at_empty_string_is_absent() {
        let json = serde_json::json!({"name": ""});
        assert_eq!(s_at(&json, &["name"]), None);
    }

    #[test]
    fn test_s_at_or_default() {
        let json = serde_json::json!({});
        assert_eq!(s_at_or(&json, &["earth_date"], "Unknown"), "Unknown");
    }
}
