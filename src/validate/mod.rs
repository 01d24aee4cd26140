/// Per-endpoint request validation
///
/// Everything here runs before any upstream call; a failure becomes a 400
/// and the request goes no further.
use crate::domain::{PhotoQuery, QaRequest};
use crate::errors::{ApiError, ApiResult};
use serde_json::Value;
use std::collections::HashMap;

/// Rover names the photo archive recognizes.
pub const KNOWN_ROVERS: &[&str] = &["curiosity", "opportunity", "spirit", "perseverance"];

/// Validate the /api/mars-photos query string. Only rover, sol and page are
/// constrained here; the provider performs final validation of the rest.
pub fn photo_query(params: &HashMap<String, String>) -> ApiResult<PhotoQuery> {
    let rover = match params.get("rover") {
        Some(r) => {
            let lower = r.trim().to_ascii_lowercase();
            if !KNOWN_ROVERS.contains(&lower.as_str()) {
                return Err(ApiError::validation(format!("Unknown rover '{}'", r)));
            }
            lower
        }
        None => "curiosity".to_string(),
    };

    let sol = match params.get("sol") {
        Some(raw) => {
            let n: i64 = raw
                .parse()
                .map_err(|_| ApiError::validation("sol must be an integer"))?;
            if n < 0 {
                return Err(ApiError::validation("sol must be non-negative"));
            }
            Some(n)
        }
        None => None,
    };

    let page = match params.get("page") {
        Some(raw) => {
            let n: i64 = raw
                .parse()
                .map_err(|_| ApiError::validation("page must be an integer"))?;
            if n < 1 {
                return Err(ApiError::validation("page must be positive"));
            }
            n
        }
        None => 1,
    };

    Ok(PhotoQuery {
        rover,
        sol,
        earth_date: params.get("earth_date").cloned(),
        camera: params.get("camera").cloned(),
        page,
    })
}

/// Validate the rover path segment of /api/mars-manifest/:rover.
pub fn rover_path(rover: &str) -> ApiResult<()> {
    if rover.trim().is_empty() {
        return Err(ApiError::validation("rover must not be empty"));
    }
    Ok(())
}

/// Validate a rover Q&A body: a non-empty question and a photo object whose
/// img_src is an http(s) URL. The URL check keeps arbitrary payloads out of
/// the completion prompt.
pub fn qa_request(body: &Value) -> ApiResult<QaRequest> {
    let question = body
        .get("question")
        .and_then(|q| q.as_str())
        .unwrap_or_default();
    if question.trim().is_empty() {
        return Err(ApiError::validation("question must be a non-empty string"));
    }

    let photo = body
        .get("photo")
        .filter(|p| p.is_object())
        .ok_or_else(|| ApiError::validation("photo must be an object"))?;

    match photo.get("img_src").and_then(|s| s.as_str()) {
        Some(src) if src.starts_with("http") => {}
        _ => {
            return Err(ApiError::validation(
                "photo.img_src must be an http(s) URL",
            ))
        }
    }

    Ok(QaRequest {
        question: question.to_string(),
        photo: photo.clone(),
    })
}

/// Validate a weather-summary body: any non-null object. The shape is echoed
/// into a prompt rather than interpreted, so nothing deeper is checked.
pub fn weather_summary_body(body: &Value) -> ApiResult<()> {
    if !body.is_object() {
        return Err(ApiError::validation("body must be a weather object"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn photo_query_defaults() {
        let q = photo_query(&params(&[])).unwrap();
        assert_eq!(q.rover, "curiosity");
        assert_eq!(q.sol, None);
        assert_eq!(q.page, 1);
    }

    #[test]
    fn photo_query_full() {
        let q = photo_query(&params(&[
            ("rover", "Curiosity"),
            ("sol", "1000"),
            ("camera", "MAST"),
            ("earth_date", "2015-06-01"),
            ("page", "2"),
        ]))
        .unwrap();
        assert_eq!(q.rover, "curiosity");
        assert_eq!(q.sol, Some(1000));
        assert_eq!(q.camera.as_deref(), Some("MAST"));
        assert_eq!(q.page, 2);
    }

    #[test]
    fn photo_query_rejects_unknown_rover() {
        assert!(photo_query(&params(&[("rover", "sojourner-9000")])).is_err());
    }

    #[test]
    fn photo_query_rejects_bad_sol() {
        assert!(photo_query(&params(&[("sol", "abc")])).is_err());
        assert!(photo_query(&params(&[("sol", "-1")])).is_err());
    }

    #[test]
    fn photo_query_rejects_bad_page() {
        assert!(photo_query(&params(&[("page", "zero")])).is_err());
        assert!(photo_query(&params(&[("page", "0")])).is_err());
    }

    #[test]
    fn rover_path_rejects_blank() {
        assert!(rover_path("  ").is_err());
        assert!(rover_path("curiosity").is_ok());
    }

    #[test]
    fn qa_rejects_empty_question() {
        let body = serde_json::json!({
            "question": "   ",
            "photo": {"img_src": "http://mars.nasa.gov/photo.jpg"}
        });
        assert!(qa_request(&body).is_err());
    }

    #[test]
    fn qa_rejects_non_http_img_src() {
        let body = serde_json::json!({
            "question": "what is this?",
            "photo": {"img_src": "ftp://x"}
        });
        assert!(qa_request(&body).is_err());
    }

    #[test]
    fn qa_rejects_non_object_photo() {
        let body = serde_json::json!({"question": "q", "photo": "not an object"});
        assert!(qa_request(&body).is_err());
    }

    #[test]
    fn qa_accepts_valid_request() {
        let body = serde_json::json!({
            "question": "What is in this photo?",
            "photo": {
                "rover": {"name": "Curiosity"},
                "camera": {"full_name": "Mast Camera"},
                "earth_date": "2020-01-01",
                "sol": 1000,
                "img_src": "http://mars.nasa.gov/photo.jpg"
            }
        });
        let qa = qa_request(&body).unwrap();
        assert_eq!(qa.question, "What is in this photo?");
        assert!(qa.photo.get("img_src").is_some());
    }

    #[test]
    fn weather_summary_requires_object() {
        assert!(weather_summary_body(&Value::Null).is_err());
        assert!(weather_summary_body(&serde_json::json!([1, 2])).is_err());
        assert!(weather_summary_body(&serde_json::json!({"AT": {"av": -60.0}})).is_ok());
    }
}
