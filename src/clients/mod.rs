/// External API clients module
use crate::domain::PhotoQuery;
use crate::errors::{ApiError, ApiResult};
use reqwest::{Client, RequestBuilder};
use serde_json::{json, Value};
use std::time::Duration;

/// Chat model used for every completion call.
pub const COMPLETION_MODEL: &str = "gpt-3.5-turbo";
/// Upper bound on generated output length.
pub const COMPLETION_MAX_TOKENS: u32 = 300;
/// System role sent ahead of every user prompt.
const COMPLETION_SYSTEM_PROMPT: &str =
    "You are a helpful assistant with deep knowledge of Mars missions and Martian science.";

/// HTTP client wrapper with common configuration
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new() -> ApiResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("mars-gateway/1.0")
            .build()
            .map_err(|e| ApiError::upstream("Failed to initialize HTTP client", e.to_string()))?;
        Ok(Self { client })
    }

    pub fn get_client(&self) -> &Client {
        &self.client
    }
}

/// Send a prepared request and decode the JSON body. Transport errors,
/// non-2xx statuses and undecodable bodies all collapse to the same
/// client-facing message; the detail stays server-side.
async fn get_json(req: RequestBuilder, public: &'static str) -> ApiResult<Value> {
    let resp = req
        .send()
        .await
        .map_err(|e| ApiError::upstream(public, format!("request failed: {e}")))?;

    let status = resp.status();
    if !status.is_success() {
        return Err(ApiError::upstream(
            public,
            format!("unexpected status {status}"),
        ));
    }

    resp.json()
        .await
        .map_err(|e| ApiError::upstream(public, format!("malformed response body: {e}")))
}

/// Client for the NASA open APIs: rover photo archive, mission manifests,
/// InSight weather feed and APOD. The API key never leaves this process.
pub struct NasaClient {
    http_client: HttpClient,
    base_url: String,
    api_key: String,
}

impl NasaClient {
    pub fn new(base_url: String, api_key: String) -> ApiResult<Self> {
        Ok(Self {
            http_client: HttpClient::new()?,
            base_url,
            api_key,
        })
    }

    fn keyed(&self, req: RequestBuilder) -> RequestBuilder {
        if self.api_key.is_empty() {
            req
        } else {
            req.query(&[("api_key", &self.api_key)])
        }
    }

    /// Fetch a page of rover photos matching the validated query.
    pub async fn fetch_mars_photos(&self, query: &PhotoQuery) -> ApiResult<Value> {
        let url = format!(
            "{}/mars-photos/api/v1/rovers/{}/photos",
            self.base_url, query.rover
        );

        let mut req = self
            .http_client
            .get_client()
            .get(url)
            .query(&[("page", query.page.to_string())]);
        if let Some(sol) = query.sol {
            req = req.query(&[("sol", sol.to_string())]);
        }
        if let Some(earth_date) = &query.earth_date {
            req = req.query(&[("earth_date", earth_date)]);
        }
        if let Some(camera) = &query.camera {
            req = req.query(&[("camera", camera)]);
        }

        get_json(self.keyed(req), "Failed to fetch Mars Rover photos").await
    }

    /// Fetch the mission manifest for a rover.
    pub async fn fetch_manifest(&self, rover: &str) -> ApiResult<Value> {
        let url = format!("{}/mars-photos/api/v1/manifests/{}", self.base_url, rover);
        let req = self.http_client.get_client().get(url);
        get_json(self.keyed(req), "Failed to fetch Mars Rover manifest").await
    }

    /// Fetch the full multi-sol InSight weather dataset. The feed has no
    /// single-sol endpoint; per-sol extraction happens in the normalizer.
    pub async fn fetch_weather(&self) -> ApiResult<Value> {
        let url = format!("{}/insight_weather/", self.base_url);
        let req = self
            .http_client
            .get_client()
            .get(url)
            .query(&[("feedtype", "json"), ("ver", "1.0")]);
        get_json(self.keyed(req), "Failed to fetch Mars weather data").await
    }

    /// Fetch Astronomy Picture of the Day
    pub async fn fetch_apod(&self) -> ApiResult<Value> {
        let url = format!("{}/planetary/apod", self.base_url);
        let req = self
            .http_client
            .get_client()
            .get(url)
            .query(&[("thumbs", "true")]);
        get_json(self.keyed(req), "Failed to fetch picture of the day").await
    }
}

/// Client for the chat-completion service.
pub struct CompletionClient {
    http_client: HttpClient,
    base_url: String,
    api_key: String,
}

impl CompletionClient {
    pub fn new(base_url: String, api_key: String) -> ApiResult<Self> {
        Ok(Self {
            http_client: HttpClient::new()?,
            base_url,
            api_key,
        })
    }

    /// Run a single blocking completion and return the first candidate's
    /// text, trimmed. `public` is the message the caller sees on failure.
    pub async fn complete(&self, prompt: &str, public: &'static str) -> ApiResult<String> {
        let url = format!("{}/chat/completions", self.base_url);
        let body = json!({
            "model": COMPLETION_MODEL,
            "messages": [
                { "role": "system", "content": COMPLETION_SYSTEM_PROMPT },
                { "role": "user", "content": prompt },
            ],
            "max_tokens": COMPLETION_MAX_TOKENS,
        });

        let resp = self
            .http_client
            .get_client()
            .post(url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| ApiError::completion(public, format!("request failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::completion(
                public,
                format!("unexpected status {status}"),
            ));
        }

        let decoded: Value = resp
            .json()
            .await
            .map_err(|e| ApiError::completion(public, format!("malformed response body: {e}")))?;

        let text = decoded
            .get("choices")
            .and_then(|c| c.get(0))
            .and_then(|c| c.get("message"))
            .and_then(|m| m.get("content"))
            .and_then(|t| t.as_str())
            .ok_or_else(|| {
                ApiError::completion(public, "response carried no generated text".to_string())
            })?;

        Ok(text.trim().to_string())
    }
}
