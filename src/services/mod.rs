/// Business logic services layer
use crate::clients::{CompletionClient, NasaClient};
use crate::domain::{PhotoQuery, QaRequest, SolWeather};
use crate::errors::{ApiError, ApiResult};
use crate::normalize;
use crate::prompts;
use serde_json::Value;

/// Rover photo archive service: fetch and normalize.
pub struct PhotoService {
    client: NasaClient,
}

impl PhotoService {
    pub fn new(client: NasaClient) -> Self {
        Self { client }
    }

    /// Fetch a photo page and reshape it into the stable client contract.
    pub async fn photos(&self, query: &PhotoQuery) -> ApiResult<Value> {
        let raw = self.client.fetch_mars_photos(query).await?;
        Ok(normalize::photos_response(&raw))
    }

    /// Fetch a rover's mission manifest with the informational page count.
    pub async fn manifest(&self, rover: &str) -> ApiResult<Value> {
        let raw = self.client.fetch_manifest(rover).await?;
        Ok(normalize::manifest_response(&raw))
    }

    /// Fetch the picture of the day, passed through untouched.
    pub async fn picture_of_the_day(&self) -> ApiResult<Value> {
        self.client.fetch_apod().await
    }
}

/// InSight weather feed service.
pub struct WeatherService {
    client: NasaClient,
}

impl WeatherService {
    pub fn new(client: NasaClient) -> Self {
        Self { client }
    }

    /// Full multi-sol dataset, passed through untouched.
    pub async fn full_dataset(&self) -> ApiResult<Value> {
        self.client.fetch_weather().await
    }

    /// One sol's record extracted from the full dataset. A missing sol is a
    /// 404, not an upstream failure.
    pub async fn for_sol(&self, sol: &str) -> ApiResult<SolWeather> {
        let dataset = self.client.fetch_weather().await?;
        normalize::sol_weather(&dataset, sol)
            .ok_or_else(|| ApiError::NotFound("Sol not found".to_string()))
    }
}

/// Completion-backed assistance: photo Q&A and weather summaries.
pub struct AssistService {
    client: CompletionClient,
}

impl AssistService {
    pub fn new(client: CompletionClient) -> Self {
        Self { client }
    }

    /// Answer a question about a validated photo.
    pub async fn answer_question(&self, request: &QaRequest) -> ApiResult<String> {
        let prompt = prompts::rover_qa_prompt(&request.photo, &request.question);
        self.client
            .complete(&prompt, "Failed to generate answer")
            .await
    }

    /// Summarize a validated weather record for a general audience.
    pub async fn summarize_weather(&self, weather: &Value) -> ApiResult<String> {
        let prompt = prompts::weather_summary_prompt(weather);
        self.client
            .complete(&prompt, "Failed to generate weather summary")
            .await
    }
}
