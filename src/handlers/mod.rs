/// HTTP request handlers
use crate::clients::{CompletionClient, NasaClient};
use crate::config::AppConfig;
use crate::domain::{QaAnswer, SolWeather, WeatherSummary};
use crate::errors::ApiError;
use crate::limiter::RateLimiter;
use crate::middleware::OriginAllowList;
use crate::services::{AssistService, PhotoService, WeatherService};
use crate::validate;
use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub photos: Arc<PhotoService>,
    pub weather: Arc<WeatherService>,
    pub assist: Arc<AssistService>,
    pub limiter: Arc<RateLimiter>,
    pub origins: Arc<OriginAllowList>,
}

impl AppState {
    /// Wire clients and services from loaded configuration.
    pub fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        let photo_client = NasaClient::new(config.nasa_api_url.clone(), config.nasa_api_key.clone())?;
        let weather_client =
            NasaClient::new(config.nasa_api_url.clone(), config.nasa_api_key.clone())?;
        let completion_client = CompletionClient::new(
            config.completion_api_url.clone(),
            config.completion_api_key.clone(),
        )?;

        Ok(Self {
            photos: Arc::new(PhotoService::new(photo_client)),
            weather: Arc::new(WeatherService::new(weather_client)),
            assist: Arc::new(AssistService::new(completion_client)),
            limiter: Arc::new(RateLimiter::new(config.rate_limit.clone())),
            origins: Arc::new(OriginAllowList::new(config.allowed_origins.clone())),
        })
    }
}

/// Liveness probe
pub async fn root() -> &'static str {
    "NASA API gateway is running"
}

/// GET /api/mars-photos
pub async fn get_mars_photos(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Value>, ApiError> {
    let query = validate::photo_query(&params)?;
    let body = state.photos.photos(&query).await?;
    Ok(Json(body))
}

/// GET /api/mars-manifest/:rover
pub async fn get_mars_manifest(
    State(state): State<AppState>,
    Path(rover): Path<String>,
) -> Result<Json<Value>, ApiError> {
    validate::rover_path(&rover)?;
    let body = state.photos.manifest(&rover).await?;
    Ok(Json(body))
}

/// POST /api/rover-qa
pub async fn post_rover_qa(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<QaAnswer>, ApiError> {
    let request = validate::qa_request(&body)?;
    let text = state.assist.answer_question(&request).await?;
    Ok(Json(QaAnswer::new(text)))
}

/// GET /api/mars-weather/:sol
pub async fn get_mars_weather_sol(
    State(state): State<AppState>,
    Path(sol): Path<String>,
) -> Result<Json<SolWeather>, ApiError> {
    let weather = state.weather.for_sol(&sol).await?;
    Ok(Json(weather))
}

/// GET /api/mars-weather
pub async fn get_mars_weather(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let dataset = state.weather.full_dataset().await?;
    Ok(Json(dataset))
}

/// POST /api/mars-weather-summary
pub async fn post_weather_summary(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<WeatherSummary>, ApiError> {
    validate::weather_summary_body(&body)?;
    let summary = state.assist.summarize_weather(&body).await?;
    Ok(Json(WeatherSummary { summary }))
}

/// GET /api/picture-of-the-day
pub async fn get_picture_of_the_day(
    State(state): State<AppState>,
) -> Result<Json<Value>, ApiError> {
    let body = state.photos.picture_of_the_day().await?;
    Ok(Json(body))
}
