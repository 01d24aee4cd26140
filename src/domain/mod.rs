/// Domain models for the application
use serde::Serialize;
use serde_json::Value;

/// A validated photo query, ready to be turned into upstream query params.
#[derive(Debug, Clone)]
pub struct PhotoQuery {
    pub rover: String,
    pub sol: Option<i64>,
    pub earth_date: Option<String>,
    pub camera: Option<String>,
    pub page: i64,
}

/// Rover reference inside a normalized photo.
#[derive(Debug, Clone, Serialize)]
pub struct RoverRef {
    pub name: String,
}

/// Camera reference inside a normalized photo.
#[derive(Debug, Clone, Serialize)]
pub struct CameraRef {
    pub name: String,
    pub full_name: String,
}

/// A rover photo in the stable client-facing shape. Every field is always
/// present; absent upstream values become the literal "Unknown". `id` and
/// `sol` stay as raw JSON values so numeric ids survive untouched.
#[derive(Debug, Clone, Serialize)]
pub struct Photo {
    pub id: Value,
    pub sol: Value,
    pub img_src: String,
    pub earth_date: String,
    pub rover: RoverRef,
    pub camera: CameraRef,
}

/// One wind-rose bucket derived from a sol's `WD` map.
#[derive(Debug, Clone, Serialize)]
pub struct WindSample {
    pub direction: Value,
    pub degrees: Value,
    pub count: Value,
}

/// Single-sol weather extraction, as served by /api/mars-weather/:sol.
#[derive(Debug, Clone, Serialize)]
pub struct SolWeather {
    pub temperature: Value,
    pub pressure: Value,
    #[serde(rename = "windData")]
    pub wind_data: Vec<WindSample>,
    pub sol: String,
}

/// A validated rover Q&A request.
#[derive(Debug, Clone)]
pub struct QaRequest {
    pub question: String,
    pub photo: Value,
}

/// Q&A response. Both fields carry the same generated text; two names are
/// kept because different client pages read different ones.
#[derive(Debug, Serialize)]
pub struct QaAnswer {
    pub answer: String,
    #[serde(rename = "generatedText")]
    pub generated_text: String,
}

impl QaAnswer {
    pub fn new(text: String) -> Self {
        Self {
            answer: text.clone(),
            generated_text: text,
        }
    }
}

/// Weather summary response.
#[derive(Debug, Serialize)]
pub struct WeatherSummary {
    pub summary: String,
}
