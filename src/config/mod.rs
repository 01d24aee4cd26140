/// Application configuration module
use std::env;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub nasa_api_url: String,
    pub nasa_api_key: String,
    pub completion_api_url: String,
    pub completion_api_key: String,
    pub allowed_origins: Vec<String>,
    pub rate_limit: RateLimitConfig,
}

#[derive(Clone, Debug)]
pub struct RateLimitConfig {
    pub window_secs: u64,
    pub max_requests: u32,
}

impl RateLimitConfig {
    pub fn window(&self) -> Duration {
        Duration::from_secs(self.window_secs)
    }
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            window_secs: 900, // 15 minutes
            max_requests: 100,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let port = env_u64("PORT", 5000) as u16;

        let nasa_api_url =
            env::var("NASA_API_URL").unwrap_or_else(|_| "https://api.nasa.gov".to_string());

        let nasa_api_key = env::var("NASA_API_KEY").unwrap_or_else(|_| "DEMO_KEY".to_string());

        let completion_api_url =
            env::var("OPENAI_API_URL").unwrap_or_else(|_| "https://api.openai.com/v1".to_string());

        let completion_api_key = env::var("OPENAI_API_KEY").unwrap_or_default();

        // Comma-separated; an empty list means every origin is accepted.
        let allowed_origins = env::var("ALLOWED_ORIGINS")
            .unwrap_or_default()
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let defaults = RateLimitConfig::default();
        let rate_limit = RateLimitConfig {
            window_secs: env_u64("RATE_LIMIT_WINDOW_SECONDS", defaults.window_secs),
            max_requests: env_u64("RATE_LIMIT_MAX_REQUESTS", defaults.max_requests as u64) as u32,
        };

        Ok(Self {
            port,
            nasa_api_url,
            nasa_api_key,
            completion_api_url,
            completion_api_key,
            allowed_origins,
            rate_limit,
        })
    }
}

fn env_u64(key: &str, default: u64) -> u64 {
    env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}
