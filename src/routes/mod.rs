/// Application routes configuration
use crate::handlers::{
    get_mars_manifest, get_mars_photos, get_mars_weather, get_mars_weather_sol,
    get_picture_of_the_day, post_rover_qa, post_weather_summary, root, AppState,
};
use crate::middleware::{origin_guard, rate_limit};
use axum::{
    middleware,
    routing::{get, post},
    Router,
};

/// Build the application router with all routes. Layer order matters: the
/// origin guard runs first, then the rate limiter, then routing.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Liveness
        .route("/", get(root))
        // Rover photo archive
        .route("/api/mars-photos", get(get_mars_photos))
        .route("/api/mars-manifest/:rover", get(get_mars_manifest))
        // Completion-backed assistance
        .route("/api/rover-qa", post(post_rover_qa))
        .route("/api/mars-weather-summary", post(post_weather_summary))
        // InSight weather feed
        .route("/api/mars-weather/:sol", get(get_mars_weather_sol))
        .route("/api/mars-weather", get(get_mars_weather))
        // Picture of the day
        .route("/api/picture-of-the-day", get(get_picture_of_the_day))
        .layer(middleware::from_fn_with_state(state.clone(), rate_limit))
        .layer(middleware::from_fn_with_state(state.clone(), origin_guard))
        .with_state(state)
}
