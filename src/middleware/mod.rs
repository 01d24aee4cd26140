/// Request guards that run before routing: origin allow-list and rate limit
use crate::errors::ApiError;
use crate::handlers::AppState;
use crate::limiter::RateLimitDecision;
use axum::{
    extract::{ConnectInfo, Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use std::collections::HashSet;
use std::net::SocketAddr;
use tracing::{debug, info};

/// Configured set of origins allowed to call the gateway. Non-browser
/// callers send no Origin header and always pass; an empty set means every
/// origin is accepted.
pub struct OriginAllowList {
    allowed: HashSet<String>,
}

impl OriginAllowList {
    pub fn new(origins: impl IntoIterator<Item = String>) -> Self {
        Self {
            allowed: origins.into_iter().collect(),
        }
    }

    pub fn allows(&self, origin: Option<&str>) -> bool {
        match origin {
            None => true,
            Some(o) => self.allowed.is_empty() || self.allowed.contains(o),
        }
    }
}

/// Reject requests whose declared origin is not in the allow-list.
pub async fn origin_guard(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let origin = request
        .headers()
        .get(header::ORIGIN)
        .and_then(|v| v.to_str().ok());

    if !state.origins.allows(origin) {
        info!(origin = ?origin, "request rejected by origin allow-list");
        return Err(ApiError::OriginRejected);
    }

    Ok(next.run(request).await)
}

/// Count the request against the caller's window, rejecting over-quota calls.
pub async fn rate_limit(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    match state.limiter.check(addr.ip()).await {
        RateLimitDecision::Allowed { remaining, .. } => {
            debug!(ip = %addr.ip(), remaining, "request allowed");
            Ok(next.run(request).await)
        }
        RateLimitDecision::Limited { limit, retry_after } => {
            info!(
                ip = %addr.ip(),
                limit,
                retry_after_secs = retry_after.as_secs(),
                "request rate limited"
            );
            Err(ApiError::RateLimited)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_origin_always_allowed() {
        let list = OriginAllowList::new(vec!["https://mars.example".to_string()]);
        assert!(list.allows(None));
    }

    #[test]
    fn empty_set_allows_all() {
        let list = OriginAllowList::new(Vec::<String>::new());
        assert!(list.allows(Some("https://anywhere.example")));
    }

    #[test]
    fn member_allowed_others_denied() {
        let list = OriginAllowList::new(vec![
            "https://mars.example".to_string(),
            "http://localhost:3000".to_string(),
        ]);
        assert!(list.allows(Some("http://localhost:3000")));
        assert!(!list.allows(Some("https://evil.example")));
    }
}
