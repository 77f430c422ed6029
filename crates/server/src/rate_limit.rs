use axum::{
    extract::{ConnectInfo, Request},
    middleware::Next,
    response::{IntoResponse, Response},
};
use shared_types::AppError;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

pub const RATE_LIMITED: &str = "Слишком много попыток входа. Попробуйте позже.";

/// Sliding window rate limit state shared across requests.
#[derive(Clone)]
pub struct RateLimitState {
    inner: Arc<Mutex<RateLimitInner>>,
    trust_forwarded_for: bool,
}

struct RateLimitInner {
    /// Map from client key -> list of request timestamps.
    requests: HashMap<String, Vec<Instant>>,
    max_requests: u32,
    window: Duration,
}

impl RateLimitState {
    /// Create rate limiter allowing `max_requests` per `window`.
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            inner: Arc::new(Mutex::new(RateLimitInner {
                requests: HashMap::new(),
                max_requests,
                window,
            })),
            trust_forwarded_for: false,
        }
    }

    /// Honour `X-Forwarded-For` when keying clients. Off by default: the header is
    /// client-controlled unless a proxy rewrites it.
    pub fn trust_forwarded_for(mut self, trust: bool) -> Self {
        self.trust_forwarded_for = trust;
        self
    }

    /// Record a request from `key`. Returns true if it is within the limit.
    fn check(&self, key: &str) -> bool {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        let now = Instant::now();
        let window = inner.window;
        let max = inner.max_requests;

        // Drop keys whose whole history has aged out so the map stays bounded.
        inner
            .requests
            .retain(|_, ts| ts.last().is_some_and(|t| now.duration_since(*t) < window));

        let timestamps = inner.requests.entry(key.to_string()).or_default();
        timestamps.retain(|t| now.duration_since(*t) < window);

        if timestamps.len() as u32 >= max {
            return false;
        }

        timestamps.push(now);
        true
    }

    /// Client key: the peer address, or the first `X-Forwarded-For` hop when trusted.
    /// Requests without connect info share one bucket.
    fn client_key(&self, request: &Request) -> String {
        if self.trust_forwarded_for {
            if let Some(forwarded) = forwarded_for(request) {
                return forwarded.to_string();
            }
        }

        request
            .extensions()
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.ip().to_string())
            .unwrap_or_else(|| "unknown".to_string())
    }
}

fn forwarded_for(request: &Request) -> Option<&str> {
    request
        .headers()
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

/// Axum middleware throttling the auth routes per client.
pub async fn rate_limit_middleware(
    axum::extract::State(state): axum::extract::State<RateLimitState>,
    request: Request,
    next: Next,
) -> Response {
    let key = state.client_key(&request);

    if !state.check(&key) {
        tracing::warn!(client = %key, "auth rate limit exceeded");
        return AppError::rate_limited(RATE_LIMITED).into_response();
    }

    next.run(request).await
}
