use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use axum::body::Body;
use axum::extract::State;
use axum::http::{header, HeaderValue, Request, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;

const WINDOW: Duration = Duration::from_secs(1);

#[derive(Debug)]
struct WindowState {
    start: Instant,
    count: u32,
}

/// Fixed one-second window shared by every request through the layer.
#[derive(Clone, Debug)]
pub struct RateLimiter {
    rps: u32,
    window: Arc<Mutex<WindowState>>,
}

impl RateLimiter {
    fn new(rps: u32) -> Self {
        Self {
            rps: rps.max(1),
            window: Arc::new(Mutex::new(WindowState {
                start: Instant::now(),
                count: 0,
            })),
        }
    }

    /// `Err` carries the time left until the window reopens.
    fn acquire_at(&self, now: Instant) -> Result<(), Duration> {
        let mut guard = self
            .window
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let elapsed = now.duration_since(guard.start);
        if elapsed >= WINDOW {
            guard.start = now;
            guard.count = 0;
        }
        if guard.count < self.rps {
            guard.count += 1;
            Ok(())
        } else {
            Err(WINDOW.saturating_sub(now.duration_since(guard.start)))
        }
    }
}

pub async fn rps_middleware(
    State(limiter): State<RateLimiter>,
    req: Request<Body>,
    next: Next,
) -> Response {
    match limiter.acquire_at(Instant::now()) {
        Ok(()) => next.run(req).await,
        Err(wait) => {
            tracing::warn!(uri = %req.uri(), "Rate limit exceeded");
            let retry_after = wait.as_secs_f64().ceil().max(1.0) as u64;
            let mut response = (
                StatusCode::TOO_MANY_REQUESTS,
                Json(json!({ "message": "rate_limit_exceeded" })),
            )
                .into_response();
            response
                .headers_mut()
                .insert(header::RETRY_AFTER, HeaderValue::from(retry_after));
            response
        }
    }
}

pub fn new_rps_state(rps: u32) -> RateLimiter {
    RateLimiter::new(rps)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_caps_then_resets() {
        let limiter = new_rps_state(2);
        let t0 = Instant::now();
        assert!(limiter.acquire_at(t0).is_ok());
        assert!(limiter.acquire_at(t0).is_ok());
        let wait = limiter
            .acquire_at(t0 + Duration::from_millis(400))
            .unwrap_err();
        assert_eq!(wait, Duration::from_millis(600));
        assert!(limiter.acquire_at(t0 + Duration::from_millis(1500)).is_ok());
    }

    #[test]
    fn zero_rps_still_admits_one() {
        let limiter = new_rps_state(0);
        let t0 = Instant::now();
        assert!(limiter.acquire_at(t0).is_ok());
        assert!(limiter.acquire_at(t0).is_err());
    }
}
