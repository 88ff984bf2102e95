//! Fixed-window request limiter keyed by client address.
//!
//! Windows live in process memory, so each server instance counts on its own.

use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, Instant},
};

use axum::http::HeaderMap;
use tokio::sync::Mutex;

use crate::server::error::AppError;

/// Expired windows are swept once the map grows past this many clients.
const SWEEP_THRESHOLD: usize = 1024;

#[derive(Clone, Copy)]
struct Window {
    started_at: Instant,
    count: u32,
}

#[derive(Clone)]
pub struct RateLimiter {
    limit: u32,
    window: Duration,
    clients: Arc<Mutex<HashMap<String, Window>>>,
}

impl RateLimiter {
    pub fn new(limit: u32, window: Duration) -> Self {
        Self {
            limit,
            window,
            clients: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Counts a request from the client identified by `headers`.
    ///
    /// # Returns
    /// - `Ok(())` - Request is within the limit
    /// - `Err(AppError::RateLimited)` - Limit reached for the current window
    pub async fn check(&self, headers: &HeaderMap) -> Result<(), AppError> {
        self.check_key(&client_key(headers), Instant::now()).await
    }

    async fn check_key(&self, key: &str, now: Instant) -> Result<(), AppError> {
        let mut clients = self.clients.lock().await;

        if clients.len() > SWEEP_THRESHOLD {
            let window = self.window;
            clients.retain(|_, entry| now.duration_since(entry.started_at) < window);
        }

        let entry = clients.entry(key.to_string()).or_insert(Window {
            started_at: now,
            count: 0,
        });
        if now.duration_since(entry.started_at) >= self.window {
            *entry = Window {
                started_at: now,
                count: 0,
            };
        }

        if entry.count >= self.limit {
            let retry_in = self.window.saturating_sub(now.duration_since(entry.started_at));
            return Err(AppError::RateLimited(format!(
                "Too many requests, try again in {} seconds",
                retry_in.as_secs().max(1)
            )));
        }
        entry.count += 1;

        Ok(())
    }
}

/// Identifies the client: first `X-Forwarded-For` entry, else `X-Real-IP`, else `unknown`.
pub fn client_key(headers: &HeaderMap) -> String {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
    };

    header("x-forwarded-for")
        .and_then(|value| value.split(',').next().map(|ip| ip.trim().to_string()))
        .filter(|ip| !ip.is_empty())
        .or_else(|| header("x-real-ip").map(|ip| ip.trim().to_string()))
        .filter(|ip| !ip.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}
