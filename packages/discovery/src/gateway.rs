//! LLM resilience gateway.
//!
//! Wraps the chat completions client with a rotating API key pool, a
//! governor rate limiter, and bounded retries. Rate-limited or failed
//! calls rotate to the next key and back off before retrying; the last
//! error propagates to the caller after the attempts are exhausted,
//! where the matcher degrades to heuristics.

use std::fmt;
use std::num::NonZeroU32;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use governor::{Quota, RateLimiter};
use llm_client::{strip_code_blocks, LlmClient, LlmError};
use nonzero_ext::nonzero;
use secrecy::{ExposeSecret, SecretBox};
use tracing::warn;

type DefaultRateLimiter = RateLimiter<
    governor::state::NotKeyed,
    governor::state::InMemoryState,
    governor::clock::DefaultClock,
>;

/// An API key held in secure memory.
///
/// `Debug` and `Display` are redacted so keys never leak into logs.
pub struct ApiKey(SecretBox<str>);

impl ApiKey {
    /// Wrap a key value.
    pub fn new(value: impl Into<String>) -> Self {
        Self(SecretBox::from(value.into()))
    }

    /// Expose the key for use in a request header.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl Clone for ApiKey {
    fn clone(&self) -> Self {
        Self::new(self.expose().to_string())
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

/// Ordered pool of API keys with an atomic rotation cursor.
#[derive(Debug, Default)]
pub struct KeyPool {
    keys: Vec<ApiKey>,
    cursor: AtomicUsize,
}

impl KeyPool {
    /// Build a pool from key values, in rotation order.
    pub fn new(keys: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            keys: keys.into_iter().map(ApiKey::new).collect(),
            cursor: AtomicUsize::new(0),
        }
    }

    /// Number of keys in the pool.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether the pool holds no keys.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// The key the cursor currently points at.
    pub fn current(&self) -> Option<&ApiKey> {
        if self.keys.is_empty() {
            return None;
        }
        let index = self.cursor.load(Ordering::Relaxed) % self.keys.len();
        self.keys.get(index)
    }

    /// Advance to the next key (wrapping) and return it.
    pub fn rotate(&self) -> Option<&ApiKey> {
        if self.keys.is_empty() {
            return None;
        }
        self.cursor.fetch_add(1, Ordering::Relaxed);
        self.current()
    }
}

/// Rate-limited, key-rotating wrapper around the chat client.
pub struct LlmGateway {
    client: LlmClient,
    keys: Arc<KeyPool>,
    limiter: Arc<DefaultRateLimiter>,
    max_attempts: u32,
    backoff: Duration,
}

impl LlmGateway {
    /// Create a gateway with default pacing: 2 requests per second,
    /// 3 attempts, 1 second base backoff.
    pub fn new(client: LlmClient, keys: KeyPool) -> Self {
        Self {
            client,
            keys: Arc::new(keys),
            limiter: Arc::new(RateLimiter::direct(Quota::per_second(nonzero!(2u32)))),
            max_attempts: 3,
            backoff: Duration::from_secs(1),
        }
    }

    /// Set the maximum attempts per call.
    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts.max(1);
        self
    }

    /// Set the base backoff between attempts. The wait grows linearly
    /// with the attempt number.
    pub fn with_backoff(mut self, backoff: Duration) -> Self {
        self.backoff = backoff;
        self
    }

    /// Set the sustained request rate.
    pub fn with_requests_per_second(mut self, rps: u32) -> Self {
        let quota = Quota::per_second(
            NonZeroU32::new(rps.max(1)).unwrap_or(nonzero!(1u32)),
        );
        self.limiter = Arc::new(RateLimiter::direct(quota));
        self
    }

    /// JSON-mode completion with key rotation and bounded retries.
    pub async fn complete_json(
        &self,
        system: &str,
        user: &str,
    ) -> Result<serde_json::Value, LlmError> {
        let mut last_error = LlmError::Config("no API keys configured".into());

        for attempt in 0..self.max_attempts {
            let Some(key) = self.keys.current() else {
                return Err(last_error);
            };

            self.limiter.until_ready().await;

            match self.client.complete_json(key.expose(), system, user).await {
                Ok(content) => match serde_json::from_str(strip_code_blocks(&content)) {
                    Ok(value) => return Ok(value),
                    Err(e) => {
                        warn!(attempt, error = %e, "unparseable JSON reply, retrying");
                        last_error = LlmError::Parse(e.to_string());
                    }
                },
                Err(LlmError::RateLimited) => {
                    warn!(attempt, "rate limited, rotating API key");
                    last_error = LlmError::RateLimited;
                }
                Err(e) => {
                    warn!(attempt, error = %e, "completion failed, rotating API key");
                    last_error = e;
                }
            }

            self.keys.rotate();
            if attempt + 1 < self.max_attempts {
                tokio::time::sleep(self.backoff * (attempt + 1)).await;
            }
        }

        Err(last_error)
    }
}
