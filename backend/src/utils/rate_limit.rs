use std::num::NonZeroU32;
use axum::http::HeaderMap;
use governor::{DefaultKeyedRateLimiter, Quota, RateLimiter};

const ANONYMOUS_CLIENT: &str = "anonymous";

/// Per-client budget shared by the contact and newsletter endpoints.
pub struct LeadRateLimiter {
    limiter: DefaultKeyedRateLimiter<String>,
}

impl LeadRateLimiter {
    pub fn per_minute(requests: NonZeroU32) -> Self {
        Self {
            limiter: RateLimiter::keyed(Quota::per_minute(requests)),
        }
    }

    pub fn allow(&self, client: &str) -> bool {
        let allowed = self.limiter.check_key(&client.to_string()).is_ok();
        if !allowed {
            tracing::warn!(%client, "Lead submission rate limited");
        }
        // drop clients whose budget has fully refilled
        self.limiter.retain_recent();
        allowed
    }
}

/// First hop of `X-Forwarded-For`, then `X-Real-IP`, else one shared bucket.
pub fn client_key(headers: &HeaderMap) -> String {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
    };

    header("x-forwarded-for")
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .or_else(|| header("x-real-ip"))
        .unwrap_or(ANONYMOUS_CLIENT)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use nonzero_ext::nonzero;

    #[test]
    fn forwarded_for_wins_over_real_ip() {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", HeaderValue::from_static(" 203.0.113.9 , 10.0.0.1"));
        headers.insert("x-real-ip", HeaderValue::from_static("198.51.100.4"));
        assert_eq!(client_key(&headers), "203.0.113.9");

        headers.remove("x-forwarded-for");
        assert_eq!(client_key(&headers), "198.51.100.4");

        assert_eq!(client_key(&HeaderMap::new()), "anonymous");
    }

    #[test]
    fn budget_is_tracked_per_client() {
        let limiter = LeadRateLimiter::per_minute(nonzero!(2u32));
        assert!(limiter.allow("a"));
        assert!(limiter.allow("a"));
        assert!(!limiter.allow("a"));
        assert!(limiter.allow("b"));
    }
}
