use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

use governor::clock::DefaultClock;
use governor::state::direct::NotKeyed;
use governor::state::InMemoryState;
use governor::{Quota, RateLimiter};

/// Fixed gap inserted between successive upstream calls by the batch
/// endpoint. A courtesy to the provider's rate limit, not a token bucket.
pub const COURTESY_GAP: Duration = Duration::from_millis(500);

type DirectRateLimiter = RateLimiter<NotKeyed, InMemoryState, DefaultClock>;

/// Serializing pacer: the first acquisition passes immediately, every
/// following one waits until `min_gap` has elapsed since the previous.
#[derive(Clone)]
pub struct RequestPacer {
    limiter: Arc<DirectRateLimiter>,
    min_gap: Duration,
}

impl RequestPacer {
    pub fn new(min_gap: Duration) -> Self {
        let gap = min_gap.max(Duration::from_millis(1));
        let quota = Quota::with_period(gap)
            .expect("gap is always greater than zero")
            .allow_burst(NonZeroU32::new(1).expect("burst of one is non-zero"));

        Self {
            limiter: Arc::new(RateLimiter::direct(quota)),
            min_gap: gap,
        }
    }

    pub fn courtesy() -> Self {
        Self::new(COURTESY_GAP)
    }

    /// Waits until the next call is allowed and consumes its slot.
    pub async fn pause(&self) {
        self.limiter.until_ready().await;
    }

    pub const fn min_gap(&self) -> Duration {
        self.min_gap
    }
}
