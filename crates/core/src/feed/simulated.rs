use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::errors::CoreError;
use crate::feed::traits::QuoteFeed;
use crate::models::quote::Quote;

/// How long a simulated fetch takes, matching the dashboard's refresh spinner.
pub const DEFAULT_FETCH_DELAY: Duration = Duration::from_millis(1500);

/// Maximum per-refresh price drift: ±0.5%.
const PRICE_DRIFT: f64 = 0.005;

/// Maximum per-refresh drift of the 24h change figure: ±0.25 points.
const PCT_CHANGE_DRIFT: f64 = 0.25;

/// Perturb every quote with a uniform random walk.
///
/// This is decorative motion, not a price model: no mean reversion, no
/// correlation across assets, no bounds clamping. Keep it that way.
pub fn perturb_quotes<R: Rng>(quotes: &[Quote], rng: &mut R) -> Vec<Quote> {
    quotes
        .iter()
        .map(|quote| {
            let mut next = quote.clone();
            next.current_price = quote.current_price * (1.0 + rng.gen_range(-PRICE_DRIFT..PRICE_DRIFT));
            next.pct_change_24h =
                quote.pct_change_24h + rng.gen_range(-PCT_CHANGE_DRIFT..PCT_CHANGE_DRIFT);
            next
        })
        .collect()
}

/// The only [`QuoteFeed`] implementation: waits a fixed delay, then returns
/// a randomly perturbed copy of the current quotes.
pub struct SimulatedFeed {
    delay: Duration,
    rng: Mutex<StdRng>,
}

impl SimulatedFeed {
    /// Feed with the default 1.5s fetch delay and an entropy-seeded RNG.
    #[must_use]
    pub fn new() -> Self {
        Self::with_delay(DEFAULT_FETCH_DELAY)
    }

    #[must_use]
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay,
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Deterministic feed for tests.
    #[must_use]
    pub fn seeded(seed: u64, delay: Duration) -> Self {
        Self {
            delay,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for SimulatedFeed {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl QuoteFeed for SimulatedFeed {
    fn name(&self) -> &str {
        "SimulatedFeed"
    }

    async fn fetch(&self, current: &[Quote]) -> Result<Vec<Quote>, CoreError> {
        #[cfg(not(target_arch = "wasm32"))]
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let mut rng = self
            .rng
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        Ok(perturb_quotes(current, &mut *rng))
    }
}
