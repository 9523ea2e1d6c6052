use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::quote::Quote;

/// Trait abstraction for quote sources.
///
/// This is the seam where a real market-data provider would plug in. None
/// exists: the only implementation perturbs the static catalog in memory.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait QuoteFeed: Send + Sync {
    /// Human-readable name of this feed (for logs/errors).
    fn name(&self) -> &str;

    /// Produce a fresh batch of quotes, given the current ones.
    ///
    /// Callers may issue overlapping fetches; there is no de-duplication and
    /// no cancellation. Whoever applies a batch last wins.
    async fn fetch(&self, current: &[Quote]) -> Result<Vec<Quote>, CoreError>;
}
