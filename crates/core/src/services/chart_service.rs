use chrono::{Duration, NaiveDate, Utc};
use rand::Rng;

use crate::catalog;
use crate::models::chart::ChartPoint;

/// Maximum single-bar variation of the synthetic walk: ±5%, damped toward 0
/// as bars approach today.
const MAX_VARIATION: f64 = 0.05;

/// Synthetic volume range per bar.
const VOLUME_RANGE: std::ops::Range<u64> = 100_000..1_100_000;

/// Synthesizes bounded OHLC series for chart rendering.
///
/// The core generates the numbers — the frontend (via `render`) only draws.
/// Series are regenerated on every call: determinism comes solely from the
/// injected RNG, so tests seed one and production uses entropy.
pub struct ChartService;

impl ChartService {
    pub fn new() -> Self {
        Self
    }

    /// Generate `days + 1` daily OHLC points for a symbol, oldest first,
    /// ending today.
    ///
    /// The walk starts from the symbol's catalog price (100.0 for unknown
    /// symbols) and dampens its variation linearly as it approaches today,
    /// so the last bar always closes at the base price. Pairs round to 4
    /// decimal places, everything else to 2.
    pub fn generate_series<R: Rng>(&self, symbol: &str, days: u32, rng: &mut R) -> Vec<ChartPoint> {
        let today = Utc::now().date_naive();
        self.generate_series_ending(symbol, days, today, rng)
    }

    /// Same as [`generate_series`](Self::generate_series) with an explicit
    /// final date.
    pub fn generate_series_ending<R: Rng>(
        &self,
        symbol: &str,
        days: u32,
        last_day: NaiveDate,
        rng: &mut R,
    ) -> Vec<ChartPoint> {
        let base_price = catalog::base_price(symbol);
        let decimals = if symbol.contains('/') { 4 } else { 2 };

        let mut points = Vec::with_capacity(days as usize + 1);

        for i in (0..=days).rev() {
            let date = last_day - Duration::days(i64::from(i));

            let damping = if days == 0 {
                0.0
            } else {
                f64::from(i) / f64::from(days)
            };
            let variation = rng.gen_range(-MAX_VARIATION..MAX_VARIATION) * damping;
            let price = base_price * (1.0 + variation);

            points.push(ChartPoint {
                date,
                open: round_to(price * 0.995, decimals),
                high: round_to(price * 1.01, decimals),
                low: round_to(price * 0.99, decimals),
                close: round_to(price, decimals),
                volume: rng.gen_range(VOLUME_RANGE),
            });
        }

        points
    }
}

impl Default for ChartService {
    fn default() -> Self {
        Self::new()
    }
}

fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}
