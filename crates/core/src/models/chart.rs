use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One OHLC + volume bar of a synthesized price series.
///
/// Series are regenerated on every asset-selection change: a fresh random
/// walk seeded from the asset's catalog price. They are never cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// Calendar day of this bar
    pub date: NaiveDate,

    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,

    /// Traded volume (synthetic)
    pub volume: u64,
}
