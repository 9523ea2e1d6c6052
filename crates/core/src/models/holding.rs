use serde::{Deserialize, Serialize};

/// A user's recorded quantity of one asset, as persisted in the holdings blob.
///
/// Carries a snapshot of the price fields from the last save so the blob is
/// self-contained; valuation always uses the live quote, not the snapshot.
/// One entry per `asset_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoldingEntry {
    /// Asset identifier, matching `Quote::asset_id`
    pub asset_id: String,

    /// Display symbol snapshot (e.g., "BTC")
    pub symbol: String,

    /// Display name snapshot (e.g., "Bitcoin")
    pub name: String,

    /// Quantity held. Always > 0; editing a holding to zero removes it.
    pub quantity: f64,

    /// Price at the time of the last save
    pub price_snapshot: f64,

    /// 24h change at the time of the last save
    pub pct_change_snapshot: f64,
}

/// One holding combined with its live quote. Derived on every valuation,
/// never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValuedHolding {
    pub asset_id: String,
    pub symbol: String,
    pub name: String,
    pub quantity: f64,
    pub current_price: f64,
    pub pct_change_24h: f64,

    /// quantity × current_price
    pub value: f64,

    /// Value change over 24h, derived from the percent change:
    /// value − value / (1 + pct_change_24h / 100)
    pub change_value: f64,

    /// This holding's value as a percentage of the total portfolio value.
    /// 0.0 when the total is zero.
    pub allocation_pct: f64,
}

/// The result of valuing a holdings list against current quotes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioValuation {
    /// Valued rows, in holdings order
    pub rows: Vec<ValuedHolding>,

    /// Sum of all row values
    pub total_value: f64,

    /// Asset ids of holdings that had no matching quote and were excluded.
    /// Empty in the common case.
    pub skipped: Vec<String>,
}
