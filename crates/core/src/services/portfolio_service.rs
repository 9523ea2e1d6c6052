use std::collections::HashMap;

use crate::errors::CoreError;
use crate::models::holding::{HoldingEntry, PortfolioValuation, ValuedHolding};
use crate::models::quote::Quote;

/// Divisor threshold below which the derived previous price is treated as
/// unrecoverable (a quote 100% down on the day).
const MIN_CHANGE_DIVISOR: f64 = 1e-9;

/// Manages the holdings list and values it against current quotes.
///
/// Pure business logic — no I/O. Persistence of the holdings blob is the
/// facade's job.
pub struct PortfolioService;

impl PortfolioService {
    pub fn new() -> Self {
        Self
    }

    /// Value every holding against the current quotes.
    ///
    /// Per row: `value = quantity × current_price`, and the 24h change is
    /// derived by recovering yesterday's price from the percent change:
    /// `change = value − value / (1 + pct/100)`. That derivation is an
    /// approximation, not a tracked historical value.
    ///
    /// Holdings with no matching quote are excluded from the rows and
    /// reported in `skipped`. Allocation percentages are 0 when the total
    /// value is 0, so an empty or worthless portfolio never renders NaN.
    pub fn valuate(&self, holdings: &[HoldingEntry], quotes: &[Quote]) -> PortfolioValuation {
        let by_id: HashMap<&str, &Quote> =
            quotes.iter().map(|q| (q.asset_id.as_str(), q)).collect();

        let mut rows = Vec::with_capacity(holdings.len());
        let mut skipped = Vec::new();
        let mut total_value = 0.0;

        for holding in holdings {
            let Some(quote) = by_id.get(holding.asset_id.as_str()) else {
                skipped.push(holding.asset_id.clone());
                continue;
            };

            let value = holding.quantity * quote.current_price;
            total_value += value;

            rows.push(ValuedHolding {
                asset_id: holding.asset_id.clone(),
                symbol: quote.symbol.clone(),
                name: quote.name.clone(),
                quantity: holding.quantity,
                current_price: quote.current_price,
                pct_change_24h: quote.pct_change_24h,
                value,
                change_value: change_value(value, quote.pct_change_24h),
                allocation_pct: 0.0, // filled below, needs the total
            });
        }

        if total_value > 0.0 {
            for row in &mut rows {
                row.allocation_pct = row.value / total_value * 100.0;
            }
        }

        PortfolioValuation {
            rows,
            total_value,
            skipped,
        }
    }

    /// Set the quantity of an existing holding.
    ///
    /// A quantity of zero or below removes the entry entirely (filter, not
    /// soft-delete). Non-finite quantities are rejected.
    pub fn set_quantity(
        &self,
        holdings: &mut Vec<HoldingEntry>,
        asset_id: &str,
        quantity: f64,
    ) -> Result<(), CoreError> {
        if !quantity.is_finite() {
            return Err(CoreError::ValidationError(
                "Holding quantity must be a finite number".into(),
            ));
        }

        let idx = holdings
            .iter()
            .position(|h| h.asset_id == asset_id)
            .ok_or_else(|| CoreError::HoldingNotFound(asset_id.to_string()))?;

        if quantity <= 0.0 {
            holdings.remove(idx);
        } else {
            holdings[idx].quantity = quantity;
        }

        Ok(())
    }

    /// Remove a holding by asset id.
    pub fn remove(&self, holdings: &mut Vec<HoldingEntry>, asset_id: &str) -> Result<(), CoreError> {
        let idx = holdings
            .iter()
            .position(|h| h.asset_id == asset_id)
            .ok_or_else(|| CoreError::HoldingNotFound(asset_id.to_string()))?;
        holdings.remove(idx);
        Ok(())
    }

    /// Add a holding from a quote, or overwrite the quantity if one already
    /// exists for the asset. Snapshot fields are taken from the quote.
    pub fn upsert(
        &self,
        holdings: &mut Vec<HoldingEntry>,
        quote: &Quote,
        quantity: f64,
    ) -> Result<(), CoreError> {
        if !quantity.is_finite() || quantity <= 0.0 {
            return Err(CoreError::ValidationError(
                "Holding quantity must be positive".into(),
            ));
        }

        let entry = HoldingEntry {
            asset_id: quote.asset_id.clone(),
            symbol: quote.symbol.clone(),
            name: quote.name.clone(),
            quantity,
            price_snapshot: quote.current_price,
            pct_change_snapshot: quote.pct_change_24h,
        };

        match holdings.iter_mut().find(|h| h.asset_id == quote.asset_id) {
            Some(existing) => *existing = entry,
            None => holdings.push(entry),
        }

        Ok(())
    }

    /// Copy current quote prices into the holdings' snapshot fields, so the
    /// next persisted blob carries up-to-date prices.
    pub fn refresh_snapshots(&self, holdings: &mut [HoldingEntry], quotes: &[Quote]) {
        let by_id: HashMap<&str, &Quote> =
            quotes.iter().map(|q| (q.asset_id.as_str(), q)).collect();

        for holding in holdings {
            if let Some(quote) = by_id.get(holding.asset_id.as_str()) {
                holding.price_snapshot = quote.current_price;
                holding.pct_change_snapshot = quote.pct_change_24h;
            }
        }
    }
}

impl Default for PortfolioService {
    fn default() -> Self {
        Self::new()
    }
}

/// 24h value change derived from today's value and the percent change.
/// A change of −100% makes the previous price unrecoverable; saturate to 0
/// rather than dividing by zero.
fn change_value(value: f64, pct_change_24h: f64) -> f64 {
    let divisor = 1.0 + pct_change_24h / 100.0;
    if divisor.abs() < MIN_CHANGE_DIVISOR {
        return 0.0;
    }
    value - value / divisor
}
