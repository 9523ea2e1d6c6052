//! Static market catalog.
//!
//! All market data is hardcoded — there is no exchange connectivity. The
//! feed perturbs these quotes in memory; nothing here talks to a network.

use crate::models::holding::HoldingEntry;
use crate::models::position::{Position, TradeDirection};
use crate::models::quote::{AssetKind, Quote};

/// Base price used for chart series when a symbol is not in the catalog.
pub const DEFAULT_BASE_PRICE: f64 = 100.0;

fn crypto(
    asset_id: &str,
    symbol: &str,
    name: &str,
    price: f64,
    pct_change: f64,
    market_cap: f64,
    rank: u32,
) -> Quote {
    Quote {
        asset_id: asset_id.into(),
        symbol: symbol.into(),
        name: name.into(),
        current_price: price,
        pct_change_24h: pct_change,
        market_cap: Some(market_cap),
        rank: Some(rank),
        kind: AssetKind::Crypto,
    }
}

fn pair(asset_id: &str, symbol: &str, name: &str, price: f64, pct_change: f64, kind: AssetKind) -> Quote {
    Quote {
        asset_id: asset_id.into(),
        symbol: symbol.into(),
        name: name.into(),
        current_price: price,
        pct_change_24h: pct_change,
        market_cap: None,
        rank: None,
        kind,
    }
}

/// The cryptocurrency market list, ordered by market cap rank.
#[must_use]
pub fn crypto_quotes() -> Vec<Quote> {
    vec![
        crypto("bitcoin", "BTC", "Bitcoin", 111384.0, 1.74, 2_198_456_789_012.0, 1),
        crypto("ethereum", "ETH", "Ethereum", 4383.05, -1.31, 526_789_123_456.0, 2),
        crypto("ripple", "XRP", "XRP", 2.85, 2.71, 161_234_567_890.0, 3),
        crypto("tether", "USDT", "Tether", 1.00, 0.02, 136_789_012_345.0, 4),
        crypto("binancecoin", "BNB", "BNB", 554.77, 1.11, 82_345_678_901.0, 5),
        crypto("solana", "SOL", "Solana", 211.83, 4.54, 98_765_432_109.0, 6),
        crypto("usd-coin", "USDC", "USDC", 1.00, -0.06, 34_567_890_123.0, 7),
        crypto("staked-ether", "STETH", "Lido Staked Ether", 4372.16, 1.69, 42_876_543_210.0, 8),
        crypto("dogecoin", "DOGE", "Dogecoin", 0.217, -2.73, 31_987_654_321.0, 9),
        crypto("tron", "TRX", "TRON", 0.34, 29.74, 29_123_456_789.0, 10),
        crypto("cardano", "ADA", "Cardano", 0.852, 2.26, 29_876_543_210.0, 11),
        crypto("wrapped-steth", "WSTETH", "Wrapped stETH", 5299.39, 1.86, 21_234_567_890.0, 12),
        crypto("chainlink", "LINK", "Chainlink", 23.49, 1.58, 15_678_901_234.0, 13),
    ]
}

/// Forex pairs and commodities.
#[must_use]
pub fn forex_quotes() -> Vec<Quote> {
    vec![
        pair("xau-usd", "XAU/USD", "Gold", 2645.30, 0.45, AssetKind::Commodity),
        pair("eur-usd", "EUR/USD", "Euro US Dollar", 1.0856, -0.12, AssetKind::Forex),
        pair("gbp-usd", "GBP/USD", "British Pound US Dollar", 1.2734, 0.23, AssetKind::Forex),
        pair("usd-jpy", "USD/JPY", "US Dollar Japanese Yen", 148.92, 0.67, AssetKind::Forex),
        pair("xag-usd", "XAG/USD", "Silver", 31.42, 1.23, AssetKind::Commodity),
        pair("usd-cad", "USD/CAD", "US Dollar Canadian Dollar", 1.3567, -0.18, AssetKind::Forex),
        pair("aud-usd", "AUD/USD", "Australian Dollar US Dollar", 0.6789, 0.34, AssetKind::Forex),
    ]
}

/// The combined market list (crypto first, then pairs) shown in the sidebar.
#[must_use]
pub fn all_quotes() -> Vec<Quote> {
    let mut quotes = crypto_quotes();
    quotes.extend(forex_quotes());
    quotes
}

/// Resolve the chart base price for a symbol.
/// Unknown symbols fall back to [`DEFAULT_BASE_PRICE`].
#[must_use]
pub fn base_price(symbol: &str) -> f64 {
    all_quotes()
        .iter()
        .find(|q| q.symbol == symbol)
        .map_or(DEFAULT_BASE_PRICE, |q| q.current_price)
}

/// Holdings seeded on first run, before the user has edited anything.
#[must_use]
pub fn default_holdings() -> Vec<HoldingEntry> {
    let seed = [("bitcoin", 0.5), ("ethereum", 2.1), ("xau-usd", 5.0)];
    let quotes = all_quotes();

    seed.iter()
        .filter_map(|(asset_id, quantity)| {
            quotes.iter().find(|q| q.asset_id == *asset_id).map(|q| HoldingEntry {
                asset_id: q.asset_id.clone(),
                symbol: q.symbol.clone(),
                name: q.name.clone(),
                quantity: *quantity,
                price_snapshot: q.current_price,
                pct_change_snapshot: q.pct_change_24h,
            })
        })
        .collect()
}

/// Sample open positions for the positions footer.
#[must_use]
pub fn sample_positions() -> Vec<Position> {
    vec![Position {
        id: "#794507".into(),
        pair: "XAUUSD".into(),
        direction: TradeDirection::Buy,
        lots: 1.0,
        open_price: 2122.4122,
        current_price: 2311.83,
        take_profit: 0.0,
        stop_loss: 0.0,
        handling_fee: 0.01,
        margin: 212.2412,
        profit: 611.222,
        opened_at: "2025-09-04 15:56:32".into(),
    }]
}
