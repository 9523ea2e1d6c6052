use serde::{Deserialize, Serialize};

/// The market category of a quoted asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetKind {
    /// Cryptocurrencies (BTC, ETH, ...)
    Crypto,
    /// Currency pairs (EUR/USD, USD/JPY, ...)
    Forex,
    /// Commodity pairs quoted against USD (XAU/USD, XAG/USD)
    Commodity,
}

impl std::fmt::Display for AssetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetKind::Crypto => write!(f, "Crypto"),
            AssetKind::Forex => write!(f, "Forex"),
            AssetKind::Commodity => write!(f, "Commodity"),
        }
    }
}

/// The latest simulated price and 24h change for one asset.
///
/// Quotes are only ever updated in place by a feed refresh — never removed
/// from the market list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Stable lowercase identifier (e.g., "bitcoin", "eur-usd")
    pub asset_id: String,

    /// Display symbol (e.g., "BTC", "EUR/USD")
    pub symbol: String,

    /// Human-readable name (e.g., "Bitcoin", "Euro US Dollar")
    pub name: String,

    /// Latest price in USD (or quote currency for pairs)
    pub current_price: f64,

    /// Percentage change over the trailing 24 hours (e.g., -1.31)
    pub pct_change_24h: f64,

    /// Market capitalization in USD. Pairs have none.
    pub market_cap: Option<f64>,

    /// Market cap rank. Pairs have none.
    pub rank: Option<u32>,

    /// Market category
    pub kind: AssetKind,
}

impl Quote {
    /// Whether this quote denotes a currency/commodity pair.
    /// Pairs are formatted to 4 decimal places, everything else to 2.
    #[must_use]
    pub fn is_pair(&self) -> bool {
        self.symbol.contains('/')
    }
}

/// Column to sort the market table by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteSortColumn {
    /// Market cap rank (default)
    Rank,
    /// Alphabetical by name
    Name,
    /// Current price
    Price,
    /// 24h percentage change
    Change24h,
    /// Market capitalization
    MarketCap,
}

/// Sort direction for the market table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// The opposite direction (clicking the active column header toggles).
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}
