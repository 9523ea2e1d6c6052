use serde::{Deserialize, Serialize};

/// Direction of an open position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TradeDirection {
    Buy,
    Sell,
}

impl std::fmt::Display for TradeDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TradeDirection::Buy => write!(f, "Buy"),
            TradeDirection::Sell => write!(f, "Sell"),
        }
    }
}

/// An open trading position shown in the positions footer.
///
/// All positions are static sample data — there is no order matching behind
/// them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Ticket id (e.g., "#794507")
    pub id: String,

    /// Traded pair (e.g., "XAUUSD")
    pub pair: String,

    pub direction: TradeDirection,

    /// Position size in lots
    pub lots: f64,

    /// Price the position was opened at
    pub open_price: f64,

    /// Latest price for the pair
    pub current_price: f64,

    /// Take-profit level; 0 when unset
    pub take_profit: f64,

    /// Stop-loss level; 0 when unset
    pub stop_loss: f64,

    pub handling_fee: f64,

    /// Margin locked by this position
    pub margin: f64,

    /// Current floating profit
    pub profit: f64,

    /// Open timestamp, display-formatted ("2025-09-04 15:56:32")
    pub opened_at: String,
}
