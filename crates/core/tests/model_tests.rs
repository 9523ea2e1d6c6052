use chrono::NaiveDate;
use trade_desk_core::catalog;
use trade_desk_core::models::chart::ChartPoint;
use trade_desk_core::models::holding::HoldingEntry;
use trade_desk_core::models::position::TradeDirection;
use trade_desk_core::models::quote::{AssetKind, SortOrder};
use trade_desk_core::models::session::Session;
use trade_desk_core::models::settings::{Settings, Theme};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

// ═══════════════════════════════════════════════════════════════════
//  Quote
// ═══════════════════════════════════════════════════════════════════

mod quote {
    use super::*;

    #[test]
    fn pair_detection() {
        let quotes = catalog::all_quotes();
        let btc = quotes.iter().find(|q| q.symbol == "BTC").unwrap();
        let eur = quotes.iter().find(|q| q.symbol == "EUR/USD").unwrap();
        assert!(!btc.is_pair());
        assert!(eur.is_pair());
    }

    #[test]
    fn kind_display() {
        assert_eq!(AssetKind::Crypto.to_string(), "Crypto");
        assert_eq!(AssetKind::Forex.to_string(), "Forex");
        assert_eq!(AssetKind::Commodity.to_string(), "Commodity");
    }

    #[test]
    fn sort_order_toggles() {
        assert_eq!(SortOrder::Asc.toggled(), SortOrder::Desc);
        assert_eq!(SortOrder::Desc.toggled(), SortOrder::Asc);
    }

    #[test]
    fn serde_roundtrip() {
        let quotes = catalog::crypto_quotes();
        let json = serde_json::to_string(&quotes).unwrap();
        let back: Vec<trade_desk_core::models::quote::Quote> =
            serde_json::from_str(&json).unwrap();
        assert_eq!(quotes, back);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Catalog
// ═══════════════════════════════════════════════════════════════════

mod catalog_data {
    use super::*;

    #[test]
    fn crypto_list_is_ranked() {
        let quotes = catalog::crypto_quotes();
        assert_eq!(quotes.len(), 13);
        assert_eq!(quotes[0].symbol, "BTC");
        assert_eq!(quotes[0].current_price, 111384.0);
        assert_eq!(quotes[0].rank, Some(1));
        // Ranks ascend in catalog order
        for window in quotes.windows(2) {
            assert!(window[0].rank < window[1].rank);
        }
    }

    #[test]
    fn pairs_have_no_market_cap() {
        for quote in catalog::forex_quotes() {
            assert!(quote.is_pair());
            assert!(quote.market_cap.is_none());
            assert!(quote.rank.is_none());
        }
    }

    #[test]
    fn combined_list_keeps_both_halves() {
        let all = catalog::all_quotes();
        assert_eq!(all.len(), 20);
        assert!(all.iter().any(|q| q.asset_id == "bitcoin"));
        assert!(all.iter().any(|q| q.asset_id == "xau-usd"));
    }

    #[test]
    fn base_price_lookup() {
        assert_eq!(catalog::base_price("BTC"), 111384.0);
        assert_eq!(catalog::base_price("EUR/USD"), 1.0856);
        assert_eq!(catalog::base_price("NOPE"), catalog::DEFAULT_BASE_PRICE);
    }

    #[test]
    fn default_holdings_seed() {
        let holdings = catalog::default_holdings();
        assert_eq!(holdings.len(), 3);

        let btc = holdings.iter().find(|h| h.asset_id == "bitcoin").unwrap();
        assert_eq!(btc.quantity, 0.5);
        assert_eq!(btc.price_snapshot, 111384.0);

        let eth = holdings.iter().find(|h| h.asset_id == "ethereum").unwrap();
        assert_eq!(eth.quantity, 2.1);

        let gold = holdings.iter().find(|h| h.asset_id == "xau-usd").unwrap();
        assert_eq!(gold.quantity, 5.0);
        assert_eq!(gold.symbol, "XAU/USD");
    }

    #[test]
    fn sample_positions_footer() {
        let positions = catalog::sample_positions();
        assert_eq!(positions.len(), 1);
        assert_eq!(positions[0].id, "#794507");
        assert_eq!(positions[0].direction, TradeDirection::Buy);
        assert_eq!(positions[0].pair, "XAUUSD");
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Holdings & chart points
// ═══════════════════════════════════════════════════════════════════

mod blobs {
    use super::*;

    #[test]
    fn holding_roundtrip() {
        let entry = HoldingEntry {
            asset_id: "bitcoin".into(),
            symbol: "BTC".into(),
            name: "Bitcoin".into(),
            quantity: 0.5,
            price_snapshot: 111384.0,
            pct_change_snapshot: 1.74,
        };
        let json = serde_json::to_string(&entry).unwrap();
        let back: HoldingEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(entry, back);
    }

    #[test]
    fn chart_point_roundtrip() {
        let point = ChartPoint {
            date: d(2026, 8, 8),
            open: 110827.08,
            high: 112497.84,
            low: 110270.16,
            close: 111384.0,
            volume: 345_678,
        };
        let json = serde_json::to_string(&point).unwrap();
        let back: ChartPoint = serde_json::from_str(&json).unwrap();
        assert_eq!(point, back);
    }

    #[test]
    fn session_roundtrip() {
        let session = Session {
            id: uuid::Uuid::new_v4(),
            email: "trader@example.com".into(),
            display_name: "trader".into(),
            avatar_url: "https://api.dicebear.com/7.x/avataaars/svg?seed=trader@example.com"
                .into(),
            created_at: chrono::Utc::now(),
        };
        let json = serde_json::to_string(&session).unwrap();
        let back: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(session, back);
    }

    #[test]
    fn theme_defaults_dark() {
        assert_eq!(Settings::default().theme, Theme::Dark);
        assert_eq!(Theme::Dark.to_string(), "Dark");
    }
}
