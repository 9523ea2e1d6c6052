//! Display formatting for prices, percentages, and market caps.
//!
//! Tier boundaries match the dashboard's display rules: big prices get 2
//! decimals, sub-$1000 prices get 3, sub-$1 prices get 4 to 6 with trailing
//! zeros trimmed. Pairs are always 4 decimals and carry no currency symbol.

use crate::models::quote::Quote;

/// Insert comma separators into a plain digit string ("1234567" → "1,234,567").
/// The input must be the integer part only, optionally with a leading '-'.
#[must_use]
pub fn group_thousands(digits: &str) -> String {
    let (sign, digits) = match digits.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", digits),
    };

    let grouped = digits
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|c| std::str::from_utf8(c).unwrap_or_default())
        .collect::<Vec<_>>()
        .join(",");

    format!("{sign}{grouped}")
}

fn group_decimal(formatted: &str) -> String {
    match formatted.split_once('.') {
        Some((int_part, frac)) => format!("{}.{}", group_thousands(int_part), frac),
        None => group_thousands(formatted),
    }
}

/// Format a USD price with magnitude-tiered precision.
#[must_use]
pub fn format_price(price: f64) -> String {
    if price >= 1000.0 {
        format!("${}", group_decimal(&format!("{price:.2}")))
    } else if price >= 1.0 {
        format!("${price:.3}")
    } else {
        // 4 to 6 fraction digits, trailing zeros trimmed but never below 4
        let full = format!("{price:.6}");
        let trimmed = full.trim_end_matches('0');
        let decimals = trimmed.split_once('.').map_or(0, |(_, f)| f.len());
        if decimals >= 4 {
            format!("${trimmed}")
        } else {
            format!("${price:.4}")
        }
    }
}

/// Format a currency-pair price: always 4 decimals, no currency symbol.
#[must_use]
pub fn format_pair_price(price: f64) -> String {
    group_decimal(&format!("{price:.4}"))
}

/// Format a quote's price using the pair rule for pairs and the tiered
/// USD rule for everything else.
#[must_use]
pub fn format_quote_price(quote: &Quote) -> String {
    if quote.is_pair() {
        format_pair_price(quote.current_price)
    } else {
        format_price(quote.current_price)
    }
}

/// Format a percentage with an explicit sign: "+2.71%", "-1.50%".
#[must_use]
pub fn format_percentage(pct: f64) -> String {
    let sign = if pct >= 0.0 { "+" } else { "" };
    format!("{sign}{pct:.2}%")
}

/// Abbreviate a market cap to trillions/billions/millions/thousands.
#[must_use]
pub fn format_market_cap(market_cap: Option<f64>) -> String {
    let Some(cap) = market_cap else {
        return "N/A".into();
    };

    if cap >= 1e12 {
        format!("${:.2}T", cap / 1e12)
    } else if cap >= 1e9 {
        format!("${:.2}B", cap / 1e9)
    } else if cap >= 1e6 {
        format!("${:.2}M", cap / 1e6)
    } else {
        format!("${:.2}K", cap / 1e3)
    }
}

/// Format a volume figure with thousands separators.
#[must_use]
pub fn format_volume(volume: u64) -> String {
    group_thousands(&volume.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grouping() {
        assert_eq!(group_thousands("0"), "0");
        assert_eq!(group_thousands("999"), "999");
        assert_eq!(group_thousands("1000"), "1,000");
        assert_eq!(group_thousands("2198456"), "2,198,456");
        assert_eq!(group_thousands("-12345"), "-12,345");
    }

    #[test]
    fn price_tiers() {
        assert_eq!(format_price(111384.0), "$111,384.00");
        assert_eq!(format_price(1234.5), "$1,234.50");
        assert_eq!(format_price(211.83), "$211.830");
        assert_eq!(format_price(0.217), "$0.2170");
        assert_eq!(format_price(0.0005), "$0.0005");
        assert_eq!(format_price(0.000543), "$0.000543");
    }

    #[test]
    fn pair_prices() {
        assert_eq!(format_pair_price(2645.30), "2,645.3000");
        assert_eq!(format_pair_price(1.0856), "1.0856");
    }

    #[test]
    fn percentages_carry_sign() {
        assert_eq!(format_percentage(2.71), "+2.71%");
        assert_eq!(format_percentage(-1.5), "-1.50%");
        assert_eq!(format_percentage(0.0), "+0.00%");
    }

    #[test]
    fn market_caps() {
        assert_eq!(format_market_cap(None), "N/A");
        assert_eq!(format_market_cap(Some(2_198_456_789_012.0)), "$2.20T");
        assert_eq!(format_market_cap(Some(526_789_123_456.0)), "$526.79B");
        assert_eq!(format_market_cap(Some(34_567_890.0)), "$34.57M");
        assert_eq!(format_market_cap(Some(12_345.0)), "$12.35K");
    }
}
