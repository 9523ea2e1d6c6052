use std::cmp::Ordering;
use std::collections::HashMap;

use crate::models::quote::{Quote, QuoteSortColumn, SortOrder};

/// Sort, filter, and lookup operations over the in-memory quote list.
///
/// Pure business logic — no I/O. The quote list itself lives on the facade;
/// this service only borrows it.
pub struct MarketService;

impl MarketService {
    pub fn new() -> Self {
        Self
    }

    /// Case-insensitive substring search over name and symbol.
    pub fn search<'a>(&self, quotes: &'a [Quote], term: &str) -> Vec<&'a Quote> {
        let needle = term.to_lowercase();
        quotes
            .iter()
            .filter(|q| {
                q.name.to_lowercase().contains(&needle)
                    || q.symbol.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Sort quotes by a column. Quotes without a rank or market cap
    /// (currency pairs) sort after those with one, in either direction.
    pub fn sort<'a>(
        &self,
        quotes: &'a [Quote],
        column: QuoteSortColumn,
        order: SortOrder,
    ) -> Vec<&'a Quote> {
        let mut rows: Vec<&Quote> = quotes.iter().collect();

        let directed = |ordering: Ordering| match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        };

        rows.sort_by(|a, b| match column {
            QuoteSortColumn::Rank => cmp_option(a.rank, b.rank, directed),
            QuoteSortColumn::Name => directed(a.name.to_lowercase().cmp(&b.name.to_lowercase())),
            QuoteSortColumn::Price => directed(cmp_f64(a.current_price, b.current_price)),
            QuoteSortColumn::Change24h => {
                directed(cmp_f64(a.pct_change_24h, b.pct_change_24h))
            }
            QuoteSortColumn::MarketCap => cmp_option_f64(a.market_cap, b.market_cap, directed),
        });

        rows
    }

    /// Look up a quote by asset id.
    pub fn find<'a>(&self, quotes: &'a [Quote], asset_id: &str) -> Option<&'a Quote> {
        quotes.iter().find(|q| q.asset_id == asset_id)
    }

    /// Index quotes by asset id for valuation lookups.
    pub fn quote_map<'a>(&self, quotes: &'a [Quote]) -> HashMap<&'a str, &'a Quote> {
        quotes.iter().map(|q| (q.asset_id.as_str(), q)).collect()
    }

    /// Apply a fetched batch to the live quote list, in place.
    ///
    /// Update-only: quotes are matched by asset id and replaced; ids not in
    /// the current list are ignored, and nothing is ever removed.
    pub fn apply(&self, quotes: &mut [Quote], fetched: Vec<Quote>) {
        for next in fetched {
            if let Some(slot) = quotes.iter_mut().find(|q| q.asset_id == next.asset_id) {
                *slot = next;
            }
        }
    }
}

impl Default for MarketService {
    fn default() -> Self {
        Self::new()
    }
}

fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// `None` sorts last regardless of direction (pairs sit below ranked
/// assets); the direction only applies between two present values.
fn cmp_option<T: Ord>(a: Option<T>, b: Option<T>, directed: impl Fn(Ordering) -> Ordering) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => directed(a.cmp(&b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn cmp_option_f64(
    a: Option<f64>,
    b: Option<f64>,
    directed: impl Fn(Ordering) -> Ordering,
) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => directed(cmp_f64(a, b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
