pub mod catalog;
pub mod errors;
pub mod feed;
pub mod format;
pub mod models;
pub mod render;
pub mod router;
pub mod services;
pub mod storage;

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;

use feed::simulated::SimulatedFeed;
use feed::traits::QuoteFeed;
use models::{
    chart::ChartPoint,
    holding::{HoldingEntry, PortfolioValuation},
    position::Position,
    quote::{Quote, QuoteSortColumn, SortOrder},
    session::Session,
    settings::{Settings, Theme},
};
use render::chart::{ChartStyle, Viewport};
use render::hover::HoverState;
use render::scene::ChartScene;
use router::{Resolution, Route};
use services::{
    auth_service::AuthService, chart_service::ChartService, market_service::MarketService,
    portfolio_service::PortfolioService,
};
use storage::manager::StorageManager;
use storage::store::KeyValueStore;

use errors::CoreError;

/// Default number of days in a chart series (31 bars including today).
pub const DEFAULT_CHART_DAYS: u32 = 30;

/// Main entry point for the Trade Desk core library.
/// Holds the dashboard state and all services needed to operate on it.
#[must_use]
pub struct TradeDesk {
    quotes: Vec<Quote>,
    holdings: Vec<HoldingEntry>,
    session: Option<Session>,
    settings: Settings,
    positions: Vec<Position>,
    last_updated: Option<DateTime<Utc>>,
    market_service: MarketService,
    portfolio_service: PortfolioService,
    chart_service: ChartService,
    auth_service: AuthService,
    storage: StorageManager,
    feed: Box<dyn QuoteFeed>,
    rng: StdRng,
}

impl std::fmt::Debug for TradeDesk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TradeDesk")
            .field("quotes", &self.quotes.len())
            .field("holdings", &self.holdings.len())
            .field("signed_in", &self.session.is_some())
            .field("theme", &self.settings.theme)
            .field("last_updated", &self.last_updated)
            .finish()
    }
}

impl TradeDesk {
    /// Build a desk over a storage backend, with the simulated quote feed.
    ///
    /// Loads any persisted session, theme, and holdings; the first run
    /// seeds the default holdings and persists them.
    pub fn new(store: Box<dyn KeyValueStore>) -> Result<Self, CoreError> {
        Self::with_feed(store, Box::new(SimulatedFeed::new()))
    }

    /// Build a desk with a custom quote feed (tests inject scripted feeds).
    pub fn with_feed(
        store: Box<dyn KeyValueStore>,
        feed: Box<dyn QuoteFeed>,
    ) -> Result<Self, CoreError> {
        let mut storage = StorageManager::new(store);

        let session = storage.load_session();
        let theme = storage.load_theme().unwrap_or_default();
        let holdings = match storage.load_holdings() {
            Some(holdings) => holdings,
            None => {
                let defaults = catalog::default_holdings();
                storage.save_holdings(&defaults)?;
                defaults
            }
        };

        Ok(Self {
            quotes: catalog::all_quotes(),
            holdings,
            session,
            settings: Settings { theme },
            positions: catalog::sample_positions(),
            last_updated: None,
            market_service: MarketService::new(),
            portfolio_service: PortfolioService::new(),
            chart_service: ChartService::new(),
            auth_service: AuthService::new(),
            storage,
            feed,
            rng: StdRng::from_entropy(),
        })
    }

    /// Reseed the internal RNG. Chart series become deterministic; only
    /// useful in tests.
    pub fn seed_rng(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    // ── Auth & Session ──────────────────────────────────────────────

    /// Sign in. Any email with a 6+ character password is accepted; the
    /// session is persisted so a restart stays signed in.
    pub fn sign_in(&mut self, email: &str, password: &str) -> Result<&Session, CoreError> {
        let session = self.auth_service.login(email, password)?;
        self.storage.save_session(&session)?;
        Ok(&*self.session.insert(session))
    }

    /// Register an account. Identical to sign-in except the display name
    /// comes from the form.
    pub fn register(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<&Session, CoreError> {
        let session = self.auth_service.register(name, email, password)?;
        self.storage.save_session(&session)?;
        Ok(&*self.session.insert(session))
    }

    /// Sign out: clears the in-memory session and the persisted blob.
    pub fn sign_out(&mut self) -> Result<(), CoreError> {
        self.storage.clear_session()?;
        self.session = None;
        Ok(())
    }

    /// Validate a password-reset request. No email is sent.
    pub fn request_password_reset(&self, email: &str) -> Result<(), CoreError> {
        self.auth_service.request_password_reset(email)
    }

    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// Guard a navigation: protected routes require a session.
    #[must_use]
    pub fn resolve_route(&self, route: Route) -> Resolution {
        router::resolve(route, self.session.as_ref())
    }

    // ── Market ──────────────────────────────────────────────────────

    #[must_use]
    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    #[must_use]
    pub fn find_quote(&self, asset_id: &str) -> Option<&Quote> {
        self.market_service.find(&self.quotes, asset_id)
    }

    /// Case-insensitive search over quote names and symbols.
    #[must_use]
    pub fn search_quotes(&self, term: &str) -> Vec<&Quote> {
        self.market_service.search(&self.quotes, term)
    }

    /// Market table rows sorted by a column.
    #[must_use]
    pub fn sorted_quotes(&self, column: QuoteSortColumn, order: SortOrder) -> Vec<&Quote> {
        self.market_service.sort(&self.quotes, column, order)
    }

    /// Fetch a fresh batch from the feed and apply it to the quote list.
    ///
    /// The simulated feed takes ~1.5s; a second refresh issued before the
    /// first completes is not de-duplicated; whichever batch applies last
    /// wins. Returns the new last-updated timestamp.
    pub async fn refresh_quotes(&mut self) -> Result<DateTime<Utc>, CoreError> {
        let fetched = self.feed.fetch(&self.quotes).await?;
        self.market_service.apply(&mut self.quotes, fetched);
        let now = Utc::now();
        self.last_updated = Some(now);
        Ok(now)
    }

    /// When the quotes were last refreshed, if ever.
    #[must_use]
    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.last_updated
    }

    // ── Portfolio ───────────────────────────────────────────────────

    #[must_use]
    pub fn holdings(&self) -> &[HoldingEntry] {
        &self.holdings
    }

    /// Value the holdings against current quotes. Recomputed on every call,
    /// never cached.
    #[must_use]
    pub fn valuation(&self) -> PortfolioValuation {
        self.portfolio_service.valuate(&self.holdings, &self.quotes)
    }

    /// Set a holding's quantity. Zero or below removes the row entirely.
    /// Persists the whole holdings blob.
    pub fn set_holding_quantity(&mut self, asset_id: &str, quantity: f64) -> Result<(), CoreError> {
        self.portfolio_service
            .set_quantity(&mut self.holdings, asset_id, quantity)?;
        self.persist_holdings()
    }

    /// Add a holding for a quoted asset (or overwrite its quantity).
    pub fn add_holding(&mut self, asset_id: &str, quantity: f64) -> Result<(), CoreError> {
        let quote = self
            .market_service
            .find(&self.quotes, asset_id)
            .ok_or_else(|| CoreError::QuoteNotFound(asset_id.to_string()))?
            .clone();
        self.portfolio_service
            .upsert(&mut self.holdings, &quote, quantity)?;
        self.persist_holdings()
    }

    /// Remove a holding outright.
    pub fn remove_holding(&mut self, asset_id: &str) -> Result<(), CoreError> {
        self.portfolio_service.remove(&mut self.holdings, asset_id)?;
        self.persist_holdings()
    }

    // ── Charts ──────────────────────────────────────────────────────

    /// Synthesize a fresh OHLC series for a symbol. Regenerated on every
    /// call, so selecting the same asset twice gives a different walk.
    pub fn chart_series(&mut self, symbol: &str, days: u32) -> Vec<ChartPoint> {
        self.chart_service.generate_series(symbol, days, &mut self.rng)
    }

    /// Compute the drawable scene for a series under the current theme.
    #[must_use]
    pub fn chart_scene(
        &self,
        symbol: &str,
        series: &[ChartPoint],
        viewport: &Viewport,
        style: ChartStyle,
        hover: &HoverState,
    ) -> ChartScene {
        render::chart::build_scene(
            series,
            viewport,
            style,
            self.settings.theme,
            hover,
            symbol.contains('/'),
        )
    }

    // ── Positions ───────────────────────────────────────────────────

    /// Open positions for the footer. Static sample data — there is no
    /// order matching behind these.
    #[must_use]
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    // ── Settings ────────────────────────────────────────────────────

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.settings.theme
    }

    /// Switch themes and persist the choice.
    pub fn set_theme(&mut self, theme: Theme) -> Result<(), CoreError> {
        self.settings.theme = theme;
        self.storage.save_theme(theme)
    }

    // ── Internal ────────────────────────────────────────────────────

    /// Refresh the snapshot fields from live quotes, then write the whole
    /// holdings blob.
    fn persist_holdings(&mut self) -> Result<(), CoreError> {
        self.portfolio_service
            .refresh_snapshots(&mut self.holdings, &self.quotes);
        self.storage.save_holdings(&self.holdings)
    }
}
