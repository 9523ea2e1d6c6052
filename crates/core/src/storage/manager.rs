use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::CoreError;
use crate::models::holding::HoldingEntry;
use crate::models::session::Session;
use crate::models::settings::Theme;
use crate::storage::store::KeyValueStore;

/// Storage key for the session blob.
pub const SESSION_KEY: &str = "gt-trading-user";

/// Storage key for the holdings blob.
pub const HOLDINGS_KEY: &str = "gt-trading-portfolio";

/// Storage key for the theme choice.
pub const THEME_KEY: &str = "gt-trading-theme";

/// High-level persistence over a [`KeyValueStore`].
///
/// Every blob is JSON with no schema version. Mutations rewrite the whole
/// blob; there are no partial writes and no transactions. A malformed blob
/// on read is discarded (key removed) and reported as absent — corruption
/// recovers to defaults, it never surfaces to the user.
pub struct StorageManager {
    store: Box<dyn KeyValueStore>,
}

impl StorageManager {
    #[must_use]
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    // ── Session ─────────────────────────────────────────────────────

    pub fn load_session(&mut self) -> Option<Session> {
        self.load_blob(SESSION_KEY)
    }

    pub fn save_session(&mut self, session: &Session) -> Result<(), CoreError> {
        self.save_blob(SESSION_KEY, session)
    }

    pub fn clear_session(&mut self) -> Result<(), CoreError> {
        self.store.remove(SESSION_KEY)
    }

    // ── Holdings ────────────────────────────────────────────────────

    pub fn load_holdings(&mut self) -> Option<Vec<HoldingEntry>> {
        self.load_blob(HOLDINGS_KEY)
    }

    pub fn save_holdings(&mut self, holdings: &[HoldingEntry]) -> Result<(), CoreError> {
        self.save_blob(HOLDINGS_KEY, &holdings)
    }

    // ── Theme ───────────────────────────────────────────────────────

    pub fn load_theme(&mut self) -> Option<Theme> {
        self.load_blob(THEME_KEY)
    }

    pub fn save_theme(&mut self, theme: Theme) -> Result<(), CoreError> {
        self.save_blob(THEME_KEY, &theme)
    }

    // ── Internal ────────────────────────────────────────────────────

    /// Read and parse one blob. Malformed JSON removes the key and returns
    /// `None`. The caller reinitializes from defaults.
    fn load_blob<T: DeserializeOwned>(&mut self, key: &str) -> Option<T> {
        let raw = self.store.get(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(_) => {
                let _ = self.store.remove(key);
                None
            }
        }
    }

    fn save_blob<T: Serialize>(&mut self, key: &str, value: &T) -> Result<(), CoreError> {
        let json = serde_json::to_string(value)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize {key}: {e}")))?;
        self.store.set(key, &json)
    }
}
