// ═══════════════════════════════════════════════════════════════════
// Storage Tests — KeyValueStore impls, StorageManager blobs,
// corruption recovery, persistence across facade restarts
// ═══════════════════════════════════════════════════════════════════

use trade_desk_core::catalog;
use trade_desk_core::models::settings::Theme;
use trade_desk_core::services::auth_service::AuthService;
use trade_desk_core::storage::manager::{StorageManager, HOLDINGS_KEY, SESSION_KEY};
use trade_desk_core::storage::store::{FileStore, KeyValueStore, MemoryStore};
use trade_desk_core::TradeDesk;

// ═══════════════════════════════════════════════════════════════════
//  MemoryStore
// ═══════════════════════════════════════════════════════════════════

mod memory_store {
    use super::*;

    #[test]
    fn set_get_remove() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("k"), None);

        store.set("k", "v").unwrap();
        assert_eq!(store.get("k"), Some("v".to_string()));

        store.remove("k").unwrap();
        assert_eq!(store.get("k"), None);
        // Removing a missing key is fine
        store.remove("k").unwrap();
    }
}

// ═══════════════════════════════════════════════════════════════════
//  FileStore
// ═══════════════════════════════════════════════════════════════════

mod file_store {
    use super::*;

    #[test]
    fn persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("desk.json");

        let mut store = FileStore::open(&path);
        store.set("k", "v").unwrap();
        drop(store);

        let reopened = FileStore::open(&path);
        assert_eq!(reopened.get("k"), Some("v".to_string()));
    }

    #[test]
    fn missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path().join("nope.json"));
        assert_eq!(store.get("k"), None);
    }

    #[test]
    fn corrupt_file_is_empty_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("desk.json");
        std::fs::write(&path, "{not json").unwrap();

        let mut store = FileStore::open(&path);
        assert_eq!(store.get("k"), None);

        // Still writable afterwards
        store.set("k", "v").unwrap();
        let reopened = FileStore::open(&path);
        assert_eq!(reopened.get("k"), Some("v".to_string()));
    }
}

// ═══════════════════════════════════════════════════════════════════
//  StorageManager
// ═══════════════════════════════════════════════════════════════════

mod manager {
    use super::*;

    fn manager() -> StorageManager {
        StorageManager::new(Box::new(MemoryStore::new()))
    }

    #[test]
    fn session_roundtrip_and_clear() {
        let mut manager = manager();
        assert!(manager.load_session().is_none());

        let session = AuthService::new()
            .login("trader@example.com", "secret123")
            .unwrap();
        manager.save_session(&session).unwrap();
        assert_eq!(manager.load_session(), Some(session));

        manager.clear_session().unwrap();
        assert!(manager.load_session().is_none());
    }

    #[test]
    fn holdings_roundtrip() {
        let mut manager = manager();
        let holdings = catalog::default_holdings();

        manager.save_holdings(&holdings).unwrap();
        assert_eq!(manager.load_holdings(), Some(holdings));
    }

    #[test]
    fn theme_roundtrip() {
        let mut manager = manager();
        assert!(manager.load_theme().is_none());

        manager.save_theme(Theme::Light).unwrap();
        assert_eq!(manager.load_theme(), Some(Theme::Light));
    }

    #[test]
    fn corrupt_session_blob_reads_as_absent() {
        let mut store = MemoryStore::new();
        store.set(SESSION_KEY, "{definitely not json").unwrap();

        let mut manager = StorageManager::new(Box::new(store));
        assert!(manager.load_session().is_none());
        // Second read stays absent: the corrupt key was discarded
        assert!(manager.load_session().is_none());
    }

    #[test]
    fn corrupt_holdings_blob_reads_as_absent() {
        let mut store = MemoryStore::new();
        store.set(HOLDINGS_KEY, "[{\"asset_id\": 42}]").unwrap();

        let mut manager = StorageManager::new(Box::new(store));
        assert!(manager.load_holdings().is_none());
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Facade persistence
// ═══════════════════════════════════════════════════════════════════

mod desk_persistence {
    use super::*;

    #[test]
    fn first_run_seeds_and_persists_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("desk.json");

        let desk = TradeDesk::new(Box::new(FileStore::open(&path))).unwrap();
        assert_eq!(desk.holdings().len(), 3);
        drop(desk);

        // The seeded blob is on disk, not regenerated
        let reopened = FileStore::open(&path);
        assert!(reopened.get(HOLDINGS_KEY).is_some());
    }

    #[test]
    fn holdings_edits_survive_restart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("desk.json");

        let mut desk = TradeDesk::new(Box::new(FileStore::open(&path))).unwrap();
        desk.set_holding_quantity("bitcoin", 0.0).unwrap();
        desk.set_holding_quantity("ethereum", 3.5).unwrap();
        drop(desk);

        let desk = TradeDesk::new(Box::new(FileStore::open(&path))).unwrap();
        assert_eq!(desk.holdings().len(), 2);
        assert!(!desk.holdings().iter().any(|h| h.asset_id == "bitcoin"));
        let eth = desk.holdings().iter().find(|h| h.asset_id == "ethereum").unwrap();
        assert_eq!(eth.quantity, 3.5);
    }

    #[test]
    fn session_survives_restart_until_sign_out() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("desk.json");

        let mut desk = TradeDesk::new(Box::new(FileStore::open(&path))).unwrap();
        desk.sign_in("trader@example.com", "secret123").unwrap();
        drop(desk);

        let mut desk = TradeDesk::new(Box::new(FileStore::open(&path))).unwrap();
        assert!(desk.is_authenticated());
        assert_eq!(desk.session().unwrap().email, "trader@example.com");

        desk.sign_out().unwrap();
        drop(desk);

        let desk = TradeDesk::new(Box::new(FileStore::open(&path))).unwrap();
        assert!(!desk.is_authenticated());
    }

    #[test]
    fn theme_survives_restart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("desk.json");

        let mut desk = TradeDesk::new(Box::new(FileStore::open(&path))).unwrap();
        assert_eq!(desk.theme(), Theme::Dark);
        desk.set_theme(Theme::Light).unwrap();
        drop(desk);

        let desk = TradeDesk::new(Box::new(FileStore::open(&path))).unwrap();
        assert_eq!(desk.theme(), Theme::Light);
    }

    #[test]
    fn corrupt_holdings_blob_reseeds_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("desk.json");

        let mut store = FileStore::open(&path);
        store.set(HOLDINGS_KEY, "~~garbage~~").unwrap();
        drop(store);

        let desk = TradeDesk::new(Box::new(FileStore::open(&path))).unwrap();
        assert_eq!(desk.holdings().len(), 3);
    }
}
