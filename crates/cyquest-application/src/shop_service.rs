//! Shop service implementation.
//!
//! Orchestrates the economy state machine against the persisted
//! documents. State is loaded once at construction (the "page mount")
//! and kept in memory; every successful mutation writes the affected
//! documents back.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{info, warn};

use cyquest_core::economy::{ActiveBooster, EconomyState, EconomyStore, ShopError};
use cyquest_core::error::CyquestError;
use cyquest_core::shop::{ItemCatalog, ShopItem};

/// Errors surfaced by shop operations.
///
/// Domain rejections and storage faults are distinct: rejections leave
/// the persisted state untouched and are rendered as user feedback.
#[derive(Error, Debug)]
pub enum ShopServiceError {
    /// The operation was rejected by the economy rules.
    #[error(transparent)]
    Rejected(#[from] ShopError),

    /// The persistence layer failed.
    #[error(transparent)]
    Storage(#[from] CyquestError),
}

/// A read-only view of the shop state for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopStatus {
    /// Spendable coins.
    pub coins: u64,
    /// Owned item ids in stable order.
    pub owned: Vec<String>,
    /// Equipped cosmetic ids in stable order.
    pub equipped: Vec<String>,
    /// The booster, only while live at the queried instant.
    pub booster: Option<ActiveBooster>,
}

/// Service for the student shop surface.
pub struct ShopService {
    /// Catalog the item ids resolve against.
    catalog: &'static ItemCatalog,
    /// Store for the wallet/inventory/loadout documents.
    store: Arc<dyn EconomyStore>,
    /// In-memory state, loaded at construction.
    state: Mutex<EconomyState>,
}

impl ShopService {
    /// Creates the service, loading the persisted state.
    ///
    /// Missing documents fall back to the fixed defaults (starting
    /// balance, the two free items owned and equipped).
    pub async fn new(
        store: Arc<dyn EconomyStore>,
        catalog: &'static ItemCatalog,
    ) -> Result<Self, CyquestError> {
        let state = EconomyState {
            wallet: store.load_wallet().await?,
            inventory: store.load_inventory().await?,
            loadout: store.load_loadout().await?,
        };

        Ok(Self {
            catalog,
            store,
            state: Mutex::new(state),
        })
    }

    /// The catalog this shop sells from.
    pub fn catalog(&self) -> &ItemCatalog {
        self.catalog
    }

    fn lookup(&self, item_id: &str) -> Result<&ShopItem, ShopError> {
        self.catalog
            .get(item_id)
            .ok_or_else(|| ShopError::UnknownItem(item_id.to_string()))
    }

    /// Purchases an item by id.
    pub async fn purchase(&self, item_id: &str) -> Result<(), ShopServiceError> {
        let item = self.lookup(item_id)?;
        let mut state = self.state.lock().await;

        if let Err(rejection) = state.purchase(item) {
            warn!(item = item_id, %rejection, "purchase rejected");
            return Err(rejection.into());
        }

        // Two independent documents; a torn write between them is
        // accepted demo behavior.
        self.store.save_wallet(&state.wallet).await?;
        self.store.save_inventory(&state.inventory).await?;
        info!(item = item_id, coins = state.wallet.coins, "item purchased");
        Ok(())
    }

    /// Equips an owned item by id.
    pub async fn equip(&self, item_id: &str) -> Result<(), ShopServiceError> {
        self.equip_at(item_id, Utc::now()).await
    }

    /// Equips an owned item, activating boosters relative to `now`.
    pub async fn equip_at(&self, item_id: &str, now: DateTime<Utc>) -> Result<(), ShopServiceError> {
        let item = self.lookup(item_id)?;
        let mut state = self.state.lock().await;

        if let Err(rejection) = state.equip(item, now) {
            warn!(item = item_id, %rejection, "equip rejected");
            return Err(rejection.into());
        }

        self.store.save_loadout(&state.loadout).await?;
        info!(item = item_id, "item equipped");
        Ok(())
    }

    /// Restores the default loadout; ownership and coins are untouched.
    pub async fn reset_to_defaults(&self) -> Result<(), ShopServiceError> {
        let mut state = self.state.lock().await;
        state.reset_to_defaults();
        self.store.save_loadout(&state.loadout).await?;
        info!("loadout reset to defaults");
        Ok(())
    }

    /// Credits mission/reward coins.
    pub async fn credit(&self, amount: u64) -> Result<(), ShopServiceError> {
        let mut state = self.state.lock().await;
        state.wallet.credit(amount);
        self.store.save_wallet(&state.wallet).await?;
        info!(amount, coins = state.wallet.coins, "coins credited");
        Ok(())
    }

    /// A snapshot for rendering, with lazy booster expiry applied.
    pub async fn status(&self) -> ShopStatus {
        self.status_at(Utc::now()).await
    }

    /// A snapshot as of `now`.
    pub async fn status_at(&self, now: DateTime<Utc>) -> ShopStatus {
        let state = self.state.lock().await;
        ShopStatus {
            coins: state.wallet.coins,
            owned: state.inventory.ids().map(str::to_string).collect(),
            equipped: state.loadout.equipped_ids().map(str::to_string).collect(),
            booster: state.loadout.booster_at(now).cloned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use cyquest_core::economy::{Inventory, Loadout, Wallet};
    use cyquest_core::error::Result;
    use cyquest_core::shop::{DEFAULT_CURSOR_ID, DEFAULT_THEME_ID, demo_catalog};
    use std::sync::Mutex as StdMutex;

    // Mock EconomyStore for testing
    #[derive(Default)]
    struct MockEconomyStore {
        wallet: StdMutex<Option<Wallet>>,
        inventory: StdMutex<Option<Inventory>>,
        loadout: StdMutex<Option<Loadout>>,
    }

    #[async_trait::async_trait]
    impl EconomyStore for MockEconomyStore {
        async fn load_wallet(&self) -> Result<Wallet> {
            Ok(self.wallet.lock().unwrap().clone().unwrap_or_default())
        }

        async fn save_wallet(&self, wallet: &Wallet) -> Result<()> {
            *self.wallet.lock().unwrap() = Some(wallet.clone());
            Ok(())
        }

        async fn load_inventory(&self) -> Result<Inventory> {
            Ok(self.inventory.lock().unwrap().clone().unwrap_or_default())
        }

        async fn save_inventory(&self, inventory: &Inventory) -> Result<()> {
            *self.inventory.lock().unwrap() = Some(inventory.clone());
            Ok(())
        }

        async fn load_loadout(&self) -> Result<Loadout> {
            Ok(self.loadout.lock().unwrap().clone().unwrap_or_default())
        }

        async fn save_loadout(&self, loadout: &Loadout) -> Result<()> {
            *self.loadout.lock().unwrap() = Some(loadout.clone());
            Ok(())
        }
    }

    async fn service(store: Arc<MockEconomyStore>) -> ShopService {
        ShopService::new(store, demo_catalog()).await.unwrap()
    }

    fn now() -> DateTime<Utc> {
        "2026-03-01T12:00:00Z".parse().unwrap()
    }

    #[tokio::test]
    async fn test_purchase_persists_wallet_and_inventory() {
        let store = Arc::new(MockEconomyStore::default());
        let shop = service(store.clone()).await;

        shop.purchase("cursor-cyber").await.unwrap();

        let saved_wallet = store.wallet.lock().unwrap().clone().unwrap();
        assert_eq!(saved_wallet.coins, 4600);
        let saved_inventory = store.inventory.lock().unwrap().clone().unwrap();
        assert!(saved_inventory.contains("cursor-cyber"));
    }

    #[tokio::test]
    async fn test_rejected_purchase_persists_nothing() {
        let store = Arc::new(MockEconomyStore::default());
        let shop = service(store.clone()).await;

        let err = shop.purchase("cursor-default").await.unwrap_err();
        assert!(matches!(
            err,
            ShopServiceError::Rejected(ShopError::AlreadyOwned(_))
        ));
        assert!(store.wallet.lock().unwrap().is_none());
        assert!(store.inventory.lock().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_unknown_item_is_rejected() {
        let store = Arc::new(MockEconomyStore::default());
        let shop = service(store).await;

        let err = shop.purchase("cursor-nonexistent").await.unwrap_err();
        assert!(matches!(
            err,
            ShopServiceError::Rejected(ShopError::UnknownItem(_))
        ));
    }

    #[tokio::test]
    async fn test_shop_walkthrough_matches_expected_ledger() {
        let store = Arc::new(MockEconomyStore::default());
        let shop = service(store.clone()).await;

        shop.purchase("cursor-cyber").await.unwrap();
        shop.equip_at("cursor-cyber", now()).await.unwrap();
        shop.purchase("booster-small").await.unwrap();
        shop.equip_at("booster-small", now()).await.unwrap();

        let status = shop.status_at(now()).await;
        assert_eq!(status.coins, 4300);
        assert_eq!(status.equipped, vec!["cursor-cyber", DEFAULT_THEME_ID]);
        let booster = status.booster.unwrap();
        assert!((booster.multiplier - 1.25).abs() < f64::EPSILON);

        shop.reset_to_defaults().await.unwrap();
        let status = shop.status_at(now()).await;
        assert_eq!(status.equipped, vec![DEFAULT_CURSOR_ID, DEFAULT_THEME_ID]);
        assert!(status.booster.is_none());
        assert_eq!(status.coins, 4300);

        // The reset loadout is what got persisted.
        let saved_loadout = store.loadout.lock().unwrap().clone().unwrap();
        assert!(saved_loadout.raw_booster().is_none());
    }

    #[tokio::test]
    async fn test_status_hides_expired_booster() {
        let store = Arc::new(MockEconomyStore::default());
        let shop = service(store).await;

        shop.purchase("booster-small").await.unwrap();
        shop.equip_at("booster-small", now()).await.unwrap();

        let later = now() + Duration::hours(2);
        let status = shop.status_at(later).await;
        assert!(status.booster.is_none());
    }

    #[tokio::test]
    async fn test_credit_adds_coins() {
        let store = Arc::new(MockEconomyStore::default());
        let shop = service(store.clone()).await;

        shop.credit(150).await.unwrap();
        let status = shop.status_at(now()).await;
        assert_eq!(status.coins, 5000);
    }
}
